use crate::{text::Text, util::VecSet, *};

impl Term {
    pub fn constant(s: &str) -> Self {
        Self::Constant(Text::from_str(s))
    }
    pub fn variable(s: &str) -> Self {
        Self::Variable(Text::from_str(s))
    }
    pub fn is_ground(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Variable(_) => false,
        }
    }
}

impl Literal {
    pub fn new(predicate: &str, args: impl IntoIterator<Item = Term>) -> Self {
        let args = args.into_iter().collect();
        Self { predicate: Text::from_str(predicate), args, negated: false }
    }
    /// Zero-arity literal, e.g. `rains`.
    pub fn proposition(predicate: &str) -> Self {
        Self::new(predicate, Vec::new())
    }
    /// Literal over constants only, e.g. `ground("bird", &["tina"])`.
    pub fn ground(predicate: &str, constants: &[&str]) -> Self {
        Self::new(predicate, constants.iter().map(|c| Term::constant(c)))
    }
    /// The complementary literal: same predicate and arguments, opposite sign.
    pub fn negated(&self) -> Self {
        Self { negated: !self.negated, ..self.clone() }
    }
    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }
    /// Orders by spelling rather than by interning order.
    fn spelling_key(&self) -> (String, Vec<String>, bool) {
        let spell = |text: Text| text.with_str(str::to_owned);
        let args = self
            .args
            .iter()
            .map(|arg| match arg {
                Term::Constant(text) | Term::Variable(text) => spell(*text),
            })
            .collect();
        (spell(self.predicate), args, self.negated)
    }
}

impl Rule {
    pub fn fact(head: Literal) -> Self {
        Self { head, body: vec![], kind: RuleType::Strict }
    }
    pub fn strict(head: Literal, body: impl IntoIterator<Item = Literal>) -> Self {
        Self { head, body: body.into_iter().collect(), kind: RuleType::Strict }
    }
    pub fn defeasible(head: Literal, body: impl IntoIterator<Item = Literal>) -> Self {
        Self { head, body: body.into_iter().collect(), kind: RuleType::Defeasible }
    }
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }
    pub fn is_strict(&self) -> bool {
        self.kind == RuleType::Strict
    }
    pub fn is_ground(&self) -> bool {
        self.literals().all(Literal::is_ground)
    }
    /// Head first, then the body in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        std::iter::once(&self.head).chain(self.body.iter())
    }
}

impl Program {
    pub fn is_ground(&self) -> bool {
        self.rules.iter().all(Rule::is_ground)
    }
    pub fn non_ground_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| !rule.is_ground())
    }
    pub fn facts(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| rule.is_fact())
    }
    /// Every literal mentioned anywhere in the program, in order of first appearance.
    pub fn literals(&self) -> VecSet<Literal> {
        self.rules.iter().flat_map(Rule::literals).cloned().collect()
    }
    /// [`Program::literals`] sorted by predicate, then arguments, with a
    /// literal before its negation.
    pub fn sorted_literals(&self) -> Vec<Literal> {
        let mut literals = self.literals().into_vec();
        literals.sort_by_cached_key(Literal::spelling_key);
        literals
    }
}

impl FromIterator<Rule> for Program {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}
