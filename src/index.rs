use crate::{config::Config, util::VecSet, Literal, Program, Rule, RuleType};
use std::collections::HashMap;

/// Position of a rule in [`Index::rules`].
pub type RuleIndex = usize;

/// Immutable view of a ground program keyed by rule head.
///
/// Rules keep the order in which they were first given, duplicates dropped.
/// Both head views list positions in ascending order, which fixes the order
/// in which [`Index::derive`] reports derivations.
#[derive(Debug)]
pub struct Index {
    rules: VecSet<Rule>,
    facts: Vec<RuleIndex>,
    by_head_any: HashMap<Literal, Vec<RuleIndex>>,
    // subsequence of `by_head_any` for the same head
    by_head_strict: HashMap<Literal, Vec<RuleIndex>>,
    config: Config,
}

impl Index {
    /// Indexes `rules`, which are assumed to be ground.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self::with_config(rules, Config::default())
    }

    pub fn with_config(rules: impl IntoIterator<Item = Rule>, config: Config) -> Self {
        let rules: VecSet<Rule> = rules.into_iter().collect();
        let mut facts = vec![];
        let mut by_head_any = HashMap::<Literal, Vec<RuleIndex>>::default();
        let mut by_head_strict = HashMap::<Literal, Vec<RuleIndex>>::default();
        for (ridx, rule) in rules.iter().enumerate() {
            if rule.is_fact() {
                facts.push(ridx);
            }
            by_head_any.entry(rule.head.clone()).or_default().push(ridx);
            if let RuleType::Strict = rule.kind {
                by_head_strict.entry(rule.head.clone()).or_default().push(ridx);
            }
        }
        tracing::debug!(
            rules = rules.len(),
            facts = facts.len(),
            heads = by_head_any.len(),
            strict_heads = by_head_strict.len(),
            "built derivation index"
        );
        Self { rules, facts, by_head_any, by_head_strict, config }
    }

    pub fn rules(&self) -> &[Rule] {
        self.rules.as_slice()
    }

    pub fn facts(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.facts.iter().map(move |&ridx| &self.rules.as_slice()[ridx])
    }

    pub fn has_facts(&self) -> bool {
        !self.facts.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Positions of the rules concluding `literal` in the view selected by `mode`,
    /// or `None` if that view has no such rule.
    pub fn rule_indices(&self, literal: &Literal, mode: RuleType) -> Option<&[RuleIndex]> {
        let view = match mode {
            RuleType::Defeasible => &self.by_head_any,
            RuleType::Strict => &self.by_head_strict,
        };
        view.get(literal).map(Vec::as_slice)
    }

    pub fn rules_for(
        &self,
        literal: &Literal,
        mode: RuleType,
    ) -> impl Iterator<Item = &Rule> + '_ {
        self.rule_indices(literal, mode)
            .unwrap_or_default()
            .iter()
            .map(move |&ridx| &self.rules.as_slice()[ridx])
    }
}

impl From<Program> for Index {
    fn from(program: Program) -> Self {
        Self::new(program.rules)
    }
}
