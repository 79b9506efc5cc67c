//! The derivation search.
//!
//! For a literal `L`, each rule concluding `L` contributes the cross-merge of
//! the derivations of its body literals, with `L` appended. Body literals are
//! always looked up among rules of both types; only the rules matched against
//! the queried literal depend on the requested [`RuleType`].
//!
//! The recursion over body literals is run on an explicit stack of [`Frame`]s,
//! one per literal currently being proven. That set of literals is the active
//! path, which is what cycles are detected against.

use crate::{
    config::CycleHandling,
    error::{DeriveError, Limit},
    index::RuleIndex,
    Derivation, Index, Literal, Outcome, RuleType,
};
use std::collections::HashSet;

/// One literal being proven.
struct Frame<'a> {
    literal: &'a Literal,
    candidates: &'a [RuleIndex],
    // next entry of `candidates` to start
    next_candidate: usize,
    current: Option<RuleInProgress<'a>>,
    results: Vec<Derivation>,
}

struct RuleInProgress<'a> {
    body: &'a [Literal],
    // next body literal to resolve
    cursor: usize,
    partials: Vec<Derivation>,
}

/// What a frame asks of the search loop after one step.
enum Step<'a> {
    Open(&'a Literal),
    Close,
    Continue,
}

impl<'a> Frame<'a> {
    fn new(literal: &'a Literal, candidates: &'a [RuleIndex]) -> Self {
        Self { literal, candidates, next_candidate: 0, current: None, results: vec![] }
    }

    fn step(&mut self, index: &'a Index) -> Step<'a> {
        let Some(rule) = self.current.as_mut() else {
            return self.start_next_rule(index);
        };
        let body = rule.body;
        if let Some(body_literal) = body.get(rule.cursor) {
            return Step::Open(body_literal);
        }
        // all body literals resolved
        let partials = std::mem::take(&mut rule.partials);
        self.current = None;
        for mut derivation in partials {
            derivation.insert(self.literal.clone());
            self.results.push(derivation);
        }
        Step::Continue
    }

    fn start_next_rule(&mut self, index: &'a Index) -> Step<'a> {
        let Some(&ridx) = self.candidates.get(self.next_candidate) else {
            return Step::Close;
        };
        self.next_candidate += 1;
        let body = index.rules()[ridx].body.as_slice();
        let partials = vec![Derivation::default()];
        self.current = Some(RuleInProgress { body, cursor: 0, partials });
        Step::Continue
    }

    /// Receives the outcome of the body literal under the cursor.
    fn resolve(&mut self, sub_derivations: Option<&[Derivation]>) {
        let Some(rule) = &mut self.current else { return };
        match sub_derivations {
            None => {
                // some body literal is unprovable: the rule contributes nothing
                self.current = None;
            }
            Some(subs) => {
                rule.partials = merge(&rule.partials, subs);
                rule.cursor += 1;
            }
        }
    }
}

/// Every partial extended by every sub-derivation, keeping the literals of the
/// partial first and skipping literals it already contains.
pub fn merge(partials: &[Derivation], subs: &[Derivation]) -> Vec<Derivation> {
    let mut merged: Vec<Derivation> = vec![];
    for partial in partials {
        for sub in subs {
            let mut candidate = partial.clone();
            candidate.extend(sub.iter().cloned());
            if !candidate.is_empty() && !merged.contains(&candidate) {
                merged.push(candidate);
            }
        }
    }
    merged
}

impl Index {
    /// Every derivation of `literal`, with `mode` selecting which rules may
    /// conclude `literal` itself.
    pub fn derive(&self, literal: &Literal, mode: RuleType) -> Result<Outcome, DeriveError> {
        if !literal.is_ground() {
            return Err(DeriveError::NotGroundLiteral { literal: literal.clone() });
        }
        if !self.has_facts() {
            return Ok(Outcome::Unprovable);
        }
        let Some(candidates) = self.rule_indices(literal, mode) else {
            return Ok(Outcome::Unprovable);
        };
        let res = self.search(literal, candidates).map(Outcome::Provable);
        if let Err(err) = &res {
            tracing::debug!(?literal, %err, "derivation search stopped");
        }
        res
    }

    pub fn derive_defeasible(&self, literal: &Literal) -> Result<Outcome, DeriveError> {
        self.derive(literal, RuleType::Defeasible)
    }

    fn search<'a>(
        &'a self,
        root: &'a Literal,
        candidates: &'a [RuleIndex],
    ) -> Result<Vec<Derivation>, DeriveError> {
        let config = self.config();
        let mut stack = vec![Frame::new(root, candidates)];
        let mut active: HashSet<&Literal> = HashSet::from([root]);
        let mut steps = 1;
        loop {
            let Some(frame) = stack.last_mut() else {
                unreachable!("the root frame returns before the stack empties");
            };
            match frame.step(self) {
                Step::Continue => {}
                Step::Close => {
                    let Some(done) = stack.pop() else { unreachable!() };
                    active.remove(done.literal);
                    let derivations = done.results.len();
                    tracing::trace!(literal = ?done.literal, derivations, "closed");
                    match stack.last_mut() {
                        Some(parent) => parent.resolve(Some(&done.results)),
                        None => return Ok(done.results),
                    }
                }
                Step::Open(literal) => {
                    if !literal.is_ground() {
                        return Err(DeriveError::NotGroundLiteral { literal: literal.clone() });
                    }
                    if active.contains(literal) {
                        match config.cycles {
                            CycleHandling::Reject => {
                                return Err(DeriveError::Cycle { literal: literal.clone() })
                            }
                            CycleHandling::Prune => {
                                frame.resolve(None);
                                continue;
                            }
                        }
                    }
                    let Some(candidates) = self.rule_indices(literal, RuleType::Defeasible) else {
                        frame.resolve(None);
                        continue;
                    };
                    if stack.len() >= config.max_depth {
                        let max = config.max_depth;
                        return Err(DeriveError::BudgetExceeded { limit: Limit::Depth, max });
                    }
                    if steps >= config.max_steps {
                        let max = config.max_steps;
                        return Err(DeriveError::BudgetExceeded { limit: Limit::Steps, max });
                    }
                    steps += 1;
                    tracing::trace!(?literal, depth = stack.len(), "opened");
                    active.insert(literal);
                    stack.push(Frame::new(literal, candidates));
                }
            }
        }
    }
}
