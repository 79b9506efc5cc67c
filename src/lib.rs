//! Derivation search for defeasible logic programs.
//!
//! A ground [`Program`] of strict and defeasible [`Rule`]s is loaded into an
//! [`Index`] once; [`Index::derive`] then enumerates every distinct
//! [`Derivation`] of a ground [`Literal`]: the sub-conclusions used, followed
//! by the literal itself.

pub mod config;
pub mod debug;
pub mod derive;
pub mod error;
pub mod index;
pub mod lang_misc;
pub mod parse;
pub mod preprocess;
pub mod text;
pub mod util;


pub use config::{Config, CycleHandling, DEFAULT_CONFIG};
pub use error::{DeriveError, Limit, ParseError};
pub use index::{Index, RuleIndex};
use text::Text;
use util::VecSet;

#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone)]
pub enum Term {
    Constant(Text),
    Variable(Text),
}

/// Predicate applied to arguments. Strong negation is part of the identity.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone)]
pub struct Literal {
    pub predicate: Text,
    pub args: Vec<Term>,
    pub negated: bool,
}

#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy, Default)]
pub enum RuleType {
    Strict,
    #[default]
    Defeasible,
}

#[derive(Hash, Eq, PartialEq, Clone)]
pub struct Rule {
    pub head: Literal,
    // empty for facts
    pub body: Vec<Literal>,
    pub kind: RuleType,
}

#[derive(PartialEq, Eq, Clone, Default)]
pub struct Program {
    pub rules: Vec<Rule>,
}

/// One proof: each literal used exactly once, in first-discovered order,
/// ending with the proven literal.
pub type Derivation = VecSet<Literal>;

#[derive(PartialEq, Eq, Clone)]
pub enum Outcome {
    /// No fact in the program, or no rule in the selected view concludes the literal.
    Unprovable,
    /// Concluding rules exist. Empty if none of them completed.
    Provable(Vec<Derivation>),
}

impl Outcome {
    pub fn is_provable(&self) -> bool {
        matches!(self, Self::Provable(_))
    }
    pub fn derivations(&self) -> Option<&[Derivation]> {
        match self {
            Self::Unprovable => None,
            Self::Provable(derivations) => Some(derivations),
        }
    }
    /// Number of derivations; zero for both `Unprovable` and `Provable([])`.
    pub fn len(&self) -> usize {
        self.derivations().map_or(0, <[_]>::len)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn into_derivations(self) -> Option<Vec<Derivation>> {
        match self {
            Self::Unprovable => None,
            Self::Provable(derivations) => Some(derivations),
        }
    }
}
