use crate::Literal;
use std::fmt;
use thiserror::Error;

/// Which search bound was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Depth,
    Steps,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth => write!(f, "depth"),
            Self::Steps => write!(f, "steps"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// The caller asked about a literal with variables.
    #[error("ground literal expected, but `{literal:?}` found")]
    NotGroundLiteral { literal: Literal },

    /// Proving `literal` requires proving `literal` first.
    #[error("cyclic dependency: `{literal:?}` is needed to derive itself")]
    Cycle { literal: Literal },

    #[error("derivation search exceeded its {limit} budget of {max}")]
    BudgetExceeded { limit: Limit, max: usize },
}

impl DeriveError {
    /// Caller error; asking again with the same literal fails the same way.
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::NotGroundLiteral { .. })
    }
    /// The search was stopped rather than completed.
    pub const fn is_termination(&self) -> bool {
        matches!(self, Self::Cycle { .. } | Self::BudgetExceeded { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error at {line}:{column}: expected {context}")]
    Syntax { line: usize, column: usize, context: String },

    #[error("unparsed input: {rest:?}")]
    Trailing { rest: String },
}
