/// What the engine does when a literal is reached again while still being proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleHandling {
    /// Fail the query with [`DeriveError::Cycle`](crate::DeriveError::Cycle).
    #[default]
    Reject,
    /// Treat the literal as unprovable on that path only, abandoning the rule
    /// that reached it.
    Prune,
}

/// Bounds on a single [`Index::derive`](crate::Index::derive) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Frames alive at once, i.e. the depth of the proof tree.
    pub max_depth: usize,
    /// Frames opened over the whole query.
    pub max_steps: usize,
    pub cycles: CycleHandling,
}

pub const DEFAULT_CONFIG: Config =
    Config { max_depth: 1024, max_steps: 1_000_000, cycles: CycleHandling::Reject };

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl Config {
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }
    pub fn with_cycles(self, cycles: CycleHandling) -> Self {
        Self { cycles, ..self }
    }
}
