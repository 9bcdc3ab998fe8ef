use std::fmt;

/// How `can_all_with` walks its items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved evaluation settings, usually produced by `kontrol-settings`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPolicy {
    pub profile: String,
    pub strategy: Strategy,
    /// Below this many items the parallel strategy still runs sequentially.
    pub parallel_min_items: usize,
}

impl EvaluationPolicy {
    pub const DEFAULT_PARALLEL_MIN_ITEMS: usize = 32;

    pub fn sequential() -> Self {
        Self {
            profile: "sequential".to_string(),
            strategy: Strategy::Sequential,
            parallel_min_items: Self::DEFAULT_PARALLEL_MIN_ITEMS,
        }
    }

    pub fn parallel(parallel_min_items: usize) -> Self {
        Self {
            profile: "parallel".to_string(),
            strategy: Strategy::Parallel,
            parallel_min_items: parallel_min_items.max(1),
        }
    }

    /// Strategy actually used for `items` inputs.
    pub fn strategy_for(&self, items: usize) -> Strategy {
        match self.strategy {
            Strategy::Parallel if items >= self.parallel_min_items => Strategy::Parallel,
            _ => Strategy::Sequential,
        }
    }
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self::sequential()
    }
}
