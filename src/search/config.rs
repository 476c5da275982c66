//! Configuration and statistics for the minimax solver.

use serde::{Deserialize, Serialize};

/// Configuration for the solver.
///
/// # Example
/// ```
/// use nim_solver::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert!(config.prune); // alpha-beta pruning is enabled by default
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Apply alpha-beta cutoffs while searching.
    ///
    /// Pruning never changes the returned score, only the number of nodes
    /// visited. Disable it only to cross-check results against the
    /// exhaustive search in tests.
    pub prune: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { prune: true }
    }
}

impl SearchConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config for exhaustive (unpruned) minimax.
    ///
    /// Used to verify that pruning preserves scores.
    pub fn exhaustive() -> Self {
        Self { prune: false }
    }

    /// Builder method: set whether to prune.
    pub fn with_pruning(mut self, enable: bool) -> Self {
        self.prune = enable;
        self
    }
}

/// Counters tracked across searches by one solver instance.
///
/// Reset together with the memo cache via `Solver::reset`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes expanded (terminal and cached nodes excluded).
    pub nodes_visited: u64,

    /// Lookups answered from the memo cache.
    pub cache_hits: u64,

    /// Successor loops cut short by an alpha-beta cutoff.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }
}
