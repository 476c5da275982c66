//! Memoization table for resolved position scores.
//!
//! The table is owned by a single solver instance and lives for at most one
//! game session. The reachable state space per game is bounded (counters
//! only shrink, or pile counts only grow from a bounded total), so the table
//! never evicts; `clear` resets it between independent games.

use rustc_hash::FxHashMap;

use crate::search::game::{GameState, Score};

/// Cache key for one fully resolved search node.
///
/// The alpha-beta window is part of the key: a value computed under one
/// window is only a bound under another, so entries from different call
/// sites must not collide. With pruning disabled the window is constant and
/// the key degenerates to (state, maximizing).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey<S: GameState> {
    /// The position that was evaluated.
    pub state: S,
    /// Whether the maximizing side was to move.
    pub maximizing: bool,
    /// Lower search bound at entry.
    pub alpha: Score,
    /// Upper search bound at entry.
    pub beta: Score,
}

/// Map from search nodes to their resolved scores.
#[derive(Debug, Clone)]
pub struct ScoreCache<S: GameState> {
    entries: FxHashMap<CacheKey<S>, Score>,
}

impl<S: GameState> Default for ScoreCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> ScoreCache<S> {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Look up a previously resolved score.
    pub fn get(&self, key: &CacheKey<S>) -> Option<Score> {
        self.entries.get(key).copied()
    }

    /// Store a fully resolved score. Partial bounds must never be stored.
    pub fn insert(&mut self, key: CacheKey<S>, score: Score) {
        self.entries.insert(key, score);
    }

    /// Number of resolved nodes stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, e.g. between independent games.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::game::{LOSS, WIN};

    fn key(state: u32, maximizing: bool) -> CacheKey<u32> {
        CacheKey {
            state,
            maximizing,
            alpha: LOSS,
            beta: WIN,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache: ScoreCache<u32> = ScoreCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&key(4, true)), None);

        cache.insert(key(4, true), WIN);
        assert_eq!(cache.get(&key(4, true)), Some(WIN));
        // Same state, other side to move: separate entry.
        assert_eq!(cache.get(&key(4, false)), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_window_is_part_of_key() {
        let mut cache: ScoreCache<u32> = ScoreCache::new();
        let narrow = CacheKey {
            state: 7,
            maximizing: true,
            alpha: WIN,
            beta: WIN,
        };
        cache.insert(key(7, true), LOSS);
        assert_eq!(cache.get(&narrow), None);
    }

    #[test]
    fn test_clear() {
        let mut cache: ScoreCache<u32> = ScoreCache::new();
        cache.insert(key(1, false), LOSS);
        cache.clear();
        assert!(cache.is_empty());
    }
}
