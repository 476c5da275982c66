//! Minimax search module.
//!
//! This module provides a generic exhaustive game-tree search for two-player
//! Nim-family games, built from three pieces:
//!
//! 1. The [`Ruleset`] trait — legal-move generation and terminal scoring for
//!    one variant.
//! 2. The [`Solver`] — minimax with alpha-beta pruning and a memo table,
//!    polymorphic over any rule set.
//! 3. [`SearchConfig`] / [`SearchStats`] — pruning control and node
//!    accounting.
//!
//! # Usage
//!
//! To solve a new variant:
//!
//! 1. Implement the `Ruleset` trait for your variant
//! 2. Create a `Solver` with your rules and configuration
//! 3. Call `best_move()` once per turn
//!
//! # Example
//!
//! ```ignore
//! use nim_solver::games::SplitNim;
//! use nim_solver::search::{SearchConfig, Solver};
//!
//! let mut solver = Solver::new(SplitNim::new(), SearchConfig::default());
//! let result = solver.best_move(&vec![9]).unwrap();
//! println!("split to {:?} (score {})", result.state, result.score);
//! ```
//!
//! # Theory
//!
//! Minimax assigns each position the value its mover can force under
//! optimal play; with only two outcomes the value is exactly +1 or -1.
//! Alpha-beta pruning skips successors that provably cannot change a node's
//! value: once `beta <= alpha`, no remaining sibling matters. Pruning never
//! changes the returned score, only the nodes visited, and the memo table
//! keys entries by their search window so bounds computed under one window
//! never answer a query made under another.

pub mod config;
pub mod game;
pub mod solver;
pub mod table;

// Re-export main types for convenient access
pub use config::{SearchConfig, SearchStats};
pub use game::{GameState, MoveError, NumberRule, Ruleset, Score, StartLimits, LOSS, WIN};
pub use solver::{SearchResult, Solver};
pub use table::{CacheKey, ScoreCache};
