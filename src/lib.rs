//! # Nim Solver
//!
//! An optimal-play engine for two-player Nim-family games: exhaustive
//! minimax search with alpha-beta pruning and result memoization, generic
//! over four rule sets.
//!
//! ## Features
//!
//! - **Generic Search Engine**: works with any variant implementing the
//!   `Ruleset` trait
//! - **Four Variants**: single-pile, regular, misère, and split Nim
//! - **Exact Scores**: every position resolves to +1 or -1, never a
//!   heuristic estimate
//! - **Verifiable Pruning**: the same routine runs with pruning disabled so
//!   tests can prove cutoffs never change a score
//!
//! ## Quick Start
//!
//! ```ignore
//! use nim_solver::games::TakeawayNim;
//! use nim_solver::search::{SearchConfig, Solver};
//!
//! // 1. Pick a rule set
//! let rules = TakeawayNim::misere();
//!
//! // 2. Create a solver
//! let mut solver = Solver::new(rules, SearchConfig::default());
//!
//! // 3. Ask for the best move, once per turn
//! let result = solver.best_move(&vec![3, 5, 7]).unwrap();
//! println!("leave {:?} (score {})", result.state, result.score);
//! ```
//!
//! ## Modules
//!
//! - [`search`]: the variant-agnostic minimax engine
//! - [`games`]: the four rule sets
//! - [`play`]: players, turn execution and display helpers for the caller's
//!   game loop
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Minimax Solver (Generic)                    │
//! │  - Alpha-beta pruning     - Memoized exact scores               │
//! │  - Deterministic ties     - Pruning on/off for verification     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements Ruleset trait
//!                               ▼
//!      ┌──────────────┬─────────┴───────┬──────────────┐
//!      │              │                 │              │
//!      ▼              ▼                 ▼              ▼
//! ┌─────────┐   ┌──────────┐      ┌──────────┐   ┌─────────┐
//! │ Simple  │   │ Regular  │      │  Misère  │   │  Split  │
//! │  (pile) │   │ (piles)  │      │ (piles)  │   │ (piles) │
//! └─────────┘   └──────────┘      └──────────┘   └─────────┘
//! ```

#![warn(missing_docs)]

/// Minimax search module.
///
/// This is the core module containing the generic search engine.
pub mod search;

/// Rule-set implementations module.
///
/// Contains the four playable Nim variants.
pub mod games;

/// Players and turn execution.
///
/// The thin contract the external game loop drives.
pub mod play;

// Re-export commonly used types at crate root for convenience
pub use play::{execute_turn, Player, PlayerKind, PlayerOrder};
pub use search::{
    GameState, MoveError, Ruleset, Score, SearchConfig, SearchResult, SearchStats, Solver,
    StartLimits, LOSS, WIN,
};
