//! Rule-set implementations for the minimax solver.
//!
//! This module contains the four playable Nim variants. They serve as:
//!
//! 1. **Validation**: small games with known optimal play verify the search
//!    engine end to end.
//!
//! 2. **Examples**: demonstrate how to implement the `Ruleset` trait for new
//!    variants.
//!
//! ## Available Variants
//!
//! - [`simple`]: single pile, take 1-3 counters per turn
//! - [`takeaway`]: multiple piles, take any amount from one pile — regular
//!   and misère scoring share one rule set with an injected sign
//! - [`split`]: break one pile into two unequal parts per turn
//!
//! ## Adding New Variants
//!
//! To add a new variant:
//!
//! 1. Create a new module under `src/games/`
//! 2. Define the state and move types
//! 3. Implement the `Ruleset` trait
//! 4. Add tests that verify successor sets and terminal scoring
//!
//! See the [`takeaway`] module for a complete example.

pub mod simple;
pub mod split;
pub mod takeaway;

pub use simple::{SimpleMove, SimpleNim, MAX_TAKE};
pub use split::{SplitMove, SplitNim};
pub use takeaway::{Scoring, TakeMove, TakeawayNim};
