//! Split-Nim: break one pile into two unequal parts per turn.
//!
//! ## Game Rules
//!
//! - Piles hold at least one counter each; a move replaces one pile of size
//!   `n` with two piles `(n - take, take)` where both parts are positive and
//!   unequal. Splitting a pile into exact halves is illegal.
//! - The game ends when every pile holds 1 or 2 counters (nothing can be
//!   split further); the side to move at that point scores -1. The mover who
//!   produced the unsplittable board is the one who benefits.
//!
//! Counters are never removed, so the total stays constant while the pile
//! count strictly grows, bounding game length by the starting total.

use rand::Rng;

use crate::search::game::{MoveError, NumberRule, Ruleset, Score, StartLimits, LOSS, WIN};

/// A human move: break `take` counters off pile `pile` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMove {
    /// 1-based pile index.
    pub pile: usize,
    /// Size of the piece broken off; the remainder stays in place first.
    pub take: u32,
}

/// Split-only Nim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitNim;

impl SplitNim {
    /// Create the rule set.
    pub fn new() -> Self {
        Self
    }
}

/// Replace pile `pile` with `(counters - take, take)` in a fresh state.
fn split_at(state: &[u32], pile: usize, take: u32) -> Vec<u32> {
    let counters = state[pile];
    let mut successor = Vec::with_capacity(state.len() + 1);
    successor.extend_from_slice(&state[..pile]);
    successor.push(counters - take);
    successor.push(take);
    successor.extend_from_slice(&state[pile + 1..]);
    successor
}

impl Ruleset for SplitNim {
    type State = Vec<u32>;
    type Move = SplitMove;

    fn successors(&self, state: &Vec<u32>) -> Vec<Vec<u32>> {
        let mut states = Vec::new();
        for (pile, &counters) in state.iter().enumerate() {
            // Taking less than half keeps the parts unequal; exact halves
            // are excluded by the exclusive upper bound.
            for take in 1..(counters + 1) / 2 {
                states.push(split_at(state, pile, take));
            }
        }
        states
    }

    fn evaluate(&self, state: &Vec<u32>, maximizing: bool) -> Option<Score> {
        if state.iter().all(|&counters| counters == 1 || counters == 2) {
            Some(if maximizing { LOSS } else { WIN })
        } else {
            None
        }
    }

    fn apply_human_move(&self, state: &Vec<u32>, mv: &SplitMove) -> Result<Vec<u32>, MoveError> {
        if mv.pile == 0 || mv.pile > state.len() {
            return Err(MoveError::InvalidPile {
                pile: mv.pile,
                piles: state.len(),
            });
        }
        let counters = state[mv.pile - 1];
        if mv.take == 0 {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::Positive,
            });
        }
        // Both parts must keep at least one counter.
        if mv.take >= counters {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::AtMost(counters.saturating_sub(1)),
            });
        }
        if mv.take * 2 == counters {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::NotHalfOf(counters),
            });
        }
        Ok(split_at(state, mv.pile - 1, mv.take))
    }

    fn random_start<R: Rng>(&self, limits: &StartLimits, rng: &mut R) -> Vec<u32> {
        vec![rng.gen_range(5..=limits.max_numbers)]
    }
}
