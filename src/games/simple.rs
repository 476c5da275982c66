//! Single-pile Nim with takes of one to three counters.
//!
//! ## Game Rules
//!
//! - One pile of counters; players alternate taking 1, 2 or 3.
//! - The player left facing the empty pile wins: emptying the pile scores
//!   against the mover who emptied it.
//!
//! The small fixed take menu keeps the branching factor at three, which
//! makes this the cheapest variant to search and a good smoke test for the
//! solver.

use rand::Rng;

use crate::search::game::{MoveError, NumberRule, Ruleset, Score, StartLimits, LOSS, WIN};

/// Largest number of counters a single take may remove.
pub const MAX_TAKE: u32 = 3;

/// A human move: take `take` counters from the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMove {
    /// Counters to remove, 1..=3 and at most the pile size.
    pub take: u32,
}

/// Single-pile take-away Nim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNim;

impl SimpleNim {
    /// Create the rule set.
    pub fn new() -> Self {
        Self
    }
}

impl Ruleset for SimpleNim {
    type State = u32;
    type Move = SimpleMove;

    fn successors(&self, state: &u32) -> Vec<u32> {
        (1..=MAX_TAKE)
            .filter(|take| take <= state)
            .map(|take| state - take)
            .collect()
    }

    fn evaluate(&self, state: &u32, maximizing: bool) -> Option<Score> {
        if *state == 0 {
            Some(if maximizing { WIN } else { LOSS })
        } else {
            None
        }
    }

    fn apply_human_move(&self, state: &u32, mv: &SimpleMove) -> Result<u32, MoveError> {
        if mv.take == 0 {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::Positive,
            });
        }
        let limit = MAX_TAKE.min(*state);
        if mv.take > limit {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::AtMost(limit),
            });
        }
        Ok(state - mv.take)
    }

    fn random_start<R: Rng>(&self, limits: &StartLimits, rng: &mut R) -> u32 {
        rng.gen_range(5..=limits.max_numbers)
    }

    fn describe(&self, state: &u32) -> String {
        format!("{}", state)
    }
}
