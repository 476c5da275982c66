//! Players and turn execution.
//!
//! The game loop proper (prompting, printing, alternation) lives outside the
//! library; this module provides the pieces it drives: a [`Player`] identity,
//! [`execute_turn`] to apply one move for either controller kind, and the
//! element-wise [`diff_piles`] helper for displaying what a turn took.
//!
//! Turn failures are recoverable by design: a rejected human move never
//! touches the game state, and the caller simply re-requests the same
//! player's move.

use std::fmt;

use crate::search::game::{MoveError, Ruleset};
use crate::search::solver::Solver;

/// Who controls a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are entered by a person and validated against the rule set.
    Human,
    /// Moves are chosen by the search engine.
    Ai,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Ai => write!(f, "AI"),
        }
    }
}

/// Move order of a player within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOrder {
    /// Moves first.
    First,
    /// Moves second.
    Second,
}

/// A player identity: move order plus controller kind.
///
/// Stateless beyond these two attributes; players never own game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Whether this player moves first or second.
    pub order: PlayerOrder,
    /// Who chooses this player's moves.
    pub kind: PlayerKind,
}

impl Player {
    /// The player who moves first.
    pub fn first(kind: PlayerKind) -> Self {
        Self {
            order: PlayerOrder::First,
            kind,
        }
    }

    /// The player who moves second.
    pub fn second(kind: PlayerKind) -> Self {
        Self {
            order: PlayerOrder::Second,
            kind,
        }
    }

    /// Whether this player's moves come from a person.
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.order {
            PlayerOrder::First => 1,
            PlayerOrder::Second => 2,
        };
        write!(f, "Player {} ({})", order, self.kind)
    }
}

/// Execute one turn for `player`, branching on controller kind.
///
/// - Human: validates and applies `entered`; an `Err` leaves the game state
///   untouched so the caller can re-prompt. Calling a human turn without an
///   entered move is a caller bug and panics.
/// - AI: delegates to the solver's `best_move`. Asking the engine to move in
///   a finished position is likewise a caller bug and panics.
pub fn execute_turn<R: Ruleset>(
    solver: &mut Solver<R>,
    state: &R::State,
    player: &Player,
    entered: Option<&R::Move>,
) -> Result<R::State, MoveError> {
    if player.is_human() {
        let mv = entered.expect("human turn executed without an entered move");
        solver.rules().apply_human_move(state, mv)
    } else {
        let result = solver
            .best_move(state)
            .expect("engine asked to move in a finished position");
        Ok(result.state)
    }
}

/// Element-wise counters removed between two same-length positions.
///
/// Comparing positions of different pile counts is a caller bug (mixing
/// variants or comparing across a split), so it panics rather than erroring.
pub fn diff_piles(before: &[u32], after: &[u32]) -> Vec<u32> {
    assert_eq!(
        before.len(),
        after.len(),
        "pile count mismatch ({} vs {})",
        before.len(),
        after.len()
    );
    before
        .iter()
        .zip(after.iter())
        .map(|(b, a)| b - a)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{TakeMove, TakeawayNim};
    use crate::search::{SearchConfig, Solver};

    #[test]
    fn test_player_display() {
        assert_eq!(Player::first(PlayerKind::Human).to_string(), "Player 1 (Human)");
        assert_eq!(Player::second(PlayerKind::Ai).to_string(), "Player 2 (AI)");
    }

    #[test]
    fn test_human_turn_applies_entered_move() {
        let mut solver = Solver::new(TakeawayNim::regular(), SearchConfig::default());
        let player = Player::first(PlayerKind::Human);
        let state = vec![3, 2];

        let next = execute_turn(&mut solver, &state, &player, Some(&TakeMove { pile: 1, take: 2 }));
        assert_eq!(next, Ok(vec![1, 2]));
    }

    #[test]
    fn test_human_turn_failure_is_recoverable() {
        let mut solver = Solver::new(TakeawayNim::regular(), SearchConfig::default());
        let player = Player::second(PlayerKind::Human);
        let state = vec![3, 2];

        let result = execute_turn(&mut solver, &state, &player, Some(&TakeMove { pile: 9, take: 1 }));
        assert!(result.is_err());
        // The original state is untouched and still playable.
        assert_eq!(state, vec![3, 2]);
        let retry = execute_turn(&mut solver, &state, &player, Some(&TakeMove { pile: 2, take: 1 }));
        assert_eq!(retry, Ok(vec![3, 1]));
    }

    #[test]
    fn test_ai_turn_returns_a_legal_successor() {
        let mut solver = Solver::new(TakeawayNim::regular(), SearchConfig::default());
        let player = Player::first(PlayerKind::Ai);
        let state = vec![2, 1];

        let next = execute_turn(&mut solver, &state, &player, None).unwrap();
        assert!(solver.rules().successors(&state).contains(&next));
    }

    #[test]
    fn test_diff_piles() {
        assert_eq!(diff_piles(&[3, 2], &[1, 2]), vec![2, 0]);
        assert_eq!(diff_piles(&[5], &[0]), vec![5]);
    }

    #[test]
    #[should_panic(expected = "pile count mismatch")]
    fn test_diff_piles_length_mismatch_panics() {
        diff_piles(&[3, 2], &[1]);
    }
}
