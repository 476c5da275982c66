//! Ruleset trait definition for the minimax solver.
//!
//! Any Nim-family variant that implements the `Ruleset` trait can be played
//! optimally by the solver. This provides a clean abstraction between the
//! search algorithm and specific rule sets.

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

/// Game-theoretic value of a position, always exactly [`WIN`] or [`LOSS`].
pub type Score = i8;

/// Score of a position won by the maximizing side.
pub const WIN: Score = 1;

/// Score of a position lost by the maximizing side.
pub const LOSS: Score = -1;

/// Marker trait for game positions.
///
/// Positions are immutable values: every move builds a new one. `Eq + Hash`
/// is required so positions can serve as memo-cache keys.
pub trait GameState: Clone + Eq + Hash + Debug {}

/// A single pile of counters.
impl GameState for u32 {}

/// An ordered row of piles. The length is fixed for take-away games and
/// grows by one per move in split games.
impl GameState for Vec<u32> {}

/// Bounds for randomized opening positions.
///
/// These only shape the generated starting state; the solver itself accepts
/// any externally supplied position.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct StartLimits {
    /// Maximum number of piles in a generated opening.
    pub max_piles: usize,
    /// Maximum counters per generated pile.
    pub max_numbers: u32,
}

impl Default for StartLimits {
    fn default() -> Self {
        Self {
            max_piles: 3,
            max_numbers: 15,
        }
    }
}

/// The rule set of one game variant.
///
/// Implement this trait to make a variant playable by the solver. The
/// solver never touches I/O and is a pure function of (state, rule set).
///
/// # Example
/// ```ignore
/// #[derive(Clone)]
/// struct MyNim;
///
/// impl Ruleset for MyNim {
///     type State = Vec<u32>;
///     type Move = TakeMove;
///
///     // ... implement required methods
/// }
/// ```
pub trait Ruleset: Clone {
    /// The type representing a complete game position.
    type State: GameState;

    /// The type describing a human-entered move.
    type Move: Clone + Debug;

    /// Enumerate every legal position reachable in one move.
    ///
    /// The result is finite and deterministic, and never contains `state`
    /// itself: every move strictly transforms the position. An empty vector
    /// means no state-changing move exists.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Report whether `state` is terminal, and if so its score.
    ///
    /// Returns `None` for non-terminal positions. The sign convention is
    /// relative to whichever side is maximizing in the current recursion
    /// frame; terminal conditions and signs differ per variant.
    fn evaluate(&self, state: &Self::State, maximizing: bool) -> Option<Score>;

    /// Validate and apply a human-specified move.
    ///
    /// A failed validation never produces a state; the caller should
    /// re-request the same player's move with the game state unchanged.
    fn apply_human_move(&self, state: &Self::State, mv: &Self::Move)
        -> Result<Self::State, MoveError>;

    /// Draw a randomized opening position within the given limits.
    fn random_start<R: Rng>(&self, limits: &StartLimits, rng: &mut R) -> Self::State;

    /// Human-readable rendering of a position.
    ///
    /// Used for display in the analysis binary.
    fn describe(&self, state: &Self::State) -> String {
        format!("{:?}", state)
    }
}

/// A rejected human move.
///
/// Both variants are recoverable at the turn boundary: the game state is
/// untouched and the same player's move should be requested again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Selected pile index is outside `1..=piles`.
    InvalidPile {
        /// The 1-based pile index the player entered.
        pile: usize,
        /// How many piles the position has.
        piles: usize,
    },
    /// Take or split amount violates the pile's legality rules.
    InvalidNumber {
        /// The amount the player entered.
        amount: u32,
        /// The rule the amount violated.
        rule: NumberRule,
    },
}

/// The specific legality rule an amount violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    /// Amount must be at least 1.
    Positive,
    /// Amount may not exceed this limit.
    AtMost(u32),
    /// Amount may not split a pile of this size into two equal halves.
    NotHalfOf(u32),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidPile { pile, piles } => {
                write!(f, "Pile {} must be in range (1-{})", pile, piles)
            }
            MoveError::InvalidNumber { amount, rule } => match rule {
                NumberRule::Positive => write!(f, "Number {} must be > 0", amount),
                NumberRule::AtMost(limit) => {
                    write!(f, "Number {} must be in range (1-{})", amount, limit)
                }
                NumberRule::NotHalfOf(size) => write!(
                    f,
                    "Number must not be half of that pile ({} / 2 = {})",
                    size, amount
                ),
            },
        }
    }
}

impl std::error::Error for MoveError {}
