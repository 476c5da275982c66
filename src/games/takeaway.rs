//! Multi-pile take-away Nim, in regular and misère flavors.
//!
//! ## Game Rules
//!
//! - Several piles of counters; a move removes any positive number of
//!   counters from exactly one pile.
//! - Regular scoring: the mover who empties the board scores -1 (the
//!   opponent, facing the empty board, gets +1).
//! - Misère scoring inverts the sign on the same terminal condition.
//!
//! Both flavors share state shape, move generation and human-move
//! validation; only the terminal sign differs, so the scoring policy is a
//! small injected value rather than a second rule set.

use rand::Rng;

use crate::search::game::{MoveError, NumberRule, Ruleset, Score, StartLimits, LOSS, WIN};

/// Terminal-scoring policy for the all-piles-empty position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// The side to move at the empty board scores +1.
    Normal,
    /// The side to move at the empty board scores -1.
    Misere,
}

/// A human move: take `take` counters from pile `pile` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeMove {
    /// 1-based pile index.
    pub pile: usize,
    /// Counters to remove, 1..=pile size.
    pub take: u32,
}

/// Multi-pile take-away Nim with a pluggable terminal sign.
#[derive(Debug, Clone, Copy)]
pub struct TakeawayNim {
    scoring: Scoring,
}

impl TakeawayNim {
    /// Regular (normal-sign) rule set.
    pub fn regular() -> Self {
        Self {
            scoring: Scoring::Normal,
        }
    }

    /// Misère rule set: identical moves, inverted terminal sign.
    pub fn misere() -> Self {
        Self {
            scoring: Scoring::Misere,
        }
    }

    /// The terminal-scoring policy in use.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }
}

impl Ruleset for TakeawayNim {
    type State = Vec<u32>;
    type Move = TakeMove;

    fn successors(&self, state: &Vec<u32>) -> Vec<Vec<u32>> {
        let mut states = Vec::new();
        for (pile, &counters) in state.iter().enumerate() {
            for remain in 0..counters {
                let mut successor = state.clone();
                successor[pile] = remain;
                states.push(successor);
            }
        }
        states
    }

    fn evaluate(&self, state: &Vec<u32>, maximizing: bool) -> Option<Score> {
        if state.iter().all(|&counters| counters == 0) {
            let sign = match self.scoring {
                Scoring::Normal => WIN,
                Scoring::Misere => LOSS,
            };
            Some(if maximizing { sign } else { -sign })
        } else {
            None
        }
    }

    fn apply_human_move(&self, state: &Vec<u32>, mv: &TakeMove) -> Result<Vec<u32>, MoveError> {
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
        if mv.take > counters {
            return Err(MoveError::InvalidNumber {
                amount: mv.take,
                rule: NumberRule::AtMost(counters),
            });
        }
        let mut successor = state.clone();
        successor[mv.pile - 1] = counters - mv.take;
        Ok(successor)
    }

    fn random_start<R: Rng>(&self, limits: &StartLimits, rng: &mut R) -> Vec<u32> {
        let piles = rng.gen_range(1..=limits.max_piles);
        (0..piles)
            .map(|_| rng.gen_range(1..=limits.max_numbers))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successors_replace_one_pile() {
        let rules = TakeawayNim::regular();
        assert_eq!(rules.successors(&vec![1, 1]), vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(
            rules.successors(&vec![2, 1]),
            vec![vec![0, 1], vec![1, 1], vec![2, 0]]
        );
        assert!(rules.successors(&vec![0, 0]).is_empty());
    }

    #[test]
    fn test_successors_strictly_shrink_total() {
        let rules = TakeawayNim::misere();
        let state = vec![3, 0, 2];
        let total: u32 = state.iter().sum();
        for successor in rules.successors(&state) {
            assert_eq!(successor.len(), state.len());
            assert!(successor.iter().sum::<u32>() < total);
        }
    }

    #[test]
    fn test_terminal_classification() {
        let regular = TakeawayNim::regular();
        assert_eq!(regular.evaluate(&vec![0, 0], true), Some(WIN));
        assert_eq!(regular.evaluate(&vec![0, 0], false), Some(LOSS));
        assert_eq!(regular.evaluate(&vec![0, 1], true), None);
        assert_eq!(regular.evaluate(&vec![1, 1], false), None);
    }

    #[test]
    fn test_misere_inverts_terminal_sign() {
        // Direct differential between the two scoring policies.
        let regular = TakeawayNim::regular();
        let misere = TakeawayNim::misere();
        for maximizing in [true, false] {
            let a = regular.evaluate(&vec![0, 0, 0], maximizing).unwrap();
            let b = misere.evaluate(&vec![0, 0, 0], maximizing).unwrap();
            assert_eq!(a, -b);
        }
    }

    #[test]
    fn test_human_move_validation() {
        let rules = TakeawayNim::regular();
        let state = vec![3, 2];

        assert_eq!(
            rules.apply_human_move(&state, &TakeMove { pile: 2, take: 2 }),
            Ok(vec![3, 0])
        );

        assert_eq!(
            rules.apply_human_move(&state, &TakeMove { pile: 5, take: 1 }),
            Err(MoveError::InvalidPile { pile: 5, piles: 2 })
        );
        assert_eq!(
            rules.apply_human_move(&state, &TakeMove { pile: 0, take: 1 }),
            Err(MoveError::InvalidPile { pile: 0, piles: 2 })
        );
        assert_eq!(
            rules.apply_human_move(&state, &TakeMove { pile: 1, take: 5 }),
            Err(MoveError::InvalidNumber {
                amount: 5,
                rule: NumberRule::AtMost(3),
            })
        );
        assert_eq!(
            rules.apply_human_move(&state, &TakeMove { pile: 1, take: 0 }),
            Err(MoveError::InvalidNumber {
                amount: 0,
                rule: NumberRule::Positive,
            })
        );
    }

    #[test]
    fn test_random_start_range() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let rules = TakeawayNim::regular();
        let limits = StartLimits::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let state = rules.random_start(&limits, &mut rng);
            assert!((1..=limits.max_piles).contains(&state.len()));
            assert!(state
                .iter()
                .all(|&counters| (1..=limits.max_numbers).contains(&counters)));
        }
    }
}
