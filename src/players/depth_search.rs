//! A player backed by the outcome solver.

use crate::core::PlayerId;
use crate::position::Position;
use crate::solver::{Solver, SolverConfig};

use super::Player;

/// Plays the solver's best move within a fixed depth budget.
///
/// Heads towards the fastest proven win, drags out proven losses, and
/// falls back to a random unresolved candidate when the budget runs out.
/// Forfeits only when no move exists at all.
#[derive(Clone, Debug)]
pub struct DepthSearchPlayer {
    solver: Solver,
}

impl DepthSearchPlayer {
    /// Create a player searching `max_depth` plies ahead.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self {
            solver: Solver::with_max_depth(max_depth),
        }
    }

    /// Create a player from a full solver configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            solver: Solver::new(config),
        }
    }
}

impl<P: Position> Player<P> for DepthSearchPlayer {
    fn give_position(&mut self, player: PlayerId, position: &P) -> Option<P> {
        self.solver.best_move(position, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Take 1 or 2 tokens from a single pile; facing an empty pile loses.
    /// Losing positions are the multiples of 3.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Nim(u32);

    impl Position for Nim {
        fn options(&self, _player: PlayerId) -> Vec<Self> {
            (1..=2).filter(|take| *take <= self.0).map(|take| Nim(self.0 - take)).collect()
        }
    }

    #[test]
    fn test_plays_the_winning_move() {
        let mut player = DepthSearchPlayer::new(6);
        // Nim(3) is the losing position reachable from Nim(4).
        let chosen = player.give_position(PlayerId::Left, &Nim(4)).unwrap();
        assert_eq!(chosen, Nim(3));
    }

    #[test]
    fn test_forfeits_only_when_stuck() {
        let mut player = DepthSearchPlayer::new(4);
        assert_eq!(player.give_position(PlayerId::Left, &Nim(0)), None);
        assert!(player.give_position(PlayerId::Left, &Nim(3)).is_some());
    }

    #[test]
    fn test_shallow_budget_still_moves() {
        let mut player = DepthSearchPlayer::new(1);
        let chosen = player.give_position(PlayerId::Left, &Nim(4)).unwrap();
        assert!(Nim(4).has_option(PlayerId::Left, &chosen));
    }
}
