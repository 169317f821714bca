//! A player that moves uniformly at random.

use crate::core::{GameRng, PlayerId};
use crate::position::Position;

use super::Player;

/// Picks uniformly among the legal options; forfeits when there are none.
///
/// Useful as a baseline opponent and for randomized playout tests.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player drawing from the given RNG.
    ///
    /// Forking one source RNG for both sides keeps a whole match
    /// replayable from a single seed: `RandomPlayer::from_rng(rng.fork())`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<P: Position> Player<P> for RandomPlayer {
    fn give_position(&mut self, player: PlayerId, position: &P) -> Option<P> {
        let mut options = position.options(player);
        self.rng.take(&mut options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Pile(u32);

    impl Position for Pile {
        fn options(&self, _player: PlayerId) -> Vec<Self> {
            (0..self.0).map(Pile).collect()
        }
    }

    #[test]
    fn test_chooses_a_legal_option() {
        let mut player = RandomPlayer::new(42);
        let position = Pile(4);
        for _ in 0..20 {
            let chosen = player.give_position(PlayerId::Left, &position).unwrap();
            assert!(position.has_option(PlayerId::Left, &chosen));
        }
    }

    #[test]
    fn test_forfeits_without_options() {
        let mut player = RandomPlayer::new(42);
        assert_eq!(player.give_position(PlayerId::Left, &Pile(0)), None);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut player1 = RandomPlayer::new(7);
        let mut player2 = RandomPlayer::new(7);
        let position = Pile(10);
        for _ in 0..10 {
            assert_eq!(
                player1.give_position(PlayerId::Left, &position),
                player2.give_position(PlayerId::Left, &position),
            );
        }
    }

    #[test]
    fn test_forked_players_replay_from_one_seed() {
        let mut source1 = GameRng::new(42);
        let mut source2 = GameRng::new(42);
        let mut player1 = RandomPlayer::from_rng(source1.fork());
        let mut player2 = RandomPlayer::from_rng(source2.fork());

        let position = Pile(10);
        for _ in 0..10 {
            assert_eq!(
                player1.give_position(PlayerId::Left, &position),
                player2.give_position(PlayerId::Left, &position),
            );
        }
    }

    #[test]
    fn test_has_no_view() {
        let player = RandomPlayer::new(1);
        assert!(!Player::<Pile>::has_view(&player));
    }
}
