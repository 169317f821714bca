//! Ruleset integration tests: contracts, serialization, properties.

use comb_games::{Atropos, Color, GameRng, NoGo, PlayerId, Position};
use proptest::prelude::*;

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_nogo_bincode_round_trip() {
    let board = NoGo::new(3, 2)
        .with_stone(0, 0, PlayerId::Left)
        .with_stone(2, 1, PlayerId::Right);
    let bytes = bincode::serialize(&board).unwrap();
    let restored: NoGo = bincode::deserialize(&bytes).unwrap();
    assert_eq!(board, restored);
}

#[test]
fn test_atropos_bincode_round_trip() {
    let board = Atropos::new(2).option_with(1, 1, Color::Blue);
    let bytes = bincode::serialize(&board).unwrap();
    let restored: Atropos = bincode::deserialize(&bytes).unwrap();
    assert_eq!(board, restored);
    assert_eq!(restored.last_play(), Some((1, 1)));
}

// =============================================================================
// Position Contract Along Random Playouts
// =============================================================================

/// Play random legal moves to the end, checking the position contract at
/// every state reached.
fn check_playout<P: Position>(initial: P, seed: u64) {
    let mut rng = GameRng::new(seed);
    let mut position = initial;
    let mut player = PlayerId::first();

    loop {
        // Clone idempotence.
        let copy = position.clone();
        assert_eq!(position, copy);

        // Options are deterministic.
        let options = position.options(player);
        assert_eq!(options, position.options(player));

        // Every option is a fresh value the parent recognizes.
        for option in &options {
            assert!(position.has_option(player, option));
            assert_ne!(option, &position);
        }

        let mut options = options;
        match rng.take(&mut options) {
            None => break,
            Some(next) => {
                position = next;
                player = player.other();
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_nogo_contract_holds_along_playouts(
        width in 1usize..4,
        height in 1usize..4,
        seed in any::<u64>(),
    ) {
        check_playout(NoGo::new(width, height), seed);
    }

    #[test]
    fn test_atropos_contract_holds_along_playouts(
        side in 1u32..4,
        seed in any::<u64>(),
    ) {
        check_playout(Atropos::new(side), seed);
    }
}

// =============================================================================
// Ruleset-Specific Scenarios
// =============================================================================

#[test]
fn test_nogo_games_fill_at_most_the_board() {
    let mut rng = GameRng::new(99);
    let mut position = NoGo::new(3, 3);
    let mut player = PlayerId::first();
    let mut plies = 0;

    loop {
        let mut options = position.options(player);
        match rng.take(&mut options) {
            None => break,
            Some(next) => {
                position = next;
                player = player.other();
                plies += 1;
            }
        }
    }
    assert!(plies <= 9, "cannot place more stones than vertices");
    assert!(plies >= 2, "a 3x3 game lasts at least a few plies");
}

#[test]
fn test_atropos_moves_stay_adjacent_until_surrounded() {
    let mut rng = GameRng::new(5);
    let mut position = Atropos::new(3);
    let mut player = PlayerId::first();

    loop {
        let jump_allowed = position.next_is_jump();
        let last = position.last_play();
        let mut options = position.options(player);
        match rng.take(&mut options) {
            None => break,
            Some(next) => {
                if !jump_allowed {
                    let (prev_row, prev_col) = last.unwrap();
                    let played = next.last_play().unwrap();
                    assert!(
                        Atropos::neighbors(prev_row, prev_col).contains(&played),
                        "non-jump move must answer the previous move"
                    );
                }
                position = next;
                player = player.other();
            }
        }
    }
}
