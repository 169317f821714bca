//! The position contract every ruleset implements.
//!
//! A `Position` is an immutable snapshot of one game state. Moves never
//! mutate a position: each legal move produces a fresh value, and the old
//! one stays valid for whoever still holds it (undo stacks, tree search).
//! Rulesets back their boards with `im` collections so that cloning is
//! cheap enough for exhaustive search.
//!
//! ## Contract
//!
//! - `options(player)` is deterministic given the position and player.
//!   It returns the *complete* list of positions reachable in one legal
//!   move. Duplicates (content-equal but separately constructed values)
//!   are permitted; the solver treats every element as a distinct
//!   candidate and does not deduplicate.
//! - Structural equality comes from `PartialEq` (value equality, never
//!   identity) and independent copies from `Clone`.
//! - Returning an empty list means the player to move has lost
//!   (normal-play convention).

use crate::core::PlayerId;

/// An immutable game state for a two-player combinatorial game.
///
/// Implementors supply move generation; equality, cloning and debug
/// formatting come from the standard trait bounds.
pub trait Position: Clone + PartialEq + std::fmt::Debug {
    /// All positions reachable by one legal move for `player`, in a
    /// deterministic order. Empty means `player` has no move and loses.
    fn options(&self, player: PlayerId) -> Vec<Self>;

    /// Display name for a player, e.g. "Black"/"White".
    fn player_name(&self, player: PlayerId) -> String {
        player.to_string()
    }

    /// Whether `candidate` is reachable in one legal move for `player`.
    ///
    /// Membership is by value equality over `options`. This is the single
    /// validation the referee performs on submitted moves.
    fn has_option(&self, player: PlayerId, candidate: &Self) -> bool {
        self.options(player).iter().any(|option| option == candidate)
    }
}
