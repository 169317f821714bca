//! Player collaborators: move sources for the referee.
//!
//! A `Player` receives a read-only snapshot of the current position and
//! eventually produces a candidate position (or forfeits by producing
//! none). The referee validates whatever comes back; players never touch
//! game-progress state directly.
//!
//! Only automated players live here. A human player would delegate to a
//! `View` for input and report `has_view() == true` so the referee skips
//! drawing for it.

mod depth_search;
mod random;

pub use depth_search::DepthSearchPlayer;
pub use random::RandomPlayer;

use crate::core::PlayerId;
use crate::position::Position;

/// A source of moves for one side of a game.
pub trait Player<P: Position> {
    /// Choose a move for `player` from `position`.
    ///
    /// Returning `None` forfeits the game. The returned position must be
    /// an element of `position.options(player)`; anything else is a
    /// protocol violation the referee will reject.
    fn give_position(&mut self, player: PlayerId, position: &P) -> Option<P>;

    /// Whether this player renders the position itself.
    ///
    /// The referee draws through its own view only for players that
    /// return `false` here.
    fn has_view(&self) -> bool {
        false
    }
}
