//! Player identification for two-player games.
//!
//! Combinatorial game theory conventionally names the two players Left
//! and Right. Left always moves first; concrete rulesets may present
//! friendlier names (e.g. "Black"/"White") via `Position::player_name`.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `Left` has index 0 and moves first by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Left,
    Right,
}

impl PlayerId {
    /// Get the raw player index (0 for Left, 1 for Right).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Left => 0,
            PlayerId::Right => 1,
        }
    }

    /// Get the opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::Left => PlayerId::Right,
            PlayerId::Right => PlayerId::Left,
        }
    }

    /// The player that moves first.
    #[must_use]
    pub const fn first() -> Self {
        PlayerId::Left
    }

    /// Iterate over both players, Left first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::Left, PlayerId::Right].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Left => write!(f, "Left"),
            PlayerId::Right => write!(f, "Right"),
        }
    }
}
