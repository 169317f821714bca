//! Atropos: three-coloring circles on a triangular board.
//!
//! The board is a downward-pointing triangle of circles with `side_length`
//! playable rows, addressed by `(row, column)`: row 0 is the bottom
//! boundary, and playable circles sit at `row` in `1..=side_length + 1`,
//! `column` in `1..=side_length + 1 - row`. The boundary is pre-colored in
//! the standard alternating pattern (yellow/blue along the bottom,
//! blue/red up the left side, red/yellow up the right side).
//!
//! A player colors one uncolored circle per turn, any of the three colors.
//! Completing a small triangle with all three colors loses, so such
//! colorings are simply never offered as options: a color is illegal at a
//! circle whenever two cyclically-adjacent neighbors carry two *different*
//! colors whose third is that color. Play must answer the previous move on
//! one of its six neighbors, unless that circle is fully surrounded, in
//! which case the next move is a "jump" to anywhere on the board.
//!
//! Colored circles are kept in a sparse hash map; anything off the board
//! or unset reads as uncolored.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::position::Position;

/// One of the three circle colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
}

impl Color {
    /// All three colors, in option-generation order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Yellow];

    /// The color excluded by two *different* colors; `None` when they
    /// match (two like-colored neighbors constrain nothing).
    #[must_use]
    pub fn third(a: Color, b: Color) -> Option<Color> {
        if a == b {
            return None;
        }
        Color::ALL
            .into_iter()
            .find(|&color| color != a && color != b)
    }
}

/// An Atropos position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atropos {
    side_length: i32,
    last_play: Option<(i32, i32)>,
    filled: FxHashMap<(i32, i32), Color>,
}

impl Atropos {
    /// Create a fresh board with the standard pre-colored boundary and
    /// no last play (the first move is a jump).
    #[must_use]
    pub fn new(side_length: u32) -> Self {
        let side_length = side_length as i32;
        let mut filled = FxHashMap::default();

        // Bottom row alternates yellow/blue by column parity.
        for column in 1..side_length + 2 {
            let color = [Color::Yellow, Color::Blue][(column % 2) as usize];
            filled.insert((0, column), color);
        }
        // Left side alternates blue/red by row parity.
        for row in 1..side_length + 2 {
            let color = [Color::Blue, Color::Red][(row % 2) as usize];
            filled.insert((row, 0), color);
        }
        // Right side alternates red/yellow by row parity.
        for row in 1..side_length + 2 {
            let color = [Color::Red, Color::Yellow][(row % 2) as usize];
            filled.insert((row, side_length + 2 - row), color);
        }

        Self {
            side_length,
            last_play: None,
            filled,
        }
    }

    /// The number of playable rows.
    #[must_use]
    pub fn side_length(&self) -> u32 {
        self.side_length as u32
    }

    /// The coordinates of the previous move, if any.
    #[must_use]
    pub fn last_play(&self) -> Option<(i32, i32)> {
        self.last_play
    }

    /// The color at a circle; off-board and unset circles are uncolored.
    #[must_use]
    pub fn color_at(&self, row: i32, column: i32) -> Option<Color> {
        self.filled.get(&(row, column)).copied()
    }

    /// Whether a circle is colored.
    #[must_use]
    pub fn is_colored(&self, row: i32, column: i32) -> bool {
        self.color_at(row, column).is_some()
    }

    /// The six neighboring coordinates, in cyclic order.
    #[must_use]
    pub fn neighbors(row: i32, column: i32) -> SmallVec<[(i32, i32); 6]> {
        SmallVec::from_slice(&[
            (row + 1, column - 1),
            (row, column - 1),
            (row - 1, column),
            (row - 1, column + 1),
            (row, column + 1),
            (row + 1, column),
        ])
    }

    /// Whether all six neighbors of a circle are colored.
    #[must_use]
    pub fn is_surrounded(&self, row: i32, column: i32) -> bool {
        Self::neighbors(row, column)
            .iter()
            .all(|&(r, c)| self.is_colored(r, c))
    }

    /// Whether the next move may be played anywhere.
    ///
    /// True before the first move and whenever the previous move's circle
    /// is fully surrounded.
    #[must_use]
    pub fn next_is_jump(&self) -> bool {
        match self.last_play {
            None => true,
            Some((row, column)) => self.is_surrounded(row, column),
        }
    }

    /// Colors that would complete a three-colored triangle at a circle.
    ///
    /// Each cyclically-adjacent pair of colored neighbors with two
    /// different colors forbids their third.
    #[must_use]
    pub fn illegal_colors_at(&self, row: i32, column: i32) -> SmallVec<[Color; 3]> {
        let neighbors = Self::neighbors(row, column);
        let mut illegal = SmallVec::new();
        for i in 0..neighbors.len() {
            let (ra, ca) = neighbors[i];
            let (rb, cb) = neighbors[(i + 1) % neighbors.len()];
            if let (Some(color_a), Some(color_b)) =
                (self.color_at(ra, ca), self.color_at(rb, cb))
            {
                if let Some(third) = Color::third(color_a, color_b) {
                    if !illegal.contains(&third) {
                        illegal.push(third);
                    }
                }
            }
        }
        illegal
    }

    /// Colors playable at a circle.
    #[must_use]
    pub fn legal_colors_at(&self, row: i32, column: i32) -> SmallVec<[Color; 3]> {
        let illegal = self.illegal_colors_at(row, column);
        Color::ALL
            .into_iter()
            .filter(|color| !illegal.contains(color))
            .collect()
    }

    /// A copy of this position with one more circle colored and the last
    /// play updated. Does not check legality.
    #[must_use]
    pub fn option_with(&self, row: i32, column: i32, color: Color) -> Self {
        let mut next = self.clone();
        next.filled.insert((row, column), color);
        next.last_play = Some((row, column));
        next
    }

    fn options_at(&self, row: i32, column: i32) -> Vec<Self> {
        if self.is_colored(row, column) || !self.is_playable(row, column) {
            return Vec::new();
        }
        self.legal_colors_at(row, column)
            .into_iter()
            .map(|color| self.option_with(row, column, color))
            .collect()
    }

    fn options_around(&self, row: i32, column: i32) -> Vec<Self> {
        Self::neighbors(row, column)
            .iter()
            .flat_map(|&(r, c)| self.options_at(r, c))
            .collect()
    }

    fn is_playable(&self, row: i32, column: i32) -> bool {
        row >= 1 && row <= self.side_length + 1 && column >= 1 && column <= self.side_length + 1 - row
    }
}

impl Position for Atropos {
    fn options(&self, _player: PlayerId) -> Vec<Self> {
        match self.last_play {
            // Answer the previous move on one of its neighbors.
            Some((row, column)) if !self.is_surrounded(row, column) => {
                self.options_around(row, column)
            }
            // First move, or the previous move is walled in: jump anywhere.
            _ => {
                let mut options = Vec::new();
                for row in 1..self.side_length + 2 {
                    for column in 1..self.side_length + 2 - row {
                        options.extend(self.options_at(row, column));
                    }
                }
                options
            }
        }
    }
}
