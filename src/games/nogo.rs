//! NoGo: Go-style placement where captures are forbidden.
//!
//! Players alternately place stones on a rectangular grid. A placement is
//! legal only if afterwards *every* maximal 4-connected group of
//! same-colored stones, of either color, keeps at least one adjacent
//! empty vertex (a liberty). Suicides and captures are both illegal, so
//! the board only fills up; the first player without a legal placement
//! loses.
//!
//! Legality is checked by flood-filling the connected components after a
//! tentative placement: O(cells) per candidate, O(cells^2) per call to
//! `options`. The board is column-major `im` vectors, so candidate
//! positions share structure with their parent.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::position::Position;

/// One board intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertex {
    Empty,
    Stone(PlayerId),
}

/// A NoGo board. Left plays Black, Right plays White.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoGo {
    columns: Vector<Vector<Vertex>>,
}

impl NoGo {
    /// Create an empty board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let column = Vector::from(vec![Vertex::Empty; height]);
        let columns = std::iter::repeat(column).take(width).collect();
        Self { columns }
    }

    /// Board width in vertices.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Board height in vertices.
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.front().map_or(0, Vector::len)
    }

    /// The vertex at `(column, row)`.
    #[must_use]
    pub fn vertex(&self, column: usize, row: usize) -> Vertex {
        self.columns[column][row]
    }

    /// A copy of this board with a stone added at `(column, row)`.
    ///
    /// Does not check legality; see [`NoGo::is_move_legal`].
    #[must_use]
    pub fn with_stone(&self, column: usize, row: usize, player: PlayerId) -> Self {
        let mut next = self.clone();
        next.columns[column][row] = Vertex::Stone(player);
        next
    }

    /// Whether placing `player`'s stone at `(column, row)` is legal:
    /// the vertex is empty and no group of either color is left without
    /// a liberty afterwards.
    #[must_use]
    pub fn is_move_legal(&self, column: usize, row: usize, player: PlayerId) -> bool {
        if self.vertex(column, row) != Vertex::Empty {
            return false;
        }
        self.with_stone(column, row, player)
            .all_components_have_liberty()
    }

    /// Whether every same-color group on the board has a liberty.
    #[must_use]
    pub fn all_components_have_liberty(&self) -> bool {
        self.connected_components()
            .iter()
            .all(|component| self.component_has_liberty(component))
    }

    /// All maximal 4-connected same-color groups, both colors.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<(usize, usize)>> {
        let mut components = self.components_with_color(PlayerId::Left);
        components.extend(self.components_with_color(PlayerId::Right));
        components
    }

    /// Whether a group touches at least one empty vertex.
    #[must_use]
    pub fn component_has_liberty(&self, component: &[(usize, usize)]) -> bool {
        component.iter().any(|&(column, row)| {
            self.neighbors(column, row)
                .iter()
                .any(|&(nc, nr)| self.vertex(nc, nr) == Vertex::Empty)
        })
    }

    fn components_with_color(&self, player: PlayerId) -> Vec<Vec<(usize, usize)>> {
        let stone = Vertex::Stone(player);
        let mut marked = vec![vec![false; self.height()]; self.width()];
        let mut components = Vec::new();

        for column in 0..self.width() {
            for row in 0..self.height() {
                if marked[column][row] || self.vertex(column, row) != stone {
                    continue;
                }
                // Flood fill with an explicit stack.
                let mut component = Vec::new();
                let mut pending = vec![(column, row)];
                marked[column][row] = true;
                while let Some((col, rw)) = pending.pop() {
                    component.push((col, rw));
                    for &(nc, nr) in self.neighbors(col, rw).iter() {
                        if !marked[nc][nr] && self.vertex(nc, nr) == stone {
                            marked[nc][nr] = true;
                            pending.push((nc, nr));
                        }
                    }
                }
                components.push(component);
            }
        }
        components
    }

    fn neighbors(&self, column: usize, row: usize) -> SmallVec<[(usize, usize); 4]> {
        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push((column, row - 1));
        }
        if column + 1 < self.width() {
            neighbors.push((column + 1, row));
        }
        if row + 1 < self.height() {
            neighbors.push((column, row + 1));
        }
        if column > 0 {
            neighbors.push((column - 1, row));
        }
        neighbors
    }
}

impl Position for NoGo {
    fn options(&self, player: PlayerId) -> Vec<Self> {
        let mut options = Vec::new();
        for column in 0..self.width() {
            for row in 0..self.height() {
                if self.vertex(column, row) == Vertex::Empty
                    && self.is_move_legal(column, row, player)
                {
                    options.push(self.with_stone(column, row, player));
                }
            }
        }
        options
    }

    fn player_name(&self, player: PlayerId) -> String {
        match player {
            PlayerId::Left => "Black".to_string(),
            PlayerId::Right => "White".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_allows_every_vertex() {
        let board = NoGo::new(3, 2);
        assert_eq!(board.options(PlayerId::Left).len(), 6);
        assert_eq!(board.options(PlayerId::Right).len(), 6);
    }

    #[test]
    fn test_occupied_vertex_is_illegal() {
        let board = NoGo::new(2, 2).with_stone(0, 0, PlayerId::Left);
        assert!(!board.is_move_legal(0, 0, PlayerId::Right));
        assert!(!board.is_move_legal(0, 0, PlayerId::Left));
    }

    #[test]
    fn test_suffocating_placement_is_illegal() {
        // Black corner stone, White below it. White at (0, 1) would leave
        // the black group with no liberty.
        let board = NoGo::new(2, 2)
            .with_stone(0, 0, PlayerId::Left)
            .with_stone(1, 0, PlayerId::Right);

        assert!(!board.is_move_legal(0, 1, PlayerId::Right));
        assert!(board.is_move_legal(1, 1, PlayerId::Right));

        let suffocating = board.with_stone(0, 1, PlayerId::Right);
        assert!(!board.has_option(PlayerId::Right, &suffocating));
        assert_eq!(board.options(PlayerId::Right).len(), 1);
    }

    #[test]
    fn test_capturing_placement_is_illegal() {
        // Black at (1, 1) would strip the white stone's last liberty;
        // captures are as illegal as suicides.
        let board = NoGo::new(2, 2)
            .with_stone(0, 0, PlayerId::Left)
            .with_stone(1, 0, PlayerId::Right);
        assert!(!board.is_move_legal(1, 1, PlayerId::Left));
        assert!(board.is_move_legal(0, 1, PlayerId::Left));
    }

    #[test]
    fn test_suicide_is_illegal() {
        // On a 1x2 strip with a white stone, black's only vertex has no
        // liberty after placement.
        let board = NoGo::new(2, 1).with_stone(1, 0, PlayerId::Right);
        assert!(!board.is_move_legal(0, 0, PlayerId::Left));
        assert!(board.options(PlayerId::Left).is_empty());
    }

    #[test]
    fn test_components_group_by_color_and_adjacency() {
        let board = NoGo::new(3, 1)
            .with_stone(0, 0, PlayerId::Left)
            .with_stone(2, 0, PlayerId::Left);
        let components = board.connected_components();
        assert_eq!(components.len(), 2);

        let joined = board.with_stone(1, 0, PlayerId::Left);
        assert_eq!(joined.connected_components().len(), 1);
    }

    #[test]
    fn test_component_liberty_detection() {
        let board = NoGo::new(2, 1).with_stone(0, 0, PlayerId::Left);
        assert!(board.all_components_have_liberty());

        let full = board.with_stone(1, 0, PlayerId::Right);
        // Both single-stone groups are walled in by each other.
        assert!(!full.all_components_have_liberty());
    }

    #[test]
    fn test_clone_shares_nothing_observable() {
        let board = NoGo::new(2, 2).with_stone(0, 0, PlayerId::Left);
        let copy = board.clone();
        assert_eq!(board, copy);

        let mutated = copy.with_stone(1, 1, PlayerId::Right);
        assert_eq!(board.vertex(1, 1), Vertex::Empty);
        assert_ne!(board, mutated);
    }

    #[test]
    fn test_options_are_fresh_values() {
        let board = NoGo::new(2, 1);
        let options = board.options(PlayerId::Left);
        assert_eq!(options.len(), 2);
        for option in &options {
            assert_ne!(option, &board);
            assert!(board.has_option(PlayerId::Left, option));
        }
    }

    #[test]
    fn test_player_names() {
        let board = NoGo::new(1, 1);
        assert_eq!(board.player_name(PlayerId::Left), "Black");
        assert_eq!(board.player_name(PlayerId::Right), "White");
    }
}
