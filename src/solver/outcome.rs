//! Outcome classification of a position for the player to move.
//!
//! An `Outcome` records whether the player to move can force a win, is
//! forced to lose, or neither could be proven within the search budget.
//! Each variant carries the number of plies to the forced outcome and the
//! set of options that realize it optimally.
//!
//! Outcomes form a lattice under [`Outcome::combine`]: folding the
//! reversed child outcomes of every option through `combine` yields the
//! classification of the parent. The ordering encodes the playing
//! preferences of a sane player:
//!
//! - a proven win beats everything else, and faster wins beat slower ones;
//! - an unproven (`Undecided`) line beats a proven loss, since it might
//!   still be salvageable;
//! - among proven losses, the deepest is kept (delay defeat).

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Result of classifying a position for the player to move.
///
/// `NoMoves` is the zero-option terminal and behaves as a loss at depth 0
/// (normal-play convention) wherever outcomes are compared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome<P> {
    /// The player to move can force a win.
    ///
    /// `depth` is the minimal number of plies to the win; `moves` are the
    /// options achieving it.
    Win { depth: u32, moves: Vec<P> },

    /// Every option hands the opponent a forced win.
    ///
    /// `depth` is the maximal number of plies the loss can be delayed;
    /// `moves` are the longest-surviving options.
    Loss { depth: u32, moves: Vec<P> },

    /// The search budget ran out before this position was resolved.
    ///
    /// `moves` are unresolved candidate options of equal search depth.
    Undecided { depth: u32, moves: Vec<P> },

    /// The player to move has no options and loses immediately.
    NoMoves,
}

impl<P: Position> Outcome<P> {
    /// Whether this is a proven win for the player to move.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }

    /// Whether this is a proven loss for the player to move.
    ///
    /// `NoMoves` counts: it is a loss at depth 0.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Loss { .. } | Outcome::NoMoves)
    }

    /// Whether the search budget ran out before resolution.
    #[must_use]
    pub fn is_undecided(&self) -> bool {
        matches!(self, Outcome::Undecided { .. })
    }

    /// Plies to the outcome (0 for an immediate terminal).
    #[must_use]
    pub fn depth(&self) -> u32 {
        match self {
            Outcome::Win { depth, .. }
            | Outcome::Loss { depth, .. }
            | Outcome::Undecided { depth, .. } => *depth,
            Outcome::NoMoves => 0,
        }
    }

    /// The options realizing this outcome.
    #[must_use]
    pub fn moves(&self) -> &[P] {
        match self {
            Outcome::Win { moves, .. }
            | Outcome::Loss { moves, .. }
            | Outcome::Undecided { moves, .. } => moves,
            Outcome::NoMoves => &[],
        }
    }

    /// Consume the outcome and return its move set.
    #[must_use]
    pub fn into_moves(self) -> Vec<P> {
        match self {
            Outcome::Win { moves, .. }
            | Outcome::Loss { moves, .. }
            | Outcome::Undecided { moves, .. } => moves,
            Outcome::NoMoves => Vec::new(),
        }
    }

    /// Merge two outcomes for the *same* player to move, keeping the one
    /// that player prefers (or the union of their move sets on a tie).
    ///
    /// Rules, in order of precedence:
    ///
    /// - `Win` absorbs everything; two wins keep the smaller depth,
    ///   equal depths union their moves.
    /// - `Undecided` beats any loss; two undecided outcomes of equal
    ///   depth union their moves, of unequal depth keep the smaller
    ///   (shallower knowledge wins ties deterministically, matching the
    ///   fastest-win convention).
    /// - Two losses keep the larger depth (delay defeat), equal depths
    ///   union their moves.
    /// - `NoMoves` is a loss at depth 0 and never wins a comparison
    ///   against a real alternative.
    #[must_use]
    pub fn combine(self, other: Outcome<P>) -> Outcome<P> {
        use Outcome::{Loss, NoMoves, Undecided, Win};

        match (self, other) {
            // A zero-option record is Loss { depth: 0, moves: [] }; any real
            // outcome either beats it or unions with an empty move set.
            (NoMoves, outcome) | (outcome, NoMoves) => outcome,

            (
                Win {
                    depth: depth_a,
                    moves: mut moves_a,
                },
                Win {
                    depth: depth_b,
                    moves: moves_b,
                },
            ) => match depth_a.cmp(&depth_b) {
                std::cmp::Ordering::Less => Win {
                    depth: depth_a,
                    moves: moves_a,
                },
                std::cmp::Ordering::Greater => Win {
                    depth: depth_b,
                    moves: moves_b,
                },
                std::cmp::Ordering::Equal => {
                    moves_a.extend(moves_b);
                    Win {
                        depth: depth_a,
                        moves: moves_a,
                    }
                }
            },

            (win @ Win { .. }, Loss { .. })
            | (Loss { .. }, win @ Win { .. })
            | (win @ Win { .. }, Undecided { .. })
            | (Undecided { .. }, win @ Win { .. }) => win,

            (undecided @ Undecided { .. }, Loss { .. })
            | (Loss { .. }, undecided @ Undecided { .. }) => undecided,

            (
                Undecided {
                    depth: depth_a,
                    moves: mut moves_a,
                },
                Undecided {
                    depth: depth_b,
                    moves: moves_b,
                },
            ) => match depth_a.cmp(&depth_b) {
                std::cmp::Ordering::Less => Undecided {
                    depth: depth_a,
                    moves: moves_a,
                },
                std::cmp::Ordering::Greater => Undecided {
                    depth: depth_b,
                    moves: moves_b,
                },
                std::cmp::Ordering::Equal => {
                    moves_a.extend(moves_b);
                    Undecided {
                        depth: depth_a,
                        moves: moves_a,
                    }
                }
            },

            (
                Loss {
                    depth: depth_a,
                    moves: mut moves_a,
                },
                Loss {
                    depth: depth_b,
                    moves: moves_b,
                },
            ) => match depth_a.cmp(&depth_b) {
                std::cmp::Ordering::Greater => Loss {
                    depth: depth_a,
                    moves: moves_a,
                },
                std::cmp::Ordering::Less => Loss {
                    depth: depth_b,
                    moves: moves_b,
                },
                std::cmp::Ordering::Equal => {
                    moves_a.extend(moves_b);
                    Loss {
                        depth: depth_a,
                        moves: moves_a,
                    }
                }
            },
        }
    }

    /// Flip perspective for backward induction.
    ///
    /// `self` classifies the position reached by playing `parent`, from
    /// the *opponent's* point of view. The move `parent` therefore earns
    /// the reversed classification for the current player, one ply deeper:
    /// a child win becomes a loss, a child loss a win, and a suffocated
    /// opponent (`NoMoves`) an immediate win at depth 1.
    #[must_use]
    pub fn reversed(self, parent: P) -> Outcome<P> {
        match self {
            Outcome::Win { depth, .. } => Outcome::Loss {
                depth: depth + 1,
                moves: vec![parent],
            },
            Outcome::Loss { depth, .. } => Outcome::Win {
                depth: depth + 1,
                moves: vec![parent],
            },
            Outcome::Undecided { depth, .. } => Outcome::Undecided {
                depth: depth + 1,
                moves: vec![parent],
            },
            Outcome::NoMoves => Outcome::Win {
                depth: 1,
                moves: vec![parent],
            },
        }
    }
}
