//! # comb-games
//!
//! A framework for two-player combinatorial games: perfect information,
//! no chance, alternating moves, normal-play convention (the player
//! unable to move loses).
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: rulesets are drop-in implementations of one
//!    `Position` trait; the solver and referee know nothing about boards.
//!
//! 2. **Immutable Positions**: every move produces a new position value;
//!    boards use persistent data structures so cloning is O(1)-ish and
//!    tree search never copies whole grids.
//!
//! 3. **Bounded Search, Honest Answers**: the solver proves wins and
//!    losses only within its depth budget and reports everything else as
//!    `Undecided` rather than guessing.
//!
//! ## Modules
//!
//! - `core`: player identities, deterministic RNG
//! - `position`: the `Position` contract every ruleset implements
//! - `solver`: outcome lattice and depth-bounded backward induction
//! - `referee`: turn-taking state machine, pacing, view seam
//! - `players`: move sources (random, solver-backed)
//! - `games`: two rulesets, NoGo and Atropos

pub mod core;
pub mod games;
pub mod players;
pub mod position;
pub mod referee;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId};
pub use crate::games::{Atropos, Color, NoGo, Vertex};
pub use crate::players::{DepthSearchPlayer, Player, RandomPlayer};
pub use crate::position::Position;
pub use crate::referee::{FixedDelay, MoveResult, NoDelay, Pacing, Referee, View};
pub use crate::solver::{Outcome, Solver, SolverConfig};
