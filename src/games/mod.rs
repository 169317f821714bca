//! Concrete rulesets.
//!
//! Each game is one type implementing [`crate::position::Position`];
//! the solver and referee never see anything game-specific.

pub mod atropos;
pub mod nogo;

pub use atropos::{Atropos, Color};
pub use nogo::{NoGo, Vertex};
