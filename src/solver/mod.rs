//! Game-tree outcome solver.
//!
//! - `outcome`: the Win/Loss/Undecided/NoMoves lattice and its merge rules
//! - `config`: depth budget, seed, pruning switch
//! - `search`: depth-bounded backward induction over positions

mod config;
mod outcome;
mod search;

pub use config::SolverConfig;
pub use outcome::Outcome;
pub use search::Solver;
