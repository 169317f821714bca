//! Core building blocks: player identities and deterministic RNG.

mod player;
mod rng;

pub use player::PlayerId;
pub use rng::GameRng;
