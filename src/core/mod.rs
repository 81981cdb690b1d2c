//! Core engine types: RNG and configuration.
//!
//! Everything here is independent of the plane math and of the card model.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState, RandomIndex};
