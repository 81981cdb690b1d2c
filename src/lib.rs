//! # cobble
//!
//! Engine for a "spot the matching symbol" card game.
//!
//! Two round cards are dealt, each with a handful of symbols, and exactly
//! one symbol appears on both. The player names it to move on.
//!
//! ## Design Principles
//!
//! 1. **Geometry does the work**: cards are the lines of a finite
//!    projective plane of prime order `n`, symbols are its points. Any two
//!    lines meet in one point, so any two cards share one symbol.
//!
//! 2. **Explicit randomness**: every shuffle takes a seedable `GameRng`.
//!
//! 3. **Stable handles**: drawn cards are owned values; shuffling never
//!    moves card storage.
//!
//! ## Modules
//!
//! - `plane`: points, lines, indexing, primality
//! - `cards`: symbols, cards, deck builder, deck, matching oracle
//! - `core`: RNG and configuration
//! - `catalogue`: symbol discovery from image directories
//! - `session`: intro / playing / outro game flow

pub mod catalogue;
pub mod cards;
pub mod core;
pub mod error;
pub mod plane;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, RandomIndex};

pub use crate::error::{Error, Result};

pub use crate::plane::{is_prime, Line, Point, ProjectivePlane};

pub use crate::cards::{
    common, expect_common, Card, CardId, Deck, DeckBuilder, DeckState, Symbol, SymbolPool,
};

pub use crate::session::{EndReason, Phase, Pick, Session};
