//! Card system: symbols, cards, deck construction, drawing and matching.
//!
//! ## Key Types
//!
//! - `Symbol`: named picture with an opaque payload
//! - `SymbolPool`: shared, read-only symbols in point-index order
//! - `Card`: the symbols of one plane line
//! - `DeckBuilder`: turns a plane plus a pool into a `Deck`
//! - `Deck`: shuffle and draw
//!
//! `oracle::common` finds the symbol two cards share.

pub mod attributes;
pub mod builder;
pub mod card;
pub mod deck;
pub mod oracle;
pub mod symbol;

pub use attributes::{AttributeValue, Attributes, PATH_ATTRIBUTE};
pub use builder::{required_symbols, symbols_per_card, DeckBuilder};
pub use card::{Card, CardId, CardSymbols};
pub use deck::{Deck, DeckState};
pub use oracle::{common, expect_common};
pub use symbol::{Symbol, SymbolPool};
