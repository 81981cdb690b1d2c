//! Playing cards.
//!
//! A card is one line of the plane with each point replaced by its symbol.
//! Cards hold shared handles to symbols, so cloning a card never copies a
//! symbol payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::Symbol;

/// Symbol list of one card. Cards of realistic orders fit inline.
pub type CardSymbols = SmallVec<[Arc<Symbol>; 8]>;

/// Identifier of a card: the index of the line it was built from.
///
/// Stable across shuffles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card: ordered symbols from one line of the plane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbols: CardSymbols,
}

impl Card {
    /// Create a card from its symbols, in line order.
    #[must_use]
    pub fn new(id: CardId, symbols: CardSymbols) -> Self {
        Self { id, symbols }
    }

    /// Card identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Symbols in line order.
    #[must_use]
    pub fn symbols(&self) -> &[Arc<Symbol>] {
        &self.symbols
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the card carries no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if a symbol with the given name is on the card.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s.name == name)
    }

    /// Symbol names in line order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.id)?;
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
