//! Deck construction from a projective plane.
//!
//! Each line of the plane of order `n` becomes a card and each point index
//! selects a symbol from the pool. A plane of order `n` needs
//! `n² + n + 1` symbols and yields as many cards of `n + 1` symbols.
//!
//! ## Usage
//!
//! ```
//! use cobble::cards::{DeckBuilder, SymbolPool};
//!
//! let pool = SymbolPool::from_names(["A", "B", "C", "D", "E", "F", "G"]);
//! let deck = DeckBuilder::new(2).build(&pool).unwrap();
//!
//! assert_eq!(deck.total_cards(), 7);
//! ```

use tracing::{debug, warn, Level};

use super::card::{Card, CardId, CardSymbols};
use super::deck::Deck;
use super::symbol::SymbolPool;
use crate::error::{Error, Result};
use crate::plane::{plane_size, ProjectivePlane};

/// Number of symbols a deck of the given order needs.
#[must_use]
pub const fn required_symbols(order: u32) -> usize {
    plane_size(order)
}

/// Number of symbols on each card of the given order.
#[must_use]
pub const fn symbols_per_card(order: u32) -> usize {
    order as usize + 1
}

/// Builds decks of a fixed plane order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckBuilder {
    order: u32,
}

impl DeckBuilder {
    /// Create a builder for planes of order `n`.
    ///
    /// `n` must be prime for the deck to have the matching property; see
    /// `GameConfig::validate`.
    #[must_use]
    pub const fn new(order: u32) -> Self {
        Self { order }
    }

    /// Plane order.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Symbols the pool must hold.
    #[must_use]
    pub const fn required_symbols(&self) -> usize {
        required_symbols(self.order)
    }

    /// Symbols each card will carry.
    #[must_use]
    pub const fn symbols_per_card(&self) -> usize {
        symbols_per_card(self.order)
    }

    /// Build a deck, one card per line, symbols in line order.
    ///
    /// Fails with `InsufficientSymbols` if any point index is out of range
    /// for the pool; nothing is built in that case. Symbols beyond the
    /// required count are left unused.
    pub fn build(&self, pool: &SymbolPool) -> Result<Deck> {
        let plane = ProjectivePlane::new(self.order);
        let index_lines = plane.index_lines();

        let available = pool.len();
        if let Some(&index) = index_lines.iter().flatten().find(|&&idx| idx >= available) {
            return Err(Error::InsufficientSymbols {
                index,
                required: self.required_symbols(),
                available,
            });
        }

        if let Some(name) = pool.first_repeated_name(self.required_symbols()) {
            warn!(order = self.order, name, "symbol pool has repeated names; cards may share more than one symbol");
        }

        if tracing::enabled!(Level::DEBUG) {
            if let Err(defect) = plane.verify() {
                debug!(order = self.order, %defect, "plane is not projective; some cards will not match");
            }
        }

        let mut cards = Vec::with_capacity(index_lines.len());
        for (line, indices) in index_lines.iter().enumerate() {
            let mut symbols = CardSymbols::with_capacity(indices.len());
            for &idx in indices {
                let symbol = pool.get(idx).ok_or(Error::InsufficientSymbols {
                    index: idx,
                    required: self.required_symbols(),
                    available,
                })?;
                symbols.push(symbol.clone());
            }
            cards.push(Card::new(CardId::new(line as u32), symbols));
        }

        debug!(
            order = self.order,
            cards = cards.len(),
            unused_symbols = available.saturating_sub(self.required_symbols()),
            "built deck"
        );

        Ok(Deck::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(count: usize) -> SymbolPool {
        SymbolPool::from_names((0..count).map(|i| format!("s{i}")))
    }

    #[test]
    fn test_sizes() {
        let builder = DeckBuilder::new(3);
        assert_eq!(builder.order(), 3);
        assert_eq!(builder.required_symbols(), 13);
        assert_eq!(builder.symbols_per_card(), 4);
    }

    #[test]
    fn test_build_counts() {
        for order in [2u32, 3, 5] {
            let builder = DeckBuilder::new(order);
            let deck = builder.build(&pool(builder.required_symbols())).unwrap();

            assert_eq!(deck.total_cards(), required_symbols(order));
            assert!(deck.cards().all(|c| c.len() == symbols_per_card(order)));
        }
    }

    #[test]
    fn test_card_follows_line_order() {
        let deck = DeckBuilder::new(2).build(&pool(7)).unwrap();
        let first = deck.get(CardId::new(0)).unwrap();
        // Line x = 0 holds points 1, 3, 4
        assert_eq!(first.names().collect::<Vec<_>>(), vec!["s1", "s3", "s4"]);
    }

    #[test]
    fn test_insufficient_symbols() {
        let err = DeckBuilder::new(2).build(&pool(5)).unwrap_err();
        match err {
            Error::InsufficientSymbols {
                index,
                required,
                available,
            } => {
                assert!(index >= 5);
                assert_eq!(required, 7);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_boundary_index_equal_to_len_is_rejected() {
        // Six symbols: index 6 equals the pool length and must not pass.
        let err = DeckBuilder::new(2).build(&pool(6)).unwrap_err();
        assert!(matches!(err, Error::InsufficientSymbols { index: 6, .. }));
    }

    #[test]
    fn test_composite_order_builds_under_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let builder = DeckBuilder::new(4);
            assert!(ProjectivePlane::new(4).verify().is_err());

            let deck = builder.build(&pool(builder.required_symbols())).unwrap();
            assert_eq!(deck.total_cards(), 21);
        });
    }

    #[test]
    fn test_repeated_extra_symbols_still_build() {
        let mut names: Vec<String> = (0..7).map(|i| format!("s{i}")).collect();
        names.push("s0".to_string());
        let pool = SymbolPool::from_names(names);

        assert_eq!(pool.first_repeated_name(7), None);
        let deck = DeckBuilder::new(2).build(&pool).unwrap();
        assert_eq!(deck.total_cards(), 7);
    }

    #[test]
    fn test_extra_symbols_ignored() {
        let deck = DeckBuilder::new(2).build(&pool(20)).unwrap();
        assert_eq!(deck.total_cards(), 7);
        assert!(deck.cards().flat_map(|c| c.names()).all(|n| n != "s7"));
    }
}
