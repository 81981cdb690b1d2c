//! Deck of built cards with shuffle and draw.
//!
//! Card storage is never reordered. Shuffling permutes a separate draw
//! order, and drawing hands out owned cards (cheap: symbols are shared), so
//! nothing a caller holds is invalidated by a later shuffle.
//!
//! ## Lifecycle
//!
//! `Built` → `shuffle` → `Shuffled` → `next_card`… → `Drawing` → `Exhausted`
//!
//! ```
//! use cobble::cards::{DeckBuilder, DeckState, SymbolPool};
//! use cobble::core::GameRng;
//!
//! let pool = SymbolPool::from_names(["A", "B", "C", "D", "E", "F", "G"]);
//! let mut deck = DeckBuilder::new(2).build(&pool).unwrap();
//! deck.shuffle(&mut GameRng::new(1));
//!
//! while deck.next_card().is_some() {}
//! assert_eq!(deck.state(), DeckState::Exhausted);
//! assert!(deck.next_card().is_none());
//! ```

use im::Vector;

use super::card::{Card, CardId};
use crate::core::RandomIndex;

/// Where a deck is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckState {
    /// Freshly built or reset, in line order.
    Built,
    /// Shuffled, nothing drawn yet.
    Shuffled,
    /// Some cards drawn, some left.
    Drawing,
    /// Every card drawn.
    Exhausted,
}

/// Ordered cards plus a draw cursor.
///
/// Cloning is O(1): storage is a persistent vector.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Cards indexed by `CardId`. Never reordered.
    cards: Vector<Card>,
    /// Draw order as indices into `cards`.
    order: Vec<usize>,
    /// Number of cards drawn so far.
    cursor: usize,
    shuffled: bool,
}

impl Deck {
    /// Create a deck from cards whose ids match their positions.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let order = (0..cards.len()).collect();
        Self {
            cards: cards.into_iter().collect(),
            order,
            cursor: 0,
            shuffled: false,
        }
    }

    /// Shuffle the draw order in place (Fisher–Yates).
    ///
    /// Walks from the last position down to 1, swapping position `i` with a
    /// uniform `j` in `0..=i`. The pass covers the whole order, drawn slots
    /// included, while the cursor is kept. A card already drawn can therefore
    /// move past the cursor and be dealt again; `reset` first for a clean deck.
    pub fn shuffle<R: RandomIndex + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.order.len()).rev() {
            let j = rng.index_up_to(i);
            self.order.swap(i, j);
        }
        self.shuffled = true;
    }

    /// Draw the card under the cursor.
    ///
    /// Returns `None` once every card has been drawn.
    pub fn next_card(&mut self) -> Option<Card> {
        let slot = *self.order.get(self.cursor)?;
        self.cursor += 1;
        self.cards.get(slot).cloned()
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Cards in the deck, drawn or not.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.order.len()
    }

    /// Put every drawn card back, keeping the current order.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Current lifecycle state.
    ///
    /// A deck with no cards is always `Exhausted`.
    #[must_use]
    pub fn state(&self) -> DeckState {
        match self.cursor {
            c if c == self.order.len() => DeckState::Exhausted,
            0 if self.shuffled => DeckState::Shuffled,
            0 => DeckState::Built,
            _ => DeckState::Drawing,
        }
    }

    /// Look up a card by id, regardless of draw order.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    /// Iterate over cards in current draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|&slot| self.cards.get(slot))
    }
}
