//! Finding the symbol two cards share.
//!
//! For two distinct cards of one deck the plane guarantees exactly one
//! shared symbol, so the first match is the answer. Finding none means the
//! deck is broken (repeated symbol names, a composite order, or cards from
//! different decks). Comparing a card with itself is not supported.

use std::sync::Arc;

use tracing::error;

use super::card::Card;
use super::symbol::Symbol;
use crate::error::{Error, Result};

/// The symbol both cards carry, compared by name.
///
/// Scans `a` in order and returns the first symbol also on `b`: O(k²) for
/// `k` symbols per card.
#[must_use]
pub fn common<'a>(a: &'a Card, b: &Card) -> Option<&'a Arc<Symbol>> {
    a.symbols()
        .iter()
        .find(|sa| b.symbols().iter().any(|sb| sa.name == sb.name))
}

/// Like `common`, but a missing match is an internal consistency error.
pub fn expect_common(a: &Card, b: &Card) -> Result<Arc<Symbol>> {
    common(a, b).cloned().ok_or_else(|| {
        error!(left = %a, right = %b, "cards share no symbol");
        Error::NoCommonSymbol {
            left: a.id().raw(),
            right: b.id().raw(),
        }
    })
}

impl Card {
    /// The symbol shared with another card. See [`common`].
    #[must_use]
    pub fn common_with<'a>(&'a self, other: &Card) -> Option<&'a Arc<Symbol>> {
        common(self, other)
    }
}
