//! Symbols and the shared symbol pool.
//!
//! A `Symbol` is identified by its name; two symbols with the same name are
//! the same symbol no matter what payload they carry. The pool wraps every
//! symbol in an `Arc` so cards can share them without copying.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::attributes::{AttributeValue, Attributes};

/// A picture that can appear on cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    /// Identity of the symbol.
    pub name: String,
    /// Front-end payload, opaque to the engine.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Symbol {
    /// Create a symbol with an empty payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, read-only collection of symbols shared by every card.
///
/// Position in the pool is the point index the plane assigns to it.
///
/// ```
/// use cobble::cards::SymbolPool;
///
/// let pool = SymbolPool::from_names(["A", "B", "C"]);
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool.position("B"), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolPool {
    symbols: Vec<Arc<Symbol>>,
    by_name: FxHashMap<String, usize>,
}

impl SymbolPool {
    /// Create a pool from symbols in point-index order.
    ///
    /// When names repeat, `position` reports the first occurrence.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        let mut by_name = FxHashMap::default();
        for (i, symbol) in symbols.iter().enumerate() {
            by_name.entry(symbol.name.clone()).or_insert(i);
        }
        Self {
            symbols: symbols.into_iter().map(Arc::new).collect(),
            by_name,
        }
    }

    /// Create a pool of payload-free symbols.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Symbol::new).collect())
    }

    /// Number of symbols in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Shared handle to the symbol at a point index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Symbol>> {
        self.symbols.get(index)
    }

    /// Point index of a symbol name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Check if all names are distinct.
    ///
    /// Repeated names break the one-common-symbol guarantee.
    #[must_use]
    pub fn has_unique_names(&self) -> bool {
        self.by_name.len() == self.symbols.len()
    }

    /// First name repeated among the first `count` symbols.
    ///
    /// Symbols past `count` are not looked at.
    #[must_use]
    pub fn first_repeated_name(&self, count: usize) -> Option<&str> {
        let mut seen = FxHashSet::default();
        self.symbols
            .iter()
            .take(count)
            .map(|s| s.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}
