//! Game configuration.
//!
//! `GameConfig` carries everything the front end decides before a game
//! starts: card size, where symbols come from, lives, the time budget and an
//! optional seed. It is stored as JSON so the last choices persist between
//! runs.
//!
//! The plane order is `symbols_per_card - 1` and must be prime. That is the
//! precondition of plane generation, and `validate` is where it is enforced.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::plane::{is_prime, plane_size};

/// Default number of symbols on a card (order 2, the Fano plane).
pub const DEFAULT_SYMBOLS_PER_CARD: u32 = 3;
/// Default number of wrong picks allowed.
pub const DEFAULT_LIVES: u32 = 3;
/// Default time budget for one game.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 60_000;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use cobble::core::GameConfig;
///
/// let config = GameConfig::new(6).with_lives(5);
/// assert_eq!(config.order(), 5);
/// assert!(config.validate().is_ok());
///
/// assert!(GameConfig::new(5).validate().is_err()); // order 4
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbols on each card; the plane order plus one.
    pub symbols_per_card: u32,

    /// Directory scanned for symbol images. `None` uses generated names.
    pub symbol_dir: Option<PathBuf>,

    /// Wrong picks allowed before the game ends.
    pub lives: u32,

    /// Time budget for one game, in milliseconds.
    pub time_limit_ms: u64,

    /// Seed for shuffling. `None` lets the front end pick one.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols_per_card: DEFAULT_SYMBOLS_PER_CARD,
            symbol_dir: None,
            lives: DEFAULT_LIVES,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given card size and defaults elsewhere.
    #[must_use]
    pub fn new(symbols_per_card: u32) -> Self {
        Self {
            symbols_per_card,
            ..Self::default()
        }
    }

    /// Set the symbol directory.
    #[must_use]
    pub fn with_symbol_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.symbol_dir = Some(dir.into());
        self
    }

    /// Set the number of lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Set the time budget in milliseconds.
    #[must_use]
    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plane order `n`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.symbols_per_card.saturating_sub(1)
    }

    /// Number of distinct symbols (and cards) the deck needs.
    #[must_use]
    pub fn required_symbols(&self) -> usize {
        plane_size(self.order())
    }

    /// Check every value, including primality of the order.
    pub fn validate(&self) -> Result<()> {
        let order = self.order();
        if !is_prime(order) {
            return Err(Error::InvalidOrder { order });
        }
        if self.lives == 0 {
            return Err(Error::invalid_config("lives must be at least 1"));
        }
        if self.time_limit_ms == 0 {
            return Err(Error::invalid_config("time limit must be positive"));
        }
        Ok(())
    }

    /// Read a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
