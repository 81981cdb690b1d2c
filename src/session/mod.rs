//! Headless game session.
//!
//! A `Session` owns the deck and runs the game flow around it:
//!
//! - `start` shuffles, deals a left and a right card and asks the oracle
//!   for the shared symbol
//! - `pick` scores a guess: a correct pick moves the left card to the right
//!   and deals a new left card, a wrong pick costs a life
//! - `tick` spends the time budget
//! - `restart` begins a new game once one has ended
//!
//! The game ends when lives or time run out, or when the deck cannot deal
//! another card. Rendering and input belong to the front end.
//!
//! ```
//! use cobble::cards::SymbolPool;
//! use cobble::core::GameConfig;
//! use cobble::session::{Phase, Pick, Session};
//!
//! let pool = SymbolPool::from_names(["A", "B", "C", "D", "E", "F", "G"]);
//! let mut session = Session::new(&GameConfig::default(), &pool, 42).unwrap();
//! session.start().unwrap();
//!
//! let answer = session.answer().unwrap().name.clone();
//! assert_eq!(session.pick(&answer).unwrap(), Pick::Correct);
//! assert_eq!(session.phase(), Phase::Playing);
//! ```

pub mod phase;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cards::{expect_common, Card, Deck, DeckBuilder, Symbol, SymbolPool};
use crate::core::{GameConfig, GameRng};
use crate::error::{Error, Result};

pub use phase::{EndReason, Phase, Pick};

/// The two face-up cards and their shared symbol.
#[derive(Clone, Debug)]
struct Table {
    left: Card,
    right: Card,
    answer: Arc<Symbol>,
}

/// One player's run of games over a single deck.
#[derive(Clone, Debug)]
pub struct Session {
    deck: Deck,
    rng: GameRng,
    starting_lives: u32,
    time_limit_ms: u64,
    phase: Phase,
    lives: u32,
    score: u32,
    remaining_ms: u64,
    table: Option<Table>,
}

impl Session {
    /// Validate the configuration and build the deck.
    ///
    /// Every game of the session is shuffled from a fork of `seed`.
    pub fn new(config: &GameConfig, pool: &SymbolPool, seed: u64) -> Result<Self> {
        config.validate()?;
        let deck = DeckBuilder::new(config.order()).build(pool)?;
        info!(
            order = config.order(),
            cards = deck.total_cards(),
            seed,
            "session ready"
        );

        Ok(Self {
            deck,
            rng: GameRng::new(seed),
            starting_lives: config.lives,
            time_limit_ms: config.time_limit_ms,
            phase: Phase::Intro,
            lives: config.lives,
            score: 0,
            remaining_ms: config.time_limit_ms,
            table: None,
        })
    }

    /// Start a game from `Intro` or `Outro`.
    pub fn start(&mut self) -> Result<()> {
        if !self.phase.can_start() {
            return Err(Error::InvalidPhase {
                operation: "start",
                phase: self.phase,
            });
        }

        self.lives = self.starting_lives;
        self.score = 0;
        self.remaining_ms = self.time_limit_ms;
        self.deck.reset();
        let mut game_rng = self.rng.fork();
        self.deck.shuffle(&mut game_rng);
        self.phase = Phase::Playing;
        info!(lives = self.lives, time_limit_ms = self.time_limit_ms, "game started");

        self.deal()
    }

    /// Start a new game after the previous one ended.
    ///
    /// Only allowed in `Outro`; the deck is reshuffled from a fresh fork.
    pub fn restart(&mut self) -> Result<()> {
        if !self.phase.is_over() {
            return Err(Error::InvalidPhase {
                operation: "restart",
                phase: self.phase,
            });
        }
        self.start()
    }

    /// Guess the shared symbol by name.
    ///
    /// A name on neither card is ignored and reported as `Pick::Missed`.
    pub fn pick(&mut self, name: &str) -> Result<Pick> {
        let table = match (&self.phase, &self.table) {
            (Phase::Playing, Some(table)) => table,
            _ => {
                return Err(Error::InvalidPhase {
                    operation: "pick",
                    phase: self.phase,
                })
            }
        };

        if table.answer.name == name {
            self.score += 1;
            debug!(symbol = name, score = self.score, "correct pick");
            self.advance()?;
            Ok(Pick::Correct)
        } else if table.left.contains(name) || table.right.contains(name) {
            self.lives = self.lives.saturating_sub(1);
            debug!(symbol = name, lives = self.lives, "wrong pick");
            if self.lives == 0 {
                self.end(EndReason::OutOfLives);
            }
            Ok(Pick::Wrong)
        } else {
            Ok(Pick::Missed)
        }
    }

    /// Spend `elapsed_ms` of the time budget. Ignored unless playing.
    pub fn tick(&mut self, elapsed_ms: u64) -> Phase {
        if self.phase.is_playing() {
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
            if self.remaining_ms == 0 {
                self.end(EndReason::TimeUp);
            }
        }
        self.phase
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Lives left in the current game.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Correct picks in the current game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time left in the current game, in milliseconds.
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// The newly dealt card.
    #[must_use]
    pub fn left_card(&self) -> Option<&Card> {
        self.table.as_ref().map(|t| &t.left)
    }

    /// The card matched in the previous round.
    #[must_use]
    pub fn right_card(&self) -> Option<&Card> {
        self.table.as_ref().map(|t| &t.right)
    }

    /// The symbol shared by the two face-up cards.
    #[must_use]
    pub fn answer(&self) -> Option<&Symbol> {
        self.table.as_ref().map(|t| t.answer.as_ref())
    }

    /// Cards still in the deck.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining_cards()
    }

    /// Cards in the deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.total_cards()
    }

    fn deal(&mut self) -> Result<()> {
        let (Some(left), Some(right)) = (self.deck.next_card(), self.deck.next_card()) else {
            self.table = None;
            self.end(EndReason::DeckCleared);
            return Ok(());
        };
        let answer = expect_common(&left, &right);
        debug_assert!(answer.is_ok(), "dealt cards share no symbol");
        let answer = answer?;
        self.table = Some(Table {
            left,
            right,
            answer,
        });
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        let Some(next) = self.deck.next_card() else {
            self.end(EndReason::DeckCleared);
            return Ok(());
        };
        if let Some(previous) = self.table.take() {
            let answer = expect_common(&next, &previous.left);
            debug_assert!(answer.is_ok(), "dealt cards share no symbol");
            let answer = answer?;
            self.table = Some(Table {
                left: next,
                right: previous.left,
                answer,
            });
        }
        Ok(())
    }

    fn end(&mut self, reason: EndReason) {
        self.phase = Phase::Outro(reason);
        info!(score = self.score, %reason, "game over");
    }
}
