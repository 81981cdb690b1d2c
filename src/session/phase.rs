//! Game flow states.

use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Wrong picks used up every life.
    OutOfLives,
    /// The time budget ran out.
    TimeUp,
    /// Every card was matched.
    DeckCleared,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::OutOfLives => "out of lives",
            EndReason::TimeUp => "time is up",
            EndReason::DeckCleared => "deck cleared",
        };
        f.write_str(text)
    }
}

/// Screen-level state of a session.
///
/// `Intro` → `Playing` → `Outro` → `Playing` ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first game to start.
    Intro,
    /// Two cards are on the table.
    Playing,
    /// A game ended; a new one may be started.
    Outro(EndReason),
}

impl Phase {
    /// Check if picks and ticks are accepted.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Check if a game has ended and `restart` is allowed.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Outro(_))
    }

    /// Check if `start` is allowed.
    #[must_use]
    pub fn can_start(self) -> bool {
        !self.is_playing()
    }
}

/// Result of a pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// The picked symbol is on both cards.
    Correct,
    /// The picked symbol is not the shared one; a life was lost.
    Wrong,
    /// No face-up card carries that name; nothing changed.
    Missed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::Intro.can_start());
        assert!(!Phase::Intro.is_playing());
        assert!(Phase::Playing.is_playing());
        assert!(!Phase::Playing.can_start());
        assert!(Phase::Outro(EndReason::TimeUp).can_start());
        assert!(Phase::Outro(EndReason::TimeUp).is_over());
        assert!(!Phase::Intro.is_over());
        assert!(!Phase::Playing.is_over());
    }

    #[test]
    fn test_end_reason_display() {
        assert_eq!(EndReason::OutOfLives.to_string(), "out of lives");
        assert_eq!(EndReason::DeckCleared.to_string(), "deck cleared");
    }
}
