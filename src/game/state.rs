//! Game state types.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseGuessError;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No card has been drawn yet.
    Start,
    /// Waiting for the player to guess against the current card.
    AwaitingGuess,
    /// A guess is recorded and the next card must be drawn.
    Reveal,
    /// The next card is drawn and the guess must be scored.
    Score,
    /// All rounds have been played.
    Finished,
}

/// A guess about the next card's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The next card is strictly higher.
    Higher,
    /// The next card is strictly lower.
    Lower,
}

impl Guess {
    /// Returns whether the guess holds for `next` drawn after `current`.
    ///
    /// Equal values never satisfy either guess.
    #[must_use]
    pub const fn is_correct(self, current: &Card, next: &Card) -> bool {
        match self {
            Self::Higher => next.value() > current.value(),
            Self::Lower => next.value() < current.value(),
        }
    }
}

impl FromStr for Guess {
    type Err = ParseGuessError;

    /// Parses `h` or `l`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") {
            Ok(Self::Higher)
        } else if s.eq_ignore_ascii_case("l") {
            Ok(Self::Lower)
        } else {
            Err(ParseGuessError)
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("higher"),
            Self::Lower => f.write_str("lower"),
        }
    }
}
