//! Round and game result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Guess;

/// Whether a guess was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The next card went the guessed way.
    Correct,
    /// The next card went the other way or tied.
    Wrong,
}

/// Result of a single guess-and-reveal round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u8,
    /// The player's guess.
    pub guess: Guess,
    /// The card the guess was made against.
    pub previous: Card,
    /// The card that was revealed.
    pub drawn: Card,
    /// Whether the guess was right.
    pub outcome: RoundOutcome,
    /// Points gained (positive) or lost (negative).
    pub delta: i64,
    /// Score after this round.
    pub score: i64,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Score the game started with.
    pub starting_score: i64,
    /// Score the game ended with.
    pub final_score: i64,
    /// Results for each round in play order.
    pub rounds: Vec<RoundResult>,
}

impl GameSummary {
    /// Returns the number of correct guesses.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.outcome == RoundOutcome::Correct)
            .count()
    }

    /// Net score change over the game.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.final_score - self.starting_score
    }
}
