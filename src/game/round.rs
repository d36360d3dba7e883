use crate::card::Card;
use crate::error::GameError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState, Guess};

impl Game {
    /// Records the player's guess for the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a guess.
    pub fn guess(&mut self, guess: Guess) -> Result<(), GameError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GameError::InvalidState);
        }

        self.pending_guess = Some(guess);
        self.state = GameState::Reveal;
        Ok(())
    }

    /// Draws the card the pending guess is judged against.
    ///
    /// # Errors
    ///
    /// Returns an error if no guess is pending or the deck is empty.
    pub fn reveal(&mut self) -> Result<Card, GameError> {
        if self.state != GameState::Reveal {
            return Err(GameError::InvalidState);
        }

        let card = self.draw()?;
        self.drawn = Some(card);
        self.state = GameState::Score;
        Ok(card)
    }

    /// Scores the pending guess against the revealed card.
    ///
    /// The revealed card becomes the current card. After the last round the
    /// game moves to [`GameState::Finished`].
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been revealed.
    pub fn score_round(&mut self) -> Result<RoundResult, GameError> {
        if self.state != GameState::Score {
            return Err(GameError::InvalidState);
        }

        let (Some(guess), Some(previous), Some(drawn)) =
            (self.pending_guess, self.current, self.drawn)
        else {
            return Err(GameError::InvalidState);
        };

        let (outcome, delta) = if guess.is_correct(&previous, &drawn) {
            (RoundOutcome::Correct, self.options.reward)
        } else {
            (RoundOutcome::Wrong, -self.options.penalty)
        };
        self.score = self.score.saturating_add(delta);

        let result = RoundResult {
            round: (self.history.len() + 1) as u8,
            guess,
            previous,
            drawn,
            outcome,
            delta,
            score: self.score,
        };
        tracing::debug!(
            round = result.round,
            %guess,
            %previous,
            %drawn,
            delta,
            score = self.score,
            "scored round"
        );
        self.history.push(result);

        self.current = Some(drawn);
        self.pending_guess = None;
        self.drawn = None;
        self.state = if self.history.len() >= self.options.rounds as usize {
            GameState::Finished
        } else {
            GameState::AwaitingGuess
        };

        Ok(result)
    }

    /// Plays a whole round: records the guess, reveals and scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a guess or the deck is
    /// empty.
    pub fn play_round(&mut self, guess: Guess) -> Result<RoundResult, GameError> {
        self.guess(guess)?;
        self.reveal()?;
        self.score_round()
    }
}
