//! Higher-or-lower round engine.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::result::{GameSummary, RoundResult};

mod round;
pub mod state;

pub use state::{GameState, Guess};

/// A single higher-or-lower game.
///
/// The game owns its shuffled deck and walks through
/// [`GameState::Start`] -> [`GameState::AwaitingGuess`] -> [`GameState::Reveal`]
/// -> [`GameState::Score`], looping back to `AwaitingGuess` until the configured
/// number of rounds is played.
///
/// # Example
///
/// ```
/// use hilo_bank::{Deck, Game, GameOptions, GameState, Guess};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let deck = Deck::standard().shuffled(&mut rng);
/// let mut game = Game::new(deck, GameOptions::default(), 50);
///
/// game.start()?;
/// while game.state() == GameState::AwaitingGuess {
///     game.play_round(Guess::Higher)?;
/// }
/// assert_eq!(game.history().len(), 8);
/// # Ok::<(), hilo_bank::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    options: GameOptions,
    state: GameState,
    /// Card the next guess is made against.
    current: Option<Card>,
    /// Guess waiting to be revealed and scored.
    pending_guess: Option<Guess>,
    /// Card revealed but not yet scored.
    drawn: Option<Card>,
    starting_score: i64,
    score: i64,
    history: Vec<RoundResult>,
}

impl Game {
    /// Creates a game over `deck`, starting at `score`.
    #[must_use]
    pub fn new(deck: Deck, options: GameOptions, score: i64) -> Self {
        Self {
            deck,
            options,
            state: GameState::Start,
            current: None,
            pending_guess: None,
            drawn: None,
            starting_score: score,
            score,
            history: Vec::with_capacity(options.rounds as usize),
        }
    }

    /// Draws the starting card.
    ///
    /// Returns the card the first guess is made against.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started or the deck is empty.
    pub fn start(&mut self) -> Result<Card, GameError> {
        if self.state != GameState::Start {
            return Err(GameError::InvalidState);
        }

        let card = self.draw()?;
        self.current = Some(card);
        self.state = if self.options.rounds == 0 {
            GameState::Finished
        } else {
            GameState::AwaitingGuess
        };

        Ok(card)
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.deck.draw().ok_or(GameError::NoCards)?;
        tracing::debug!(%card, remaining = self.deck.len(), "drew card");
        Ok(card)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card the next guess is made against.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the number of rounds scored so far.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Returns the results of the rounds scored so far.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the game summary once every round has been played.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        (self.state == GameState::Finished).then(|| GameSummary {
            starting_score: self.starting_score,
            final_score: self.score,
            rounds: self.history.clone(),
        })
    }
}
