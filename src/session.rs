//! Multi-game sessions that carry the score from one game to the next.

use core::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::game::{Game, GameState};
use crate::options::GameOptions;

/// What to do after a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    /// Play another game.
    PlayAgain,
    /// End the session.
    Quit,
}

impl SessionChoice {
    /// Interprets the answer to the play-again prompt.
    ///
    /// `q` (any case) quits; anything else, including an empty line, plays
    /// again.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("q") {
            Self::Quit
        } else {
            Self::PlayAgain
        }
    }
}

impl FromStr for SessionChoice {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A run of games sharing one score.
///
/// The session keeps the ordered deck and hands each game a freshly shuffled
/// copy of it.
///
/// ```
/// use hilo_bank::{GameOptions, GameState, Guess, Session};
///
/// let mut session = Session::new(GameOptions::default(), 3);
/// let mut game = session.next_game();
/// game.start()?;
/// while game.state() == GameState::AwaitingGuess {
///     game.play_round(Guess::Lower)?;
/// }
/// let score = session.finish_game(&game)?;
/// assert_eq!(score, session.score());
/// assert_eq!(session.games_played(), 1);
/// # Ok::<(), hilo_bank::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    options: GameOptions,
    deck: Deck,
    rng: ChaCha8Rng,
    score: i64,
    games_played: u32,
}

impl Session {
    /// Creates a session with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::standard(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            score: options.starting_score,
            games_played: 0,
        }
    }

    /// Returns a new game over a freshly shuffled deck, starting from the
    /// carried score.
    pub fn next_game(&mut self) -> Game {
        let deck = self.deck.shuffled(&mut self.rng);
        Game::new(deck, self.options, self.score)
    }

    /// Carries the final score of a finished game into the session.
    ///
    /// Returns the new session score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not finished.
    pub fn finish_game(&mut self, game: &Game) -> Result<i64, GameError> {
        if game.state() != GameState::Finished {
            return Err(GameError::InvalidState);
        }

        self.score = game.score();
        self.games_played += 1;
        tracing::info!(
            games = self.games_played,
            score = self.score,
            "game finished"
        );
        Ok(self.score)
    }

    /// Returns the carried score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns how many games have finished.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the ordered deck games are shuffled from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
