//! A higher-or-lower card game engine and a single-account bank simulator,
//! with optional `no_std` support.
//!
//! The card side provides a [`Deck`], a [`Game`] that walks each guess through
//! an explicit state machine, and a [`Session`] that carries the score from
//! game to game. The bank side provides an [`Account`] whose operations are
//! only reachable through a [`Teller`] handed out by its password gate.
//!
//! With the `std` feature, [`console`] and [`interactive`] drive both programs
//! over any reader/writer pair.
//!
//! # Example
//!
//! ```
//! use hilo_bank::{GameOptions, GameState, Guess, Session};
//!
//! let mut session = Session::new(GameOptions::default(), 42);
//! let mut game = session.next_game();
//! game.start()?;
//! while game.state() == GameState::AwaitingGuess {
//!     game.play_round(Guess::Higher)?;
//! }
//! session.finish_game(&game)?;
//! # Ok::<(), hilo_bank::GameError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bank;
pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
#[cfg(feature = "std")]
pub mod interactive;
#[cfg(feature = "cli")]
pub mod logging;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use bank::{AccessState, Account, AccountDetails, Command, Teller, parse_amount};
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::{Console, ConsoleError};
pub use deck::Deck;
pub use error::{AccessError, AmountError, GameError, ParseCommandError, ParseGuessError};
pub use game::{Game, GameState, Guess};
pub use options::{AccountOptions, GameOptions};
pub use result::{GameSummary, RoundOutcome, RoundResult};
pub use session::{Session, SessionChoice};
