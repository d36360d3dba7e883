//! Interactive console drivers for the card game and the bank.

use thiserror::Error;

use crate::console::ConsoleError;
use crate::error::GameError;

pub mod bank;
pub mod hilo;

pub use bank::{Dispatcher, Flow};

/// Errors that stop an interactive driver.
#[derive(Debug, Error)]
pub enum InteractiveError {
    /// The console failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
    /// The game engine was driven out of order or ran out of cards.
    #[error(transparent)]
    Game(#[from] GameError),
}
