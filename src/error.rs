//! Error types for game and account operations.

use thiserror::Error;

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Error returned when a guess is neither `h` nor `l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected `h` or `l`")]
pub struct ParseGuessError;

/// Error returned when a menu choice is empty or not a known command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// Nothing was entered.
    #[error("no command entered")]
    Empty,
    /// The first character is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(char),
}

/// Errors from the password gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Wrong password; more attempts remain.
    #[error("incorrect password, {remaining} attempt(s) left")]
    WrongPassword {
        /// Attempts left before the account blocks.
        remaining: u8,
    },
    /// The account is blocked.
    #[error("account is blocked")]
    Blocked,
}

/// Errors for deposit and withdrawal amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input is not an integer.
    #[error("invalid amount")]
    Invalid,
    /// The amount is zero or negative.
    #[error("amount must be positive")]
    NotPositive,
    /// The withdrawal exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The deposit would overflow the balance.
    #[error("balance overflow")]
    Overflow,
}
