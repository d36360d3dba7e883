//! Menu commands for the bank.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCommandError;

/// A menu command, selected by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show the balance (`b`).
    Balance,
    /// Make a deposit (`d`).
    Deposit,
    /// Make a withdrawal (`w`).
    Withdraw,
    /// Show the account details (`s`).
    Show,
    /// Leave the bank (`q`).
    Quit,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Self; 5] = [
        Self::Balance,
        Self::Deposit,
        Self::Withdraw,
        Self::Show,
        Self::Quit,
    ];

    /// Returns the key that selects this command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Balance => 'b',
            Self::Deposit => 'd',
            Self::Withdraw => 'w',
            Self::Show => 's',
            Self::Quit => 'q',
        }
    }

    /// Returns the menu text for this command.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Balance => "get the balance",
            Self::Deposit => "make a deposit",
            Self::Withdraw => "make a withdrawal",
            Self::Show => "show the account",
            Self::Quit => "quit",
        }
    }

    /// Returns the command selected by `key`, ignoring case.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|command| command.key() == key)
    }

    /// Returns whether the command needs the password gate.
    #[must_use]
    pub const fn requires_password(self) -> bool {
        !matches!(self, Self::Quit)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses a menu choice from its first character.
    ///
    /// ```
    /// use hilo_bank::Command;
    ///
    /// assert_eq!("W".parse::<Command>(), Ok(Command::Withdraw));
    /// assert_eq!("balance".parse::<Command>(), Ok(Command::Balance));
    /// assert!("x".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().chars().next().ok_or(ParseCommandError::Empty)?;
        Self::from_key(key).ok_or(ParseCommandError::Unknown(key))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Press {} to {}", self.key(), self.description())
    }
}
