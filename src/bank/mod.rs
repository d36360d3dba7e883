//! Single-account bank with a password gate.
//!
//! Account operations are only reachable through a [`Teller`], which
//! [`Account::unlock`] hands out after a successful password check.

use alloc::string::String;

use crate::options::AccountOptions;

mod access;
pub mod command;
mod teller;

pub use access::AccessState;
pub use command::Command;
pub use teller::{AccountDetails, Teller, parse_amount};

/// A bank account guarded by a password.
#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    balance: u64,
    password: String,
    access: AccessState,
    options: AccountOptions,
}

impl Account {
    /// Opens an account with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::Account;
    ///
    /// let mut account = Account::new("Joe", 100, "soap");
    /// let mut teller = account.unlock("soap")?;
    /// assert_eq!(teller.deposit(50), Ok(150));
    /// # Ok::<(), hilo_bank::AccessError>(())
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, balance: u64, password: impl Into<String>) -> Self {
        Self::with_options(name, balance, password, AccountOptions::default())
    }

    /// Opens an account with custom options.
    #[must_use]
    pub fn with_options(
        name: impl Into<String>,
        balance: u64,
        password: impl Into<String>,
        options: AccountOptions,
    ) -> Self {
        Self {
            name: name.into(),
            balance,
            password: password.into(),
            access: AccessState::Active { failed_attempts: 0 },
            options,
        }
    }

    /// Returns the account holder's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the access state.
    #[must_use]
    pub const fn access(&self) -> AccessState {
        self.access
    }

    /// Returns whether the account is blocked.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self.access, AccessState::Blocked)
    }

    /// Returns the account options.
    #[must_use]
    pub const fn options(&self) -> &AccountOptions {
        &self.options
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new("Joe", 100, "soap")
    }
}
