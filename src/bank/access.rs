use crate::error::AccessError;

use super::{Account, Teller};

/// Whether an account still accepts password attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Accepting passwords.
    Active {
        /// Consecutive wrong passwords so far.
        failed_attempts: u8,
    },
    /// Too many wrong passwords. Never leaves this state.
    Blocked,
}

impl Account {
    /// Checks `password` and returns a [`Teller`] for the account on a match.
    ///
    /// A match resets the failure count. Each mismatch uses up one attempt;
    /// when the last one is used the account blocks for good.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::WrongPassword`] on a mismatch with attempts left,
    /// and [`AccessError::Blocked`] once the account is blocked, whatever the
    /// password.
    pub fn unlock(&mut self, password: &str) -> Result<Teller<'_>, AccessError> {
        let AccessState::Active { failed_attempts } = self.access else {
            return Err(AccessError::Blocked);
        };

        if password == self.password {
            self.access = AccessState::Active { failed_attempts: 0 };
            return Ok(Teller::new(self));
        }

        let failed = failed_attempts.saturating_add(1);
        let max = self.options.max_attempts.max(1);
        if failed >= max {
            self.access = AccessState::Blocked;
            tracing::warn!(account = %self.name, attempts = failed, "account blocked");
            return Err(AccessError::Blocked);
        }

        self.access = AccessState::Active {
            failed_attempts: failed,
        };
        tracing::debug!(account = %self.name, failed, "wrong password");
        Err(AccessError::WrongPassword {
            remaining: max - failed,
        })
    }
}
