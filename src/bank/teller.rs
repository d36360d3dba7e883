use crate::error::AmountError;

use super::Account;

/// Parses a deposit or withdrawal amount typed by the user.
///
/// # Errors
///
/// Returns [`AmountError::Invalid`] if the input is not an integer and
/// [`AmountError::NotPositive`] if it is zero or negative.
///
/// # Example
///
/// ```
/// use hilo_bank::{AmountError, parse_amount};
///
/// assert_eq!(parse_amount(" 25 "), Ok(25));
/// assert_eq!(parse_amount("-5"), Err(AmountError::NotPositive));
/// assert_eq!(parse_amount("ten"), Err(AmountError::Invalid));
/// ```
pub fn parse_amount(input: &str) -> Result<u64, AmountError> {
    let amount: i64 = input.trim().parse().map_err(|_| AmountError::Invalid)?;
    if amount <= 0 {
        return Err(AmountError::NotPositive);
    }
    u64::try_from(amount).map_err(|_| AmountError::Invalid)
}

/// Account details shown by the "show account" operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountDetails<'a> {
    /// Account holder's name.
    pub name: &'a str,
    /// Current balance.
    pub balance: u64,
    /// The account password.
    pub password: &'a str,
}

/// Access to an unlocked account.
#[derive(Debug)]
pub struct Teller<'a> {
    account: &'a mut Account,
}

impl<'a> Teller<'a> {
    pub(super) const fn new(account: &'a mut Account) -> Self {
        Self { account }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.account.balance
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or the balance would overflow.
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, AmountError> {
        if amount == 0 {
            return Err(AmountError::NotPositive);
        }

        let balance = self
            .account
            .balance
            .checked_add(amount)
            .ok_or(AmountError::Overflow)?;
        self.account.balance = balance;
        tracing::info!(account = %self.account.name, amount, balance, "deposit");
        Ok(balance)
    }

    /// Removes `amount` from the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or larger than the balance.
    /// The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64, AmountError> {
        if amount == 0 {
            return Err(AmountError::NotPositive);
        }
        if amount > self.account.balance {
            return Err(AmountError::InsufficientFunds);
        }

        self.account.balance -= amount;
        let balance = self.account.balance;
        tracing::info!(account = %self.account.name, amount, balance, "withdrawal");
        Ok(balance)
    }

    /// Returns the account details.
    #[must_use]
    pub fn details(&self) -> AccountDetails<'_> {
        AccountDetails {
            name: &self.account.name,
            balance: self.account.balance,
            password: &self.account.password,
        }
    }
}
