//! Console menu for the bank account.

use std::io::{BufRead, Write};

use crate::bank::{Account, Command, Teller, parse_amount};
use crate::console::{Console, ConsoleError};
use crate::error::{AccessError, AmountError};

/// Whether the menu loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Leave the bank.
    Quit,
}

type Handler<R, W> = fn(&mut Dispatcher<R, W>) -> Result<Flow, ConsoleError>;

/// Reads menu commands and runs them against the account it owns.
#[derive(Debug)]
pub struct Dispatcher<R, W> {
    console: Console<R, W>,
    account: Account,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    /// Creates a dispatcher for `account`.
    pub const fn new(console: Console<R, W>, account: Account) -> Self {
        Self { console, account }
    }

    /// Returns the account.
    pub const fn account(&self) -> &Account {
        &self.account
    }

    /// Returns the console.
    pub const fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Consumes the dispatcher, returning the console and the account.
    pub fn into_parts(self) -> (Console<R, W>, Account) {
        (self.console, self.account)
    }

    /// Runs the menu until the user quits, the account blocks or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails. End of input is not an error.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        match self.run_menu() {
            Err(ConsoleError::Closed) => {
                tracing::info!("input closed, leaving the bank");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> Result<(), ConsoleError> {
        while !self.account.is_blocked() {
            let command = self.select()?;
            let flow = self.dispatch(command)?;
            self.console.pause_and_clear()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Runs a single command.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, ConsoleError> {
        tracing::debug!(?command, "dispatching");
        if command.requires_password() && self.account.is_blocked() {
            self.console.say("Your account is blocked.")?;
            return Ok(Flow::Quit);
        }
        (Self::handler(command))(self)
    }

    fn handler(command: Command) -> Handler<R, W> {
        match command {
            Command::Balance => Self::balance,
            Command::Deposit => Self::deposit,
            Command::Withdraw => Self::withdraw,
            Command::Show => Self::show,
            Command::Quit => Self::quit,
        }
    }

    fn select(&mut self) -> Result<Command, ConsoleError> {
        self.console.say("")?;
        for command in Command::ALL {
            self.console.say(command)?;
        }
        self.console.say("")?;

        loop {
            match self.console.prompt("What do you want to do? ")?.parse() {
                Ok(command) => return Ok(command),
                Err(_) => self.console.say("Invalid choice. Try again.\n")?,
            }
        }
    }

    /// Asks for the password until it matches or the account blocks, then
    /// runs `op` with the unlocked account.
    fn gated<F>(&mut self, denied: &str, op: F) -> Result<Flow, ConsoleError>
    where
        F: FnOnce(&mut Console<R, W>, Teller<'_>) -> Result<(), ConsoleError>,
    {
        loop {
            let password = self.console.prompt("\nPlease type your password: ")?;
            match self.account.unlock(&password) {
                Ok(teller) => {
                    op(&mut self.console, teller)?;
                    return Ok(Flow::Continue);
                }
                Err(AccessError::WrongPassword { remaining }) => {
                    self.console.say(format_args!(
                        "Incorrect password. You have {remaining} more attempt(s).\n"
                    ))?;
                }
                Err(AccessError::Blocked) => {
                    self.console.say(
                        "There have been too many unsuccessful attempts to access your account. Your account is now blocked.",
                    )?;
                    self.console.say(denied)?;
                    return Ok(Flow::Continue);
                }
            }
        }
    }

    fn balance(&mut self) -> Result<Flow, ConsoleError> {
        self.gated("Unable to check your account balance.", |console, teller| {
            console.say(format_args!("\nYour balance is: {}", teller.balance()))
        })
    }

    fn deposit(&mut self) -> Result<Flow, ConsoleError> {
        self.gated("Unable to complete your deposit.", |console, mut teller| {
            let balance = loop {
                let input = console.prompt("\nPlease enter amount to deposit: ")?;
                match parse_amount(&input).and_then(|amount| teller.deposit(amount)) {
                    Ok(balance) => break balance,
                    Err(err) => console.say(amount_message(err, "deposit"))?,
                }
            };
            console.say(format_args!("Your new balance is: {balance}"))
        })
    }

    fn withdraw(&mut self) -> Result<Flow, ConsoleError> {
        self.gated("Unable to complete your withdrawal.", |console, mut teller| {
            let balance = loop {
                let input = console.prompt("\nPlease enter amount to withdraw: ")?;
                match parse_amount(&input).and_then(|amount| teller.withdraw(amount)) {
                    Ok(balance) => break balance,
                    Err(err) => console.say(amount_message(err, "withdraw"))?,
                }
            };
            console.say(format_args!("Your new balance is: {balance}"))
        })
    }

    fn show(&mut self) -> Result<Flow, ConsoleError> {
        self.gated("Unable to show your account details.", |console, teller| {
            let details = teller.details();
            console.say("Account details:")?;
            console.say(format_args!("       Name: {}", details.name))?;
            console.say(format_args!("       Balance: {}", details.balance))?;
            console.say(format_args!("       Password: {}", details.password))?;
            console.say("")
        })
    }

    fn quit(&mut self) -> Result<Flow, ConsoleError> {
        Ok(Flow::Quit)
    }
}

fn amount_message(err: AmountError, action: &str) -> String {
    match err {
        AmountError::Invalid => "Invalid amount. Try again.".to_owned(),
        AmountError::NotPositive => {
            format!("\nYou cannot {action} a negative or zero amount. Try again.")
        }
        AmountError::InsufficientFunds => {
            "\nYou cannot withdraw more than you have in your account.".to_owned()
        }
        AmountError::Overflow => "\nThat amount is too large. Try again.".to_owned(),
    }
}
