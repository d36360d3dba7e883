//! Single-account bank with a password check on every operation.

use std::process::ExitCode;

use clap::Parser;
use hilo_bank::interactive::Dispatcher;
use hilo_bank::{Account, AccountOptions, Console};

/// Manage a single bank account in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Account holder's name.
    #[arg(long, default_value = "Joe")]
    name: String,
    /// Opening balance.
    #[arg(long, default_value_t = 100)]
    balance: u64,
    /// Account password.
    #[arg(long, default_value = "soap")]
    password: String,
    /// Wrong passwords allowed before the account blocks.
    #[arg(long, default_value_t = AccountOptions::default().max_attempts, value_parser = clap::value_parser!(u8).range(1..))]
    attempts: u8,
    /// Do not pause and clear the screen between operations.
    #[arg(long)]
    no_clear: bool,
    /// Show debug logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    hilo_bank::logging::init(args.verbose);

    let options = AccountOptions::default().with_max_attempts(args.attempts);
    let account = Account::with_options(args.name, args.balance, args.password, options);
    let console = Console::stdio().with_clear(!args.no_clear);

    let mut dispatcher = Dispatcher::new(console, account);
    match dispatcher.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "bank aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
