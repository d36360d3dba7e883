//! Higher or lower: guess whether the next card beats the current one.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use hilo_bank::interactive::hilo;
use hilo_bank::{Console, GameOptions, Session};

/// Play higher or lower in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Guesses per game.
    #[arg(long, default_value_t = GameOptions::default().rounds, value_parser = clap::value_parser!(u8).range(1..=51))]
    rounds: u8,
    /// Score the session starts with.
    #[arg(long, default_value_t = GameOptions::default().starting_score, allow_negative_numbers = true)]
    starting_score: i64,
    /// Show debug logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    hilo_bank::logging::init(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, "starting session");

    let options = GameOptions::default()
        .with_rounds(args.rounds)
        .with_starting_score(args.starting_score);
    let mut session = Session::new(options, seed);
    let mut console = Console::stdio();

    match hilo::play(&mut console, &mut session) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
