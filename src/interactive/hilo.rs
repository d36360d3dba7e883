//! Console loop for the higher-or-lower game.

use std::io::{BufRead, Write};

use crate::console::{Console, ConsoleError};
use crate::error::GameError;
use crate::game::{Game, GameState, Guess};
use crate::result::RoundOutcome;
use crate::session::{Session, SessionChoice};

use super::InteractiveError;

/// Plays games until the player quits or input ends.
///
/// Returns the final session score.
///
/// # Errors
///
/// Returns an error if the console fails or the game engine reports an error.
/// End of input is not an error: the session ends with the score of the last
/// finished game.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> Result<i64, InteractiveError> {
    match play_session(console, session) {
        Ok(()) | Err(InteractiveError::Console(ConsoleError::Closed)) => {}
        Err(err) => return Err(err),
    }

    let score = session.score();
    tracing::info!(games = session.games_played(), score, "session ended");
    console.say(format_args!("OK bye. Your final score was: {score}"))?;
    Ok(score)
}

fn play_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> Result<(), InteractiveError> {
    welcome(console, session)?;

    loop {
        let mut game = session.next_game();
        play_game(console, &mut game)?;
        session.finish_game(&game)?;

        let answer = console.prompt("To play again, press ENTER, or \"q\" to quit: ")?;
        if SessionChoice::parse(&answer) == SessionChoice::Quit {
            return Ok(());
        }
    }
}

fn welcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<(), ConsoleError> {
    let options = session.options();
    console.say("Welcome to Higher or Lower.")?;
    console.say(
        "You have to choose whether the next card to be shown will be higher or lower than the current card.",
    )?;
    console.say(format_args!(
        "Getting it right adds {} points; get it wrong and you lose {} points.",
        options.reward, options.penalty
    ))?;
    console.say(format_args!(
        "You have {} points to start.\n",
        session.score()
    ))
}

/// Plays one game to the end, prompting for every guess.
///
/// # Errors
///
/// Returns an error if the console fails or the game was already started.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), InteractiveError> {
    let first = game.start()?;
    console.say(format_args!("Starting card is {first}.\n"))?;

    while game.state() == GameState::AwaitingGuess {
        let current = game.current_card().ok_or(GameError::InvalidState)?;
        let guess = read_guess(console, &current.to_string())?;

        game.guess(guess)?;
        let next = game.reveal()?;
        console.say(format_args!("Next card is {next}.\n"))?;

        let result = game.score_round()?;
        match result.outcome {
            RoundOutcome::Correct => {
                console.say(format_args!("You got it right. It was {guess}!"))?;
            }
            RoundOutcome::Wrong => console.say("Sorry, you got it wrong.")?,
        }
        console.say(format_args!("Your score is: {}.\n", result.score))?;
    }

    Ok(())
}

fn read_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: &str,
) -> Result<Guess, ConsoleError> {
    let prompt =
        format!("Will the next card be higher or lower than the {current}? (Enter h or l): ");
    loop {
        match console.prompt(&prompt)?.parse() {
            Ok(guess) => return Ok(guess),
            Err(_) => console.say("Invalid answer, please try again.\n")?,
        }
    }
}
