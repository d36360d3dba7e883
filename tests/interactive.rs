//! Console driver tests with scripted input.

use std::io::Cursor;

use hilo_bank::interactive::{Dispatcher, Flow, hilo};
use hilo_bank::{
    Account, Card, Command, Console, Deck, Game, GameOptions, GameState, Rank, Session, Suit,
};

type ScriptedConsole = Console<Cursor<String>, Vec<u8>>;

fn console(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.to_owned()), Vec::new())
}

fn output(console: ScriptedConsole) -> String {
    let (_, bytes) = console.into_inner();
    String::from_utf8(bytes).unwrap()
}

fn run_bank(input: &str, account: Account) -> (String, Account) {
    let mut dispatcher = Dispatcher::new(console(input), account);
    dispatcher.run().unwrap();
    let (console, account) = dispatcher.into_parts();
    (output(console), account)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

#[test]
fn prompt_strips_line_endings_and_reports_eof() {
    let mut console = console("first\r\nsecond\n");
    assert_eq!(console.prompt("> ").unwrap(), "first");
    assert_eq!(console.prompt("> ").unwrap(), "second");
    assert!(matches!(
        console.prompt("> "),
        Err(hilo_bank::ConsoleError::Closed)
    ));
    assert_eq!(output(console), "> > > ");
}

#[test]
fn guesses_are_reprompted_and_scored() {
    let deck = deck_from_draws(&[
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Two, Suit::Spades),
    ]);
    let mut game = Game::new(deck, GameOptions::default().with_rounds(2), 50);
    let mut console = console("x\nhigher\nh\nL\n");

    hilo::play_game(&mut console, &mut game).unwrap();
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.score(), 90);

    let out = output(console);
    assert!(out.contains("Starting card is 5 of Hearts."));
    assert_eq!(out.matches("Invalid answer, please try again.").count(), 2);
    assert!(out.contains(
        "Will the next card be higher or lower than the 5 of Hearts? (Enter h or l): "
    ));
    assert!(out.contains("Next card is 9 of Clubs."));
    assert!(out.contains("You got it right. It was higher!"));
    assert!(out.contains("Your score is: 70."));
    assert!(out.contains("You got it right. It was lower!"));
    assert!(out.contains("Your score is: 90."));
}

#[test]
fn wrong_guess_message() {
    let deck = deck_from_draws(&[
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Five, Suit::Clubs),
    ]);
    let mut game = Game::new(deck, GameOptions::default().with_rounds(1), 0);
    let mut console = console("h\n");

    hilo::play_game(&mut console, &mut game).unwrap();
    let out = output(console);
    assert!(out.contains("Sorry, you got it wrong."));
    assert!(out.contains("Your score is: -15."));
}

#[test]
fn session_plays_until_quit() {
    let mut session = Session::new(GameOptions::default(), 11);
    let input = format!("{}\n{}q\n", "h\n".repeat(8), "l\n".repeat(8));
    let mut console = console(&input);

    let score = hilo::play(&mut console, &mut session).unwrap();
    assert_eq!(session.games_played(), 2);
    assert_eq!(score, session.score());

    let out = output(console);
    assert!(out.starts_with("Welcome to Higher or Lower."));
    assert!(out.contains("Getting it right adds 20 points; get it wrong and you lose 15 points."));
    assert!(out.contains("You have 50 points to start."));
    assert_eq!(out.matches("To play again, press ENTER").count(), 2);
    assert!(out.ends_with(&format!("OK bye. Your final score was: {score}\n")));
}

#[test]
fn session_ends_cleanly_on_eof() {
    let mut session = Session::new(GameOptions::default(), 3);
    let mut console = console("h\nh\n");

    let score = hilo::play(&mut console, &mut session).unwrap();
    assert_eq!(score, 50);
    assert_eq!(session.games_played(), 0);
    assert!(output(console).ends_with("OK bye. Your final score was: 50\n"));
}

#[test]
fn bank_deposit_reprompts_until_valid() {
    let (out, mut account) = run_bank("d\nsoap\nabc\n-5\n50\nb\nsoap\nq\n", Account::default());

    assert!(out.contains("Press d to make a deposit"));
    assert!(out.contains("Invalid amount. Try again."));
    assert!(out.contains("You cannot deposit a negative or zero amount. Try again."));
    assert!(out.contains("Your new balance is: 150"));
    assert!(out.contains("Your balance is: 150"));
    assert_eq!(account.unlock("soap").unwrap().balance(), 150);
}

#[test]
fn bank_withdraw_rejects_overdraft() {
    let (out, mut account) = run_bank("w\nsoap\n200\n150\nq\n", Account::new("Ann", 150, "soap"));

    assert!(out.contains("You cannot withdraw more than you have in your account."));
    assert!(out.contains("Your new balance is: 0"));
    assert_eq!(account.unlock("soap").unwrap().balance(), 0);
}

#[test]
fn bank_show_after_one_wrong_password() {
    let (out, _) = run_bank("s\nnope\nsoap\nq\n", Account::default());

    assert!(out.contains("Incorrect password. You have 2 more attempt(s)."));
    assert!(out.contains("Account details:"));
    assert!(out.contains("       Name: Joe"));
    assert!(out.contains("       Balance: 100"));
    assert!(out.contains("       Password: soap"));
}

#[test]
fn bank_blocks_after_three_failures_and_stops() {
    let (out, mut account) = run_bank("b\nx\ny\nz\nb\nsoap\n", Account::default());

    assert!(out.contains("Your account is now blocked."));
    assert!(out.contains("Unable to check your account balance."));
    assert!(!out.contains("Your balance is"));
    assert_eq!(out.matches("What do you want to do? ").count(), 1);
    assert!(account.is_blocked());
    assert!(account.unlock("soap").is_err());
}

#[test]
fn bank_reprompts_invalid_choices() {
    let (out, _) = run_bank("\nx\nq\n", Account::default());
    assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
    assert_eq!(out.matches("What do you want to do? ").count(), 3);
}

#[test]
fn bank_stops_on_eof() {
    let (out, account) = run_bank("", Account::default());
    assert!(out.contains("Press q to quit"));
    assert!(!account.is_blocked());
}

#[test]
fn bank_pause_and_clear() {
    let console = console("q\n\n").with_clear(true);
    let mut dispatcher = Dispatcher::new(console, Account::default());
    dispatcher.run().unwrap();

    let (console, _) = dispatcher.into_parts();
    let out = output(console);
    assert!(out.contains("Press Enter to continue."));
    assert!(out.contains("\u{1b}[2J\u{1b}[H"));
}

#[test]
fn dispatch_on_blocked_account_quits() {
    let mut account = Account::default();
    for _ in 0..3 {
        let _ = account.unlock("wrong");
    }

    let mut dispatcher = Dispatcher::new(console(""), account);
    assert_eq!(dispatcher.dispatch(Command::Balance).unwrap(), Flow::Quit);
    assert!(
        output(dispatcher.into_parts().0).contains("Your account is blocked.")
    );
}
