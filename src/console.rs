//! Line-oriented prompts over any reader/writer pair.

use core::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The input reached end of file.
    #[error("input closed")]
    Closed,
}

/// A prompt/response console.
///
/// ```
/// use std::io::Cursor;
/// use hilo_bank::Console;
///
/// let mut console = Console::new(Cursor::new("h\n"), Vec::new());
/// assert_eq!(console.prompt("Guess: ")?, "h");
/// assert_eq!(console.output(), b"Guess: ");
/// # Ok::<(), hilo_bank::ConsoleError>(())
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Returns a console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. Screen clearing is off by default.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear: false,
        }
    }

    /// Sets whether [`Console::pause_and_clear`] waits and clears the screen.
    #[must_use]
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `prompt` and reads one line of input, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Waits for Enter and clears the screen, if clearing is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn pause_and_clear(&mut self) -> Result<(), ConsoleError> {
        if !self.clear {
            return Ok(());
        }

        self.prompt("\nPress Enter to continue.")?;
        write!(self.output, "{CLEAR_SCREEN}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the output writer.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
