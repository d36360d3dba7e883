//! Game and account configuration options.

/// Configuration options for a higher-or-lower session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo_bank::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rounds(5)
///     .with_starting_score(0);
/// assert_eq!(options.rounds, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of guesses per game.
    pub rounds: u8,
    /// Score the session starts with.
    pub starting_score: i64,
    /// Points added for a correct guess.
    pub reward: i64,
    /// Points removed for a wrong guess.
    pub penalty: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rounds: 8,
            starting_score: 50,
            reward: 20,
            penalty: 15,
        }
    }
}

impl GameOptions {
    /// Sets the number of guesses per game.
    ///
    /// A game draws `rounds + 1` cards, so values above 51 cannot be played
    /// out with a single deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(3);
    /// assert_eq!(options.rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the starting score.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_score(-10);
    /// assert_eq!(options.starting_score, -10);
    /// ```
    #[must_use]
    pub const fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }

    /// Sets the points added for a correct guess.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::GameOptions;
    ///
    /// let options = GameOptions::default().with_reward(10);
    /// assert_eq!(options.reward, 10);
    /// ```
    #[must_use]
    pub const fn with_reward(mut self, reward: i64) -> Self {
        self.reward = reward;
        self
    }

    /// Sets the points removed for a wrong guess.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::GameOptions;
    ///
    /// let options = GameOptions::default().with_penalty(5);
    /// assert_eq!(options.penalty, 5);
    /// ```
    #[must_use]
    pub const fn with_penalty(mut self, penalty: i64) -> Self {
        self.penalty = penalty;
        self
    }
}

/// Configuration options for an account's password gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountOptions {
    /// Consecutive wrong passwords allowed before the account blocks.
    pub max_attempts: u8,
}

impl Default for AccountOptions {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl AccountOptions {
    /// Sets the number of consecutive wrong passwords allowed.
    ///
    /// Zero is treated as one: the first wrong password blocks.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_bank::AccountOptions;
    ///
    /// let options = AccountOptions::default().with_max_attempts(5);
    /// assert_eq!(options.max_attempts, 5);
    /// ```
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u8) -> Self {
        self.max_attempts = attempts;
        self
    }
}
