//! Game configuration options.

use crate::error::SetupError;

/// Configuration options for a Durak game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use durak::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_max_attacks(5)
///     .with_seed(9);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players (2 to 6).
    pub players: u8,
    /// Cards each hand is dealt and drawn back up to.
    pub hand_size: usize,
    /// Maximum attack cards in a single round.
    pub max_attacks: usize,
    /// Shuffle seed. `None` picks a fresh seed.
    pub seed: Option<u64>,
}

impl GameOptions {
    /// Fewest players allowed.
    pub const MIN_PLAYERS: u8 = 2;
    /// Most players allowed.
    pub const MAX_PLAYERS: u8 = 6;
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 6,
            max_attacks: 6,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the target hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the maximum number of attacks per round.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_attacks(4);
    /// assert_eq!(options.max_attacks, 4);
    /// ```
    #[must_use]
    pub const fn with_max_attacks(mut self, max_attacks: usize) -> Self {
        self.max_attacks = max_attacks;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the player count, hand size and attack cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is outside 2..=6, or if the hand
    /// size or attack cap is zero.
    pub const fn validate(&self) -> Result<(), SetupError> {
        if self.players < Self::MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers(self.players));
        }
        if self.players > Self::MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(self.players));
        }
        if self.hand_size == 0 {
            return Err(SetupError::ZeroHandSize);
        }
        if self.max_attacks == 0 {
            return Err(SetupError::ZeroMaxAttacks);
        }
        Ok(())
    }
}
