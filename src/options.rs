//! Game configuration options.

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 6;

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_small_table_hand_size(8)
///     .with_refill_size(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player when fewer than `small_table_threshold`
    /// players sit at the table.
    pub small_table_hand_size: usize,
    /// Cards dealt to each player at larger tables.
    pub large_table_hand_size: usize,
    /// Tables with fewer players than this use the small-table hand size.
    pub small_table_threshold: usize,
    /// Most cards drawn when an empty hand is refilled.
    pub refill_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            small_table_hand_size: 7,
            large_table_hand_size: 5,
            small_table_threshold: 3,
            refill_size: 5,
        }
    }
}

impl GameOptions {
    /// Returns the initial hand size for a table of `num_players`.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(options.hand_size(2), 7);
    /// assert_eq!(options.hand_size(3), 5);
    /// ```
    #[must_use]
    pub const fn hand_size(&self, num_players: usize) -> usize {
        if num_players < self.small_table_threshold {
            self.small_table_hand_size
        } else {
            self.large_table_hand_size
        }
    }

    /// Sets the hand size for small tables.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_small_table_hand_size(6);
    /// assert_eq!(options.small_table_hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_small_table_hand_size(mut self, size: usize) -> Self {
        self.small_table_hand_size = size;
        self
    }

    /// Sets the hand size for larger tables.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_large_table_hand_size(4);
    /// assert_eq!(options.large_table_hand_size, 4);
    /// ```
    #[must_use]
    pub const fn with_large_table_hand_size(mut self, size: usize) -> Self {
        self.large_table_hand_size = size;
        self
    }

    /// Sets the player count at which the larger-table hand size applies.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_small_table_threshold(4);
    /// assert_eq!(options.hand_size(3), 7);
    /// ```
    #[must_use]
    pub const fn with_small_table_threshold(mut self, threshold: usize) -> Self {
        self.small_table_threshold = threshold;
        self
    }

    /// Sets the most cards drawn when refilling an empty hand.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_refill_size(3);
    /// assert_eq!(options.refill_size, 3);
    /// ```
    #[must_use]
    pub const fn with_refill_size(mut self, size: usize) -> Self {
        self.refill_size = size;
        self
    }
}
