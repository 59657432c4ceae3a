//! Game configuration options.

/// Fewest players at a table.
pub const MIN_PLAYERS: usize = 2;

/// Most players at a table.
pub const MAX_PLAYERS: usize = 10;

/// Configuration options for a five-card draw game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_ante(5)
///     .with_max_discards(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Chips every player posts before the deal.
    pub ante: usize,
    /// Most cards a player may exchange in the draw.
    pub max_discards: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ante: 1,
            max_discards: 3,
        }
    }
}

impl GameOptions {
    /// Sets the ante.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ante(10);
    /// assert_eq!(options.ante, 10);
    /// ```
    #[must_use]
    pub const fn with_ante(mut self, ante: usize) -> Self {
        self.ante = ante;
        self
    }

    /// Sets the most cards a player may exchange in the draw.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_discards(5);
    /// assert_eq!(options.max_discards, 5);
    /// ```
    #[must_use]
    pub const fn with_max_discards(mut self, max_discards: usize) -> Self {
        self.max_discards = max_discards;
        self
    }
}
