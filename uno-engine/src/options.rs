//! Game configuration options.

/// Knobs for a single game. The rules themselves are fixed.
///
/// ```
/// use uno_engine::options::GameOptions;
///
/// let options = GameOptions::default().with_seed(42).with_first_player(0);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Seed for the shared random source. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Index of the player who goes first. `None` picks one at random.
    pub first_player: Option<usize>,
    /// Give up after this many turns without a winner.
    pub turn_limit: Option<u32>,
}

impl GameOptions {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_first_player(mut self, index: usize) -> Self {
        self.first_player = Some(index);
        self
    }

    #[must_use]
    pub const fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }
}
