//! Game configuration options.

use alloc::string::String;
use core::time::Duration;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_hits_through(15)
///     .with_pacing(Duration::ZERO)
///     .with_player_name("Sam");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each seat at the start of a round.
    pub cards_per_player: usize,
    /// The dealer keeps drawing while their score is at most this value.
    pub dealer_hits_through: u8,
    /// Name shown for the dealer.
    pub dealer_name: String,
    /// Name shown for the player.
    pub player_name: String,
    /// Pause between visible dealer actions. Zero disables pacing.
    pub pacing: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            cards_per_player: 2,
            dealer_hits_through: 16,
            dealer_name: String::from("Dealer"),
            player_name: String::from("Player"),
            pacing: Duration::from_secs(2),
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each seat.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_player(3);
    /// assert_eq!(options.cards_per_player, 3);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, cards: usize) -> Self {
        self.cards_per_player = cards;
        self
    }

    /// Sets the highest score the dealer still draws on.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_through(17);
    /// assert_eq!(options.dealer_hits_through, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_through(mut self, score: u8) -> Self {
        self.dealer_hits_through = score;
        self
    }

    /// Sets the dealer's name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the player's name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the pause between visible dealer actions.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_pacing(Duration::from_millis(500));
    /// assert_eq!(options.pacing, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}
