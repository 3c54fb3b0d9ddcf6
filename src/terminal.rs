//! The I/O boundary between the engine and whatever presents it.
//!
//! The engine never reads or writes text itself. [`Game::run`] and friends
//! take a `&mut impl Terminal` and call it for every prompt and every change
//! worth showing. Input validation and re-prompting belong to the
//! implementation, so every prompt method returns an already-valid choice.
//!
//! [`Game::run`]: crate::Game::run

use crate::player::Player;
use crate::result::RoundResult;

/// A choice from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start playing rounds.
    Start,
    /// Show the rules.
    Rules,
    /// Leave the game.
    Exit,
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// Something that happened at the table and should be narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement<'a> {
    /// The player asked for a card.
    Hit {
        /// Player name.
        name: &'a str,
    },
    /// The player ended their turn.
    Stay {
        /// Player name.
        name: &'a str,
    },
    /// The player went over 21.
    Bust {
        /// Player name.
        name: &'a str,
    },
    /// The dealer turned their hole card over.
    HoleCardRevealed {
        /// Dealer name.
        name: &'a str,
    },
    /// The dealer drew a card.
    DealerHit {
        /// Dealer name.
        name: &'a str,
        /// How many cards the dealer has drawn this turn, this one included.
        draws: usize,
    },
    /// The dealer stopped drawing.
    DealerStay {
        /// Dealer name.
        name: &'a str,
    },
    /// The round was settled.
    Settled {
        /// Settlement details.
        result: &'a RoundResult,
        /// Dealer name.
        dealer: &'a str,
        /// Player name.
        player: &'a str,
    },
}

/// Presents the game and collects the player's decisions.
pub trait Terminal {
    /// Error raised when the terminal cannot read or write.
    type Error;

    /// Shows the title banner once, before the first menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot write.
    fn show_banner(&mut self) -> Result<(), Self::Error>;

    /// Shows the rules of the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot write.
    fn show_rules(&mut self) -> Result<(), Self::Error>;

    /// Asks for a main menu choice until a valid one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot read or write.
    fn prompt_menu(&mut self) -> Result<MenuChoice, Self::Error>;

    /// Asks the player to hit or stay until a valid answer is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot read or write.
    fn prompt_hit_or_stay(&mut self) -> Result<TurnAction, Self::Error>;

    /// Asks whether to play another round until a valid answer is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot read or write.
    fn prompt_replay(&mut self) -> Result<bool, Self::Error>;

    /// Shows every seat's hand, score and wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot write.
    fn render(&mut self, players: &[Player]) -> Result<(), Self::Error>;

    /// Narrates a table event.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot write.
    fn announce(&mut self, announcement: Announcement<'_>) -> Result<(), Self::Error>;

    /// Waits between visible dealer actions. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Implementations may fail if they flush output before waiting.
    fn pause(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
