//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("there were no more cards to draw from the deck")]
    DeckExhausted,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The per-player card count is zero or not below the cards remaining.
    #[error(
        "{requested} is not a valid number of cards per player; it must be greater than 0 and less than {remaining}"
    )]
    InvalidDealCount {
        /// Cards requested per player.
        requested: usize,
        /// Cards remaining in the deck when the deal was requested.
        remaining: usize,
    },
    /// The deck ran out partway through the deal.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that abort a round driven through a [`Terminal`](crate::Terminal).
///
/// `E` is the terminal's own error type.
#[derive(Debug, Error)]
pub enum RoundError<E> {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer turn or settlement failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// The terminal failed to read or write.
    #[error("terminal failed: {0}")]
    Terminal(E),
}
