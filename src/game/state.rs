//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Ready to deal a fresh round.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer reveals the hole card and plays out their hand.
    DealerTurn,
    /// Hands are final and the round can be settled.
    Settlement,
    /// Round has been settled; waiting on the replay decision.
    RoundOver,
    /// The player declined another round. Starting a round re-enters
    /// [`Dealing`](Self::Dealing).
    Stopped,
}

/// What the dealer did on one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerMove {
    /// Dealer drew a card.
    Hit,
    /// Dealer reached the standing threshold and stopped.
    Stay,
    /// Dealer went over 21.
    Bust,
}
