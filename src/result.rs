//! Round settlement types.

use crate::player::BUST_LIMIT;

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The dealer.
    Dealer,
    /// The player.
    Player,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player went over 21; the dealer wins regardless of their hand.
    PlayerBust,
    /// The dealer went over 21; the player wins.
    DealerBust,
    /// Neither busted and the dealer scored higher.
    DealerHigher,
    /// Neither busted and the player scored higher.
    PlayerHigher,
    /// Equal scores. Nobody is credited.
    Draw,
}

impl RoundOutcome {
    /// Decides a round from the final scores.
    ///
    /// Rules are checked in order and the first match wins: player bust,
    /// dealer bust, higher score, then a draw.
    #[must_use]
    pub const fn evaluate(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BUST_LIMIT {
            Self::PlayerBust
        } else if dealer_score > BUST_LIMIT {
            Self::DealerBust
        } else if dealer_score > player_score {
            Self::DealerHigher
        } else if dealer_score < player_score {
            Self::PlayerHigher
        } else {
            Self::Draw
        }
    }

    /// Returns the winning seat, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::PlayerBust | Self::DealerHigher => Some(Seat::Dealer),
            Self::DealerBust | Self::PlayerHigher => Some(Seat::Player),
            Self::Draw => None,
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The player's wins after this round.
    pub player_wins: u32,
    /// The dealer's wins after this round.
    pub dealer_wins: u32,
}

impl RoundResult {
    /// Returns the winning seat, or `None` for a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        self.outcome.winner()
    }
}
