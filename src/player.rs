//! Player and dealer hands with running scores.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Highest score that is not bust.
pub const BUST_LIMIT: u8 = 21;

/// An Ace counts 11 while the score before it is at most this, otherwise 1.
pub const SOFT_ACE_LIMIT: u8 = 10;

/// Returns the value a card of `rank` adds to a hand that already scores
/// `score_so_far`.
///
/// Aces resolve against the score accumulated before them, so a hand is
/// scored in the order its cards were folded in. `[Ten, Ten, Ace]` locks the
/// Ace in as 1, while `[Ace, Ten, Ten]` scores 31.
#[must_use]
pub const fn card_value(rank: Rank, score_so_far: u8) -> u8 {
    match rank {
        Rank::Ace => {
            if score_so_far <= SOFT_ACE_LIMIT {
                11
            } else {
                1
            }
        }
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        _ => rank.number(),
    }
}

/// Hand status after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can keep drawing.
    Active,
    /// Hand has busted (over 21).
    Bust,
}

/// A seat at the table: the dealer or the player, with their hand.
#[derive(Debug, Clone)]
pub struct Player {
    /// Whether this seat is the dealer.
    dealer: bool,
    /// Display name.
    name: String,
    /// Rounds won over the life of the game.
    wins: u32,
    /// Score of the face-up cards in `hand`.
    score: u8,
    /// Cards in the hand, in the order they were received.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a non-dealer player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_role(name.into(), false)
    }

    /// Creates a dealer.
    #[must_use]
    pub fn dealer(name: impl Into<String>) -> Self {
        Self::with_role(name.into(), true)
    }

    const fn with_role(name: String, dealer: bool) -> Self {
        Self {
            dealer,
            name,
            wins: 0,
            score: 0,
            hand: Vec::new(),
        }
    }

    /// Returns whether this player is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.dealer
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rounds this player has won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the score of the face-up cards.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > BUST_LIMIT
    }

    /// Adds a card to the hand.
    ///
    /// A face-up card is folded into the score immediately; a face-down one
    /// counts only once it is revealed and the score recalculated.
    pub fn add_card(&mut self, card: Card) {
        self.fold(&card);
        self.hand.push(card);
    }

    /// Rebuilds the score from the face-up cards, in hand order.
    pub fn recalculate_score(&mut self) {
        self.score = self.hand.iter().fold(0, |score, card| {
            if card.is_face_up() {
                score.saturating_add(card_value(card.rank(), score))
            } else {
                score
            }
        });
    }

    /// Turns the dealer's hole card face up and adds it to the score.
    ///
    /// Has no effect for a non-dealer, an empty hand, or a hole card that is
    /// already showing.
    pub fn reveal_hole_card(&mut self) {
        if !self.dealer {
            return;
        }

        let Some(hole) = self.hand.first_mut() else {
            return;
        };
        if hole.is_face_up() {
            return;
        }
        hole.flip();

        let rank = hole.rank();
        self.score = self.score.saturating_add(card_value(rank, self.score));
    }

    /// Removes every card from the hand.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Sets the score back to zero.
    pub const fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Credits a round win.
    pub const fn add_win(&mut self) {
        self.wins += 1;
    }

    fn fold(&mut self, card: &Card) {
        if card.is_face_up() {
            self.score = self
                .score
                .saturating_add(card_value(card.rank(), self.score));
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}'s Hand:\n", self.name)?;
        for card in &self.hand {
            write!(f, "{card} ")?;
        }
        writeln!(f, "    Value: {} | Wins: {}", self.score, self.wins)
    }
}
