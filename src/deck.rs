//! The single-deck card source for a round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DrawError};
use crate::player::Player;

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards still in the deck.
    cards: Vec<Card>,
    /// Number of cards the deck started with.
    capacity: usize,
    /// Number of cards drawn so far.
    drawn: usize,
}

impl Deck {
    /// Creates a standard 52-card deck, face down and unshuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self {
            cards,
            capacity: DECK_SIZE,
            drawn: 0,
        }
    }

    /// Creates a standard deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals `draws` in order: the first card is drawn
    /// first.
    ///
    /// Cards are turned face down, so a scripted deck behaves like a real one
    /// when drawn.
    #[must_use]
    pub fn from_draw_order<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = draws
            .into_iter()
            .map(|card| Card::new(card.rank(), card.suit()))
            .collect();
        cards.reverse();

        Self {
            capacity: cards.len(),
            cards,
            drawn: 0,
        }
    }

    /// Randomly permutes the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards left in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.drawn
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draws the top card and turns it face up.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let Some(mut card) = self.cards.pop() else {
            warn!(drawn = self.drawn, "draw from an exhausted deck");
            return Err(DrawError::DeckExhausted);
        };

        self.drawn += 1;
        card.flip();
        Ok(card)
    }

    /// Deals `cards_per_player` rounds of one card to each player, in order.
    ///
    /// The first card a dealer receives is turned back face down to become
    /// the hole card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDealCount`] if `cards_per_player` is zero,
    /// or if at the start of any round the rounds still to deal are not fewer
    /// than [`remaining`](Self::remaining). Cards dealt in earlier rounds stay
    /// with the players. Returns [`DealError::Draw`] if the deck runs out
    /// partway through a round.
    pub fn deal_initial(
        &mut self,
        players: &mut [Player],
        cards_per_player: usize,
    ) -> Result<(), DealError> {
        if cards_per_player == 0 {
            return Err(DealError::InvalidDealCount {
                requested: 0,
                remaining: self.remaining(),
            });
        }

        for round in 0..cards_per_player {
            let requested = cards_per_player - round;
            let remaining = self.remaining();
            if requested >= remaining {
                return Err(DealError::InvalidDealCount {
                    requested,
                    remaining,
                });
            }

            for player in players.iter_mut() {
                let mut card = self.draw()?;
                if player.is_dealer() && player.is_empty() {
                    card.flip();
                }
                player.add_card(card);
            }
        }

        debug!(
            players = players.len(),
            cards_per_player,
            remaining = self.remaining(),
            "dealt initial cards"
        );
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
