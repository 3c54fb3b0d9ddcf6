use tracing::{debug, info};

use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult, Seat};

use super::{DEALER, DealerMove, Game, GameState, PLAYER};

impl Game {
    fn ensure_dealer_turn(&self) -> Result<(), ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }
        Ok(())
    }

    /// Returns whether the dealer's hole card is still face down.
    #[must_use]
    pub fn is_hole_card_hidden(&self) -> bool {
        self.players[DEALER]
            .hand()
            .first()
            .is_some_and(|card| !card.is_face_up())
    }

    /// Turns the dealer's hole card face up and rescores the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn reveal_hole_card(&mut self) -> Result<(), ShowdownError> {
        self.ensure_dealer_turn()?;

        let dealer = &mut self.players[DEALER];
        dealer.reveal_hole_card();
        // Ace values depend on fold order, and the hole card folds first.
        dealer.recalculate_score();
        debug!(score = dealer.score(), "dealer reveals hole card");
        Ok(())
    }

    /// Plays one step of the dealer's turn.
    ///
    /// Reveals the hole card first if it is still hidden. The dealer draws
    /// while their score is at most
    /// [`dealer_hits_through`](crate::GameOptions::dealer_hits_through) and
    /// stays otherwise. A stay or a bust ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// when the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerMove, ShowdownError> {
        self.ensure_dealer_turn()?;

        if self.is_hole_card_hidden() {
            self.reveal_hole_card()?;
        }

        let dealer = &self.players[DEALER];
        if dealer.is_bust() {
            debug!(score = dealer.score(), "dealer bust");
            self.state = GameState::Settlement;
            return Ok(DealerMove::Bust);
        }

        if dealer.score() > self.options.dealer_hits_through {
            debug!(score = dealer.score(), "dealer stays");
            self.state = GameState::Settlement;
            return Ok(DealerMove::Stay);
        }

        let card = self.deck.draw()?;
        let dealer = &mut self.players[DEALER];
        debug!(card = %card, "dealer hits");
        dealer.add_card(card);
        dealer.recalculate_score();
        Ok(DealerMove::Hit)
    }

    /// Dealer plays their hand to completion.
    ///
    /// Returns the number of cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<usize, ShowdownError> {
        let mut drawn = 0;
        while self.dealer_step()? == DealerMove::Hit {
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Decides the round and credits the winner.
    ///
    /// Rules are checked in order and the first match wins:
    /// 1. Player bust: dealer wins
    /// 2. Dealer bust: player wins
    /// 3. Higher score wins
    /// 4. Equal scores: draw, nobody is credited
    ///
    /// # Errors
    ///
    /// Returns an error if the hands are not final yet.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let player_score = self.players[PLAYER].score();
        let dealer_score = self.players[DEALER].score();
        let outcome = RoundOutcome::evaluate(player_score, dealer_score);

        match outcome.winner() {
            Some(Seat::Dealer) => self.players[DEALER].add_win(),
            Some(Seat::Player) => self.players[PLAYER].add_win(),
            None => {}
        }

        let result = RoundResult {
            outcome,
            player_score,
            dealer_score,
            player_wins: self.players[PLAYER].wins(),
            dealer_wins: self.players[DEALER].wins(),
        };
        info!(
            round = self.rounds,
            ?outcome,
            player_score,
            dealer_score,
            "round settled"
        );

        self.state = GameState::RoundOver;
        Ok(result)
    }
}
