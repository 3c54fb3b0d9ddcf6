use tracing::debug;

use crate::error::ActionError;
use crate::player::HandStatus;

use super::{Game, GameState, PLAYER};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn and skips the dealer's, moving straight
    /// to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<HandStatus, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        let player = &mut self.players[PLAYER];
        debug!(card = %card, "player hits");
        player.add_card(card);
        // A new Ace can change how earlier cards fold together.
        player.recalculate_score();

        if player.is_bust() {
            debug!(score = player.score(), "player bust");
            self.state = GameState::Settlement;
            return Ok(HandStatus::Bust);
        }

        Ok(HandStatus::Active)
    }

    /// Player action: Stay (end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(score = self.players[PLAYER].score(), "player stays");
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
