//! Round controller and state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod dealer;
mod session;
pub mod state;

pub use state::{DealerMove, GameState};

/// Index of the dealer in [`Game::players`]. The dealer is dealt to first.
const DEALER: usize = 0;
/// Index of the player in [`Game::players`].
const PLAYER: usize = 1;

/// A dealer-versus-player game that owns the deck, both seats and the round
/// flow.
///
/// Each round gets a fresh shuffled deck. Wins accumulate for as long as the
/// `Game` lives.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Dealer and player, in dealing order.
    players: [Player; 2],
    /// Deck for the current round.
    deck: Deck,
    /// Current round state.
    state: GameState,
    /// Rounds dealt so far.
    rounds: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = [
            Player::dealer(options.dealer_name.clone()),
            Player::new(options.player_name.clone()),
        ];

        Self {
            options,
            players,
            deck: Deck::new(),
            state: GameState::Dealing,
            rounds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the configured
    /// deal cannot be made.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_round(deck)
    }

    /// Starts a round with the given deck instead of a shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deal cannot
    /// be made from `deck`.
    pub fn start_round_with(&mut self, deck: Deck) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        self.deal_round(deck)
    }

    fn ensure_can_deal(&self) -> Result<(), DealError> {
        match self.state {
            GameState::Dealing | GameState::Stopped => Ok(()),
            _ => Err(DealError::InvalidState),
        }
    }

    fn deal_round(&mut self, deck: Deck) -> Result<(), DealError> {
        self.state = GameState::Dealing;
        self.deck = deck;

        if self.players.iter().any(|player| !player.is_empty()) {
            for player in &mut self.players {
                player.reset_hand();
                player.reset_score();
            }
        }

        self.deck
            .deal_initial(&mut self.players, self.options.cards_per_player)?;

        self.rounds += 1;
        info!(
            round = self.rounds,
            player_score = self.players[PLAYER].score(),
            "round dealt"
        );

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Ends a settled round, either readying the next deal or stopping.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn finish_round(&mut self, replay: bool) -> Result<(), DealError> {
        if self.state != GameState::RoundOver {
            return Err(DealError::InvalidState);
        }

        self.state = if replay {
            GameState::Dealing
        } else {
            GameState::Stopped
        };
        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns both seats, dealer first.
    #[must_use]
    pub const fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.players[DEALER]
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.players[PLAYER]
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }
}
