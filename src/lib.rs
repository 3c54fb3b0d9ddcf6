//! A dealer-versus-player twenty-one engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the dealer and the
//! player, and walks each round through dealing, the player's turn, the
//! dealer's turn and settlement. Everything the player sees or types goes
//! through the [`Terminal`] trait; [`Console`] implements it over any
//! buffered reader and writer when the `std` feature is enabled.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round().unwrap();
//! game.stay().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.settle().unwrap();
//! assert_eq!(game.state(), GameState::RoundOver);
//! let _ = result.winner();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, HIDDEN_CARD, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{ActionError, DealError, DrawError, RoundError, ShowdownError};
pub use game::{DealerMove, Game, GameState};
pub use options::GameOptions;
pub use player::{BUST_LIMIT, HandStatus, Player, card_value};
pub use result::{RoundOutcome, RoundResult, Seat};
pub use terminal::{Announcement, MenuChoice, Terminal, TurnAction};
