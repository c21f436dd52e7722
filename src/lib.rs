//! Rules engine for a player-versus-dealer blackjack game with optional
//! `no_std` support.
//!
//! The crate covers deck construction and shuffling, dealing, hand scoring,
//! turn progression, and outcome resolution. Game states are values: every
//! action returns a new [`GameState`] and leaves the previous one untouched.
//! [`Game`] wraps a state with a seeded random number generator for callers
//! that want a single owned session.
//!
//! # Example
//!
//! ```
//! use bjrules::{Game, GameOptions, Turn};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if game.state().player_hand().score() < 17 {
//!     game.hit().unwrap();
//! }
//! game.stand().unwrap();
//! assert_eq!(game.state().turn(), Turn::DealerTurn);
//! println!("{}", game.status());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, new_deck};
pub use error::{CardError, DeckError};
#[cfg(feature = "std")]
pub use game::setup_game;
pub use game::{Game, GameState, GameStatus, Turn};
pub use hand::{Hand, score};
pub use options::{DealerDrawRule, GameOptions, TieAt21};
pub use result::{GameResult, resolve};
