//! A Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals the opening hands, runs the
//! ask-for-rank exchange between players, lays down books and detects the end
//! of the game. Every random choice comes from a seeded generator owned by the
//! game, so a seed fully determines a game.
//!
//! # Example
//!
//! ```
//! use gofish::Game;
//!
//! let mut game = Game::new(4, 42).unwrap();
//! let result = game.play().unwrap();
//! assert_eq!(result.total_books(), 13);
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
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{BOOK_SIZE, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, SetupError, TurnError};
pub use game::{Game, GameState};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{GiveResult, Player};
pub use result::{GameResult, PlayerStanding, SkipReason, TurnEvent, TurnOutcome};
