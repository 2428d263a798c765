//! A Durak ("Fool's Hand") card game rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow for
//! two to six players: dealing, attacks and pile-ons, defences, taking the
//! pile, draw-up, role rotation and detection of the fool.
//!
//! # Example
//!
//! ```
//! use durak::{Game, GameOptions, GameState};
//!
//! let options = GameOptions::default().with_seed(42);
//! let mut game = Game::new(options).unwrap();
//! assert_eq!(game.state(), GameState::Attack);
//!
//! while !game.is_over() {
//!     game.play_ai_turn().unwrap();
//! }
//! assert!(game.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod stats;
pub mod table;
pub mod validator;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, HandError, MoveError, SetupError, TableError};
pub use game::{Action, Game, GameState};
pub use hand::{Hand, Player};
pub use options::GameOptions;
pub use result::{GameOutcome, RoundOutcome, RoundResult};
pub use stats::{GameStats, SessionStats};
pub use table::{BattlePair, Table};
pub use validator::MoveValidator;
