//! A two-party blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one game of player versus
//! dealer: the opening deal, player hits, the dealer's fixed drawing strategy,
//! and the final [`Outcome`]. A [`Deck`] supplies the cards; a [`Table`] keeps
//! the rounds of several sessions apart.
//!
//! Scoring follows these rules:
//! - numeric cards count their rank, Jack/Queen/King count 11;
//! - a hand over 21 is bust;
//! - the dealer draws through 17 and stands on 18 or more;
//! - ties are settled by the configured [`TiePolicy`].
//!
//! # Example
//!
//! ```
//! use bjcore::{Deck, GameOptions, Phase, Round};
//!
//! let options = GameOptions::default();
//! let deck = Deck::new(options.decks, 42).unwrap();
//! let mut round = Round::with_rules(deck, options.rules).unwrap();
//!
//! while round.phase() == Phase::PlayerTurn && round.player_value() < 15 {
//!     round.hit().unwrap();
//! }
//! if round.phase() == Phase::PlayerTurn {
//!     round.resolve().unwrap();
//! }
//! assert!(round.outcome().is_some());
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
pub mod hand;
pub mod options;
pub mod outcome;
pub mod round;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, FACE_VALUE, FAMILY_SIZE, Face};
pub use deck::{Deck, Shoe};
pub use error::{ActionError, DealError, DeckError, SessionError};
pub use hand::{BUST_LIMIT, Hand};
pub use options::{DEALER_STANDS_ON, DEFAULT_TIE_POLICY, GameOptions, RoundRules, TiePolicy};
pub use outcome::{Outcome, Reason};
pub use round::{HOLE_CARD_INDEX, Phase, Round, settle};
pub use table::{SessionId, Table};
