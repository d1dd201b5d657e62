//! A multi-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that seats one to seven named
//! players against the house and plays full rounds: the initial deal,
//! the concealed hole card, each player's hit loop, the house's fixed
//! drawing policy, and the win/lose/push resolution. Console input and
//! rendering stay outside the engine behind the [`DecisionSource`] and
//! [`TableView`] traits.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::Table;
//!
//! let table = Table::new(&["Alice", "Bob"], 42).expect("1 to 7 players");
//! let _ = table;
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
pub mod participant;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, FlipError, TableError};
pub use hand::Hand;
pub use participant::{DecisionSource, Participant, Role};
pub use result::{Outcome, PlayerOutcome, RoundResult};
pub use table::{MAX_PLAYERS, Table, TableView};
