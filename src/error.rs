//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left.
    #[error("out of cards, unable to deal")]
    OutOfCards,
}

/// Errors that can occur when flipping a participant's first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The hand has no card to flip.
    #[error("no card to flip")]
    EmptyHand,
}

/// Errors that can occur when seating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The player count is outside 1..=7.
    #[error("player count must be between 1 and 7")]
    PlayerCount,
}
