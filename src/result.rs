//! Round result types.

use alloc::string::String;
use alloc::vec::Vec;

/// Outcome of a single player's round against the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (house busts or player holds the higher total).
    Win,
    /// Player loses (player busts or the house holds the higher total).
    Lose,
    /// Push (tie).
    Push,
}

/// Result for a single player after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOutcome {
    /// The player's name.
    pub name: String,
    /// The player's final hand total.
    pub total: u8,
    /// Whether the player busted.
    pub busted: bool,
    /// The outcome against the house.
    pub outcome: Outcome,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerOutcome>,
    /// The house's final hand total.
    pub house_total: u8,
    /// Whether the house busted.
    pub house_busted: bool,
}
