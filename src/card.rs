//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the one-letter suit token used when rendering a card.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Clubs => "c",
            Self::Diamonds => "d",
            Self::Hearts => "h",
            Self::Spades => "s",
        }
    }
}

/// A playing card with a face-up/face-down visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is face-up.
    face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns the counting value of the card.
    ///
    /// A face-down card counts 0. A face-up card counts its rank, capped
    /// at 10 for face cards; an Ace counts 1 at this layer (the soft-ace
    /// promotion lives in [`Hand::total`](crate::hand::Hand::total)).
    #[must_use]
    pub const fn value(&self) -> u8 {
        if !self.face_up {
            return 0;
        }
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Flips the card over.
    ///
    /// Only the visibility flag changes; flipping twice restores the
    /// original state.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

impl fmt::Display for Card {
    /// Renders the rank and suit tokens, or the `XX` mask when face-down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.face_up {
            return write!(f, "XX");
        }
        match self.rank {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            n => write!(f, "{n}")?,
        }
        write!(f, "{}", self.suit.token())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
