//! Hand representation and total evaluation.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub(crate) const BUST_LIMIT: u8 = 21;

/// An ordered collection of cards, insertion order = deal order.
///
/// A hand is exclusively owned by its holder; cards move into it from
/// the deck and leave only when the hand is cleared at round end.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes all cards from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first-dealt card, if any.
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns a mutable reference to the first-dealt card, if any.
    pub fn first_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the best total for the hand.
    ///
    /// An empty hand totals 0. A hand whose first card is face-down also
    /// totals 0, which keeps a partially concealed house hand unreadable
    /// until the hole card is revealed. Otherwise the total is the sum of
    /// card values, with one Ace promoted from 1 to 11 when the raw sum
    /// is at most 11; a single promotion is applied no matter how many
    /// Aces the hand holds.
    #[must_use]
    pub fn total(&self) -> u8 {
        let Some(first) = self.cards.first() else {
            return 0;
        };
        if !first.is_face_up() {
            return 0;
        }

        let mut total: u8 = 0;
        let mut has_ace = false;
        for card in &self.cards {
            if card.value() == 1 {
                has_ace = true;
            }
            total = total.saturating_add(card.value());
        }

        if has_ace && total <= 11 {
            // The Ace already contributed 1.
            total += 10;
        }
        total
    }
}
