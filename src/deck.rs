//! The deck: population, shuffling, and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::participant::{DecisionSource, Participant};
use crate::table::TableView;

/// A single 52-card deck with an owned, seeded random number generator.
///
/// The generator is seeded once at construction and never reseeded;
/// every shuffle draws from the same stream, so a seed fully determines
/// the order of play.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a populated, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.populate();
        deck.shuffle();
        deck
    }

    /// Resets the deck to one face-up card per (rank, suit) pair.
    ///
    /// Cards land in canonical suit-major, rank-minor order. Calling this
    /// repeatedly always yields the same 52 cards.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Replaces the deck contents with an explicit order.
    ///
    /// The top of the deck is the end of the slice, so the last card
    /// given is the first dealt. Used to stack known orders in tests
    /// and demos.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deals the top card into the given hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty; the hand is left unchanged.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        let card = self.cards.pop().ok_or(DealError::OutOfCards)?;
        hand.add_card(card);
        Ok(())
    }

    /// Deals additional cards to one seat until it stands or busts.
    ///
    /// Each dealt card is shown to the view before the next decision is
    /// requested, and a bust is announced the moment it happens. The
    /// bust check comes first: a seat that just busted is never asked
    /// whether it wants another card. If the deck runs out mid-loop the
    /// failure is reported and the loop ends.
    pub fn deal_additional(
        &mut self,
        seat: &mut Participant,
        input: &mut dyn DecisionSource,
        view: &mut dyn TableView,
    ) {
        while !seat.is_busted() && seat.wants_hit(input) {
            if let Err(error) = self.deal(seat.hand_mut()) {
                view.show_deal_error(error);
                break;
            }
            view.show_hand(seat);

            if seat.is_busted() {
                view.show_bust(seat.name());
            }
        }
    }
}
