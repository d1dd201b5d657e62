//! The table: seating and round orchestration.

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{DealError, FlipError, TableError};
use crate::participant::{DecisionSource, Participant};
use crate::result::{Outcome, PlayerOutcome, RoundResult};

/// Maximum number of players at one table.
pub const MAX_PLAYERS: usize = 7;

/// An observer of table events.
///
/// The engine announces everything a spectator would see: hands as they
/// change, busts as they happen, outcomes at resolution, and the two
/// recoverable failures (an exhausted deck, a flip with nothing to
/// flip). A front-end renders these; tests record them.
pub trait TableView {
    /// Shows a seat's current hand.
    fn show_hand(&mut self, seat: &Participant);
    /// Announces that the named seat busted.
    fn show_bust(&mut self, name: &str);
    /// Announces the named player's outcome against the house.
    fn show_outcome(&mut self, name: &str, outcome: Outcome);
    /// Reports a failed deal; the deal was a no-op.
    fn show_deal_error(&mut self, error: DealError);
    /// Reports a failed first-card flip; nothing changed.
    fn show_flip_error(&mut self, error: FlipError);
}

/// A blackjack table: one deck, the house, and up to seven players.
///
/// The table owns every hand and the deck; a round mutates them in
/// place and clears the hands when it finishes. Fields are public so
/// front-ends can inspect seats between rounds and tests can stack the
/// deck.
#[derive(Debug, Clone)]
pub struct Table {
    /// The deck cards are dealt from.
    pub deck: Deck,
    /// The house's seat.
    pub house: Participant,
    /// Player seats, in seat order.
    pub players: Vec<Participant>,
}

impl Table {
    /// Seats the named players, in order, against the house.
    ///
    /// The deck is populated and shuffled from the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error unless 1 to 7 names are given.
    pub fn new(names: &[&str], seed: u64) -> Result<Self, TableError> {
        if names.is_empty() || names.len() > MAX_PLAYERS {
            return Err(TableError::PlayerCount);
        }

        Ok(Self {
            deck: Deck::new(seed),
            house: Participant::house(),
            players: names.iter().map(|name| Participant::player(name)).collect(),
        })
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Repopulates and reshuffles the deck.
    ///
    /// Call between rounds; a single deck covers any one round with
    /// seven players, but carrying a shrinking deck across a play-again
    /// loop would eventually exhaust it.
    pub fn shuffle_up(&mut self) {
        self.deck.populate();
        self.deck.shuffle();
    }

    /// Plays one full round.
    ///
    /// Deals two cards to every seat, conceals the house's first card,
    /// shows the table, runs each player's hit loop in seat order, then
    /// reveals the house's card and lets it draw on its fixed policy
    /// before resolving every player against it. Hands are cleared
    /// before returning. Failures along the way (an exhausted deck, a
    /// flip with nothing to flip) are reported to the view and the
    /// round carries on.
    pub fn play_round(
        &mut self,
        input: &mut dyn DecisionSource,
        view: &mut dyn TableView,
    ) -> RoundResult {
        // Two cards each, round-robin: players in seat order, house last.
        for _ in 0..2 {
            for player in &mut self.players {
                if let Err(error) = self.deck.deal(player.hand_mut()) {
                    view.show_deal_error(error);
                }
            }
            if let Err(error) = self.deck.deal(self.house.hand_mut()) {
                view.show_deal_error(error);
            }
        }

        // Conceal the house's hole card, then show the opening table.
        if let Err(error) = self.house.flip_first_card() {
            view.show_flip_error(error);
        }
        for player in &self.players {
            view.show_hand(player);
        }
        view.show_hand(&self.house);

        // Player turns, strictly in seat order.
        for player in &mut self.players {
            self.deck.deal_additional(player, input, view);
        }

        // Reveal the hole card before the house draws.
        if let Err(error) = self.house.flip_first_card() {
            view.show_flip_error(error);
        }
        view.show_hand(&self.house);
        self.deck.deal_additional(&mut self.house, input, view);

        let result = self.resolve(view);

        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.house.hand_mut().clear();

        result
    }

    /// Compares every player against the house and announces outcomes.
    ///
    /// A busted player loses regardless. If the house busted, every
    /// other player wins; otherwise the higher total wins and a tie
    /// pushes.
    fn resolve(&self, view: &mut dyn TableView) -> RoundResult {
        let house_total = self.house.total();
        let house_busted = self.house.is_busted();

        let mut players = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let total = player.total();
            let busted = player.is_busted();

            let outcome = if busted {
                Outcome::Lose
            } else if house_busted || total > house_total {
                Outcome::Win
            } else if total < house_total {
                Outcome::Lose
            } else {
                Outcome::Push
            };

            view.show_outcome(player.name(), outcome);
            players.push(PlayerOutcome {
                name: String::from(player.name()),
                total,
                busted,
                outcome,
            });
        }

        RoundResult {
            players,
            house_total,
            house_busted,
        }
    }
}
