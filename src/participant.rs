//! Players, the house, and the hit-decision seam.

use core::fmt;

use alloc::string::String;

use crate::error::FlipError;
use crate::hand::{BUST_LIMIT, Hand};

/// Highest total on which the house still hits.
const HOUSE_HIT_MAX: u8 = 16;

/// Who decides whether a participant keeps hitting.
///
/// The capability set is closed: a seat is either a human player or the
/// house, and nothing else ever sits at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A human player; hit decisions come from a [`DecisionSource`].
    Player,
    /// The house; hits deterministically while its total is 16 or less.
    House,
}

/// An external source of yes/no hit decisions for human players.
///
/// The engine consults it once per prospective card, passing the name
/// of the player being asked. The house never consults it.
pub trait DecisionSource {
    /// Returns whether the named player wants another card.
    fn wants_hit(&mut self, name: &str) -> bool;
}

/// A named seat at the table: a hand plus a hit-decision role.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Display name of the seat.
    name: String,
    /// The seat's hand.
    hand: Hand,
    /// Decision role.
    role: Role,
}

impl Participant {
    /// Seats a human player with the given name.
    #[must_use]
    pub fn player(name: &str) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::new(),
            role: Role::Player,
        }
    }

    /// Seats the house.
    #[must_use]
    pub fn house() -> Self {
        Self {
            name: String::from("House"),
            hand: Hand::new(),
            role: Role::House,
        }
    }

    /// Returns the seat's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the seat's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns a mutable reference to the seat's hand.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the hand total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Returns whether the hand total is over 21.
    ///
    /// Meaningless while the first card is concealed (the total reads 0);
    /// reveal the hand before asking.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BUST_LIMIT
    }

    /// Returns whether the seat wants another card.
    ///
    /// The house hits while its total is 16 or less and stands otherwise;
    /// a player delegates to `input`.
    pub fn wants_hit(&self, input: &mut dyn DecisionSource) -> bool {
        match self.role {
            Role::House => self.total() <= HOUSE_HIT_MAX,
            Role::Player => input.wants_hit(&self.name),
        }
    }

    /// Flips the first-dealt card over.
    ///
    /// The house's first card is concealed with one flip during player
    /// turns and revealed with a second afterward.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty; nothing changes.
    pub fn flip_first_card(&mut self) -> Result<(), FlipError> {
        let card = self.hand.first_card_mut().ok_or(FlipError::EmptyHand)?;
        card.flip();
        Ok(())
    }
}

impl fmt::Display for Participant {
    /// Renders the hand line: name, a tab, each card followed by a tab,
    /// and the parenthesized total when it is nonzero. An empty hand
    /// renders as `<empty>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t", self.name)?;
        if self.hand.is_empty() {
            return write!(f, "<empty>");
        }
        for card in self.hand.cards() {
            write!(f, "{card}\t")?;
        }
        let total = self.hand.total();
        if total != 0 {
            write!(f, "({total})")?;
        }
        Ok(())
    }
}
