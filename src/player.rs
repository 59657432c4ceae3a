//! Player records.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A seated player.
///
/// Chips carry over between hands; the hand, fold flag and contribution
/// are reset at the start of every hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player ID.
    pub id: u8,
    /// Chips behind (not yet in the pot).
    pub chips: usize,
    /// Cards held.
    pub hand: Vec<Card>,
    /// Whether the player is out of the current hand.
    pub folded: bool,
    /// Whether the player holds the dealer button.
    pub is_dealer: bool,
    /// Chips put into the pot during the current hand.
    pub contributed: usize,
}

impl Player {
    /// Creates a player with the given chips and an empty hand.
    #[must_use]
    pub const fn new(id: u8, chips: usize) -> Self {
        Self {
            id,
            chips,
            hand: Vec::new(),
            folded: false,
            is_dealer: false,
            contributed: 0,
        }
    }

    /// Returns whether the player is still contesting the hand.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.folded
    }

    /// Moves chips from the player's stack into the pot.
    ///
    /// Returns `false` and changes nothing if the player is short.
    pub(crate) const fn pay(&mut self, amount: usize, pot: &mut usize) -> bool {
        if self.chips < amount {
            return false;
        }
        self.chips -= amount;
        self.contributed += amount;
        *pot += amount;
        true
    }

    /// Clears per-hand state.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.contributed = 0;
    }
}
