//! Showdown and hand result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::eval::Category;

/// A player's hand as revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownHand {
    /// The player ID.
    pub player_id: u8,
    /// The category of the player's hand.
    pub category: Category,
    /// The best five cards, grouped cards first.
    pub cards: [Card; HAND_SIZE],
}

/// Result of comparing every hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Players holding the best hand (more than one on a tie).
    pub winners: Vec<u8>,
    /// Every other player.
    pub losers: Vec<u8>,
    /// The winning category.
    pub category: Category,
    /// Best five cards for every player, in the order the hands were given.
    pub hands: Vec<ShownHand>,
}

/// Chips paid to a single player from the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// The player ID.
    pub player_id: u8,
    /// Chips won.
    pub amount: usize,
}

/// Result of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// Total pot that was distributed.
    pub pot: usize,
    /// Chips paid to each winner, in seat order from the left of the dealer.
    pub payouts: Vec<Payout>,
    /// The showdown outcome, or `None` when every other player folded.
    pub outcome: Option<Outcome>,
}

impl HandResult {
    /// Returns whether the pot was won without a showdown.
    #[must_use]
    pub const fn is_uncontested(&self) -> bool {
        self.outcome.is_none()
    }

    /// Returns the chips paid to the given player.
    #[must_use]
    pub fn payout(&self, player_id: u8) -> usize {
        self.payouts
            .iter()
            .filter(|payout| payout.player_id == player_id)
            .map(|payout| payout.amount)
            .sum()
    }
}
