//! Public, read-only snapshots of a table.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::RoundState;
use crate::result::HandResult;

/// What everyone at the table can see about one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// The player ID.
    pub id: u8,
    /// Chips behind.
    pub chips: usize,
    /// Whether the player is out of the hand.
    pub folded: bool,
    /// Whether the player holds the dealer button.
    pub is_dealer: bool,
    /// Chips put in during the current betting round.
    pub committed: usize,
    /// The player's cards, once revealed at showdown.
    pub shown: Option<Vec<Card>>,
}

/// What everyone at the table can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase of the hand.
    pub state: RoundState,
    /// ID of the player holding the dealer button.
    pub dealer: u8,
    /// ID of the player whose decision is pending.
    pub current_player: Option<u8>,
    /// ID of the player who made the last bet or raise this round.
    pub last_raiser: Option<u8>,
    /// Chips in the pot.
    pub pot: usize,
    /// Bet to match in the current betting round.
    pub current_bet: usize,
    /// Every player in seat order.
    pub players: Vec<PlayerView>,
    /// Result of the last completed hand.
    pub result: Option<HandResult>,
}

impl TableView {
    /// Returns the view of the given player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerView> {
        self.players.iter().find(|player| player.id == player_id)
    }
}
