//! Round state types.

/// Phase of the current hand.
///
/// Phases only move forward. A hand can skip ahead to `Showdown` once a
/// single player is left, and the next hand starts again at `Ante`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundState {
    /// Waiting for antes to be posted.
    Ante,
    /// Waiting for the initial five cards to be dealt.
    InitialDeal,
    /// Betting before the draw.
    FirstBetting,
    /// Players exchange cards.
    Draw,
    /// Betting after the draw.
    SecondBetting,
    /// Waiting for the pot to be awarded.
    Showdown,
    /// Pot awarded, the next hand can start.
    HandComplete,
}

impl RoundState {
    /// Returns whether players are betting.
    #[must_use]
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::FirstBetting | Self::SecondBetting)
    }
}

/// A decision the game is waiting for.
///
/// The game never decides for a player; it stops and reports who must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The player must fold, check, call, bet or raise.
    Act {
        /// The player to act.
        player_id: u8,
        /// Chips the player must add to call.
        to_call: usize,
    },
    /// The player must choose cards to exchange (possibly none).
    Discard {
        /// The player to discard.
        player_id: u8,
        /// Most cards the player may exchange.
        max: usize,
    },
}

impl Decision {
    /// Returns the player the decision belongs to.
    #[must_use]
    pub const fn player_id(self) -> u8 {
        match self {
            Self::Act { player_id, .. } | Self::Discard { player_id, .. } => player_id,
        }
    }
}

/// A betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass when nothing is owed.
    Check,
    /// Match the current bet.
    Call,
    /// Open the betting, setting the current bet this many chips above zero.
    Bet(usize),
    /// Raise the current bet by this many chips.
    Raise(usize),
}
