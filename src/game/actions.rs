use alloc::vec::Vec;

use log::debug;

use crate::error::ActionError;
use crate::player::Player;
use crate::view::TableView;

use super::{Action, Game, RoundState, active_count, active_seats_from, next_active, seat_of};

/// Per-seat bookkeeping for one betting round or the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Street {
    /// Bet every active player must match.
    pub(super) current_bet: usize,
    /// Chips each seat has put in this round.
    pub(super) committed: Vec<usize>,
    /// Seats that have acted since the last raise (or discarded, in the draw).
    pub(super) acted: Vec<bool>,
    /// Seat that made the last bet or raise.
    pub(super) last_raiser: Option<usize>,
}

impl Street {
    pub(super) fn new(seats: usize) -> Self {
        Self {
            current_bet: 0,
            committed: alloc::vec![0; seats],
            acted: alloc::vec![false; seats],
            last_raiser: None,
        }
    }

    /// Chips the seat must add to call.
    pub(super) fn owed(&self, seat: usize) -> usize {
        self.current_bet.saturating_sub(self.committed[seat])
    }

    /// Whether every active seat has acted and matched the current bet.
    pub(super) fn is_complete(&self, players: &[Player]) -> bool {
        players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_active())
            .all(|(seat, _)| self.acted[seat] && self.committed[seat] == self.current_bet)
    }

    /// Applies a betting action, changing nothing if it is rejected.
    fn apply(
        &mut self,
        seat: usize,
        player: &mut Player,
        pot: &mut usize,
        action: Action,
    ) -> Result<(), ActionError> {
        match action {
            Action::Fold => player.folded = true,
            Action::Check => {
                if self.owed(seat) > 0 {
                    return Err(ActionError::IllegalAction);
                }
            }
            Action::Call => {
                let owed = self.owed(seat);
                if !player.pay(owed, pot) {
                    return Err(ActionError::InsufficientChips);
                }
                self.committed[seat] += owed;
            }
            Action::Bet(amount) | Action::Raise(amount) => {
                let opening = matches!(action, Action::Bet(_));
                if amount == 0 || opening != (self.current_bet == 0) {
                    return Err(ActionError::IllegalAction);
                }

                let target = self
                    .current_bet
                    .checked_add(amount)
                    .ok_or(ActionError::InsufficientChips)?;
                if !player.pay(target - self.committed[seat], pot) {
                    return Err(ActionError::InsufficientChips);
                }

                self.committed[seat] = target;
                self.current_bet = target;
                self.last_raiser = Some(seat);
                self.acted.fill(false);
            }
        }

        self.acted[seat] = true;
        Ok(())
    }
}

impl Game {
    /// Takes a betting action for the player whose turn it is.
    ///
    /// `Bet` opens the betting and `Raise` increases an existing bet; both
    /// must add at least one chip. `Check` is only legal when nothing is
    /// owed, and a `Call` with nothing owed leaves the pot unchanged.
    ///
    /// The round ends when a single player is left, or when every active
    /// player has acted since the last raise and matched the current bet.
    ///
    /// Returns the updated table view.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in a betting round, the player is
    /// unknown or not the one to act, the action is illegal, or the player
    /// lacks the chips for it. A rejected action changes nothing.
    pub fn act(&self, player_id: u8, action: Action) -> Result<TableView, ActionError> {
        {
            let mut state = self.state.lock();
            if !state.is_betting() {
                return Err(ActionError::InvalidState);
            }

            let dealer = *self.dealer.lock();
            let mut players = self.players.lock();
            let seat = seat_of(&players, player_id).ok_or(ActionError::PlayerNotFound)?;
            let mut street = self.street.lock();
            let mut turn = self.turn.lock();
            if *turn != Some(seat) {
                return Err(ActionError::NotYourTurn);
            }

            let mut pot = self.pot.lock();
            street.apply(seat, &mut players[seat], &mut pot, action)?;
            debug!(
                "player {player_id} {action:?}, pot {}, bet {}",
                *pot, street.current_bet
            );

            if active_count(&players) < 2 {
                *turn = None;
                *state = RoundState::Showdown;
            } else if street.is_complete(&players) {
                if *state == RoundState::FirstBetting {
                    *street = Street::new(players.len());
                    *turn = active_seats_from(&players, dealer).first().copied();
                    *state = RoundState::Draw;
                } else {
                    *turn = None;
                    *state = RoundState::Showdown;
                }
            } else {
                *turn = next_active(&players, seat);
            }
        }

        Ok(self.view())
    }
}
