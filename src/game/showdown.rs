use alloc::vec::Vec;

use log::{info, warn};

use crate::error::{HandError, ShowdownError};
use crate::eval::evaluate_winner;
use crate::result::{HandResult, Payout};

use super::{Game, RoundState, Street, active_seats_from};

/// Splits `pot` evenly between `winners` shares.
///
/// Odd chips go one at a time to the first winners, who are listed in seat
/// order from the left of the dealer.
fn split_pot(pot: usize, winners: usize) -> Vec<usize> {
    if winners == 0 {
        return Vec::new();
    }
    let share = pot / winners;
    let odd = pot % winners;
    (0..winners)
        .map(|index| share + usize::from(index < odd))
        .collect()
}

impl Game {
    /// Awards the pot and completes the hand.
    ///
    /// With more than one player left, every remaining hand is evaluated and
    /// the pot is split evenly between the best hands. A single remaining
    /// player takes the pot without showing. Afterwards the pot is empty and
    /// the dealer button moves to the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the showdown state, or if a
    /// remaining hand cannot be evaluated.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn showdown(&self) -> Result<HandResult, ShowdownError> {
        let mut state = self.state.lock();
        if *state != RoundState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let mut dealer = self.dealer.lock();
        let mut players = self.players.lock();
        let order = active_seats_from(&players, *dealer);

        let (winner_seats, outcome) = if order.len() > 1 {
            let outcome = evaluate_winner(
                order
                    .iter()
                    .map(|&seat| (players[seat].id, players[seat].hand.as_slice())),
            )?;
            let seats: Vec<usize> = order
                .iter()
                .copied()
                .filter(|&seat| outcome.winners.contains(&players[seat].id))
                .collect();
            (seats, Some(outcome))
        } else {
            (order, None)
        };

        let mut pot = self.pot.lock();
        let payouts: Vec<Payout> = winner_seats
            .iter()
            .zip(split_pot(*pot, winner_seats.len()))
            .map(|(&seat, amount)| {
                players[seat].chips += amount;
                Payout {
                    player_id: players[seat].id,
                    amount,
                }
            })
            .collect();

        let result = HandResult {
            pot: *pot,
            payouts,
            outcome,
        };
        *pot = 0;
        for player in players.iter_mut() {
            player.contributed = 0;
        }

        players[*dealer].is_dealer = false;
        *dealer = (*dealer + 1) % players.len();
        players[*dealer].is_dealer = true;

        *self.street.lock() = Street::new(players.len());
        *self.turn.lock() = None;
        *state = RoundState::HandComplete;

        match &result.outcome {
            Some(outcome) => info!(
                "hand complete, {:?} win {} with {}",
                outcome.winners, result.pot, outcome.category
            ),
            None => info!("hand complete, pot of {} won uncontested", result.pot),
        }
        *self.last_result.lock() = Some(result.clone());

        Ok(result)
    }

    /// Abandons the current hand and refunds every contribution.
    ///
    /// Used when the hand cannot continue, e.g. after
    /// [`DrawError::EmptyDeck`](crate::DrawError::EmptyDeck). The dealer
    /// button stays where it is so the hand can be replayed.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is already complete.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn abort_hand(&self) -> Result<(), HandError> {
        let mut state = self.state.lock();
        let aborted = *state;
        if aborted == RoundState::HandComplete {
            return Err(HandError::InvalidState);
        }

        let mut players = self.players.lock();
        for player in players.iter_mut() {
            player.chips += player.contributed;
            player.contributed = 0;
        }

        *self.street.lock() = Street::new(players.len());
        *self.turn.lock() = None;
        *self.pot.lock() = 0;
        *self.last_result.lock() = None;
        *state = RoundState::HandComplete;
        warn!("hand aborted in {aborted:?}, contributions refunded");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pot_hands_odd_chips_to_first_winners() {
        assert_eq!(split_pot(10, 1), [10]);
        assert_eq!(split_pot(10, 2), [5, 5]);
        assert_eq!(split_pot(10, 3), [4, 3, 3]);
        assert_eq!(split_pot(11, 4), [3, 3, 3, 2]);
        assert!(split_pot(10, 0).is_empty());
    }
}
