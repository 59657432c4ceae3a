use alloc::vec::Vec;

use log::{debug, warn};

use crate::card::HAND_SIZE;
use crate::error::HandError;

use super::{Game, RoundState, Street, active_count, active_seats_from};

impl Game {
    /// Collects the ante from every player.
    ///
    /// A player who cannot cover the ante sits the hand out: they are folded
    /// for this hand only. If fewer than two players post, the hand moves
    /// straight to [`RoundState::Showdown`].
    ///
    /// Returns the IDs of the players who were folded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the ante state.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn post_antes(&self) -> Result<Vec<u8>, HandError> {
        let mut state = self.state.lock();
        if *state != RoundState::Ante {
            return Err(HandError::InvalidState);
        }

        let ante = self.options.ante;
        let mut players = self.players.lock();
        let mut pot = self.pot.lock();
        let mut sat_out = Vec::new();

        for player in players.iter_mut().filter(|player| player.is_active()) {
            if !player.pay(ante, &mut pot) {
                warn!(
                    "player {} cannot cover the ante of {ante} and sits out",
                    player.id
                );
                player.folded = true;
                sat_out.push(player.id);
            }
        }

        *state = if active_count(&players) < 2 {
            RoundState::Showdown
        } else {
            RoundState::InitialDeal
        };
        debug!("antes posted, pot is {}", *pot);

        Ok(sat_out)
    }

    /// Deals five cards to every active player.
    ///
    /// Cards go out one at a time, round-robin from the left of the dealer.
    /// On success the first betting round begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the initial deal state, or if
    /// the deck cannot cover the deal. The game is left unchanged on error.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn deal(&self) -> Result<(), HandError> {
        let mut state = self.state.lock();
        if *state != RoundState::InitialDeal {
            return Err(HandError::InvalidState);
        }

        let dealer = *self.dealer.lock();
        let mut players = self.players.lock();
        let mut deck = self.deck.lock();

        let order = active_seats_from(&players, dealer);
        if deck.len() < order.len() * HAND_SIZE {
            return Err(HandError::EmptyDeck);
        }

        for _ in 0..HAND_SIZE {
            for &seat in &order {
                let card = deck.draw()?;
                players[seat].hand.push(card);
            }
        }

        *self.street.lock() = Street::new(players.len());
        *self.turn.lock() = order.first().copied();
        *state = RoundState::FirstBetting;
        debug!("dealt {} hands, {} cards left", order.len(), deck.len());

        Ok(())
    }
}
