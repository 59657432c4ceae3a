use alloc::vec::Vec;

use log::debug;

use crate::error::DrawError;
use crate::view::TableView;

use super::{Game, RoundState, Street, active_seats_from, next_active, seat_of};

impl Game {
    /// Exchanges the cards at `indices` in the player's hand for new ones.
    ///
    /// An empty slice stands pat. Kept cards stay in order and the
    /// replacements are appended in the order they were drawn. Once every
    /// active player has drawn, the second betting round begins.
    ///
    /// Returns the updated table view.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the draw, the player is unknown
    /// or not the one to draw, too many or invalid indices are given, or the
    /// deck cannot cover the replacements. A rejected draw changes nothing;
    /// [`DrawError::EmptyDeck`] means the hand cannot continue and should be
    /// aborted with [`Game::abort_hand`].
    pub fn discard(&self, player_id: u8, indices: &[usize]) -> Result<TableView, DrawError> {
        {
            let mut state = self.state.lock();
            if *state != RoundState::Draw {
                return Err(DrawError::InvalidState);
            }

            let dealer = *self.dealer.lock();
            let mut players = self.players.lock();
            let seat = seat_of(&players, player_id).ok_or(DrawError::PlayerNotFound)?;
            let mut street = self.street.lock();
            let mut turn = self.turn.lock();
            if *turn != Some(seat) {
                return Err(DrawError::NotYourTurn);
            }

            let max = self.options.max_discards;
            if indices.len() > max {
                return Err(DrawError::TooManyDiscards(max));
            }

            let hand = &mut players[seat].hand;
            for (position, &index) in indices.iter().enumerate() {
                if index >= hand.len() {
                    return Err(DrawError::InvalidCardIndex(index));
                }
                if indices[..position].contains(&index) {
                    return Err(DrawError::DuplicateCardIndex(index));
                }
            }

            let mut deck = self.deck.lock();
            if deck.len() < indices.len() {
                return Err(DrawError::EmptyDeck);
            }

            let mut discarded: Vec<usize> = indices.to_vec();
            discarded.sort_unstable_by(|a, b| b.cmp(a));
            for index in discarded {
                hand.remove(index);
            }
            for _ in indices {
                hand.push(deck.draw()?);
            }
            drop(deck);

            street.acted[seat] = true;
            debug!("player {player_id} drew {} cards", indices.len());

            if street.is_complete(&players) {
                *street = Street::new(players.len());
                *turn = active_seats_from(&players, dealer).first().copied();
                *state = RoundState::SecondBetting;
            } else {
                *turn = next_active(&players, seat);
            }
        }

        Ok(self.view())
    }
}
