//! Round engine and state management.

use alloc::vec::Vec;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{HandError, SetupError};
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::Player;
use crate::result::HandResult;
use crate::view::{PlayerView, TableView};

mod actions;
mod deal;
mod draw;
mod showdown;
pub mod state;

pub use state::{Action, Decision, RoundState};

use actions::Street;

/// Returns the seat of the given player.
fn seat_of(players: &[Player], player_id: u8) -> Option<usize> {
    players.iter().position(|player| player.id == player_id)
}

fn active_count(players: &[Player]) -> usize {
    players.iter().filter(|player| player.is_active()).count()
}

/// Returns the first active seat after `seat`, wrapping around the table.
///
/// `seat` itself is considered last.
fn next_active(players: &[Player], seat: usize) -> Option<usize> {
    let count = players.len();
    (1..=count)
        .map(|offset| (seat + offset) % count)
        .find(|next| players[*next].is_active())
}

/// Active seats in turn order, starting left of the dealer.
fn active_seats_from(players: &[Player], dealer: usize) -> Vec<usize> {
    let count = players.len();
    (1..=count)
        .map(|offset| (dealer + offset) % count)
        .filter(|seat| players[*seat].is_active())
        .collect()
}

/// A five-card draw game engine for one table.
///
/// The game owns the deck, the pot, the betting state and every player
/// record. It plays one hand at a time through [`RoundState`] and never makes
/// a decision for a player: [`Game::awaiting`] reports whose decision is
/// pending, and the caller answers with [`Game::act`] or [`Game::discard`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current phase of the hand.
    pub state: Mutex<RoundState>,
    /// Cards left in the deck.
    pub deck: Mutex<Deck>,
    /// Seat of the dealer button.
    dealer: Mutex<usize>,
    /// Players in seat order.
    players: Mutex<Vec<Player>>,
    /// Betting or draw round in progress.
    street: Mutex<Street>,
    /// Seat whose decision is pending.
    turn: Mutex<Option<usize>>,
    /// Chips contributed this hand.
    pot: Mutex<usize>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    /// Result of the last completed hand.
    last_result: Mutex<Option<HandResult>>,
}

impl Game {
    /// Seats the given `(id, chips)` players and prepares the first hand.
    ///
    /// The first seat holds the dealer button, so the second seat acts first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 or more than 10 players, or
    /// if a player ID is repeated.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), &[(1, 100), (2, 100)], 42).unwrap();
    /// assert_eq!(game.state(), RoundState::Ante);
    /// ```
    pub fn new(
        options: GameOptions,
        players: &[(u8, usize)],
        seed: u64,
    ) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(SetupError::InvalidPlayerCount(players.len()));
        }

        for (seat, (id, _)) in players.iter().enumerate() {
            if players[..seat].iter().any(|(other, _)| other == id) {
                return Err(SetupError::DuplicatePlayer(*id));
            }
        }

        let mut players: Vec<Player> = players
            .iter()
            .map(|&(id, chips)| Player::new(id, chips))
            .collect();
        players[0].is_dealer = true;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        info!("table seated with {} players", players.len());

        Ok(Self {
            options,
            state: Mutex::new(RoundState::Ante),
            deck: Mutex::new(deck),
            dealer: Mutex::new(0),
            street: Mutex::new(Street::new(players.len())),
            players: Mutex::new(players),
            turn: Mutex::new(None),
            pot: Mutex::new(0),
            rng: Mutex::new(rng),
            last_result: Mutex::new(None),
        })
    }

    /// Returns whether at most one player still holds chips.
    ///
    /// A player short of the ante still counts; they sit out at the ante.
    pub fn is_session_over(&self) -> bool {
        self.players
            .lock()
            .iter()
            .filter(|player| player.chips > 0)
            .count()
            < MIN_PLAYERS
    }

    /// Starts the next hand with a freshly shuffled deck.
    ///
    /// Moves from [`RoundState::HandComplete`] back to [`RoundState::Ante`].
    ///
    /// # Errors
    ///
    /// Returns an error if the current hand is not complete, or if at most
    /// one player still holds chips.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn new_hand(&self) -> Result<(), HandError> {
        let mut state = self.state.lock();
        if *state != RoundState::HandComplete {
            return Err(HandError::InvalidState);
        }
        if self.is_session_over() {
            return Err(HandError::SessionOver);
        }

        let mut players = self.players.lock();
        for player in players.iter_mut() {
            player.reset_for_hand();
        }

        let mut deck = Deck::new();
        deck.shuffle(&mut *self.rng.lock());

        *self.street.lock() = Street::new(players.len());
        *self.turn.lock() = None;
        *self.pot.lock() = 0;
        *self.deck.lock() = deck;
        *self.last_result.lock() = None;
        *state = RoundState::Ante;

        info!("new hand, dealer is seat {}", *self.dealer.lock());

        Ok(())
    }

    /// Returns the current phase of the hand.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the decision the game is waiting for, if any.
    ///
    /// `None` means the next step is driven by the table itself: posting
    /// antes, dealing, showdown or starting a new hand.
    pub fn awaiting(&self) -> Option<Decision> {
        let state = *self.state.lock();
        let players = self.players.lock();
        let street = self.street.lock();
        let seat = (*self.turn.lock())?;
        let player_id = players.get(seat)?.id;

        match state {
            RoundState::FirstBetting | RoundState::SecondBetting => Some(Decision::Act {
                player_id,
                to_call: street.owed(seat),
            }),
            RoundState::Draw => Some(Decision::Discard {
                player_id,
                max: self.options.max_discards,
            }),
            _ => None,
        }
    }

    /// Returns the player whose decision is pending.
    pub fn current_player(&self) -> Option<u8> {
        let players = self.players.lock();
        let turn = *self.turn.lock();
        turn.and_then(|seat| players.get(seat)).map(|player| player.id)
    }

    /// Returns the chips in the pot.
    pub fn pot(&self) -> usize {
        *self.pot.lock()
    }

    /// Returns the bet to match in the current betting round.
    pub fn current_bet(&self) -> usize {
        self.street.lock().current_bet
    }

    /// Returns the ID of the player holding the dealer button.
    pub fn dealer(&self) -> u8 {
        let dealer = *self.dealer.lock();
        self.players.lock()[dealer].id
    }

    /// Returns the chips behind for the specified player.
    pub fn chips(&self, player_id: u8) -> Option<usize> {
        let players = self.players.lock();
        seat_of(&players, player_id).map(|seat| players[seat].chips)
    }

    /// Returns the cards held by the specified player.
    pub fn hand(&self, player_id: u8) -> Option<Vec<Card>> {
        let players = self.players.lock();
        seat_of(&players, player_id).map(|seat| players[seat].hand.clone())
    }

    /// Returns a copy of every player record in seat order.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the result of the last completed hand.
    pub fn last_result(&self) -> Option<HandResult> {
        self.last_result.lock().clone()
    }

    /// Returns the public view of the table.
    ///
    /// Hands of players who reached a contested showdown are revealed once
    /// the hand is complete; every other hand stays hidden.
    pub fn view(&self) -> TableView {
        let state = *self.state.lock();
        let dealer = *self.dealer.lock();
        let players = self.players.lock();
        let street = self.street.lock();
        let turn = *self.turn.lock();
        let pot = *self.pot.lock();
        let result = self.last_result.lock().clone();

        let reveal = state == RoundState::HandComplete
            && result.as_ref().is_some_and(|result| !result.is_uncontested());

        let seats = players
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerView {
                id: player.id,
                chips: player.chips,
                folded: player.folded,
                is_dealer: player.is_dealer,
                committed: street.committed[seat],
                shown: (reveal && player.is_active()).then(|| player.hand.clone()),
            })
            .collect();

        TableView {
            state,
            dealer: players[dealer].id,
            current_player: turn.map(|seat| players[seat].id),
            last_raiser: street.last_raiser.map(|seat| players[seat].id),
            pot,
            current_bet: street.current_bet,
            players: seats,
            result,
        }
    }
}
