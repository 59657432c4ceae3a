//! A five-card draw poker engine with optional `no_std` support.
//!
//! The crate has two halves:
//!
//! - the [`eval`] module ranks hands of 5 to 7 cards, breaks ties and picks
//!   the best five cards for display;
//! - the [`Game`] type runs a table hand by hand: antes, the deal, two
//!   betting rounds around the draw, showdown and payout.
//!
//! # Example
//!
//! ```
//! use drawrs::{Action, Decision, Game, GameOptions, RoundState};
//!
//! let game = Game::new(GameOptions::default(), &[(0, 100), (1, 100)], 42).unwrap();
//! game.post_antes().unwrap();
//! game.deal().unwrap();
//!
//! // Seat 0 deals, so player 1 acts first.
//! assert_eq!(game.awaiting(), Some(Decision::Act { player_id: 1, to_call: 0 }));
//! game.act(1, Action::Fold).unwrap();
//!
//! assert_eq!(game.state(), RoundState::Showdown);
//! let result = game.showdown().unwrap();
//! assert_eq!(result.payout(0), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DeckError, DrawError, EvalError, HandError, ParseCardError, SetupError,
    ShowdownError,
};
pub use eval::{Category, HandRank, best_five, compare, evaluate, evaluate_winner};
pub use game::{Action, Decision, Game, RoundState};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use player::Player;
pub use result::{HandResult, Outcome, Payout, ShownHand};
pub use view::{PlayerView, TableView};
