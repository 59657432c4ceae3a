//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two or more than ten players.
    #[error("a game needs between 2 and 10 players, got {0}")]
    InvalidPlayerCount(usize),
    /// The same player ID was listed twice.
    #[error("player {0} is seated more than once")]
    DuplicatePlayer(u8),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when evaluating hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Fewer than five cards were supplied.
    #[error("a hand needs at least 5 cards, got {0}")]
    InsufficientCards(usize),
    /// No hands were supplied.
    #[error("no players to evaluate")]
    NoPlayers,
}

/// Errors that can occur when starting, anteing, dealing or aborting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Invalid game state for this step.
    #[error("invalid game state for this step")]
    InvalidState,
    /// At most one player still holds chips.
    #[error("session is over, at most one player holds chips")]
    SessionOver,
    /// The deck ran out while dealing.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during betting actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The action is not legal right now.
    #[error("illegal action")]
    IllegalAction,
    /// The player does not have enough chips for this action.
    #[error("insufficient chips")]
    InsufficientChips,
}

/// Errors that can occur during the draw phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// More discards than the table allows.
    #[error("at most {0} cards may be discarded")]
    TooManyDiscards(usize),
    /// A discard index is outside the hand.
    #[error("no card at index {0}")]
    InvalidCardIndex(usize),
    /// The same discard index was given twice.
    #[error("card index {0} discarded twice")]
    DuplicateCardIndex(usize),
    /// Not enough cards left to replace the discards.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// A showdown hand could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is not a rank symbol followed by a suit symbol.
    #[error("expected a rank followed by a suit, e.g. \"Ah\"")]
    Length,
    /// Unknown rank symbol.
    #[error("unknown rank symbol")]
    Rank,
    /// Unknown suit symbol.
    #[error("unknown suit symbol")]
    Suit,
}

impl From<DeckError> for HandError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<DeckError> for DrawError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}
