//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits are unordered for hand ranking purposes; the declaration order only
/// fixes the canonical deck order and the slot used in suit count arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the slot of this suit in a 4-slot count array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            's' => Some(Self::Spades),
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }
}

/// Card rank, ordered from Two up to Ace.
///
/// The discriminant is the numeric value used for straights and tie-breaks
/// (Two = 2 .. Ace = 14). The Ace counts as 1 only when it closes the
/// five-high straight, and that rule lives in the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value (Two = 2 .. Ace = 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the slot of this rank in a 13-slot count array (Two = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    /// Returns the rank with the given numeric value, if any.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 2 && value <= 14 {
            Some(Self::ALL[value as usize - 2])
        } else {
            None
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '2'..='9' => Self::from_value(symbol as u8 - b'0'),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the two character form used by [`Display`](fmt::Display),
    /// e.g. `"Ah"`, `"Tc"` or `"9s"`, in either case. A leading `"10"` is
    /// accepted for tens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, rest) = if let Some(rest) = s.strip_prefix("10") {
            (Rank::Ten, rest)
        } else {
            let mut chars = s.chars();
            let symbol = chars.next().ok_or(ParseCardError::Length)?;
            (
                Rank::from_symbol(symbol.to_ascii_uppercase()).ok_or(ParseCardError::Rank)?,
                chars.as_str(),
            )
        };

        let mut chars = rest.chars();
        let suit = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Suit::from_symbol(symbol.to_ascii_lowercase())
                .ok_or(ParseCardError::Suit)?,
            _ => return Err(ParseCardError::Length),
        };

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a five-card draw hand.
pub const HAND_SIZE: usize = 5;
