//! Hand categories.

use core::fmt;

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// No matching ranks, no straight, no flush.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank and at least two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks in one suit.
    StraightFlush,
    /// Ten to Ace in one suit.
    RoyalFlush,
}

impl Category {
    /// All categories from strongest to weakest.
    pub const STRONGEST_FIRST: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::HighCard,
    ];

    /// Returns the category rank, 1 for High Card up to 10 for Royal Flush.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display name, e.g. `"Three of a Kind"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// Returns whether hands of this category are ranked by their top card only.
    #[must_use]
    pub const fn is_straight(self) -> bool {
        matches!(
            self,
            Self::Straight | Self::StraightFlush | Self::RoyalFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
