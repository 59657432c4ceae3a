//! Hand evaluation: category detection, tie-breaks and best-five selection.
//!
//! All functions take 5 to 7 cards. Categories are tested from Royal Flush
//! down to High Card over every card supplied, and the first match wins.

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE, Rank, Suit};
use crate::error::EvalError;

mod best_five;
mod category;
mod compare;
mod winner;

pub use best_five::best_five;
pub use category::Category;
pub use compare::compare;
pub use winner::evaluate_winner;

/// Per-rank and per-suit card counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    ranks: [u8; 13],
    suits: [u8; 4],
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        let mut counts = Self {
            ranks: [0; 13],
            suits: [0; 4],
        };
        for card in cards {
            counts.ranks[card.rank.index()] += 1;
            counts.suits[card.suit.index()] += 1;
        }
        counts
    }

    const fn of(&self, rank: Rank) -> u8 {
        self.ranks[rank.index()]
    }

    /// Ranks held exactly `n` times, highest first.
    fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(move |rank| self.of(*rank) == n)
    }

    fn has(&self, n: u8) -> bool {
        self.ranks_with(n).next().is_some()
    }

    /// The suit held at least five times. Seven cards can hold at most one.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .find(|suit| self.suits[suit.index()] >= 5)
    }

    /// The rank of a full house's triplet and of the pair beneath it.
    ///
    /// A second triplet supplies the pair when there is no better pair.
    fn full_house(&self) -> Option<(Rank, Rank)> {
        let trips = self.ranks_with(3).next()?;
        let pair = Rank::ALL
            .iter()
            .rev()
            .copied()
            .find(|rank| *rank != trips && self.of(*rank) >= 2)?;
        Some((trips, pair))
    }
}

/// Bit set of the rank values present, bit `n` set for value `n`.
fn rank_mask<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u16 {
    cards
        .into_iter()
        .fold(0, |mask, card| mask | (1 << card.rank.value()))
}

/// Returns the top rank of the highest straight in `mask`.
///
/// The Ace closes the wheel (A-2-3-4-5) as a low card, so the wheel reports
/// Five as its top and ranks below a six-high straight.
fn straight_top(mask: u16) -> Option<Rank> {
    for top in (6..=Rank::Ace.value()).rev() {
        let run = 0b1_1111 << (top - 4);
        if mask & run == run {
            return Rank::from_value(top);
        }
    }

    let wheel = (1 << Rank::Ace.value()) | 0b11_1100;
    (mask & wheel == wheel).then_some(Rank::Five)
}

fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
    sorted
}

fn check_len(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < HAND_SIZE {
        Err(EvalError::InsufficientCards(cards.len()))
    } else {
        Ok(())
    }
}

fn categorize(cards: &[Card]) -> Category {
    let counts = Counts::new(cards);
    let flush = counts.flush_suit();

    if let Some(suit) = flush {
        let suited = rank_mask(cards.iter().filter(|card| card.suit == suit));
        match straight_top(suited) {
            Some(Rank::Ace) => return Category::RoyalFlush,
            Some(_) => return Category::StraightFlush,
            None => {}
        }
    }

    if counts.has(4) {
        Category::FourOfAKind
    } else if counts.full_house().is_some() {
        Category::FullHouse
    } else if flush.is_some() {
        Category::Flush
    } else if straight_top(rank_mask(cards)).is_some() {
        Category::Straight
    } else if counts.has(3) {
        Category::ThreeOfAKind
    } else {
        match counts.ranks_with(2).count() {
            0 => Category::HighCard,
            1 => Category::OnePair,
            _ => Category::TwoPair,
        }
    }
}

/// The strength of a hand: its category and the ranks that break ties
/// within that category, most significant first.
///
/// Ordering compares the category first and then the tie-break ranks, so two
/// hands compare equal exactly when they split a pot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    /// The hand category.
    pub category: Category,
    /// Tie-break ranks of the best five cards.
    pub key: Vec<Rank>,
}

/// Evaluates a hand of 5 to 7 cards.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] if fewer than five cards are given.
///
/// # Example
///
/// ```
/// use drawrs::{Card, Category, evaluate};
///
/// let cards: Vec<Card> = ["Kh", "Ks", "Kd", "Qc", "Jh"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate(&cards).unwrap().category, Category::ThreeOfAKind);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    check_len(cards)?;
    let category = categorize(cards);
    let five = best_five(cards, category)?;
    Ok(HandRank {
        category,
        key: compare::tiebreak(&five, category),
    })
}
