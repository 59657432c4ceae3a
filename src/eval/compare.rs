use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::EvalError;

use super::{Category, best_five};

/// Tie-break ranks of a five-card hand, most significant first.
///
/// Straights are keyed by their top card alone (Five for the wheel). Every
/// other category is keyed by its distinct ranks ordered by group size and
/// then by rank, which puts quads, triplets and pairs ahead of the kickers.
pub(super) fn tiebreak(five: &[Card], category: Category) -> Vec<Rank> {
    if category.is_straight() {
        return five.first().map(|card| card.rank).into_iter().collect();
    }

    let mut counts = [0_u8; 13];
    for card in five {
        counts[card.rank.index()] += 1;
    }

    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter(|rank| counts[rank.index()] > 0)
        .map(|rank| (counts[rank.index()], *rank))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups.into_iter().map(|(_, rank)| rank).collect()
}

/// Compares two hands that share `category`.
///
/// Returns [`Ordering::Greater`] when `a` wins, [`Ordering::Less`] when `b`
/// wins and [`Ordering::Equal`] for a true tie. Hands of more than five cards
/// are compared on their best five.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] if either hand has fewer than
/// five cards.
pub fn compare(a: &[Card], b: &[Card], category: Category) -> Result<Ordering, EvalError> {
    let a = tiebreak(&best_five(a, category)?, category);
    let b = tiebreak(&best_five(b, category)?, category);
    Ok(a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn tiebreak_orders_groups_before_kickers() {
        let five = cards(&["3h", "Kc", "3s", "Kd", "9h"]);
        assert_eq!(
            tiebreak(&five, Category::TwoPair),
            [Rank::King, Rank::Three, Rank::Nine]
        );

        let five = cards(&["2h", "2c", "Ah", "2s", "Ad"]);
        assert_eq!(tiebreak(&five, Category::FullHouse), [Rank::Two, Rank::Ace]);
    }

    #[test]
    fn tiebreak_keys_straights_by_top_card() {
        let wheel = cards(&["5h", "4c", "3s", "2d", "Ah"]);
        assert_eq!(tiebreak(&wheel, Category::Straight), [Rank::Five]);
    }
}
