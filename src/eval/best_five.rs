use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE, Rank};
use crate::error::EvalError;

use super::{Category, Counts, check_len, rank_mask, sorted_desc, straight_top};

/// Lays out `primary` followed by the highest remaining cards.
///
/// `sorted` must hold at least five cards in descending rank order.
fn assemble(primary: &[Card], sorted: &[Card]) -> [Card; HAND_SIZE] {
    let mut five = [sorted[0]; HAND_SIZE];
    let fill = primary
        .iter()
        .chain(sorted.iter().filter(|card| !primary.contains(card)));
    for (slot, card) in five.iter_mut().zip(fill) {
        *slot = *card;
    }
    five
}

fn of_rank(sorted: &[Card], rank: Rank) -> impl Iterator<Item = Card> + '_ {
    sorted.iter().copied().filter(move |card| card.rank == rank)
}

/// The five cards of the highest straight in `sorted`, top card first.
///
/// A wheel comes out as Five, Four, Three, Two, Ace.
fn straight_cards(sorted: &[Card]) -> Option<Vec<Card>> {
    let top = straight_top(rank_mask(sorted))?;
    let values = if top == Rank::Five {
        [5, 4, 3, 2, Rank::Ace.value()]
    } else {
        let top = top.value();
        [top, top - 1, top - 2, top - 3, top - 4]
    };

    values
        .iter()
        .map(|value| {
            sorted
                .iter()
                .copied()
                .find(|card| card.rank.value() == *value)
        })
        .collect()
}

fn straight_flush_cards(sorted: &[Card], counts: &Counts) -> Option<Vec<Card>> {
    let suit = counts.flush_suit()?;
    let suited: Vec<Card> = sorted
        .iter()
        .copied()
        .filter(|card| card.suit == suit)
        .collect();
    straight_cards(&suited)
}

/// Selects the best five-card sub-hand of `cards` for `category`.
///
/// The grouped cards come first (quads, triplet, pairs highest first)
/// followed by the highest kickers; straights run from their top card down.
/// When `cards` do not actually hold `category`, the five highest cards are
/// returned instead.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] if fewer than five cards are given.
pub fn best_five(cards: &[Card], category: Category) -> Result<[Card; HAND_SIZE], EvalError> {
    check_len(cards)?;
    let sorted = sorted_desc(cards);
    let counts = Counts::new(cards);

    let primary: Option<Vec<Card>> = match category {
        Category::RoyalFlush => straight_flush_cards(&sorted, &counts)
            .filter(|five| five.first().is_some_and(|card| card.rank == Rank::Ace)),
        Category::StraightFlush => straight_flush_cards(&sorted, &counts),
        Category::FourOfAKind => counts
            .ranks_with(4)
            .next()
            .map(|quads| of_rank(&sorted, quads).collect()),
        Category::FullHouse => counts.full_house().map(|(trips, pair)| {
            of_rank(&sorted, trips)
                .chain(of_rank(&sorted, pair).take(2))
                .collect()
        }),
        Category::Flush => counts.flush_suit().map(|suit| {
            sorted
                .iter()
                .copied()
                .filter(|card| card.suit == suit)
                .take(HAND_SIZE)
                .collect()
        }),
        Category::Straight => straight_cards(&sorted),
        Category::ThreeOfAKind => counts
            .ranks_with(3)
            .next()
            .map(|trips| of_rank(&sorted, trips).collect()),
        Category::TwoPair => {
            let pairs: Vec<Rank> = counts.ranks_with(2).take(2).collect();
            (pairs.len() == 2).then(|| {
                pairs
                    .iter()
                    .flat_map(|pair| of_rank(&sorted, *pair))
                    .collect()
            })
        }
        Category::OnePair => counts
            .ranks_with(2)
            .next()
            .map(|pair| of_rank(&sorted, pair).collect()),
        Category::HighCard => None,
    };

    Ok(assemble(primary.as_deref().unwrap_or_default(), &sorted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn assemble_fills_with_highest_remaining() {
        let sorted = sorted_desc(&cards(&["2c", "9h", "Kd", "9s", "4h", "Jc"]));
        let pair = cards(&["9h", "9s"]);
        assert_eq!(
            assemble(&pair, &sorted),
            [pair[0], pair[1], sorted[0], sorted[1], sorted[4]]
        );
    }

    #[test]
    fn straight_cards_prefers_highest_run() {
        let sorted = sorted_desc(&cards(&["3c", "4h", "5d", "6s", "7h", "8c", "Ah"]));
        let five = straight_cards(&sorted).unwrap();
        let ranks: Vec<Rank> = five.iter().map(|c| c.rank).collect();
        assert_eq!(
            ranks,
            [Rank::Eight, Rank::Seven, Rank::Six, Rank::Five, Rank::Four]
        );
    }
}
