use core::cmp::Ordering;

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::EvalError;
use crate::result::{Outcome, ShownHand};

use super::{best_five, compare, evaluate};

/// Determines the winners among several hands.
///
/// Hands are visited in the given order. The first hand starts as the best;
/// a stronger category replaces it, an equal category is settled with
/// [`compare`], and exact ties join the winners. Every hand's best five
/// cards are returned for display, losers included.
///
/// # Errors
///
/// Returns [`EvalError::NoPlayers`] if `hands` is empty, or
/// [`EvalError::InsufficientCards`] if any hand has fewer than five cards.
///
/// # Example
///
/// ```
/// use drawrs::{Card, Category, evaluate_winner};
///
/// let parse = |list: &[&str]| -> Vec<Card> { list.iter().map(|s| s.parse().unwrap()).collect() };
/// let pair = parse(&["Ah", "As", "Kd", "Qc", "Jh"]);
/// let trips = parse(&["Kh", "Ks", "Kd", "Qc", "Jh"]);
///
/// let outcome = evaluate_winner([(0, pair.as_slice()), (1, trips.as_slice())]).unwrap();
/// assert_eq!(outcome.winners, [1]);
/// assert_eq!(outcome.category, Category::ThreeOfAKind);
/// ```
pub fn evaluate_winner<'a, I>(hands: I) -> Result<Outcome, EvalError>
where
    I: IntoIterator<Item = (u8, &'a [Card])>,
{
    let hands = hands
        .into_iter()
        .map(|(player_id, cards)| Ok((player_id, cards, evaluate(cards)?.category)))
        .collect::<Result<Vec<_>, EvalError>>()?;

    let Some(&(first_id, first_cards, first_category)) = hands.first() else {
        return Err(EvalError::NoPlayers);
    };

    let mut best_cards = first_cards;
    let mut best_category = first_category;
    let mut winners = alloc::vec![first_id];
    let mut losers = Vec::new();

    for &(player_id, cards, category) in &hands[1..] {
        let ordering = match category.cmp(&best_category) {
            Ordering::Equal => compare(cards, best_cards, category)?,
            other => other,
        };

        match ordering {
            Ordering::Greater => {
                losers.append(&mut winners);
                winners.push(player_id);
                best_cards = cards;
                best_category = category;
            }
            Ordering::Equal => winners.push(player_id),
            Ordering::Less => losers.push(player_id),
        }
    }

    let hands = hands
        .iter()
        .map(|&(player_id, cards, category)| {
            Ok(ShownHand {
                player_id,
                category,
                cards: best_five(cards, category)?,
            })
        })
        .collect::<Result<Vec<_>, EvalError>>()?;

    debug!("showdown winners {winners:?} with {best_category}");

    Ok(Outcome {
        winners,
        losers,
        category: best_category,
        hands,
    })
}
