//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The top card is the next one drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards, with the top of the deck at the end.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck with all 52 cards in canonical order.
    ///
    /// Cards are laid out suit by suit (spades, hearts, diamonds, clubs),
    /// Two to Ace within each suit, and the last card laid out is on top.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals the given cards in order, first card first.
    ///
    /// The caller is responsible for not repeating cards.
    #[must_use]
    pub fn stacked(draw_order: &[Card]) -> Self {
        let mut cards = draw_order.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards with an unbiased Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards left, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn new_deck_has_every_card_once() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|c| **c == Card::new(rank, suit))
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn shuffle_is_seeded_and_keeps_cards() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a, Deck::new());

        let mut sorted = a.cards().to_vec();
        sorted.sort_by_key(|c| (c.suit.index(), c.rank));
        assert_eq!(sorted, Deck::new().cards());
    }

    #[test]
    fn draw_until_empty() {
        let first = Card::new(Rank::Ace, Suit::Spades);
        let second = Card::new(Rank::Two, Suit::Clubs);
        let mut deck = Deck::stacked(&[first, second]);

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
    }
}
