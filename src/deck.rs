//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled standard deck: one card per suit and rank, suits
    /// in the outer loop and ranks in the inner loop.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with a fixed order. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Reorders the deck uniformly at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top `n` cards, in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if fewer than `n` cards remain. The deck
    /// is left untouched; callers check [`Deck::len`] before asking for more.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::EmptyDeck);
        }

        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Returns whether the deck holds exactly one of each standard card, in
    /// any order.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }

        let mut sorted = self.cards.clone();
        sorted.sort_unstable_by_key(|card| (card.suit, card.rank));
        sorted == Self::new().cards
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
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

    fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by_key(|card| (card.suit, card.rank));
        cards
    }

    #[test]
    fn new_deck_is_suits_then_ranks() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Two));
        assert_eq!(deck.cards()[12], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck.cards()[13], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(deck.cards()[51], Card::new(Suit::Diamonds, Rank::Ace));
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        deck.shuffle(&mut rng);

        assert_ne!(deck, Deck::new());
        assert_eq!(sorted(deck.cards().to_vec()), sorted(Deck::new().cards().to_vec()));
    }

    #[test]
    fn draw_takes_from_the_top() {
        let mut deck = Deck::new();
        let drawn = deck.draw(2).unwrap();
        assert_eq!(
            drawn,
            vec![
                Card::new(Suit::Diamonds, Rank::Ace),
                Card::new(Suit::Diamonds, Rank::King),
            ]
        );
        assert_eq!(deck.len(), DECK_SIZE - 2);
    }

    #[test]
    fn completeness_needs_every_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut deck = Deck::new();
        assert!(deck.is_complete());
        deck.shuffle(&mut rng);
        assert!(deck.is_complete());

        let mut cards = Deck::new().cards().to_vec();
        cards[0] = cards[1];
        assert!(!Deck::from_cards(cards).is_complete());

        let mut short = Deck::new();
        short.draw_one().unwrap();
        assert!(!short.is_complete());
    }

    #[test]
    fn overdraw_fails_without_mutating() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Clubs, Rank::Five)]);
        assert_eq!(deck.draw(2), Err(DeckError::EmptyDeck));
        assert_eq!(deck.len(), 1);

        assert_eq!(deck.draw_one(), Ok(Card::new(Suit::Clubs, Rank::Five)));
        assert_eq!(deck.draw_one(), Err(DeckError::EmptyDeck));
        assert_eq!(deck.draw(1), Err(DeckError::EmptyDeck));
    }
}
