//! Players, their hands and their books.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{BOOK_SIZE, Card, Rank};

/// What a player hands over when asked for a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveResult {
    /// The player held the rank and gave up every card of it.
    Matched(Vec<Card>),
    /// The player held no card of the rank. Go fish.
    NoMatch,
}

impl GiveResult {
    /// Returns the number of cards handed over.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Matched(cards) => cards.len(),
            Self::NoMatch => 0,
        }
    }

    /// Returns whether nothing was handed over.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// A Go Fish player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in hand. Order carries no meaning.
    hand: Vec<Card>,
    /// Ranks this player has completed.
    books: HashSet<Rank>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hand(name, Vec::new())
    }

    /// Creates a player holding the given cards.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
            books: HashSet::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the completed ranks.
    #[must_use]
    pub const fn books(&self) -> &HashSet<Rank> {
        &self.books
    }

    /// Returns the number of completed books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the player has completed the book for `rank`.
    #[must_use]
    pub fn has_book(&self, rank: Rank) -> bool {
        self.books.contains(&rank)
    }

    /// Returns how many cards of `rank` are in hand.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.hand.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns true if the hand is empty.
    #[must_use]
    pub fn check_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// Adds cards to the hand.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Gives up every card of `rank`.
    ///
    /// The hand keeps only the non-matching cards. If nothing matched the hand
    /// is unchanged and [`GiveResult::NoMatch`] is returned.
    pub fn give_cards(&mut self, rank: Rank) -> GiveResult {
        let (matched, kept): (Vec<Card>, Vec<Card>) =
            self.hand.iter().partition(|card| card.rank == rank);

        if matched.is_empty() {
            return GiveResult::NoMatch;
        }

        self.hand = kept;
        GiveResult::Matched(matched)
    }

    /// Asks `opponent` for every card of `rank`.
    ///
    /// This only relays the request. Moving the cards into this player's hand is
    /// up to the caller.
    pub fn ask_for_card(&self, rank: Rank, opponent: &mut Self) -> GiveResult {
        opponent.give_cards(rank)
    }

    /// Lays down every complete book in hand.
    ///
    /// A rank held exactly [`BOOK_SIZE`] times is recorded as a book and its
    /// cards leave the hand. Returns the ranks completed by this call.
    pub fn check_books(&mut self) -> Vec<Rank> {
        let mut completed = Vec::new();

        for rank in Rank::ALL {
            if self.count_rank(rank) == BOOK_SIZE && self.books.insert(rank) {
                self.hand.retain(|card| card.rank != rank);
                completed.push(rank);
            }
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn give_cards_splits_the_hand() {
        let mut player = Player::with_hand(
            "A",
            vec![
                card(Suit::Spades, Rank::Seven),
                card(Suit::Hearts, Rank::Two),
                card(Suit::Clubs, Rank::Seven),
            ],
        );

        let given = player.give_cards(Rank::Seven);
        assert_eq!(
            given,
            GiveResult::Matched(vec![
                card(Suit::Spades, Rank::Seven),
                card(Suit::Clubs, Rank::Seven),
            ])
        );
        assert_eq!(given.len(), 2);
        assert_eq!(player.hand(), &[card(Suit::Hearts, Rank::Two)]);
    }

    #[test]
    fn give_cards_without_match_leaves_hand() {
        let mut player = Player::with_hand("A", vec![card(Suit::Hearts, Rank::Two)]);

        let given = player.give_cards(Rank::King);
        assert_eq!(given, GiveResult::NoMatch);
        assert!(given.is_empty());
        assert_eq!(player.hand(), &[card(Suit::Hearts, Rank::Two)]);
    }

    #[test]
    fn ask_for_card_only_changes_the_opponent() {
        let asker = Player::with_hand("A", vec![card(Suit::Hearts, Rank::Nine)]);
        let mut opponent = Player::with_hand("B", vec![card(Suit::Clubs, Rank::Nine)]);

        let given = asker.ask_for_card(Rank::Nine, &mut opponent);
        assert_eq!(given, GiveResult::Matched(vec![card(Suit::Clubs, Rank::Nine)]));
        assert_eq!(asker.hand().len(), 1);
        assert!(opponent.check_hand());
    }

    #[test]
    fn check_books_removes_four_of_a_kind() {
        let mut player = Player::with_hand(
            "A",
            vec![
                card(Suit::Spades, Rank::Queen),
                card(Suit::Hearts, Rank::Queen),
                card(Suit::Hearts, Rank::Three),
                card(Suit::Clubs, Rank::Queen),
                card(Suit::Diamonds, Rank::Queen),
                card(Suit::Spades, Rank::Four),
                card(Suit::Clubs, Rank::Five),
            ],
        );

        assert_eq!(player.check_books(), vec![Rank::Queen]);
        assert_eq!(player.hand().len(), 3);
        assert!(player.has_book(Rank::Queen));
        assert_eq!(player.book_count(), 1);

        // Nothing left to lay down.
        assert!(player.check_books().is_empty());
        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.book_count(), 1);
    }

    #[test]
    fn three_of_a_kind_is_not_a_book() {
        let mut player = Player::with_hand(
            "A",
            vec![
                card(Suit::Spades, Rank::Ace),
                card(Suit::Hearts, Rank::Ace),
                card(Suit::Clubs, Rank::Ace),
            ],
        );

        assert!(player.check_books().is_empty());
        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.book_count(), 0);
    }
}
