//! Property tests for deck and hand invariants.

use std::collections::HashSet;

use gofish::{BOOK_SIZE, Card, DECK_SIZE, Deck, GiveResult, Player, Rank};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rank() -> impl Strategy<Value = Rank> {
    (0..Rank::ALL.len()).prop_map(|index| Rank::ALL[index])
}

/// A hand of distinct cards taken from a shuffled deck.
fn hand() -> impl Strategy<Value = Vec<Card>> {
    (any::<u64>(), 0..=20_usize).prop_map(|(seed, size)| {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck.draw(size).unwrap()
    })
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        let fresh: HashSet<Card> = Deck::new().cards().iter().copied().collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(shuffled, fresh);
    }

    #[test]
    fn draw_splits_the_deck(seed in any::<u64>(), n in 0..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let drawn = deck.draw(n).unwrap();
        prop_assert_eq!(drawn.len(), n);
        prop_assert_eq!(deck.len(), DECK_SIZE - n);

        let drawn: HashSet<Card> = drawn.into_iter().collect();
        prop_assert_eq!(drawn.len(), n);
        prop_assert!(deck.cards().iter().all(|card| !drawn.contains(card)));
    }

    #[test]
    fn give_cards_removes_exactly_one_rank(cards in hand(), asked in rank()) {
        let mut player = Player::with_hand("A", cards.clone());

        match player.give_cards(asked) {
            GiveResult::Matched(given) => {
                prop_assert!(!given.is_empty());
                prop_assert!(given.iter().all(|card| card.rank == asked));
                prop_assert_eq!(given.len() + player.hand().len(), cards.len());
            }
            GiveResult::NoMatch => {
                prop_assert_eq!(player.hand(), cards.as_slice());
            }
        }
        prop_assert_eq!(player.count_rank(asked), 0);
    }

    #[test]
    fn check_books_keeps_the_card_count(cards in hand()) {
        let mut player = Player::with_hand("A", cards.clone());

        let completed = player.check_books();
        prop_assert_eq!(player.hand().len() + completed.len() * BOOK_SIZE, cards.len());
        for rank in Rank::ALL {
            prop_assert!(player.count_rank(rank) < BOOK_SIZE);
        }
        prop_assert!(player.check_books().is_empty());
    }
}
