use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::card::Rank;
use crate::error::TurnError;
use crate::player::GiveResult;
use crate::result::TurnOutcome;

use super::{Game, refill_hand};

impl Game {
    /// Plays one ask: `asker` asks `target` for every card of `rank`.
    ///
    /// On a catch the asker takes the cards and lays down any books; a target
    /// left empty-handed refills from the deck if it can. Otherwise the asker
    /// goes fishing, drawing one card when the deck is not empty, and lays down
    /// any books.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::PlayerNotFound`] if either index is out of range and
    /// [`TurnError::SelfAsk`] if they are the same. Nothing is changed in
    /// either case.
    pub fn take_turn(
        &mut self,
        asker: usize,
        target: usize,
        rank: Rank,
    ) -> Result<TurnOutcome, TurnError> {
        if asker >= self.players.len() || target >= self.players.len() {
            return Err(TurnError::PlayerNotFound);
        }
        if asker == target {
            return Err(TurnError::SelfAsk);
        }

        let [asker, target] = self
            .players
            .get_disjoint_mut([asker, target])
            .map_err(|_| TurnError::PlayerNotFound)?;

        let outcome = match asker.ask_for_card(rank, target) {
            GiveResult::Matched(cards) => {
                let count = cards.len();
                asker.receive(cards);
                let books = asker.check_books();

                let target_refill = if target.check_hand() && !self.deck.is_empty() {
                    refill_hand(&mut self.deck, target, self.options.refill_size)?
                } else {
                    0
                };

                debug!(
                    asker = asker.name(),
                    target = target.name(),
                    %rank,
                    cards = count,
                    target_refill,
                    "caught"
                );

                TurnOutcome::Catch {
                    cards: count,
                    books,
                    target_refill,
                }
            }
            GiveResult::NoMatch => {
                let drawn = if self.deck.is_empty() {
                    None
                } else {
                    Some(self.deck.draw_one()?)
                };
                asker.receive(drawn);
                let books = asker.check_books();

                debug!(
                    asker = asker.name(),
                    target = target.name(),
                    %rank,
                    drew = drawn.is_some(),
                    "go fish"
                );

                TurnOutcome::GoFish { drawn, books }
            }
        };

        for rank in outcome.books() {
            debug!(player = asker.name(), %rank, "completed book");
        }

        Ok(outcome)
    }

    /// Picks an opponent for `current` uniformly among the other players who
    /// still hold cards.
    ///
    /// Returns `None` when nobody is eligible, meaning the turn is skipped.
    pub fn choose_opponent(&mut self, current: usize) -> Option<usize> {
        let eligible: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|&(index, player)| index != current && !player.check_hand())
            .map(|(index, _)| index)
            .collect();

        eligible.choose(&mut self.rng).copied()
    }

    /// Picks a rank for `current` to ask for.
    ///
    /// The choice is uniform over the cards in hand, so a rank held twice is
    /// twice as likely as a rank held once. Returns `None` when the hand is
    /// empty or the index is out of range.
    pub fn choose_rank(&mut self, current: usize) -> Option<Rank> {
        self.players
            .get(current)?
            .hand()
            .choose(&mut self.rng)
            .map(|card| card.rank)
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, Rank, Suit};
    use crate::game::Game;
    use crate::player::Player;

    fn game_with_hands(hands: [Vec<Card>; 2]) -> Game {
        let mut game = Game::new(2, 11).unwrap();
        for (index, hand) in hands.into_iter().enumerate() {
            let player = game.player_mut(index).unwrap();
            *player = Player::with_hand(player.name().to_owned(), hand);
        }
        game
    }

    #[test]
    fn choose_rank_only_picks_held_ranks() {
        let mut game = game_with_hands([
            vec![
                Card::new(Suit::Spades, Rank::Jack),
                Card::new(Suit::Hearts, Rank::Jack),
                Card::new(Suit::Clubs, Rank::Four),
            ],
            vec![Card::new(Suit::Clubs, Rank::Two)],
        ]);

        for _ in 0..50 {
            let rank = game.choose_rank(0).unwrap();
            assert!(rank == Rank::Jack || rank == Rank::Four);
        }
    }

    #[test]
    fn choose_rank_weights_by_cards_held() {
        let mut game = game_with_hands([
            vec![
                Card::new(Suit::Spades, Rank::Jack),
                Card::new(Suit::Hearts, Rank::Jack),
                Card::new(Suit::Clubs, Rank::Four),
            ],
            vec![Card::new(Suit::Clubs, Rank::Two)],
        ]);

        let trials = 3000;
        let jacks = (0..trials)
            .filter(|_| game.choose_rank(0) == Some(Rank::Jack))
            .count();

        // Two jacks to one four: about two thirds of the picks.
        assert!((1800..=2200).contains(&jacks), "jacks picked {jacks} times");
    }

    #[test]
    fn choose_rank_of_empty_hand_is_none() {
        let mut game = game_with_hands([Vec::new(), vec![Card::new(Suit::Clubs, Rank::Two)]]);
        assert_eq!(game.choose_rank(0), None);
        assert_eq!(game.choose_rank(9), None);
    }

    #[test]
    fn choose_opponent_skips_self_and_empty_hands() {
        let mut game = game_with_hands([vec![Card::new(Suit::Clubs, Rank::Two)], Vec::new()]);
        assert_eq!(game.choose_opponent(0), None);
        assert_eq!(game.choose_opponent(1), Some(0));
    }
}
