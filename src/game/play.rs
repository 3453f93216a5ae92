use alloc::vec::Vec;
use tracing::{debug, info};

use crate::error::TurnError;
use crate::player::Player;
use crate::result::{GameResult, PlayerStanding, SkipReason, TurnEvent};

use super::Game;

impl Game {
    /// Plays the game to completion and returns the final standings.
    ///
    /// # Errors
    ///
    /// Propagates a [`TurnError`] from a turn. The loop only addresses seated
    /// players and only draws what the deck holds, so this does not happen in
    /// practice.
    pub fn play(&mut self) -> Result<GameResult, TurnError> {
        self.play_with(|_| {})
    }

    /// Plays the game to completion, reporting every refill, skip and ask to
    /// `observer` as it happens.
    ///
    /// Players act in seating order, round after round, until the deck and
    /// every hand are empty.
    ///
    /// # Errors
    ///
    /// Propagates a [`TurnError`] from a turn.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, TurnEvent};
    ///
    /// let mut game = Game::new(3, 7).unwrap();
    /// let mut asks = 0;
    /// let result = game
    ///     .play_with(|event| {
    ///         if matches!(event, TurnEvent::Asked { .. }) {
    ///             asks += 1;
    ///         }
    ///     })
    ///     .unwrap();
    ///
    /// assert!(asks > 0);
    /// assert_eq!(result.total_books(), 13);
    /// ```
    pub fn play_with<F>(&mut self, mut observer: F) -> Result<GameResult, TurnError>
    where
        F: FnMut(&TurnEvent),
    {
        let mut round = 0_usize;
        while !self.is_game_over() {
            round += 1;
            for current in 0..self.players.len() {
                if self.is_game_over() {
                    break;
                }
                self.play_turn(current, &mut observer)?;
            }
        }

        debug!(rounds = round, "game over");
        Ok(self.display_winner())
    }

    /// Plays `current`'s turn: refill an empty hand, pick an opponent and a
    /// rank, then ask.
    ///
    /// When no other player holds cards the turn passes; if the deck is also
    /// empty, `current` first lays down any complete books. When `current` has
    /// nothing to ask with, the turn passes.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::PlayerNotFound`] if `current` is out of range.
    pub fn play_turn<F>(&mut self, current: usize, observer: &mut F) -> Result<(), TurnError>
    where
        F: FnMut(&TurnEvent),
    {
        let player = self.players.get(current).ok_or(TurnError::PlayerNotFound)?;

        if player.check_hand() && !self.deck.is_empty() {
            let cards = self.refill(current)?;
            observer(&TurnEvent::Refilled {
                player: current,
                cards,
            });
        }

        let Some(target) = self.choose_opponent(current) else {
            let books = if self.deck.is_empty() {
                self.players
                    .get_mut(current)
                    .map(Player::check_books)
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            observer(&TurnEvent::Skipped {
                player: current,
                reason: SkipReason::NoOpponent,
                books,
            });
            return Ok(());
        };

        let Some(rank) = self.choose_rank(current) else {
            observer(&TurnEvent::Skipped {
                player: current,
                reason: SkipReason::EmptyHand,
                books: Vec::new(),
            });
            return Ok(());
        };

        let outcome = self.take_turn(current, target, rank)?;
        observer(&TurnEvent::Asked {
            asker: current,
            target,
            rank,
            outcome,
        });

        Ok(())
    }

    /// Returns every player's book count and the winner.
    ///
    /// The winner has the most books; ties go to the player seated first.
    pub fn display_winner(&self) -> GameResult {
        let standings = self
            .players
            .iter()
            .map(|player| PlayerStanding {
                name: player.name().into(),
                books: player.book_count(),
            })
            .collect();
        let result = GameResult::from_standings(standings);

        for standing in &result.players {
            info!(player = %standing.name, books = standing.books, "final books");
        }
        if let Some(winner) = result.winner() {
            info!(winner = %winner.name, books = winner.books, "winner");
        }

        result
    }
}
