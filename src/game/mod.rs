//! Game engine and state management.

use alloc::format;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::{SetupError, TurnError};
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::Player;

mod play;
pub mod state;
mod turn;

pub use state::GameState;

/// A Go Fish game engine that owns the deck and the players.
///
/// Players are addressed by their seat index, `0..player_count()`. Every
/// operation that mutates the table takes `&mut self`; renderers observe the
/// table through [`Game::players`] and [`Game::deck`] between calls.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    deck: Deck,
    /// Players in seating order.
    players: Vec<Player>,
    /// Game options.
    options: GameOptions,
    /// Random number generator for opponent and rank choices.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game for `num_players` with default options, shuffled with
    /// the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] unless `num_players` is
    /// between 2 and 6.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::Game;
    ///
    /// let game = Game::new(2, 42).unwrap();
    /// assert_eq!(game.player(0).unwrap().hand().len(), 7);
    /// assert_eq!(game.cards_remaining(), 38);
    /// ```
    pub fn new(num_players: usize, seed: u64) -> Result<Self, SetupError> {
        Self::with_options(num_players, GameOptions::default(), seed)
    }

    /// Creates a game with custom options, shuffled with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is out of range or the options ask
    /// for more opening cards than the deck holds.
    pub fn with_options(
        num_players: usize,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Self::with_rng(num_players, options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a game driven by an existing generator. The generator shuffles
    /// the deck and then makes every opponent and rank choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is out of range or the options ask
    /// for more opening cards than the deck holds.
    pub fn with_rng(
        num_players: usize,
        options: GameOptions,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, SetupError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::with_deck(num_players, options, deck, rng)
    }

    /// Creates a game from a deck in a fixed order, without shuffling.
    ///
    /// Opening hands are dealt from the top of `deck`, one full hand per
    /// player in seating order.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is out of range, `deck` is not one
    /// of each of the 52 standard cards, or it cannot cover the opening hands.
    pub fn with_deck(
        num_players: usize,
        options: GameOptions,
        mut deck: Deck,
        rng: ChaCha8Rng,
    ) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(SetupError::InvalidPlayerCount(num_players));
        }

        if !deck.is_complete() {
            return Err(SetupError::InvalidDeck);
        }

        let hand_size = options.hand_size(num_players);
        if deck.len() < hand_size * num_players {
            return Err(SetupError::NotEnoughCards);
        }

        let mut players = Vec::with_capacity(num_players);
        for seat in 1..=num_players {
            let hand = deck.draw(hand_size).map_err(|_| SetupError::NotEnoughCards)?;
            players.push(Player::with_hand(format!("Player {seat}"), hand));
        }

        debug!(
            players = num_players,
            hand_size,
            remaining = deck.len(),
            "dealt opening hands"
        );

        Ok(Self {
            deck,
            players,
            options,
            rng,
        })
    }

    /// Refills `player`'s hand with up to `refill_size` cards, or whatever
    /// remains in the deck if fewer. Returns the number of cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::PlayerNotFound`] if the index is out of range.
    pub fn refill(&mut self, player: usize) -> Result<usize, TurnError> {
        let target = self
            .players
            .get_mut(player)
            .ok_or(TurnError::PlayerNotFound)?;
        let drawn = refill_hand(&mut self.deck, target, self.options.refill_size)?;

        if drawn > 0 {
            debug!(player = target.name(), cards = drawn, "refilled hand");
        }

        Ok(drawn)
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        if self.is_game_over() {
            GameState::GameOver
        } else {
            GameState::TurnLoop
        }
    }

    /// Returns true when the deck is empty and every hand is empty.
    pub fn is_game_over(&self) -> bool {
        self.deck.is_empty() && self.players.iter().all(Player::check_hand)
    }

    /// Returns the players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in seat `index`.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the player in seat `index` for direct manipulation.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the draw pile.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the draw pile for direct manipulation.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}

/// Draws `min(size, deck.len())` cards into `player`'s hand.
fn refill_hand(deck: &mut Deck, player: &mut Player, size: usize) -> Result<usize, TurnError> {
    let count = size.min(deck.len());
    let cards = deck.draw(count)?;
    player.receive(cards);
    Ok(count)
}
