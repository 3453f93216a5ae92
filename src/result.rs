//! Turn outcomes, loop events and final standings.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Result of a single ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The target held the rank and handed it over.
    Catch {
        /// Number of cards moved to the asker.
        cards: usize,
        /// Books the asker completed with them.
        books: Vec<Rank>,
        /// Cards the target drew after being emptied, if any.
        target_refill: usize,
    },
    /// The target held none of the rank.
    GoFish {
        /// Card drawn by the asker, or `None` if the deck was empty.
        drawn: Option<Card>,
        /// Books the asker completed after drawing.
        books: Vec<Rank>,
    },
}

impl TurnOutcome {
    /// Returns whether the ask was answered with cards.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Catch { .. })
    }

    /// Returns the books completed during the turn.
    #[must_use]
    pub fn books(&self) -> &[Rank] {
        match self {
            Self::Catch { books, .. } | Self::GoFish { books, .. } => books,
        }
    }
}

/// Why a player's turn was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Every other player has an empty hand.
    NoOpponent,
    /// The player's own hand is empty and the deck could not refill it.
    EmptyHand,
}

/// Something observable that happened during [`Game::play_with`].
///
/// [`Game::play_with`]: crate::Game::play_with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A player with an empty hand drew from the deck.
    Refilled {
        /// Player index.
        player: usize,
        /// Cards drawn.
        cards: usize,
    },
    /// A player's turn was skipped.
    Skipped {
        /// Player index.
        player: usize,
        /// Why the turn was skipped.
        reason: SkipReason,
        /// Books laid down before passing.
        books: Vec<Rank>,
    },
    /// A player asked another for a rank.
    Asked {
        /// Asking player index.
        asker: usize,
        /// Asked player index.
        target: usize,
        /// Requested rank.
        rank: Rank,
        /// What came of it.
        outcome: TurnOutcome,
    },
}

/// Final book count for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player's name.
    pub name: String,
    /// Completed books.
    pub books: usize,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Standings in seating order.
    pub players: Vec<PlayerStanding>,
    /// Index of the winner in `players`.
    pub winner: usize,
}

impl GameResult {
    /// Builds the result from standings. The winner is the first player with
    /// the most books.
    #[must_use]
    pub fn from_standings(players: Vec<PlayerStanding>) -> Self {
        let mut winner = 0;
        for (index, standing) in players.iter().enumerate().skip(1) {
            if standing.books > players[winner].books {
                winner = index;
            }
        }

        Self { players, winner }
    }

    /// Returns the winner's standing, or `None` if there were no players.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerStanding> {
        self.players.get(self.winner)
    }

    /// Returns the total number of books laid down.
    #[must_use]
    pub fn total_books(&self) -> usize {
        self.players.iter().map(|standing| standing.books).sum()
    }
}
