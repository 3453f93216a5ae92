//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of the thirteen ranks.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four suits.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left to satisfy the draw.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count outside the supported range.
    #[error("invalid player count {0}, expected 2 to 6 players")]
    InvalidPlayerCount(usize),
    /// The deck is not one of each of the 52 standard cards.
    #[error("deck is not a full standard deck")]
    InvalidDeck,
    /// The deck cannot cover the opening hands.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Player index out of range.
    #[error("player not found")]
    PlayerNotFound,
    /// A player asked themselves for a card.
    #[error("a player cannot ask themselves for cards")]
    SelfAsk,
    /// A draw was attempted beyond the remaining deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
