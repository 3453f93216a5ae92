//! Game state types.

/// Game state.
///
/// Setup happens entirely inside the constructors, so a constructed game is
/// always in one of these two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are still taking turns.
    TurnLoop,
    /// The deck and every hand are empty.
    GameOver,
}
