//! Per-side and whole-game status values.

/// Status of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Resigned,
    Win,
    Draw,
}

/// Status of the game as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Resigned,
    Draw,
}

impl GameState {
    /// No further moves are accepted once the game reaches one of these.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing | GameState::Check)
    }
}
