use crate::game_state::chess_types::Side;

pub const DEFAULT_RATING: u32 = 1200;

/// A participant seated on one side of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub side: Side,
    pub name: String,
    pub rating: u32,
}

impl Player {
    pub fn new(side: Side, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
            rating: DEFAULT_RATING,
        }
    }

    pub fn with_rating(self, rating: u32) -> Self {
        Self { rating, ..self }
    }
}
