//! Settings a game is created with.
//!
//! The configuration survives `new_game`, so a controller keeps its players
//! and policies across restarts.

use crate::game::player::DEFAULT_RATING;
use crate::game_state::chess_types::PieceKind;

/// How per-side status is restored after a move is taken back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndoStatusPolicy {
    /// Re-derive check for both sides from the restored position.
    #[default]
    Recompute,
    /// Set both sides to `Playing`, even if the restored position is a check.
    ResetToPlaying,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
    pub initial_rating: u32,
    /// Kind used when a promotion is requested without naming one.
    /// Must be a knight, bishop, rook or queen.
    pub default_promotion: PieceKind,
    pub undo_status: UndoStatusPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_name: "Player 1".to_owned(),
            black_name: "Player 2".to_owned(),
            initial_rating: DEFAULT_RATING,
            default_promotion: PieceKind::Queen,
            undo_status: UndoStatusPolicy::default(),
        }
    }
}
