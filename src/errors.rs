//! Error taxonomy for the rules engine.
//!
//! Every rejected command is a pure no-op. The `try_*` entry points report
//! why a command was refused, while the plain command API flattens these into
//! an empty result.

use thiserror::Error;

use crate::game::game_status::GameState;
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// Text that is not an algebraic square or move.
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// Attempted to move from an empty square.
    #[error("no piece on {0}")]
    NoPieceAt(Square),

    /// The piece on the origin square belongs to the side not to move.
    #[error("piece on {square} does not belong to {side}, the side to move")]
    NotYourTurn { square: Square, side: Side },

    /// Geometry or king safety rejected the move.
    #[error("illegal move {0}")]
    IllegalMove(ChessMove),

    /// The game already ended.
    #[error("game is over ({0:?})")]
    TerminalState(GameState),

    /// Undo with nothing to undo.
    #[error("no moves to undo")]
    EmptyHistory,

    /// Resignations and agreed draws are not part of the board history.
    #[error("cannot undo after the game ended by {0:?}")]
    UndoUnavailable(GameState),
}
