use std::fmt;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Special-move markers of a history entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_double_step: bool,
    pub promoted_to: Option<PieceKind>,
}

/// The rook half of a castling move, with the rook as it stood before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RookMove {
    pub from: Square,
    pub to: Square,
    pub rook: Piece,
}

/// Single history entry for `apply_move` / `undo_last`.
///
/// Pieces are snapshots taken before the move, so popping the record and
/// writing them back restores occupancy and `has_moved` flags exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Where the captured piece stood. Differs from `to` only for en passant.
    pub captured_square: Option<Square>,
    pub flags: MoveFlags,
    pub rook_move: Option<RookMove>,
    pub prev_en_passant_target: Option<Square>,
}

impl MoveRecord {
    #[inline]
    pub fn side(&self) -> Side {
        self.moving_piece.side
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// The intent this record was built from.
    pub fn chess_move(&self) -> ChessMove {
        ChessMove::new(self.from, self.to).with_promotion(self.flags.promoted_to)
    }

    /// The piece standing on `to` once the move is made.
    pub fn placed_piece(&self) -> Piece {
        match self.flags.promoted_to {
            Some(kind) => Piece {
                kind,
                ..self.moving_piece.moved()
            },
            None => self.moving_piece.moved(),
        }
    }

    /// Square the pawn passed over on a double step.
    pub fn passed_square(&self) -> Option<Square> {
        if self.flags.is_double_step {
            self.from.offset(self.side().pawn_direction(), 0)
        } else {
            None
        }
    }

    /// Every square whose occupant changes when this move is made.
    pub fn touched_squares(&self) -> impl Iterator<Item = Square> {
        [
            Some(self.from),
            Some(self.to),
            self.captured_square.filter(|sq| *sq != self.to),
            self.rook_move.map(|r| r.from),
            self.rook_move.map(|r| r.to),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chess_move())?;
        if self.flags.is_castle {
            write!(f, " (castle)")?;
        } else if self.flags.is_en_passant {
            write!(f, " (en passant)")?;
        } else if let Some(captured) = self.captured_piece {
            write!(f, " x{}", captured.symbol())?;
        }
        Ok(())
    }
}
