//! Value types shared by every layer of the rules engine.
//!
//! Sides, piece kinds, piece instances and board squares live here so the
//! board, the geometry tables and the controller agree on one vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_rules::{
    BLACK_BACK_ROW, BLACK_EN_PASSANT_ROW, BLACK_PAWN_START_ROW, WHITE_BACK_ROW,
    WHITE_EN_PASSANT_ROW, WHITE_PAWN_START_ROW,
};

pub use crate::game_state::board::Board;
pub use crate::game_state::move_record::{MoveFlags, MoveRecord};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn step. White advances towards row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::White => WHITE_BACK_ROW,
            Side::Black => BLACK_BACK_ROW,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => WHITE_PAWN_START_ROW,
            Side::Black => BLACK_PAWN_START_ROW,
        }
    }

    /// Row a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> u8 {
        match self {
            Side::White => WHITE_EN_PASSANT_ROW,
            Side::Black => BLACK_EN_PASSANT_ROW,
        }
    }

    /// Last row for this side's pawns, i.e. the opponent's back row.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (side is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into on the last row.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Lowercase letter used in long algebraic promotion suffixes.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` gates castling. It is written only by [`Board::apply_move`]
/// and restored by [`Board::undo_last`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self {
            kind,
            side,
            has_moved: false,
        }
    }

    /// Same piece, flagged as having moved.
    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    pub const fn symbol(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::King) => '♔',
            (Side::Black, PieceKind::Pawn) => '♟',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::King) => '♚',
        }
    }
}

/// Board coordinate. Row 0 holds Black's back rank, row 7 White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, ChessError> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(ChessError::OutOfBounds {
                row: row as i8,
                col: col as i8,
            })
        }
    }

    /// Builds a square from its `0..64` index (`row * 8 + col`).
    ///
    /// Callers guarantee `index < 64`; this is used by the precomputed tables.
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Self {
        Self {
            row: index / 8,
            col: index % 8,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    #[inline]
    pub(crate) const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// Moves the square by a row and column delta, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if is_on_board(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every square, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square::from_index)
    }
}

#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parses algebraic coordinates such as `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        }

        Square::new(b'8' - rank, file - b'a')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        for side in Side::BOTH {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn squares_render_in_algebraic_form() {
        let e2 = Square::new(6, 4).unwrap();
        assert_eq!(e2.to_string(), "e2");
        assert_eq!("e2".parse::<Square>().unwrap(), e2);
        assert_eq!("a8".parse::<Square>().unwrap(), Square::new(0, 0).unwrap());
        assert_eq!("h1".parse::<Square>().unwrap(), Square::new(7, 7).unwrap());
    }

    #[test]
    fn out_of_range_squares_are_rejected() {
        assert!(Square::new(8, 0).is_err());
        assert!(Square::new(0, 8).is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let a8 = Square::new(0, 0).unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1).unwrap()));
        assert!(!is_on_board(8, 3));
        assert!(is_on_board(7, 7));
    }

    #[test]
    fn rows_follow_board_orientation() {
        assert_eq!(Side::White.back_row(), 7);
        assert_eq!(Side::Black.back_row(), 0);
        assert_eq!(Side::White.promotion_row(), 0);
        assert_eq!(Side::White.en_passant_row(), 3);
        assert_eq!(Side::Black.en_passant_row(), 4);
    }
}
