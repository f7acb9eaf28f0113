//! Canonical chess-rule constants.
//!
//! Rows are zero-indexed from Black's back rank, matching the board
//! orientation used by the presentation layer.

use crate::game_state::chess_types::PieceKind;

pub const BLACK_BACK_ROW: u8 = 0;
pub const WHITE_BACK_ROW: u8 = 7;

pub const BLACK_PAWN_START_ROW: u8 = 1;
pub const WHITE_PAWN_START_ROW: u8 = 6;

pub const WHITE_EN_PASSANT_ROW: u8 = 3;
pub const BLACK_EN_PASSANT_ROW: u8 = 4;

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Back-rank layout shared by both sides, from column 0 to column 7.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the castling rook starts on, given the king's column step (`+1` kingside).
#[inline]
pub const fn castling_rook_col(step: i8) -> u8 {
    if step > 0 {
        KINGSIDE_ROOK_COL
    } else {
        QUEENSIDE_ROOK_COL
    }
}
