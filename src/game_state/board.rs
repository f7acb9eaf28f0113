//! Board occupancy, en-passant memory and move history.
//!
//! `Board` is the single owner of every piece on the grid. Raw placement
//! (`set_piece`) performs no rule checks; rule-checked mutation goes through
//! `apply_move` after the validator has accepted the move, and every
//! committed move is pushed onto the history so `undo_last` can reverse it.

use std::fmt;

use log::trace;

use crate::errors::ChessError;
use crate::game_state::chess_rules::{castling_rook_col, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{self, Piece, PieceKind, Side, Square};
use crate::game_state::move_record::{MoveFlags, MoveRecord, RookMove};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    en_passant_target: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            en_passant_target: None,
            history: Vec::new(),
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in Side::BOTH {
            let back = side.back_row() as usize;
            let pawns = side.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, side));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Raw placement with no rule checks.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_on_board(&self, row: i8, col: i8) -> bool {
        chess_types::is_on_board(row, col)
    }

    /// Square a pawn passed over on the last half-move, if it was a double step.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Raw setter for building positions by hand.
    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// All occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Resolves a move intent into the history entry it would produce.
    ///
    /// This classifies the move (plain, en passant, castle, promotion) from
    /// the current occupancy; it does not check legality.
    pub fn plan_move(&self, mv: &ChessMove) -> Result<MoveRecord, ChessError> {
        let moving_piece = self.piece_at(mv.from).ok_or(ChessError::NoPieceAt(mv.from))?;
        let side = moving_piece.side;
        let d_row = mv.to.row() as i8 - mv.from.row() as i8;
        let d_col = mv.to.col() as i8 - mv.from.col() as i8;

        let mut flags = MoveFlags::default();
        let mut captured_square = self.piece_at(mv.to).map(|_| mv.to);
        let mut rook_move = None;

        match moving_piece.kind {
            PieceKind::Pawn => {
                if d_col != 0
                    && captured_square.is_none()
                    && self.en_passant_target == Some(mv.to)
                {
                    flags.is_en_passant = true;
                    captured_square = mv.from.offset(0, d_col);
                }
                flags.is_double_step = d_row.abs() == 2;
                if mv.to.row() == side.promotion_row() {
                    flags.promoted_to = Some(mv.promotion.unwrap_or(PieceKind::Queen));
                }
            }
            PieceKind::King if d_row == 0 && d_col.abs() == 2 => {
                let step = d_col.signum();
                let rook_from = mv.from.offset(0, castling_rook_col(step) as i8 - mv.from.col() as i8);
                let rook_to = mv.from.offset(0, step);
                if let (Some(from), Some(to)) = (rook_from, rook_to) {
                    if let Some(rook) = self.piece_at(from) {
                        flags.is_castle = true;
                        rook_move = Some(RookMove { from, to, rook });
                    }
                }
            }
            _ => {}
        }

        Ok(MoveRecord {
            from: mv.from,
            to: mv.to,
            moving_piece,
            captured_piece: captured_square.and_then(|sq| self.piece_at(sq)),
            captured_square,
            flags,
            rook_move,
            prev_en_passant_target: self.en_passant_target,
        })
    }

    /// Writes the placement of a planned move without touching history.
    pub(crate) fn commit(&mut self, record: &MoveRecord) {
        self.set_piece(record.from, None);
        if let Some(captured) = record.captured_square {
            self.set_piece(captured, None);
        }
        if let Some(rook) = record.rook_move {
            self.set_piece(rook.from, None);
            self.set_piece(rook.to, Some(rook.rook.moved()));
        }
        self.set_piece(record.to, Some(record.placed_piece()));
        self.en_passant_target = record.passed_square();
    }

    /// Commits a move the validator has already accepted and records it.
    pub fn apply_move(&mut self, mv: &ChessMove) -> Result<MoveRecord, ChessError> {
        let record = self.plan_move(mv)?;
        self.commit(&record);
        self.history.push(record);
        trace!("applied {}\n{}", record, self);
        Ok(record)
    }

    /// Pops the last history entry and restores the position before it.
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        self.set_piece(record.to, None);
        if let Some(rook) = record.rook_move {
            self.set_piece(rook.to, None);
            self.set_piece(rook.from, Some(rook.rook));
        }
        self.set_piece(record.from, Some(record.moving_piece));
        if let (Some(square), Some(piece)) = (record.captured_square, record.captured_piece) {
            self.set_piece(square, Some(piece));
        }
        self.en_passant_target = record.prev_en_passant_target;

        trace!("undid {}\n{}", record, self);
        Some(record)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
