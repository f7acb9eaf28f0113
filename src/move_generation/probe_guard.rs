//! Scoped speculative moves.
//!
//! A `ProbeGuard` saves the cells a move touches, commits the move to the
//! board without recording history, and writes the saved cells back when it
//! is dropped. Queries made through the guard see the position after the
//! move; once the guard is gone the board is exactly as it was.

use std::ops::Deref;

use log::trace;

use crate::game_state::chess_types::{Board, MoveRecord, Piece, Square};

/// Upper bound on cells a single move changes (castling with a rook, or en passant).
const MAX_TOUCHED: usize = 5;

pub struct ProbeGuard<'a> {
    board: &'a mut Board,
    saved: [Option<(Square, Option<Piece>)>; MAX_TOUCHED],
    saved_en_passant: Option<Square>,
}

impl<'a> ProbeGuard<'a> {
    pub fn new(board: &'a mut Board, record: &MoveRecord) -> Self {
        let mut saved = [None; MAX_TOUCHED];
        for (slot, square) in saved.iter_mut().zip(record.touched_squares()) {
            *slot = Some((square, board.piece_at(square)));
        }
        let saved_en_passant = board.en_passant_target();

        board.commit(record);
        trace!("probing {record}");

        Self {
            board,
            saved,
            saved_en_passant,
        }
    }
}

impl Deref for ProbeGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        for (square, piece) in self.saved.iter().rev().flatten() {
            self.board.set_piece(*square, *piece);
        }
        self.board.set_en_passant_target(self.saved_en_passant);
    }
}
