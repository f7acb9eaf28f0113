//! Legal move validation.
//!
//! Filters piece geometry by king safety and answers the check, checkmate
//! and stalemate questions the game controller needs. The validator borrows
//! the board mutably for the duration of a call so it can probe moves in
//! place; every probe is undone before the call returns.

use log::trace;

use crate::game_state::chess_types::{Board, PieceKind, Side, Square};
use crate::move_generation::legal_move_checks::{
    attackers_to_square, is_in_check, is_square_attacked, king_square,
};
use crate::move_generation::probe_guard::ProbeGuard;
use crate::moves::move_descriptions::ChessMove;

pub struct MoveValidator<'a> {
    board: &'a mut Board,
}

impl<'a> MoveValidator<'a> {
    #[inline]
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Full legality: on-board distinct squares, no friendly capture, piece
    /// geometry, and the mover's king is not attacked afterwards.
    pub fn is_legal(&mut self, mv: &ChessMove) -> bool {
        if mv.from == mv.to {
            return false;
        }
        if mv.promotion.is_some_and(|kind| !kind.is_promotion_target()) {
            return false;
        }

        let Some(piece) = self.board.piece_at(mv.from) else {
            return false;
        };
        if self.board.piece_at(mv.to).is_some_and(|target| target.side == piece.side) {
            return false;
        }
        if !piece.accepts_move(mv.from, mv.to, self.board) {
            return false;
        }

        self.keeps_king_safe(piece.side, mv)
    }

    /// Plays `mv` speculatively and reports whether `side`'s king is safe afterwards.
    fn keeps_king_safe(&mut self, side: Side, mv: &ChessMove) -> bool {
        let Ok(record) = self.board.plan_move(mv) else {
            return false;
        };
        let probe = ProbeGuard::new(self.board, &record);
        let safe = !is_in_check(&probe, side);
        if !safe {
            trace!("{mv} leaves the {side} king attacked");
        }
        safe
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by_side: Side) -> bool {
        is_square_attacked(self.board, square, by_side)
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(self.board, side)
    }

    /// Enemy pieces currently giving check to `side`.
    pub fn checkers(&self, side: Side) -> Vec<(Square, PieceKind)> {
        match king_square(self.board, side) {
            Some(king) => attackers_to_square(self.board, king, side.opposite()),
            None => Vec::new(),
        }
    }

    /// Legal moves of the piece on `from`, whichever side it belongs to.
    ///
    /// Promotions are listed once with `promotion: None`; the kind is chosen
    /// when the move is applied.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<ChessMove> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };

        piece
            .pseudo_legal_moves(from, self.board)
            .into_iter()
            .map(|to| ChessMove::new(from, to))
            .filter(|mv| self.keeps_king_safe(piece.side, mv))
            .collect()
    }

    pub fn all_legal_moves(&mut self, side: Side) -> Vec<ChessMove> {
        let origins: Vec<Square> = self.board.pieces_of(side).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .flat_map(|from| self.legal_moves_from(from))
            .collect()
    }

    pub fn has_any_legal_move(&mut self, side: Side) -> bool {
        let origins: Vec<Square> = self.board.pieces_of(side).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .any(|from| !self.legal_moves_from(from).is_empty())
    }

    pub fn is_checkmate(&mut self, side: Side) -> bool {
        self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    pub fn is_stalemate(&mut self, side: Side) -> bool {
        !self.is_in_check(side) && !self.has_any_legal_move(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> ChessMove {
        ChessMove::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, side: Side) {
        board.set_piece(sq(row, col), Some(Piece::new(kind, side)));
    }

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let mut board = Board::standard();
        let mut validator = MoveValidator::new(&mut board);
        assert_eq!(validator.all_legal_moves(Side::White).len(), 20);
        assert_eq!(validator.all_legal_moves(Side::Black).len(), 20);
    }

    #[test]
    fn rejects_degenerate_and_friendly_moves() {
        let mut board = Board::standard();
        let mut validator = MoveValidator::new(&mut board);
        assert!(!validator.is_legal(&mv((6, 4), (6, 4))));
        assert!(!validator.is_legal(&mv((7, 0), (6, 0))));
        assert!(!validator.is_legal(&mv((4, 4), (3, 4))));
        assert!(!validator.is_legal(&mv((6, 4), (3, 4))));
        assert!(validator.is_legal(&mv((6, 4), (4, 4))));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Side::White);
        place(&mut board, 5, 4, PieceKind::Bishop, Side::White);
        place(&mut board, 0, 4, PieceKind::Rook, Side::Black);
        place(&mut board, 0, 0, PieceKind::King, Side::Black);
        let before = board.clone();

        let mut validator = MoveValidator::new(&mut board);
        assert!(validator.legal_moves_from(sq(5, 4)).is_empty());
        assert!(!validator.is_legal(&mv((5, 4), (4, 3))));
        assert_eq!(*validator.board(), before);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Side::White);
        place(&mut board, 0, 3, PieceKind::Rook, Side::Black);
        place(&mut board, 0, 7, PieceKind::King, Side::Black);

        let mut validator = MoveValidator::new(&mut board);
        let moves = validator.legal_moves_from(sq(7, 4));
        assert!(moves.iter().all(|m| m.to.col() != 3));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn capturing_the_checker_is_legal() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Side::White);
        place(&mut board, 6, 4, PieceKind::Queen, Side::Black);
        place(&mut board, 0, 0, PieceKind::King, Side::Black);

        let mut validator = MoveValidator::new(&mut board);
        assert!(validator.is_in_check(Side::White));
        assert_eq!(validator.checkers(Side::White), vec![(sq(6, 4), PieceKind::Queen)]);
        assert!(validator.is_legal(&mv((7, 4), (6, 4))));
        assert!(!validator.is_checkmate(Side::White));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        let mut board = Board::empty();
        place(&mut board, 3, 0, PieceKind::King, Side::White);
        place(&mut board, 3, 4, PieceKind::Pawn, Side::White);
        place(&mut board, 3, 3, PieceKind::Pawn, Side::Black);
        place(&mut board, 3, 7, PieceKind::Rook, Side::Black);
        place(&mut board, 0, 7, PieceKind::King, Side::Black);
        board.set_en_passant_target(Some(sq(2, 3)));

        let mut validator = MoveValidator::new(&mut board);
        assert!(!validator.is_legal(&mv((3, 4), (2, 3))));
        assert!(validator.is_legal(&mv((3, 4), (2, 4))));
    }

    #[test]
    fn detects_back_rank_mate() {
        let mut board = Board::empty();
        place(&mut board, 0, 6, PieceKind::King, Side::Black);
        place(&mut board, 1, 5, PieceKind::Pawn, Side::Black);
        place(&mut board, 1, 6, PieceKind::Pawn, Side::Black);
        place(&mut board, 1, 7, PieceKind::Pawn, Side::Black);
        place(&mut board, 0, 0, PieceKind::Rook, Side::White);
        place(&mut board, 7, 6, PieceKind::King, Side::White);

        let mut validator = MoveValidator::new(&mut board);
        assert!(validator.is_checkmate(Side::Black));
        assert!(!validator.is_stalemate(Side::Black));
    }

    #[test]
    fn detects_stalemate() {
        let mut board = Board::empty();
        place(&mut board, 0, 7, PieceKind::King, Side::Black);
        place(&mut board, 2, 6, PieceKind::Queen, Side::White);
        place(&mut board, 7, 0, PieceKind::King, Side::White);

        let mut validator = MoveValidator::new(&mut board);
        assert!(validator.is_stalemate(Side::Black));
        assert!(!validator.is_checkmate(Side::Black));
        assert!(!validator.has_any_legal_move(Side::Black));
    }

    #[test]
    fn rejects_invalid_promotion_kinds() {
        let mut board = Board::empty();
        place(&mut board, 1, 0, PieceKind::Pawn, Side::White);
        place(&mut board, 7, 4, PieceKind::King, Side::White);
        place(&mut board, 0, 7, PieceKind::King, Side::Black);

        let mut validator = MoveValidator::new(&mut board);
        let to_king = mv((1, 0), (0, 0)).with_promotion(Some(PieceKind::King));
        let to_rook = mv((1, 0), (0, 0)).with_promotion(Some(PieceKind::Rook));
        assert!(!validator.is_legal(&to_king));
        assert!(validator.is_legal(&to_rook));
    }

    #[test]
    fn castling_through_check_is_not_offered() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Side::White);
        place(&mut board, 7, 7, PieceKind::Rook, Side::White);
        place(&mut board, 0, 6, PieceKind::Rook, Side::Black);
        place(&mut board, 0, 0, PieceKind::King, Side::Black);

        let mut validator = MoveValidator::new(&mut board);
        assert!(!validator.is_legal(&mv((7, 4), (7, 6))));
        assert!(!validator.legal_moves_from(sq(7, 4)).contains(&mv((7, 4), (7, 6))));
    }
}
