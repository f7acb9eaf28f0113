//! Attack and check detection.
//!
//! Every query is a scan over the attacking side's pieces, asking each one
//! whether its attack geometry reaches the target square.

use crate::game_state::chess_types::{Board, PieceKind, Side, Square};

#[inline]
pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    board.king_square(side)
}

/// True when `side` has a king and an enemy piece attacks it.
#[inline]
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king_sq) = king_square(board, side) else {
        return false;
    };
    is_square_attacked(board, king_sq, side.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_side: Side) -> bool {
    board
        .pieces_of(attacker_side)
        .any(|(from, piece)| piece.attacks_square(from, square, board))
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_side: Side,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(attacker_side)
        .filter(|(from, piece)| piece.attacks_square(*from, square, board))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn start_position_is_quiet() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Side::White));
        assert!(!is_in_check(&board, Side::Black));
        // Pawns on row 6 cover row 5, knights cover their jumps.
        assert!(is_square_attacked(&board, sq(5, 4), Side::White));
        assert!(!is_square_attacked(&board, sq(4, 4), Side::White));
    }

    #[test]
    fn pawn_attacks_count_with_nothing_on_the_square() {
        let mut board = Board::empty();
        board.set_piece(sq(3, 3), Some(Piece::new(PieceKind::Pawn, Side::Black)));
        assert!(is_square_attacked(&board, sq(4, 2), Side::Black));
        assert!(is_square_attacked(&board, sq(4, 4), Side::Black));
        assert!(!is_square_attacked(&board, sq(4, 3), Side::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty();
        assert!(!is_in_check(&board, Side::White));
    }

    #[test]
    fn lists_every_attacker() {
        let mut board = Board::empty();
        board.set_piece(sq(7, 4), Some(Piece::new(PieceKind::King, Side::White)));
        board.set_piece(sq(0, 4), Some(Piece::new(PieceKind::Rook, Side::Black)));
        board.set_piece(sq(5, 3), Some(Piece::new(PieceKind::Knight, Side::Black)));
        board.set_piece(sq(4, 1), Some(Piece::new(PieceKind::Bishop, Side::Black)));

        let mut attackers = attackers_to_square(&board, sq(7, 4), Side::Black);
        attackers.sort_by_key(|(sq, _)| *sq);
        assert_eq!(
            attackers,
            vec![(sq(0, 4), PieceKind::Rook), (sq(4, 1), PieceKind::Bishop), (sq(5, 3), PieceKind::Knight)]
        );
        assert!(is_in_check(&board, Side::White));
    }
}
