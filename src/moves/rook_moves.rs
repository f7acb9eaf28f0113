use crate::game_state::chess_types::{Board, Square};
use crate::moves::square_masks::set_if_valid;

/// Rook rays on an empty board.
pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `square` reaches, each ray ending on its first occupant.
#[inline]
pub fn rook_attacks(square: Square, board: &Board) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, board))
}

/// Walks one direction until the edge, including the first occupied square.
pub(crate) fn trace_ray(square: Square, d_row: i8, d_col: i8, board: &Board) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(target) = current.offset(d_row, d_col) {
        attacks |= target.mask();
        if board.piece_at(target).is_some() {
            break;
        }
        current = target;
    }

    attacks
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut rays = 0u64;
        let mut i = 1;
        while i < 8 {
            rays |= set_if_valid(row, col + i);
            rays |= set_if_valid(row, col - i);
            rays |= set_if_valid(row + i, col);
            rays |= set_if_valid(row - i, col);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{rook_attacks, ROOK_RAYS};
    use crate::game_state::chess_types::{Board, Piece, PieceKind, Side, Square};

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = Square::new(4, 3).unwrap();
        assert_eq!(ROOK_RAYS[d4.index()].count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0).unwrap();
        let a4 = Square::new(4, 0).unwrap();
        board.set_piece(a4, Some(Piece::new(PieceKind::Pawn, Side::Black)));

        let attacks = rook_attacks(a1, &board);

        assert_ne!(attacks & a4.mask(), 0);
        assert_eq!(attacks & Square::new(3, 0).unwrap().mask(), 0);
        assert_eq!(attacks.count_ones(), 3 + 7);
    }
}
