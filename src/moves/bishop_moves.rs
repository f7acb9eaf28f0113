use crate::game_state::chess_types::{Board, Square};
use crate::moves::rook_moves::trace_ray;
use crate::moves::square_masks::set_if_valid;

/// Bishop rays on an empty board.
pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, board: &Board) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, board))
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut rays = 0u64;
        let mut i = 1;
        while i < 8 {
            rays |= set_if_valid(row + i, col + i);
            rays |= set_if_valid(row - i, col + i);
            rays |= set_if_valid(row + i, col - i);
            rays |= set_if_valid(row - i, col - i);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, BISHOP_RAYS};
    use crate::game_state::chess_types::{Board, Piece, PieceKind, Side, Square};

    #[test]
    fn bishop_rays_from_a1_cover_the_long_diagonal() {
        let a1 = Square::new(7, 0).unwrap();
        assert_eq!(BISHOP_RAYS[a1.index()].count_ones(), 7);
    }

    #[test]
    fn own_blocker_is_still_attacked() {
        let mut board = Board::empty();
        let c1 = Square::new(7, 2).unwrap();
        let d2 = Square::new(6, 3).unwrap();
        board.set_piece(d2, Some(Piece::new(PieceKind::Pawn, Side::White)));

        let attacks = bishop_attacks(c1, &board);
        assert_ne!(attacks & d2.mask(), 0);
        assert_eq!(attacks & Square::new(5, 4).unwrap().mask(), 0);
        assert_eq!(attacks.count_ones(), 3);
    }
}
