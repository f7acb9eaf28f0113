//! Pawn attack tables.
//!
//! Pawns attack the two forward diagonals whether or not anything stands
//! there, which is why these tables differ from the pawn's push geometry.

use crate::game_state::chess_types::{Side, Square};
use crate::moves::square_masks::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Side::White.pawn_direction());
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Side::Black.pawn_direction());

#[inline]
pub const fn pawn_attacks(side: Side, square: Square) -> u64 {
    match side {
        Side::White => WHITE_PAWN_ATTACKS[square.index()],
        Side::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(direction: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + direction as i32;
        let col = (sq % 8) as i32;

        table[sq] = set_if_valid(row, col - 1) | set_if_valid(row, col + 1);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Side, Square};

    #[test]
    fn white_pawn_attacks_towards_row_zero() {
        let e2 = Square::new(6, 4).unwrap();
        let expected = Square::new(5, 3).unwrap().mask() | Square::new(5, 5).unwrap().mask();
        assert_eq!(pawn_attacks(Side::White, e2), expected);
    }

    #[test]
    fn black_pawn_on_the_a_file_attacks_one_square() {
        let a7 = Square::new(1, 0).unwrap();
        assert_eq!(pawn_attacks(Side::Black, a7), Square::new(2, 1).unwrap().mask());
    }

    #[test]
    fn pawns_on_the_last_row_attack_nothing() {
        let e8 = Square::new(0, 4).unwrap();
        assert_eq!(pawn_attacks(Side::White, e8), 0);
    }
}
