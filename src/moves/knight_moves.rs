use crate::game_state::chess_types::Square;
use crate::moves::square_masks::set_if_valid;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row + 2, col + 1);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 2, col - 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let d4 = Square::new(4, 3).unwrap();
        assert_eq!(KNIGHT_ATTACKS[d4.index()].count_ones(), 8);
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let h1 = Square::new(7, 7).unwrap();
        let attacks = knight_attacks(h1);
        assert_eq!(attacks.count_ones(), 2);
        assert_ne!(attacks & Square::new(5, 6).unwrap().mask(), 0);
        assert_ne!(attacks & Square::new(6, 5).unwrap().mask(), 0);
    }
}
