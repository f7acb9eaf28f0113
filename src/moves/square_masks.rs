//! Helpers for 64-bit square sets.
//!
//! Bit `row * 8 + col` stands for the square at `(row, col)`.

use crate::game_state::chess_types::Square;

/// One-hot mask for `(row, col)`, or an empty mask when off the board.
pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}

/// Iterates the squares of a mask in index order.
pub fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as u8;
        mask &= mask - 1;
        Some(Square::from_index(index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_coordinates_give_empty_masks() {
        assert_eq!(set_if_valid(-1, 0), 0);
        assert_eq!(set_if_valid(0, 8), 0);
        assert_eq!(set_if_valid(7, 7), 1u64 << 63);
    }

    #[test]
    fn squares_come_out_in_index_order() {
        let mask = (1u64 << 63) | (1u64 << 9) | 1;
        let squares: Vec<_> = squares_in(mask).map(|sq| (sq.row(), sq.col())).collect();
        assert_eq!(squares, vec![(0, 0), (1, 1), (7, 7)]);
    }
}
