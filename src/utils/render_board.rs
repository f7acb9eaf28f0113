//! Terminal-oriented Unicode board renderer.
//!
//! Produces a human-readable dump of a [`Board`] for logging, debugging and
//! test failure messages. Row 0 (Black's back rank) is printed first.

use crate::game_state::chess_types::{Board, Square};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let sq = Square::from_index(row * 8 + col);
            match board.piece_at(sq) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_types::Board;

    #[test]
    fn starting_position_renders_black_on_top() {
        let text = render_board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn display_matches_renderer() {
        let board = Board::standard();
        assert_eq!(board.to_string(), render_board(&board));
    }
}
