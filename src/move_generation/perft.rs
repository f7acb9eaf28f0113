//! Move-tree node counting for validating the rules engine.
//!
//! Walks the legal-move tree by applying and undoing moves on a single
//! board, tallying leaf statistics. Promotions are enumerated once per
//! destination (the default kind), so only positions without promotions
//! match published perft tables.

use crate::errors::ChessError;
use crate::game_state::chess_types::{Board, Side};
use crate::move_generation::move_validator::MoveValidator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft(board: &mut Board, side: Side, depth: u8) -> Result<PerftCounts, ChessError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(board, side, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(
    board: &mut Board,
    side: Side,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessError> {
    let moves = MoveValidator::new(board).all_legal_moves(side);

    for mv in moves {
        let record = board.apply_move(&mv)?;

        if depth == 1 {
            counts.nodes += 1;
            if record.is_capture() {
                counts.captures += 1;
            }
            if record.flags.is_en_passant {
                counts.en_passant += 1;
            }
            if record.flags.is_castle {
                counts.castles += 1;
            }
            if record.flags.promoted_to.is_some() {
                counts.promotions += 1;
            }

            let mut validator = MoveValidator::new(board);
            if validator.is_in_check(side.opposite()) {
                counts.checks += 1;
                if !validator.has_any_legal_move(side.opposite()) {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(board, side.opposite(), depth - 1, counts)?;
        }

        board.undo_last();
    }

    Ok(())
}
