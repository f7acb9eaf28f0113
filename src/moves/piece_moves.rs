//! Per-kind move geometry.
//!
//! Each piece kind answers two questions about a board snapshot: which
//! squares it may move to ignoring its own king's safety, and whether it
//! attacks a given square. Dispatch is a `match` over [`PieceKind`].

use crate::game_state::chess_rules::castling_rook_col;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Side, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::{queen_attacks, QUEEN_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};
use crate::moves::square_masks::squares_in;

impl Piece {
    /// Squares this piece attacks from `from`, own pieces included.
    pub fn attack_mask(&self, from: Square, board: &Board) -> u64 {
        match self.kind {
            PieceKind::Pawn => pawn_attacks(self.side, from),
            PieceKind::Knight => knight_attacks(from),
            PieceKind::Bishop => bishop_attacks(from, board),
            PieceKind::Rook => rook_attacks(from, board),
            PieceKind::Queen => queen_attacks(from, board),
            PieceKind::King => king_attacks(from),
        }
    }

    /// True when this piece on `from` attacks `to`.
    ///
    /// Pawns attack diagonally whether or not `to` is occupied. Kings never
    /// attack through castling.
    pub fn attacks_square(&self, from: Square, to: Square, board: &Board) -> bool {
        if from == to {
            return false;
        }

        let target = to.mask();
        let rays = match self.kind {
            PieceKind::Bishop => BISHOP_RAYS[from.index()],
            PieceKind::Rook => ROOK_RAYS[from.index()],
            PieceKind::Queen => QUEEN_RAYS[from.index()],
            _ => u64::MAX,
        };
        if rays & target == 0 {
            return false;
        }

        self.attack_mask(from, board) & target != 0
    }

    /// Destinations allowed by this piece's geometry, ignoring own-king safety.
    pub fn pseudo_legal_moves(&self, from: Square, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => pawn_moves(self.side, from, board),
            PieceKind::King => {
                let mut moves = non_friendly(self.side, king_attacks(from), board);
                moves.extend(castling_targets(self, from, board));
                moves
            }
            _ => non_friendly(self.side, self.attack_mask(from, board), board),
        }
    }

    /// Geometry check for a single from/to pair.
    pub fn accepts_move(&self, from: Square, to: Square, board: &Board) -> bool {
        self.pseudo_legal_moves(from, board).contains(&to)
    }
}

fn non_friendly(side: Side, mask: u64, board: &Board) -> Vec<Square> {
    squares_in(mask)
        .filter(|sq| board.piece_at(*sq).map_or(true, |p| p.side != side))
        .collect()
}

fn pawn_moves(side: Side, from: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in squares_in(pawn_attacks(side, from)) {
        match board.piece_at(to) {
            Some(target) if target.side != side => out.push(to),
            Some(_) => {}
            None if is_en_passant_capture(side, from, to, board) => out.push(to),
            None => {}
        }
    }

    out
}

/// En passant: the pawn stands on its en-passant row, `to` is the square
/// the opponent's pawn just passed over, and that pawn is beside us.
fn is_en_passant_capture(side: Side, from: Square, to: Square, board: &Board) -> bool {
    if from.row() != side.en_passant_row() || board.en_passant_target() != Some(to) {
        return false;
    }

    let beside = from.offset(0, to.col() as i8 - from.col() as i8);
    matches!(
        beside.and_then(|sq| board.piece_at(sq)),
        Some(Piece { kind: PieceKind::Pawn, side: victim, .. }) if victim != side
    )
}

/// Castling destinations for an unmoved king.
///
/// Requires an unmoved rook of the same side on the corner file, empty
/// squares strictly between king and rook, and no enemy attack on the
/// king's start, transit or destination square.
fn castling_targets(king: &Piece, from: Square, board: &Board) -> Vec<Square> {
    if king.has_moved {
        return Vec::new();
    }

    let enemy = king.side.opposite();
    let mut out = Vec::with_capacity(2);

    for step in [1i8, -1i8] {
        let Some(destination) = from.offset(0, 2 * step) else {
            continue;
        };
        let rook_col = castling_rook_col(step) as i8;
        let Some(rook_square) = from.offset(0, rook_col - from.col() as i8) else {
            continue;
        };

        let rook_ready = matches!(
            board.piece_at(rook_square),
            Some(Piece { kind: PieceKind::Rook, side, has_moved: false }) if side == king.side
        );
        if !rook_ready {
            continue;
        }

        let mut col = from.col() as i8 + step;
        let mut path_clear = true;
        while col != rook_col {
            if from
                .offset(0, col - from.col() as i8)
                .and_then(|sq| board.piece_at(sq))
                .is_some()
            {
                path_clear = false;
                break;
            }
            col += step;
        }
        if !path_clear {
            continue;
        }

        let king_path_safe = (0..=2i8)
            .filter_map(|i| from.offset(0, i * step))
            .all(|sq| !is_square_attacked(board, sq, enemy));
        if king_path_safe {
            out.push(destination);
        }
    }

    out
}
