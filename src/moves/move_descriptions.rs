//! Move intents as handed to the rules engine.
//!
//! A `ChessMove` only names the origin, the destination and an optional
//! promotion kind. Whether it is a capture, castle or en-passant capture is
//! resolved by the board when the move is applied.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// Kind a pawn becomes on the last row. `None` means the configured default.
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: Option<PieceKind>) -> Self {
        Self { promotion, ..self }
    }

    /// True when the move names the same squares, regardless of promotion choice.
    #[inline]
    pub fn same_squares(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for ChessMove {
    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for ChessMove {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.trim();
        if !x.is_ascii() || !(4..=5).contains(&x.len()) {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        }

        let from: Square = x[0..2].parse()?;
        let to: Square = x[2..4].parse()?;
        let promotion = match x[4..].chars().next() {
            None => None,
            Some(letter) => match PieceKind::from_letter(letter) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(ChessError::InvalidSquare(s.to_owned())),
            },
        };

        Ok(ChessMove {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_long_algebraic() {
        let mv: ChessMove = "e7e8q".parse().unwrap();
        assert_eq!(mv.from, Square::new(1, 4).unwrap());
        assert_eq!(mv.to, Square::new(0, 4).unwrap());
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "e7e8q");
    }

    #[test]
    fn rejects_bad_promotion_letters() {
        assert!("e7e8k".parse::<ChessMove>().is_err());
        assert!("e7e8x".parse::<ChessMove>().is_err());
        assert!("e7".parse::<ChessMove>().is_err());
    }

    #[test]
    fn same_squares_ignores_promotion() {
        let plain: ChessMove = "a7a8".parse().unwrap();
        let knight = plain.with_promotion(Some(PieceKind::Knight));
        assert!(plain.same_squares(&knight));
        assert_ne!(plain, knight);
    }
}
