//! Seeded random self-play through the game controller.
//!
//! Every move goes through `GameController::try_request_move`, so a playout
//! exercises the same validation and status bookkeeping a front end would.
//! Used by the property tests and the criterion bench.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::ChessError;
use crate::game::game_controller::GameController;
use crate::game::game_status::{GameState, GameStatus};
use crate::game_state::chess_types::{PieceKind, Side};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Side },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
    /// Take back the latest move after every `n` accepted moves.
    pub undo_every: Option<u16>,
    /// Pick a random promotion kind instead of the configured default.
    pub random_promotions: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 200,
            undo_every: None,
            random_promotions: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutStats {
    pub plies: u32,
    pub captures: u32,
    pub en_passant: u32,
    pub castles: u32,
    pub promotions: u32,
    pub checks: u32,
    pub undos: u32,
    pub outcome: Option<PlayoutOutcome>,
}

impl PlayoutStats {
    pub fn report(&self) -> String {
        format!(
            "plies={} captures={} en_passant={} castles={} promotions={} checks={} undos={} outcome={:?}",
            self.plies,
            self.captures,
            self.en_passant,
            self.castles,
            self.promotions,
            self.checks,
            self.undos,
            self.outcome
        )
    }
}

/// Plays uniformly random legal moves until the game ends or `max_plies`
/// moves have been accepted.
pub fn play_random_game(
    game: &mut GameController,
    config: &PlayoutConfig,
) -> Result<PlayoutStats, ChessError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = PlayoutStats::default();

    while stats.plies < u32::from(config.max_plies) && !game.game_state().is_terminal() {
        let moves = game.all_legal_moves();
        let Some(&chosen) = moves.choose(&mut rng) else {
            break;
        };

        let promotion = if config.random_promotions {
            Some(PROMOTION_CHOICES[rng.random_range(0..PROMOTION_CHOICES.len())])
        } else {
            None
        };

        let record = game.try_request_move(chosen.from, chosen.to, promotion)?;
        stats.plies += 1;
        if record.is_capture() {
            stats.captures += 1;
        }
        if record.flags.is_en_passant {
            stats.en_passant += 1;
        }
        if record.flags.is_castle {
            stats.castles += 1;
        }
        if record.flags.promoted_to.is_some() {
            stats.promotions += 1;
        }
        if game.status_of(game.current_turn()) == GameStatus::Check {
            stats.checks += 1;
        }

        let undo_due = config
            .undo_every
            .is_some_and(|n| n > 0 && stats.plies % u32::from(n) == 0);
        if undo_due {
            game.try_undo_last_move()?;
            stats.undos += 1;
        }
    }

    stats.outcome = Some(match game.game_state() {
        GameState::Checkmate => PlayoutOutcome::Checkmate {
            winner: game.current_turn().opposite(),
        },
        GameState::Stalemate => PlayoutOutcome::Stalemate,
        _ => PlayoutOutcome::MaxPlies,
    });

    debug!("random playout seed={} {}", config.seed, stats.report());
    Ok(stats)
}
