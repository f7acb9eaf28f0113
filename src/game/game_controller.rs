//! Turn and status state machine.
//!
//! `GameController` is the only component that rotates turns or writes
//! status. It owns the board, asks the validator whether a requested move is
//! legal, commits it, and recomputes the opponent's status. Every rejected
//! command leaves the game exactly as it was.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::errors::ChessError;
use crate::game::game_config::{GameConfig, UndoStatusPolicy};
use crate::game::game_status::{GameState, GameStatus};
use crate::game::player::Player;
use crate::game_state::chess_types::{Board, MoveRecord, Piece, PieceKind, Side, Square};
use crate::move_generation::move_validator::MoveValidator;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Side,
    statuses: [GameStatus; 2],
    state: GameState,
    players: [Player; 2],
    config: GameConfig,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::standard(), Side::White, config)
    }

    /// Starts a game from an arbitrary position with `to_move` on move.
    ///
    /// Status is derived from the position, so a side handed a mated or
    /// stalemated position starts in a terminal state. An invalid `default_promotion` is replaced by a queen.
    pub fn from_board(board: Board, to_move: Side, mut config: GameConfig) -> Self {
        if !config.default_promotion.is_promotion_target() {
            warn!(
                "default promotion {:?} is not a valid target, using queen",
                config.default_promotion
            );
            config.default_promotion = PieceKind::Queen;
        }
        let players = [
            Player::new(Side::White, config.white_name.clone()).with_rating(config.initial_rating),
            Player::new(Side::Black, config.black_name.clone()).with_rating(config.initial_rating),
        ];
        let mut game = Self {
            board,
            turn: to_move,
            statuses: [GameStatus::Playing; 2],
            state: GameState::Playing,
            players,
            config,
            started_at: Utc::now(),
            ended_at: None,
        };
        game.refresh_status(to_move.opposite());
        game
    }

    /// Resets to the starting position, keeping players and configuration.
    pub fn new_game(&mut self) {
        let config = self.config.clone();
        let players = self.players.clone();
        *self = Self::from_board(Board::standard(), Side::White, config);
        self.players = players;
        debug!("new game started at {}", self.started_at);
    }

    // --- Queries ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Legal moves of the piece on `square`, or nothing when it is not that
    /// side's turn or the game is over.
    pub fn legal_moves_from(&mut self, square: Square) -> Vec<ChessMove> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.side == self.turn => {
                MoveValidator::new(&mut self.board).legal_moves_from(square)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&mut self) -> Vec<ChessMove> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        MoveValidator::new(&mut self.board).all_legal_moves(self.turn)
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    /// Side to move first, then the side waiting.
    #[inline]
    pub fn turn_order(&self) -> [Side; 2] {
        [self.turn, self.turn.opposite()]
    }

    #[inline]
    pub fn status_of(&self, side: Side) -> GameStatus {
        self.statuses[side.index()]
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.board.last_move()
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        self.board.history()
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    // --- Commands ---

    /// Plays a move for the side to move, or returns `None` and changes nothing.
    pub fn request_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<MoveRecord> {
        match self.try_request_move(from, to, promotion) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("rejected move {from}{to}: {err}");
                None
            }
        }
    }

    /// Like [`request_move`](Self::request_move), but reports why a move was
    /// refused. A promotion kind is only checked when the move promotes.
    pub fn try_request_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, ChessError> {
        if self.state.is_terminal() {
            return Err(ChessError::TerminalState(self.state));
        }

        let piece = self.board.piece_at(from).ok_or(ChessError::NoPieceAt(from))?;
        if piece.side != self.turn {
            return Err(ChessError::NotYourTurn {
                square: from,
                side: self.turn,
            });
        }

        let promotes = piece.kind == PieceKind::Pawn && to.row() == piece.side.promotion_row();
        let promotion = promotion.filter(|_| promotes);
        let mv = ChessMove::new(from, to).with_promotion(promotion);
        if promotion.is_some_and(|kind| !kind.is_promotion_target()) {
            return Err(ChessError::IllegalMove(mv));
        }

        let is_listed = MoveValidator::new(&mut self.board)
            .legal_moves_from(from)
            .iter()
            .any(|legal| legal.same_squares(&mv));
        if !is_listed {
            return Err(ChessError::IllegalMove(mv));
        }

        let mover = self.turn;
        let kind = promotion.unwrap_or(self.config.default_promotion);
        let record = self.board.apply_move(&mv.with_promotion(Some(kind)))?;
        self.refresh_status(mover);
        self.turn = mover.opposite();

        debug!(
            "{mover} played {record}; {} is {:?}",
            self.turn,
            self.status_of(self.turn)
        );
        Ok(record)
    }

    /// The side to move resigns. Ignored once the game is over.
    pub fn resign(&mut self) -> bool {
        self.try_resign().is_ok()
    }

    pub fn try_resign(&mut self) -> Result<(), ChessError> {
        if self.state.is_terminal() {
            return Err(ChessError::TerminalState(self.state));
        }

        let resigning = self.turn;
        self.statuses[resigning.index()] = GameStatus::Resigned;
        self.statuses[resigning.opposite().index()] = GameStatus::Win;
        self.finish(GameState::Resigned);
        debug!("{resigning} resigned");
        Ok(())
    }

    /// Offers are not tracked; only acceptance changes the game.
    pub fn offer_draw(&mut self) {
        debug!("{} offers a draw", self.turn);
    }

    /// Ends the game as a draw. Ignored once the game is over.
    pub fn accept_draw(&mut self) -> bool {
        if self.state.is_terminal() {
            debug!("draw acceptance ignored, game is {:?}", self.state);
            return false;
        }

        self.statuses = [GameStatus::Draw; 2];
        self.finish(GameState::Draw);
        debug!("draw agreed");
        true
    }

    /// Takes back the last move. Returns `false` when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.try_undo_last_move() {
            Ok(_) => true,
            Err(err) => {
                debug!("undo rejected: {err}");
                false
            }
        }
    }

    pub fn try_undo_last_move(&mut self) -> Result<MoveRecord, ChessError> {
        if matches!(self.state, GameState::Resigned | GameState::Draw) {
            return Err(ChessError::UndoUnavailable(self.state));
        }

        let record = self.board.undo_last().ok_or(ChessError::EmptyHistory)?;
        self.turn = record.side();
        self.ended_at = None;

        match self.config.undo_status {
            UndoStatusPolicy::ResetToPlaying => {
                self.statuses = [GameStatus::Playing; 2];
                self.state = GameState::Playing;
            }
            UndoStatusPolicy::Recompute => {
                let validator = MoveValidator::new(&mut self.board);
                for side in Side::BOTH {
                    self.statuses[side.index()] = if validator.is_in_check(side) {
                        GameStatus::Check
                    } else {
                        GameStatus::Playing
                    };
                }
                self.state = match self.statuses[self.turn.index()] {
                    GameStatus::Check => GameState::Check,
                    _ => GameState::Playing,
                };
            }
        }

        debug!("undid {record}; {} to move", self.turn);
        Ok(record)
    }

    /// Recomputes the status of `mover`'s opponent after `mover` played.
    ///
    /// Checkmate beats check, check beats stalemate, stalemate beats playing.
    fn refresh_status(&mut self, mover: Side) {
        let opponent = mover.opposite();
        let mut validator = MoveValidator::new(&mut self.board);
        let in_check = validator.is_in_check(opponent);
        let can_move = validator.has_any_legal_move(opponent);

        let (opponent_status, mover_status, state) = match (in_check, can_move) {
            (true, false) => (GameStatus::Checkmate, GameStatus::Win, GameState::Checkmate),
            (true, true) => (GameStatus::Check, GameStatus::Playing, GameState::Check),
            (false, false) => (GameStatus::Stalemate, GameStatus::Draw, GameState::Stalemate),
            (false, true) => (GameStatus::Playing, GameStatus::Playing, GameState::Playing),
        };

        self.statuses[opponent.index()] = opponent_status;
        self.statuses[mover.index()] = mover_status;
        if state.is_terminal() {
            self.finish(state);
        } else {
            self.state = state;
        }
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        self.ended_at = Some(Utc::now());
    }
}
