//! Crate root module declarations for the chess referee.
//!
//! The crate is layered bottom-up: value types and the board in
//! `game_state`, per-piece geometry in `moves`, king-safety filtering in
//! `move_generation`, and the turn/status state machine in `game`.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod square_masks;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod move_validator;
    pub mod perft;
    pub mod probe_guard;
}

pub mod game {
    pub mod game_config;
    pub mod game_controller;
    pub mod game_status;
    pub mod player;
}

pub mod utils {
    pub mod random_playout;
    pub mod render_board;
}

pub use errors::ChessError;
pub use game::game_controller::GameController;
