//! Crate root module declarations for the Plum Duel engine.
//!
//! Exposes the board model, per-piece movement rules, legal move
//! generation and check detection, the negamax search, pluggable engines,
//! and text utilities so the terminal front end, tests, and benchmarks can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_text;
    pub mod engine_match_harness;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{ChessMove, Color, GameState, Piece, PieceKind, Position};
pub use move_generation::legal_move_apply::{commit_move, MoveOutcome};
pub use move_generation::legal_move_checks::{
    legal_capture_moves, legal_quiet_moves, verify_for_checkmate, GameStatus,
};
pub use search::negamax::engine_choose_move;

/// Start a game on a `width` x `height` board with the standard back ranks.
pub fn new_game(width: i32, height: i32) -> GameState {
    GameState::new_game(width, height)
}
