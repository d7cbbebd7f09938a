//! Engine abstraction used by the terminal front end and the match harness.
//!
//! Different move-selection strategies sit behind one trait so the
//! opponent can be swapped at runtime.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the engine's color has no legal move.
    pub best_move: Option<ChessMove>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Choose a move for `color`. The state is never modified.
    fn choose_move(&mut self, game_state: &GameState, color: Color) -> EngineOutput;
}
