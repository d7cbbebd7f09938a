//! Errors used throughout the engine.
//!
//! Only malformed input is an error here. Illegal moves, missing kings and
//! positions without a legal reply are ordinary game outcomes and are
//! reported through `MoveOutcome` / `GameStatus` instead.

use thiserror::Error;

use crate::game_state::chess_types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates fall outside the board.
    #[error("square ({file}, {rank}) is outside the board")]
    InvalidSquare { file: i32, rank: i32 },

    /// A square or move string could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// A text board diagram could not be parsed.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("no piece at {0}")]
    NoPieceAtSquare(Position),

    #[error("no piece is currently lifted")]
    NoLiftedPiece,

    #[error("a piece is already lifted from {0}")]
    PieceAlreadyLifted(Position),

    /// A lifted piece cannot return to a square that has been filled since.
    #[error("square {0} is occupied")]
    SquareOccupied(Position),

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
