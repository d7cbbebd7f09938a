//! Coordinate notation.
//!
//! Converts between board positions and square names such as `e2`, and
//! between moves and long algebraic strings such as `e2e4`. File `a` is
//! file 0; rank `1` is the bottom rank (Light's back rank), which is
//! `height - 1` in board coordinates.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[inline]
pub fn file_char(file: i32) -> char {
    u8::try_from(file)
        .ok()
        .filter(|file| *file < 26)
        .map_or('?', |file| char::from(b'a' + file))
}

/// Printed rank number for a board rank.
#[inline]
pub fn rank_label(rank: i32, height: i32) -> i32 {
    height - rank
}

pub fn algebraic_to_position(square: &str, game_state: &GameState) -> ChessResult<Position> {
    let mut chars = square.chars();
    let file_ch = chars
        .next()
        .filter(char::is_ascii_lowercase)
        .ok_or_else(|| ChessError::InvalidNotation(format!("bad file in {square:?}")))?;
    let rank_number: i32 = chars
        .as_str()
        .parse()
        .map_err(|_| ChessError::InvalidNotation(format!("bad rank in {square:?}")))?;

    let file = i32::from(file_ch as u8 - b'a');
    let position = Position::new(file, game_state.height - rank_number);

    if !game_state.is_in_bounds(position) {
        return Err(ChessError::InvalidNotation(format!(
            "{square:?} is not on the board"
        )));
    }
    Ok(position)
}

pub fn position_to_algebraic(position: Position, game_state: &GameState) -> ChessResult<String> {
    if !game_state.is_in_bounds(position) {
        return Err(ChessError::InvalidSquare {
            file: position.file,
            rank: position.rank,
        });
    }
    Ok(format!(
        "{}{}",
        file_char(position.file),
        rank_label(position.rank, game_state.height)
    ))
}

/// Parse `e2e4`-style input. The split point is the second letter, so
/// multi-digit ranks on taller boards also parse.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<ChessMove> {
    let text = text.trim();
    let split = text
        .char_indices()
        .skip(1)
        .find(|(_, ch)| ch.is_ascii_alphabetic())
        .map(|(idx, _)| idx)
        .ok_or_else(|| ChessError::InvalidNotation(format!("expected a move like e2e4, got {text:?}")))?;

    let from = algebraic_to_position(&text[..split], game_state)?;
    let to = algebraic_to_position(&text[split..], game_state)?;
    Ok(ChessMove::new(from, to))
}

pub fn move_to_long_algebraic(mv: ChessMove, game_state: &GameState) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        position_to_algebraic(mv.from, game_state)?,
        position_to_algebraic(mv.to, game_state)?
    ))
}
