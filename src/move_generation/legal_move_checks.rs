//! Check and checkmate detection.
//!
//! A color is in check when any pseudo-legal enemy move would capture its
//! king. Legality of a candidate move is decided by applying it to a clone
//! and asking that question of the resulting position. A color whose king
//! is gone has already lost; every query here treats that as the worst
//! possible check instead of failing.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{
    capture_destinations, is_capture_of_king, moves_for_color, quiet_destinations, MoveSet,
};

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate { loser: Color },
    /// No legal move while not in check.
    Stalemate,
    KingCaptured { loser: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check(_))
    }
}

/// Linear scan for `color`'s king.
pub fn king_position(state: &GameState, color: Color) -> Option<Position> {
    state
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

pub fn is_in_check(state: &GameState, color: Color) -> bool {
    if king_position(state, color).is_none() {
        return true;
    }

    moves_for_color(state, color.opposite())
        .into_iter()
        .any(|mv| is_capture_of_king(mv, state))
}

/// Check test for a position where a piece is held mid-drag: the lifted
/// piece is treated as standing on `destination`.
pub fn is_in_check_with_lifted(state: &GameState, color: Color, destination: Position) -> bool {
    is_in_check(&state.with_lifted_at(destination), color)
}

/// Keep only the moves after which `color` is not in check.
pub fn filter_legal_moves(state: &GameState, moves: MoveSet, color: Color) -> MoveSet {
    moves
        .into_iter()
        .filter(|&mv| !is_in_check(&state.simulate_move(mv), color))
        .collect()
}

pub fn legal_moves_for_color(state: &GameState, color: Color) -> MoveSet {
    filter_legal_moves(state, moves_for_color(state, color), color)
}

/// Legal quiet destinations for whatever piece stands on `position`. A piece
/// lifted from `position` is considered to still stand there.
pub fn legal_quiet_moves(state: &GameState, position: Position) -> Vec<Position> {
    legal_destinations(state, position, false)
}

/// Legal capture destinations for whatever piece stands on `position`.
pub fn legal_capture_moves(state: &GameState, position: Position) -> Vec<Position> {
    legal_destinations(state, position, true)
}

fn legal_destinations(state: &GameState, position: Position, captures: bool) -> Vec<Position> {
    let restored = state.with_lift_restored();
    let Some(piece) = restored.piece_at(position) else {
        return Vec::new();
    };

    let targets = if captures {
        capture_destinations(&restored, piece, position)
    } else {
        quiet_destinations(&restored, piece, position)
    };

    targets
        .into_iter()
        .filter(|&to| {
            let next = restored.simulate_move(ChessMove::new(position, to));
            !is_in_check(&next, piece.color)
        })
        .collect()
}

/// Returns the loser if the side to move is checkmated or has no king.
pub fn verify_for_checkmate(state: &GameState) -> Option<Color> {
    match game_status(state) {
        GameStatus::Checkmate { loser } | GameStatus::KingCaptured { loser } => Some(loser),
        _ => None,
    }
}

pub fn game_status(state: &GameState) -> GameStatus {
    let color = state.side_to_move;

    if king_position(state, color).is_none() {
        return GameStatus::KingCaptured { loser: color };
    }

    let in_check = is_in_check(state, color);
    let has_reply = !legal_moves_for_color(state, color).is_empty();

    match (in_check, has_reply) {
        (true, true) => GameStatus::Check(color),
        (true, false) => GameStatus::Checkmate { loser: color },
        (false, true) => GameStatus::InProgress,
        (false, false) => GameStatus::Stalemate,
    }
}
