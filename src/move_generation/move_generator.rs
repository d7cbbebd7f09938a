//! Pseudo-legal move aggregation.
//!
//! Turns the raw per-piece movement rules into `(from, to)` pairs: quiet
//! moves must land on an empty in-bound square, captures on an in-bound
//! square held by the other color. Whether a move leaves the mover's own
//! king attacked is decided one layer up in `legal_move_checks`.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::moves::piece_moves::piece_destinations;

/// Ordered set of moves. Iteration is lexicographic on `(from, to)`.
pub type MoveSet = BTreeSet<ChessMove>;

/// Quiet destinations for `piece` on `from`, bounds- and occupancy-filtered.
pub fn quiet_destinations(state: &GameState, piece: Piece, from: Position) -> Vec<Position> {
    piece_destinations(state, piece, from, false)
        .into_iter()
        .filter(|&to| state.is_in_bounds(to) && !state.is_occupied(to))
        .collect()
}

/// Capture destinations for `piece` on `from`: only squares holding an enemy.
pub fn capture_destinations(state: &GameState, piece: Piece, from: Position) -> Vec<Position> {
    piece_destinations(state, piece, from, true)
        .into_iter()
        .filter(|&to| {
            state.is_in_bounds(to)
                && state
                    .piece_at(to)
                    .is_some_and(|target| target.color != piece.color)
        })
        .collect()
}

/// Every pseudo-legal move for `color`, quiet and capture alike.
pub fn moves_for_color(state: &GameState, color: Color) -> MoveSet {
    let mut moves = MoveSet::new();

    for (from, piece) in state.pieces_of(color) {
        for to in quiet_destinations(state, piece, from) {
            moves.insert(ChessMove::new(from, to));
        }
        for to in capture_destinations(state, piece, from) {
            moves.insert(ChessMove::new(from, to));
        }
    }

    moves
}

/// True if `mv` lands on a king of the other color.
pub fn is_capture_of_king(mv: ChessMove, state: &GameState) -> bool {
    let Some(target) = state.piece_at(mv.to) else {
        return false;
    };
    target.kind == PieceKind::King
        && state
            .piece_at(mv.from)
            .map_or(true, |mover| mover.color != target.color)
}

/// True if `mv` lands on a piece of the other color.
pub fn is_capture_move(mv: ChessMove, state: &GameState) -> bool {
    match (state.piece_at(mv.from), state.piece_at(mv.to)) {
        (Some(mover), Some(target)) => mover.color != target.color,
        _ => false,
    }
}

/// Piece captured by `mv`, if any.
pub fn captured_piece(mv: ChessMove, state: &GameState) -> Option<Piece> {
    if is_capture_move(mv, state) {
        state.piece_at(mv.to)
    } else {
        None
    }
}
