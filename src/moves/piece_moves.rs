//! Movement rule dispatch for each piece kind.
//!
//! These are pseudo-moves: the rook, bishop, queen and king results are
//! already bounded and respect blockers, while pawn captures and knight
//! jumps are raw offsets. Color and bounds filtering happens in
//! `move_generation::move_generator`.

use crate::game_state::chess_rules::{KING_DISTANCE, SLIDER_DISTANCE};
use crate::game_state::chess_types::*;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_quiet_moves};
use crate::moves::sliding_moves::{diagonal, horizontal, vertical};

/// Destinations for `piece` standing on `from`. `captures` selects capture
/// targets instead of quiet destinations.
pub fn piece_destinations(
    state: &GameState,
    piece: Piece,
    from: Position,
    captures: bool,
) -> Vec<Position> {
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => {
            if captures {
                pawn_capture_targets(color, from)
            } else {
                pawn_quiet_moves(state, color, from)
            }
        }
        PieceKind::Knight => knight_targets(from),
        PieceKind::Bishop => diagonal(state, from, SLIDER_DISTANCE, captures),
        PieceKind::Rook => orthogonal(state, color, from, SLIDER_DISTANCE, captures),
        PieceKind::Queen => {
            let mut out = orthogonal(state, color, from, SLIDER_DISTANCE, captures);
            out.extend(diagonal(state, from, SLIDER_DISTANCE, captures));
            out
        }
        PieceKind::King => {
            let mut out = orthogonal(state, color, from, KING_DISTANCE, captures);
            out.extend(diagonal(state, from, KING_DISTANCE, captures));
            out
        }
    }
}

fn orthogonal(
    state: &GameState,
    color: Color,
    from: Position,
    distance: i32,
    captures: bool,
) -> Vec<Position> {
    let mut out = horizontal(state, from, distance, captures);
    out.extend(vertical(state, color, from, distance, true, captures));
    out
}
