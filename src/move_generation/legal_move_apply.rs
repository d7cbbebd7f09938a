//! Committing moves to the real game.
//!
//! `commit_move` is the one path that mutates a live `GameState`. It
//! validates the move against the generated move set and the self-check
//! rule, applies it, and reports the status of the side that moves next.

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{game_status, is_in_check, king_position, GameStatus};
use crate::move_generation::move_generator::moves_for_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    /// Not a move the piece on `from` can make, not that side's turn, or a
    /// piece is still lifted off the board.
    IllegalBlocked,
    /// The move would leave the mover's own king attacked.
    IllegalSelfCheck,
    GameOver { loser: Color },
    /// The side to move has no legal reply and is not in check.
    Drawn,
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        !matches!(self, MoveOutcome::IllegalBlocked | MoveOutcome::IllegalSelfCheck)
    }
}

/// Validate and apply `from -> to` for the side to move. Rejected moves
/// leave `state` unchanged. Nothing is committed while a piece is lifted;
/// finish the drag with `drop_lifted_piece` or `cancel_lift` first.
pub fn commit_move(state: &mut GameState, from: Position, to: Position) -> MoveOutcome {
    let mover = state.side_to_move;
    let mv = ChessMove::new(from, to);

    if let Some(lifted) = state.lifted() {
        debug!(%mv, origin = %lifted.origin, "rejected move while a piece is lifted");
        return MoveOutcome::IllegalBlocked;
    }

    if king_position(state, mover).is_none() {
        return MoveOutcome::GameOver { loser: mover };
    }

    match state.piece_at(from) {
        Some(piece) if piece.color == mover => {}
        _ => return MoveOutcome::IllegalBlocked,
    }

    if !moves_for_color(state, mover).contains(&mv) {
        debug!(%mv, color = %mover, "rejected move outside the generated set");
        return MoveOutcome::IllegalBlocked;
    }

    if is_in_check(&state.simulate_move(mv), mover) {
        debug!(%mv, color = %mover, "rejected move leaving own king attacked");
        return MoveOutcome::IllegalSelfCheck;
    }

    let captured = state.apply_move_unchecked(mv);
    debug!(%mv, color = %mover, ?captured, "committed move");

    match game_status(state) {
        GameStatus::Checkmate { loser } | GameStatus::KingCaptured { loser } => {
            info!(%loser, "game over");
            MoveOutcome::GameOver { loser }
        }
        GameStatus::Stalemate => {
            info!("stalemate");
            MoveOutcome::Drawn
        }
        GameStatus::InProgress | GameStatus::Check(_) => MoveOutcome::Applied,
    }
}

/// Finish a drag: restore the lifted piece and commit it to `to`. If the
/// move is rejected the piece ends up back on its origin.
pub fn drop_lifted_piece(state: &mut GameState, to: Position) -> ChessResult<MoveOutcome> {
    let lifted = state.lifted().ok_or(ChessError::NoLiftedPiece)?;
    state.cancel_lift()?;
    Ok(commit_move(state, lifted.origin, to))
}
