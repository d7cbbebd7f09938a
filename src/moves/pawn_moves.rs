//! Pawn pushes and diagonal captures.
//!
//! Pawns move forward only, toward rank 0 for Light and toward the last
//! rank for Dark. Promotion and en passant are not modelled.

use crate::game_state::chess_rules::PAWN_START_DISTANCE;
use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::vertical;

/// Starting rank of a `color` pawn on a board `height` ranks tall.
#[inline]
pub const fn pawn_start_rank(color: Color, height: i32) -> i32 {
    match color {
        Color::Dark => 1,
        Color::Light => height - 2,
    }
}

/// Forward pushes onto empty squares: two from the starting rank (only if
/// the first square is also empty), one otherwise.
pub fn pawn_quiet_moves(state: &GameState, color: Color, from: Position) -> Vec<Position> {
    let distance = if from.rank == pawn_start_rank(color, state.height) {
        PAWN_START_DISTANCE
    } else {
        1
    };
    vertical(state, color, from, distance, false, false)
}

/// The two forward diagonals, whether or not anything stands there. The
/// move generator drops empty or off-board targets.
pub fn pawn_capture_targets(color: Color, from: Position) -> Vec<Position> {
    let forward = color.forward();
    vec![from.offset(-1, forward), from.offset(1, forward)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_rank_pawn_pushes_one_or_two() {
        let state = GameState::standard();
        let quiet = pawn_quiet_moves(&state, Color::Light, Position::new(4, 6));
        assert_eq!(quiet, vec![Position::new(4, 5), Position::new(4, 4)]);

        let quiet = pawn_quiet_moves(&state, Color::Dark, Position::new(2, 1));
        assert_eq!(quiet, vec![Position::new(2, 2), Position::new(2, 3)]);
    }

    #[test]
    fn blocked_second_square_leaves_single_push() {
        let mut state = GameState::standard();
        state
            .place_piece(Position::new(4, 4), Piece::new(PieceKind::Knight, Color::Dark))
            .expect("square is on the board");
        let quiet = pawn_quiet_moves(&state, Color::Light, Position::new(4, 6));
        assert_eq!(quiet, vec![Position::new(4, 5)]);
    }

    #[test]
    fn blocked_first_square_stops_the_pawn() {
        let mut state = GameState::standard();
        state
            .place_piece(Position::new(4, 5), Piece::new(PieceKind::Knight, Color::Dark))
            .expect("square is on the board");
        assert!(pawn_quiet_moves(&state, Color::Light, Position::new(4, 6)).is_empty());
    }

    #[test]
    fn pawn_off_start_rank_moves_one() {
        let state = GameState::default();
        let quiet = pawn_quiet_moves(&state, Color::Dark, Position::new(0, 3));
        assert_eq!(quiet, vec![Position::new(0, 4)]);
    }

    #[test]
    fn capture_targets_are_forward_diagonals_even_off_board() {
        let targets = pawn_capture_targets(Color::Light, Position::new(0, 6));
        assert_eq!(targets, vec![Position::new(-1, 5), Position::new(1, 5)]);

        let targets = pawn_capture_targets(Color::Dark, Position::new(3, 1));
        assert_eq!(targets, vec![Position::new(2, 2), Position::new(4, 2)]);
    }
}
