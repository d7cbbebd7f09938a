//! Canonical rule constants.
//!
//! Board dimensions, move-rule ray lengths, and the back-rank layout used to
//! set up a new game.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_WIDTH: i32 = 8;
pub const BOARD_HEIGHT: i32 = 8;
/// Fewest ranks that hold both back ranks and both pawn ranks apart.
pub const MIN_GAME_HEIGHT: i32 = 4;

/// Ray length for the long-range sliders (rook, bishop, queen).
pub const SLIDER_DISTANCE: i32 = 8;
/// Ray length for the king.
pub const KING_DISTANCE: i32 = 1;
/// Pawn push length from its starting rank.
pub const PAWN_START_DISTANCE: i32 = 2;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Piece on the back rank at `file` for a board `width` files wide, mirrored
/// from both edges for the minor pieces and rooks.
pub fn back_rank_piece(file: i32, width: i32) -> Option<PieceKind> {
    if file == 0 || file == width - 1 {
        Some(PieceKind::Rook)
    } else if file == 1 || file == width - 2 {
        Some(PieceKind::Knight)
    } else if file == 2 || file == width - 3 {
        Some(PieceKind::Bishop)
    } else if file == 3 {
        Some(PieceKind::Queen)
    } else if file == 4 {
        Some(PieceKind::King)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_back_rank_layout() {
        let rank: Vec<_> = (0..BOARD_WIDTH)
            .map(|file| back_rank_piece(file, BOARD_WIDTH))
            .collect();
        assert_eq!(
            rank,
            vec![
                Some(PieceKind::Rook),
                Some(PieceKind::Knight),
                Some(PieceKind::Bishop),
                Some(PieceKind::Queen),
                Some(PieceKind::King),
                Some(PieceKind::Bishop),
                Some(PieceKind::Knight),
                Some(PieceKind::Rook),
            ]
        );
    }
}
