//! Positional bonus tables, in the same units as piece material (pawn = 10).
//!
//! Every table reads the same from either side of the board, so a Light
//! and a Dark piece of one kind earn the same bonus on the same square and
//! swapping every piece's color negates the score. Boards that are not 8x8
//! get no bonus outside the table.

use crate::game_state::chess_types::*;

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 1,  1,  1, -2, -2,  1,  1,  1],
    [ 1,  0,  1,  2,  2,  1,  0,  1],
    [ 0,  1,  2,  3,  3,  2,  1,  0],
    [ 0,  1,  2,  3,  3,  2,  1,  0],
    [ 1,  0,  1,  2,  2,  1,  0,  1],
    [ 1,  1,  1, -2, -2,  1,  1,  1],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2,  0,  1,  1,  0, -2, -4],
    [-3,  1,  1,  2,  2,  1,  1, -3],
    [-3,  0,  2,  2,  2,  2,  0, -3],
    [-3,  0,  2,  2,  2,  2,  0, -3],
    [-3,  1,  1,  2,  2,  1,  1, -3],
    [-4, -2,  0,  1,  1,  0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1,  1,  0,  0,  0,  0,  1, -1],
    [-1,  1,  1,  1,  1,  1,  1, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  1, -1],
    [-1,  1,  0,  0,  0,  0,  1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [ 0,  0,  0,  1,  1,  0,  0,  0],
    [ 1,  1,  1,  1,  1,  1,  1,  1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [ 1,  1,  1,  1,  1,  1,  1,  1],
    [ 0,  0,  0,  1,  1,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1,  0,  1,  0,  0,  0,  0, -1],
    [-1,  1,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  0,  0,  0,  0, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

#[rustfmt::skip]
const KING_TABLE: Table = [
    [ 2,  3,  1,  0,  0,  1,  3,  2],
    [ 1,  1, -1, -2, -2, -1,  1,  1],
    [-2, -3, -3, -4, -4, -3, -3, -2],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-2, -3, -3, -4, -4, -3, -3, -2],
    [ 1,  1, -1, -2, -2, -1,  1,  1],
    [ 2,  3,  1,  0,  0,  1,  3,  2],
];

const fn table_for(kind: PieceKind) -> &'static Table {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Bonus for a `kind` piece on `position`, for either color. Used for
/// scoring only, never for legality.
pub fn positional_bonus(kind: PieceKind, position: Position) -> i32 {
    match (usize::try_from(position.rank), usize::try_from(position.file)) {
        (Ok(row), Ok(file)) if row < 8 && file < 8 => table_for(kind)[row][file],
        _ => 0,
    }
}
