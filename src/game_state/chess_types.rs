//! Core value types shared by every subsystem: colors, piece kinds, board
//! positions and moves.
//!
//! The board is addressed top-down: `rank == 0` is Dark's back rank and
//! `rank == height - 1` is Light's back rank. Dark pawns advance toward
//! increasing rank, Light pawns toward decreasing rank.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Side to move. `Light` plays White, `Dark` plays Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// `+1` for Light, `-1` for Dark. Converts Light-minus-Dark scores into
    /// side-to-move scores.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank step of a forward move for this color.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Base material value used by the static evaluation.
    #[inline]
    pub const fn base_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

/// A colored piece. Pieces carry no per-instance state, so moving one is a
/// remove followed by an insert of the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Material plus positional bonus for this piece standing on
    /// `position`. Always non-negative; the caller signs it by color.
    #[inline]
    pub fn score_at(self, position: Position) -> i32 {
        self.kind.base_value()
            + crate::search::piece_square_tables::positional_bonus(self.kind, position)
    }
}

/// Board coordinate, 0-indexed. Ordered by file, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub file: i32,
    pub rank: i32,
}

impl Position {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn offset(self, d_file: i32, d_rank: i32) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((file, rank): (i32, i32)) -> Self {
        Self::new(file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A move from one square to another. Ordered lexicographically on
/// `(from, to)`, which is the deterministic iteration order of move sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color_round_trips() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite().opposite(), Color::Dark);
    }

    #[test]
    fn moves_order_by_origin_then_destination() {
        let a = ChessMove::new(Position::new(0, 6), Position::new(0, 5));
        let b = ChessMove::new(Position::new(0, 6), Position::new(0, 4));
        let c = ChessMove::new(Position::new(1, 7), Position::new(0, 5));
        let mut moves = vec![c, a, b];
        moves.sort();
        assert_eq!(moves, vec![b, a, c]);
    }

    #[test]
    fn king_outweighs_all_other_material() {
        let others: i32 = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ]
        .iter()
        .map(|kind| kind.base_value())
        .sum();
        assert!(PieceKind::King.base_value() > 2 * others);
    }
}
