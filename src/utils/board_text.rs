//! Text board diagrams.
//!
//! A diagram is one line per rank, top (rank 0, Dark's side) first. Each
//! square is one character: `KQRBNP` for Light, `kqrbnp` for Dark, `.` for
//! empty. Spaces inside a line are ignored and blank lines are skipped, so
//! diagrams can be indented inside test source.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game_state::chess_types::*;

pub fn parse_board_diagram(diagram: &str, side_to_move: Color) -> ChessResult<GameState> {
    let rows: Vec<Vec<char>> = diagram
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.len() != BOARD_HEIGHT as usize {
        return Err(ChessError::InvalidDiagram(format!(
            "expected {BOARD_HEIGHT} ranks, found {}",
            rows.len()
        )));
    }

    let mut state = GameState::new_empty(BOARD_WIDTH, BOARD_HEIGHT);
    state.side_to_move = side_to_move;

    for (rank, row) in rows.iter().enumerate() {
        if row.len() != BOARD_WIDTH as usize {
            return Err(ChessError::InvalidDiagram(format!(
                "rank {rank} has {} squares, expected {BOARD_WIDTH}",
                row.len()
            )));
        }

        for (file, &ch) in row.iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessError::InvalidDiagram(format!("unknown piece character '{ch}'"))
            })?;
            state.place_piece(Position::new(file as i32, rank as i32), piece)?;
        }
    }

    Ok(state)
}

pub fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}

/// Inverse of `parse_board_diagram`, one space between squares.
pub fn board_diagram(state: &GameState) -> String {
    (0..state.height)
        .map(|rank| {
            (0..state.width)
                .map(|file| {
                    state
                        .piece_at(Position::new(file, rank))
                        .map_or('.', piece_to_char)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
