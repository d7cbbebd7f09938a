//! Terminal-oriented Unicode board renderer.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::{file_char, rank_label};

/// Render the board with file letters and rank numbers around it. Rank 0
/// (Dark's back rank) is printed first.
pub fn render_game_state(game_state: &GameState) -> String {
    let files: String = (0..game_state.width)
        .map(|file| format!("{} ", file_char(file)))
        .collect();
    let header = format!("  {}", files.trim_end());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for rank in 0..game_state.height {
        let label = rank_label(rank, game_state.height);
        out.push_str(&format!("{label} "));

        for file in 0..game_state.width {
            let square = Position::new(file, rank);
            match game_state.piece_at(square) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if file < game_state.width - 1 {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {label}\n"));
    }

    out.push_str(&header);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn start_position_renders_dark_on_top() {
        let text = render_game_state(&GameState::standard());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
