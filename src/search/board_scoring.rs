//! Static evaluation.
//!
//! Search stays independent of the heuristic by scoring through the
//! `BoardScorer` trait. Evaluations are zero-sum: Light's score is the
//! negation of Dark's.

use crate::game_state::chess_types::*;

pub const MATE_SCORE: i32 = 30_000;

pub trait BoardScorer: Send + Sync {
    /// Light-minus-Dark evaluation.
    fn evaluate(&self, game_state: &GameState) -> i32;

    /// Evaluation from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32 {
        game_state.side_to_move.sign() * self.evaluate(game_state)
    }
}

/// Material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn evaluate(&self, game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(_, piece)| piece.color.sign() * piece.kind.base_value())
            .sum()
    }
}

/// Material plus the positional tables. This is the engine's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPositionalScorer;

impl BoardScorer for MaterialPositionalScorer {
    fn evaluate(&self, game_state: &GameState) -> i32 {
        score(game_state)
    }
}

/// Sum over all placed pieces of signed material plus positional bonus,
/// Light positive.
pub fn score(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(pos, piece)| piece.color.sign() * piece.score_at(pos))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_text::parse_board_diagram;

    const MIDDLEGAME: &str = "
        r . b q k . . r
        p p p . . p p p
        . . n . . n . .
        . . . p p . . .
        . . B . P . . .
        . . N . . Q . .
        P P P P . P P P
        R . B . K . N R
    ";

    fn swap_colors(state: &GameState) -> GameState {
        let mut swapped = GameState::new_empty(state.width, state.height);
        for (pos, piece) in state.pieces() {
            swapped
                .place_piece(pos, Piece::new(piece.kind, piece.color.opposite()))
                .expect("square stays on the board");
        }
        swapped
    }

    #[test]
    fn start_position_is_balanced() {
        let state = GameState::standard();
        assert_eq!(score(&state), 0);
        assert_eq!(MaterialScorer.evaluate(&state), 0);
    }

    #[test]
    fn material_is_antisymmetric_under_color_swap() {
        let state = parse_board_diagram(MIDDLEGAME, Color::Light).expect("diagram should parse");
        let swapped = swap_colors(&state);
        assert_eq!(MaterialScorer.evaluate(&swapped), -MaterialScorer.evaluate(&state));
    }

    #[test]
    fn full_score_is_antisymmetric_under_color_swap() {
        let state = parse_board_diagram(MIDDLEGAME, Color::Light).expect("diagram should parse");
        assert_ne!(score(&state), 0);
        let swapped = swap_colors(&state);
        assert_eq!(score(&swapped), -score(&state));
    }

    #[test]
    fn color_swap_negates_score_in_played_games() {
        use crate::engines::engine_random::RandomEngine;
        use crate::engines::engine_trait::Engine;
        use crate::move_generation::legal_move_apply::commit_move;

        for seed in 0..3u64 {
            let mut state = GameState::standard();
            let mut engine = RandomEngine::with_seed(seed);
            for _ in 0..30 {
                let color = state.side_to_move;
                let Some(mv) = engine.choose_move(&state, color).best_move else {
                    break;
                };
                if !commit_move(&mut state, mv.from, mv.to).is_applied() {
                    break;
                }
                assert_eq!(score(&swap_colors(&state)), -score(&state), "seed {seed}");
            }
        }
    }

    #[test]
    fn side_to_move_perspective_flips_sign() {
        let mut state = parse_board_diagram(MIDDLEGAME, Color::Light).expect("diagram should parse");
        let light_view = MaterialPositionalScorer.score(&state);
        state.side_to_move = Color::Dark;
        assert_eq!(MaterialPositionalScorer.score(&state), -light_view);
    }

    #[test]
    fn extra_queen_dominates_position() {
        let mut state = GameState::standard();
        state.remove_piece(Position::new(3, 0));
        assert!(score(&state) >= PieceKind::Queen.base_value() - 10);
    }
}
