//! Legal-move tree walker used to regression-test move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, legal_moves_for_color};
use crate::move_generation::move_generator::is_capture_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `state`, with the side to move
/// alternating from `state.side_to_move`.
pub fn perft(state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let color = state.side_to_move;
    let mut total = PerftCounts::default();

    for mv in legal_moves_for_color(state, color) {
        let capture = is_capture_move(mv, state);
        let next = state.simulate_move(mv);

        if depth == 1 {
            total.nodes += 1;
            if capture {
                total.captures += 1;
            }
            if is_in_check(&next, color.opposite()) {
                total.checks += 1;
                if legal_moves_for_color(&next, color.opposite()).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn start_position_depths_one_and_two() {
        let state = GameState::standard();
        assert_eq!(perft(&state, 1).nodes, 20);

        let depth_two = perft(&state, 2);
        assert_eq!(depth_two.nodes, 400);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.checks, 0);
    }

    #[test]
    fn start_position_depth_three() {
        let counts = perft(&GameState::standard(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn depth_zero_is_a_single_node() {
        assert_eq!(perft(&GameState::standard(), 0).nodes, 1);
    }
}
