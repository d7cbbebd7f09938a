//! Random-move engine.
//!
//! Picks uniformly among legal moves. Used as the weakest opponent and to
//! shake out move-generation bugs in engine matches.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::legal_moves_for_color;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumDuel Random"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> EngineOutput {
        let mut root = game_state.with_lift_restored();
        root.side_to_move = color;
        let legal_moves: Vec<ChessMove> = legal_moves_for_color(&root, color).into_iter().collect();

        EngineOutput {
            best_move: legal_moves.as_slice().choose(&mut self.rng).copied(),
            score: None,
            info_lines: vec![format!("info string random_engine legal_moves {}", legal_moves.len())],
        }
    }
}
