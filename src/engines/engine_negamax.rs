//! Depth-limited negamax engine.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{BoardScorer, MaterialPositionalScorer};
use crate::search::negamax::{search_best_move, SearchConfig};

pub struct NegamaxEngine<S: BoardScorer = MaterialPositionalScorer> {
    scorer: S,
    config: SearchConfig,
}

impl NegamaxEngine<MaterialPositionalScorer> {
    pub fn new(depth: i32) -> Self {
        Self::with_scorer(MaterialPositionalScorer, depth)
    }

    pub fn for_level(level: u8) -> Self {
        Self {
            scorer: MaterialPositionalScorer,
            config: SearchConfig::for_level(level),
        }
    }
}

impl Default for NegamaxEngine<MaterialPositionalScorer> {
    fn default() -> Self {
        Self {
            scorer: MaterialPositionalScorer,
            config: SearchConfig::default(),
        }
    }
}

impl<S: BoardScorer> NegamaxEngine<S> {
    pub fn with_scorer(scorer: S, depth: i32) -> Self {
        Self {
            scorer,
            config: SearchConfig { depth },
        }
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.config.depth
    }

    /// Takes effect from the next `choose_move`.
    pub fn set_depth(&mut self, depth: i32) {
        self.config.depth = depth;
    }
}

impl<S: BoardScorer> Engine for NegamaxEngine<S> {
    fn name(&self) -> &str {
        "PlumDuel Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("depth") {
            let depth = value.trim().parse::<i32>().map_err(|_| invalid())?;
            self.set_depth(depth);
            Ok(())
        } else if name.eq_ignore_ascii_case("level") {
            let level = value.trim().parse::<u8>().map_err(|_| invalid())?;
            self.config = SearchConfig::for_level(level);
            Ok(())
        } else {
            Err(ChessError::UnknownOption(name.to_owned()))
        }
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> EngineOutput {
        let result = search_best_move(game_state, color, &self.scorer, self.config);

        EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: vec![format!(
                "info depth {} nodes {} score {}",
                self.config.depth, result.nodes, result.best_score
            )],
        }
    }
}
