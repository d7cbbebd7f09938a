//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through
//! `commit_move`, with an optional seeded random opening prefix so repeated
//! games between deterministic engines still differ.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{commit_move, MoveOutcome};
use crate::move_generation::legal_move_checks::{game_status, legal_moves_for_color, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
    /// An engine returned no move while legal moves existed, or an illegal one.
    Forfeit { loser: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_random_plies: 4,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<ChessMove>,
}

pub fn play_engine_match(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: MatchConfig,
) -> MatchResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = GameState::standard();
    let mut played_moves = Vec::new();

    light.new_game();
    dark.new_game();

    let finish = |outcome: MatchOutcome, state: GameState, played_moves: Vec<ChessMove>| {
        info!(?outcome, "match finished");
        MatchResult {
            outcome,
            final_state: state,
            played_moves,
        }
    };

    for ply in 0..config.max_plies {
        let color = state.side_to_move;

        let choice = if ply < u16::from(config.opening_random_plies) {
            let legal: Vec<ChessMove> = legal_moves_for_color(&state, color).into_iter().collect();
            legal.as_slice().choose(&mut rng).copied()
        } else {
            let output = match color {
                Color::Light => light.choose_move(&state, color),
                Color::Dark => dark.choose_move(&state, color),
            };
            output.best_move
        };

        let Some(mv) = choice else {
            let outcome = match game_status(&state) {
                GameStatus::Checkmate { loser } | GameStatus::KingCaptured { loser } => {
                    MatchOutcome::Checkmate {
                        winner: loser.opposite(),
                    }
                }
                GameStatus::Stalemate => MatchOutcome::Stalemate,
                GameStatus::InProgress | GameStatus::Check(_) => {
                    MatchOutcome::Forfeit { loser: color }
                }
            };
            return finish(outcome, state, played_moves);
        };

        debug!(ply, %color, %mv, "match move");
        let outcome = commit_move(&mut state, mv.from, mv.to);
        if !outcome.is_applied() {
            return finish(MatchOutcome::Forfeit { loser: color }, state, played_moves);
        }
        played_moves.push(mv);

        match outcome {
            MoveOutcome::GameOver { loser } => {
                return finish(
                    MatchOutcome::Checkmate {
                        winner: loser.opposite(),
                    },
                    state,
                    played_moves,
                );
            }
            MoveOutcome::Drawn => return finish(MatchOutcome::Stalemate, state, played_moves),
            _ => {}
        }
    }

    finish(MatchOutcome::MaxPlies, state, played_moves)
}
