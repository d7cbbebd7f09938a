//! Negamax search with alpha-beta pruning and quiescence.
//!
//! Every node owns its own cloned `GameState`; nothing is shared or undone.
//! Scores are always from the perspective of the side to move at the node.

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{
    filter_legal_moves, is_in_check, king_position, legal_moves_for_color,
};
use crate::move_generation::move_generator::{captured_piece, is_capture_move, moves_for_color, MoveSet};
use crate::search::board_scoring::{BoardScorer, MaterialPositionalScorer, MATE_SCORE};

/// Bound wider than any reachable score.
pub const INFINITY: i32 = MATE_SCORE + 1_000;

/// Capture-chain cap for quiescence.
pub const QUIESCENCE_MAX_PLY: u8 = 16;

/// Difficulty levels offered to players, mapped one-to-one onto depth.
pub const MIN_LEVEL: u8 = 2;
pub const MAX_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nominal depth in plies. Zero or less evaluates each root move by
    /// quiescence alone.
    pub depth: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl SearchConfig {
    pub fn for_level(level: u8) -> Self {
        Self {
            depth: i32::from(level.clamp(MIN_LEVEL, MAX_LEVEL)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// Score of `best_move` for the searching color.
    pub best_score: i32,
    pub nodes: u64,
}

/// Pick a move for `color` in `game_state` with the default evaluation.
/// `None` means `color` has no legal move.
pub fn engine_choose_move(game_state: &GameState, color: Color, depth: i32) -> Option<ChessMove> {
    search_best_move(game_state, color, &MaterialPositionalScorer, SearchConfig { depth }).best_move
}

/// Root driver: run negamax below every legal move of `color` and keep the
/// best. Ties keep the earliest move in search order.
pub fn search_best_move<S: BoardScorer>(
    game_state: &GameState,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut root = game_state.with_lift_restored();
    root.side_to_move = color;

    let mut nodes = 1u64;
    let moves = legal_moves_for_color(&root, color);

    if moves.is_empty() {
        let best_score = terminal_score(&root, 0);
        debug!(%color, best_score, "no legal move at root");
        return SearchResult {
            best_move: None,
            best_score,
            nodes,
        };
    }

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best_move = None;
    let mut best_score = -INFINITY;

    for mv in ordered_moves(&root, moves) {
        let child = root.simulate_move(mv);
        let score = -negamax(&child, scorer, config.depth - 1, -beta, -alpha, 1, &mut nodes);
        trace!(%mv, score, "root move");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    debug!(
        %color,
        depth = config.depth,
        nodes,
        best_score,
        best_move = ?best_move,
        "search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

/// Negamax over legal moves. At the horizon the position is handed to
/// quiescence rather than scored directly.
pub fn negamax<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let color = game_state.side_to_move;

    if king_position(game_state, color).is_none() {
        return mated_score(ply);
    }

    if depth <= 0 {
        return quiescence(game_state, scorer, alpha, beta, ply, 0, nodes);
    }

    let moves = legal_moves_for_color(game_state, color);
    if moves.is_empty() {
        return terminal_score(game_state, ply);
    }

    let mut best = -INFINITY;

    for mv in ordered_moves(game_state, moves) {
        let child = game_state.simulate_move(mv);
        let score = -negamax(&child, scorer, depth - 1, -beta, -alpha, ply + 1, nodes);

        if score >= beta {
            return score;
        }
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

/// Capture-only search past the horizon. The static score is the stand-pat
/// baseline; quiet moves are never explored.
pub fn quiescence<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    quiescence_ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let color = game_state.side_to_move;

    if king_position(game_state, color).is_none() {
        return mated_score(ply);
    }

    let stand_pat = scorer.score(game_state);
    if stand_pat >= beta {
        return stand_pat;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if quiescence_ply >= QUIESCENCE_MAX_PLY {
        return alpha;
    }

    let captures: MoveSet = moves_for_color(game_state, color)
        .into_iter()
        .filter(|&mv| is_capture_move(mv, game_state))
        .collect();
    let captures = filter_legal_moves(game_state, captures, color);

    for mv in ordered_moves(game_state, captures) {
        let child = game_state.simulate_move(mv);
        let score = -quiescence(
            &child,
            scorer,
            -beta,
            -alpha,
            ply + 1,
            quiescence_ply + 1,
            nodes,
        );

        if score >= beta {
            return score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Search order: captures first, most valuable victim then least valuable
/// attacker, then quiet moves. Within a group the set's `(from, to)` order
/// is kept, so the search is deterministic.
pub fn ordered_moves(game_state: &GameState, moves: MoveSet) -> Vec<ChessMove> {
    let mut ordered: Vec<ChessMove> = moves.into_iter().collect();
    ordered.sort_by_key(|&mv| {
        match captured_piece(mv, game_state) {
            Some(victim) => {
                let attacker = game_state
                    .piece_at(mv.from)
                    .map_or(0, |piece| piece.kind.base_value());
                (0, -victim.kind.base_value(), attacker)
            }
            None => (1, 0, 0),
        }
    });
    ordered
}

/// Score for a side to move with no legal move: mated if in check, drawn
/// otherwise.
fn terminal_score(game_state: &GameState, ply: i32) -> i32 {
    if is_in_check(game_state, game_state.side_to_move) {
        mated_score(ply)
    } else {
        0
    }
}

#[inline]
fn mated_score(ply: i32) -> i32 {
    -(MATE_SCORE - ply)
}
