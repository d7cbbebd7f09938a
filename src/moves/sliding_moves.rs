//! Ray walkers shared by every sliding piece.
//!
//! A ray stops at the first square that is off the board or occupied. In
//! quiet mode the squares before the stop are collected; in capture mode
//! only the blocking square is returned, whatever its color. The king is a
//! slider with a ray length of one.

use crate::game_state::chess_types::*;

/// Walk from `from` in steps of `(d_file, d_rank)` for at most `distance`
/// squares, pushing results into `out`.
pub fn trace_ray(
    state: &GameState,
    from: Position,
    (d_file, d_rank): (i32, i32),
    distance: i32,
    captures: bool,
    out: &mut Vec<Position>,
) {
    let mut square = from;

    for _ in 0..distance {
        square = square.offset(d_file, d_rank);

        if !state.is_in_bounds(square) {
            break;
        }
        if state.is_occupied(square) {
            if captures {
                out.push(square);
            }
            break;
        }
        if !captures {
            out.push(square);
        }
    }
}

pub fn horizontal(state: &GameState, from: Position, distance: i32, captures: bool) -> Vec<Position> {
    let mut out = Vec::new();
    trace_ray(state, from, (1, 0), distance, captures, &mut out);
    trace_ray(state, from, (-1, 0), distance, captures, &mut out);
    out
}

/// Vertical rays. With `both_directions == false` only the mover's forward
/// direction is walked.
pub fn vertical(
    state: &GameState,
    color: Color,
    from: Position,
    distance: i32,
    both_directions: bool,
    captures: bool,
) -> Vec<Position> {
    let mut out = Vec::new();

    if color == Color::Dark || both_directions {
        trace_ray(state, from, (0, 1), distance, captures, &mut out);
    }
    if color == Color::Light || both_directions {
        trace_ray(state, from, (0, -1), distance, captures, &mut out);
    }

    out
}

pub fn diagonal(state: &GameState, from: Position, distance: i32, captures: bool) -> Vec<Position> {
    let mut out = Vec::new();
    for step in [(1, 1), (-1, 1), (-1, -1), (1, -1)] {
        trace_ray(state, from, step, distance, captures, &mut out);
    }
    out
}
