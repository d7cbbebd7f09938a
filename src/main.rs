//! Terminal front end: play against the engine from the keyboard.
//!
//! Moves are typed in long algebraic form (`e2e4`). Other commands:
//! `hint <square>` lists legal destinations, `depth <n>` changes the search
//! depth between moves, `new` restarts, `quit` exits.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use plum_duel::engines::engine_negamax::NegamaxEngine;
use plum_duel::engines::engine_random::RandomEngine;
use plum_duel::engines::engine_trait::Engine;
use plum_duel::utils::algebraic::{
    algebraic_to_position, long_algebraic_to_move, move_to_long_algebraic, position_to_algebraic,
};
use plum_duel::utils::render_game_state::render_game_state;
use plum_duel::{
    commit_move, legal_capture_moves, legal_quiet_moves, new_game, ChessResult, Color, GameState,
    MoveOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Negamax,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "plum_duel", about = "Play chess against a negamax engine")]
struct Args {
    /// Search depth in plies.
    #[arg(long, default_value_t = 3)]
    depth: i32,

    /// Color the engine plays.
    #[arg(long, value_enum, default_value_t = Side::Dark)]
    engine_color: Side,

    #[arg(long, value_enum, default_value_t = EngineKind::Negamax)]
    engine: EngineKind,

    /// Seed for the random engine.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine_color = Color::from(args.engine_color);

    let mut engine: Box<dyn Engine> = match args.engine {
        EngineKind::Negamax => Box::new(NegamaxEngine::new(args.depth)),
        EngineKind::Random => Box::new(match args.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        }),
    };

    let mut state = new_game(8, 8);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if state.side_to_move == engine_color {
            let output = engine.choose_move(&state, engine_color);
            let Some(mv) = output.best_move else {
                println!("{} has no legal move. You win!", engine.name());
                state = restart(engine.as_mut());
                continue;
            };

            println!("{} plays {}", engine.name(), move_to_long_algebraic(mv, &state)?);
            let outcome = commit_move(&mut state, mv.from, mv.to);
            if report(outcome, &mut state, engine.as_mut()) {
                continue;
            }
        }

        println!("{}\n", render_game_state(&state));
        print!("{} to move> ", state.side_to_move);
        if let Err(err) = io::stdout().flush() {
            warn!(%err, "failed to flush stdout");
        }

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        let mut words = line.split_whitespace();

        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit"), _) => return Ok(()),
            (Some("new"), _) => state = restart(engine.as_mut()),
            (Some("depth"), Some(value)) => match engine.set_option("Depth", value) {
                Ok(()) => println!("depth set to {value}"),
                Err(err) => println!("{err}"),
            },
            (Some("hint"), Some(square)) => match hint(&state, square) {
                Ok(text) => println!("{text}"),
                Err(err) => println!("{err}"),
            },
            (Some(text), _) => match long_algebraic_to_move(text, &state) {
                Ok(mv) => {
                    let outcome = commit_move(&mut state, mv.from, mv.to);
                    report(outcome, &mut state, engine.as_mut());
                }
                Err(err) => println!("{err}"),
            },
        }
    }
}

/// Print the outcome of a committed move. Returns true if the game was
/// restarted.
fn report(outcome: MoveOutcome, state: &mut GameState, engine: &mut dyn Engine) -> bool {
    match outcome {
        MoveOutcome::Applied => false,
        MoveOutcome::IllegalBlocked => {
            println!("That piece cannot move there.");
            false
        }
        MoveOutcome::IllegalSelfCheck => {
            println!("That move leaves your king in check.");
            false
        }
        MoveOutcome::GameOver { loser } => {
            println!("{}\nCheckmate, {loser} loses.", render_game_state(state));
            *state = restart(engine);
            true
        }
        MoveOutcome::Drawn => {
            println!("{}\nStalemate.", render_game_state(state));
            *state = restart(engine);
            true
        }
    }
}

fn restart(engine: &mut dyn Engine) -> GameState {
    engine.new_game();
    println!("New game.");
    new_game(8, 8)
}

fn hint(state: &GameState, square: &str) -> ChessResult<String> {
    let from = algebraic_to_position(square, state)?;
    let names = |targets: Vec<_>| -> ChessResult<Vec<String>> {
        targets
            .into_iter()
            .map(|to| position_to_algebraic(to, state))
            .collect()
    };

    let quiet = names(legal_quiet_moves(state, from))?;
    let captures = names(legal_capture_moves(state, from))?;
    Ok(format!(
        "moves: {}  captures: {}",
        quiet.join(" "),
        captures.join(" ")
    ))
}
