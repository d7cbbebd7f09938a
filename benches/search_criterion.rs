use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_duel::game_state::chess_types::{Color, GameState};
use plum_duel::move_generation::legal_move_checks::legal_moves_for_color;
use plum_duel::search::board_scoring::MaterialPositionalScorer;
use plum_duel::search::negamax::{search_best_move, SearchConfig};
use plum_duel::utils::board_text::parse_board_diagram;

const MIDDLEGAME: &str = "
    r . b q k . . r
    p p p . . p p p
    . . n . . n . .
    . . b p p . . .
    . . B . P . . .
    . . N . . N . .
    P P P P . P P P
    R . B Q K . . R
";

fn bench_search(c: &mut Criterion) {
    let depth = std::env::var("PLUM_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(2);

    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    let cases = [
        ("startpos", GameState::standard()),
        (
            "middlegame",
            parse_board_diagram(MIDDLEGAME, Color::Light).expect("bench diagram should parse"),
        ),
    ];

    for (name, game) in cases {
        // Correctness guard before benchmarking.
        let config = SearchConfig { depth };
        let result = search_best_move(&game, Color::Light, &MaterialPositionalScorer, config);
        let best = result.best_move.expect("bench positions have legal moves");
        assert!(legal_moves_for_color(&game, Color::Light).contains(&best));

        group.bench_with_input(BenchmarkId::new(name, format!("d{depth}")), &game, |b, game| {
            b.iter(|| {
                let result = search_best_move(
                    black_box(game),
                    Color::Light,
                    &MaterialPositionalScorer,
                    config,
                );
                black_box(result.best_move)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
