use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_duel::game_state::chess_types::{Color, GameState};
use plum_duel::move_generation::perft::perft;
use plum_duel::utils::board_text::parse_board_diagram;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: Option<&'static str>,
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        diagram: None,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_endgame",
        diagram: Some(
            "
            . . . . k . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            R . . . K . . R
            ",
        ),
        expected_nodes: &[24],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = match case.diagram {
            Some(text) => parse_board_diagram(text, Color::Light).expect("bench diagram should parse"),
            None => GameState::standard(),
        };

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&game), black_box(depth));
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
