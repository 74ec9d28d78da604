use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squeeze_core::{BoardState, Phase, Pos, Rules, Side};

/// Fill both sides in an interleaved pattern that leaves every piece alive.
fn midgame() -> BoardState {
    let mut board = BoardState::new();
    for col in 1..7 {
        board.place(Side::First, Pos::from_row_col(1, col)).ok();
        board.place(Side::First, Pos::from_row_col(3, col)).ok();
        board.place(Side::Second, Pos::from_row_col(4, col)).ok();
        board.place(Side::Second, Pos::from_row_col(6, col)).ok();
    }
    board
}

/// Deterministic playout: every side always takes its first legal option.
fn playout(mut board: BoardState) -> BoardState {
    let mut side = Side::First;
    for _ in 0..400 {
        if board.phase() == Phase::Placing {
            let next = board.legal_placements(side).next();
            if let Some(at) = next {
                board.place(side, at).ok();
            }
        } else {
            if board.is_terminal() {
                break;
            }
            let step = board
                .legal_moves(side)
                .find_map(|(from, dests)| dests.iter().next().map(|to| (from, to)));
            if let Some((from, to)) = step {
                board.move_piece(from, to).ok();
            }
        }
        side = side.opponent();
    }
    board
}

fn board_benchmarks(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("board");
    group.sample_size(100);

    group.bench_function("clone", |b| b.iter(|| black_box(&board).clone()));

    group.bench_function("legal_moves", |b| {
        b.iter(|| black_box(&board).move_count(Side::First) + board.move_count(Side::Second))
    });

    group.bench_function("legal_placements", |b| {
        b.iter(|| black_box(&BoardState::new()).legal_placements(Side::First).count())
    });

    group.bench_function("features", |b| b.iter(|| black_box(&board).features(Side::Second)));

    group.bench_function("playout", |b| {
        let rules = Rules { first_shrink_at: 32, shrink_step: 16, ..Rules::default() };
        b.iter(|| playout(black_box(BoardState::with_rules(rules))))
    });

    group.finish();
}

criterion_group!(benches, board_benchmarks);
criterion_main!(benches);
