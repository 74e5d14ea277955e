use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_minimax::core::PlayerId;
use rust_minimax::games::{ConnectFour, GameKind, Sticks, TicTacToe};
use rust_minimax::minimax::best_move;

fn tictactoe_benchmark(c: &mut Criterion) {
    c.bench_function("tictactoe_empty_board", |b| {
        b.iter(|| {
            let mut game = TicTacToe::new(PlayerId::Computer);
            black_box(best_move(&mut game, None))
        })
    });
}

fn connect_four_benchmark(c: &mut Criterion) {
    let depth = GameKind::ConnectFour.default_max_depth();

    let mut group = c.benchmark_group("connect_four");
    group.sample_size(10);
    group.bench_function("empty_board_default_depth", |b| {
        b.iter(|| {
            let mut game = ConnectFour::new(PlayerId::Computer);
            black_box(best_move(&mut game, black_box(depth)))
        })
    });
    group.bench_function("midgame_default_depth", |b| {
        b.iter(|| {
            let mut game = ConnectFour::with_moves(PlayerId::Human, &[3, 3, 2, 4, 4, 2, 5]);
            black_box(best_move(&mut game, black_box(depth)))
        })
    });
    group.finish();
}

fn sticks_benchmark(c: &mut Criterion) {
    c.bench_function("sticks_21", |b| {
        b.iter(|| {
            let mut game = Sticks::new(PlayerId::Computer);
            black_box(best_move(&mut game, None))
        })
    });
}

criterion_group!(benches, tictactoe_benchmark, connect_four_benchmark, sticks_benchmark);
criterion_main!(benches);
