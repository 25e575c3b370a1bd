use std::iter::repeat;

use bowling_score::core::scoring::{score_sheet, total_score};
use bowling_score::{Frame, Game};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn perfect_game() -> Game {
    let mut game = Game::from_frames(repeat(Frame::strike()).take(9)).unwrap();
    game.add_frame(Frame::with_fill(10, 10, 10).unwrap()).unwrap();
    game
}

fn bench_total_score(c: &mut Criterion) {
    let game = perfect_game();

    c.bench_function("total_score_perfect_game", |b| {
        b.iter(|| total_score(black_box(game.frames())))
    });
}

fn bench_score_sheet(c: &mut Criterion) {
    let game = perfect_game();

    c.bench_function("score_sheet_perfect_game", |b| {
        b.iter(|| score_sheet(black_box(game.frames())))
    });
}

fn bench_build_game(c: &mut Criterion) {
    c.bench_function("build_open_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for _ in 0..10 {
                game.add_frame(black_box(Frame::new(4, 5).unwrap())).unwrap();
            }
            game
        })
    });
}

criterion_group!(benches, bench_total_score, bench_score_sheet, bench_build_game);
criterion_main!(benches);
