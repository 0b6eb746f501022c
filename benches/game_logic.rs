use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tanks::core::{build_level, Bullet, GameState, Tank};
use tui_tanks::types::Direction;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.tick();
            black_box(state.tick_count);
        })
    });
}

fn bench_build_level(c: &mut Criterion) {
    c.bench_function("build_level", |b| {
        b.iter(|| black_box(build_level()));
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let obstacles = build_level();
    let mut tank = Tank::new(32, 32);

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            // Alternate so the tank never walks into a wall and stalls
            // the benchmark on the cheap early-reject path only.
            tank.attempt_move(black_box(Direction::Right), &obstacles);
            tank.attempt_move(black_box(Direction::Left), &obstacles);
        })
    });
}

fn bench_bullet_advance(c: &mut Criterion) {
    let obstacles = build_level();

    c.bench_function("bullet_advance", |b| {
        b.iter(|| {
            let mut bullet = Bullet::new(black_box(208), 208, Direction::Right);
            bullet.advance(&obstacles);
            black_box(bullet.alive)
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_build_level,
    bench_attempt_move,
    bench_bullet_advance
);
criterion_main!(benches);
