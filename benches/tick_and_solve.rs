use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use snake_autoplay::boundary::{BoundaryIndex, DenseBoundary, SparseBoundary};
use snake_autoplay::config::{GameConfig, SolverConfig};
use snake_autoplay::engine::{RandomLookahead, SnakeGame};
use snake_autoplay::solver::{SearchStats, Solver};
use snake_autoplay::types::{Direction, SolverInstruments};

#[derive(Debug)]
struct Instruments {}

impl SolverInstruments for Instruments {
    fn observe_search(&self, _: &SearchStats) {}
}

fn start_of_game<B: BoundaryIndex>() -> SnakeGame<B, RandomLookahead> {
    SnakeGame::with_lookahead(&GameConfig::default(), RandomLookahead::seeded(1))
        .expect("the default config is valid")
}

fn bench_tick(c: &mut Criterion) {
    let game = start_of_game::<DenseBoundary>();
    c.bench_function("tick dense", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(g.tick(black_box(Direction::East))),
            BatchSize::SmallInput,
        )
    });

    let game = start_of_game::<SparseBoundary>();
    c.bench_function("tick sparse", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(g.tick(black_box(Direction::East))),
            BatchSize::SmallInput,
        )
    });
}

fn bench_simulation_copy(c: &mut Criterion) {
    let game = start_of_game::<DenseBoundary>();
    c.bench_function("simulation copy", |b| {
        b.iter(|| black_box(&game).simulation_copy())
    });
}

fn bench_solve_start_of_game(c: &mut Criterion) {
    let game = start_of_game::<DenseBoundary>();
    let solver = Solver::new(SolverConfig::default());
    let instruments = Instruments {};
    c.bench_function("solve start of game", |b| {
        b.iter(|| solver.find_path(&instruments, black_box(&game)))
    });
}

fn bench_solve_around_the_body(c: &mut Criterion) {
    // after eating the first egg the next one is usually off the body's row
    let mut game = start_of_game::<DenseBoundary>();
    for _ in 0..4 {
        game.tick(Direction::East);
    }
    let solver = Solver::new(SolverConfig::default());
    let instruments = Instruments {};
    c.bench_function("solve second egg", |b| {
        b.iter(|| solver.find_path(&instruments, black_box(&game)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_simulation_copy,
    bench_solve_start_of_game,
    bench_solve_around_the_body
);
criterion_main!(benches);
