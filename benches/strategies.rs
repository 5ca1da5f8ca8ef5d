use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_search::{solver, Algorithm, Puzzle};

fn bench_corridor(c: &mut Criterion) {
    let puzzle = Puzzle::from_file("puzzles/corridor.txt").unwrap();

    let mut group = c.benchmark_group("corridor");
    for algorithm in Algorithm::all() {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| solver::solve(black_box(&puzzle), black_box(algorithm)))
        });
    }
    group.finish();
}

fn bench_unsolvable(c: &mut Criterion) {
    let puzzle = Puzzle::from_file("puzzles/sealed-target.txt").unwrap();

    let mut group = c.benchmark_group("sealed-target");
    // IDDFS grinds through every depth up to its ceiling here - that cost
    // is exactly what this bench is meant to show
    for algorithm in Algorithm::all() {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| solver::solve(black_box(&puzzle), black_box(algorithm)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_corridor, bench_unsolvable);
criterion_main!(benches);
