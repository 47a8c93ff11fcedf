use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use negcycle::engine::{solve, solve_all, Strategy};
use negcycle::graph::mocks::{mock_random, mock_random_without_negative_cycle};

fn strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve without negative cycle");
    for n in [10, 50, 200].iter() {
        let g = mock_random_without_negative_cycle(*n, 0.3, 0);
        for &strategy in Strategy::ALL.iter() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), n, |b, _| {
                b.iter(|| solve(black_box(&g), 0, strategy))
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("solve with negative cycle");
    for n in [10, 50, 200].iter() {
        let g = mock_random(*n, 0.3, 0);
        for &strategy in Strategy::ALL.iter() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), n, |b, _| {
                b.iter(|| solve(black_box(&g), 0, strategy))
            });
        }
    }
    group.finish();
}

fn parallel(c: &mut Criterion) {
    let g = mock_random_without_negative_cycle(200, 0.3, 1);
    c.bench_function("solve_all n=200", |b| b.iter(|| solve_all(black_box(&g), 0)));
}

criterion_group!(benches, strategies, parallel);
criterion_main!(benches);
