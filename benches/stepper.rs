//! Benchmarks for the generation stepper.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use life_engine::{
    compute::{LifeSession, step},
    schema::{EdgePolicy, Pattern, Seed},
};

fn soup(rows: usize, cols: usize) -> life_engine::schema::Grid {
    let seed = Seed {
        pattern: Pattern::Random {
            density: 0.35,
            seed: 0xC0FFEE,
        },
    };
    seed.generate(rows, cols)
}

fn bench_immutable_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("immutable_step");

    for size in [64, 128, 256, 512] {
        let grid = soup(size, size);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| step(black_box(&grid), EdgePolicy::Bounded));
            },
        );
    }

    group.finish();
}

fn bench_session_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_step");

    for policy in [EdgePolicy::Bounded, EdgePolicy::Toroidal] {
        let mut session = LifeSession::new(soup(256, 256), policy);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", policy)),
            &policy,
            |b, _| {
                b.iter(|| session.step());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_immutable_step, bench_session_step);
criterion_main!(benches);
