//! Criterion benchmarks for destination distance queries over the catalog.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use samestats::dest::{lookup, Shape, DESTINATION_NAMES};
use samestats::Point;

fn bench_dest(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let queries: Vec<Point> = (0..256)
        .map(|_| Vector2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    let mut group = c.benchmark_group("dest");
    for name in DESTINATION_NAMES {
        let dest = lookup(name).unwrap();
        group.bench_with_input(BenchmarkId::new("distance_x256", name), &dest, |b, d| {
            b.iter(|| queries.iter().map(|p| d.distance(*p)).sum::<f64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dest);
criterion_main!(benches);
