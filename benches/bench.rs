// Criterion benchmarks for Zip Locator

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use zip_locator::core::{lookup, proximity::rank_targets, distance::haversine_km, ReferenceStore};
use zip_locator::models::{default_targets, Coordinate, Target};
use zip_locator::services::BUNDLED_DATASET;

fn synthetic_dataset(rows: usize) -> String {
    let mut raw = String::from("ZIP,LAT,LNG\n");
    for i in 0..rows {
        let lat = 45.0 + (i as f64 * 0.0007) % 4.0;
        let lng = -124.0 + (i as f64 * 0.0011) % 6.0;
        raw.push_str(&format!("{:05},{:.4},{:.4}\n", i, lat, lng));
    }
    raw
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(47.15),
                black_box(-122.30),
                black_box(47.71),
                black_box(-122.19),
            )
        });
    });
}

fn bench_store_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_build");

    for rows in [1_000, 10_000, 40_000].iter() {
        let raw = synthetic_dataset(*rows);
        group.bench_with_input(BenchmarkId::new("build", rows), rows, |b, _| {
            b.iter(|| ReferenceStore::build(black_box(&raw)));
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let origin = Coordinate::new(47.15, -122.30).unwrap_or(Coordinate { lat: 0.0, lng: 0.0 });
    let mut group = c.benchmark_group("ranking");

    for count in [5, 50, 500].iter() {
        let targets: Vec<Target> = (0..*count)
            .map(|i| Target::new(i.to_string(), format!("T{}", i), 45.0 + (i as f64 * 0.01) % 4.0, -122.0))
            .collect();

        group.bench_with_input(BenchmarkId::new("rank_targets", count), count, |b, _| {
            b.iter(|| rank_targets(black_box(origin), black_box(&targets), black_box(3)));
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let store = ReferenceStore::build(BUNDLED_DATASET);
    let targets = default_targets();

    c.bench_function("lookup_bundled", |b| {
        b.iter(|| lookup(black_box(&store), black_box("98401"), black_box(&targets), black_box(1)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_store_build,
    bench_ranking,
    bench_lookup
);

criterion_main!(benches);
