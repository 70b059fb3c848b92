//! Benchmarks for order-preserving upsert

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indexmap::IndexMap;
use std::hint::black_box;
use utilkit::{upsert, upsert_in_place};

fn build_map(size: usize) -> IndexMap<String, u64> {
    (0..size).map(|i| (format!("key_{}", i), i as u64)).collect()
}

/// Compare copying upsert against in-place upsert for existing and new keys
fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");

    for size in &[10, 100, 1000, 10000] {
        let map = build_map(*size);
        let middle = format!("key_{}", size / 2);

        group.bench_with_input(BenchmarkId::new("copy_existing", size), &map, |b, m| {
            b.iter(|| upsert(black_box(m), middle.clone(), 0))
        });
        group.bench_with_input(BenchmarkId::new("copy_new", size), &map, |b, m| {
            b.iter(|| upsert(black_box(m), "fresh".to_string(), 0))
        });
        group.bench_with_input(BenchmarkId::new("in_place_existing", size), &map, |b, m| {
            let mut owned = m.clone();
            b.iter(|| upsert_in_place(black_box(&mut owned), middle.clone(), 0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upsert);
criterion_main!(benches);
