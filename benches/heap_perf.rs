//! Criterion benchmarks for the binomial heap.
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use std::hint::black_box;

use binomial_heap::BinomialHeap;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn heap_of(keys: &[i64]) -> BinomialHeap<i64> {
    let mut heap = BinomialHeap::new();
    for key in keys {
        heap.insert(*key);
    }
    heap
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| black_box(heap_of(keys)));
        });
    }
    group.finish();
}

fn bench_extract_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_min_drain");
    for size in SIZES {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter_batched(
                || heap_of(keys),
                |mut heap| {
                    while let Some(key) = heap.extract_min() {
                        black_box(key);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    for size in SIZES {
        let left = random_keys(size);
        let right = random_keys(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(left, right),
            |b, (left, right)| {
                b.iter_batched(
                    || (heap_of(left), heap_of(right)),
                    |(mut a, b)| {
                        a.union(b);
                        black_box(a)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for size in SIZES {
        // Distinct keys so every lookup hits exactly one node.
        let keys: Vec<i64> = (0..size as i64).map(|i| i * 2 + 1_000_000).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter_batched(
                || heap_of(keys),
                |mut heap| {
                    for (i, key) in keys.iter().step_by(10).enumerate() {
                        heap.decrease_key(key, i as i64).unwrap();
                    }
                    black_box(heap)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_extract_min,
    bench_union,
    bench_decrease_key
);
criterion_main!(benches);
