//! Throughput benchmarks for the indexed priority queue.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipq::IndexedPriorityQueue;

const N: usize = 10_000;

/// Deterministic pseudo-random keys (xorshift); benches must not drift
/// between runs.
fn generate_keys(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = generate_keys(N);
    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::new(keys.len());
            for (index, &key) in keys.iter().enumerate() {
                queue.insert(index, key).unwrap();
            }
            black_box(queue.len())
        })
    });
}

fn bench_remove_min(c: &mut Criterion) {
    let keys = generate_keys(N);
    c.bench_function("remove_min_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::new(keys.len());
            for (index, &key) in keys.iter().enumerate() {
                queue.insert(index, key).unwrap();
            }
            let mut last = 0;
            while let Ok((_, key)) = queue.remove_min() {
                last = key;
            }
            black_box(last)
        })
    });
}

fn bench_decrease_key(c: &mut Criterion) {
    let keys = generate_keys(N);
    c.bench_function("decrease_key_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::new(keys.len());
            for (index, &key) in keys.iter().enumerate() {
                // Force the low bit so halving below is a strict decrease.
                queue.insert(index, key | 1).unwrap();
            }
            for (index, &key) in keys.iter().enumerate() {
                queue.decrease_key(index, key >> 1).unwrap();
            }
            black_box(queue.min_index().unwrap())
        })
    });
}

criterion_group!(benches, bench_insert, bench_remove_min, bench_decrease_key);
criterion_main!(benches);
