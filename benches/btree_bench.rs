//! Insert / delete / query throughput against `std::collections::BTreeSet`.
//!
//! Same workload shape as the original performance script: insert `0..n`,
//! then delete `0..n`, then query `0..n` on the emptied structure.

use std::collections::BTreeSet;
use std::hint::black_box;

use btreelib::{BTree, NumericIndex};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("btreelib", n), &n, |b, &n| {
            b.iter(|| {
                let mut tree = BTree::new();
                for i in 0..n {
                    tree.insert(black_box(i)).unwrap();
                }
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for i in 0..n {
                    set.insert(black_box(i));
                }
                set
            })
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for n in SIZES {
        let mut filled = BTree::new();
        for i in 0..n {
            filled.insert(i).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("btreelib", n), &n, |b, &n| {
            b.iter_batched(
                || filled.clone(),
                |mut tree| {
                    for i in 0..n {
                        tree.remove(black_box(&i));
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for n in SIZES {
        let mut index = NumericIndex::new();
        for i in 0..n {
            index.insert(i as f64).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("numeric_hit", n), &n, |b, &n| {
            b.iter(|| (0..n).filter(|&i| index.exists(black_box(i as f64))).count())
        });
        group.bench_with_input(BenchmarkId::new("numeric_miss", n), &n, |b, &n| {
            b.iter(|| (0..n).filter(|&i| index.exists(black_box(i as f64 + 0.5))).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_delete, bench_query);
criterion_main!(benches);
