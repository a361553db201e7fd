//! Lookup strategy benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libris_bench::{random_isbn, records, Order, SIZES};
use libris_core::index::{GroupedIndex, HashIndex, Index, IndexSpec, TreeIndex};
use libris_core::{Catalog, Field, Record, Requester};
use std::sync::Arc;

fn shared(count: usize, order: Order) -> Vec<Arc<Record>> {
    records(count, order).into_iter().map(Arc::new).collect()
}

/// Benchmark ISBN lookups through the tree and the hash table.
fn bench_isbn_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("isbn_lookup");

    for order in Order::ALL {
        for &size in SIZES.iter() {
            let mut tree = TreeIndex::new(IndexSpec::for_field(Field::Isbn));
            let mut hash = HashIndex::new(IndexSpec::for_field(Field::Isbn));
            for record in shared(size, order) {
                tree.insert(Arc::clone(&record));
                hash.insert(record);
            }

            // Last key in ascending order sits at the bottom of a sorted tree.
            let worst = format!("{:010}", size - 1);

            group.bench_with_input(
                BenchmarkId::new(format!("tree_worst/{}", order.label()), size),
                &worst,
                |b, key| b.iter(|| black_box(tree.search(black_box(key)))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("hash_worst/{}", order.label()), size),
                &worst,
                |b, key| b.iter(|| black_box(hash.search(black_box(key)))),
            );
            group.bench_function(
                BenchmarkId::new(format!("tree_random/{}", order.label()), size),
                |b| {
                    b.iter_batched(
                        || random_isbn(size),
                        |key| black_box(tree.search(&key)),
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

/// Benchmark author lookups through the grouping and a linear scan.
fn bench_author_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("author_lookup");

    for &size in SIZES.iter() {
        let catalog = Catalog::new(records(size, Order::Shuffled));
        let mut grouped = GroupedIndex::new(IndexSpec::for_field(Field::Author));
        for record in catalog.records() {
            grouped.insert(Arc::clone(record));
        }

        group.bench_with_input(BenchmarkId::new("grouped", size), &size, |b, _| {
            b.iter(|| black_box(grouped.lookup(black_box("author 3")).len()))
        });
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| black_box(catalog.linear_author_search(black_box("author 3")).len()))
        });
    }
    group.finish();
}

/// Benchmark a full catalog search, including timing and logging.
fn bench_catalog_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_search");
    let requester = Requester::new("bench", "Bench");

    for field in Field::ALL {
        group.bench_function(BenchmarkId::from_parameter(field), |b| {
            b.iter_batched(
                || Catalog::new(records(1_000, Order::Shuffled)),
                |catalog| {
                    let query = match field {
                        Field::Title => "title 00000500",
                        Field::Isbn => "0000000500",
                        Field::Author => "author 5",
                    };
                    black_box(catalog.search(field, query, &requester).unwrap());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_isbn_lookup,
    bench_author_lookup,
    bench_catalog_search,
);

criterion_main!(benches);
