//! Benchmark utilities.

use libris_core::Record;
use libris_testkit::scenarios::synthetic_records;
use rand::seq::SliceRandom;
use rand::Rng;

/// Catalog sizes every benchmark sweeps.
pub const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Order in which records reach the indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Ascending keys, which degrades the trees into chains.
    Sorted,
    /// Random permutation.
    Shuffled,
}

impl Order {
    /// Both orders.
    pub const ALL: [Order; 2] = [Order::Sorted, Order::Shuffled];

    /// Label used in benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            Order::Sorted => "sorted",
            Order::Shuffled => "shuffled",
        }
    }
}

/// Generate `count` synthetic records in the given order.
pub fn records(count: usize, order: Order) -> Vec<Record> {
    let mut records = synthetic_records(count, 10);
    if order == Order::Shuffled {
        records.shuffle(&mut rand::thread_rng());
    }
    records
}

/// Pick a random ISBN that exists among `count` synthetic records.
pub fn random_isbn(count: usize) -> String {
    let i = rand::thread_rng().gen_range(0..count.max(1));
    format!("{i:010}")
}
