//! Benchmarks for node removal and FIFO throughput.
//!
//! Run with: cargo bench
//!
//! Compares `LinkedSequence::remove_node` (O(1) by handle) against
//! `DynamicList::remove` (O(n) search plus shift), and `Queue` against
//! `std::collections::VecDeque`.

use std::collections::VecDeque;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use generic_collections::{DynamicList, LinkedSequence, Queue};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// ============================================================================
// Removal from the middle
// ============================================================================

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_random");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let mut order: Vec<usize> = (0..size).collect();
        order.shuffle(&mut StdRng::seed_from_u64(42));

        group.bench_with_input(BenchmarkId::new("linked_sequence", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq = LinkedSequence::with_capacity(size);
                let nodes: Vec<_> = (0..size).map(|i| seq.append_back(i as u64)).collect();
                for &i in &order {
                    black_box(seq.remove_node(nodes[i]).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("dynamic_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list: DynamicList<u64> = (0..size as u64).collect();
                for &i in &order {
                    black_box(list.remove(&(i as u64)));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// FIFO throughput
// ============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo");
    const COUNT: usize = 10_000;
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("queue", |b| {
        let mut queue = Queue::with_capacity(COUNT);
        b.iter(|| {
            for i in 0..COUNT as u64 {
                queue.enqueue(i);
            }
            while let Some(v) = queue.try_dequeue() {
                black_box(v);
            }
        });
    });

    group.bench_function("vec_deque", |b| {
        let mut queue = VecDeque::with_capacity(COUNT);
        b.iter(|| {
            for i in 0..COUNT as u64 {
                queue.push_back(i);
            }
            while let Some(v) = queue.pop_front() {
                black_box(v);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_remove, bench_queue);
criterion_main!(benches);
