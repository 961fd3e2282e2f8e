use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linear_collections::{DoublyLinkedList, Queue, SinglyLinkedList, Stack};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 5_000];

// Which end of the list the workload drains from
enum Drain {
    Head,
    Tail,
}

impl Drain {
    fn name(&self) -> &'static str {
        match self {
            Drain::Head => "delete_head",
            Drain::Tail => "delete_tail",
        }
    }
}

// --- Draining a list from either end ---

fn drain_benchmark(c: &mut Criterion, drain: Drain) {
    let mut group = c.benchmark_group(format!("drain_{}", drain.name()));

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("SinglyLinkedList", size), |b| {
            b.iter_with_setup(
                || (0..size).collect::<SinglyLinkedList<usize>>(),
                |mut list| match drain {
                    Drain::Head => while let Some(node) = list.delete_head() {
                        black_box(node);
                    },
                    Drain::Tail => while let Some(node) = list.delete_tail() {
                        black_box(node);
                    },
                },
            );
        });

        group.bench_function(BenchmarkId::new("DoublyLinkedList", size), |b| {
            b.iter_with_setup(
                || (0..size).collect::<DoublyLinkedList<usize>>(),
                |mut list| match drain {
                    Drain::Head => while let Some(node) = list.delete_head() {
                        black_box(node);
                    },
                    Drain::Tail => while let Some(node) = list.delete_tail() {
                        black_box(node);
                    },
                },
            );
        });
    }

    group.finish();
}

// --- Deleting shuffled values, several copies each ---

fn delete_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_values");

    for size in SIZES {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let values: Vec<u32> = (0..size).map(|_| rng.random_range(0..(size as u32 / 4).max(1))).collect();
        let mut targets = values.clone();
        targets.sort_unstable();
        targets.dedup();
        targets.shuffle(&mut rng);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("DoublyLinkedList", size), |b| {
            b.iter_with_setup(
                || values.iter().copied().collect::<DoublyLinkedList<u32>>(),
                |mut list| {
                    for target in &targets {
                        black_box(list.delete(target));
                    }
                },
            );
        });
    }

    group.finish();
}

// --- Stack and queue round trips ---

fn adapter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("Stack", size), |b| {
            b.iter(|| {
                let mut stack = Stack::new();
                for i in 0..size {
                    stack.push(i);
                }
                while let Some(value) = stack.pop() {
                    black_box(value);
                }
            });
        });

        group.bench_function(BenchmarkId::new("Queue", size), |b| {
            b.iter(|| {
                let mut queue = Queue::new();
                for i in 0..size {
                    queue.enqueue(i);
                }
                while let Some(value) = queue.dequeue() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

fn drain_from_head(c: &mut Criterion) {
    drain_benchmark(c, Drain::Head);
}

fn drain_from_tail(c: &mut Criterion) {
    drain_benchmark(c, Drain::Tail);
}

criterion_group!(
    benches,
    drain_from_head,
    drain_from_tail,
    delete_benchmark,
    adapter_benchmark
);
criterion_main!(benches);
