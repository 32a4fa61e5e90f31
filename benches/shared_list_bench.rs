//! Benchmark for SharedList vs standard VecDeque.
//!
//! Compares persistent and in-place SharedList operations against Rust's
//! standard VecDeque.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shared_list::shared::SharedList;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// push_front Benchmark (prepend)
// =============================================================================

fn benchmark_push_front(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_front");

    for size in [100, 1000, 10000] {
        // SharedList push_front (O(1), persistent)
        group.bench_with_input(
            BenchmarkId::new("SharedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = SharedList::new();
                    for index in 0..size {
                        list = list.push_front(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        // SharedList push_front_mut (O(1), in place)
        group.bench_with_input(
            BenchmarkId::new("SharedList_mut", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = SharedList::new();
                    for index in 0..size {
                        list.push_front_mut(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        // VecDeque push_front
        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// push_back Benchmark (append, O(n) per call)
// =============================================================================

fn benchmark_push_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back");

    for size in [100, 1000] {
        let shared_list: SharedList<i32> = (0..size).collect();

        // SharedList push_back (copies the chain)
        group.bench_with_input(
            BenchmarkId::new("SharedList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let appended = shared_list.push_back(black_box(-1));
                    black_box(appended)
                });
            },
        );

        // SharedList push_back_mut (walks, then rewrites the tail)
        group.bench_with_input(
            BenchmarkId::new("SharedList_mut", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut list: SharedList<i32> = (0..size).collect();
                    list.push_back_mut(black_box(-1));
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// consume (get + pop_front repeatedly) Benchmark
// =============================================================================

fn benchmark_consume(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("consume");

    for size in [100, 1000] {
        // Prepare data
        let shared_list: SharedList<i32> = (0..size).collect();
        let standard_deque: VecDeque<i32> = (0..size).collect();

        // SharedList consume via get/pop_front_mut
        group.bench_with_input(
            BenchmarkId::new("SharedList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut sum = 0;
                    let mut current = shared_list.clone();
                    while let Ok(head) = current.get(0) {
                        sum += head;
                        if current.pop_front_mut().is_err() {
                            break;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        // VecDeque consume via pop_front (clone first for fair comparison)
        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0;
                let mut deque = standard_deque.clone();
                while let Some(value) = deque.pop_front() {
                    sum += value;
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        // Prepare data
        let shared_list: SharedList<i32> = (0..size).collect();
        let standard_deque: VecDeque<i32> = (0..size).collect();

        // SharedList weak iteration
        group.bench_with_input(
            BenchmarkId::new("SharedList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i32 = shared_list.iter().sum();
                    black_box(sum)
                });
            },
        );

        // SharedList size (walks the chain)
        group.bench_with_input(
            BenchmarkId::new("SharedList_size", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(shared_list.size()));
            },
        );

        // VecDeque iteration
        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i32 = standard_deque.iter().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_push_front,
    benchmark_push_back,
    benchmark_consume,
    benchmark_iteration
);

criterion_main!(benches);
