use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use flick::{StatsCacheStore, StatsSnapshot, Store};

fn store_read_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(42);

    c.bench_function("store_read", |b| {
        b.iter(|| {
            black_box(store.get());
        });
    });
}

fn store_write_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(0);

    c.bench_function("store_write", |b| {
        let mut i = 0;
        b.iter(|| {
            store.set(black_box(i));
            i += 1;
        });
    });
}

fn store_update_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        counter: usize,
        name: String,
    }

    let store = Store::new(State {
        counter: 0,
        name: "test".to_string(),
    });

    c.bench_function("store_update", |b| {
        let mut i = 0;
        b.iter(|| {
            store.update(|state| State {
                counter: black_box(i),
                name: state.name.clone(),
            });
            i += 1;
        });
    });
}

fn store_notify_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_notify");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new(0usize);

        for _ in 0..*subscriber_count {
            store
                .subscribe(|_| {
                    // Empty subscriber
                })
                .detach();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.set(black_box(i));
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn freshness_check_benchmark(c: &mut Criterion) {
    let cache = StatsCacheStore::new();
    cache.set(Some(StatsSnapshot::new(Vec::new(), 1_700_000_000_000)));

    c.bench_function("freshness_check", |b| {
        b.iter(|| {
            black_box(cache.is_fresh(black_box(1_700_000_060_000)));
        });
    });
}

criterion_group!(
    benches,
    store_read_benchmark,
    store_write_benchmark,
    store_update_benchmark,
    store_notify_benchmark,
    freshness_check_benchmark,
);
criterion_main!(benches);
