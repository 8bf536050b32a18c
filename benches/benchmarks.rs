use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use ripple::{Record, Store};

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| Store::new(Record::from([("x", black_box(42))])));
    });
}

fn store_read_benchmark(c: &mut Criterion) {
    let store = Store::new(Record::from([("x", 42)]));

    c.bench_function("store_read", |b| {
        b.iter(|| {
            black_box(store.get_state());
        });
    });
}

fn store_merge_write_benchmark(c: &mut Criterion) {
    let store = Store::new(Record::from([("counter", 0i64), ("step", 1)]));

    c.bench_function("store_merge_write", |b| {
        let mut i = 0;
        b.iter(|| {
            store.set(Record::from([("counter", black_box(i))]));
            i += 1;
        });
    });
}

fn store_replace_write_benchmark(c: &mut Criterion) {
    let store = Store::new(Record::from([("counter", 0i64)]));

    c.bench_function("store_replace_write", |b| {
        let mut i = 0;
        b.iter(|| {
            store.replace(Record::from([("counter", black_box(i))]));
            i += 1;
        });
    });
}

fn store_subscribe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_subscribe");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new(Record::from([("value", 0i64)]));

        for _ in 0..*subscriber_count {
            store.subscribe(|_, _| {
                // Empty subscriber
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.set(Record::from([("value", black_box(i))]));
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn derived_propagation_benchmark(c: &mut Criterion) {
    let store = Store::new(Record::from([("x", 1i64), ("y", 2), ("z", 3)]));

    let square = store.derive(|state: &Record<i64>| {
        let state = state.clone();
        move || state.iter().map(|(k, v)| (k, v * v)).collect::<Record<i64>>()
    });
    let sum = square.derive(|state: &Record<i64>| {
        let total = state.values().sum::<i64>();
        move || Record::from([("r", total)])
    });

    c.bench_function("derived_propagation", |b| {
        let mut i = 0;
        b.iter(|| {
            store.set(Record::from([("x", black_box(i))]));
            i += 1;
        });
    });

    black_box(sum);
}

criterion_group!(
    benches,
    store_creation_benchmark,
    store_read_benchmark,
    store_merge_write_benchmark,
    store_replace_write_benchmark,
    store_subscribe_benchmark,
    derived_propagation_benchmark,
);
criterion_main!(benches);
