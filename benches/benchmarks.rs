use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use canister::Store;

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| {
            let store: Store<i32> = Store::new(black_box(42));
            store
        });
    });
}

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

fn store_noop_write_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(7);

    c.bench_function("store_noop_write", |b| {
        b.iter(|| {
            store.set(black_box(7));
        });
    });
}

fn subscribe_unsubscribe_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(0);

    c.bench_function("subscribe_unsubscribe", |b| {
        b.iter(|| {
            let sub = store.subscribe(|n: &i32| {
                black_box(n);
            });
            sub.unsubscribe();
        });
    });
}

fn broadcast_fan_out_benchmark(c: &mut Criterion) {
    #[derive(Clone, PartialEq)]
    struct State {
        counter: usize,
        label: String,
    }

    let mut group = c.benchmark_group("broadcast_fan_out");
    for subscribers in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, &subscribers| {
                let store = Store::new(State {
                    counter: 0,
                    label: "bench".to_string(),
                });
                for _ in 0..subscribers {
                    let _sub = store.subscribe_with(
                        |counter: &usize| {
                            black_box(counter);
                        },
                        |state: &State| state.counter,
                    );
                }

                let mut i = 0;
                b.iter(|| {
                    i += 1;
                    store.update(move |state: &State| State {
                        counter: i,
                        label: state.label.clone(),
                    });
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_creation_benchmark,
    store_read_benchmark,
    store_write_benchmark,
    store_noop_write_benchmark,
    subscribe_unsubscribe_benchmark,
    broadcast_fan_out_benchmark
);
criterion_main!(benches);
