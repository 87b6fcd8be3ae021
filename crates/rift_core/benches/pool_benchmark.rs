//! # Pool Hot-Path Benchmark
//!
//! The spawn/return cycle runs every frame under continuous churn; it must
//! never allocate and must stay flat regardless of how long the session has
//! been running.
//!
//! Run with: `cargo bench --package rift_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rift_core::{Pool, PoolId, Poolable};

/// A particle-sized payload, representative of pooled gameplay entities.
struct Pickup {
    position: [f32; 3],
    value: i32,
}

#[derive(Clone, PartialEq)]
struct PickupProto;

impl Poolable for Pickup {
    type Prototype = PickupProto;
    type SpawnArgs = ([f32; 3], i32);

    fn instantiate(_prototype: &PickupProto) -> Self {
        Self {
            position: [0.0; 3],
            value: 0,
        }
    }

    fn on_spawn(&mut self, (position, value): ([f32; 3], i32)) {
        self.position = position;
        self.value = value;
    }

    fn on_return(&mut self) {
        self.position = [0.0; 3];
        self.value = 0;
    }
}

/// Benchmark: full spawn-until-exhausted / return-all cycle.
fn bench_spawn_return_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn_return_cycle");

    for capacity in [8usize, 64, 512] {
        let mut pool =
            Pool::<Pickup>::new(PoolId::new(0), "bench", capacity, PickupProto).unwrap();
        let mut tickets = Vec::with_capacity(capacity);

        group.bench_function(format!("capacity_{capacity}"), |b| {
            b.iter(|| {
                while let Some(ticket) = pool.spawn(black_box(([1.0, 2.0, 3.0], 30))) {
                    tickets.push(ticket);
                }
                for ticket in tickets.drain(..) {
                    let _ = pool.reclaim(ticket);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark: the exhaustion poll spawners run every tick.
fn bench_exhaustion_poll(c: &mut Criterion) {
    let mut pool = Pool::<Pickup>::new(PoolId::new(0), "bench", 512, PickupProto).unwrap();
    while pool.spawn(([0.0; 3], 0)).is_some() {}

    c.bench_function("is_exhausted", |b| {
        b.iter(|| black_box(pool.is_exhausted()));
    });
}

criterion_group!(benches, bench_spawn_return_cycle, bench_exhaustion_poll);
criterion_main!(benches);
