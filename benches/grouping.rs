// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for city grouping.
//!
//! Grouping runs on every map state rebuild, so it should stay cheap
//! even for location lists far larger than the shipped catalog.

use atm_atlas::catalog;
use atm_atlas::domain::location::{AtmLocation, AtmStatus, Coordinates, Placement};
use atm_atlas::domain::build_groups;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Synthetic location list cycling through a fixed set of cities.
fn synthetic_locations(count: usize) -> Vec<AtmLocation> {
    const CITIES: [&str; 9] = [
        "Vancouver",
        "Toronto",
        "Montreal",
        "Calgary",
        "Edmonton",
        "Ottawa",
        "Winnipeg",
        "Halifax",
        "Victoria",
    ];
    const STATUSES: [AtmStatus; 3] = [
        AtmStatus::Online,
        AtmStatus::Maintenance,
        AtmStatus::Offline,
    ];

    (0..count)
        .map(|i| AtmLocation {
            id: "bench",
            name: "Bench ATM",
            address: "1 Bench St",
            city: CITIES[i % CITIES.len()],
            coordinates: Coordinates::new(43.0 + (i % 100) as f64 * 0.1, -123.0 + i as f64 * 0.01),
            status: STATUSES[i % STATUSES.len()],
            placement: Placement::Indoor,
        })
        .collect()
}

fn bench_build_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    group.bench_function("catalog", |b| {
        b.iter(|| black_box(build_groups(black_box(catalog::atm_locations()))));
    });

    for count in [100, 1_000, 10_000] {
        let locations = synthetic_locations(count);
        group.bench_function(format!("synthetic_{count}"), |b| {
            b.iter(|| black_box(build_groups(black_box(&locations))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_groups);
criterion_main!(benches);
