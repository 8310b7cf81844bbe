use criterion::{Criterion, criterion_group, criterion_main};

use ecoroute_core::routing::criterion::Criterion as RouteCriterion;
use ecoroute_core::{Hub, Leg, TransportNetwork, shortest_path};

/// Grid network of `side * side` hubs with rightward and downward legs,
/// one of two modes per direction.
fn grid_network(side: usize) -> TransportNetwork {
    let id = |row: usize, col: usize| format!("H{row}-{col}");

    let mut network = TransportNetwork::with_capacity(side * side, 2 * side * side);
    for row in 0..side {
        for col in 0..side {
            network.add_hub(Hub::new(id(row, col), id(row, col), row as f64, col as f64));
        }
    }
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                network.add_leg(Leg::new(
                    id(row, col),
                    id(row, col + 1),
                    "TRUCK",
                    100.0 + ((row * 7 + col) % 13) as f64,
                    10.0 + ((row + col) % 5) as f64,
                    50.0,
                ));
            }
            if row + 1 < side {
                network.add_leg(Leg::new(
                    id(row, col),
                    id(row + 1, col),
                    "RAIL",
                    80.0 + ((row * 3 + col) % 11) as f64,
                    14.0 + ((row * col) % 7) as f64,
                    20.0,
                ));
            }
        }
    }
    network
}

fn bench_routing(c: &mut Criterion) {
    let network = grid_network(50);
    let destination = "H49-49";

    c.bench_function("grid_50x50_cost", |b| {
        b.iter(|| shortest_path(&network, "H0-0", destination, RouteCriterion::Cost));
    });

    c.bench_function("grid_50x50_time", |b| {
        b.iter(|| shortest_path(&network, "H0-0", destination, RouteCriterion::Time));
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
