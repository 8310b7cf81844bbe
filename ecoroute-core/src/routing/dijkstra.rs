//! Dijkstra search over the hub adjacency index

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::criterion::Criterion;
use super::result::RouteResult;
use crate::model::{Leg, TransportNetwork};

#[derive(Copy, Clone)]
struct State<'a> {
    weight: f64,
    hub: &'a str,
}

// Min-heap by weight (reversed from standard Rust BinaryHeap). Leg
// weights are finite non-negative floats, so total_cmp is a plain
// numeric order here; the hub id keeps Ord consistent with Eq when
// weights tie, though extraction order among ties is not a contract.
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.hub.cmp(self.hub))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

/// Least-total-weight route from `origin` to `destination` under the
/// given criterion.
///
/// Frontier entries are (tentative weight, hub id) pairs in a binary
/// heap; best-known weights and predecessor legs live in flat maps, with
/// an absent entry meaning "unvisited". The search stops at the first
/// extraction of the destination, which is optimal because all leg
/// weights are non-negative. Stale heap entries left behind by later
/// improvements are skipped on extraction.
///
/// Unknown ids, an unreachable destination, and `origin == destination`
/// all produce an empty path with zero totals rather than an error;
/// callers needing to tell an unknown hub from an unreachable one check
/// [`TransportNetwork::hub`] first.
#[must_use]
pub fn shortest_path(
    network: &TransportNetwork,
    origin: &str,
    destination: &str,
    criterion: Criterion,
) -> RouteResult {
    let mut best_weights: HashMap<&str, f64> = HashMap::new();
    // Target hub id -> the leg that achieved its best weight, plus the
    // hub that leg was relaxed from
    let mut predecessors: HashMap<&str, (&Leg, &str)> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    frontier.push(State {
        weight: 0.0,
        hub: origin,
    });
    best_weights.insert(origin, 0.0);

    while let Some(State { weight, hub }) = frontier.pop() {
        if hub == destination {
            break;
        }

        // Skip if a better path to this hub has been recorded since
        if best_weights.get(hub).is_some_and(|&best| weight > best) {
            continue;
        }

        for leg in network.outgoing_legs(hub) {
            let candidate = weight + criterion.weight(leg);
            let target = leg.target.as_str();

            match best_weights.entry(target) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(candidate);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if candidate >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = candidate;
                }
            }
            predecessors.insert(target, (leg, hub));
            frontier.push(State {
                weight: candidate,
                hub: target,
            });
        }
    }

    reconstruct_path(&predecessors, destination)
}

/// Walks the predecessor chain backward from the destination and sums
/// the totals. A destination without a recorded predecessor yields the
/// empty result.
fn reconstruct_path(predecessors: &HashMap<&str, (&Leg, &str)>, destination: &str) -> RouteResult {
    let mut path = Vec::new();
    let mut current = destination;

    while let Some(&(leg, previous)) = predecessors.get(current) {
        path.push(leg.clone());
        current = previous;
    }
    path.reverse();

    RouteResult::from_path(path)
}
