//! Query facade binding a network to the search

use std::sync::Arc;

use super::criterion::Criterion;
use super::dijkstra::shortest_path;
use super::result::RouteResult;
use crate::model::TransportNetwork;

/// Routing engine bound to one immutable network snapshot.
///
/// The engine is built once from loaded data and passed by reference to
/// the query layer. Updates never mutate the network in place: build a
/// fresh [`TransportNetwork`] and [`reload`](Self::reload) it. Because
/// `reload` takes `&mut self`, it cannot overlap with in-flight queries;
/// callers that hot-swap under concurrency keep the engine behind their
/// own synchronization and clone the [`Arc`] per query, leaving searches
/// against the old snapshot unaffected.
#[derive(Debug, Clone)]
pub struct RoutingEngine {
    network: Arc<TransportNetwork>,
}

impl RoutingEngine {
    #[must_use]
    pub fn new(network: Arc<TransportNetwork>) -> Self {
        Self { network }
    }

    /// Least-total-weight route under the chosen criterion. Unknown ids
    /// and unreachable destinations yield an empty result, never an
    /// error; see [`shortest_path`].
    #[must_use]
    pub fn find_best_route(
        &self,
        origin: &str,
        destination: &str,
        criterion: Criterion,
    ) -> RouteResult {
        shortest_path(&self.network, origin, destination, criterion)
    }

    /// The network snapshot this engine answers from.
    #[must_use]
    pub fn network(&self) -> &TransportNetwork {
        &self.network
    }

    /// Replaces the network snapshot wholesale.
    pub fn reload(&mut self, network: Arc<TransportNetwork>) {
        self.network = network;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hub, Leg};

    fn two_hub_network(cost: f64) -> TransportNetwork {
        let mut network = TransportNetwork::new();
        network.add_hub(Hub::new("A", "A", 0.0, 0.0));
        network.add_hub(Hub::new("B", "B", 0.0, 0.0));
        network.add_leg(Leg::new("A", "B", "TRUCK", cost, 1.0, 1.0));
        network
    }

    #[test]
    fn engine_answers_from_its_snapshot() {
        let engine = RoutingEngine::new(Arc::new(two_hub_network(10.0)));
        let route = engine.find_best_route("A", "B", Criterion::Cost);
        assert_eq!(route.total_cost, 10.0);
    }

    #[test]
    fn reload_swaps_the_snapshot() {
        let mut engine = RoutingEngine::new(Arc::new(two_hub_network(10.0)));
        let before = Arc::new(two_hub_network(99.0));

        engine.reload(Arc::clone(&before));
        let route = engine.find_best_route("A", "B", Criterion::Cost);
        assert_eq!(route.total_cost, 99.0);
        assert_eq!(engine.network().leg_count(), 1);
    }

    #[test]
    fn clones_share_the_snapshot_until_one_reloads() {
        let mut primary = RoutingEngine::new(Arc::new(two_hub_network(10.0)));
        let secondary = primary.clone();

        primary.reload(Arc::new(two_hub_network(50.0)));

        assert_eq!(
            primary.find_best_route("A", "B", Criterion::Cost).total_cost,
            50.0
        );
        // The clone keeps answering from the old snapshot
        assert_eq!(
            secondary
                .find_best_route("A", "B", Criterion::Cost)
                .total_cost,
            10.0
        );
    }
}
