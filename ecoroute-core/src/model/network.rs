//! In-memory network graph indexed for outgoing-leg lookup

use hashbrown::HashMap;

use super::types::{Hub, Leg};
use crate::Error;

/// Directed multigraph of hubs and legs.
///
/// Hubs live in an id-keyed index; legs live in an adjacency index from
/// source hub id to the ordered list of outgoing legs. Every leg stored
/// in the graph has both endpoints present in the hub index.
#[derive(Debug, Clone, Default)]
pub struct TransportNetwork {
    hubs: HashMap<String, Hub>,
    adjacency: HashMap<String, Vec<Leg>>,
}

impl TransportNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(hubs: usize, legs: usize) -> Self {
        Self {
            hubs: HashMap::with_capacity(hubs),
            // Legs cluster per source; the per-source vectors grow on demand
            adjacency: HashMap::with_capacity(legs.min(hubs)),
        }
    }

    /// Inserts a hub, overwriting any previous record with the same id.
    /// The adjacency entry is created if absent and kept otherwise, so
    /// re-adding a hub does not disturb its outgoing legs.
    pub fn add_hub(&mut self, hub: Hub) {
        self.adjacency.entry(hub.id.clone()).or_default();
        self.hubs.insert(hub.id.clone(), hub);
    }

    /// Appends a directed leg to its source's outgoing list.
    ///
    /// Legs referencing an unknown source or target hub are dropped
    /// without a signal. Bulk loads carry no ordering guarantee between
    /// hub and leg records, so rejection stays permissive by default;
    /// use [`try_add_leg`](Self::try_add_leg) to surface the failure.
    pub fn add_leg(&mut self, leg: Leg) {
        let _ = self.try_add_leg(leg);
    }

    /// Strict variant of [`add_leg`](Self::add_leg) for validation
    /// tooling: reports which endpoint was unknown instead of silently
    /// dropping the leg.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHub`] when either endpoint is not in the
    /// hub index.
    pub fn try_add_leg(&mut self, leg: Leg) -> Result<(), Error> {
        if !self.hubs.contains_key(&leg.source) {
            return Err(Error::UnknownHub(leg.source));
        }
        if !self.hubs.contains_key(&leg.target) {
            return Err(Error::UnknownHub(leg.target));
        }
        // add_hub guarantees the adjacency entry exists
        if let Some(outgoing) = self.adjacency.get_mut(&leg.source) {
            outgoing.push(leg);
        }
        Ok(())
    }

    /// All legs leaving the given hub, in insertion order. Unknown ids
    /// yield an empty slice.
    #[must_use]
    pub fn outgoing_legs(&self, hub_id: &str) -> &[Leg] {
        self.adjacency.get(hub_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn hub(&self, hub_id: &str) -> Option<&Hub> {
        self.hubs.get(hub_id)
    }

    #[must_use]
    pub fn contains_hub(&self, hub_id: &str) -> bool {
        self.hubs.contains_key(hub_id)
    }

    #[must_use]
    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn hubs(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.values()
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.adjacency.values().flatten()
    }
}
