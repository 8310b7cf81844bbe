//! Network components - hubs and the transport legs connecting them

use serde::{Deserialize, Serialize};

/// A node of the logistics network (a city or facility)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    /// Stable identifier, unique across the network
    pub id: String,
    /// Display name
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Hub {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// A directed connection between two hubs via one transport mode.
///
/// The mode is an open string tag ("TRUCK", "SHIP", "AIR", ...), not a
/// closed set. All three weight dimensions are non-negative by data
/// contract. The network is a multigraph: any number of legs may share
/// endpoints, and even endpoints plus mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Id of the hub the leg departs from
    pub source: String,
    /// Id of the hub the leg arrives at
    pub target: String,
    /// Transport mode tag
    pub mode: String,
    /// Monetary cost in currency units
    pub cost: f64,
    /// Transit time in hours
    pub time: f64,
    /// Emissions in mass units
    pub co2: f64,
}

impl Leg {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        mode: impl Into<String>,
        cost: f64,
        time: f64,
        co2: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            mode: mode.into(),
            cost,
            time,
            co2,
        }
    }
}
