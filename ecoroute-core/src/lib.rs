//! Core routing engine for a multimodal logistics network.
//!
//! The crate holds an in-memory directed multigraph of hubs and transport
//! legs and answers least-weight route queries over it, where the weight
//! dimension (monetary cost, transit time, CO2 emissions) is chosen per
//! query. Data enters through the [`loading`] boundary (bulk load from CSV
//! or JSON, or any [`NetworkSource`] implementation) and results leave as
//! serializable [`RouteResult`] values; persistence and transport layers
//! live outside this crate.

pub mod error;
pub mod loading;
pub mod model;
pub mod routing;

pub use error::Error;

// Re-export of the main model types
pub use model::{Hub, Leg, TransportNetwork};

// Re-export of the routing interface
pub use routing::{Criterion, RouteResult, RoutingEngine, shortest_path};

// Re-export of the data-access boundary
pub use loading::{
    CsvNetworkSource, JsonNetworkSource, NetworkConfig, NetworkSource, build_network,
    load_network,
};
