//! Least-weight route search over the transport network

pub mod criterion;
pub mod dijkstra;
pub mod engine;
pub mod result;

pub use criterion::Criterion;
pub use dijkstra::shortest_path;
pub use engine::RoutingEngine;
pub use result::RouteResult;
