//! Data model for the logistics network
//!
//! Contains the hub and leg records and the indexed network graph
//! the routing engine searches over.

pub mod network;
pub mod types;

pub use network::TransportNetwork;
pub use types::{Hub, Leg};
