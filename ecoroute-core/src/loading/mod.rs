//! This module is the data-access boundary of the crate: it pulls the
//! complete hub and leg sets from a [`NetworkSource`] (CSV files, a JSON
//! document, or anything injected for testing) and builds the indexed
//! [`TransportNetwork`] the routing engine searches over.

mod config;
mod csv;
mod json;

pub use config::{NetworkConfig, load_network};
pub use csv::CsvNetworkSource;
pub use json::JsonNetworkSource;

use itertools::Itertools;
use log::{info, warn};

use crate::model::{Hub, Leg, TransportNetwork};
use crate::Error;

/// Bulk supplier of the complete network data set.
///
/// Implementations typically read persistent storage once at process
/// start; tests hand the records over directly.
pub trait NetworkSource {
    /// All hubs of the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_hubs(&self) -> Result<Vec<Hub>, Error>;

    /// All legs of the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_legs(&self) -> Result<Vec<Leg>, Error>;
}

/// Builds the indexed network from a bulk source.
///
/// Hubs are inserted first, then legs. Load order between the two record
/// kinds is the only ordering the source must respect; legs referencing
/// unknown hubs are dropped and counted, not surfaced as errors.
///
/// # Errors
///
/// Returns an error only when the source itself fails.
pub fn build_network(source: &impl NetworkSource) -> Result<TransportNetwork, Error> {
    let hubs = source.load_hubs()?;
    let legs = source.load_legs()?;

    let mode_count = legs.iter().map(|leg| leg.mode.as_str()).unique().count();
    info!(
        "Loaded {} hubs and {} legs across {} transport modes",
        hubs.len(),
        legs.len(),
        mode_count
    );

    let mut network = TransportNetwork::with_capacity(hubs.len(), legs.len());
    for hub in hubs {
        network.add_hub(hub);
    }

    let mut dropped = 0usize;
    for leg in legs {
        if network.try_add_leg(leg).is_err() {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!("Dropped {dropped} legs referencing hubs missing from the hub set");
    }

    Ok(network)
}
