use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::NetworkSource;
use crate::model::{Hub, Leg};
use crate::Error;

/// Single-document JSON implementation of [`NetworkSource`].
///
/// The document holds the whole network: `{ "hubs": [...], "legs": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonNetworkSource {
    #[serde(default)]
    hubs: Vec<Hub>,
    #[serde(default)]
    legs: Vec<Leg>,
}

impl JsonNetworkSource {
    /// Parses a network document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid
    /// network JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parses a network document from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid network JSON.
    pub fn from_str(document: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(document)?)
    }
}

impl NetworkSource for JsonNetworkSource {
    fn load_hubs(&self) -> Result<Vec<Hub>, Error> {
        Ok(self.hubs.clone())
    }

    fn load_legs(&self) -> Result<Vec<Leg>, Error> {
        Ok(self.legs.clone())
    }
}
