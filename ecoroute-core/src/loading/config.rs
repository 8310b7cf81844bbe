use std::path::PathBuf;

use crate::model::TransportNetwork;
use crate::Error;

use super::csv::CsvNetworkSource;

/// File locations for a CSV-backed network load.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    pub hubs_path: PathBuf,
    pub legs_path: PathBuf,
}

impl NetworkConfig {
    fn validate(&self) -> Result<(), Error> {
        if !self.hubs_path.exists() {
            return Err(Error::InvalidData(format!(
                "Hub file not found: {}",
                self.hubs_path.display()
            )));
        }
        if !self.legs_path.exists() {
            return Err(Error::InvalidData(format!(
                "Leg file not found: {}",
                self.legs_path.display()
            )));
        }
        Ok(())
    }
}

/// Creates a transport network based on the provided configuration.
///
/// # Errors
///
/// Returns an error if either file is missing or unreadable.
pub fn load_network(config: &NetworkConfig) -> Result<TransportNetwork, Error> {
    config.validate()?;

    let source = CsvNetworkSource::new(&config.hubs_path, &config.legs_path);
    super::build_network(&source)
}
