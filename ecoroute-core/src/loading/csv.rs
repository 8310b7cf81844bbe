use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use super::NetworkSource;
use crate::model::{Hub, Leg};
use crate::Error;

/// CSV-file implementation of [`NetworkSource`].
///
/// Expects two headed files: hubs as `id,name,latitude,longitude` and
/// legs as `source,target,mode,cost,time,co2`. Rows that fail to
/// deserialize are skipped, matching the permissive bulk-load policy.
#[derive(Debug, Clone)]
pub struct CsvNetworkSource {
    hubs_path: PathBuf,
    legs_path: PathBuf,
}

impl CsvNetworkSource {
    pub fn new(hubs_path: impl Into<PathBuf>, legs_path: impl Into<PathBuf>) -> Self {
        Self {
            hubs_path: hubs_path.into(),
            legs_path: legs_path.into(),
        }
    }
}

impl NetworkSource for CsvNetworkSource {
    fn load_hubs(&self) -> Result<Vec<Hub>, Error> {
        read_records(&self.hubs_path)
    }

    fn load_legs(&self) -> Result<Vec<Leg>, Error> {
        read_records(&self.legs_path)
    }
}

fn read_records<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path)?;
    let mut skipped = 0usize;
    let records: Vec<T> = reader
        .deserialize()
        .filter_map(|row| match row {
            Ok(record) => Some(record),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        debug!(
            "Skipped {skipped} malformed rows in {}",
            path.display()
        );
    }
    Ok(records)
}
