//! Per-query choice of which leg weight the search minimizes

use serde::{Deserialize, Serialize};

use crate::model::Leg;

/// The weight dimension a route query optimizes for.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Criterion {
    #[default]
    Cost,
    Time,
    Co2,
}

impl Criterion {
    /// Parses a criterion tag, case-insensitively.
    ///
    /// Unrecognized tags fall back to [`Criterion::Cost`]. That is a
    /// deliberate policy at the query boundary, not an error: callers
    /// pass free-form strings and always get a route back.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "TIME" => Self::Time,
            "CO2" => Self::Co2,
            _ => Self::Cost,
        }
    }

    /// The leg weight under this criterion.
    #[must_use]
    pub fn weight(self, leg: &Leg) -> f64 {
        match self {
            Self::Cost => leg.cost,
            Self::Time => leg.time,
            Self::Co2 => leg.co2,
        }
    }
}

impl From<&str> for Criterion {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}
