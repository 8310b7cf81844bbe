//! Route query output

use serde::Serialize;

use crate::model::Leg;

/// The outcome of one route query.
///
/// `path` is the ordered leg sequence from origin to destination; it is
/// empty when origin equals destination, when either id is unknown, or
/// when the destination is unreachable. The three totals are summed over
/// the whole path independently of the criterion that drove the search,
/// so a cost-optimal route still reports its actual time and emissions.
///
/// Field names serialize in camelCase so an HTTP layer can emit the
/// value as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub path: Vec<Leg>,
    pub total_cost: f64,
    pub total_time: f64,
    pub total_co2: f64,
}

impl RouteResult {
    /// Empty path with zero totals; stands for "no route" outcomes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result from an ordered leg sequence, summing the totals.
    #[must_use]
    pub fn from_path(path: Vec<Leg>) -> Self {
        let mut result = Self {
            path,
            ..Self::default()
        };
        for leg in &result.path {
            result.total_cost += leg.cost;
            result.total_time += leg.time;
            result.total_co2 += leg.co2;
        }
        result
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
