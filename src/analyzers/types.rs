//! Data types used by the aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzers::utility::{whole_nested_map, whole_opt};
use crate::stats::CountryYearStats;

/// A single plant row as it appears in the raw input.
///
/// Every field is optional: incomplete records are filtered during grouping,
/// never rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub country: Option<String>,
    pub primary_fuel: Option<String>,
    pub capacity_mw: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlantRecord {
    /// Returns `(country, fuel)` when both labels are present and non-empty.
    pub fn labels(&self) -> Option<(&str, &str)> {
        let country = self.country.as_deref().filter(|c| !c.is_empty())?;
        let fuel = self.primary_fuel.as_deref().filter(|f| !f.is_empty())?;
        Some((country, fuel))
    }
}

/// Year label → plant records for that year, in input order.
pub type RawDataset = BTreeMap<String, Vec<PlantRecord>>;

/// Minimal per-plant projection used by the distribution map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantProjection {
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub fuel: String,
    #[serde(serialize_with = "whole_opt")]
    pub cap: Option<f64>,
}

/// Fuel label (or `total_capacity`) → capacity for one year.
pub type GlobalYearSummary = BTreeMap<String, f64>;

/// Fuel label (or `_total`) → signed capacity change for one country.
pub type GrowthDelta = BTreeMap<String, f64>;

/// The complete document consumed by the visualization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedData {
    pub plants_latest: Vec<PlantProjection>,
    pub country_summary: BTreeMap<String, BTreeMap<String, CountryYearStats>>,
    #[serde(serialize_with = "whole_nested_map")]
    pub global_summary: BTreeMap<String, GlobalYearSummary>,
    #[serde(serialize_with = "whole_nested_map")]
    pub country_growth_delta: BTreeMap<String, GrowthDelta>,
    pub fuel_types: Vec<String>,
    pub years: Vec<String>,
}
