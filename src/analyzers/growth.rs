//! Start-to-latest capacity deltas per country.

use std::collections::{BTreeMap, BTreeSet};

use crate::analyzers::types::GrowthDelta;
use crate::stats::CountryYearStats;

/// Key holding the total-capacity delta in a [`GrowthDelta`].
pub const TOTAL_KEY: &str = "_total";

/// Capacity change from `start` to `end`, or 0 if either side is missing.
pub fn get_growth(start: Option<f64>, end: Option<f64>) -> f64 {
    match (start, end) {
        (Some(start), Some(end)) => end - start,
        _ => 0.0,
    }
}

/// Computes the growth delta for one country from its per-year stats.
///
/// Fuels are the union of those present in either endpoint year; a fuel
/// missing at one end counts as 0 capacity there.
pub fn country_growth(
    stats_by_year: &BTreeMap<String, CountryYearStats>,
    start_year: &str,
    latest_year: &str,
) -> GrowthDelta {
    let start = stats_by_year.get(start_year);
    let latest = stats_by_year.get(latest_year);

    let total_start = start.map_or(0.0, |s| s.total_capacity);
    let total_latest = latest.map_or(0.0, |s| s.total_capacity);

    let mut delta = GrowthDelta::new();
    delta.insert(
        TOTAL_KEY.to_string(),
        get_growth(Some(total_start), Some(total_latest)),
    );

    let fuels: BTreeSet<&String> = start
        .into_iter()
        .chain(latest)
        .flat_map(|s| s.fuels.keys())
        .collect();

    for fuel in fuels {
        let cap_start = fuel_capacity(start, fuel);
        let cap_latest = fuel_capacity(latest, fuel);
        delta.insert(fuel.clone(), get_growth(Some(cap_start), Some(cap_latest)));
    }

    delta
}

fn fuel_capacity(stats: Option<&CountryYearStats>, fuel: &str) -> f64 {
    stats
        .and_then(|s| s.fuels.get(fuel))
        .copied()
        .unwrap_or(0.0)
}
