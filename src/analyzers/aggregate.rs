use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::grouper::{GroupedPlants, group_plants};
use crate::analyzers::growth::country_growth;
use crate::analyzers::types::{GlobalYearSummary, ProcessedData, RawDataset};
use crate::error::PipelineError;
use crate::stats::CountryYearStats;

/// Key holding the total capacity in a [`GlobalYearSummary`].
pub const TOTAL_CAPACITY_KEY: &str = "total_capacity";

/// Builds the full summary document from the raw dataset.
///
/// Groups the plants, computes global and per-country stats for every year,
/// then the start-to-latest growth per country. Fails only when the dataset
/// has no years at all.
pub fn summarize(raw: &RawDataset) -> Result<ProcessedData, PipelineError> {
    let years: Vec<String> = raw.keys().cloned().collect();
    let (Some(start_year), Some(latest_year)) = (years.first(), years.last()) else {
        return Err(PipelineError::InputEmpty);
    };

    let grouped = group_plants(raw, latest_year);

    let global_summary = global_summary(&grouped, &years);
    let country_summary = country_summary(&grouped, &years);

    let country_growth_delta = country_summary
        .iter()
        .map(|(country, by_year)| {
            (
                country.clone(),
                country_growth(by_year, start_year, latest_year),
            )
        })
        .collect();

    debug!(
        years = years.len(),
        start_year = %start_year,
        latest_year = %latest_year,
        countries = country_summary.len(),
        "Summary computed"
    );

    let GroupedPlants {
        fuel_types,
        plants_latest,
        ..
    } = grouped;

    Ok(ProcessedData {
        plants_latest,
        country_summary,
        global_summary,
        country_growth_delta,
        fuel_types: fuel_types.into_iter().collect(),
        years,
    })
}

/// Year → `{ total_capacity, <fuel>: capacity, ... }` over all included plants.
fn global_summary(
    grouped: &GroupedPlants<'_>,
    years: &[String],
) -> BTreeMap<String, GlobalYearSummary> {
    years
        .iter()
        .map(|year| {
            let plants = grouped.by_year.get(year).map(Vec::as_slice).unwrap_or(&[]);
            let stats = CountryYearStats::from_plants(plants.iter().copied());

            let mut row = GlobalYearSummary::new();
            row.insert(TOTAL_CAPACITY_KEY.to_string(), stats.total_capacity);
            row.extend(stats.fuels);

            (year.clone(), row)
        })
        .collect()
}

/// Country → year → stats, for every observed country and every year.
///
/// Years in which a country had no plants get zero-filled stats.
fn country_summary(
    grouped: &GroupedPlants<'_>,
    years: &[String],
) -> BTreeMap<String, BTreeMap<String, CountryYearStats>> {
    grouped
        .by_country_year
        .keys()
        .map(|country| {
            let by_year = years
                .iter()
                .map(|year| {
                    let plants = grouped.country_plants(country, year);
                    (
                        year.clone(),
                        CountryYearStats::from_plants(plants.iter().copied()),
                    )
                })
                .collect();

            (country.clone(), by_year)
        })
        .collect()
}
