//! Single-pass partitioning of the raw dataset.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::analyzers::types::{PlantProjection, PlantRecord, RawDataset};

/// Everything the aggregation stage needs, borrowed from the raw dataset.
#[derive(Debug, Default)]
pub struct GroupedPlants<'a> {
    /// Year → included records. Every input year is present, possibly empty.
    pub by_year: BTreeMap<String, Vec<&'a PlantRecord>>,
    /// Country → year → included records. Only years with plants appear.
    pub by_country_year: BTreeMap<String, BTreeMap<String, Vec<&'a PlantRecord>>>,
    /// Distinct fuel labels of included records, sorted.
    pub fuel_types: BTreeSet<String>,
    /// Map projection of the included records of the latest year, in input order.
    pub plants_latest: Vec<PlantProjection>,
}

impl GroupedPlants<'_> {
    /// Plants for `country` in `year`; empty if the country had none that year.
    pub fn country_plants(&self, country: &str, year: &str) -> &[&PlantRecord] {
        self.by_country_year
            .get(country)
            .and_then(|years| years.get(year))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Groups `raw` by year and by (country, year), collecting fuel types and the
/// latest-year projection on the way.
///
/// Records without a country or fuel label are dropped silently.
pub fn group_plants<'a>(raw: &'a RawDataset, latest_year: &str) -> GroupedPlants<'a> {
    let mut grouped = GroupedPlants {
        by_year: raw.keys().map(|year| (year.clone(), Vec::new())).collect(),
        ..Default::default()
    };
    let mut dropped = 0usize;

    for (year, plants) in raw {
        for plant in plants {
            let Some((country, fuel)) = plant.labels() else {
                dropped += 1;
                continue;
            };

            if !grouped.fuel_types.contains(fuel) {
                grouped.fuel_types.insert(fuel.to_string());
            }

            if let Some(year_plants) = grouped.by_year.get_mut(year) {
                year_plants.push(plant);
            }

            grouped
                .by_country_year
                .entry(country.to_string())
                .or_default()
                .entry(year.clone())
                .or_default()
                .push(plant);

            if year == latest_year {
                grouped.plants_latest.push(PlantProjection {
                    country: country.to_string(),
                    lat: plant.latitude,
                    lon: plant.longitude,
                    fuel: fuel.to_string(),
                    cap: plant.capacity_mw,
                });
            }
        }
    }

    debug!(
        countries = grouped.by_country_year.len(),
        fuel_types = grouped.fuel_types.len(),
        plants_latest = grouped.plants_latest.len(),
        dropped,
        "Plants grouped"
    );

    grouped
}
