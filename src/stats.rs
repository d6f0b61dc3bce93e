use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzers::fuel::{UNKNOWN_FUEL, is_green, is_renewable};
use crate::analyzers::types::PlantRecord;
use crate::analyzers::utility::{perc, round_to, whole, whole_map};

/// Capacity statistics for a set of plants, typically one country in one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryYearStats {
    #[serde(serialize_with = "whole")]
    pub total_capacity: f64,
    #[serde(serialize_with = "whole_map")]
    pub fuels: BTreeMap<String, f64>,
    #[serde(serialize_with = "whole")]
    pub green_capacity: f64,
    #[serde(serialize_with = "whole")]
    pub renewable_capacity: f64,
    #[serde(serialize_with = "perc")]
    pub green_perc: f64,
    #[serde(serialize_with = "perc")]
    pub renewable_perc: f64,
}

impl CountryYearStats {
    /// Aggregates capacity over `plants`.
    ///
    /// Missing capacity counts as 0 and a missing fuel is grouped under
    /// [`UNKNOWN_FUEL`]. An empty input yields all-zero stats.
    pub fn from_plants<'a, I>(plants: I) -> Self
    where
        I: IntoIterator<Item = &'a PlantRecord>,
    {
        let mut s = CountryYearStats::default();

        for plant in plants {
            let capacity = plant.capacity_mw.unwrap_or(0.0);
            let fuel = plant.primary_fuel.as_deref().unwrap_or(UNKNOWN_FUEL);

            s.total_capacity += capacity;
            *s.fuels.entry(fuel.to_string()).or_insert(0.0) += capacity;

            if is_green(fuel) {
                s.green_capacity += capacity;
            }

            if is_renewable(fuel) {
                s.renewable_capacity += capacity;
            }
        }

        s.green_perc = round_to(Self::pct(s.green_capacity, s.total_capacity), 1);
        s.renewable_perc = round_to(Self::pct(s.renewable_capacity, s.total_capacity), 1);

        s
    }

    /// `part` as a percentage of `total`; 0 when `total` is not positive.
    pub fn pct(part: f64, total: f64) -> f64 {
        if total > 0.0 {
            (part / total) * 100.0
        } else {
            0.0
        }
    }
}

/// Free-function form of [`CountryYearStats::from_plants`].
pub fn calculate_country_stats(plants: &[PlantRecord]) -> CountryYearStats {
    CountryYearStats::from_plants(plants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(CountryYearStats::pct(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(CountryYearStats::pct(50.0, 100.0), 50.0);
        assert_eq!(CountryYearStats::pct(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_empty_plants_are_all_zero() {
        let stats = calculate_country_stats(&[]);

        assert_eq!(stats.total_capacity, 0.0);
        assert!(stats.fuels.is_empty());
        assert_eq!(stats.green_capacity, 0.0);
        assert_eq!(stats.renewable_capacity, 0.0);
        assert_eq!(stats.green_perc, 0.0);
        assert_eq!(stats.renewable_perc, 0.0);
    }

    #[test]
    fn test_single_green_fuel_is_fully_green() {
        let plants = vec![plant("Wind", Some(40.0)), plant("Wind", Some(60.0))];
        let stats = calculate_country_stats(&plants);

        assert_eq!(stats.green_perc, 100.0);
        assert_eq!(stats.renewable_perc, 100.0);
        assert_eq!(stats.fuels.get("Wind"), Some(&100.0));
    }

    #[test]
    fn test_nuclear_counts_green_only() {
        let plants = vec![
            plant("Nuclear", Some(100.0)),
            plant("Solar", Some(50.0)),
            plant("Coal", Some(50.0)),
        ];
        let stats = calculate_country_stats(&plants);

        assert_eq!(stats.total_capacity, 200.0);
        assert_eq!(stats.green_capacity, 150.0);
        assert_eq!(stats.renewable_capacity, 50.0);
        assert_eq!(stats.green_perc, 75.0);
        assert_eq!(stats.renewable_perc, 25.0);
    }

    #[test]
    fn test_percentages_round_to_one_decimal() {
        let plants = vec![
            plant("Solar", Some(1.0)),
            plant("Coal", Some(1.0)),
            plant("Gas", Some(1.0)),
        ];
        let stats = calculate_country_stats(&plants);

        assert_eq!(stats.green_perc, 33.3);
    }

    #[test]
    fn test_exact_half_percentages_round_to_even() {
        let cases = [(49.0, 351.0, 12.2), (1.0, 79.0, 1.2), (9.0, 71.0, 11.2)];
        for (solar, coal, expected) in cases {
            let plants = vec![plant("Solar", Some(solar)), plant("Coal", Some(coal))];
            let stats = calculate_country_stats(&plants);

            assert_eq!(stats.green_perc, expected, "Solar {solar} + Coal {coal}");
            assert_eq!(stats.renewable_perc, expected, "Solar {solar} + Coal {coal}");
        }
    }

    #[test]
    fn test_json_keeps_whole_capacities_as_integers() {
        let plants = vec![plant("Solar", Some(100.0)), plant("Coal", Some(50.5))];
        let json = serde_json::to_string(&calculate_country_stats(&plants)).unwrap();

        assert!(json.contains(r#""total_capacity":150.5"#));
        assert!(json.contains(r#""Solar":100"#));
        assert!(json.contains(r#""green_capacity":100,"#));
        assert!(json.contains(r#""green_perc":66.4"#));

        let empty = serde_json::to_string(&calculate_country_stats(&[])).unwrap();
        assert_eq!(
            empty,
            r#"{"total_capacity":0,"fuels":{},"green_capacity":0,"renewable_capacity":0,"green_perc":0,"renewable_perc":0}"#
        );
    }

    #[test]
    fn test_missing_capacity_and_fuel() {
        let plants = vec![
            plant("Hydro", None),
            PlantRecord {
                capacity_mw: Some(20.0),
                ..Default::default()
            },
        ];
        let stats = calculate_country_stats(&plants);

        assert_eq!(stats.total_capacity, 20.0);
        assert_eq!(stats.fuels.get("Hydro"), Some(&0.0));
        assert_eq!(stats.fuels.get(UNKNOWN_FUEL), Some(&20.0));
        assert_eq!(stats.green_perc, 0.0);
    }

    #[test]
    fn test_fuel_breakdown_sums_to_total() {
        let plants = vec![
            plant("Solar", Some(12.3)),
            plant("Gas", Some(400.1)),
            plant("Solar", Some(0.7)),
            plant("Oil", Some(88.8)),
        ];
        let stats = calculate_country_stats(&plants);

        let fuel_sum: f64 = stats.fuels.values().sum();
        assert!((fuel_sum - stats.total_capacity).abs() < 1e-9);
    }

    // Helper functions for tests
    fn plant(fuel: &str, capacity: Option<f64>) -> PlantRecord {
        PlantRecord {
            country: Some("X".to_string()),
            primary_fuel: Some(fuel.to_string()),
            capacity_mw: capacity,
            ..Default::default()
        }
    }
}
