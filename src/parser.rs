//! Loader for the raw plant dataset.
//!
//! The canonical input is a JSON object mapping year labels to plant arrays.
//! A flat CSV export with a `year` column is accepted as well.

use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::{PlantRecord, RawDataset};
use crate::error::PipelineError;

/// One row of the tabular input form.
#[derive(Debug, Deserialize)]
struct CsvPlantRow {
    year: String,
    country: Option<String>,
    primary_fuel: Option<String>,
    capacity_mw: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl From<CsvPlantRow> for PlantRecord {
    fn from(row: CsvPlantRow) -> Self {
        PlantRecord {
            country: row.country,
            primary_fuel: row.primary_fuel,
            capacity_mw: row.capacity_mw,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Decodes the JSON input document.
///
/// # Errors
///
/// Returns an error if `content` is not a JSON object of arrays of plant records.
pub fn parse_json(content: &str) -> serde_json::Result<RawDataset> {
    serde_json::from_str(content)
}

/// Reads the CSV input form, grouping rows under their `year` label in file order.
///
/// # Errors
///
/// Returns an error on a missing `year` column or a non-numeric capacity or coordinate.
pub fn parse_csv<R: Read>(reader: R) -> csv::Result<RawDataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut dataset = RawDataset::new();

    for result in rdr.deserialize() {
        let row: CsvPlantRow = result?;
        dataset
            .entry(row.year.clone())
            .or_default()
            .push(row.into());
    }

    Ok(dataset)
}

/// Loads the dataset at `path`, choosing the format from the file extension.
///
/// No filtering happens here; incomplete records are passed through as-is.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_dataset(path: &Path) -> Result<RawDataset, PipelineError> {
    let malformed = |source: Box<dyn std::error::Error + Send + Sync>| {
        PipelineError::InputMalformed {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => malformed(e.into()),
    })?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let dataset = if is_csv {
        debug!("Reading CSV input");
        parse_csv(file).map_err(|e| malformed(e.into()))?
    } else {
        debug!("Reading JSON input");
        let content = io::read_to_string(file).map_err(|e| malformed(e.into()))?;
        parse_json(&content).map_err(|e| malformed(e.into()))?
    };

    info!(
        years = dataset.len(),
        plants = dataset.values().map(Vec::len).sum::<usize>(),
        "Input loaded"
    );

    Ok(dataset)
}
