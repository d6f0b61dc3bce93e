use crate::analyzers::aggregate::summarize;
use crate::analyzers::types::ProcessedData;
use crate::error::PipelineError;
use crate::output::write_document;
use crate::parser::load_dataset;
use std::path::Path;
use tracing::info;

/// Loads the dataset at `input`, summarizes it and writes the document to `output`.
///
/// Nothing is written when loading or summarizing fails. Returns the
/// document that was saved.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn analyze(input: &Path, output: &Path) -> Result<ProcessedData, PipelineError> {
    let raw = load_dataset(input)?;
    let doc = summarize(&raw)?;

    info!(
        years = doc.years.len(),
        countries = doc.country_summary.len(),
        fuel_types = doc.fuel_types.len(),
        plants_latest = doc.plants_latest.len(),
        "Summary ready"
    );

    write_document(output, &doc)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw_data.json");
        let output = dir.path().join("out").join("processed_data.json");
        fs::write(&input, "{}").unwrap();

        let result = analyze(&input, &output);

        assert!(matches!(result, Err(PipelineError::InputEmpty)));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("processed_data.json");

        let result = analyze(&dir.path().join("raw_data.json"), &output);

        assert!(matches!(result, Err(PipelineError::InputNotFound { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_analyze_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw_data.json");
        let output = dir.path().join("processed_data.json");
        fs::write(
            &input,
            r#"{"2020": [{"country": "X", "primary_fuel": "Nuclear", "capacity_mw": 10}]}"#,
        )
        .unwrap();

        let doc = analyze(&input, &output).unwrap();

        let written: ProcessedData =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, doc);
        assert_eq!(written.country_summary["X"]["2020"].green_perc, 100.0);
        assert_eq!(written.country_summary["X"]["2020"].renewable_perc, 0.0);
    }
}
