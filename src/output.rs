//! Output formatting and persistence for the summary document.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::ProcessedData;
use crate::error::PipelineError;

/// Serializes the document as 2-space indented JSON.
pub fn to_json(doc: &ProcessedData) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(doc)
}

/// Writes the document to `path` as pretty JSON.
///
/// Missing parent directories are created. The document is serialized in
/// memory first, so a serialization failure never leaves a partial file.
pub fn write_document(path: &Path, doc: &ProcessedData) -> Result<(), PipelineError> {
    let write_failed = |source: io::Error| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            debug!(dir = %dir.display(), "Creating output directory");
            fs::create_dir_all(dir).map_err(write_failed)?;
        }
    }

    let body = to_json(doc).map_err(|e| write_failed(e.into()))?;
    fs::write(path, body).map_err(write_failed)?;

    info!(path = %path.display(), "Processed data saved");
    Ok(())
}
