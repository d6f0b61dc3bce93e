//! Error taxonomy for a pipeline run.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a run before any output is written.
///
/// None of these are fatal to the process: the binary logs them and exits
/// with a failing status.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("could not decode input file '{}': {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("no year data found in input file")]
    InputEmpty,

    #[error("error saving processed data to '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
