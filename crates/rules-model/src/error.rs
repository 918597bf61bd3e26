use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the rules pipeline.
///
/// All variants are unrecoverable at the point they occur; there is no
/// retry policy and no partial-output mode.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The input file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not well-formed JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required field was absent at the point of use.
    #[error("missing required field {field}")]
    Access { field: &'static str },

    /// The output file or its parent directories could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RulesError>;
