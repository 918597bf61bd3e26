//! End-to-end generate pipeline shared by the CLI commands and tests.
//!
//! Strictly load -> project -> write. Any failure propagates to the
//! process boundary; there is no retry and no partial output.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

use rules_model::RulesDocument;
use rules_transform::{load, project, write};

/// Result of a generate run, consumed by the summary printer.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// The projected document.
    pub document: RulesDocument,
    /// Destination path (whether or not it was written).
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
}

/// Run the transform from `input` to `output`.
///
/// `snapshot` is the provenance date embedded in the document; injecting it
/// keeps runs reproducible. `dry_run` projects and reports without writing.
pub fn generate(
    input: &Path,
    output: &Path,
    snapshot: NaiveDate,
    dry_run: bool,
) -> Result<GenerateOutcome> {
    let config = load(input)?;
    info!(league = %config.name, season = %config.season, "loaded league export");
    let document = project(&config, snapshot)?;
    debug!(sections = document.sections.len(), "projected rules document");
    if dry_run {
        info!("dry run, skipping write");
    } else {
        write(&document, output)?;
        info!(output = %output.display(), "wrote rules document");
    }
    Ok(GenerateOutcome {
        document,
        output: output.to_path_buf(),
        written: !dry_run,
    })
}
