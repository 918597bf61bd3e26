//! File endpoints of the transform.
//!
//! Paths are explicit parameters; the CLI owns the defaults. `write` stages
//! the document in a temp file next to the destination and renames it into
//! place, so a failed run never leaves a half-written document behind.

use std::fs;
use std::path::{Path, PathBuf};

use rules_model::{LeagueConfig, Result, RulesDocument, RulesError};

/// Read and parse a league export.
///
/// No schema validation beyond field access: missing optional fields are
/// tolerated here and surface later, if at all, from the projection.
///
/// # Errors
///
/// [`RulesError::Read`] if the file is missing or unreadable,
/// [`RulesError::Parse`] if it is not well-formed JSON.
pub fn load(path: &Path) -> Result<LeagueConfig> {
    let text = fs::read_to_string(path).map_err(|source| RulesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| RulesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize the document and atomically replace `path`.
///
/// Creates missing parent directories. Overwrites unconditionally; the
/// document is fully regenerated on every run.
///
/// # Errors
///
/// [`RulesError::Write`] on any filesystem failure.
pub fn write(doc: &RulesDocument, path: &Path) -> Result<()> {
    let wrap = |source: std::io::Error| RulesError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let json = serde_json::to_string_pretty(doc).map_err(|source| wrap(source.into()))?;
    let staged = staging_path(path);
    fs::write(&staged, json).map_err(wrap)?;
    fs::rename(&staged, path).map_err(wrap)
}

/// Sibling temp path, so the final rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}
