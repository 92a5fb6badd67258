//! # CSV Output
//!
//! Writes normalized jobs as a UTF-8 CSV file with a header row, and reads such
//! files back.
//!
//! Rows go to a temporary file next to the target, which is renamed over the
//! target only once every row is flushed. An interrupted run never leaves a
//! truncated CSV behind.

use crate::errors::PersistError;
use crate::types::NormalizedRecord;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Writes `jobs` to `path`, replacing any existing file.
///
/// An empty batch is an error and leaves the filesystem untouched. On any
/// failure the existing file at `path` is left as it was.
pub fn save_to_csv(jobs: &[NormalizedRecord], path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    if jobs.is_empty() {
        warn!("No jobs to save");
        return Err(PersistError::NoRecords);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut writer = csv::Writer::from_writer(NamedTempFile::new_in(dir)?);
    for job in jobs {
        writer.serialize(job)?;
    }
    let staged = writer.into_inner().map_err(|e| e.into_error())?;
    staged.persist(path).map_err(|e| e.error)?;

    info!("Successfully saved {} jobs to {}", jobs.len(), path.display());
    Ok(())
}

pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<NormalizedRecord>, PersistError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<NormalizedRecord>, csv::Error>>()?;
    Ok(records)
}
