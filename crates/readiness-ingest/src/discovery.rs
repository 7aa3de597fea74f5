//! Table discovery and profiling of the declared source tables.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use readiness_model::{MissingTable, TableProfile, TableProfiles};

use crate::error::{IngestError, Result};
use crate::profile::profile_table;
use crate::reader::read_table;

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Table id for a file: its file name.
pub fn table_id_for(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Reads and profiles one table file.
pub fn profile_table_file(path: &Path) -> Result<TableProfile> {
    let table = read_table(path)?;
    Ok(profile_table(&table_id_for(path), &table))
}

/// Profiles collected from an input folder.
#[derive(Debug, Clone, Default)]
pub struct ProfileOutcome {
    /// Successfully profiled tables keyed by table id.
    pub profiles: TableProfiles,
    /// Declared tables that could not be profiled, in declaration order.
    pub missing: Vec<MissingTable>,
}

/// Profiles each declared table in `dir`, in declaration order.
///
/// A table that is absent or unreadable is recorded in
/// [`ProfileOutcome::missing`] and logged; it never aborts the run.
pub fn profile_declared_tables(dir: &Path, tables: &[String]) -> Result<ProfileOutcome> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut outcome = ProfileOutcome::default();
    for table_id in tables {
        let path = dir.join(table_id);
        let start = Instant::now();
        match profile_table_file(&path) {
            Ok(profile) => {
                info!(
                    table_id = %table_id,
                    rows = profile.row_count,
                    columns = profile.column_count(),
                    duration_ms = start.elapsed().as_millis(),
                    "profiled table"
                );
                outcome.profiles.insert(table_id.clone(), profile);
            }
            Err(error) => {
                warn!(table_id = %table_id, %error, "table unavailable");
                outcome.missing.push(MissingTable {
                    table_id: table_id.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }
    Ok(outcome)
}
