//! Writing the audit outputs to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, Result};
use crate::mapping::{MappingRecord, write_mapping_json};

pub const MAPPING_FILE_NAME: &str = "mapping.json";
pub const REPORT_FILE_NAME: &str = "REPORT_data_readiness.md";

/// Paths of the files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub mapping: PathBuf,
    pub report: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            mapping: dir.join(MAPPING_FILE_NAME),
            report: dir.join(REPORT_FILE_NAME),
        }
    }
}

/// Writes the mapping document and the rendered report into `dir`,
/// creating it if needed.
pub fn write_outputs(dir: &Path, records: &[MappingRecord], report: &str) -> Result<OutputPaths> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let paths = OutputPaths::in_dir(dir);
    write_mapping_json(&paths.mapping, records)?;
    std::fs::write(&paths.report, report).map_err(|source| ReportError::Write {
        path: paths.report.clone(),
        source,
    })?;
    info!(
        mapping = %paths.mapping.display(),
        report = %paths.report.display(),
        record_count = records.len(),
        "outputs written"
    );
    Ok(paths)
}
