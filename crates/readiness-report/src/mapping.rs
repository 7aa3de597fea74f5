//! The canonical mapping document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use readiness_model::{CoverageMatrix, CoverageRow, CoverageStatus};

use crate::error::{ReportError, Result};

/// One record of `mapping.json`. Field names and order are part of the
/// output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub expected_field: String,
    /// Referencing labels joined with `"; "`.
    pub fortza_layer_or_expectation: String,
    pub source_file: Option<String>,
    pub source_column: Option<String>,
    pub status: CoverageStatus,
    pub null_percentage: Option<f64>,
    pub transform_needed: Option<String>,
    pub notes: String,
}

impl From<&CoverageRow> for MappingRecord {
    fn from(row: &CoverageRow) -> Self {
        let (source_file, source_column) = match &row.resolved_source {
            Some(source) => (Some(source.table_id.clone()), Some(source.column.clone())),
            None => (None, None),
        };
        Self {
            expected_field: row.field.clone(),
            fortza_layer_or_expectation: row.referenced_by_label(),
            source_file,
            source_column,
            status: row.status,
            null_percentage: row.null_percentage,
            transform_needed: row.transform_needed.clone(),
            notes: row.notes.clone(),
        }
    }
}

/// One record per coverage row, in matrix (field-key) order.
pub fn build_mapping_document(matrix: &CoverageMatrix) -> Vec<MappingRecord> {
    matrix.iter().map(MappingRecord::from).collect()
}

/// Pretty-printed JSON with a two-space indent.
pub fn mapping_json(records: &[MappingRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn write_mapping_json(path: &Path, records: &[MappingRecord]) -> Result<()> {
    let json = mapping_json(records)?;
    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use readiness_model::SourceRef;

    use super::*;

    #[test]
    fn missing_row_has_no_source() {
        let row = CoverageRow::missing("ip", vec!["IP Address Layer (Layer)".to_string()]);
        let record = MappingRecord::from(&row);
        assert_eq!(record.source_file, None);
        assert_eq!(record.source_column, None);
        assert_eq!(record.null_percentage, None);
        assert_eq!(record.status, CoverageStatus::Missing);
    }

    #[test]
    fn labels_are_joined_into_one_string() {
        let row = CoverageRow::missing(
            "ip",
            vec![
                "IP Address Layer (Layer)".to_string(),
                "Client Expectation: Origin IP address".to_string(),
            ],
        );
        let json = mapping_json(&[MappingRecord::from(&row)]).unwrap();
        assert!(json.contains(
            "\"fortza_layer_or_expectation\": \"IP Address Layer (Layer); Client Expectation: Origin IP address\""
        ));
    }

    #[test]
    fn status_serializes_as_label() {
        let row = CoverageRow::resolved(
            "devicename",
            vec![],
            SourceRef {
                table_id: "Lead.csv".to_string(),
                column: "Fortza__Device_Name__c".to_string(),
            },
            62.0,
        );
        let json = mapping_json(&[MappingRecord::from(&row)]).unwrap();
        assert!(json.contains("\"status\": \"Present but low quality (high nulls)\""));
        assert!(json.contains("\"null_percentage\": 62.0"));
    }
}
