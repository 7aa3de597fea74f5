//! Table and column profiles produced by the ingest stage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of sample values kept per column.
pub const MAX_SAMPLE_VALUES: usize = 3;

/// Coarse type tag inferred from the non-null cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    String,
    /// Column has no non-null values.
    Empty,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Null statistics and samples for one source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name as it appears in the header row.
    pub name: String,
    /// Inferred type of the non-null values.
    pub column_type: ColumnType,
    /// Number of null cells (blank or a null spelling such as `NA`).
    pub null_count: usize,
    /// Null share in percent, rounded to one decimal place (0.0 to 100.0).
    pub null_percentage: f64,
    /// Up to three non-null values in row order.
    pub sample_values: Vec<String>,
}

/// Profile of one source table (one export file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    /// Table identifier, the export file name (e.g. `Account.csv`).
    pub table_id: String,
    pub row_count: usize,
    columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Builds a profile, keeping the first column of any duplicated name.
    pub fn new(table_id: impl Into<String>, row_count: usize, columns: Vec<ColumnProfile>) -> Self {
        let mut unique: Vec<ColumnProfile> = Vec::with_capacity(columns.len());
        for column in columns {
            if unique.iter().any(|existing| existing.name == column.name) {
                continue;
            }
            unique.push(column);
        }
        Self {
            table_id: table_id.into(),
            row_count,
            columns: unique,
        }
    }

    /// Columns in header order.
    pub fn columns(&self) -> &[ColumnProfile] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Exact, case-sensitive lookup by column name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// A declared table that could not be profiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingTable {
    pub table_id: String,
    pub reason: String,
}

/// Profiles keyed by table id. Tables absent from the map never match.
pub type TableProfiles = BTreeMap<String, TableProfile>;
