//! Coverage rows: the resolved verdict for each required field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Null share above which a resolved column counts as low quality.
pub const LOW_QUALITY_NULL_PERCENTAGE: f64 = 50.0;

/// Presence verdict for a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageStatus {
    #[serde(rename = "Present")]
    Present,
    #[serde(rename = "Present but low quality (high nulls)")]
    PresentLowQuality,
    #[serde(rename = "Missing")]
    Missing,
}

impl CoverageStatus {
    /// Status of a resolved column with the given null share.
    pub fn for_null_percentage(null_percentage: f64) -> Self {
        if null_percentage > LOW_QUALITY_NULL_PERCENTAGE {
            Self::PresentLowQuality
        } else {
            Self::Present
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present | Self::PresentLowQuality)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::PresentLowQuality => "Present but low quality (high nulls)",
            Self::Missing => "Missing",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved (table, column) source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub table_id: String,
    pub column: String,
}

/// Coverage verdict for one required field.
///
/// `resolved_source` and `null_percentage` are set exactly when the status is
/// present; the constructors are the only way the resolver builds rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRow {
    pub field: String,
    /// Referencing labels, layers first in catalog order, then the expectation.
    pub referenced_by: Vec<String>,
    pub status: CoverageStatus,
    pub resolved_source: Option<SourceRef>,
    pub null_percentage: Option<f64>,
    pub transform_needed: Option<String>,
    pub notes: String,
}

impl CoverageRow {
    pub fn resolved(
        field: impl Into<String>,
        referenced_by: Vec<String>,
        source: SourceRef,
        null_percentage: f64,
    ) -> Self {
        Self {
            field: field.into(),
            referenced_by,
            status: CoverageStatus::for_null_percentage(null_percentage),
            resolved_source: Some(source),
            null_percentage: Some(null_percentage),
            transform_needed: None,
            notes: String::new(),
        }
    }

    pub fn missing(field: impl Into<String>, referenced_by: Vec<String>) -> Self {
        Self {
            field: field.into(),
            referenced_by,
            status: CoverageStatus::Missing,
            resolved_source: None,
            null_percentage: None,
            transform_needed: None,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Option<String>) -> Self {
        self.transform_needed = transform;
        self
    }

    /// Labels joined with `"; "`, as written to the mapping document.
    pub fn referenced_by_label(&self) -> String {
        self.referenced_by.join("; ")
    }

    /// True when the resolved column's null share exceeds the quality threshold.
    pub fn is_high_null(&self) -> bool {
        self.null_percentage
            .is_some_and(|pct| pct > LOW_QUALITY_NULL_PERCENTAGE)
    }
}

/// One row per required field, sorted by field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    pub rows: Vec<CoverageRow>,
}

impl CoverageMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, field: &str) -> Option<&CoverageRow> {
        self.rows.iter().find(|row| row.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoverageRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a CoverageMatrix {
    type Item = &'a CoverageRow;
    type IntoIter = std::slice::Iter<'a, CoverageRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
