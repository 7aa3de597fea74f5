//! Priority aggregates derived from a coverage matrix.

use serde::{Deserialize, Serialize};

/// A missing field that blocks a bucket-1 layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket1Blocker {
    pub field: String,
    /// First bucket-1 layer (catalog order) that requires the field.
    pub layer: String,
}

/// Bucketed gaps and summary counts for the readiness report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Missing fields required by a bucket-1 layer, in matrix order.
    pub bucket1_blockers: Vec<Bucket1Blocker>,
    /// Missing client expectations declared as bucket 2, in matrix order.
    pub bucket2_fields: Vec<String>,
    /// Missing client expectations declared as bucket 3, in matrix order.
    pub bucket3_fields: Vec<String>,
    /// Resolved fields whose null share exceeds the quality threshold, in matrix order.
    pub high_null_fields: Vec<String>,
    pub present_count: usize,
    pub missing_count: usize,
    pub low_quality_count: usize,
    pub total_count: usize,
    /// True when no bucket-1 blocker exists.
    pub bucket1_deliverable: bool,
}

impl Aggregates {
    pub fn is_blocker(&self, field: &str) -> bool {
        self.bucket1_blockers
            .iter()
            .any(|blocker| blocker.field == field)
    }
}
