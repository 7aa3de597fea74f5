//! Priority bucketing of coverage gaps.

use readiness_model::{Aggregates, Bucket, Bucket1Blocker, Catalog, CoverageMatrix, CoverageStatus};

/// Partitions the matrix into remediation buckets and computes summary counts.
///
/// A missing field required by a bucket-1 layer is a blocker attributed to the
/// first such layer in catalog order. Independently, a missing client
/// expectation lands in the bucket-2 or bucket-3 list per its own bucket, so a
/// field may be both a blocker and a later-bucket request. All lists keep
/// matrix (field-key) order.
pub fn aggregate(matrix: &CoverageMatrix, catalog: &Catalog) -> Aggregates {
    let mut aggregates = Aggregates {
        total_count: matrix.len(),
        ..Aggregates::default()
    };

    for row in matrix {
        match row.status {
            CoverageStatus::Present => aggregates.present_count += 1,
            CoverageStatus::PresentLowQuality => {
                aggregates.present_count += 1;
                aggregates.low_quality_count += 1;
            }
            CoverageStatus::Missing => aggregates.missing_count += 1,
        }
        if row.is_high_null() {
            aggregates.high_null_fields.push(row.field.clone());
        }
        if row.status != CoverageStatus::Missing {
            continue;
        }

        if let Some(layer) = catalog
            .layers
            .iter()
            .find(|layer| layer.bucket == Bucket::Critical && layer.requires(&row.field))
        {
            aggregates.bucket1_blockers.push(Bucket1Blocker {
                field: row.field.clone(),
                layer: layer.name.clone(),
            });
        }

        if let Some(expectation) = catalog.expectation(&row.field) {
            match expectation.bucket {
                Bucket::NearTerm => aggregates.bucket2_fields.push(row.field.clone()),
                Bucket::LongTerm => aggregates.bucket3_fields.push(row.field.clone()),
                Bucket::Critical => {}
            }
        }
    }

    aggregates.bucket1_deliverable = aggregates.bucket1_blockers.is_empty();
    aggregates
}
