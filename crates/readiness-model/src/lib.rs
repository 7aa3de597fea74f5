//! Shared data model for the data readiness audit.
//!
//! Everything here is plain, immutable-after-construction data. Profiles are
//! produced by the ingest stage, the catalog by the catalog loader, and the
//! coverage types by the resolver.

pub mod aggregate;
pub mod catalog;
pub mod coverage;
pub mod profile;

pub use aggregate::{Aggregates, Bucket1Blocker};
pub use catalog::{Bucket, Catalog, ClientExpectation, FieldMapping, Layer, SourceCandidates};
pub use coverage::{
    CoverageMatrix, CoverageRow, CoverageStatus, LOW_QUALITY_NULL_PERCENTAGE, SourceRef,
};
pub use profile::{
    ColumnProfile, ColumnType, MAX_SAMPLE_VALUES, MissingTable, TableProfile, TableProfiles,
};
