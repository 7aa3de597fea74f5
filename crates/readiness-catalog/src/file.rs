//! On-disk (TOML) shape of a catalog.
//!
//! These types mirror the file exactly, including raw bucket numbers, so
//! validation can report problems against the offending key instead of a
//! parser position.

use serde::{Deserialize, Serialize};

/// Schema identifier every catalog file must declare.
pub const CATALOG_SCHEMA: &str = "data-readiness.catalog";

/// Supported catalog schema version.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub catalog: CatalogHeader,
    #[serde(default, rename = "layer")]
    pub layers: Vec<LayerEntry>,
    #[serde(default, rename = "expectation")]
    pub expectations: Vec<ExpectationEntry>,
    #[serde(default, rename = "mapping")]
    pub mappings: Vec<MappingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogHeader {
    pub schema: String,
    pub schema_version: u32,
    /// Source tables to profile, in load order.
    #[serde(default)]
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerEntry {
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    pub bucket: u8,
    #[serde(default)]
    pub required_fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectationEntry {
    pub field: String,
    #[serde(default)]
    pub description: String,
    pub bucket: u8,
    #[serde(default)]
    pub suggested_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    pub field: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub table: String,
    /// Candidate columns in priority order; empty when the table has none.
    #[serde(default)]
    pub columns: Vec<String>,
}
