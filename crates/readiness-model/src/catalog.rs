//! Requirement catalog: layers, client expectations and the source mapping table.
//!
//! A [`Catalog`] is built once per run by the catalog loader and then only
//! read. Declaration order is significant throughout: layer order decides
//! label order and blocker attribution, mapping source order decides which
//! candidate column wins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority tier for a layer or client expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bucket {
    /// Bucket 1: must-have now.
    Critical,
    /// Bucket 2: near-term.
    NearTerm,
    /// Bucket 3: long-term or needs external data.
    LongTerm,
}

impl Bucket {
    /// Parses a numeric bucket level (1 to 3).
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Critical),
            2 => Some(Self::NearTerm),
            3 => Some(Self::LongTerm),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::NearTerm => 2,
            Self::LongTerm => 3,
        }
    }
}

impl From<Bucket> for u8 {
    fn from(bucket: Bucket) -> Self {
        bucket.level()
    }
}

impl TryFrom<u8> for Bucket {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("bucket must be 1, 2 or 3 (got {level})"))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// A downstream fraud-detection capability and the fields it consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub purpose: String,
    pub bucket: Bucket,
    pub required_fields: Vec<String>,
}

impl Layer {
    pub fn requires(&self, field: &str) -> bool {
        self.required_fields.iter().any(|required| required == field)
    }
}

/// A field the client asked for, independent of any layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientExpectation {
    pub field: String,
    pub description: String,
    pub bucket: Bucket,
    /// Free-text hint naming where the data might come from.
    pub suggested_source: String,
}

/// Candidate columns for a logical field in one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCandidates {
    pub table: String,
    /// Candidate column names in priority order. Empty means "not available".
    /// Entries may carry a trailing parenthetical annotation.
    pub columns: Vec<String>,
}

/// Hand-maintained mapping from a logical field to candidate source columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub field: String,
    pub notes: String,
    /// Per-table candidates in declared table order.
    pub sources: Vec<SourceCandidates>,
}

/// The full static configuration consumed by the resolver and aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Source tables to profile, in load order.
    pub tables: Vec<String>,
    pub layers: Vec<Layer>,
    pub expectations: Vec<ClientExpectation>,
    pub mappings: Vec<FieldMapping>,
}

impl Catalog {
    pub fn expectation(&self, field: &str) -> Option<&ClientExpectation> {
        self.expectations.iter().find(|expectation| expectation.field == field)
    }

    pub fn mapping(&self, field: &str) -> Option<&FieldMapping> {
        self.mappings.iter().find(|mapping| mapping.field == field)
    }

    /// Layers requiring `field`, in catalog order.
    pub fn layers_requiring<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Layer> + 'a {
        self.layers.iter().filter(move |layer| layer.requires(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_levels_round_trip() {
        for level in 1..=3 {
            assert_eq!(Bucket::from_level(level).map(Bucket::level), Some(level));
        }
        assert_eq!(Bucket::from_level(0), None);
        assert_eq!(Bucket::from_level(4), None);
    }

    #[test]
    fn layers_requiring_preserves_catalog_order() {
        let layer = |name: &str, fields: &[&str]| Layer {
            name: name.to_string(),
            purpose: String::new(),
            bucket: Bucket::Critical,
            required_fields: fields.iter().map(|f| f.to_string()).collect(),
        };
        let catalog = Catalog {
            layers: vec![
                layer("Zeta", &["email"]),
                layer("Alpha", &["zip_code"]),
                layer("Beta", &["email", "zip_code"]),
            ],
            ..Catalog::default()
        };
        let names: Vec<&str> = catalog
            .layers_requiring("email")
            .map(|layer| layer.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Beta"]);
    }
}
