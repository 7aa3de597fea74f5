//! Catalog parsing and validation.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use readiness_model::{
    Bucket, Catalog, ClientExpectation, FieldMapping, Layer, SourceCandidates,
};

use crate::embedded::{DEFAULT_CATALOG_ORIGIN, DEFAULT_CATALOG_TOML};
use crate::error::{CatalogError, Result};
use crate::file::{
    CATALOG_SCHEMA, CATALOG_SCHEMA_VERSION, CatalogFile, ExpectationEntry, LayerEntry,
    MappingEntry,
};

/// Loads and validates the embedded default catalog.
pub fn default_catalog() -> Result<Catalog> {
    parse_catalog(DEFAULT_CATALOG_TOML, DEFAULT_CATALOG_ORIGIN)
}

/// Reads, parses and validates a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_catalog(&text, &path.display().to_string())
}

/// Parses and validates catalog TOML. `origin` names the source in errors.
pub fn parse_catalog(text: &str, origin: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(text).map_err(|source| CatalogError::Toml {
        origin: origin.to_string(),
        source,
    })?;
    let catalog = build_catalog(file)?;
    info!(
        origin,
        table_count = catalog.tables.len(),
        layer_count = catalog.layers.len(),
        expectation_count = catalog.expectations.len(),
        mapping_count = catalog.mappings.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Validates a parsed catalog file and converts it into the model.
///
/// Fails on the first structural problem: unsupported schema, duplicate
/// keys, empty layers, or buckets outside 1 to 3.
pub fn build_catalog(file: CatalogFile) -> Result<Catalog> {
    let CatalogFile {
        catalog: header,
        layers,
        expectations,
        mappings,
    } = file;

    if header.schema != CATALOG_SCHEMA || header.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::UnsupportedSchema {
            schema: header.schema,
            version: header.schema_version,
        });
    }

    ensure_unique("table", header.tables.iter().map(String::as_str))?;
    ensure_unique("layer", layers.iter().map(|layer| layer.name.as_str()))?;
    ensure_unique(
        "expectation field",
        expectations.iter().map(|expectation| expectation.field.as_str()),
    )?;
    ensure_unique(
        "mapping field",
        mappings.iter().map(|mapping| mapping.field.as_str()),
    )?;

    let layers: Vec<Layer> = layers.into_iter().map(convert_layer).collect::<Result<_>>()?;
    let expectations: Vec<ClientExpectation> = expectations
        .into_iter()
        .map(convert_expectation)
        .collect::<Result<_>>()?;
    let mappings: Vec<FieldMapping> = mappings
        .into_iter()
        .map(convert_mapping)
        .collect::<Result<_>>()?;

    Ok(Catalog {
        tables: header.tables,
        layers,
        expectations,
        mappings,
    })
}

fn ensure_unique<'a>(kind: &'static str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = BTreeSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(CatalogError::EmptyKey {
                kind,
                attribute: "name",
            });
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn bucket(kind: &'static str, key: &str, level: u8) -> Result<Bucket> {
    Bucket::from_level(level).ok_or_else(|| CatalogError::InvalidBucket {
        kind,
        key: key.to_string(),
        bucket: level,
    })
}

fn convert_layer(entry: LayerEntry) -> Result<Layer> {
    let bucket = bucket("layer", &entry.name, entry.bucket)?;
    let mut required_fields: Vec<String> = Vec::with_capacity(entry.required_fields.len());
    for field in entry.required_fields {
        if field.trim().is_empty() {
            return Err(CatalogError::EmptyKey {
                kind: "layer required field",
                attribute: "field",
            });
        }
        if required_fields.contains(&field) {
            debug!(layer = %entry.name, field = %field, "dropping repeated required field");
            continue;
        }
        required_fields.push(field);
    }
    if required_fields.is_empty() {
        return Err(CatalogError::EmptyLayer { layer: entry.name });
    }
    Ok(Layer {
        name: entry.name,
        purpose: entry.purpose,
        bucket,
        required_fields,
    })
}

fn convert_expectation(entry: ExpectationEntry) -> Result<ClientExpectation> {
    let bucket = bucket("expectation", &entry.field, entry.bucket)?;
    Ok(ClientExpectation {
        field: entry.field,
        description: entry.description,
        bucket,
        suggested_source: entry.suggested_source,
    })
}

fn convert_mapping(entry: MappingEntry) -> Result<FieldMapping> {
    let mut tables = BTreeSet::new();
    for source in &entry.sources {
        if !tables.insert(source.table.as_str()) {
            return Err(CatalogError::DuplicateMappingTable {
                field: entry.field.clone(),
                table: source.table.clone(),
            });
        }
    }
    let sources = entry
        .sources
        .into_iter()
        .map(|source| SourceCandidates {
            table: source.table,
            columns: source.columns,
        })
        .collect();
    Ok(FieldMapping {
        field: entry.field,
        notes: entry.notes,
        sources,
    })
}
