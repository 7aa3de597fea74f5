use std::path::PathBuf;

/// Configuration errors in a requirement catalog.
///
/// Any of these means the deployment is broken; no coverage is computed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported catalog schema '{schema}' (version {version})")]
    UnsupportedSchema { schema: String, version: u32 },

    #[error("duplicate {kind} '{key}' in catalog")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("duplicate table '{table}' in mapping for field '{field}'")]
    DuplicateMappingTable { field: String, table: String },

    #[error("layer '{layer}' has no required fields")]
    EmptyLayer { layer: String },

    #[error("{kind} '{key}' has bucket {bucket}; expected 1, 2 or 3")]
    InvalidBucket {
        kind: &'static str,
        key: String,
        bucket: u8,
    },

    #[error("{kind} has an empty {attribute}")]
    EmptyKey {
        kind: &'static str,
        attribute: &'static str,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
