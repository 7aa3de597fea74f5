//! Catalog data embedded at compile time.

/// Default catalog covering the deployed fraud-detection layers.
pub const DEFAULT_CATALOG_TOML: &str = include_str!("../data/default_catalog.toml");

/// Origin label used in errors raised while parsing the embedded catalog.
pub const DEFAULT_CATALOG_ORIGIN: &str = "<embedded default catalog>";
