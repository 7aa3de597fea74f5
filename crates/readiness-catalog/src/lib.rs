//! Requirement catalog for the data readiness audit.
//!
//! The catalog is configuration data: fraud-detection layers, client
//! expectations and the per-field source mapping table. It is read from TOML
//! (the embedded default or an operator-supplied file), validated once, and
//! handed to the resolver as an immutable [`Catalog`].

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod file;
pub mod loader;

pub use crate::error::{CatalogError, Result};
pub use crate::loader::{build_catalog, default_catalog, load_catalog, parse_catalog};
pub use readiness_model::Catalog;
