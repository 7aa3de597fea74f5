//! Table Profile Collector for the data readiness audit.
//!
//! Reads exported CSV tables (UTF-8 or Windows-1252, comma or semicolon
//! delimited) and reduces each to a [`TableProfile`](readiness_model::TableProfile):
//! row count plus per-column null statistics, type tag and sample values.

pub mod decode;
pub mod discovery;
pub mod error;
pub mod profile;
pub mod reader;

pub use decode::decode_bytes;
pub use discovery::{
    ProfileOutcome, list_table_files, profile_declared_tables, profile_table_file, table_id_for,
};
pub use error::{IngestError, Result};
pub use profile::{is_null_cell, null_percentage, profile_table};
pub use reader::{RawTable, parse_table, read_table};
