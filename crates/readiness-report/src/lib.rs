//! Output generation for the data readiness audit.
//!
//! - **mapping.json**: one machine-readable record per coverage row
//! - **REPORT_data_readiness.md**: the narrative readiness report

mod error;
mod mapping;
mod markdown;
mod output;

pub use error::{ReportError, Result};
pub use mapping::{MappingRecord, build_mapping_document, mapping_json, write_mapping_json};
pub use markdown::{ReportContext, bucket1_readiness, render_report};
pub use output::{MAPPING_FILE_NAME, OutputPaths, REPORT_FILE_NAME, write_outputs};
