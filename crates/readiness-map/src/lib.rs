//! Coverage resolution for the data readiness audit.
//!
//! [`CoverageResolver`] turns the catalog and the collected table profiles
//! into one [`CoverageRow`](readiness_model::CoverageRow) per required field;
//! [`aggregate`] reduces the resulting matrix to priority buckets and counts.
//! Both are pure: the same inputs always give the same output.

#![deny(unsafe_code)]

pub mod aggregate;
pub mod candidate;
pub mod resolver;
pub mod transform;

pub use aggregate::aggregate;
pub use candidate::normalize_candidate;
pub use resolver::{CoverageResolver, build_coverage_matrix, required_fields};
pub use transform::transform_hint;
