//! CLI library components for the data readiness audit.

pub mod logging;
pub mod pipeline;
