//! Audit pipeline with explicit stages.
//!
//! 1. **Catalog**: load and validate the field catalog
//! 2. **Ingest**: profile every declared table
//! 3. **Resolve**: build the coverage matrix and bucket aggregates
//! 4. **Report**: render and write `mapping.json` and the markdown report
//!
//! The catalog is validated before any table is read, and the whole matrix is
//! computed before anything is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, trace};

use readiness_catalog::{default_catalog, load_catalog};
use readiness_ingest::{ProfileOutcome, profile_declared_tables};
use readiness_map::{aggregate, build_coverage_matrix};
use readiness_model::{Aggregates, Catalog, CoverageMatrix, MissingTable, TableProfiles};
use readiness_report::{
    OutputPaths, ReportContext, build_mapping_document, render_report, write_outputs,
};

use crate::logging::redact_value;

/// Options for a full audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Catalog file; the built-in catalog when `None`.
    pub catalog_path: Option<PathBuf>,
    pub report_date: NaiveDate,
    pub data_source: String,
    pub dry_run: bool,
}

/// Everything an audit run produced.
#[derive(Debug)]
pub struct AuditOutcome {
    pub catalog: Catalog,
    pub profiles: TableProfiles,
    pub missing_tables: Vec<MissingTable>,
    pub matrix: CoverageMatrix,
    pub aggregates: Aggregates,
    pub output_dir: PathBuf,
    /// Written files, or `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

/// Result of the resolve stage.
#[derive(Debug)]
pub struct ResolveResult {
    pub matrix: CoverageMatrix,
    pub aggregates: Aggregates,
}

// ============================================================================
// Stage 1: Catalog
// ============================================================================

/// Loads the catalog from `path`, or the built-in one.
pub fn load_audit_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => default_catalog().context("load built-in catalog"),
    }
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Profiles the catalog's declared tables found in `input_dir`.
pub fn ingest(input_dir: &Path, catalog: &Catalog) -> Result<ProfileOutcome> {
    let start = Instant::now();
    let outcome = info_span!("ingest", input_dir = %input_dir.display()).in_scope(|| {
        profile_declared_tables(input_dir, &catalog.tables)
            .with_context(|| format!("profile tables in {}", input_dir.display()))
    })?;
    for profile in outcome.profiles.values() {
        for column in profile.columns() {
            let samples: Vec<&str> = column
                .sample_values
                .iter()
                .map(|value| redact_value(value))
                .collect();
            trace!(
                table_id = %profile.table_id,
                column = %column.name,
                samples = ?samples,
                "column samples"
            );
        }
    }
    info!(
        profiled = outcome.profiles.len(),
        missing = outcome.missing.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(outcome)
}

// ============================================================================
// Stage 3: Resolve
// ============================================================================

pub fn resolve(catalog: &Catalog, profiles: &TableProfiles) -> ResolveResult {
    let start = Instant::now();
    info_span!("resolve").in_scope(|| {
        let matrix = build_coverage_matrix(catalog, profiles);
        let aggregates = aggregate(&matrix, catalog);
        info!(
            fields = aggregates.total_count,
            present = aggregates.present_count,
            missing = aggregates.missing_count,
            low_quality = aggregates.low_quality_count,
            blockers = aggregates.bucket1_blockers.len(),
            bucket1_deliverable = aggregates.bucket1_deliverable,
            duration_ms = start.elapsed().as_millis(),
            "resolve complete"
        );
        ResolveResult { matrix, aggregates }
    })
}

// ============================================================================
// Stage 4: Report
// ============================================================================

/// Renders the report and writes both outputs unless `dry_run` is set.
pub fn report(
    ctx: &ReportContext<'_>,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Option<OutputPaths>> {
    let start = Instant::now();
    info_span!("report", output_dir = %output_dir.display()).in_scope(|| -> Result<_> {
        let records = build_mapping_document(ctx.matrix);
        let markdown = render_report(ctx);
        if dry_run {
            info!(records = records.len(), "dry run, outputs not written");
            return Ok(None);
        }
        let paths = write_outputs(output_dir, &records, &markdown)
            .with_context(|| format!("write outputs to {}", output_dir.display()))?;
        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "report complete"
        );
        Ok(Some(paths))
    })
}

/// Runs all stages in order.
pub fn run_audit(options: &AuditOptions) -> Result<AuditOutcome> {
    let span = info_span!("audit", input_dir = %options.input_dir.display());
    let _guard = span.enter();

    let catalog = load_audit_catalog(options.catalog_path.as_deref())?;
    let ProfileOutcome { profiles, missing } = ingest(&options.input_dir, &catalog)?;
    let ResolveResult { matrix, aggregates } = resolve(&catalog, &profiles);

    let ctx = ReportContext {
        catalog: &catalog,
        profiles: &profiles,
        missing_tables: &missing,
        matrix: &matrix,
        aggregates: &aggregates,
        report_date: options.report_date,
        data_source: &options.data_source,
    };
    let outputs = report(&ctx, &options.output_dir, options.dry_run)?;

    Ok(AuditOutcome {
        catalog,
        profiles,
        missing_tables: missing,
        matrix,
        aggregates,
        output_dir: options.output_dir.clone(),
        outputs,
    })
}
