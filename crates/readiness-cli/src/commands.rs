use anyhow::{Context, Result};
use chrono::Local;
use tracing::info_span;

use readiness_cli::pipeline::{
    AuditOptions, AuditOutcome, ingest, load_audit_catalog, run_audit,
};

use crate::cli::{AuditArgs, CatalogArgs, ProfileArgs};
use crate::summary::{print_catalog, print_profile, print_table_overview};

pub fn run_audit_command(args: &AuditArgs) -> Result<AuditOutcome> {
    let options = AuditOptions {
        input_dir: args.input_dir.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| args.input_dir.join("output")),
        catalog_path: args.catalog.clone(),
        report_date: args
            .report_date
            .unwrap_or_else(|| Local::now().date_naive()),
        data_source: args.data_source.clone(),
        dry_run: args.dry_run,
    };
    run_audit(&options)
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = load_audit_catalog(args.catalog.as_deref())?;
    print_catalog(&catalog);
    Ok(())
}

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let span = info_span!("profile", input_dir = %args.input_dir.display());
    let _guard = span.enter();
    let catalog = load_audit_catalog(args.catalog.as_deref())?;
    let outcome = ingest(&args.input_dir, &catalog).context("profile declared tables")?;
    print_table_overview(&catalog, &outcome.profiles, &outcome.missing);
    for table_id in &catalog.tables {
        if let Some(profile) = outcome.profiles.get(table_id) {
            print_profile(profile);
        }
    }
    Ok(())
}
