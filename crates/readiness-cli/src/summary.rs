use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use readiness_model::{
    Bucket, Catalog, CoverageRow, CoverageStatus, LOW_QUALITY_NULL_PERCENTAGE, MissingTable,
    TableProfile, TableProfiles,
};
use readiness_cli::pipeline::AuditOutcome;

pub fn print_audit_summary(outcome: &AuditOutcome) {
    match &outcome.outputs {
        Some(paths) => {
            println!("Mapping: {}", paths.mapping.display());
            println!("Report: {}", paths.report.display());
        }
        None => println!("Dry run: nothing written to {}", outcome.output_dir.display()),
    }
    print_table_overview(&outcome.catalog, &outcome.profiles, &outcome.missing_tables);
    print_coverage_table(outcome);

    let aggregates = &outcome.aggregates;
    println!();
    println!(
        "Present: {}  Missing: {}  Low quality: {}  Total: {}",
        aggregates.present_count,
        aggregates.missing_count,
        aggregates.low_quality_count,
        aggregates.total_count
    );
    if aggregates.bucket1_deliverable {
        println!("Bucket 1: DELIVERABLE");
    } else {
        println!(
            "Bucket 1: PARTIALLY BLOCKED ({} blocker(s))",
            aggregates.bucket1_blockers.len()
        );
    }
}

/// Rows and columns per declared table, with unavailable tables marked.
pub fn print_table_overview(catalog: &Catalog, profiles: &TableProfiles, missing: &[MissingTable]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for table_id in &catalog.tables {
        if let Some(profile) = profiles.get(table_id) {
            table.add_row(vec![
                table_cell(table_id),
                Cell::new(profile.row_count),
                Cell::new(profile.column_count()),
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
            ]);
        } else {
            let reason = missing
                .iter()
                .find(|entry| &entry.table_id == table_id)
                .map_or("not available", |entry| entry.reason.as_str());
            table.add_row(vec![
                table_cell(table_id),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(reason).fg(Color::Yellow),
            ]);
        }
    }
    println!("{table}");
}

fn print_coverage_table(outcome: &AuditOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Status"),
        header_cell("Source"),
        header_cell("Null %"),
        header_cell("Referenced By"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &outcome.matrix {
        let field = if outcome.aggregates.is_blocker(&row.field) {
            Cell::new(&row.field).fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&row.field)
        };
        table.add_row(vec![
            field,
            status_cell(row.status),
            source_cell(row),
            row.null_percentage
                .map_or_else(|| dim_cell("-"), |pct| Cell::new(format!("{pct:.1}"))),
            Cell::new(row.referenced_by_label()),
        ]);
    }
    println!();
    println!("Coverage:");
    println!("{table}");
}

pub fn print_catalog(catalog: &Catalog) {
    println!("Tables: {}", catalog.tables.join(", "));
    let mut layers = Table::new();
    layers.set_header(vec![
        header_cell("Layer"),
        header_cell("Bucket"),
        header_cell("Purpose"),
        header_cell("Required Fields"),
    ]);
    apply_table_style(&mut layers);
    align_column(&mut layers, 1, CellAlignment::Center);
    for layer in &catalog.layers {
        layers.add_row(vec![
            Cell::new(&layer.name).fg(Color::Blue).add_attribute(Attribute::Bold),
            bucket_cell(layer.bucket),
            Cell::new(&layer.purpose),
            Cell::new(layer.required_fields.join(", ")),
        ]);
    }
    println!("{layers}");

    let mut expectations = Table::new();
    expectations.set_header(vec![
        header_cell("Field"),
        header_cell("Bucket"),
        header_cell("Description"),
        header_cell("Suggested Source"),
    ]);
    apply_table_style(&mut expectations);
    align_column(&mut expectations, 1, CellAlignment::Center);
    for expectation in &catalog.expectations {
        expectations.add_row(vec![
            Cell::new(&expectation.field),
            bucket_cell(expectation.bucket),
            Cell::new(&expectation.description),
            Cell::new(&expectation.suggested_source),
        ]);
    }
    println!();
    println!("Client expectations:");
    println!("{expectations}");
    println!("Field mappings: {}", catalog.mappings.len());
}

pub fn print_profile(profile: &TableProfile) {
    println!();
    println!(
        "{} ({} rows, {} columns)",
        profile.table_id,
        profile.row_count,
        profile.column_count()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
        header_cell("Null %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in profile.columns() {
        let pct = Cell::new(format!("{:.1}", column.null_percentage));
        table.add_row(vec![
            Cell::new(&column.name),
            dim_cell(column.column_type),
            Cell::new(column.null_count),
            if column.null_percentage > LOW_QUALITY_NULL_PERCENTAGE {
                pct.fg(Color::Yellow)
            } else {
                pct
            },
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: CoverageStatus) -> Cell {
    match status {
        CoverageStatus::Present => Cell::new("Present").fg(Color::Green),
        CoverageStatus::PresentLowQuality => Cell::new("Low quality").fg(Color::Yellow),
        CoverageStatus::Missing => Cell::new("Missing")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn source_cell(row: &CoverageRow) -> Cell {
    match &row.resolved_source {
        Some(source) => Cell::new(format!("{}.{}", source.table_id, source.column)),
        None => dim_cell("-"),
    }
}

fn bucket_cell(bucket: Bucket) -> Cell {
    let cell = Cell::new(bucket.level());
    match bucket {
        Bucket::Critical => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Bucket::NearTerm => cell.fg(Color::Yellow),
        Bucket::LongTerm => cell,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(table_id: &str) -> Cell {
    Cell::new(table_id)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
