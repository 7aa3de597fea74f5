//! Field coverage resolution.

use std::collections::BTreeSet;

use tracing::debug;

use readiness_model::{
    Catalog, ColumnProfile, CoverageMatrix, CoverageRow, FieldMapping, SourceRef, TableProfiles,
};

use crate::candidate::normalize_candidate;
use crate::transform::transform_hint;

/// Every field required by a layer or asked for by the client, sorted.
pub fn required_fields(catalog: &Catalog) -> BTreeSet<&str> {
    let mut fields: BTreeSet<&str> = catalog
        .layers
        .iter()
        .flat_map(|layer| layer.required_fields.iter().map(String::as_str))
        .collect();
    fields.extend(
        catalog
            .expectations
            .iter()
            .map(|expectation| expectation.field.as_str()),
    );
    fields
}

/// Resolves the whole catalog against the collected profiles.
pub fn build_coverage_matrix(catalog: &Catalog, profiles: &TableProfiles) -> CoverageMatrix {
    CoverageResolver::new(catalog, profiles).resolve_all()
}

/// Resolves required fields against table profiles.
///
/// Holds read-only borrows of the catalog and profiles; resolution has no
/// state of its own.
#[derive(Debug, Clone, Copy)]
pub struct CoverageResolver<'a> {
    catalog: &'a Catalog,
    profiles: &'a TableProfiles,
}

impl<'a> CoverageResolver<'a> {
    pub fn new(catalog: &'a Catalog, profiles: &'a TableProfiles) -> Self {
        Self { catalog, profiles }
    }

    /// One row per required field, in field-key order.
    pub fn resolve_all(&self) -> CoverageMatrix {
        let rows = required_fields(self.catalog)
            .into_iter()
            .map(|field| self.resolve(field))
            .collect();
        CoverageMatrix { rows }
    }

    /// Resolves a single field. Never fails: unresolvable fields are `Missing`.
    pub fn resolve(&self, field: &str) -> CoverageRow {
        let referenced_by = self.references(field);
        let mapping = self.catalog.mapping(field);
        let expectation = self.catalog.expectation(field);

        let row = match mapping.and_then(|mapping| self.find_source(mapping)) {
            Some((source, column)) => {
                CoverageRow::resolved(field, referenced_by, source, column.null_percentage)
            }
            None => CoverageRow::missing(field, referenced_by),
        };

        let notes = match expectation {
            Some(expectation) if !row.status.is_present() => {
                format!("Suggested source: {}", expectation.suggested_source)
            }
            _ => mapping.map(|mapping| mapping.notes.clone()).unwrap_or_default(),
        };
        let transform = transform_hint(field, row.status).map(str::to_string);
        let row = row.with_notes(notes).with_transform(transform);

        debug!(
            field,
            status = %row.status,
            source = ?row.resolved_source,
            "resolved field"
        );
        row
    }

    /// Layer labels in catalog order, then the client expectation label.
    fn references(&self, field: &str) -> Vec<String> {
        let mut labels: Vec<String> = self
            .catalog
            .layers_requiring(field)
            .map(|layer| format!("{} (Layer)", layer.name))
            .collect();
        if let Some(expectation) = self.catalog.expectation(field) {
            labels.push(format!(
                "Client Expectation: {}",
                expectation.description
            ));
        }
        labels
    }

    /// First candidate column that exists, scanning tables then candidates
    /// in declared order. Tables without a profile never match.
    fn find_source(&self, mapping: &FieldMapping) -> Option<(SourceRef, &'a ColumnProfile)> {
        mapping.sources.iter().find_map(|source| {
            let profile = self.profiles.get(&source.table)?;
            source
                .columns
                .iter()
                .map(|candidate| normalize_candidate(candidate.as_str()))
                .find_map(|name| profile.column(name))
                .map(|column| {
                    let source_ref = SourceRef {
                        table_id: source.table.clone(),
                        column: column.name.clone(),
                    };
                    (source_ref, column)
                })
        })
    }
}
