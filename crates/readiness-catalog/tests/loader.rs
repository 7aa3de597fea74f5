//! Integration tests for loading catalogs from disk.

use std::fs;

use readiness_catalog::{CatalogError, embedded::DEFAULT_CATALOG_TOML, load_catalog};
use readiness_model::Bucket;

#[test]
fn loads_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[catalog]
schema = "data-readiness.catalog"
schema_version = 1
tables = ["Contact.csv", "Lead.csv"]

[[layer]]
name = "FBI Layer"
purpose = "Known fraudster verification"
bucket = 1
required_fields = ["customer_name", "gender"]

[[expectation]]
field = "audit_notes"
description = "Audit notes for sentiment analysis"
bucket = 3
suggested_source = "CustomObject, Notes, External System"

[[mapping]]
field = "gender"
notes = "Gender field available in Fortza custom fields"

[[mapping.source]]
table = "Contact.csv"
columns = ["Fortza__Gender__c", "GenderIdentity"]

[[mapping.source]]
table = "Lead.csv"
"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).expect("load catalog");
    assert_eq!(catalog.tables, vec!["Contact.csv", "Lead.csv"]);
    assert_eq!(catalog.layers[0].bucket, Bucket::Critical);
    assert_eq!(catalog.expectations[0].bucket, Bucket::LongTerm);
    let gender = catalog.mapping("gender").unwrap();
    assert_eq!(gender.sources.len(), 2);
    assert!(gender.sources[1].columns.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn malformed_toml_names_origin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[catalog\nschema = ").unwrap();
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn embedded_catalog_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.toml");
    fs::write(&path, DEFAULT_CATALOG_TOML).unwrap();
    let from_disk = load_catalog(&path).unwrap();
    let embedded = readiness_catalog::default_catalog().unwrap();
    assert_eq!(from_disk, embedded);
}
