//! Integration tests for table discovery and profiling.

use std::fs;
use std::path::Path;

use readiness_ingest::{
    IngestError, list_table_files, profile_declared_tables, profile_table_file,
};

fn write(dir: &Path, name: &str, contents: &[u8]) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn lists_csv_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Order.csv", b"Id\n1\n");
    write(dir.path(), "Account.CSV", b"Id\n1\n");
    write(dir.path(), "notes.txt", b"ignore me");
    fs::create_dir(dir.path().join("nested.csv")).unwrap();

    let files = list_table_files(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Account.CSV", "Order.csv"]);
}

#[test]
fn list_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = list_table_files(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn profiles_a_latin1_semicolon_export() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Lead.csv",
        b"Email;City;Fortza__Device_Name__c\na@x.com;Montr\xE9al;\n;Qu\xE9bec;Pixel\n",
    );
    let profile = profile_table_file(&dir.path().join("Lead.csv")).unwrap();
    assert_eq!(profile.table_id, "Lead.csv");
    assert_eq!(profile.row_count, 2);
    assert_eq!(profile.column_count(), 3);
    let city = profile.column("City").unwrap();
    assert_eq!(city.sample_values, vec!["Montréal", "Québec"]);
    assert_eq!(profile.column("Email").unwrap().null_percentage, 50.0);
}

#[test]
fn declared_tables_tolerate_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Contact.csv", b"Email\na@x.com\n");
    let tables = vec!["Account.csv".to_string(), "Contact.csv".to_string()];

    let outcome = profile_declared_tables(dir.path(), &tables).unwrap();
    assert_eq!(outcome.profiles.len(), 1);
    assert!(outcome.profiles.contains_key("Contact.csv"));
    assert_eq!(outcome.missing.len(), 1);
    assert_eq!(outcome.missing[0].table_id, "Account.csv");
    assert!(outcome.missing[0].reason.contains("not found"));
}

#[test]
fn empty_file_is_reported_missing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Order.csv", b"");
    let tables = vec!["Order.csv".to_string()];
    let outcome = profile_declared_tables(dir.path(), &tables).unwrap();
    assert!(outcome.profiles.is_empty());
    assert!(outcome.missing[0].reason.contains("empty"));
}

#[test]
fn profiles_a_comma_export_with_short_rows() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Contact.csv",
        b"Id,Email,MailingCity\n1,a@x.com,Austin\n2,b@x.com\n3\n",
    );
    let profile = profile_table_file(&dir.path().join("Contact.csv")).unwrap();
    assert_eq!(profile.row_count, 3);
    assert_eq!(profile.column_count(), 3);
    let city = profile.column("MailingCity").unwrap();
    assert_eq!(city.null_count, 2);
    assert_eq!(city.null_percentage, 66.7);
    assert_eq!(profile.column("Email").unwrap().null_count, 1);
}
