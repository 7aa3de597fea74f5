//! Integration tests for the mapping document and output files.

use readiness_model::{CoverageMatrix, CoverageRow, SourceRef};
use readiness_report::{
    MAPPING_FILE_NAME, MappingRecord, REPORT_FILE_NAME, build_mapping_document, mapping_json,
    write_outputs,
};

fn test_matrix() -> CoverageMatrix {
    let email = CoverageRow::resolved(
        "email",
        vec!["Gilbert Layer (Layer)".to_string()],
        SourceRef {
            table_id: "Contact.csv".to_string(),
            column: "Email".to_string(),
        },
        5.0,
    )
    .with_notes("Contact.Email")
    .with_transform(Some("Normalize to lowercase".to_string()));
    let ip = CoverageRow::missing(
        "ip",
        vec![
            "IP Address Layer (Layer)".to_string(),
            "Client Expectation: Origin IP address".to_string(),
        ],
    )
    .with_notes("Suggested source: Order, LoginHistory");
    CoverageMatrix {
        rows: vec![email, ip],
    }
}

#[test]
fn test_mapping_document_snapshot() {
    let records = build_mapping_document(&test_matrix());
    let json = mapping_json(&records).expect("serialize mapping document");
    insta::assert_snapshot!("mapping_document", json);
}

#[test]
fn test_mapping_document_keeps_matrix_order() {
    let records = build_mapping_document(&test_matrix());
    let fields: Vec<&str> = records
        .iter()
        .map(|record| record.expected_field.as_str())
        .collect();
    assert_eq!(fields, vec!["email", "ip"]);
}

#[test]
fn test_write_outputs_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("output");
    let records = build_mapping_document(&test_matrix());

    let paths = write_outputs(&out_dir, &records, "# Report\n").unwrap();

    assert_eq!(paths.mapping, out_dir.join(MAPPING_FILE_NAME));
    assert_eq!(paths.report, out_dir.join(REPORT_FILE_NAME));
    let written = std::fs::read_to_string(&paths.mapping).unwrap();
    let parsed: Vec<MappingRecord> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, records);
    assert_eq!(
        parsed[1].fortza_layer_or_expectation,
        "IP Address Layer (Layer); Client Expectation: Origin IP address"
    );
    assert_eq!(std::fs::read_to_string(&paths.report).unwrap(), "# Report\n");
}
