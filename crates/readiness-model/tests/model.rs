//! Tests for readiness-model types.

use readiness_model::{
    Aggregates, Bucket, Bucket1Blocker, Catalog, ClientExpectation, CoverageRow, CoverageStatus,
    SourceRef,
};

#[test]
fn bucket_serializes_as_level() {
    let expectation = ClientExpectation {
        field: "territory".to_string(),
        description: "Agent/dealer territory for authorization".to_string(),
        bucket: Bucket::LongTerm,
        suggested_source: "Account.Territory__c".to_string(),
    };
    let json = serde_json::to_value(&expectation).expect("serialize expectation");
    assert_eq!(json["bucket"], 3);
}

#[test]
fn bucket_rejects_out_of_range_level() {
    let result: Result<Bucket, _> = serde_json::from_str("4");
    assert!(result.is_err());
}

#[test]
fn resolved_row_status_follows_null_percentage() {
    let source = SourceRef {
        table_id: "Lead.csv".to_string(),
        column: "Fortza__Device_Name__c".to_string(),
    };
    let row = CoverageRow::resolved("devicename", vec![], source.clone(), 62.0);
    assert_eq!(row.status, CoverageStatus::PresentLowQuality);
    assert_eq!(row.resolved_source, Some(source));
    assert!(row.is_high_null());
}

#[test]
fn referenced_by_label_joins_with_semicolons() {
    let row = CoverageRow::missing(
        "email",
        vec![
            "Gilbert Layer (Layer)".to_string(),
            "Word Cloud Email (Layer)".to_string(),
        ],
    );
    assert_eq!(
        row.referenced_by_label(),
        "Gilbert Layer (Layer); Word Cloud Email (Layer)"
    );
}

#[test]
fn catalog_lookups_by_field() {
    let catalog = Catalog {
        expectations: vec![ClientExpectation {
            field: "agent_id".to_string(),
            description: "Agent/salesperson identifier".to_string(),
            bucket: Bucket::NearTerm,
            suggested_source: "Order.SalesRep__c, OwnerId".to_string(),
        }],
        ..Catalog::default()
    };
    assert!(catalog.expectation("agent_id").is_some());
    assert!(catalog.expectation("agent_email").is_none());
    assert!(catalog.mapping("agent_id").is_none());
}

#[test]
fn aggregates_blocker_lookup() {
    let aggregates = Aggregates {
        bucket1_blockers: vec![Bucket1Blocker {
            field: "gender".to_string(),
            layer: "AI Prompt Layer".to_string(),
        }],
        ..Aggregates::default()
    };
    assert!(aggregates.is_blocker("gender"));
    assert!(!aggregates.is_blocker("email"));
}
