//! Markdown readiness report.
//!
//! Section order is fixed. Narrative prose is static; every table and list is
//! derived from the coverage matrix, the aggregates and the table profiles.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use readiness_model::{
    Aggregates, Bucket, Catalog, CoverageMatrix, MissingTable, TableProfiles,
};

/// Blockers listed in the executive summary.
const SUMMARY_BLOCKER_LIMIT: usize = 10;
/// Rows listed in the high-null table.
const HIGH_NULL_LIMIT: usize = 10;

const TITLE: &str = "Fortza Data Readiness Assessment Report";

/// Everything the report reads. Borrowed from the finished pipeline stages.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub catalog: &'a Catalog,
    pub profiles: &'a TableProfiles,
    pub missing_tables: &'a [MissingTable],
    pub matrix: &'a CoverageMatrix,
    pub aggregates: &'a Aggregates,
    pub report_date: NaiveDate,
    pub data_source: &'a str,
}

/// Share of bucket-1 layer fields that resolved, in percent (0 decimals).
///
/// A catalog without bucket-1 layers is fully ready.
pub fn bucket1_readiness(matrix: &CoverageMatrix, catalog: &Catalog) -> u32 {
    let critical: BTreeSet<&str> = catalog
        .layers
        .iter()
        .filter(|layer| layer.bucket == Bucket::Critical)
        .flat_map(|layer| layer.required_fields.iter().map(String::as_str))
        .collect();
    if critical.is_empty() {
        return 100;
    }
    let present = matrix
        .iter()
        .filter(|row| critical.contains(row.field.as_str()) && row.status.is_present())
        .count();
    (present as f64 / critical.len() as f64 * 100.0).round() as u32
}

/// Renders the full report.
pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    render_header(&mut out, ctx);
    render_executive_summary(&mut out, ctx);
    render_table_overview(&mut out, ctx);
    render_critical_missing(&mut out, ctx);
    render_recommendations(&mut out, ctx);
    render_transformations(&mut out);
    render_high_nulls(&mut out, ctx);
    render_field_notes(&mut out);
    render_risks(&mut out);
    render_conclusion(&mut out, ctx);
    out
}

fn render_header(out: &mut String, ctx: &ReportContext<'_>) {
    out.push_str(&format!("# {TITLE}\n\n"));
    out.push_str(&format!(
        "**Generated:** {}  \n",
        ctx.report_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("**Data Source:** {}\n\n---\n\n", ctx.data_source));
}

fn render_executive_summary(out: &mut String, ctx: &ReportContext<'_>) {
    let aggregates = ctx.aggregates;
    out.push_str("## Executive Summary\n\n");
    if aggregates.bucket1_deliverable {
        out.push_str("**✅ Bucket 1 is DELIVERABLE** with current data structure.\n\n");
        out.push_str(
            "All required fields for Fortza's core fraud detection layers are present in the \
             provided CSVs. However, some transformations and data quality improvements are \
             needed.\n\n",
        );
    } else {
        out.push_str("**⚠️ Bucket 1 is PARTIALLY BLOCKED**\n\n");
        out.push_str("The following critical fields are missing for Bucket 1 delivery:\n\n");
        out.push_str("| Missing Field | Blocking Layer |\n|--------------|----------------|\n");
        for blocker in aggregates.bucket1_blockers.iter().take(SUMMARY_BLOCKER_LIMIT) {
            out.push_str(&format!("| `{}` | {} |\n", blocker.field, blocker.layer));
        }
        out.push('\n');
    }

    out.push_str("### Field Coverage Summary\n\n");
    out.push_str("| Metric | Count |\n|--------|-------|\n");
    out.push_str(&format!("| **Present** | {} |\n", aggregates.present_count));
    out.push_str(&format!("| **Missing** | {} |\n", aggregates.missing_count));
    out.push_str(&format!(
        "| **Low Quality (>50% nulls)** | {} |\n",
        aggregates.low_quality_count
    ));
    out.push_str(&format!(
        "| **Total Required Fields** | {} |\n\n---\n\n",
        aggregates.total_count
    ));
}

fn render_table_overview(out: &mut String, ctx: &ReportContext<'_>) {
    out.push_str("## CSV Data Overview\n\n");
    for table_id in &ctx.catalog.tables {
        out.push_str(&format!("### {table_id}\n"));
        if let Some(profile) = ctx.profiles.get(table_id) {
            out.push_str(&format!("- **Rows:** {}\n", profile.row_count));
            out.push_str(&format!("- **Columns:** {}\n\n", profile.column_count()));
        } else {
            let reason = ctx
                .missing_tables
                .iter()
                .find(|missing| &missing.table_id == table_id)
                .map_or("not provided", |missing| missing.reason.as_str());
            out.push_str(&format!("- **Status:** not available ({reason})\n\n"));
        }
    }
    out.push_str("---\n\n");
}

fn render_critical_missing(out: &mut String, ctx: &ReportContext<'_>) {
    out.push_str("## Critical Missing Fields for Bucket 1\n\n");
    let blockers = &ctx.aggregates.bucket1_blockers;
    if blockers.is_empty() {
        out.push_str("No critical missing fields for Bucket 1.\n");
    } else {
        out.push_str("| Field | Affected Layer | Suggested Source |\n");
        out.push_str("|-------|---------------|------------------|\n");
        let mut seen = BTreeSet::new();
        for blocker in blockers {
            if !seen.insert(blocker.field.as_str()) {
                continue;
            }
            let suggested = ctx
                .catalog
                .expectation(&blocker.field)
                .map_or("N/A", |expectation| expectation.suggested_source.as_str());
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                blocker.field, blocker.layer, suggested
            ));
        }
    }
    out.push_str("\n\n---\n\n");
}

fn render_recommendations(out: &mut String, ctx: &ReportContext<'_>) {
    let aggregates = ctx.aggregates;
    out.push_str("## Recommendations: Fields to Request from Client\n\n");
    out.push_str("### Bucket 1 - Required for Core Fraud Detection\n\n");
    let ip_missing = ctx
        .matrix
        .row("ip")
        .is_some_and(|row| !row.status.is_present());
    if ip_missing {
        out.push_str(
            "- **IP Address (`ip`)**: Request from Order or custom session tracking object. \
             Critical for IP Address Layer (VPN/proxy detection).\n",
        );
    }
    for blocker in aggregates
        .bucket1_blockers
        .iter()
        .filter(|blocker| blocker.field != "ip")
    {
        out.push_str(&format!(
            "- **`{}`**: Required by {}.\n",
            blocker.field, blocker.layer
        ));
    }
    out.push_str(
        "\n> **Note:** Most Bucket 1 fields are present but require transformations (see below).\n\n",
    );

    out.push_str("### Bucket 2 - Low-Hanging Fruit (Quick Wins)\n\n");
    for field in &aggregates.bucket2_fields {
        let (description, source) = expectation_text(ctx.catalog, field);
        out.push_str(&format!(
            "- **`{field}`**: {description}. Suggested source: {source}\n"
        ));
    }
    if aggregates.bucket2_fields.is_empty() {
        out.push_str("All Bucket 2 fields are present or can be derived.\n");
    }

    out.push_str("\n### Bucket 3 - Long-Term / External Data Needs\n\n");
    for field in &aggregates.bucket3_fields {
        let (description, source) = expectation_text(ctx.catalog, field);
        out.push_str(&format!("- **`{field}`**: {description}. Source: {source}\n"));
    }
    if aggregates.bucket3_fields.is_empty() {
        out.push_str("All Bucket 3 fields need custom implementation.\n");
    }
    out.push_str("\n\n---\n\n");
}

fn expectation_text<'a>(catalog: &'a Catalog, field: &str) -> (&'a str, &'a str) {
    catalog.expectation(field).map_or(("", "TBD"), |expectation| {
        (
            expectation.description.as_str(),
            expectation.suggested_source.as_str(),
        )
    })
}

fn render_transformations(out: &mut String) {
    out.push_str(
        "## Transformations Required

| Field | Transformation |
|-------|---------------|
| `customer_name` | Derive from FirstName + LastName or join with Contact |
| `email` | Normalize to lowercase |
| `cust_street/city/state/zip` | Parse multi-line addresses; normalize abbreviations (Ave → Avenue) |
| `salesperson_name` | Join with User object using OwnerId |
| `dealer_name` | Join with Account object using POE_Dealer__c reference |
| `order_date` | Standardize date format from multiple source fields |
| `install_to_activation_days` | Derive: `ActivatedDate - POE_InstallationDate__c` |

---

",
    );
}

fn render_high_nulls(out: &mut String, ctx: &ReportContext<'_>) {
    out.push_str("## Data Quality Observations\n\n### High-Null Fields (>50%)\n");
    let rows: Vec<_> = ctx
        .matrix
        .iter()
        .filter(|row| row.is_high_null())
        .take(HIGH_NULL_LIMIT)
        .collect();
    if rows.is_empty() {
        out.push_str("No critical high-null fields detected in the sample data.\n");
    } else {
        out.push_str("| Field | Null % | Source |\n|-------|--------|--------|\n");
        for row in rows {
            let pct = row.null_percentage.unwrap_or_default();
            let source = row
                .resolved_source
                .as_ref()
                .map_or("", |source| source.table_id.as_str());
            out.push_str(&format!("| `{}` | {pct:.1}% | {source} |\n", row.field));
        }
    }
    out.push_str("\n\n---\n\n");
}

fn render_field_notes(out: &mut String) {
    out.push_str(
        "## Agent/Dealer/Program Field Mappings

### Agent (Salesperson) Fields
- `OwnerId` → Requires User object join for name
- `SalesRep__c` (Order) → Direct agent reference
- `Lead_Owner__c`, `Owner__c` (Lead) → Agent assignment

### Dealer Fields
- `POE_Dealer__c` (Order, Opportunity) → Dealer account ID
- `Account.POE_Dealer_Code__c` → Dealer code
- `Account.Name` (filtered by Type) → Dealer name

### Program/Channel Fields
- `POE_Program__c` (Order) → Program name (Frontier, EarthLink, Charter/Spectrum)
- `Division__c` (Lead, Account) → Sales division (DOM, etc.)
- `Call_Center_Type__c` (Order) → Channel type
- `POE_RepTitle__c` (Order) → Rep title/role

> **⚠️ Ambiguity:** Confirm with client whether Account records represent dealers or customers. \
In this data, Account appears to be customer-centric with dealer references in POE fields.

---

",
    );
}

fn render_risks(out: &mut String) {
    out.push_str(
        "## Risks & Assumptions

1. **Dummy Data Limitations**: This is sample data; production data may have different field population rates.
2. **IP Address Gap**: IP address field is sparsely populated in Lead (`Fortza__IP_Address__c`). \
Client should confirm if IPs are captured during order submission.
3. **User Object Missing**: Salesperson names require User object export (not provided).
4. **Historical Depth Unknown**: Cannot assess seasonality or pattern detection with only a few records per file.
5. **Label Data Missing**: No `is_fraud` or `is_suspicious` labels present for model training (Bucket 3 requirement).

---

",
    );
}

fn render_conclusion(out: &mut String, ctx: &ReportContext<'_>) {
    let readiness = bucket1_readiness(ctx.matrix, ctx.catalog);
    out.push_str("## Conclusion\n\n");
    if ctx.aggregates.bucket1_deliverable {
        out.push_str(&format!(
            "**Bucket 1 Readiness: {readiness}%** - Core fields present, transformations needed.\n\n"
        ));
    } else {
        let mut blocked = BTreeSet::new();
        for blocker in &ctx.aggregates.bucket1_blockers {
            blocked.insert(blocker.field.as_str());
        }
        out.push_str(&format!(
            "**Bucket 1 Readiness: {readiness}%** - {} critical field(s) missing, \
             transformations needed.\n\n",
            blocked.len()
        ));
    }
    out.push_str(
        "**Next Steps:**
1. Request IP address capture at order submission
2. Export User object for salesperson name resolution
3. Confirm agent/dealer/program field mappings with client
4. Request historical data (1+ year, 10k+ records) with fraud labels for Bucket 2/3
",
    );
}

#[cfg(test)]
mod tests {
    use readiness_model::{Bucket1Blocker, CoverageRow, Layer, SourceRef, TableProfile};

    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            tables: vec!["Lead.csv".to_string(), "Order.csv".to_string()],
            layers: vec![Layer {
                name: "IP Address Layer".to_string(),
                purpose: "VPN/proxy detection".to_string(),
                bucket: Bucket::Critical,
                required_fields: vec!["ip".to_string(), "devicename".to_string()],
            }],
            ..Catalog::default()
        }
    }

    fn matrix() -> CoverageMatrix {
        CoverageMatrix {
            rows: vec![
                CoverageRow::resolved(
                    "devicename",
                    vec!["IP Address Layer (Layer)".to_string()],
                    SourceRef {
                        table_id: "Lead.csv".to_string(),
                        column: "Fortza__Device_Name__c".to_string(),
                    },
                    62.0,
                ),
                CoverageRow::missing("ip", vec!["IP Address Layer (Layer)".to_string()]),
            ],
        }
    }

    fn aggregates() -> Aggregates {
        Aggregates {
            bucket1_blockers: vec![Bucket1Blocker {
                field: "ip".to_string(),
                layer: "IP Address Layer".to_string(),
            }],
            high_null_fields: vec!["devicename".to_string()],
            present_count: 1,
            missing_count: 1,
            low_quality_count: 1,
            total_count: 2,
            bucket1_deliverable: false,
            ..Aggregates::default()
        }
    }

    fn render(catalog: &Catalog, matrix: &CoverageMatrix, aggregates: &Aggregates) -> String {
        let profiles: TableProfiles = [(
            "Lead.csv".to_string(),
            TableProfile::new("Lead.csv", 6, vec![]),
        )]
        .into_iter()
        .collect();
        let missing = [MissingTable {
            table_id: "Order.csv".to_string(),
            reason: "file not found".to_string(),
        }];
        render_report(&ReportContext {
            catalog,
            profiles: &profiles,
            missing_tables: &missing,
            matrix,
            aggregates,
            report_date: NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            data_source: "Salesforce Export",
        })
    }

    #[test]
    fn sections_appear_in_order() {
        let report = render(&catalog(), &matrix(), &aggregates());
        let headings = [
            "# Fortza Data Readiness Assessment Report",
            "## Executive Summary",
            "### Field Coverage Summary",
            "## CSV Data Overview",
            "## Critical Missing Fields for Bucket 1",
            "## Recommendations: Fields to Request from Client",
            "## Transformations Required",
            "### High-Null Fields (>50%)",
            "## Agent/Dealer/Program Field Mappings",
            "## Risks & Assumptions",
            "## Conclusion",
        ];
        let mut cursor = 0;
        for heading in headings {
            let offset = report[cursor..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
            cursor += offset + heading.len();
        }
    }

    #[test]
    fn blocked_report_lists_blockers_and_ip_request() {
        let report = render(&catalog(), &matrix(), &aggregates());
        assert!(report.contains("**Generated:** 2025-12-24"));
        assert!(report.contains("**⚠️ Bucket 1 is PARTIALLY BLOCKED**"));
        assert!(report.contains("| `ip` | IP Address Layer |\n"));
        assert!(report.contains("| `ip` | IP Address Layer | N/A |"));
        assert!(report.contains("- **IP Address (`ip`)**"));
        assert!(report.contains("| `devicename` | 62.0% | Lead.csv |"));
        assert!(report.contains("### Order.csv\n- **Status:** not available (file not found)"));
        assert!(report.contains("**Bucket 1 Readiness: 50%**"));
    }

    #[test]
    fn deliverable_report_uses_positive_summary() {
        let aggregates = Aggregates {
            present_count: 2,
            total_count: 2,
            bucket1_deliverable: true,
            ..Aggregates::default()
        };
        let report = render(&catalog(), &CoverageMatrix::default(), &aggregates);
        assert!(report.contains("**✅ Bucket 1 is DELIVERABLE**"));
        assert!(report.contains("No critical missing fields for Bucket 1."));
        assert!(report.contains("All Bucket 2 fields are present or can be derived."));
        assert!(report.contains("No critical high-null fields detected"));
    }

    #[test]
    fn long_lists_are_capped_at_ten_in_matrix_order() {
        let fields: Vec<String> = (0..12).map(|idx| format!("field_{idx:02}")).collect();
        let matrix = CoverageMatrix {
            rows: fields
                .iter()
                .map(|field| {
                    CoverageRow::resolved(
                        field.as_str(),
                        vec![],
                        SourceRef {
                            table_id: "Lead.csv".to_string(),
                            column: field.clone(),
                        },
                        80.0,
                    )
                })
                .collect(),
        };
        let aggregates = Aggregates {
            bucket1_blockers: fields
                .iter()
                .map(|field| Bucket1Blocker {
                    field: field.clone(),
                    layer: "IP Address Layer".to_string(),
                })
                .collect(),
            total_count: 12,
            bucket1_deliverable: false,
            ..Aggregates::default()
        };
        let report = render(&catalog(), &matrix, &aggregates);

        let (summary, rest) = report.split_once("### Field Coverage Summary").unwrap();
        let summary_rows: Vec<&str> = summary
            .lines()
            .filter(|line| line.starts_with("| `field_"))
            .collect();
        let expected: Vec<String> = fields[..10]
            .iter()
            .map(|field| format!("| `{field}` | IP Address Layer |"))
            .collect();
        assert_eq!(summary_rows, expected);

        let high_nulls = rest.split_once("### High-Null Fields (>50%)").unwrap().1;
        let high_nulls = high_nulls.split_once("---").unwrap().0;
        let high_null_rows: Vec<&str> = high_nulls
            .lines()
            .filter(|line| line.starts_with("| `field_"))
            .collect();
        let expected: Vec<String> = fields[..10]
            .iter()
            .map(|field| format!("| `{field}` | 80.0% | Lead.csv |"))
            .collect();
        assert_eq!(high_null_rows, expected);
    }

    #[test]
    fn readiness_without_critical_layers_is_full() {
        assert_eq!(bucket1_readiness(&matrix(), &Catalog::default()), 100);
        assert_eq!(bucket1_readiness(&matrix(), &catalog()), 50);
    }
}
