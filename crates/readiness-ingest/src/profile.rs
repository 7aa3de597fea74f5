//! Column profiling: null counts, type tags and sample values.

use tracing::warn;

use readiness_model::{ColumnProfile, ColumnType, MAX_SAMPLE_VALUES, TableProfile};

use crate::reader::RawTable;

/// Cell spellings that count as missing, compared case-sensitively after trimming.
const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "-NaN", "-nan", "#N/A", "#NA",
    "<NA>", "None",
];

/// True when the cell holds no value.
pub fn is_null_cell(value: &str) -> bool {
    NULL_TOKENS.contains(&value.trim())
}

/// Null share in percent, rounded to one decimal place.
pub fn null_percentage(null_count: usize, row_count: usize) -> f64 {
    if row_count == 0 {
        return 0.0;
    }
    let pct = null_count as f64 / row_count as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

#[derive(Debug, Default, Clone, Copy)]
struct TypeStats {
    non_null: usize,
    integer: usize,
    float: usize,
    boolean: usize,
}

impl TypeStats {
    fn observe(&mut self, value: &str) {
        self.non_null += 1;
        if value.parse::<i64>().is_ok() {
            self.integer += 1;
        }
        if value.parse::<f64>().is_ok() {
            self.float += 1;
        }
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            self.boolean += 1;
        }
    }

    fn column_type(self) -> ColumnType {
        if self.non_null == 0 {
            ColumnType::Empty
        } else if self.integer == self.non_null {
            ColumnType::Integer
        } else if self.float == self.non_null {
            ColumnType::Float
        } else if self.boolean == self.non_null {
            ColumnType::Boolean
        } else {
            ColumnType::String
        }
    }
}

/// Profiles every column of a parsed table.
///
/// Repeated header names keep their first column; later ones are dropped.
pub fn profile_table(table_id: &str, table: &RawTable) -> TableProfile {
    let row_count = table.rows.len();
    let mut columns = Vec::with_capacity(table.headers.len());
    for (col_idx, header) in table.headers.iter().enumerate() {
        if table.headers[..col_idx].contains(header) {
            warn!(table_id, column = %header, "duplicate column name, keeping first");
            continue;
        }
        let mut stats = TypeStats::default();
        let mut sample_values = Vec::with_capacity(MAX_SAMPLE_VALUES);
        for row in &table.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            if is_null_cell(value) {
                continue;
            }
            let trimmed = value.trim();
            stats.observe(trimmed);
            if sample_values.len() < MAX_SAMPLE_VALUES {
                sample_values.push(trimmed.to_string());
            }
        }
        let null_count = row_count - stats.non_null;
        columns.push(ColumnProfile {
            name: header.clone(),
            column_type: stats.column_type(),
            null_count,
            null_percentage: null_percentage(null_count, row_count),
            sample_values,
        });
    }
    TableProfile::new(table_id, row_count, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn counts_empty_and_whitespace_as_null() {
        let raw = table(&["Email"], &[&["a@x.com"], &[""], &["   "], &["NULL"]]);
        let profile = profile_table("Contact.csv", &raw);
        let email = profile.column("Email").unwrap();
        assert_eq!(email.null_count, 3);
        assert_eq!(email.null_percentage, 75.0);
        assert_eq!(email.sample_values, vec!["a@x.com"]);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(null_percentage(1, 3), 33.3);
        assert_eq!(null_percentage(2, 3), 66.7);
        assert_eq!(null_percentage(0, 0), 0.0);
    }

    #[test]
    fn keeps_first_three_samples() {
        let raw = table(&["City"], &[&["A"], &[""], &["B"], &["C"], &["D"]]);
        let profile = profile_table("Lead.csv", &raw);
        assert_eq!(profile.column("City").unwrap().sample_values, vec!["A", "B", "C"]);
    }

    #[test]
    fn infers_column_types() {
        let raw = table(
            &["Count", "Amount", "Flag", "Name", "Blank"],
            &[&["1", "1.5", "true", "Ann", ""], &["2", "3", "False", "7", ""]],
        );
        let profile = profile_table("Order.csv", &raw);
        let types: Vec<ColumnType> = profile.columns().iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Boolean,
                ColumnType::String,
                ColumnType::Empty,
            ]
        );
    }

    #[test]
    fn duplicate_headers_keep_first_column() {
        let raw = table(&["Email", "Email"], &[&["a@x.com", ""]]);
        let profile = profile_table("Lead.csv", &raw);
        assert_eq!(profile.column_count(), 1);
        assert_eq!(profile.column("Email").unwrap().null_count, 0);
    }
}
