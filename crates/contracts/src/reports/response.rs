//! Response body of the report execution endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record returned by the backend, keyed by field name.
///
/// Display order is dictated by the selected columns, not by the map, so an
/// unordered map is sufficient here.
pub type PreviewRow = HashMap<String, CellValue>;

/// Response of `POST /api/reports/run`.
///
/// Only `rows` is required; the paging echo is tolerated but optional so a
/// minimal `{"rows": [...]}` body still parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReportResponse {
    pub rows: Vec<PreviewRow>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

/// Value in a preview table cell.
///
/// Closed scalar set; anything else in a response row is a contract
/// violation and fails deserialization of the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Text rendered into the preview table cell. `Null` renders empty.
    pub fn display(&self) -> String {
        match self {
            CellValue::Integer(n) => n.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Null => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_body_parses() {
        let response: RunReportResponse =
            serde_json::from_value(json!({ "rows": [] })).unwrap();
        assert!(response.rows.is_empty());
        assert_eq!(response.total_rows, 0);
    }

    #[test]
    fn row_values_decode_into_closed_scalar_set() {
        let response: RunReportResponse = serde_json::from_value(json!({
            "rows": [{
                "vessel_name": "MV Atlas",
                "voyage_hours": 117.5,
                "cargo_tonnage": 4800,
                "completed_date": null,
            }]
        }))
        .unwrap();

        let row = &response.rows[0];
        assert_eq!(row["vessel_name"], CellValue::Text("MV Atlas".to_string()));
        assert_eq!(row["voyage_hours"], CellValue::Number(117.5));
        assert_eq!(row["cargo_tonnage"], CellValue::Integer(4800));
        assert_eq!(row["completed_date"], CellValue::Null);
    }

    #[test]
    fn display_renders_null_as_empty() {
        assert_eq!(CellValue::Text("V-102".to_string()).display(), "V-102");
        assert_eq!(CellValue::Integer(488).display(), "488");
        assert_eq!(CellValue::Number(0.84).display(), "0.84");
        assert_eq!(CellValue::Null.display(), "");
    }
}
