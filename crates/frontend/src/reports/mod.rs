//! Dynamic report building against the reporting backend.

pub mod api;
pub mod ui;

use contracts::reports::{CellValue, PreviewRow, RunReportRequest, SortDirection};

/// Page size submitted for every live preview.
pub const PREVIEW_PAGE_SIZE: u32 = 25;

/// Build the query payload for a live preview of the first page.
///
/// Filters, grouping and aggregations belong to the wider backend contract
/// and are always submitted empty by this UI.
pub fn build_run_request(dataset: &str, columns: &[String]) -> RunReportRequest {
    RunReportRequest {
        dataset: dataset.to_string(),
        columns: columns.to_vec(),
        page: 1,
        page_size: PREVIEW_PAGE_SIZE,
        filters: vec![],
        group_by: vec![],
        aggregations: vec![],
        sort_by: None,
        sort_direction: SortDirection::default(),
    }
}

/// Text for one preview table cell. A column missing from the row renders
/// as an empty cell, which is what a stale column selection produces after
/// a dataset switch.
pub fn cell_text(row: &PreviewRow, column: &str) -> String {
    row.get(column).map(CellValue::display).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_payload_matches_backend_contract_exactly() {
        let columns = vec!["vessel_name".to_string(), "voyage_code".to_string()];
        let request = build_run_request("fuel_efficiency", &columns);

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "dataset": "fuel_efficiency",
                "columns": ["vessel_name", "voyage_code"],
                "page": 1,
                "page_size": 25,
                "filters": [],
                "group_by": [],
                "aggregations": [],
            })
        );
    }

    #[test]
    fn response_row_renders_in_column_order() {
        let row: PreviewRow = serde_json::from_value(json!({
            "vessel_name": "MV Atlas",
            "voyage_code": "V-102",
        }))
        .unwrap();

        let columns = ["vessel_name", "voyage_code"];
        let cells: Vec<String> = columns.iter().map(|c| cell_text(&row, c)).collect();
        assert_eq!(cells, vec!["MV Atlas", "V-102"]);
    }

    #[test]
    fn missing_column_renders_empty_cell() {
        let row: PreviewRow =
            serde_json::from_value(json!({ "vessel_name": "MV Atlas" })).unwrap();
        assert_eq!(cell_text(&row, "fuel_consumption_mt"), "");
    }
}
