//! Request body for the report execution endpoint.

use serde::{Deserialize, Serialize};

/// Query payload POSTed to `/api/reports/run`.
///
/// The filter, grouping, aggregation and sorting clauses belong to the wider
/// backend contract; the report builder UI always submits them empty or
/// unset. Optional members are skipped during serialization so the minimal
/// payload stays exactly `{dataset, columns, page, page_size, filters,
/// group_by, aggregations}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReportRequest {
    pub dataset: String,
    pub columns: Vec<String>,
    pub page: u32,
    pub page_size: u32,
    pub filters: Vec<FilterClause>,
    pub group_by: Vec<String>,
    pub aggregations: Vec<AggregationClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "SortDirection::is_default")]
    pub sort_direction: SortDirection,
}

/// One WHERE-style condition on a dataset field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: String,
    pub operator: FilterOperator,
    /// Scalar for comparisons, list for `in`, pair for `between`.
    pub value: serde_json::Value,
}

/// Comparison operators understood by the reporting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "between")]
    Between,
}

/// One aggregated output column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationClause {
    pub field: String,
    pub function: AggregateFunction,
    pub alias: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn is_default(&self) -> bool {
        *self == SortDirection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_request() -> RunReportRequest {
        RunReportRequest {
            dataset: "fuel_efficiency".to_string(),
            columns: vec!["vessel_name".to_string(), "voyage_code".to_string()],
            page: 1,
            page_size: 25,
            filters: vec![],
            group_by: vec![],
            aggregations: vec![],
            sort_by: None,
            sort_direction: SortDirection::default(),
        }
    }

    #[test]
    fn minimal_payload_has_exact_wire_shape() {
        let value = serde_json::to_value(minimal_request()).unwrap();
        assert_eq!(
            value,
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
    fn sort_fields_appear_only_when_set() {
        let mut request = minimal_request();
        request.sort_by = Some("voyage_code".to_string());
        request.sort_direction = SortDirection::Desc;

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["sort_by"], json!("voyage_code"));
        assert_eq!(value["sort_direction"], json!("desc"));
    }

    #[test]
    fn filter_operators_use_backend_spellings() {
        let clause = FilterClause {
            field: "risk_level".to_string(),
            operator: FilterOperator::Gte,
            value: json!(3),
        };
        let value = serde_json::to_value(clause).unwrap();
        assert_eq!(value["operator"], json!(">="));

        let contains: FilterOperator = serde_json::from_value(json!("contains")).unwrap();
        assert_eq!(contains, FilterOperator::Contains);
    }

    #[test]
    fn aggregate_functions_are_lowercase() {
        let clause = AggregationClause {
            field: "cargo_tonnage".to_string(),
            function: AggregateFunction::Sum,
            alias: "total_tonnage".to_string(),
        };
        let value = serde_json::to_value(clause).unwrap();
        assert_eq!(value["function"], json!("sum"));
    }
}
