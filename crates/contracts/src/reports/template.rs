//! Saved report templates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::RunReportRequest;
use super::role::ReportRole;

/// A named report configuration stored on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub config: RunReportRequest,
    pub access_role: ReportRole,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement of `POST /api/reports/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTemplateResponse {
    pub saved: bool,
    /// Total number of stored templates after the save.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_wire_shape() {
        let template = SavedTemplate {
            id: Uuid::nil(),
            name: "Weekly fuel".to_string(),
            description: None,
            config: RunReportRequest {
                dataset: "fuel_efficiency".to_string(),
                columns: vec!["vessel_name".to_string()],
                page: 1,
                page_size: 25,
                filters: vec![],
                group_by: vec![],
                aggregations: vec![],
                sort_by: None,
                sort_direction: Default::default(),
            },
            access_role: ReportRole::Compliance,
            created_at: DateTime::UNIX_EPOCH,
        };

        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["access_role"], json!("compliance"));
        assert_eq!(value["config"]["dataset"], json!("fuel_efficiency"));
        // An empty description is omitted, not serialized as null.
        assert!(value.get("description").is_none());

        let decoded: SavedTemplate = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, template);
    }
}
