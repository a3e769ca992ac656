//! API client for the reporting backend.

use contracts::reports::{RunReportRequest, RunReportResponse, SaveTemplateResponse, SavedTemplate};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Execute a report query and return the preview page.
pub async fn run_report(request: &RunReportRequest) -> Result<RunReportResponse, String> {
    let response = Request::post(&api_url("/api/reports/run"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// List saved report templates.
pub async fn list_templates() -> Result<Vec<SavedTemplate>, String> {
    let response = Request::get(&api_url("/api/reports/templates"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Save the current report configuration as a template.
pub async fn save_template(template: &SavedTemplate) -> Result<SaveTemplateResponse, String> {
    let response = Request::post(&api_url("/api/reports/templates"))
        .json(template)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| e.to_string())
}
