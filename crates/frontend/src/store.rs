//! Shared UI state for the reporting screens.
//!
//! A single `ReportStore` is provided via context from [`crate::app::App`];
//! components reach it through [`use_report_store`]. Each setter replaces
//! exactly its own field. None of the setters validate input, and nothing
//! here is persisted.

use contracts::reports::ReportRole;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ReportStore {
    pub role: RwSignal<ReportRole>,
    pub dark_mode: RwSignal<bool>,
    pub selected_dataset: RwSignal<String>,
    pub selected_columns: RwSignal<Vec<String>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(ReportRole::Operations),
            dark_mode: RwSignal::new(false),
            selected_dataset: RwSignal::new("fleet_performance".to_string()),
            selected_columns: RwSignal::new(vec![
                "vessel_name".to_string(),
                "voyage_code".to_string(),
                "voyage_hours".to_string(),
                "cargo_tonnage".to_string(),
            ]),
        }
    }

    pub fn set_role(&self, role: ReportRole) {
        self.role.set(role);
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }

    /// Replaces the dataset only. The column selection is deliberately left
    /// untouched, so a stale selection can be submitted against the new
    /// dataset; the preview then shows empty cells for unknown columns.
    pub fn set_dataset(&self, dataset: impl Into<String>) {
        self.selected_dataset.set(dataset.into());
    }

    pub fn set_columns(&self, columns: Vec<String>) {
        self.selected_columns.set(columns);
    }

    pub fn toggle_column(&self, field: &str) {
        self.selected_columns
            .update(|columns| *columns = toggled_columns(columns, field));
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_report_store() -> ReportStore {
    use_context::<ReportStore>().expect("ReportStore context not found")
}

/// Set-toggle over a list representation: removing preserves the order of
/// the remaining entries, adding appends at the end. Toggling is the only
/// mutation path, so duplicates cannot occur.
pub fn toggled_columns(columns: &[String], field: &str) -> Vec<String> {
    if columns.iter().any(|c| c == field) {
        columns.iter().filter(|c| *c != field).cloned().collect()
    } else {
        let mut next = columns.to_vec();
        next.push(field.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn toggling_absent_field_appends_it() {
        let result = toggled_columns(&columns(&["vessel_name"]), "voyage_code");
        assert_eq!(result, columns(&["vessel_name", "voyage_code"]));
    }

    #[test]
    fn toggling_present_field_removes_only_it() {
        let result = toggled_columns(
            &columns(&["vessel_name", "voyage_code", "cargo_tonnage"]),
            "voyage_code",
        );
        assert_eq!(result, columns(&["vessel_name", "cargo_tonnage"]));
    }

    #[test]
    fn double_toggle_is_identity() {
        let initial = columns(&["vessel_name", "voyage_hours", "cargo_tonnage"]);
        let once = toggled_columns(&initial, "voyage_hours");
        let twice = toggled_columns(&once, "voyage_hours");
        // The field comes back at the end, order of the rest is preserved.
        assert_eq!(
            twice,
            columns(&["vessel_name", "cargo_tonnage", "voyage_hours"])
        );
        let reset = toggled_columns(&toggled_columns(&twice, "status"), "status");
        assert_eq!(reset, twice);
    }

    #[test]
    fn dataset_change_leaves_columns_untouched() {
        let store = ReportStore::new();
        let before = store.selected_columns.get_untracked();
        store.set_dataset("incident_safety");
        assert_eq!(store.selected_dataset.get_untracked(), "incident_safety");
        assert_eq!(store.selected_columns.get_untracked(), before);
    }

    #[test]
    fn dark_mode_double_toggle_restores_state() {
        let store = ReportStore::new();
        assert!(!store.dark_mode.get_untracked());
        store.toggle_dark_mode();
        assert!(store.dark_mode.get_untracked());
        store.toggle_dark_mode();
        assert!(!store.dark_mode.get_untracked());
    }
}
