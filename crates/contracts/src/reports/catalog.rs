//! Static catalog of reportable datasets and their selectable fields.
//!
//! Adding a dataset means adding an entry here; there is no runtime
//! registration.

/// Dataset identifiers offered by the report builder, in display order.
pub const DATASETS: [&str; 4] = [
    "fleet_performance",
    "fuel_efficiency",
    "maintenance_due",
    "incident_safety",
];

/// Selectable fields for a dataset, in display order.
///
/// Total over all inputs: an unknown dataset id yields an empty slice,
/// never an error.
pub fn fields(dataset: &str) -> &'static [&'static str] {
    match dataset {
        "fleet_performance" => &[
            "vessel_name",
            "vessel_type",
            "voyage_code",
            "voyage_hours",
            "cargo_tonnage",
        ],
        "fuel_efficiency" => &[
            "vessel_name",
            "voyage_code",
            "fuel_consumption_mt",
            "avg_speed_knots",
            "co2_emissions_mt",
        ],
        "maintenance_due" => &["vessel_name", "record_type", "due_date", "status", "severity"],
        "incident_safety" => &["vessel_name", "event_type", "event_date", "risk_level"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dataset_has_no_fields() {
        assert!(fields("crew_compliance").is_empty());
        assert!(fields("").is_empty());
        assert!(fields("FLEET_PERFORMANCE").is_empty());
    }

    #[test]
    fn every_listed_dataset_has_fields() {
        for dataset in DATASETS {
            assert!(!fields(dataset).is_empty(), "{dataset} has no fields");
        }
    }

    #[test]
    fn field_order_is_stable() {
        assert_eq!(
            fields("fuel_efficiency"),
            &[
                "vessel_name",
                "voyage_code",
                "fuel_consumption_mt",
                "avg_speed_knots",
                "co2_emissions_mt"
            ]
        );
        assert_eq!(fields("incident_safety").len(), 4);
    }
}
