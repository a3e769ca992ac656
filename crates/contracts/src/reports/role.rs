//! Viewer roles for report access.

use serde::{Deserialize, Serialize};

/// Role selected in the top bar and stamped onto saved templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRole {
    #[default]
    Operations,
    Compliance,
    Executive,
    ShipOfficer,
}

impl ReportRole {
    /// Wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRole::Operations => "operations",
            ReportRole::Compliance => "compliance",
            ReportRole::Executive => "executive",
            ReportRole::ShipOfficer => "ship_officer",
        }
    }

    /// Display name for the role selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportRole::Operations => "Operations Team",
            ReportRole::Compliance => "Compliance Officer",
            ReportRole::Executive => "Executive",
            ReportRole::ShipOfficer => "Ship Officer",
        }
    }

    /// Parse a raw option value. Unknown strings fall back to the default
    /// role; the selector only ever offers the four valid values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "compliance" => ReportRole::Compliance,
            "executive" => ReportRole::Executive,
            "ship_officer" => ReportRole::ShipOfficer,
            _ => ReportRole::Operations,
        }
    }

    pub fn all() -> [ReportRole; 4] {
        [
            ReportRole::Operations,
            ReportRole::Compliance,
            ReportRole::Executive,
            ReportRole::ShipOfficer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for role in ReportRole::all() {
            assert_eq!(ReportRole::from_str(role.as_str()), role);
            let encoded = serde_json::to_value(role).unwrap();
            assert_eq!(encoded, serde_json::json!(role.as_str()));
        }
    }

    #[test]
    fn unknown_value_falls_back_to_operations() {
        assert_eq!(ReportRole::from_str("captain"), ReportRole::Operations);
        assert_eq!(ReportRole::from_str(""), ReportRole::Operations);
    }
}
