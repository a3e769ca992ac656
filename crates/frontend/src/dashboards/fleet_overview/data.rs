//! Embedded sample series for the overview panel.
//!
//! Fixed demonstration values; the panel has no store or network inputs.

pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        label: "Active Vessels",
        value: "54",
        icon: "ship",
    },
    Kpi {
        label: "Open Compliance Alerts",
        value: "117",
        icon: "alert-triangle",
    },
    Kpi {
        label: "Average Fuel / NM",
        value: "0.84",
        icon: "droplet",
    },
    Kpi {
        label: "Voyages This Month",
        value: "488",
        icon: "route",
    },
];

pub struct TrendPoint {
    pub month: &'static str,
    pub fuel: f64,
    pub fleet: f64,
}

pub const MONTHLY_TREND: [TrendPoint; 5] = [
    TrendPoint { month: "Jan", fuel: 21.0, fleet: 78.0 },
    TrendPoint { month: "Feb", fuel: 20.0, fleet: 80.0 },
    TrendPoint { month: "Mar", fuel: 22.0, fleet: 82.0 },
    TrendPoint { month: "Apr", fuel: 19.0, fleet: 81.0 },
    TrendPoint { month: "May", fuel: 18.0, fleet: 84.0 },
];
