pub mod data;
pub mod ui;

pub use ui::dashboard::FleetOverviewDashboard;
