pub mod sidebar;
pub mod topbar;

use crate::dashboards::fleet_overview::FleetOverviewDashboard;
use crate::reports::ui::ReportBuilder;
use leptos::prelude::*;
use sidebar::Sidebar;
use topbar::TopBar;

/// Application shell.
///
/// Layout structure:
/// ```text
/// +---------+--------------------------------+
/// |         |            TopBar              |
/// | Sidebar +--------------------------------+
/// |         |  FleetOverviewDashboard        |
/// |         |  ReportBuilder                 |
/// +---------+--------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <TopBar />
                <main class="app-content">
                    <FleetOverviewDashboard />
                    <ReportBuilder />
                </main>
            </div>
        </div>
    }
}
