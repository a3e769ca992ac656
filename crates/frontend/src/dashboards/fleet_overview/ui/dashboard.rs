use crate::dashboards::fleet_overview::data::{KPIS, MONTHLY_TREND};
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::kpi_card::KpiCard;
use leptos::prelude::*;

/// Fleet Overview dashboard: four KPI tiles and two trend charts rendered
/// from the embedded sample series.
#[component]
pub fn FleetOverviewDashboard() -> impl IntoView {
    let months: Vec<String> = MONTHLY_TREND.iter().map(|p| p.month.to_string()).collect();
    let fuel: Vec<f64> = MONTHLY_TREND.iter().map(|p| p.fuel).collect();
    let fleet: Vec<f64> = MONTHLY_TREND.iter().map(|p| p.fleet).collect();

    let tiles = KPIS
        .iter()
        .map(|kpi| {
            view! {
                <KpiCard
                    label=kpi.label.to_string()
                    value=kpi.value.to_string()
                    icon_name=kpi.icon.to_string()
                />
            }
        })
        .collect_view();

    view! {
        <div class="dashboard" id="dashboard">
            <div class="kpi-grid">{tiles}</div>
            <div class="chart-grid">
                <section class="panel">
                    <h3 class="panel__title">"Fuel Efficiency Trend"</h3>
                    <LineChart
                        labels=months.clone()
                        values=fuel
                        stroke="#17a2b8".to_string()
                    />
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Fleet Performance Index"</h3>
                    <BarChart
                        labels=months
                        values=fleet
                        fill="#0d6efd".to_string()
                    />
                </section>
            </div>
        </div>
    }
}
