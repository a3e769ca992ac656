use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI tile with an icon, label and a preformatted value.
#[component]
pub fn KpiCard(
    /// Label displayed above the value
    label: String,
    /// Display value, already formatted
    value: String,
    /// Icon name from the icon() helper
    icon_name: String,
) -> impl IntoView {
    view! {
        <article class="kpi-card">
            <div class="kpi-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="kpi-card__content">
                <div class="kpi-card__label">{label}</div>
                <div class="kpi-card__value">{value}</div>
            </div>
        </article>
    }
}
