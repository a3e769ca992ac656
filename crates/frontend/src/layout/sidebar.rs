use crate::shared::icons::icon;
use leptos::prelude::*;

// (anchor id, label, icon)
const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("dashboard", "Dashboard", "layout-dashboard"),
    ("dynamic_reports", "Dynamic Reports", "table"),
    ("templates", "Templates", "bookmark"),
    ("automation", "Automation", "zap"),
];

/// Left navigation rail with the product brand.
#[component]
pub fn Sidebar() -> impl IntoView {
    let links = NAV_ITEMS
        .iter()
        .map(|(id, label, icon_name)| {
            view! {
                <a class="sidebar__link" href=format!("#{id}")>
                    {icon(icon_name)}
                    <span>{*label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("ship")}
                <h2>"MarineOps Insight"</h2>
            </div>
            <nav class="sidebar__nav">{links}</nav>
        </aside>
    }
}
