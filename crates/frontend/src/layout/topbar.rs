use contracts::reports::ReportRole;
use leptos::prelude::*;

use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::store::use_report_store;

/// Top bar with the breadcrumb, role selector and theme toggle.
///
/// The role selector writes the raw option value into the store; parsing
/// falls back to the default role for anything outside the fixed set.
#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_report_store();

    let role_options: Vec<(String, String)> = ReportRole::all()
        .iter()
        .map(|role| (role.as_str().to_string(), role.display_name().to_string()))
        .collect();
    let role_options = Signal::derive(move || role_options.clone());

    view! {
        <header class="topbar">
            <div class="topbar__breadcrumb">"Fleet Operations / Dynamic Reporting"</div>
            <div class="topbar__actions">
                <Select
                    id="role-select"
                    value=Signal::derive(move || store.role.get().as_str().to_string())
                    options=role_options
                    on_change=Callback::new(move |value: String| {
                        store.set_role(ReportRole::from_str(&value))
                    })
                />
                <button
                    class="topbar__icon-btn"
                    title="Toggle theme"
                    on:click=move |_| store.toggle_dark_mode()
                >
                    {move || if store.dark_mode.get() { icon("sun") } else { icon("moon") }}
                </button>
            </div>
        </header>
    }
}
