use crate::layout::Shell;
use crate::store::ReportStore;
use leptos::prelude::*;
use web_sys::window;

#[component]
pub fn App() -> impl IntoView {
    // Provide the ReportStore to the whole app via context.
    let store = ReportStore::new();
    provide_context(store);

    // Mirror the dark-mode flag onto <body data-theme=...>. The flag lives
    // only in the store; it is not persisted across sessions.
    Effect::new(move |_| {
        let theme = if store.dark_mode.get() { "dark" } else { "light" };
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme);
        }
    });

    view! {
        <Shell />
    }
}
