use contracts::reports::PreviewRow;
use leptos::prelude::*;

use crate::reports::cell_text;
use crate::store::use_report_store;

/// Live preview table. Header order follows the current column selection;
/// a column with no value in a row renders as an empty cell.
#[component]
pub fn PreviewPanel(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] rows: Signal<Vec<PreviewRow>>,
) -> impl IntoView {
    let store = use_report_store();

    view! {
        <section class="panel panel--preview">
            <h3 class="panel__title">"Live Preview"</h3>

            <Show when=move || error.get().is_some()>
                <div class="error-banner" role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                            <p>"Running report..."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    let columns = store.selected_columns.get();
                    let rows = rows.get();
                    view! {
                        <table class="preview-table">
                            <thead>
                                <tr>
                                    {columns
                                        .iter()
                                        .map(|column| view! { <th>{column.clone()}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                {columns
                                                    .iter()
                                                    .map(|column| {
                                                        view! { <td>{cell_text(row, column)}</td> }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
