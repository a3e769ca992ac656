use contracts::reports::{catalog, PreviewRow};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::ui::preview::PreviewPanel;
use crate::reports::ui::templates::TemplateBar;
use crate::reports::{api, build_run_request};
use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::icons::icon;
use crate::store::use_report_store;

/// How long a failure banner stays up before it is dismissed.
const ERROR_BANNER_MS: u32 = 5_000;

/// Report Builder panel: dataset selection, column toggles, and the
/// run action feeding the live preview.
#[component]
pub fn ReportBuilder() -> impl IntoView {
    let store = use_report_store();

    let (preview_rows, set_preview_rows) = signal(Vec::<PreviewRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Monotonic token per run. A completion whose token is no longer
    // current lost the race to a newer click and is dropped.
    let request_seq = StoredValue::new(0u64);

    let run_preview = move |_| {
        let request = build_run_request(
            &store.selected_dataset.get(),
            &store.selected_columns.get(),
        );
        let token = request_seq.get_value() + 1;
        request_seq.set_value(token);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::run_report(&request).await;
            if request_seq.get_value() != token {
                return;
            }
            match result {
                Ok(response) => {
                    set_preview_rows.set(response.rows);
                    set_loading.set(false);
                }
                Err(err) => {
                    // The previous preview stays in place; the failure only
                    // surfaces through a transient banner.
                    log::error!("report run failed: {err}");
                    set_loading.set(false);
                    set_error.set(Some(err));
                    TimeoutFuture::new(ERROR_BANNER_MS).await;
                    if request_seq.get_value() == token {
                        set_error.set(None);
                    }
                }
            }
        });
    };

    let dataset_options: Vec<(String, String)> = catalog::DATASETS
        .iter()
        .map(|d| (d.to_string(), d.to_string()))
        .collect();
    let dataset_options = Signal::derive(move || dataset_options.clone());

    let field_toggles = move || {
        catalog::fields(&store.selected_dataset.get())
            .iter()
            .map(|field| {
                let name = field.to_string();
                let checked = Signal::derive({
                    let name = name.clone();
                    move || store.selected_columns.get().iter().any(|c| c == &name)
                });
                let toggle_name = name.clone();
                view! {
                    <Checkbox
                        id=format!("field-{name}")
                        label=name.clone()
                        checked=checked
                        on_change=Callback::new(move |_| store.toggle_column(&toggle_name))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="builder-layout" id="dynamic_reports">
            <section class="panel">
                <h3 class="panel__title">"Report Builder"</h3>

                <Select
                    id="dataset-select"
                    label="Dataset"
                    value=Signal::derive(move || store.selected_dataset.get())
                    options=dataset_options
                    on_change=Callback::new(move |value: String| store.set_dataset(value))
                />

                <div class="form__group">
                    <span class="form__label">"Searchable Fields"</span>
                    <div class="field-list">{field_toggles}</div>
                </div>

                <Button class="builder__run" on_click=Callback::new(run_preview)>
                    {icon("play")}
                    <span>"Run Real-Time Preview"</span>
                </Button>

                <TemplateBar />
            </section>

            <PreviewPanel loading=loading error=error rows=preview_rows />
        </div>
    }
}
