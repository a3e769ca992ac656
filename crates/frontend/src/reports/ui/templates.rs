use chrono::Utc;
use contracts::reports::SavedTemplate;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::reports::{api, build_run_request};
use crate::shared::components::ui::{Button, Input};
use crate::store::use_report_store;

const NOTICE_MS: u32 = 4_000;

/// Saved templates: name the current dataset/column configuration and store
/// it on the backend, or apply a stored one back into the builder.
#[component]
pub fn TemplateBar() -> impl IntoView {
    let store = use_report_store();

    let (templates, set_templates) = signal(Vec::<SavedTemplate>::new());
    let (name, set_name) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);

    let reload = move || {
        spawn_local(async move {
            match api::list_templates().await {
                Ok(list) => set_templates.set(list),
                Err(err) => log::error!("failed to load templates: {err}"),
            }
        });
    };

    // Load existing templates on mount.
    reload();

    let save = move |_| {
        let template_name = name.get().trim().to_string();
        if template_name.is_empty() {
            return;
        }
        let template = SavedTemplate {
            id: Uuid::new_v4(),
            name: template_name,
            description: None,
            config: build_run_request(
                &store.selected_dataset.get(),
                &store.selected_columns.get(),
            ),
            access_role: store.role.get(),
            created_at: Utc::now(),
        };

        spawn_local(async move {
            let message = match api::save_template(&template).await {
                Ok(ack) => {
                    set_name.set(String::new());
                    reload();
                    format!("Template saved ({} stored)", ack.count)
                }
                Err(err) => {
                    log::error!("template save failed: {err}");
                    format!("Save failed: {err}")
                }
            };
            set_notice.set(Some(message));
            TimeoutFuture::new(NOTICE_MS).await;
            set_notice.set(None);
        });
    };

    view! {
        <div class="template-bar" id="templates">
            <div class="template-bar__form">
                <Input
                    id="template-name"
                    placeholder="Template name"
                    value=name
                    on_input=Callback::new(move |value: String| set_name.set(value))
                />
                <Button variant="secondary" on_click=Callback::new(save)>
                    "Save Template"
                </Button>
            </div>

            <Show when=move || notice.get().is_some()>
                <div class="template-bar__notice">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="template-bar__list">
                <For
                    each=move || templates.get()
                    key=|template| template.id
                    children=move |template: SavedTemplate| {
                        let label = template.name.clone();
                        let dataset = template.config.dataset.clone();
                        let columns = template.config.columns.clone();
                        view! {
                            <button
                                class="template-chip"
                                title=format!("{} ({})", template.name, template.access_role.display_name())
                                on:click=move |_| {
                                    store.set_dataset(dataset.clone());
                                    store.set_columns(columns.clone());
                                }
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
