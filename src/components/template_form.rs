//! Dialog for adding a camera template.
//!
//! Fields are validated with the same rules the server applies before
//! anything is sent. On success the form resets and the gallery reloads.

use leptos::prelude::*;

use crate::net::types::TemplateDraft;

const DEFAULT_FREQUENCY: &str = "30";
const DEFAULT_TIMEOUT: &str = "10";

#[component]
pub fn TemplateForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let groups = RwSignal::new(String::new());
    let frequency = RwSignal::new(DEFAULT_FREQUENCY.to_owned());
    let timeout = RwSignal::new(DEFAULT_TIMEOUT.to_owned());
    let notes = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        url.set(String::new());
        groups.set(String::new());
        frequency.set(DEFAULT_FREQUENCY.to_owned());
        timeout.set(DEFAULT_TIMEOUT.to_owned());
        notes.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match TemplateDraft::from_form(
            &name.get(),
            &url.get(),
            &groups.get(),
            &frequency.get(),
            &timeout.get(),
            &notes.get(),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_template(&draft).await {
                Ok(()) => {
                    leptos::logging::log!("template {} saved", draft.name);
                    info.set(String::new());
                    reset();
                    on_created.run(());
                }
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (draft, reset, on_created);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--template" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Template"</h2>
                <form class="template-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            maxlength="32"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "URL"
                        <input type="url" prop:value=move || url.get() on:input=move |ev| url.set(event_target_value(&ev))/>
                    </label>
                    <label>
                        "Groups (comma separated)"
                        <input
                            type="text"
                            prop:value=move || groups.get()
                            on:input=move |ev| groups.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Frequency (minutes)"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || frequency.get()
                            on:input=move |ev| frequency.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Timeout"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || timeout.get()
                            on:input=move |ev| timeout.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Notes"
                        <textarea prop:value=move || notes.get() on:input=move |ev| notes.set(event_target_value(&ev))></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
