//! Gallery toolbar: group filter, search, grid width and page actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter controls never touch gallery state directly. They emit triggers to
//! the sync controller, and the controls reflect the controller's view-state
//! back, so a change dropped during an in-flight fetch snaps back visibly.

use leptos::html::Input;
use leptos::prelude::*;

use crate::gallery::sync::Trigger;
use crate::state::gallery::{ALL_GROUPS, GalleryState, GroupFilter};
use crate::state::ui::{MAX_GRID_ITEM_WIDTH, MIN_GRID_ITEM_WIDTH, UiState};

/// Top toolbar for the gallery page.
#[component]
pub fn Toolbar(on_trigger: Callback<Trigger>, search_ref: NodeRef<Input>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let selected_group = move || gallery.with(|g| g.view.selected_group.as_param().to_owned());
    let search_value = move || gallery.with(|g| g.view.search_query.clone());

    let on_group_change = move |ev| {
        let value = event_target_value(&ev);
        on_trigger.run(Trigger::GroupChanged(GroupFilter::from_param(&value)));
    };
    let on_search_change = move |ev| {
        on_trigger.run(Trigger::SearchChanged(event_target_value(&ev)));
    };
    let on_width_input = move |ev| {
        if let Ok(width) = event_target_value(&ev).parse::<u32>() {
            ui.update(|u| u.set_grid_item_width(width));
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Glimpser"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <select class="toolbar__groups" prop:value=selected_group on:change=on_group_change title="Filter by group">
                <option value=ALL_GROUPS>"All Groups"</option>
                <For
                    each=move || gallery.with(|g| g.groups.clone())
                    key=String::clone
                    children=move |group| {
                        let label = group.clone();
                        view! { <option value=group>{label}</option> }
                    }
                />
            </select>

            <input
                class="toolbar__search"
                type="search"
                placeholder="Search templates ( / )"
                node_ref=search_ref
                prop:value=search_value
                on:change=on_search_change
            />

            <label class="toolbar__width" title="Card width">
                <input
                    type="range"
                    min=MIN_GRID_ITEM_WIDTH.to_string()
                    max=MAX_GRID_ITEM_WIDTH.to_string()
                    step="20"
                    prop:value=move || ui.with(|u| u.grid_item_width).to_string()
                    on:input=on_width_input
                    disabled=move || ui.with(|u| u.input_mode.is_touch())
                />
            </label>

            <span class="toolbar__spacer"></span>

            <button class="btn toolbar__add" on:click=move |_| ui.update(|u| u.show_template_form = true)>
                "+ Template"
            </button>
            <button class="btn toolbar__reload" on:click=move |_| on_trigger.run(Trigger::Reload) title="Reload gallery (R)">
                "⟳"
            </button>
            <a class="btn toolbar__logs" href="/logs">"Logs"</a>
            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| ui.update(UiState::toggle_dark_mode)
                title="Toggle dark mode (D)"
            >
                {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
            </button>
            <button class="btn toolbar__help" on:click=move |_| ui.update(|u| u.show_shortcuts = true) title="Shortcuts (?)">
                "?"
            </button>
        </header>
    }
}
