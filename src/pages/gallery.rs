//! Gallery page: template grid, toolbar, health panel and dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It owns the gallery sync controller and every
//! loop that feeds it: the initial load, infinite scroll, the periodic media
//! refresh and the keyboard shortcuts. Each loop stops when the page is
//! cleaned up.

use std::rc::Rc;

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::gallery_grid::GalleryGrid;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::shortcuts_modal::ShortcutsModal;
use crate::components::template_form::TemplateForm;
use crate::components::toolbar::Toolbar;
use crate::config::DashboardConfig;
use crate::gallery::sync::{GallerySyncController, Trigger};
use crate::net::api::HttpTemplateSource;
use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::shortcuts::ShortcutAction;
use crate::util::time_format::now_utc;

/// Controller wired to the live server and the reactive gallery surface.
pub type PageController = GallerySyncController<HttpTemplateSource, RwSignal<GalleryState>>;

/// How often relative capture times are recomputed.
#[cfg(feature = "csr")]
const CLOCK_TICK: std::time::Duration = std::time::Duration::from_secs(30);

/// `(viewport bottom, viewport height, document height)` in CSS pixels.
#[cfg(feature = "csr")]
fn viewport_geometry() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64())?;
    let scrolled = window.scroll_y().unwrap_or(0.0);
    let content_height = f64::from(window.document()?.document_element()?.scroll_height());
    Some((viewport + scrolled, viewport, content_height))
}

/// Apply a shortcut to page state.
#[cfg(feature = "csr")]
fn run_shortcut(action: ShortcutAction, ui: RwSignal<UiState>, dispatch: Callback<Trigger>) {
    match action {
        ShortcutAction::FocusSearch => ui.update(UiState::request_search_focus),
        ShortcutAction::ToggleDarkMode => ui.update(UiState::toggle_dark_mode),
        ShortcutAction::ReloadGallery => dispatch.run(Trigger::Reload),
        ShortcutAction::ShowHelp => ui.update(|u| u.show_shortcuts = true),
        ShortcutAction::CloseHelp => ui.update(|u| {
            u.show_shortcuts = false;
            u.show_template_form = false;
        }),
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<DashboardConfig>();
    let now = RwSignal::new(now_utc());
    let search_ref = NodeRef::<Input>::new();

    let controller: StoredValue<Rc<PageController>, LocalStorage> =
        StoredValue::new_local(Rc::new(GallerySyncController::new(HttpTemplateSource, gallery, config.page_size)));

    let dispatch = Callback::new(move |trigger: Trigger| {
        let Some(ctl) = controller.try_get_value() else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if ctl.trigger(trigger).await == crate::gallery::sync::SyncOutcome::Ignored {
                // Re-render controls so a dropped change snaps back.
                gallery.update(|_| {});
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctl, trigger);
        }
    });

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use wasm_bindgen::JsCast as _;

        use crate::gallery::sync::{should_backfill, wants_next_page};
        use crate::net::api::{cache_bust, fetch_groups};
        use crate::state::template_store::TemplateStore;
        use crate::util::shortcuts::{action_for, is_text_entry};

        leptos::task::spawn_local(async move {
            let Some(ctl) = controller.try_get_value() else {
                return;
            };
            ctl.trigger(Trigger::Initial).await;
            let groups = match fetch_groups().await {
                Ok(groups) => groups,
                Err(e) => {
                    leptos::logging::warn!("group list unavailable, using loaded templates: {e}");
                    ctl.with_store(TemplateStore::group_labels)
                }
            };
            gallery.update(|g| g.groups = groups);
        });

        let loops_alive = Arc::new(AtomicBool::new(true));

        let refresh_alive = loops_alive.clone();
        let refresh_interval = config.source_refresh_interval();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(refresh_interval).await;
                if !refresh_alive.load(Ordering::Relaxed) {
                    break;
                }
                let Some(ctl) = controller.try_get_value() else {
                    break;
                };
                ctl.refresh_sources(cache_bust());
            }
        });

        let clock_alive = loops_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(CLOCK_TICK).await;
                if !clock_alive.load(Ordering::Relaxed) {
                    break;
                }
                now.set(now_utc());
            }
        });

        on_cleanup(move || loops_alive.store(false, Ordering::Relaxed));

        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some((scroll_bottom, _, content_height)) = viewport_geometry() else {
                return;
            };
            if gallery.with_untracked(|g| wants_next_page(&g.view, scroll_bottom, content_height)) {
                dispatch.run(Trigger::ScrolledNearEnd);
            }
        });
        on_cleanup(move || scroll_handle.remove());

        // A page that fits on screen never scrolls; keep loading until it
        // overflows or the server runs out.
        Effect::new(move || {
            gallery.track();
            // Measure after the new cards are laid out.
            request_animation_frame(move || {
                let Some((_, viewport, content_height)) = viewport_geometry() else {
                    return;
                };
                if gallery.with_untracked(|g| should_backfill(&g.view, viewport, content_height)) {
                    dispatch.run(Trigger::ScrolledNearEnd);
                }
            });
        });

        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let typing = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| is_text_entry(&el.tag_name()));
            let modified = ev.ctrl_key() || ev.meta_key() || ev.alt_key();
            let Some(action) = action_for(&ev.key(), typing, modified) else {
                return;
            };
            if action == ShortcutAction::FocusSearch {
                ev.prevent_default();
            }
            run_shortcut(action, ui, dispatch);
        });
        on_cleanup(move || key_handle.remove());

        Effect::new(move || {
            if ui.with(|u| u.search_focus_seq) == 0 {
                return;
            }
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    }

    let close_shortcuts = Callback::new(move |()| ui.update(|u| u.show_shortcuts = false));
    let close_form = Callback::new(move |()| ui.update(|u| u.show_template_form = false));
    let on_created = Callback::new(move |()| {
        ui.update(|u| u.show_template_form = false);
        dispatch.run(Trigger::Reload);
    });

    view! {
        <div class="gallery-page">
            <Toolbar on_trigger=dispatch search_ref=search_ref/>
            <div class="gallery-page__body">
                <GalleryGrid now=now/>
                <MetricsPanel/>
            </div>
            <Show when=move || ui.with(|u| u.show_shortcuts)>
                <ShortcutsModal on_close=close_shortcuts/>
            </Show>
            <Show when=move || ui.with(|u| u.show_template_form)>
                <TemplateForm on_close=close_form on_created=on_created/>
            </Show>
        </div>
    }
}
