//! Gallery synchronization state machine.
//!
//! DESIGN
//! ======
//! The controller turns UI triggers into `GET /templates` requests and feeds
//! the responses through the store and renderer:
//!
//! ```text
//! Idle --trigger--> Fetching --ok--> Rendered --> Idle
//!                            \--err-> Failed ----/
//! ```
//!
//! The machine always settles back to `Idle`. How the last load ended is
//! kept in `GalleryViewState::last_load` for the empty and error views.
//!
//! At most one fetch is in flight. A trigger that arrives while fetching is
//! dropped and leaves the view-state untouched. Group, search, initial and
//! reload triggers start over from page 1 and replace the surface; reaching
//! the end of the grid appends the next page.
//!
//! Interior state lives in a `RefCell` that is released before every await,
//! so the controller can be shared by the scroll listener, the toolbar and
//! the refresh loop on the single browser thread.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::RefCell;
use std::future::Future;

use super::renderer::{GalleryRenderer, GallerySurface, RenderMode};
use crate::net::error::ApiError;
use crate::net::types::{Template, TemplateSet};
use crate::net::api::cache_bust;
use crate::state::gallery::{GalleryViewState, GroupFilter, LoadOutcome, SyncPhase, TemplateQuery};
use crate::state::template_store::TemplateStore;

/// Distance from the bottom of the page, in pixels, that counts as the end.
pub const NEAR_BOTTOM_MARGIN_PX: f64 = 200.0;

/// UI region name used in inline error messages.
const REGION: &str = "templates";

/// Something that asks the gallery to (re)load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    Initial,
    GroupChanged(GroupFilter),
    SearchChanged(String),
    ScrolledNearEnd,
    Reload,
}

/// What a trigger ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Rendered { appended: usize, all_loaded: bool },
    Failed(ApiError),
    /// Dropped: a fetch was already in flight or there is nothing left to load.
    Ignored,
}

/// Provider of template pages.
pub trait TemplateSource {
    fn fetch_templates(&self, query: &TemplateQuery) -> impl Future<Output = Result<TemplateSet, ApiError>>;
}

struct SyncInner<V> {
    view: GalleryViewState,
    phase: SyncPhase,
    store: TemplateStore,
    renderer: GalleryRenderer<V>,
    /// The last replacing load failed; the next load must replace too.
    replace_pending: bool,
}

pub struct GallerySyncController<S, V> {
    source: S,
    inner: RefCell<SyncInner<V>>,
}

/// Whether the viewport bottom is within [`NEAR_BOTTOM_MARGIN_PX`] of the end.
pub fn is_near_bottom(scroll_bottom: f64, content_height: f64) -> bool {
    scroll_bottom >= content_height - NEAR_BOTTOM_MARGIN_PX
}

/// Whether the scroll position asks for the next page.
pub fn wants_next_page(view: &GalleryViewState, scroll_bottom: f64, content_height: f64) -> bool {
    !view.all_loaded && !view.loading_in_flight && is_near_bottom(scroll_bottom, content_height)
}

/// Whether a successful load left the grid too short to scroll.
///
/// A page that does not overflow the viewport never produces a scroll event,
/// so the next page has to be requested without one. Failed loads do not
/// backfill; the user retries by scrolling or reloading.
pub fn should_backfill(view: &GalleryViewState, viewport_height: f64, content_height: f64) -> bool {
    view.last_load == Some(LoadOutcome::Rendered) && wants_next_page(view, viewport_height, content_height)
}

impl<S: TemplateSource, V: GallerySurface> GallerySyncController<S, V> {
    pub fn new(source: S, surface: V, page_size: u32) -> Self {
        Self {
            source,
            inner: RefCell::new(SyncInner {
                view: GalleryViewState::new(page_size),
                phase: SyncPhase::Idle,
                store: TemplateStore::new(),
                renderer: GalleryRenderer::new(surface),
                replace_pending: false,
            }),
        }
    }

    pub fn view(&self) -> GalleryViewState {
        self.inner.borrow().view.clone()
    }

    pub fn phase(&self) -> SyncPhase {
        self.inner.borrow().phase
    }

    /// Read access to the store, e.g. for the group-label fallback.
    pub fn with_store<R>(&self, f: impl FnOnce(&TemplateStore) -> R) -> R {
        f(&self.inner.borrow().store)
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(self.inner.borrow().renderer.surface())
    }

    /// Handle one trigger to completion.
    pub async fn trigger(&self, trigger: Trigger) -> SyncOutcome {
        let Some((query, mode)) = self.begin(trigger) else {
            return SyncOutcome::Ignored;
        };
        let result = self.source.fetch_templates(&query).await;
        self.finish(result, mode)
    }

    /// Cache-bust media URLs of rendered items. Never refetches.
    pub fn refresh_sources(&self, stamp: u64) {
        self.inner.borrow_mut().renderer.refresh_sources(stamp);
    }

    fn begin(&self, trigger: Trigger) -> Option<(TemplateQuery, RenderMode)> {
        let mut inner = self.inner.borrow_mut();
        if inner.view.loading_in_flight {
            leptos::logging::log!("gallery: dropping {trigger:?}, fetch in flight");
            return None;
        }
        let mode = match trigger {
            Trigger::Initial | Trigger::Reload => RenderMode::Replace,
            Trigger::GroupChanged(group) => {
                inner.view.selected_group = group;
                RenderMode::Replace
            }
            Trigger::SearchChanged(search) => {
                inner.view.search_query = search.trim().to_owned();
                RenderMode::Replace
            }
            Trigger::ScrolledNearEnd if inner.replace_pending => RenderMode::Replace,
            Trigger::ScrolledNearEnd => {
                if inner.view.all_loaded {
                    return None;
                }
                RenderMode::Append
            }
        };
        if mode == RenderMode::Replace {
            inner.view.reset_paging();
        }
        inner.view.loading_in_flight = true;
        inner.phase = SyncPhase::Fetching;

        let SyncInner { view, phase, renderer, .. } = &mut *inner;
        renderer.publish_view(view, *phase);
        Some((view.query(), mode))
    }

    fn finish(&self, result: Result<TemplateSet, ApiError>, mode: RenderMode) -> SyncOutcome {
        let mut inner = self.inner.borrow_mut();
        let SyncInner { view, phase, store, renderer, replace_pending } = &mut *inner;
        view.loading_in_flight = false;

        let outcome = match result {
            Ok(set) => {
                *phase = LoadOutcome::Rendered.phase();
                view.last_load = Some(LoadOutcome::Rendered);
                if mode == RenderMode::Replace {
                    store.clear();
                    // Fresh cards must never reuse a cached clip.
                    renderer.refresh_sources(cache_bust());
                }
                store.merge(set.templates);
                let visible: Vec<&Template> = store.filtered(&view.selected_group, &view.search_query);
                let appended = renderer.render(visible, mode);
                view.all_loaded = set.returned < view.page_size as usize;
                if !view.all_loaded {
                    view.page += 1;
                }
                *replace_pending = false;
                renderer.clear_error();
                SyncOutcome::Rendered { appended, all_loaded: view.all_loaded }
            }
            Err(err) => {
                *phase = LoadOutcome::Failed.phase();
                view.last_load = Some(LoadOutcome::Failed);
                leptos::logging::warn!("gallery: fetch failed: {err}");
                if mode == RenderMode::Replace {
                    *replace_pending = true;
                }
                renderer.show_error(err.inline_message(REGION));
                SyncOutcome::Failed(err)
            }
        };

        leptos::logging::log!("gallery: {phase:?} -> Idle");
        *phase = SyncPhase::Idle;
        renderer.publish_view(view, *phase);
        outcome
    }
}
