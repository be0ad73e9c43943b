//! Gallery view-state and its reactive snapshot.
//!
//! DESIGN
//! ======
//! `GalleryViewState` is owned and mutated only by the sync controller.
//! `GalleryState` is what the Leptos view reads: the rendered items, the
//! inline error, the media cache-bust stamp and a copy of the view-state for
//! the toolbar. It doubles as the plain-data [`GallerySurface`] so the
//! renderer can be exercised without signals.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::gallery::renderer::{GalleryItem, GallerySurface};
use crate::net::types::Template;

/// Dropdown value meaning "no group filter".
pub const ALL_GROUPS: &str = "all";

/// Group selection from the dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GroupFilter {
    #[default]
    All,
    Group(String),
}

impl GroupFilter {
    /// Parse a dropdown/query value; blank or `"all"` means no filter.
    pub fn from_param(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_GROUPS {
            Self::All
        } else {
            Self::Group(trimmed.to_owned())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL_GROUPS,
            Self::Group(label) => label,
        }
    }

    pub fn admits(&self, template: &Template) -> bool {
        match self {
            Self::All => true,
            Self::Group(label) => template.in_group(label),
        }
    }
}

/// Parameters of one `GET /templates` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateQuery {
    pub group: GroupFilter,
    pub search: String,
    /// 1-based.
    pub page: u32,
    pub per_page: u32,
}

/// Lifecycle of the gallery sync state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Idle,
    Fetching,
    Rendered,
    Failed,
}

/// How the most recent load ended, kept after the machine returns to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
}

impl LoadOutcome {
    /// The transient phase this outcome passes through.
    pub fn phase(self) -> SyncPhase {
        match self {
            Self::Rendered => SyncPhase::Rendered,
            Self::Failed => SyncPhase::Failed,
        }
    }
}

/// Pagination and filter state owned by the sync controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryViewState {
    pub selected_group: GroupFilter,
    pub search_query: String,
    /// Next page to request, 1-based.
    pub page: u32,
    pub page_size: u32,
    pub all_loaded: bool,
    pub loading_in_flight: bool,
    /// `None` until the first load finishes.
    pub last_load: Option<LoadOutcome>,
}

impl GalleryViewState {
    pub fn new(page_size: u32) -> Self {
        Self {
            selected_group: GroupFilter::All,
            search_query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            all_loaded: false,
            loading_in_flight: false,
            last_load: None,
        }
    }

    /// Rewind pagination for a fresh load.
    pub fn reset_paging(&mut self) {
        self.page = 1;
        self.all_loaded = false;
    }

    /// Request for the page the cursor points at.
    pub fn query(&self) -> TemplateQuery {
        TemplateQuery {
            group: self.selected_group.clone(),
            search: self.search_query.clone(),
            page: self.page,
            per_page: self.page_size,
        }
    }
}

impl Default for GalleryViewState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

/// Reactive gallery snapshot provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    /// Bumped on every clear so keyed lists rebuild their nodes.
    pub generation: u64,
    pub error: Option<String>,
    /// Cache-busting stamp for media URLs.
    pub source_stamp: u64,
    pub view: GalleryViewState,
    pub phase: SyncPhase,
    /// Dropdown options, without the implicit "all".
    pub groups: Vec<String>,
}

impl GalleryState {
    pub fn loading(&self) -> bool {
        self.view.loading_in_flight
    }

    /// The last load succeeded and left nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.items.is_empty() && !self.loading() && self.view.last_load == Some(LoadOutcome::Rendered)
    }
}

impl GallerySurface for GalleryState {
    fn clear(&mut self) {
        self.items.clear();
        self.generation += 1;
    }

    fn append(&mut self, item: GalleryItem) {
        self.items.push(item);
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn refresh_sources(&mut self, stamp: u64) {
        self.source_stamp = stamp;
    }

    fn publish_view(&mut self, view: &GalleryViewState, phase: SyncPhase) {
        self.view = view.clone();
        self.phase = phase;
    }
}

impl GallerySurface for RwSignal<GalleryState> {
    fn clear(&mut self) {
        self.update(GallerySurface::clear);
    }

    fn append(&mut self, item: GalleryItem) {
        self.update(|s| s.append(item));
    }

    fn append_all(&mut self, items: Vec<GalleryItem>) {
        self.update(|s| s.items.extend(items));
    }

    fn item_count(&self) -> usize {
        self.with_untracked(GallerySurface::item_count)
    }

    fn show_error(&mut self, message: String) {
        self.update(|s| s.show_error(message));
    }

    fn clear_error(&mut self) {
        self.update(GallerySurface::clear_error);
    }

    fn refresh_sources(&mut self, stamp: u64) {
        self.update(|s| s.refresh_sources(stamp));
    }

    fn publish_view(&mut self, view: &GalleryViewState, phase: SyncPhase) {
        self.update(|s| s.publish_view(view, phase));
    }
}
