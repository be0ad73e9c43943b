//! Reconciles fetched templates onto the gallery surface.
//!
//! DESIGN
//! ======
//! The renderer never fetches. It is handed the filtered templates for one
//! response and either replaces the surface contents or appends the names it
//! has not rendered yet. Each new item carries a small enter delay so cards
//! fade in one after another.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use std::collections::HashSet;
use std::time::Duration;

use crate::net::types::Template;
use crate::state::gallery::{GalleryViewState, SyncPhase};

/// Per-item enter delay step within one render batch.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear the surface, then add every item.
    Replace,
    /// Add items not already on the surface.
    Append,
}

/// One card on the gallery surface.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub name: String,
    pub template: Template,
    pub enter_delay: Duration,
}

/// Where rendered items end up.
pub trait GallerySurface {
    fn clear(&mut self);
    fn append(&mut self, item: GalleryItem);
    /// Add one render batch. Reactive surfaces override this to notify once.
    fn append_all(&mut self, items: Vec<GalleryItem>) {
        for item in items {
            self.append(item);
        }
    }
    fn item_count(&self) -> usize;
    fn show_error(&mut self, message: String);
    fn clear_error(&mut self);
    /// Swap media URLs for fresh cache-busted ones.
    fn refresh_sources(&mut self, stamp: u64);
    fn publish_view(&mut self, view: &GalleryViewState, phase: SyncPhase);
}

pub struct GalleryRenderer<S> {
    surface: S,
    rendered: HashSet<String>,
}

impl<S: GallerySurface> GalleryRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, rendered: HashSet::new() }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_rendered(&self, name: &str) -> bool {
        self.rendered.contains(name)
    }

    /// Render one batch. Returns how many items were added.
    pub fn render<'a>(&mut self, templates: impl IntoIterator<Item = &'a Template>, mode: RenderMode) -> usize {
        if mode == RenderMode::Replace {
            self.surface.clear();
            self.rendered.clear();
        }
        let mut batch = Vec::new();
        for template in templates {
            if !self.rendered.insert(template.name.clone()) {
                continue;
            }
            let position = u32::try_from(batch.len()).unwrap_or(u32::MAX);
            batch.push(GalleryItem {
                name: template.name.clone(),
                template: template.clone(),
                enter_delay: STAGGER_STEP * position,
            });
        }
        let added = batch.len();
        if added > 0 {
            self.surface.append_all(batch);
        }
        added
    }

    pub fn show_error(&mut self, message: String) {
        self.surface.show_error(message);
    }

    pub fn clear_error(&mut self) {
        self.surface.clear_error();
    }

    pub fn refresh_sources(&mut self, stamp: u64) {
        self.surface.refresh_sources(stamp);
    }

    pub fn publish_view(&mut self, view: &GalleryViewState, phase: SyncPhase) {
        self.surface.publish_view(view, phase);
    }
}
