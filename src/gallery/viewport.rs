//! Viewport-driven playback for gallery cards.
//!
//! Cards register their media element under the template name. The platform
//! observer reports intersection ratios back through
//! [`ViewportActivator::on_intersection`]; half visible is the cut-off.
//! Touch clients autoplay visible previews. Pointer clients only pause on
//! scroll-out and leave playback to hover.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::collections::HashMap;

use crate::util::playback::{PreviewMedia, apply_rate};

/// Intersection ratio at or above which a card counts as visible.
pub const VISIBLE_THRESHOLD: f64 = 0.5;

/// Primary input of the client, decided once at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// No hover capability; playback follows visibility.
    Touch,
    #[default]
    Pointer,
}

impl InputMode {
    /// `(hover: none)` media query, `Pointer` outside the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            let touch = web_sys::window()
                .and_then(|w| w.match_media("(hover: none)").ok().flatten())
                .is_some_and(|mql| mql.matches());
            if touch { Self::Touch } else { Self::Pointer }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        self == Self::Touch
    }
}

/// Platform visibility notifications for media targets.
pub trait VisibilityObserver {
    type Target: PreviewMedia;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
}

/// Tracks observed media by template name and applies the visibility policy.
pub struct ViewportActivator<O: VisibilityObserver> {
    observer: O,
    mode: InputMode,
    tracked: HashMap<String, O::Target>,
}

impl<O: VisibilityObserver> ViewportActivator<O> {
    pub fn new(observer: O, mode: InputMode) -> Self {
        Self { observer, mode, tracked: HashMap::new() }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Start observing `target` for `name`. Returns `false` if already tracked.
    pub fn attach(&mut self, name: &str, target: O::Target) -> bool {
        if self.tracked.contains_key(name) {
            return false;
        }
        self.observer.observe(&target);
        self.tracked.insert(name.to_owned(), target);
        true
    }

    pub fn detach(&mut self, name: &str) {
        if let Some(target) = self.tracked.remove(name) {
            self.observer.unobserve(&target);
        }
    }

    pub fn detach_all(&mut self) {
        for (_, target) in self.tracked.drain() {
            self.observer.unobserve(&target);
        }
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked.contains_key(name)
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn on_visible(&self, name: &str) {
        if !self.mode.is_touch() {
            return;
        }
        if let Some(target) = self.tracked.get(name) {
            apply_rate(target);
            target.play();
        }
    }

    pub fn on_hidden(&self, name: &str) {
        if let Some(target) = self.tracked.get(name) {
            target.pause();
        }
    }

    /// Dispatch one observer entry.
    pub fn on_intersection(&self, name: &str, ratio: f64) {
        if ratio >= VISIBLE_THRESHOLD {
            self.on_visible(name);
        } else {
            self.on_hidden(name);
        }
    }
}

impl<O: VisibilityObserver> Drop for ViewportActivator<O> {
    fn drop(&mut self) {
        self.detach_all();
    }
}

/// Attribute on each preview `<video>` naming its template.
pub const TEMPLATE_ATTR: &str = "data-template";

#[cfg(feature = "csr")]
pub use browser::{DomObserver, SharedActivator, browser_activator};

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{InputMode, TEMPLATE_ATTR, VISIBLE_THRESHOLD, ViewportActivator, VisibilityObserver};

    pub type SharedActivator = Rc<RefCell<ViewportActivator<DomObserver>>>;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver` bound to preview videos.
    pub struct DomObserver {
        inner: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl VisibilityObserver for DomObserver {
        type Target = HtmlVideoElement;

        fn observe(&self, target: &HtmlVideoElement) {
            self.inner.observe(target);
        }

        fn unobserve(&self, target: &HtmlVideoElement) {
            self.inner.unobserve(target);
        }
    }

    impl Drop for DomObserver {
        fn drop(&mut self) {
            self.inner.disconnect();
        }
    }

    /// Build an activator whose observer reports back into it.
    ///
    /// # Errors
    ///
    /// Propagates the constructor failure if the browser lacks
    /// `IntersectionObserver`.
    pub fn browser_activator(mode: InputMode) -> Result<SharedActivator, JsValue> {
        let slot: Rc<RefCell<Weak<RefCell<ViewportActivator<DomObserver>>>>> = Rc::default();
        let callback_slot = Rc::clone(&slot);
        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let Some(activator) = callback_slot.borrow().upgrade() else {
                return;
            };
            let Ok(activator) = activator.try_borrow() else {
                return;
            };
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(name) = entry.target().get_attribute(TEMPLATE_ATTR) {
                    activator.on_intersection(&name, entry.intersection_ratio());
                }
            }
        }));

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let activator = Rc::new(RefCell::new(ViewportActivator::new(DomObserver { inner, _callback: callback }, mode)));
        *slot.borrow_mut() = Rc::downgrade(&activator);
        Ok(activator)
    }
}
