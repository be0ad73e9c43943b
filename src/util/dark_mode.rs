//! Dark mode preference and theme application.
//!
//! The stored preference wins; without one the system
//! `prefers-color-scheme` query decides. The theme is applied as a
//! `data-theme` attribute on `<html>` so the stylesheet can key off it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::ui_persistence;

const PREFERENCE_NAME: &str = "dark_mode";

/// Theme attribute value for a dark-mode flag.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference, falling back to the system setting.
pub fn read_preference() -> bool {
    if let Some(stored) = ui_persistence::load_json::<bool>(PREFERENCE_NAME) {
        return stored;
    }
    prefers_dark_scheme()
}

fn prefers_dark_scheme() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    ui_persistence::save_json(PREFERENCE_NAME, &next);
    next
}
