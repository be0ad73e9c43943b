//! Browser `localStorage` helpers for viewer preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dark mode and grid width survive reloads. Keys are namespaced so the
//! dashboard does not collide with other apps served from the same origin.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key prefix for every stored preference.
pub const KEY_PREFIX: &str = "glimpser.";

/// Fully qualified storage key for `name`.
pub fn storage_key(name: &str) -> String {
    format!("{KEY_PREFIX}{name}")
}

/// Load a JSON preference stored under `name`.
pub fn load_json<T: DeserializeOwned>(name: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&storage_key(name)).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Save a JSON preference under `name`. Failures are ignored.
pub fn save_json<T: Serialize>(name: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(e) = storage.set_item(&storage_key(name), &raw) {
            leptos::logging::warn!("failed to persist {name}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, value);
    }
}
