//! Keyboard shortcut mapping for the gallery page.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Action bound to a key on the gallery page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    FocusSearch,
    ToggleDarkMode,
    ReloadGallery,
    ShowHelp,
    CloseHelp,
}

/// Row in the help table.
#[derive(Clone, Copy, Debug)]
pub struct ShortcutRow {
    pub action: &'static str,
    pub keys: &'static str,
}

pub const SHORTCUTS: &[ShortcutRow] = &[
    ShortcutRow { action: "Focus search", keys: "/" },
    ShortcutRow { action: "Toggle dark mode", keys: "D" },
    ShortcutRow { action: "Reload gallery", keys: "R" },
    ShortcutRow { action: "Show shortcuts", keys: "?" },
    ShortcutRow { action: "Close dialog", keys: "Esc" },
    ShortcutRow { action: "Preview clip", keys: "Hover (or scroll into view on touch)" },
];

/// Map a `KeyboardEvent.key` value to an action.
///
/// While the focus is in a text field only `Escape` is honored, so typing a
/// search term never toggles the theme. Modified keys (Ctrl/Cmd/Alt) are
/// left to the browser.
pub fn action_for(key: &str, typing: bool, modified: bool) -> Option<ShortcutAction> {
    if modified {
        return None;
    }
    if key == "Escape" {
        return Some(ShortcutAction::CloseHelp);
    }
    if typing {
        return None;
    }
    match key {
        "/" => Some(ShortcutAction::FocusSearch),
        "d" | "D" => Some(ShortcutAction::ToggleDarkMode),
        "r" | "R" => Some(ShortcutAction::ReloadGallery),
        "?" => Some(ShortcutAction::ShowHelp),
        _ => None,
    }
}

/// Whether an element tag name accepts typed text.
pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(tag_name.to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}
