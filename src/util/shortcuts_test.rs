use super::*;

#[test]
fn plain_keys_map_to_actions() {
    assert_eq!(action_for("/", false, false), Some(ShortcutAction::FocusSearch));
    assert_eq!(action_for("d", false, false), Some(ShortcutAction::ToggleDarkMode));
    assert_eq!(action_for("D", false, false), Some(ShortcutAction::ToggleDarkMode));
    assert_eq!(action_for("r", false, false), Some(ShortcutAction::ReloadGallery));
    assert_eq!(action_for("?", false, false), Some(ShortcutAction::ShowHelp));
}

#[test]
fn typing_suppresses_everything_but_escape() {
    assert_eq!(action_for("d", true, false), None);
    assert_eq!(action_for("/", true, false), None);
    assert_eq!(action_for("Escape", true, false), Some(ShortcutAction::CloseHelp));
}

#[test]
fn modified_keys_are_left_to_browser() {
    assert_eq!(action_for("r", false, true), None);
    assert_eq!(action_for("Escape", false, true), None);
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(action_for("x", false, false), None);
    assert_eq!(action_for("Enter", false, false), None);
}

#[test]
fn text_entry_tags_are_case_insensitive() {
    assert!(is_text_entry("INPUT"));
    assert!(is_text_entry("textarea"));
    assert!(is_text_entry("Select"));
    assert!(!is_text_entry("DIV"));
    assert!(!is_text_entry("VIDEO"));
}

#[test]
fn help_table_lists_every_key_binding() {
    let keys = SHORTCUTS.iter().map(|row| row.keys).collect::<Vec<_>>();
    for key in ["/", "D", "R", "?", "Esc"] {
        assert!(keys.contains(&key), "missing {key}");
    }
}
