//! Local UI chrome state (theme, grid width, shortcuts dialog).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the gallery and log state so controls
//! can evolve independently of server data. One-shot requests such as
//! "focus the search box" are modeled as sequence counters the target view
//! watches.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::gallery::viewport::InputMode;
use crate::util::{dark_mode, ui_persistence};

/// Default card width in pixels.
pub const DEFAULT_GRID_ITEM_WIDTH: u32 = 360;
/// Narrowest card the slider allows.
pub const MIN_GRID_ITEM_WIDTH: u32 = 100;
/// Widest card the slider allows.
pub const MAX_GRID_ITEM_WIDTH: u32 = 800;

const MIN_FONT_PX: u32 = 8;
const MAX_FONT_PX: u32 = 14;

const GRID_WIDTH_PREF: &str = "grid_item_width";

/// Clamp a slider value into the allowed card width range.
pub fn clamp_grid_width(width: u32) -> u32 {
    width.clamp(MIN_GRID_ITEM_WIDTH, MAX_GRID_ITEM_WIDTH)
}

/// Card caption font size for a card width: `clamp(width / 25, 8, 14)`.
pub fn font_size_for_width(width: u32) -> u32 {
    (width / 25).clamp(MIN_FONT_PX, MAX_FONT_PX)
}

/// CSS `grid-template-columns` value for the gallery.
pub fn grid_columns_css(width: u32, mode: InputMode) -> String {
    if mode.is_touch() {
        "1fr".to_owned()
    } else {
        format!("repeat(auto-fill, minmax({}px, 1fr))", clamp_grid_width(width))
    }
}

/// UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub grid_item_width: u32,
    pub input_mode: InputMode,
    pub show_shortcuts: bool,
    pub show_template_form: bool,
    pub search_focus_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            grid_item_width: DEFAULT_GRID_ITEM_WIDTH,
            input_mode: InputMode::Pointer,
            show_shortcuts: false,
            show_template_form: false,
            search_focus_seq: 0,
        }
    }
}

impl UiState {
    /// Initial state from stored preferences and the client's input mode.
    pub fn load() -> Self {
        let grid_item_width = ui_persistence::load_json::<u32>(GRID_WIDTH_PREF)
            .map_or(DEFAULT_GRID_ITEM_WIDTH, clamp_grid_width);
        Self {
            dark_mode: dark_mode::read_preference(),
            grid_item_width,
            input_mode: InputMode::detect(),
            ..Self::default()
        }
    }

    pub fn font_size_px(&self) -> u32 {
        font_size_for_width(self.grid_item_width)
    }

    pub fn grid_columns(&self) -> String {
        grid_columns_css(self.grid_item_width, self.input_mode)
    }

    /// Set and persist the card width.
    pub fn set_grid_item_width(&mut self, width: u32) {
        self.grid_item_width = clamp_grid_width(width);
        ui_persistence::save_json(GRID_WIDTH_PREF, &self.grid_item_width);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = dark_mode::toggle(self.dark_mode);
    }

    pub fn request_search_focus(&mut self) {
        self.search_focus_seq += 1;
    }
}
