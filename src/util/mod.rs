//! Utility helpers shared across dashboard UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure display math
//! from page and component logic so both can be unit tested natively.

pub mod dark_mode;
pub mod playback;
pub mod shortcuts;
pub mod time_format;
pub mod ui_persistence;
