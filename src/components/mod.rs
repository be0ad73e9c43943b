//! Reusable UI building blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context and emit user intent through
//! callbacks. The gallery sync controller and the polling loops live in pages
//! or in the component that owns the polled region.

pub mod gallery_grid;
pub mod log_table;
pub mod metrics_panel;
pub mod shortcuts_modal;
pub mod template_card;
pub mod template_form;
pub mod toolbar;
