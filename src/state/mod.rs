//! Reactive state for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each concern is a plain struct wrapped in an `RwSignal` and provided via
//! context by `app`. `template_store` is the exception: it is owned by the
//! gallery sync controller and never exposed as a signal.

pub mod gallery;
pub mod logs;
pub mod system;
pub mod template_store;
pub mod ui;
