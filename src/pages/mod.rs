//! Route-level page components.

pub mod gallery;
pub mod logs;
