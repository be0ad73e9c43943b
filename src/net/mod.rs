//! Networking modules for the dashboard server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `log_stream` owns the SSE subscription, `types`
//! defines and validates the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod log_stream;
pub mod types;
