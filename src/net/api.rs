//! REST helpers for the dashboard server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): calls return [`ApiError::Unavailable`] so the pure
//! URL/query builders stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; bodies are parsed completely
//! before the caller touches any state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{parse_group_list, parse_log_batch, parse_template_set};
use super::types::{LogEntry, SchedulerStatus, SystemMetrics, TemplateDraft, TemplateSet};
use crate::gallery::sync::TemplateSource;
use crate::state::gallery::TemplateQuery;
use crate::util::time_format::now_utc;

pub const TEMPLATES_ENDPOINT: &str = "/templates";
pub const GROUPS_ENDPOINT: &str = "/groups";
pub const SYSTEM_METRICS_ENDPOINT: &str = "/system_metrics";
pub const SCHEDULER_STATUS_ENDPOINT: &str = "/scheduler_status";
pub const TOGGLE_SCHEDULER_ENDPOINT: &str = "/toggle_scheduler";
pub const FETCH_LOGS_ENDPOINT: &str = "/fetch_logs";
pub const STREAM_LOGS_ENDPOINT: &str = "/stream_logs";

/// Query parameters for `GET /templates`.
pub fn templates_query_pairs(query: &TemplateQuery, stamp: u64) -> Vec<(&'static str, String)> {
    vec![
        ("group", query.group.as_param().to_owned()),
        ("search", query.search.clone()),
        ("page", query.page.to_string()),
        ("per_page", query.per_page.to_string()),
        ("t", stamp.to_string()),
    ]
}

/// Cache-busted URL of the latest clip for `name`.
pub fn last_video_url(name: &str, stamp: u64) -> String {
    format!("/last_video/{name}?t={stamp}")
}

/// Cache-busted URL of the latest screenshot for `name`.
pub fn last_screenshot_url(name: &str, stamp: u64) -> String {
    format!("/last_screenshot/{name}?t={stamp}")
}

/// Detail page for a template.
pub fn template_detail_url(name: &str) -> String {
    format!("/templates/{name}")
}

/// Current time in milliseconds, used as a cache-busting stamp.
pub fn cache_bust() -> u64 {
    let millis = now_utc().unix_timestamp_nanos() / 1_000_000;
    u64::try_from(millis).unwrap_or_default()
}

#[cfg(feature = "csr")]
async fn send_for_text(request: gloo_net::http::RequestBuilder) -> Result<String, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn send_for_json<T: serde::de::DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Fetch one page of templates.
///
/// # Errors
///
/// Network/status failures and a non-object body.
pub async fn fetch_templates(query: &TemplateQuery) -> Result<TemplateSet, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(TEMPLATES_ENDPOINT).query(templates_query_pairs(query, cache_bust()));
        let body = send_for_text(request).await?;
        parse_template_set(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the group labels for the dropdown.
///
/// # Errors
///
/// Network/status failures and a body that is not a string array.
pub async fn fetch_groups() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = send_for_text(gloo_net::http::Request::get(GROUPS_ENDPOINT)).await?;
        parse_group_list(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch CPU/memory/uptime.
///
/// # Errors
///
/// Network/status failures and malformed JSON.
pub async fn fetch_system_metrics() -> Result<SystemMetrics, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(SYSTEM_METRICS_ENDPOINT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_for_json(request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Read the scheduler state.
///
/// # Errors
///
/// Network/status failures and malformed JSON.
pub async fn fetch_scheduler_status() -> Result<SchedulerStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(SCHEDULER_STATUS_ENDPOINT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: super::types::SchedulerStatusResponse = send_for_json(request).await?;
        Ok(body.status)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Flip the scheduler and return its new state.
///
/// # Errors
///
/// Network/status failures and malformed JSON.
pub async fn toggle_scheduler() -> Result<SchedulerStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(TOGGLE_SCHEDULER_ENDPOINT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: super::types::SchedulerStatusResponse = send_for_json(request).await?;
        Ok(body.status)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Query parameters shared by the log endpoints.
pub fn log_query_pairs(filter: &str) -> Vec<(&'static str, String)> {
    vec![("filter", filter.trim().to_owned())]
}

/// Poll the most recent log rows.
///
/// # Errors
///
/// Network/status failures and a body that is not an array of rows.
pub async fn fetch_logs(filter: &str) -> Result<Vec<LogEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(FETCH_LOGS_ENDPOINT).query(log_query_pairs(filter));
        let body = send_for_text(request).await?;
        parse_log_batch(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Create or update a template via `POST /templates`.
///
/// # Errors
///
/// Network/status failures.
pub async fn create_template(draft: &TemplateDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(TEMPLATES_ENDPOINT)
            .json(draft)
            .map_err(|e| ApiError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// [`TemplateSource`] backed by `GET /templates`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTemplateSource;

impl TemplateSource for HttpTemplateSource {
    fn fetch_templates(&self, query: &TemplateQuery) -> impl Future<Output = Result<TemplateSet, ApiError>> {
        let query = query.clone();
        async move { fetch_templates(&query).await }
    }
}
