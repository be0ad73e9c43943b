//! Dashboard tuning knobs, overridable from the page URL query.
//!
//! DESIGN
//! ======
//! The dashboard is a static bundle, so there is no environment to read.
//! Operators tune a kiosk by bookmarking a URL such as
//! `/?page_size=48&metrics_poll_secs=10`. Unknown keys are ignored and
//! invalid or zero values fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u32 = 24;
pub const DEFAULT_SOURCE_REFRESH_SECS: u64 = 1_800;
pub const DEFAULT_METRICS_POLL_SECS: u64 = 5;
pub const DEFAULT_LOG_POLL_SECS: u64 = 30;
pub const DEFAULT_LOG_HISTORY: usize = 500;

/// Runtime configuration provided via context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Templates requested per page.
    pub page_size: u32,
    /// Interval between media cache-bust refreshes.
    pub source_refresh_secs: u64,
    /// Interval between `/system_metrics` polls.
    pub metrics_poll_secs: u64,
    /// Interval between `/fetch_logs` polls.
    pub log_poll_secs: u64,
    /// Log rows kept in memory.
    pub log_history: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            source_refresh_secs: DEFAULT_SOURCE_REFRESH_SECS,
            metrics_poll_secs: DEFAULT_METRICS_POLL_SECS,
            log_poll_secs: DEFAULT_LOG_POLL_SECS,
            log_history: DEFAULT_LOG_HISTORY,
        }
    }
}

impl DashboardConfig {
    /// Parse overrides from a URL query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let pairs = query_pairs(query);
        Self {
            page_size: query_parse(&pairs, "page_size", DEFAULT_PAGE_SIZE),
            source_refresh_secs: query_parse(&pairs, "source_refresh_secs", DEFAULT_SOURCE_REFRESH_SECS),
            metrics_poll_secs: query_parse(&pairs, "metrics_poll_secs", DEFAULT_METRICS_POLL_SECS),
            log_poll_secs: query_parse(&pairs, "log_poll_secs", DEFAULT_LOG_POLL_SECS),
            log_history: query_parse(&pairs, "log_history", DEFAULT_LOG_HISTORY),
        }
    }

    /// Configuration for the current page.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let config = Self::from_query(&search);
            leptos::logging::log!("dashboard config: {config:?}");
            config
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    pub fn source_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.source_refresh_secs)
    }

    pub fn metrics_poll_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_poll_secs)
    }

    pub fn log_poll_interval(&self) -> Duration {
        Duration::from_secs(self.log_poll_secs)
    }
}

fn query_pairs(query: &str) -> Vec<(&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}

/// Last value for `key` parsed as `T`, or `default` when missing, invalid or zero.
pub(crate) fn query_parse<T>(pairs: &[(&str, &str)], key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + Default + PartialEq,
{
    pairs
        .iter()
        .rev()
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
        .unwrap_or(default)
}
