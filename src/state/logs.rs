//! Log viewer state: rows from polling and the live stream.
//!
//! DESIGN
//! ======
//! Both sources feed the same bounded history, newest last. Polling replaces
//! the history wholesale; stream batches append and the oldest rows fall off
//! once the cap is reached.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use std::collections::VecDeque;

use crate::config::DEFAULT_LOG_HISTORY;
use crate::net::types::LogEntry;

/// State provided via context as `RwSignal<LogsState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogsState {
    pub entries: VecDeque<LogEntry>,
    pub capacity: usize,
    /// Text typed into the filter box; sent to the server and applied locally.
    pub filter: String,
    pub streaming: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for LogsState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_HISTORY)
    }
}

impl LogsState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            filter: String::new(),
            streaming: false,
            loading: false,
            error: None,
        }
    }

    /// Replace the history with a polled snapshot, keeping the newest rows.
    pub fn replace_all(&mut self, rows: Vec<LogEntry>) {
        self.entries.clear();
        self.append_batch(rows);
    }

    /// Append streamed rows, evicting the oldest beyond capacity.
    pub fn append_batch(&mut self, rows: Vec<LogEntry>) {
        self.entries.extend(rows);
        let overflow = self.entries.len().saturating_sub(self.capacity);
        self.entries.drain(..overflow);
    }

    /// Rows whose level, source or message contain the filter, case-insensitively.
    pub fn filtered(&self) -> Vec<&LogEntry> {
        let needle = self.filter.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|row| needle.is_empty() || row_matches(row, &needle))
            .collect()
    }
}

fn row_matches(row: &LogEntry, needle: &str) -> bool {
    row.level.to_lowercase().contains(needle)
        || row.source.to_lowercase().contains(needle)
        || row.message.to_lowercase().contains(needle)
}

/// CSS class for a log level badge.
pub fn level_class(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "ERROR" | "CRITICAL" => "log-level log-level--error",
        "WARNING" | "WARN" => "log-level log-level--warn",
        "DEBUG" => "log-level log-level--debug",
        _ => "log-level",
    }
}
