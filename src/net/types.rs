//! Wire DTOs for the dashboard server and their validation.
//!
//! DESIGN
//! ======
//! Template records arrive as a loosely typed JSON object keyed by name.
//! They are validated here, once, into [`Template`]; a bad entry is logged
//! and skipped so one broken camera never blanks the whole gallery.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::error::ApiError;
use crate::util::time_format::parse_timestamp;

/// A camera source tracked by the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Unique key; also the path segment for media endpoints.
    pub name: String,
    /// Group labels; empty means ungrouped.
    pub groups: BTreeSet<String>,
    pub last_caption: String,
    pub last_screenshot_time: Option<OffsetDateTime>,
    /// Informational only; not ordered against `last_screenshot_time`.
    pub next_screenshot_time: Option<OffsetDateTime>,
    pub notes: String,
}

impl Template {
    /// A template with only a name, used by tests and optimistic inserts.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: BTreeSet::new(),
            last_caption: String::new(),
            last_screenshot_time: None,
            next_screenshot_time: None,
            notes: String::new(),
        }
    }

    /// Whether the template belongs to `group`.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}

/// Raw record as served by `GET /templates`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct TemplateRecord {
    #[serde(default)]
    groups: Option<String>,
    #[serde(default)]
    last_caption: Option<String>,
    #[serde(default)]
    last_screenshot_time: Option<String>,
    #[serde(default)]
    next_screenshot_time: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// Parsed `GET /templates` response, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateSet {
    pub templates: Vec<Template>,
    /// Entries the server sent, including ones skipped as malformed.
    pub returned: usize,
}

/// Split a comma-separated group string into trimmed, non-empty labels.
pub fn parse_groups(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_optional_time(field: &str, raw: Option<&str>) -> Result<Option<OffsetDateTime>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value)
            .map(Some)
            .ok_or_else(|| format!("{field}: unrecognized timestamp {value:?}")),
    }
}

fn template_from_value(name: &str, value: serde_json::Value) -> Result<Template, String> {
    if name.trim().is_empty() {
        return Err("empty template name".to_owned());
    }
    if !value.is_object() {
        return Err("record is not an object".to_owned());
    }
    let record: TemplateRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;
    Ok(Template {
        name: name.to_owned(),
        groups: record.groups.as_deref().map(parse_groups).unwrap_or_default(),
        last_caption: record.last_caption.unwrap_or_default(),
        last_screenshot_time: parse_optional_time("last_screenshot_time", record.last_screenshot_time.as_deref())?,
        next_screenshot_time: parse_optional_time("next_screenshot_time", record.next_screenshot_time.as_deref())?,
        notes: record.notes.unwrap_or_default(),
    })
}

/// Parse a `GET /templates` body.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] when the body is not a JSON object.
/// Individual malformed entries are skipped, not errors.
pub fn parse_template_set(body: &str) -> Result<TemplateSet, ApiError> {
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let returned = entries.len();
    let mut templates = Vec::with_capacity(returned);
    for (name, value) in entries {
        match template_from_value(&name, value) {
            Ok(template) => templates.push(template),
            Err(reason) => leptos::logging::warn!("skipping template {name:?}: {reason}"),
        }
    }
    Ok(TemplateSet { templates, returned })
}

/// Parse a `GET /groups` body into labels, dropping blanks.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] when the body is not a JSON string array.
pub fn parse_group_list(body: &str) -> Result<Vec<String>, ApiError> {
    let groups: Vec<String> = serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(groups
        .into_iter()
        .map(|g| g.trim().to_owned())
        .filter(|g| !g.is_empty())
        .collect())
}

/// `GET /system_metrics` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Percent, 0-100.
    pub cpu_usage: f64,
    /// Percent, 0-100.
    pub memory_usage: f64,
    #[serde(default)]
    pub uptime: String,
}

/// Capture scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerStatus {
    Running,
    Stopped,
}

impl SchedulerStatus {
    /// Label for the toggle button, naming what a click will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Running => "Stop Scheduler",
            Self::Stopped => "Start Scheduler",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

/// `{status}` envelope returned by the scheduler endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStatusResponse {
    pub status: SchedulerStatus,
}

/// One server log row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub message: String,
}

/// Parse a JSON array of log rows (SSE `message` payloads and `/fetch_logs`).
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] if the payload is not an array of rows.
pub fn parse_log_batch(raw: &str) -> Result<Vec<LogEntry>, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Template names the server accepts: `[A-Za-z0-9_.-]{1,32}`.
pub const MAX_TEMPLATE_NAME_LEN: usize = 32;
/// One year of minutes; the server rejects larger capture intervals.
pub const MAX_FREQUENCY_MINUTES: u32 = 525_600;

/// Client-side validation failure for a new template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("name must be 1-32 characters of letters, digits, '_', '-' or '.'")]
    InvalidName,
    #[error("{0} must be a whole number")]
    InvalidNumber(&'static str),
    #[error("frequency cannot be greater than 525600 (1 year)")]
    FrequencyTooLarge,
    #[error("timeout must be less than frequency")]
    TimeoutNotBelowFrequency,
}

/// Body of `POST /templates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateDraft {
    pub name: String,
    pub url: String,
    pub groups: String,
    pub frequency: u32,
    pub timeout: u32,
    pub notes: String,
}

/// Whether `name` is an acceptable template key.
pub fn is_valid_template_name(name: &str) -> bool {
    (1..=MAX_TEMPLATE_NAME_LEN).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl TemplateDraft {
    /// Build a draft from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found, checked in field order.
    pub fn from_form(
        name: &str,
        url: &str,
        groups: &str,
        frequency: &str,
        timeout: &str,
        notes: &str,
    ) -> Result<Self, DraftError> {
        let frequency = frequency
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidNumber("frequency"))?;
        let timeout = timeout
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidNumber("timeout"))?;
        let draft = Self {
            name: name.trim().to_owned(),
            url: url.trim().to_owned(),
            groups: parse_groups(groups).into_iter().collect::<Vec<_>>().join(","),
            frequency,
            timeout,
            notes: notes.to_owned(),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Mirror of the server's template validation.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !is_valid_template_name(&self.name) {
            return Err(DraftError::InvalidName);
        }
        if self.frequency > MAX_FREQUENCY_MINUTES {
            return Err(DraftError::FrequencyTooLarge);
        }
        if self.timeout >= self.frequency {
            return Err(DraftError::TimeoutNotBelowFrequency);
        }
        Ok(())
    }
}
