//! Error taxonomy for server calls.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recovered locally by the caller: the affected UI region
//! shows an inline message and keeps its stale data. Nothing here is retried
//! automatically.

/// Failure of a request to the dashboard server.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body was not the JSON shape the endpoint promises.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The live log stream failed and was closed.
    #[error("log stream closed: {0}")]
    Stream(String),
    /// Browser-only call made from a native build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Short text for the inline error slot of a UI region.
    pub fn inline_message(&self, region: &str) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => format!("Error loading {region}: server unreachable"),
            Self::Status(code) => format!("Error loading {region}: server returned {code}"),
            Self::Malformed(_) => format!("Error loading {region}: unexpected response"),
            Self::Stream(_) => format!("Live {region} disconnected"),
        }
    }
}
