//! Live server log subscription over Server-Sent Events.
//!
//! Each `message` event carries a JSON array of log rows. A bad payload is
//! logged and dropped without touching the table. On any stream error the
//! `EventSource` is closed for good: the browser's built-in reconnect is
//! suppressed, and a new stream is only opened by an explicit user action.

#[cfg(test)]
#[path = "log_stream_test.rs"]
mod log_stream_test;

use super::api::STREAM_LOGS_ENDPOINT;
use super::types::{LogEntry, parse_log_batch};
#[cfg(feature = "csr")]
use super::error::ApiError;

/// Stream URL for an already percent-encoded filter value.
pub fn stream_url(encoded_filter: &str) -> String {
    if encoded_filter.is_empty() {
        STREAM_LOGS_ENDPOINT.to_owned()
    } else {
        format!("{STREAM_LOGS_ENDPOINT}?filter={encoded_filter}")
    }
}

/// Decode one SSE payload, logging and discarding malformed ones.
pub fn decode_message(raw: &str) -> Option<Vec<LogEntry>> {
    match parse_log_batch(raw) {
        Ok(batch) => Some(batch),
        Err(e) => {
            leptos::logging::warn!("dropping log stream message: {e}");
            None
        }
    }
}

/// Open `EventSource`; closed when dropped.
#[cfg(feature = "csr")]
pub struct LogStream {
    source: web_sys::EventSource,
    _on_message: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
    _on_error: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "csr")]
impl LogStream {
    /// Subscribe to `/stream_logs` with `filter`.
    ///
    /// `on_batch` receives each decoded batch; `on_closed` fires once when
    /// the stream fails and has been closed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Stream`] if the browser refuses to create the source.
    pub fn open(
        filter: &str,
        on_batch: impl Fn(Vec<LogEntry>) + 'static,
        on_closed: impl Fn(ApiError) + 'static,
    ) -> Result<Self, ApiError> {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let encoded = String::from(js_sys::encode_uri_component(filter.trim()));
        let source = web_sys::EventSource::new(&stream_url(&encoded))
            .map_err(|e| ApiError::Stream(format!("{e:?}")))?;

        let on_message = Closure::wrap(Box::new(move |ev: web_sys::MessageEvent| {
            let Some(raw) = ev.data().as_string() else {
                leptos::logging::warn!("log stream message without text payload");
                return;
            };
            if let Some(batch) = decode_message(&raw) {
                on_batch(batch);
            }
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);

        let source_for_error = source.clone();
        let on_error = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            if source_for_error.ready_state() == web_sys::EventSource::CLOSED {
                return;
            }
            source_for_error.close();
            leptos::logging::warn!("log stream error; closed until restarted");
            on_closed(ApiError::Stream("connection lost".to_owned()));
        }) as Box<dyn FnMut(web_sys::Event)>);

        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self { source, _on_message: on_message, _on_error: on_error })
    }

    /// Close the stream now.
    pub fn close(&self) {
        self.source.close();
    }
}

#[cfg(feature = "csr")]
impl Drop for LogStream {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}
