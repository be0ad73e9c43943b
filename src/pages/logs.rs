//! Logs page: polled server log table with an optional live stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polling replaces the table every few seconds while the live stream is off.
//! Turning the stream on appends rows as they arrive. A stream failure closes
//! it and falls back to polling until the user restarts it.

use leptos::prelude::*;

use crate::components::log_table::LogTable;
use crate::config::DashboardConfig;
use crate::state::logs::LogsState;

#[cfg(feature = "csr")]
async fn poll_logs(logs: RwSignal<LogsState>) {
    let filter = logs.with_untracked(|s| s.filter.clone());
    logs.update(|s| s.loading = true);
    let result = crate::net::api::fetch_logs(&filter).await;
    logs.update(|s| {
        s.loading = false;
        match result {
            Ok(rows) => {
                s.replace_all(rows);
                s.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("log poll failed: {e}");
                s.error = Some(e.inline_message("logs"));
            }
        }
    });
}

#[component]
pub fn LogsPage() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let config = expect_context::<DashboardConfig>();

    #[cfg(feature = "csr")]
    let stream = StoredValue::new_local(None::<crate::net::log_stream::LogStream>);

    #[cfg(feature = "csr")]
    let stop_stream = move || {
        stream.set_value(None);
        logs.update(|s| s.streaming = false);
    };

    #[cfg(feature = "csr")]
    let start_stream = move || {
        use crate::net::log_stream::LogStream;

        stream.set_value(None);
        let filter = logs.with_untracked(|s| s.filter.clone());
        let opened = LogStream::open(
            &filter,
            move |batch| logs.update(|s| s.append_batch(batch)),
            move |err| {
                logs.update(|s| {
                    s.streaming = false;
                    s.error = Some(err.inline_message("logs"));
                });
            },
        );
        match opened {
            Ok(source) => {
                leptos::logging::log!("log stream opened");
                stream.set_value(Some(source));
                logs.update(|s| {
                    s.streaming = true;
                    s.error = None;
                });
            }
            Err(e) => {
                leptos::logging::warn!("log stream failed to open: {e}");
                logs.update(|s| s.error = Some(e.inline_message("logs")));
            }
        }
    };

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let interval = config.log_poll_interval();
        leptos::task::spawn_local(async move {
            loop {
                if !logs.with_untracked(|s| s.streaming) {
                    poll_logs(logs).await;
                }
                gloo_timers::future::sleep(interval).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
        on_cleanup(move || logs.update(|s| s.streaming = false));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let on_filter_change = move |ev| {
        let value = event_target_value(&ev);
        logs.update(|s| s.filter = value.trim().to_owned());
        #[cfg(feature = "csr")]
        {
            if logs.with_untracked(|s| s.streaming) {
                start_stream();
            } else {
                leptos::task::spawn_local(poll_logs(logs));
            }
        }
    };

    let on_live_toggle = move |_| {
        #[cfg(feature = "csr")]
        {
            if logs.with_untracked(|s| s.streaming) {
                stop_stream();
            } else {
                start_stream();
            }
        }
    };

    view! {
        <div class="logs-page">
            <header class="toolbar">
                <a href="/" class="toolbar__back" title="Back to gallery">
                    "←"
                </a>
                <span class="toolbar__title">"Logs"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <input
                    class="toolbar__search"
                    type="search"
                    placeholder="Filter by level, source or message"
                    prop:value=move || logs.with(|s| s.filter.clone())
                    on:change=on_filter_change
                />
                <span class="toolbar__spacer"></span>
                <button
                    class="btn logs-page__live"
                    class:logs-page__live--on=move || logs.with(|s| s.streaming)
                    on:click=on_live_toggle
                >
                    {move || if logs.with(|s| s.streaming) { "Stop Live" } else { "Live" }}
                </button>
            </header>
            <Show when=move || logs.with(|s| s.error.is_some())>
                <p class="logs-page__error" role="alert">{move || logs.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || logs.with(|s| s.loading && s.entries.is_empty())>
                <p>"Loading logs..."</p>
            </Show>
            <LogTable/>
        </div>
    }
}
