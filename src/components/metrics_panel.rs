//! Server health panel: CPU/memory bars, CPU sparkline and scheduler toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns its polling loop. Metrics and scheduler status are polled
//! together; a failed poll only marks the panel stale and the loop keeps its
//! interval.

use leptos::html::Canvas;
use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::net::types::SchedulerStatus;
use crate::state::system::{SystemState, bar_width_css};

#[component]
pub fn MetricsPanel() -> impl IntoView {
    let system = expect_context::<RwSignal<SystemState>>();
    let config = expect_context::<DashboardConfig>();
    let sparkline_ref = NodeRef::<Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let interval = config.metrics_poll_interval();
        leptos::task::spawn_local(async move {
            loop {
                poll_system(system).await;
                gloo_timers::future::sleep(interval).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));

        Effect::new(move || {
            let points = system.with(|s| s.cpu_history.clone());
            let Some(canvas) = sparkline_ref.get() else {
                return;
            };
            draw_sparkline(&canvas, points.into_iter());
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let cpu = move || system.with(|s| s.metrics.as_ref().map_or(0.0, |m| m.cpu_usage));
    let memory = move || system.with(|s| s.metrics.as_ref().map_or(0.0, |m| m.memory_usage));
    let uptime = move || system.with(|s| s.metrics.as_ref().map(|m| m.uptime.clone()).unwrap_or_default());
    let scheduler_label = move || {
        system.with(|s| s.scheduler.map_or("Scheduler unknown", SchedulerStatus::toggle_label))
    };
    let scheduler_state = move || system.with(|s| s.scheduler.map_or("unknown", SchedulerStatus::as_str));

    let on_toggle = move |_| {
        if system.with_untracked(|s| s.scheduler_busy) {
            return;
        }
        system.update(|s| s.scheduler_busy = true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::toggle_scheduler().await;
            system.update(|s| {
                s.scheduler_busy = false;
                match result {
                    Ok(status) => {
                        s.scheduler = Some(status);
                        s.scheduler_error = None;
                    }
                    Err(e) => {
                        leptos::logging::warn!("scheduler toggle failed: {e}");
                        s.scheduler_error = Some(e.inline_message("scheduler"));
                    }
                }
            });
        });
    };

    view! {
        <aside class="metrics-panel">
            <div class="metrics-panel__row">
                <span class="metrics-panel__label">"CPU"</span>
                <span class="metrics-panel__bar">
                    <span class="metrics-panel__fill" style=move || bar_width_css(cpu())></span>
                </span>
                <span class="metrics-panel__value">{move || format!("{:.1}%", cpu())}</span>
            </div>
            <div class="metrics-panel__row">
                <span class="metrics-panel__label">"Memory"</span>
                <span class="metrics-panel__bar">
                    <span class="metrics-panel__fill" style=move || bar_width_css(memory())></span>
                </span>
                <span class="metrics-panel__value">{move || format!("{:.1}%", memory())}</span>
            </div>
            <div class="metrics-panel__row">
                <span class="metrics-panel__label">"Uptime"</span>
                <span class="metrics-panel__value">{uptime}</span>
            </div>
            <canvas class="metrics-panel__sparkline" node_ref=sparkline_ref aria-hidden="true"></canvas>
            <Show when=move || system.with(|s| s.metrics_error.is_some())>
                <p class="metrics-panel__error">{move || system.with(|s| s.metrics_error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="metrics-panel__scheduler">
                <span class="metrics-panel__scheduler-state">"Scheduler: " {scheduler_state}</span>
                <button
                    class="btn metrics-panel__scheduler-toggle"
                    on:click=on_toggle
                    disabled=move || system.with(|s| s.scheduler.is_none() || s.scheduler_busy)
                >
                    {scheduler_label}
                </button>
            </div>
            <Show when=move || system.with(|s| s.scheduler_error.is_some())>
                <p class="metrics-panel__error">{move || system.with(|s| s.scheduler_error.clone().unwrap_or_default())}</p>
            </Show>
        </aside>
    }
}

#[cfg(feature = "csr")]
async fn poll_system(system: RwSignal<SystemState>) {
    match crate::net::api::fetch_system_metrics().await {
        Ok(metrics) => system.update(|s| s.record(metrics)),
        Err(e) => {
            leptos::logging::warn!("metrics poll failed: {e}");
            system.update(|s| s.metrics_error = Some(e.inline_message("metrics")));
        }
    }
    match crate::net::api::fetch_scheduler_status().await {
        Ok(status) => system.update(|s| s.scheduler = Some(status)),
        Err(e) => leptos::logging::warn!("scheduler status poll failed: {e}"),
    }
}

#[cfg(feature = "csr")]
fn draw_sparkline(canvas: &web_sys::HtmlCanvasElement, samples: impl Iterator<Item = f64>) {
    use wasm_bindgen::JsCast as _;

    let width_css = f64::from(canvas.client_width().max(1));
    let height_css = f64::from(canvas.client_height().max(1));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width_css.round() as u32);
        canvas.set_height(height_css.round() as u32);
    }

    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, width_css, height_css);
    let points = crate::state::system::sparkline_points(samples, width_css, height_css);
    let Some(((x0, y0), rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.set_stroke_style_str("#3fa66b");
    ctx.set_line_width(1.5);
    ctx.move_to(*x0, *y0);
    for (x, y) in rest {
        ctx.line_to(*x, *y);
    }
    ctx.stroke();
}
