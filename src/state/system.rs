//! Server health panel state: metrics samples and scheduler status.

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

use std::collections::VecDeque;

use crate::net::types::{SchedulerStatus, SystemMetrics};

/// CPU samples kept for the sparkline.
pub const CPU_HISTORY_LEN: usize = 60;

/// State provided via context as `RwSignal<SystemState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemState {
    pub metrics: Option<SystemMetrics>,
    /// Oldest first, at most [`CPU_HISTORY_LEN`] entries.
    pub cpu_history: VecDeque<f64>,
    pub metrics_error: Option<String>,
    pub scheduler: Option<SchedulerStatus>,
    pub scheduler_busy: bool,
    pub scheduler_error: Option<String>,
}

impl SystemState {
    /// Record a metrics sample and push its CPU value into the history.
    pub fn record(&mut self, metrics: SystemMetrics) {
        if self.cpu_history.len() == CPU_HISTORY_LEN {
            self.cpu_history.pop_front();
        }
        self.cpu_history.push_back(clamp_percent(metrics.cpu_usage));
        self.metrics = Some(metrics);
        self.metrics_error = None;
    }

    /// Polyline points for the CPU sparkline in a `width` x `height` box.
    pub fn sparkline_points(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        sparkline_points(self.cpu_history.iter().copied(), width, height)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Lay out percentage samples: x steps by `width / 59`, y is inverted so
/// 100 % touches the top edge.
pub fn sparkline_points(samples: impl IntoIterator<Item = f64>, width: f64, height: f64) -> Vec<(f64, f64)> {
    #[allow(clippy::cast_precision_loss)]
    let step = width / (CPU_HISTORY_LEN - 1) as f64;
    samples
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 * step;
            (x, height - clamp_percent(value) / 100.0 * height)
        })
        .collect()
}

/// Width style for a usage bar.
pub fn bar_width_css(percent: f64) -> String {
    format!("width: {:.1}%", clamp_percent(percent))
}
