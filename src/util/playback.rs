//! Preview playback model for template video cards.
//!
//! Source clips are time-lapses of very different lengths. Scaling the rate by
//! a coarse duration bucket keeps every preview to roughly a few seconds of
//! wall-clock playback.
//!
//! The handlers here are written against [`PreviewMedia`] so the behavior is
//! testable with a fake; the browser implements it for `HtmlVideoElement`.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

use std::time::Duration;

/// Pause between the end of a clip and its replay.
pub const REPLAY_DELAY: Duration = Duration::from_secs(2);

/// Seconds before the end of a clip used as the resting poster position.
pub const POSTER_TAIL_SECS: f64 = 10.0;

/// Every rate [`rate_for`] can return.
pub const PLAYBACK_RATES: [f64; 8] = [0.0625, 0.125, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

/// Preview playback rate for a clip of `duration_secs`.
///
/// Clips between 60 and 120 seconds (inclusive) fall through to the fastest
/// bucket while longer clips play at 4x. That gap is existing behavior and is
/// kept as-is. A `NaN` duration lands in the same fallthrough bucket.
pub fn rate_for(duration_secs: f64) -> f64 {
    if duration_secs < 1.0 {
        0.0625
    } else if duration_secs < 3.0 {
        0.125
    } else if duration_secs < 7.0 {
        0.25
    } else if duration_secs < 15.0 {
        0.5
    } else if duration_secs < 30.0 {
        1.0
    } else if duration_secs < 60.0 {
        2.0
    } else if duration_secs > 120.0 {
        4.0
    } else {
        8.0
    }
}

/// Resting position so the poster frame favors the end of a time-lapse.
pub fn poster_position(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() {
        (duration_secs - POSTER_TAIL_SECS).max(0.0)
    } else {
        0.0
    }
}

/// Minimal media surface needed by the preview handlers.
pub trait PreviewMedia {
    /// Clip duration in seconds; `NaN` until metadata is loaded.
    fn duration(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn set_playback_rate(&self, rate: f64);
    fn play(&self);
    fn pause(&self);
    /// Reset to the start of the source, showing the poster again.
    fn reload(&self);
}

/// Apply the bucketed rate for the media's current duration.
pub fn apply_rate<M: PreviewMedia + ?Sized>(media: &M) {
    media.set_playback_rate(rate_for(media.duration()));
}

/// `loadedmetadata`: set the rate and park near the end of the clip.
pub fn on_loaded_metadata<M: PreviewMedia + ?Sized>(media: &M) {
    apply_rate(media);
    media.set_current_time(poster_position(media.duration()));
}

/// Pointer entered the card.
pub fn on_hover_enter<M: PreviewMedia + ?Sized>(media: &M) {
    apply_rate(media);
    media.play();
}

/// Pointer left the card.
pub fn on_hover_leave<M: PreviewMedia + ?Sized>(media: &M) {
    media.pause();
    media.reload();
}

/// `play` on touch clients, where playback is started by visibility.
pub fn on_play<M: PreviewMedia + ?Sized>(media: &M) {
    apply_rate(media);
}

/// `ended`: the caller waits the returned delay, then calls [`on_replay`].
pub fn on_ended() -> Duration {
    REPLAY_DELAY
}

/// Restart after the post-clip pause.
pub fn on_replay<M: PreviewMedia + ?Sized>(media: &M) {
    media.reload();
    media.play();
}

#[cfg(feature = "csr")]
impl PreviewMedia for web_sys::HtmlVideoElement {
    fn duration(&self) -> f64 {
        web_sys::HtmlMediaElement::duration(self)
    }

    fn set_current_time(&self, seconds: f64) {
        web_sys::HtmlMediaElement::set_current_time(self, seconds);
    }

    fn set_playback_rate(&self, rate: f64) {
        web_sys::HtmlMediaElement::set_playback_rate(self, rate);
    }

    fn play(&self) {
        // Autoplay rejections surface as a rejected promise; nothing to do.
        let _ = web_sys::HtmlMediaElement::play(self);
    }

    fn pause(&self) {
        let _ = web_sys::HtmlMediaElement::pause(self);
    }

    fn reload(&self) {
        web_sys::HtmlMediaElement::load(self);
    }
}
