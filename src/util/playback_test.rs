use super::*;
use crate::testing::{FakeMedia, MediaCall};

// =============================================================
// rate_for buckets
// =============================================================

#[test]
fn rate_for_short_clips_play_slowly() {
    assert_eq!(rate_for(0.0), 0.0625);
    assert_eq!(rate_for(0.5), 0.0625);
    assert_eq!(rate_for(1.0), 0.125);
    assert_eq!(rate_for(2.99), 0.125);
    assert_eq!(rate_for(3.0), 0.25);
    assert_eq!(rate_for(7.0), 0.5);
    assert_eq!(rate_for(15.0), 1.0);
    assert_eq!(rate_for(30.0), 2.0);
}

#[test]
fn rate_for_keeps_sixty_to_one_twenty_gap() {
    assert_eq!(rate_for(59.9), 2.0);
    assert_eq!(rate_for(60.0), 8.0);
    assert_eq!(rate_for(90.0), 8.0);
    assert_eq!(rate_for(120.0), 8.0);
    assert_eq!(rate_for(120.5), 4.0);
    assert_eq!(rate_for(3_600.0), 4.0);
}

#[test]
fn rate_for_non_finite_falls_through() {
    assert_eq!(rate_for(f64::NAN), 8.0);
    assert_eq!(rate_for(f64::INFINITY), 4.0);
}

#[test]
fn rate_for_always_returns_enumerated_constant() {
    let mut d = 0.0;
    while d < 400.0 {
        let rate = rate_for(d);
        assert!(PLAYBACK_RATES.contains(&rate), "unexpected rate {rate} for {d}");
        d += 0.25;
    }
}

#[test]
fn rate_for_is_constant_within_bucket() {
    for (lo, hi) in [(0.0, 0.99), (1.0, 2.99), (3.0, 6.99), (7.0, 14.99), (15.0, 29.99), (30.0, 59.99), (60.0, 120.0)] {
        assert_eq!(rate_for(lo), rate_for(hi), "bucket {lo}..{hi}");
    }
}

// =============================================================
// poster_position
// =============================================================

#[test]
fn poster_position_clamps_at_zero() {
    assert_eq!(poster_position(0.5), 0.0);
    assert_eq!(poster_position(10.0), 0.0);
    assert_eq!(poster_position(90.0), 80.0);
}

#[test]
fn poster_position_ignores_unknown_duration() {
    assert_eq!(poster_position(f64::NAN), 0.0);
    assert_eq!(poster_position(f64::INFINITY), 0.0);
}

// =============================================================
// Media handlers
// =============================================================

#[test]
fn loaded_metadata_sets_rate_then_seeks_near_end() {
    let media = FakeMedia::new(90.0);
    on_loaded_metadata(&media);
    assert_eq!(media.calls(), vec![MediaCall::Rate(8.0), MediaCall::SeekTo(80.0)]);
}

#[test]
fn hover_enter_plays_at_modeled_rate() {
    let media = FakeMedia::new(20.0);
    on_hover_enter(&media);
    assert_eq!(media.calls(), vec![MediaCall::Rate(1.0), MediaCall::Play]);
}

#[test]
fn hover_leave_pauses_and_resets_to_poster() {
    let media = FakeMedia::new(20.0);
    on_hover_leave(&media);
    assert_eq!(media.calls(), vec![MediaCall::Pause, MediaCall::Reload]);
}

#[test]
fn touch_play_only_adjusts_rate() {
    let media = FakeMedia::new(2.0);
    on_play(&media);
    assert_eq!(media.calls(), vec![MediaCall::Rate(0.125)]);
}

#[test]
fn ended_waits_two_seconds_then_replays_from_start() {
    let media = FakeMedia::new(5.0);
    assert_eq!(on_ended(), Duration::from_secs(2));
    on_replay(&media);
    assert_eq!(media.calls(), vec![MediaCall::Reload, MediaCall::Play]);
}
