use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::testing::{FakeMedia, MediaCall};

#[derive(Clone, Debug, PartialEq)]
enum ObserverCall {
    Observe(f64),
    Unobserve(f64),
}

/// Observer double; targets are identified by their fake duration.
#[derive(Clone, Default)]
struct FakeObserver {
    calls: Rc<RefCell<Vec<ObserverCall>>>,
}

impl VisibilityObserver for FakeObserver {
    type Target = FakeMedia;

    fn observe(&self, target: &FakeMedia) {
        self.calls.borrow_mut().push(ObserverCall::Observe(target.duration));
    }

    fn unobserve(&self, target: &FakeMedia) {
        self.calls.borrow_mut().push(ObserverCall::Unobserve(target.duration));
    }
}

fn activator(mode: InputMode) -> (ViewportActivator<FakeObserver>, FakeObserver) {
    let observer = FakeObserver::default();
    (ViewportActivator::new(observer.clone(), mode), observer)
}

// =============================================================
// attach / detach
// =============================================================

#[test]
fn attach_is_idempotent_per_name() {
    let (mut act, observer) = activator(InputMode::Pointer);
    assert!(act.attach("cam", FakeMedia::new(5.0)));
    assert!(!act.attach("cam", FakeMedia::new(6.0)));
    assert_eq!(*observer.calls.borrow(), vec![ObserverCall::Observe(5.0)]);
    assert_eq!(act.tracked_count(), 1);
}

#[test]
fn detach_unobserves_and_forgets() {
    let (mut act, observer) = activator(InputMode::Pointer);
    act.attach("cam", FakeMedia::new(5.0));
    act.detach("cam");
    act.detach("cam");
    assert!(!act.is_tracked("cam"));
    assert_eq!(
        *observer.calls.borrow(),
        vec![ObserverCall::Observe(5.0), ObserverCall::Unobserve(5.0)]
    );
}

#[test]
fn detach_all_unobserves_everything() {
    let (mut act, observer) = activator(InputMode::Pointer);
    act.attach("a", FakeMedia::new(1.0));
    act.attach("b", FakeMedia::new(2.0));
    act.detach_all();
    assert_eq!(act.tracked_count(), 0);
    let unobserved = observer
        .calls
        .borrow()
        .iter()
        .filter(|c| matches!(c, ObserverCall::Unobserve(_)))
        .count();
    assert_eq!(unobserved, 2);
}

#[test]
fn drop_releases_observed_targets() {
    let (mut act, observer) = activator(InputMode::Pointer);
    act.attach("a", FakeMedia::new(1.0));
    drop(act);
    assert_eq!(observer.calls.borrow().last(), Some(&ObserverCall::Unobserve(1.0)));
}

// =============================================================
// visibility policy
// =============================================================

#[test]
fn touch_plays_when_half_visible() {
    let (mut act, _) = activator(InputMode::Touch);
    let media = FakeMedia::new(90.0);
    act.attach("cam", media.clone());
    act.on_intersection("cam", 0.5);
    assert_eq!(media.calls(), vec![MediaCall::Rate(8.0), MediaCall::Play]);
}

#[test]
fn pointer_does_not_autoplay() {
    let (mut act, _) = activator(InputMode::Pointer);
    let media = FakeMedia::new(90.0);
    act.attach("cam", media.clone());
    act.on_intersection("cam", 1.0);
    assert!(media.calls().is_empty());
}

#[test]
fn below_threshold_pauses_in_any_mode() {
    for mode in [InputMode::Touch, InputMode::Pointer] {
        let (mut act, _) = activator(mode);
        let media = FakeMedia::new(10.0);
        act.attach("cam", media.clone());
        act.on_intersection("cam", 0.49);
        assert_eq!(media.calls(), vec![MediaCall::Pause], "mode {mode:?}");
    }
}

#[test]
fn unknown_names_are_ignored() {
    let (act, _) = activator(InputMode::Touch);
    act.on_intersection("ghost", 1.0);
    act.on_intersection("ghost", 0.0);
    assert_eq!(act.tracked_count(), 0);
}

#[test]
fn detached_card_no_longer_reacts() {
    let (mut act, _) = activator(InputMode::Touch);
    let media = FakeMedia::new(10.0);
    act.attach("cam", media.clone());
    act.detach("cam");
    act.on_intersection("cam", 1.0);
    assert!(media.calls().is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn detect_defaults_to_pointer_outside_browser() {
    assert_eq!(InputMode::detect(), InputMode::Pointer);
}
