//! Test doubles shared by unit tests across modules.

use std::cell::RefCell;
use std::rc::Rc;

use crate::util::playback::PreviewMedia;

/// One call made against a [`FakeMedia`].
#[derive(Clone, Debug, PartialEq)]
pub enum MediaCall {
    SeekTo(f64),
    Rate(f64),
    Play,
    Pause,
    Reload,
}

/// Media double with a fixed duration that records every call in order.
#[derive(Clone, Debug)]
pub struct FakeMedia {
    pub duration: f64,
    pub calls: Rc<RefCell<Vec<MediaCall>>>,
}

impl FakeMedia {
    pub fn new(duration: f64) -> Self {
        Self { duration, calls: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn calls(&self) -> Vec<MediaCall> {
        self.calls.borrow().clone()
    }

    pub fn last_seek(&self) -> Option<f64> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            MediaCall::SeekTo(t) => Some(*t),
            _ => None,
        })
    }
}

impl PreviewMedia for FakeMedia {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_current_time(&self, seconds: f64) {
        self.calls.borrow_mut().push(MediaCall::SeekTo(seconds));
    }

    fn set_playback_rate(&self, rate: f64) {
        self.calls.borrow_mut().push(MediaCall::Rate(rate));
    }

    fn play(&self) {
        self.calls.borrow_mut().push(MediaCall::Play);
    }

    fn pause(&self) {
        self.calls.borrow_mut().push(MediaCall::Pause);
    }

    fn reload(&self) {
        self.calls.borrow_mut().push(MediaCall::Reload);
    }
}
