// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic host used by unit tests.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::handler::DragHandler;
use crate::host::{EventTarget, GestureEvent};
use crate::types::{DeltaMode, EventKinds, ListenerMode, WheelDelta};

/// Records listener registrations.
#[derive(Debug)]
pub(crate) struct Recorder {
    legacy: bool,
    live: EventKinds,
    log: Vec<(bool, EventKinds, ListenerMode)>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self {
            legacy: false,
            live: EventKinds::empty(),
            log: Vec::new(),
        }
    }

    /// A target whose probe reports no options-object support.
    pub(crate) fn legacy() -> Self {
        Self {
            legacy: true,
            ..Self::new()
        }
    }

    /// Kinds currently registered.
    pub(crate) fn live(&self) -> EventKinds {
        self.live
    }

    pub(crate) fn adds(&self) -> usize {
        self.log.iter().filter(|(add, ..)| *add).count()
    }

    pub(crate) fn removes(&self) -> usize {
        self.log.iter().filter(|(add, ..)| !*add).count()
    }

    pub(crate) fn last_mode(&self) -> Option<ListenerMode> {
        self.log.last().map(|(_, _, m)| *m)
    }

    /// Every removal matches an earlier add with the same kinds and mode.
    pub(crate) fn symmetric(&self) -> bool {
        let mut open: Vec<(EventKinds, ListenerMode)> = Vec::new();
        for &(add, kinds, mode) in &self.log {
            if add {
                open.push((kinds, mode));
            } else if let Some(i) = open.iter().position(|&o| o == (kinds, mode)) {
                open.remove(i);
            } else {
                return false;
            }
        }
        open.is_empty()
    }
}

impl EventTarget for Recorder {
    fn add_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        self.live.insert(kinds);
        self.log.push((true, kinds, mode));
    }

    fn remove_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        self.live.remove(kinds);
        self.log.push((false, kinds, mode));
    }

    fn supports_listener_options(&self) -> bool {
        !self.legacy
    }
}

/// A synthetic input event.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEvent {
    pub(crate) kind: EventKinds,
    pub(crate) client: Option<Point>,
    pub(crate) touches: Option<Vec<Point>>,
    pub(crate) wheel: Option<WheelDelta>,
    pub(crate) default_prevented: bool,
    pub(crate) propagation_stopped: bool,
}

impl TestEvent {
    pub(crate) fn new(kind: EventKinds) -> Self {
        Self {
            kind,
            client: None,
            touches: None,
            wheel: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    fn at(kind: EventKinds, p: Point) -> Self {
        Self {
            client: Some(p),
            ..Self::new(kind)
        }
    }

    fn with_touches(kind: EventKinds, touches: Vec<Point>) -> Self {
        Self {
            touches: Some(touches),
            ..Self::new(kind)
        }
    }

    pub(crate) fn pointer_down(p: Point) -> Self {
        Self::at(EventKinds::POINTER_DOWN, p)
    }

    pub(crate) fn pointer_down_without_position() -> Self {
        Self::new(EventKinds::POINTER_DOWN)
    }

    pub(crate) fn pointer_move(p: Point) -> Self {
        Self::at(EventKinds::POINTER_MOVE, p)
    }

    pub(crate) fn pointer_up(p: Point) -> Self {
        Self::at(EventKinds::POINTER_UP, p)
    }

    pub(crate) fn touch_start(touches: Vec<Point>) -> Self {
        Self::with_touches(EventKinds::TOUCH_START, touches)
    }

    pub(crate) fn touch_move(touches: Vec<Point>) -> Self {
        Self::with_touches(EventKinds::TOUCH_MOVE, touches)
    }

    pub(crate) fn touch_end(touches: Vec<Point>) -> Self {
        Self::with_touches(EventKinds::TOUCH_END, touches)
    }

    pub(crate) fn select_start() -> Self {
        Self::new(EventKinds::SELECT_START)
    }

    pub(crate) fn wheel(delta: Vec2, mode: DeltaMode, p: Point) -> Self {
        Self {
            wheel: Some(WheelDelta { delta, mode }),
            ..Self::at(EventKinds::WHEEL, p)
        }
    }

    pub(crate) fn click(p: Point) -> Self {
        Self::at(EventKinds::CLICK, p)
    }

    pub(crate) fn intercepted(&self) -> bool {
        self.default_prevented && self.propagation_stopped
    }
}

impl GestureEvent for TestEvent {
    fn kind(&self) -> EventKinds {
        self.kind
    }

    fn client_position(&self) -> Option<Point> {
        self.client
    }

    fn touch_count(&self) -> Option<usize> {
        self.touches.as_ref().map(Vec::len)
    }

    fn touch_position(&self, index: usize) -> Option<Point> {
        self.touches.as_ref()?.get(index).copied()
    }

    fn wheel_delta(&self) -> Option<WheelDelta> {
        self.wheel
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Beginning,
    Continuing,
    Ending,
    Clicked,
    Cleanup,
}

/// Records callbacks with a snapshot of the session state at each one.
#[derive(Debug)]
pub(crate) struct Log<S> {
    pub(crate) calls: Vec<Call>,
    pub(crate) states: Vec<S>,
    pub(crate) accept: bool,
}

impl<S> Default for Log<S> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            states: Vec::new(),
            accept: true,
        }
    }
}

impl<S> Log<S> {
    pub(crate) fn vetoing() -> Self {
        Self {
            accept: false,
            ..Self::default()
        }
    }

    pub(crate) fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }

    pub(crate) fn last_state(&self) -> Option<&S> {
        self.states.last()
    }
}

impl<S: Clone> DragHandler<TestEvent, S> for Log<S> {
    fn beginning(&mut self, state: &S, _event: &TestEvent) -> bool {
        self.calls.push(Call::Beginning);
        self.states.push(state.clone());
        self.accept
    }

    fn continuing(&mut self, state: &S, _event: &TestEvent) {
        self.calls.push(Call::Continuing);
        self.states.push(state.clone());
    }

    fn ending(&mut self, state: &S, _event: &TestEvent) {
        self.calls.push(Call::Ending);
        self.states.push(state.clone());
    }

    fn clicked(&mut self, state: &S, _event: &TestEvent) {
        self.calls.push(Call::Clicked);
        self.states.push(state.clone());
    }

    fn cleanup(&mut self) {
        self.calls.push(Call::Cleanup);
    }
}
