// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel adapter: capture scroll delta, unit, and position per event.
//!
//! ## Behavior
//!
//! - Disabled: the event is left untouched and the host keeps its default handling.
//! - No wheel delta on the event: treated as not a scroll event; left untouched, no callback.
//! - Otherwise the event is intercepted, [`WheelState`] is refreshed, and
//!   [`WheelHandler::scrolling`] runs once.
//!
//! [`Wheel::handle_wheel`] returns `false` when the host must suppress its default
//! scroll, for hosts that read a handler's return value as that signal.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::host::{EventTarget, GestureEvent};
//! use understory_gesture::types::{DeltaMode, EventKinds, ListenerMode, WheelDelta};
//! use understory_gesture::wheel::{Wheel, WheelState};
//!
//! struct Ev;
//! impl GestureEvent for Ev {
//!     fn kind(&self) -> EventKinds { EventKinds::WHEEL }
//!     fn client_position(&self) -> Option<Point> { Some(Point::new(3.0, 4.0)) }
//!     fn wheel_delta(&self) -> Option<WheelDelta> {
//!         Some(WheelDelta { delta: Vec2::new(1.0, 2.0), mode: DeltaMode::PIXEL })
//!     }
//!     fn prevent_default(&mut self) {}
//!     fn stop_propagation(&mut self) {}
//! }
//!
//! struct Surface;
//! impl EventTarget for Surface {
//!     fn add_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
//!     fn remove_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
//! }
//!
//! let mut wheel: Wheel<Ev, _, Surface> = Wheel::new(|s: &WheelState, _: &Ev| {
//!     assert_eq!(s.delta(), Some(Vec2::new(1.0, 2.0)));
//! });
//! assert!(!wheel.handle_wheel(&mut Ev));
//! assert_eq!(wheel.state().position(), Some(Point::new(3.0, 4.0)));
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::binding::SurfaceBinding;
use crate::handler::WheelHandler;
use crate::host::{EventTarget, Extractor, GestureEvent, extract_with};
use crate::types::{DeltaMode, EventKinds};

/// Values captured from the latest wheel event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelState {
    delta: Option<Vec2>,
    delta_mode: Option<DeltaMode>,
    position: Option<Point>,
}

impl WheelState {
    /// Scroll amount as reported by the host.
    pub fn delta(&self) -> Option<Vec2> {
        self.delta
    }

    /// Unit of [`delta`](Self::delta), passed through unchanged.
    pub fn delta_mode(&self) -> Option<DeltaMode> {
        self.delta_mode
    }

    /// Pointer position from the configured extractor.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Stateless wheel adapter bound to a surface.
pub struct Wheel<E, H, S> {
    enabled: bool,
    extract_from_event: Option<Extractor<E>>,
    handler: H,
    state: WheelState,
    binding: SurfaceBinding<S>,
}

impl<E, H, S> fmt::Debug for Wheel<E, H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wheel")
            .field("enabled", &self.enabled)
            .field("custom_extractor", &self.extract_from_event.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E, H, S> Wheel<E, H, S>
where
    E: GestureEvent,
    H: WheelHandler<E>,
    S: EventTarget,
{
    /// Create an enabled, unbound adapter using the absolute position extractor.
    pub fn new(handler: H) -> Self {
        Self {
            enabled: true,
            extract_from_event: None,
            handler,
            state: WheelState::default(),
            binding: SurfaceBinding::new(EventKinds::WHEEL),
        }
    }

    /// Replace the position extractor.
    pub fn with_extractor(mut self, f: impl Fn(&E) -> Option<Point> + 'static) -> Self {
        self.extract_from_event = Some(Box::new(f));
        self
    }

    /// Attach the wheel listener to `surface`, detaching from any previous surface first.
    pub fn bind(&mut self, surface: S) -> Option<S> {
        self.binding.bind(surface)
    }

    /// Detach and release the surface. Idempotent.
    pub fn unbind(&mut self) -> Option<S> {
        self.binding.unbind()
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.binding.surface()
    }

    /// The callback handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the callback handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Enable or disable the adapter.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether wheel events are handled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Values from the latest handled event.
    pub fn state(&self) -> &WheelState {
        &self.state
    }

    /// Handle a wheel event. Returns `false` when the host should suppress its default.
    pub fn handle_wheel(&mut self, event: &mut E) -> bool {
        if !self.enabled {
            return true;
        }
        let Some(wheel) = event.wheel_delta() else {
            tracing::trace!("wheel event without delta ignored");
            return true;
        };
        event.prevent_default();
        event.stop_propagation();

        self.state = WheelState {
            delta: Some(wheel.delta),
            delta_mode: Some(wheel.mode),
            position: extract_with(self.extract_from_event.as_ref(), event),
        };
        self.handler.scrolling(&self.state, event);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Recorder, TestEvent};
    use alloc::vec::Vec;

    type Calls = Vec<WheelState>;

    fn silent() -> Wheel<TestEvent, impl FnMut(&WheelState, &TestEvent), Recorder> {
        Wheel::new(|_: &WheelState, _: &TestEvent| {})
    }

    #[test]
    fn captures_delta_mode_and_position() {
        let mut seen = Calls::new();
        {
            let mut w: Wheel<TestEvent, _, Recorder> =
                Wheel::new(|s: &WheelState, _: &TestEvent| seen.push(s.clone()));
            let mut ev = TestEvent::wheel(Vec2::new(1.0, 2.0), DeltaMode(0), Point::new(3.0, 4.0));
            assert!(!w.handle_wheel(&mut ev));
            assert!(ev.intercepted());
        }
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].delta(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(seen[0].delta_mode(), Some(DeltaMode::PIXEL));
        assert_eq!(seen[0].position(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn custom_extractor_sets_position() {
        let mut w = silent().with_extractor(|e: &TestEvent| {
            e.client.map(|p| Point::new(p.x / 2.0, p.y / 2.0))
        });
        let mut ev = TestEvent::wheel(Vec2::new(0.0, -3.0), DeltaMode::LINE, Point::new(3.0, 4.0));
        w.handle_wheel(&mut ev);
        assert_eq!(w.state().position(), Some(Point::new(1.5, 2.0)));
        assert_eq!(w.state().delta_mode(), Some(DeltaMode::LINE));
    }

    #[test]
    fn unknown_mode_passes_through() {
        let mut w = silent();
        let mut ev = TestEvent::wheel(Vec2::new(0.0, 1.0), DeltaMode(7), Point::ZERO);
        w.handle_wheel(&mut ev);
        assert_eq!(w.state().delta_mode(), Some(DeltaMode(7)));
    }

    #[test]
    fn missing_delta_is_ignored() {
        let mut count = 0;
        {
            let mut w: Wheel<TestEvent, _, Recorder> =
                Wheel::new(|_: &WheelState, _: &TestEvent| count += 1);
            let mut ev = TestEvent::click(Point::new(1.0, 1.0));
            assert!(w.handle_wheel(&mut ev));
            assert!(!ev.default_prevented);
            assert_eq!(w.state(), &WheelState::default());
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn disabled_is_a_full_no_op() {
        let mut w = silent();
        w.set_enabled(false);
        let mut ev = TestEvent::wheel(Vec2::new(1.0, 1.0), DeltaMode::PIXEL, Point::ZERO);
        assert!(w.handle_wheel(&mut ev));
        assert!(!ev.default_prevented);
        assert_eq!(w.state().delta(), None);
    }

    #[test]
    fn missing_position_still_scrolls() {
        let mut w = silent();
        let mut ev = TestEvent::wheel(Vec2::new(1.0, 1.0), DeltaMode::PIXEL, Point::ZERO);
        ev.client = None;
        assert!(!w.handle_wheel(&mut ev));
        assert_eq!(w.state().position(), None);
        assert_eq!(w.state().delta(), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn bind_registers_wheel_listener() {
        let mut w = silent();
        assert!(w.bind(Recorder::new()).is_none());
        assert_eq!(w.surface().unwrap().live(), EventKinds::WHEEL);
        let s = w.unbind().unwrap();
        assert!(s.symmetric());
        assert!(w.unbind().is_none());
    }
}
