// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and click adapters.
//!
//! Both adapters are stateless per event: they intercept, record what the event
//! carried, and call back once.
//!
//! Run:
//! - `cargo run -p understory_demos --example wheel_and_click`

use kurbo::{Point, Vec2};
use understory_gesture::click::Click;
use understory_gesture::host::{EventTarget, GestureEvent};
use understory_gesture::types::{DeltaMode, EventKinds, ListenerMode, WheelDelta};
use understory_gesture::wheel::{Wheel, WheelState};

#[derive(Debug)]
struct Input {
    kind: EventKinds,
    at: Option<Point>,
    wheel: Option<WheelDelta>,
    default_prevented: bool,
}

impl Input {
    fn wheel(dy: f64, mode: DeltaMode) -> Self {
        Self {
            kind: EventKinds::WHEEL,
            at: Some(Point::new(200.0, 150.0)),
            wheel: Some(WheelDelta {
                delta: Vec2::new(0.0, dy),
                mode,
            }),
            default_prevented: false,
        }
    }

    fn click(at: Option<Point>) -> Self {
        Self {
            kind: EventKinds::CLICK,
            at,
            wheel: None,
            default_prevented: false,
        }
    }
}

impl GestureEvent for Input {
    fn kind(&self) -> EventKinds {
        self.kind
    }
    fn client_position(&self) -> Option<Point> {
        self.at
    }
    fn wheel_delta(&self) -> Option<WheelDelta> {
        self.wheel
    }
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
    fn stop_propagation(&mut self) {}
}

/// Target that only understands the legacy capture flag.
struct OldSurface;

impl EventTarget for OldSurface {
    fn add_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        println!("listen {kinds:?} with {mode:?}");
    }
    fn remove_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        println!("unlisten {kinds:?} with {mode:?}");
    }
    fn supports_listener_options(&self) -> bool {
        false
    }
}

fn main() {
    let mut wheel: Wheel<Input, _, OldSurface> = Wheel::new(|s: &WheelState, _: &Input| {
        println!(
            "scroll {:?} ({:?}) at {:?}",
            s.delta(),
            s.delta_mode(),
            s.position()
        );
    });
    let _ = wheel.bind(OldSurface);

    for (dy, mode) in [(120.0, DeltaMode::PIXEL), (3.0, DeltaMode::LINE)] {
        let mut ev = Input::wheel(dy, mode);
        let keep_default = wheel.handle_wheel(&mut ev);
        println!("  keep default: {keep_default}, prevented: {}", ev.default_prevented);
    }
    let _ = wheel.unbind();

    let mut click: Click<Input, _, OldSurface> =
        Click::new(|p: Option<Point>, _: &Input| println!("click at {p:?}"));
    let _ = click.bind(OldSurface);
    click.handle_click(&mut Input::click(Some(Point::new(4.0, 2.0))));
    click.handle_click(&mut Input::click(None));
    let _ = click.unbind();
}
