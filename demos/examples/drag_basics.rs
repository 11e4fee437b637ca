// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag basics.
//!
//! Feeds two scripted pointer sessions through a [`Drag`] engine: a short tap
//! that stays under the threshold (a click), then a real drag over a canvas that
//! is scaled by 2. The custom extractor shifts `start`/`current` into canvas
//! space while `delta` stays in screen pixels.
//!
//! Run:
//! - `cargo run -p understory_demos --example drag_basics`

use core::time::Duration;

use kurbo::Point;
use understory_gesture::config::DragConfig;
use understory_gesture::drag::Drag;
use understory_gesture::handler::DragCallbacks;
use understory_gesture::host::{EventTarget, GestureEvent};
use understory_gesture::state::DragState;
use understory_gesture::types::{EventKinds, ListenerMode};

#[derive(Clone, Debug)]
struct Pointer {
    kind: EventKinds,
    at: Point,
}

impl GestureEvent for Pointer {
    fn kind(&self) -> EventKinds {
        self.kind
    }
    fn client_position(&self) -> Option<Point> {
        Some(self.at)
    }
    fn prevent_default(&mut self) {}
    fn stop_propagation(&mut self) {}
}

/// Prints every listener change so the scope registration is visible.
struct Target(&'static str);

impl EventTarget for Target {
    fn add_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        println!("  [{}] +{:?} {:?}", self.0, kinds, mode);
    }
    fn remove_listeners(&mut self, kinds: EventKinds, mode: ListenerMode) {
        println!("  [{}] -{:?} {:?}", self.0, kinds, mode);
    }
}

fn ev(kind: EventKinds, x: f64, y: f64) -> Pointer {
    Pointer {
        kind,
        at: Point::new(x, y),
    }
}

fn main() {
    let callbacks = DragCallbacks::new()
        .on_beginning(|s: &DragState, _: &Pointer| {
            println!("beginning at {:?}", s.start());
            true
        })
        .on_continuing(|s: &DragState, _: &Pointer| {
            println!("continuing current={:?} delta={:?}", s.current(), s.delta());
        })
        .on_ending(|s: &DragState, _: &Pointer| println!("ending at {:?}", s.current()))
        .on_clicked(|s: &DragState, _: &Pointer| println!("clicked at {:?}", s.start()))
        .on_cleanup(|| println!("cleanup"));

    let config = DragConfig::default()
        .with_extractor(|e: &Pointer| Some(Point::new(e.at.x / 2.0, e.at.y / 2.0)));
    let mut drag = Drag::with_config(Target("window"), config, callbacks);
    let _ = drag.bind(Target("canvas"));

    let t = Duration::from_millis;

    println!("== Tap ==");
    let _ = drag.dispatch(&mut ev(EventKinds::POINTER_DOWN, 10.0, 10.0), t(0));
    let _ = drag.dispatch(&mut ev(EventKinds::POINTER_MOVE, 12.0, 11.0), t(10));
    let _ = drag.dispatch(&mut ev(EventKinds::POINTER_UP, 12.0, 11.0), t(20));

    println!("== Drag ==");
    let _ = drag.dispatch(&mut ev(EventKinds::POINTER_DOWN, 100.0, 100.0), t(1000));
    let mut now = t(1000);
    for step in 1..=10 {
        now += t(16);
        let x = 100.0 + f64::from(step) * 6.0;
        let _ = drag.dispatch(&mut ev(EventKinds::POINTER_MOVE, x, 100.0), now);
        if drag.next_deadline().is_some_and(|d| d <= now) {
            drag.handle_timer(now);
        }
    }
    let _ = drag.dispatch(&mut ev(EventKinds::POINTER_UP, 160.0, 100.0), now + t(5));
    println!("final delta: {:?}", drag.delta());

    let _ = drag.destroy();
}
