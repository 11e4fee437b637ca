// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch drag.
//!
//! Two fingers land, the second one drags far enough to pass the threshold, then
//! one finger lifts. Slots follow list order, so the remaining contact is read
//! into slot 0. The session ends once, reporting per-slot deltas.
//!
//! Run:
//! - `cargo run -p understory_demos --example multi_touch`

use core::time::Duration;

use kurbo::Point;
use understory_gesture::handler::DragHandler;
use understory_gesture::host::{EventTarget, GestureEvent};
use understory_gesture::multi::MultiDrag;
use understory_gesture::state::MultiDragState;
use understory_gesture::types::{EventKinds, ListenerMode};

#[derive(Clone, Debug)]
struct Touch {
    kind: EventKinds,
    contacts: Vec<Point>,
}

impl GestureEvent for Touch {
    fn kind(&self) -> EventKinds {
        self.kind
    }
    fn client_position(&self) -> Option<Point> {
        None
    }
    fn touch_count(&self) -> Option<usize> {
        Some(self.contacts.len())
    }
    fn touch_position(&self, index: usize) -> Option<Point> {
        self.contacts.get(index).copied()
    }
    fn prevent_default(&mut self) {}
    fn stop_propagation(&mut self) {}
}

struct Quiet;

impl EventTarget for Quiet {
    fn add_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
    fn remove_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
}

/// Handler that prints each slot.
struct Report;

impl Report {
    fn slots(state: &MultiDragState) {
        for i in 0..state.slot_count() {
            println!(
                "  slot {i}: start={:?} now={:?} delta={:?}",
                state.start_position(i),
                state.temp_position(i),
                state.delta(i)
            );
        }
    }
}

impl DragHandler<Touch, MultiDragState> for Report {
    fn beginning(&mut self, state: &MultiDragState, _: &Touch) -> bool {
        println!("beginning with {} contacts", state.slot_count());
        true
    }
    fn continuing(&mut self, state: &MultiDragState, _: &Touch) {
        println!("continuing");
        Self::slots(state);
    }
    fn ending(&mut self, state: &MultiDragState, _: &Touch) {
        println!("ending");
        Self::slots(state);
    }
    fn clicked(&mut self, _: &MultiDragState, _: &Touch) {
        println!("tap");
    }
}

fn touch(kind: EventKinds, contacts: &[(f64, f64)]) -> Touch {
    Touch {
        kind,
        contacts: contacts.iter().map(|&(x, y)| Point::new(x, y)).collect(),
    }
}

fn main() {
    let mut multi: MultiDrag<Touch, Report, Quiet, Quiet> = MultiDrag::new(Quiet, Report);
    let _ = multi.bind(Quiet);

    let t = Duration::from_millis;
    let _ = multi.dispatch(
        &mut touch(EventKinds::TOUCH_START, &[(0.0, 0.0), (50.0, 0.0)]),
        t(0),
    );
    let _ = multi.dispatch(
        &mut touch(EventKinds::TOUCH_MOVE, &[(1.0, 0.0), (70.0, 10.0)]),
        t(50),
    );
    let _ = multi.dispatch(&mut touch(EventKinds::TOUCH_END, &[(70.0, 12.0)]), t(120));

    // A second contact list without movement is a tap.
    let _ = multi.dispatch(&mut touch(EventKinds::TOUCH_START, &[(5.0, 5.0)]), t(500));
    let _ = multi.dispatch(&mut touch(EventKinds::TOUCH_END, &[]), t(520));
}
