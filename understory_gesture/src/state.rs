// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state for drag gestures, plus the pure helpers both engines share.
//!
//! ## Coordinates
//!
//! Each session keeps two views of where it started:
//! - `start`: the caller-space point from the (possibly custom) extractor.
//! - `absolute_start`: the same instant from the default extractor.
//!
//! Deltas are always absolute-to-absolute, and `current` is `start + delta`.
//! A custom extractor therefore shifts `start`/`current` but never changes `delta`.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

/// Movement between two absolute positions.
pub fn delta_between(absolute_start: Point, absolute_current: Point) -> Vec2 {
    absolute_current - absolute_start
}

/// Caller-space position reached after moving `delta` from `start`.
pub fn relative_position(start: Point, delta: Vec2) -> Point {
    start + delta
}

/// Whether `delta` is long enough to classify the session as a drag.
pub fn reaches_threshold(delta: Vec2, minimum: f64) -> bool {
    delta.hypot() >= minimum
}

/// State of a single-pointer drag session.
///
/// Every field is `None` until a session sets it, and all are cleared when the
/// next session begins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    pub(crate) start: Option<Point>,
    pub(crate) absolute_start: Option<Point>,
    pub(crate) current: Option<Point>,
    pub(crate) delta: Option<Vec2>,
    pub(crate) dragged: bool,
}

impl DragState {
    /// Where the session began, in caller space.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Where the session began, in the absolute frame.
    pub fn absolute_start(&self) -> Option<Point> {
        self.absolute_start
    }

    /// Latest position, in caller space.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Latest movement since the start, in the absolute frame.
    pub fn delta(&self) -> Option<Vec2> {
        self.delta
    }

    /// Whether the session has crossed the drag threshold.
    pub fn dragged(&self) -> bool {
        self.dragged
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn begin(&mut self, start: Point, absolute_start: Point) {
        self.start = Some(start);
        self.absolute_start = Some(absolute_start);
        self.current = None;
        self.delta = None;
        self.dragged = false;
    }

    /// Recompute `delta` and `current` from a fresh absolute position.
    ///
    /// Returns `false` if no session has begun.
    pub(crate) fn advance(&mut self, absolute_current: Point) -> bool {
        let (Some(start), Some(absolute_start)) = (self.start, self.absolute_start) else {
            return false;
        };
        let delta = delta_between(absolute_start, absolute_current);
        self.delta = Some(delta);
        self.current = Some(relative_position(start, delta));
        true
    }

    /// Latch `dragged` once the delta reaches `minimum`; never unlatches.
    pub(crate) fn latch(&mut self, minimum: f64) -> bool {
        if !self.dragged {
            self.dragged = self.delta.is_some_and(|d| reaches_threshold(d, minimum));
        }
        self.dragged
    }
}

/// State of a multi-touch drag session.
///
/// Sequences are indexed by slot: the contact's position in the start event's
/// touch list. Slots are fixed for the session's lifetime.
///
/// As with [`DragState`], a slot's latest position and delta are `None` until a
/// move (or the end event) first updates that slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiDragState {
    pub(crate) start: Vec<Point>,
    pub(crate) absolute_start: Vec<Point>,
    pub(crate) current: Vec<Option<Point>>,
    pub(crate) delta: Vec<Option<Vec2>>,
    pub(crate) dragged: bool,
}

impl MultiDragState {
    /// Number of tracked slots; zero when no session has begun.
    pub fn slot_count(&self) -> usize {
        self.start.len()
    }

    /// Start position of `index`, in caller space.
    pub fn start_position(&self, index: usize) -> Option<Point> {
        self.start.get(index).copied()
    }

    /// Latest position of `index`, in caller space.
    pub fn temp_position(&self, index: usize) -> Option<Point> {
        self.current.get(index).copied().flatten()
    }

    /// Latest movement of `index`, in the absolute frame.
    pub fn delta(&self, index: usize) -> Option<Vec2> {
        self.delta.get(index).copied().flatten()
    }

    /// All start positions, by slot.
    pub fn start_positions(&self) -> &[Point] {
        &self.start
    }

    /// All latest positions, by slot.
    pub fn temp_positions(&self) -> &[Option<Point>] {
        &self.current
    }

    /// All deltas, by slot.
    pub fn deltas(&self) -> &[Option<Vec2>] {
        &self.delta
    }

    /// Whether any slot has crossed the drag threshold.
    pub fn dragged(&self) -> bool {
        self.dragged
    }

    pub(crate) fn clear(&mut self) {
        self.start.clear();
        self.absolute_start.clear();
        self.current.clear();
        self.delta.clear();
        self.dragged = false;
    }

    pub(crate) fn push_slot(&mut self, start: Point, absolute_start: Point) {
        self.start.push(start);
        self.absolute_start.push(absolute_start);
        self.current.push(None);
        self.delta.push(None);
    }

    /// Recompute slot `index` from a fresh absolute position; out-of-range slots are ignored.
    pub(crate) fn advance(&mut self, index: usize, absolute_current: Point) -> bool {
        let (Some(&start), Some(&absolute_start)) =
            (self.start.get(index), self.absolute_start.get(index))
        else {
            return false;
        };
        let delta = delta_between(absolute_start, absolute_current);
        self.delta[index] = Some(delta);
        self.current[index] = Some(relative_position(start, delta));
        true
    }

    /// Latch `dragged` once any slot's delta reaches `minimum`.
    pub(crate) fn latch(&mut self, minimum: f64) -> bool {
        if !self.dragged {
            self.dragged = self
                .delta
                .iter()
                .flatten()
                .any(|&d| reaches_threshold(d, minimum));
        }
        self.dragged
    }
}
