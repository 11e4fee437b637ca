// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: deterministic, `no_std` pointer gesture engines for UI.
//!
//! ## Overview
//!
//! This crate sits between a host's raw input stream and application gesture logic.
//! It turns pointer, touch, wheel and click events into a small set of normalized,
//! throttled callbacks with stable coordinates.
//! It does not perform hit testing, rendering, or inertial scrolling.
//!
//! ## Engines
//!
//! - [`Drag`](crate::drag::Drag): one pointer; classifies each session as a click or a drag.
//! - [`MultiDrag`](crate::multi::MultiDrag): the same protocol over N touch contacts, one slot per contact.
//! - [`Wheel`](crate::wheel::Wheel): per-event scroll delta, delta mode and position.
//! - [`Click`](crate::click::Click): per-event click with an optional position.
//!
//! The drag engines share the [`Throttle`](crate::throttle::Throttle) primitive and the pure
//! helpers in [`state`](crate::state), but are otherwise independent state machines.
//!
//! ## Host integration
//!
//! Implement [`GestureEvent`](crate::host::GestureEvent) for your events and
//! [`EventTarget`](crate::host::EventTarget) for anything that accepts listeners.
//! Bind an engine to the target surface; while a drag is in progress it registers
//! move/end/select-start listeners on a separate, broader scope (for example the
//! window) so the gesture survives the pointer leaving the surface.
//!
//! Deliver each event to the engine's `dispatch` with a monotonic timestamp, and
//! call `handle_timer` when `next_deadline` comes due so the trailing throttled
//! move is delivered.
//!
//! ## Coordinates
//!
//! Callers may install a custom extractor (for example one that maps into a
//! transformed canvas). The engines still take deltas from the default, absolute
//! extractor, so `delta` is identical with or without a custom extractor; only
//! `start` and `current` shift.
//!
//! ## Callback order
//!
//! Per session: `beginning` → `continuing`* → exactly one of `ending` | `clicked` → `cleanup`.
//! See [`DragHandler`](crate::handler::DragHandler).
//!
//! ## Errors
//!
//! Only [`GestureError::MissingStartPositions`](crate::types::GestureError::MissingStartPositions)
//! escapes the event-handling API, when an engine is driven out of protocol order.
//! Extraction failures abort a session at start, skip a move, or keep the last
//! known positions at the end.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod config;
pub mod drag;
pub mod handler;
pub mod host;
pub mod multi;
pub mod state;
pub mod throttle;
pub mod types;
pub mod wheel;

mod binding;
#[cfg(test)]
mod testing;

pub use kurbo::{Point, Vec2};
