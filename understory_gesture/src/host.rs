// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host environment seams: events, listener targets, and coordinate extractors.
//!
//! ## Overview
//!
//! The engines never talk to a windowing system directly. A host implements
//! [`GestureEvent`] for its raw input events and [`EventTarget`] for the objects
//! it can register listeners on (a widget surface, a window, a document), then
//! forwards delivered events to the engine.
//!
//! Coordinates come from [`Extractor`] and [`TouchExtractor`] strategies. The
//! default strategies, [`absolute_position`] and [`absolute_touch_position`],
//! read the event's own client coordinates and serve as the stable reference
//! frame for delta computation.

use alloc::boxed::Box;

use kurbo::Point;

use crate::types::{EventKinds, ListenerMode, WheelDelta};

/// A raw input event delivered by the host.
pub trait GestureEvent {
    /// Logical category of this event. Used by the engines' `dispatch` methods.
    fn kind(&self) -> EventKinds;

    /// Pointer position in the host's absolute (client) frame, if the event carries one.
    fn client_position(&self) -> Option<Point>;

    /// Number of touch contacts, or `None` if the event carries no touch list at all.
    fn touch_count(&self) -> Option<usize> {
        None
    }

    /// Client position of the touch contact at `index`.
    fn touch_position(&self, index: usize) -> Option<Point> {
        let _ = index;
        None
    }

    /// Scroll delta, present only on wheel events.
    fn wheel_delta(&self) -> Option<WheelDelta> {
        None
    }

    /// Suppress the host's default handling (text selection, native drag, page scroll).
    fn prevent_default(&mut self);

    /// Stop the event from reaching other listeners.
    fn stop_propagation(&mut self);
}

/// Something the host can register listeners on.
///
/// Used both for the target surface (start, wheel and click listeners) and for
/// the broad scope that receives move/end/select events while a drag is active.
pub trait EventTarget {
    /// Start delivering `kinds` to the engine.
    fn add_listeners(&mut self, kinds: EventKinds, mode: ListenerMode);

    /// Stop delivering `kinds`. `mode` is always the one passed to the matching add.
    fn remove_listeners(&mut self, kinds: EventKinds, mode: ListenerMode);

    /// Capability probe: whether registration accepts an options object.
    ///
    /// When `false`, engines fall back to [`ListenerMode::LEGACY`].
    fn supports_listener_options(&self) -> bool {
        true
    }
}

/// Caller-supplied strategy mapping an event to a point; `None` signals failure.
pub type Extractor<E> = Box<dyn Fn(&E) -> Option<Point>>;

/// Caller-supplied strategy mapping an event and a touch slot index to a point.
pub type TouchExtractor<E> = Box<dyn Fn(&E, usize) -> Option<Point>>;

/// Default extractor: the event's client position, falling back to its first touch.
pub fn absolute_position<E: GestureEvent>(event: &E) -> Option<Point> {
    event.client_position().or_else(|| event.touch_position(0))
}

/// Default per-contact extractor: the client position of touch `index`.
pub fn absolute_touch_position<E: GestureEvent>(event: &E, index: usize) -> Option<Point> {
    event.touch_position(index)
}

/// Run the custom extractor if one is configured, otherwise the default one.
pub(crate) fn extract_with<E: GestureEvent>(
    custom: Option<&Extractor<E>>,
    event: &E,
) -> Option<Point> {
    match custom {
        Some(f) => f(event),
        None => absolute_position(event),
    }
}

/// Per-contact counterpart of [`extract_with`].
pub(crate) fn extract_touch_with<E: GestureEvent>(
    custom: Option<&TouchExtractor<E>>,
    event: &E,
    index: usize,
) -> Option<Point> {
    match custom {
        Some(f) => f(event, index),
        None => absolute_touch_position(event, index),
    }
}

/// Probe `target` and pick the registration mode for it.
pub(crate) fn probe_mode<T: EventTarget + ?Sized>(target: &T) -> ListenerMode {
    ListenerMode::from_probe(target.supports_listener_options())
}
