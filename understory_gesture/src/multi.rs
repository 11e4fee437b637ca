// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch drag engine: the [`Drag`](crate::drag::Drag) protocol over N contacts.
//!
//! ## Slots
//!
//! Every contact present in the start event's touch list gets a slot, numbered by
//! its position in that list. Slots are fixed for the session: contacts that appear
//! later are not tracked, and a slot whose contact disappears keeps its last values.
//! A slot's latest position and delta stay `None` until an event first updates it.
//!
//! A start event without a touch list (plain mouse input) opens a single slot `0`
//! using the pointer extractors.
//!
//! ## Threshold
//!
//! The session becomes a drag as soon as any one slot's delta reaches the threshold.
//!
//! ## Protocol order
//!
//! [`MultiDrag::update_positions`] and [`MultiDrag::handle_move`] fail with
//! [`GestureError::MissingStartPositions`] when no start positions are recorded.

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::binding::SurfaceBinding;
use crate::config::DragConfig;
use crate::handler::DragHandler;
use crate::host::{
    EventTarget, GestureEvent, absolute_position, absolute_touch_position, extract_touch_with,
    extract_with, probe_mode,
};
use crate::state::MultiDragState;
use crate::throttle::Throttle;
use crate::types::{EventKinds, GestureError, ListenerMode};

/// Listeners held on the broad scope while a session is Active.
const SCOPE_KINDS: EventKinds = EventKinds::DRAG_MOVE
    .union(EventKinds::DRAG_END)
    .union(EventKinds::SELECT_START);

/// Multi-touch click/drag engine.
///
/// Type parameters match [`Drag`](crate::drag::Drag); the handler receives a
/// [`MultiDragState`].
pub struct MultiDrag<E, H, S, G> {
    enabled: bool,
    config: DragConfig<E>,
    handler: H,
    state: MultiDragState,
    throttle: Throttle<E>,
    binding: SurfaceBinding<S>,
    scope: G,
    scope_mode: Option<ListenerMode>,
}

impl<E, H, S, G> fmt::Debug for MultiDrag<E, H, S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiDrag")
            .field("enabled", &self.enabled)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("active", &self.scope_mode.is_some())
            .finish_non_exhaustive()
    }
}

impl<E, H, S, G> MultiDrag<E, H, S, G>
where
    E: GestureEvent + Clone,
    H: DragHandler<E, MultiDragState>,
    S: EventTarget,
    G: EventTarget,
{
    /// Create an enabled, unbound engine with the default configuration.
    pub fn new(scope: G, handler: H) -> Self {
        Self::with_config(scope, DragConfig::default(), handler)
    }

    /// Create an enabled, unbound engine.
    pub fn with_config(scope: G, config: DragConfig<E>, handler: H) -> Self {
        Self {
            enabled: true,
            throttle: Throttle::new(config.throttle_interval),
            config,
            handler,
            state: MultiDragState::default(),
            binding: SurfaceBinding::new(EventKinds::DRAG_START),
            scope,
            scope_mode: None,
        }
    }

    /// Attach start listeners to `surface`, detaching from any previous surface first.
    pub fn bind(&mut self, surface: S) -> Option<S> {
        self.binding.bind(surface)
    }

    /// Detach start listeners and release the surface. Idempotent.
    pub fn unbind(&mut self) -> Option<S> {
        self.binding.unbind()
    }

    /// Unbind and drop any in-flight session without firing callbacks. Idempotent.
    pub fn destroy(&mut self) -> Option<S> {
        let _ = self.throttle.cancel();
        self.release_scope();
        self.unbind()
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.binding.surface()
    }

    /// The broad event scope.
    pub fn scope(&self) -> &G {
        &self.scope
    }

    /// The callback handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the callback handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The engine configuration.
    pub fn config(&self) -> &DragConfig<E> {
        &self.config
    }

    /// Enable or disable the engine; consulted only at start events.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether start events are accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a session currently holds scope listeners.
    pub fn is_active(&self) -> bool {
        self.scope_mode.is_some()
    }

    /// Current session state.
    pub fn state(&self) -> &MultiDragState {
        &self.state
    }

    /// Start position of slot `index`, in caller space.
    pub fn start_position(&self, index: usize) -> Option<Point> {
        self.state.start_position(index)
    }

    /// Latest position of slot `index`, in caller space.
    pub fn temp_position(&self, index: usize) -> Option<Point> {
        self.state.temp_position(index)
    }

    /// Latest absolute movement of slot `index`.
    pub fn delta(&self, index: usize) -> Option<Vec2> {
        self.state.delta(index)
    }

    /// When [`handle_timer`](Self::handle_timer) should next be called.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.throttle.deadline()
    }

    /// Route `event` by its [`kind`](GestureEvent::kind).
    pub fn dispatch(&mut self, event: &mut E, now: Duration) -> Result<(), GestureError> {
        let kind = event.kind();
        if kind.intersects(EventKinds::DRAG_START) {
            self.handle_start(event);
        } else if kind.intersects(EventKinds::DRAG_MOVE) {
            self.handle_move(event, now)?;
        } else if kind.intersects(EventKinds::DRAG_END) {
            self.handle_end(event);
        } else if kind.contains(EventKinds::SELECT_START) {
            self.handle_select_start(event);
        }
        Ok(())
    }

    /// Handle a start event from the bound surface. Returns whether a session became Active.
    pub fn handle_start(&mut self, event: &mut E) -> bool {
        if !self.enabled {
            return false;
        }
        if self.is_active() {
            tracing::trace!("multi-drag start ignored: session already active");
            return false;
        }
        event.prevent_default();
        event.stop_propagation();

        self.state.clear();
        let _ = self.throttle.cancel();
        if let Err(error) = self.capture_start(event) {
            self.state.clear();
            tracing::debug!(%error, "multi-drag start aborted");
            return false;
        }

        if !self.handler.beginning(&self.state, event) {
            tracing::debug!("multi-drag vetoed by handler");
            return false;
        }

        let mode = probe_mode(&self.scope);
        self.scope.add_listeners(SCOPE_KINDS, mode);
        self.scope_mode = Some(mode);
        tracing::debug!(slots = self.state.slot_count(), "multi-drag session started");
        true
    }

    /// Handle a move event from the broad scope.
    pub fn handle_move(&mut self, event: &mut E, now: Duration) -> Result<(), GestureError> {
        if !self.is_active() {
            return Err(GestureError::MissingStartPositions);
        }
        event.prevent_default();
        event.stop_propagation();
        if let Some(ready) = self.throttle.call(now, event.clone()) {
            self.step(&ready);
        }
        Ok(())
    }

    /// Deliver the deferred move, if it is due.
    pub fn handle_timer(&mut self, now: Duration) {
        if let Some(ready) = self.throttle.poll(now) {
            self.step(&ready);
        }
    }

    /// Handle an end, cancel or leave event from the broad scope.
    pub fn handle_end(&mut self, event: &mut E) {
        if !self.is_active() {
            return;
        }
        event.prevent_default();
        event.stop_propagation();

        if let Some(pending) = self.throttle.cancel() {
            self.step(&pending);
        }
        if let Err(error) = self.update_positions(event) {
            tracing::trace!(%error, "keeping last known positions at multi-drag end");
        }

        let dragged = self.state.dragged();
        if dragged {
            self.handler.ending(&self.state, event);
        } else {
            self.handler.clicked(&self.state, event);
        }
        self.release_scope();
        self.handler.cleanup();
        tracing::debug!(dragged, "multi-drag session ended");
    }

    /// Suppress host text selection while a session is Active.
    pub fn handle_select_start(&mut self, event: &mut E) {
        if self.is_active() {
            event.prevent_default();
        }
    }

    /// Recompute every tracked slot from `event`.
    ///
    /// Slots whose contact is missing from `event` keep their previous values.
    /// Fails with [`GestureError::MissingStartPositions`] before any session has
    /// recorded start positions, and with [`GestureError::Extraction`] when no
    /// slot could be updated.
    pub fn update_positions(&mut self, event: &E) -> Result<(), GestureError> {
        let slots = self.state.slot_count();
        if slots == 0 {
            return Err(GestureError::MissingStartPositions);
        }
        let mut updated = false;
        if event.touch_count().is_some() {
            for index in 0..slots {
                if let Some(absolute) = absolute_touch_position(event, index) {
                    updated |= self.state.advance(index, absolute);
                }
            }
        } else if let Some(absolute) = absolute_position(event) {
            updated = self.state.advance(0, absolute);
        }
        if updated {
            Ok(())
        } else {
            Err(GestureError::Extraction)
        }
    }

    /// Record one slot per contact, or slot `0` for pointer input.
    fn capture_start(&mut self, event: &E) -> Result<(), GestureError> {
        match event.touch_count() {
            Some(0) => Err(GestureError::Extraction),
            Some(count) => {
                let custom = self.config.extract_from_touch_event.as_ref();
                for index in 0..count {
                    let start = extract_touch_with(custom, event, index);
                    let absolute = absolute_touch_position(event, index);
                    let (Some(start), Some(absolute)) = (start, absolute) else {
                        return Err(GestureError::Extraction);
                    };
                    self.state.push_slot(start, absolute);
                }
                Ok(())
            }
            None => {
                let start = extract_with(self.config.extract_from_event.as_ref(), event);
                let (Some(start), Some(absolute)) = (start, absolute_position(event)) else {
                    return Err(GestureError::Extraction);
                };
                self.state.push_slot(start, absolute);
                Ok(())
            }
        }
    }

    fn step(&mut self, event: &E) {
        if let Err(error) = self.update_positions(event) {
            tracing::trace!(%error, "multi-drag move skipped");
            return;
        }
        let was_dragged = self.state.dragged();
        if !self.state.latch(self.config.min_drag_distance) {
            return;
        }
        if !was_dragged {
            tracing::trace!("multi-drag threshold crossed");
        }
        self.handler.continuing(&self.state, event);
    }

    fn release_scope(&mut self) {
        if let Some(mode) = self.scope_mode.take() {
            self.scope.remove_listeners(SCOPE_KINDS, mode);
        }
    }
}
