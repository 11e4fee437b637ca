// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag engine: classify a gesture as a click or a drag.
//!
//! ## Lifecycle
//!
//! `Idle → Capturing → (Aborted | Active) → Ended → Idle`
//!
//! - A start event on the bound surface clears the previous session and extracts
//!   the start positions. Extraction failure aborts before any scope listener is added.
//! - [`DragHandler::beginning`] may veto; otherwise move, end and select-start
//!   listeners are added to the broad scope and the session is Active.
//! - Move events pass through a [`Throttle`]. Nothing reaches
//!   [`DragHandler::continuing`] until the absolute delta reaches the drag threshold.
//! - The end event flushes any deferred move, recomputes positions once more,
//!   fires exactly one of `ending`/`clicked`, removes the scope listeners, then
//!   fires `cleanup`.
//!
//! ## Time
//!
//! The host passes a monotonic timestamp with each move. When
//! [`Drag::next_deadline`] is `Some`, it should call [`Drag::handle_timer`] at or
//! after that time so the trailing move is delivered.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_gesture::drag::Drag;
//! use understory_gesture::handler::DragCallbacks;
//! use understory_gesture::host::{EventTarget, GestureEvent};
//! use understory_gesture::state::DragState;
//! use understory_gesture::types::{EventKinds, ListenerMode};
//!
//! #[derive(Clone)]
//! struct Ev(EventKinds, Point);
//! impl GestureEvent for Ev {
//!     fn kind(&self) -> EventKinds { self.0 }
//!     fn client_position(&self) -> Option<Point> { Some(self.1) }
//!     fn prevent_default(&mut self) {}
//!     fn stop_propagation(&mut self) {}
//! }
//!
//! struct Window;
//! impl EventTarget for Window {
//!     fn add_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
//!     fn remove_listeners(&mut self, _: EventKinds, _: ListenerMode) {}
//! }
//!
//! let callbacks = DragCallbacks::new().on_ending(|s: &DragState, _: &Ev| {
//!     assert_eq!(s.current(), Some(Point::new(20.0, 0.0)));
//! });
//! let mut drag = Drag::new(Window, callbacks);
//! let _ = drag.bind(Window);
//!
//! let t = Duration::from_millis;
//! drag.dispatch(&mut Ev(EventKinds::POINTER_DOWN, Point::ZERO), t(0)).unwrap();
//! drag.dispatch(&mut Ev(EventKinds::POINTER_MOVE, Point::new(20.0, 0.0)), t(5)).unwrap();
//! drag.dispatch(&mut Ev(EventKinds::POINTER_UP, Point::new(20.0, 0.0)), t(9)).unwrap();
//! ```

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::binding::SurfaceBinding;
use crate::config::DragConfig;
use crate::handler::DragHandler;
use crate::host::{EventTarget, GestureEvent, absolute_position, extract_with, probe_mode};
use crate::state::DragState;
use crate::throttle::Throttle;
use crate::types::{EventKinds, GestureError, ListenerMode};

/// Listeners held on the broad scope while a session is Active.
const SCOPE_KINDS: EventKinds = EventKinds::DRAG_MOVE
    .union(EventKinds::DRAG_END)
    .union(EventKinds::SELECT_START);

/// Single-pointer click/drag engine.
///
/// - `E`: host event type.
/// - `H`: callback handler, see [`DragHandler`].
/// - `S`: target surface that receives start listeners.
/// - `G`: broad scope that receives move/end/select listeners during a session.
pub struct Drag<E, H, S, G> {
    enabled: bool,
    config: DragConfig<E>,
    handler: H,
    state: DragState,
    throttle: Throttle<E>,
    binding: SurfaceBinding<S>,
    scope: G,
    // Mode of the live scope registration; `Some` exactly while Active.
    scope_mode: Option<ListenerMode>,
}

impl<E, H, S, G> fmt::Debug for Drag<E, H, S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drag")
            .field("enabled", &self.enabled)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("active", &self.scope_mode.is_some())
            .finish_non_exhaustive()
    }
}

impl<E, H, S, G> Drag<E, H, S, G>
where
    E: GestureEvent + Clone,
    H: DragHandler<E>,
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
            state: DragState::default(),
            binding: SurfaceBinding::new(EventKinds::DRAG_START),
            scope,
            scope_mode: None,
        }
    }

    /// Attach start listeners to `surface`, detaching from any previous surface first.
    ///
    /// Returns the previously bound surface.
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

    /// Mutable access to the callback handler, for replacing callbacks.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The engine configuration.
    pub fn config(&self) -> &DragConfig<E> {
        &self.config
    }

    /// Enable or disable the engine.
    ///
    /// Only consulted when a start event arrives; an Active session runs to completion.
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
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Start position in caller space.
    pub fn start(&self) -> Option<Point> {
        self.state.start()
    }

    /// Latest position in caller space.
    pub fn current(&self) -> Option<Point> {
        self.state.current()
    }

    /// Latest absolute movement since the start.
    pub fn delta(&self) -> Option<Vec2> {
        self.state.delta()
    }

    /// When [`handle_timer`](Self::handle_timer) should next be called.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.throttle.deadline()
    }

    /// Route `event` by its [`kind`](GestureEvent::kind).
    ///
    /// Only [`GestureError::MissingStartPositions`] is returned, for a move event
    /// delivered without an Active session.
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
            tracing::trace!("drag start ignored: session already active");
            return false;
        }
        event.prevent_default();
        event.stop_propagation();

        self.state.clear();
        let _ = self.throttle.cancel();
        let start = extract_with(self.config.extract_from_event.as_ref(), event);
        let (Some(start), Some(absolute_start)) = (start, absolute_position(event)) else {
            tracing::debug!(error = %GestureError::Extraction, "drag start aborted");
            return false;
        };
        self.state.begin(start, absolute_start);

        if !self.handler.beginning(&self.state, event) {
            tracing::debug!("drag vetoed by handler");
            return false;
        }

        let mode = probe_mode(&self.scope);
        self.scope.add_listeners(SCOPE_KINDS, mode);
        self.scope_mode = Some(mode);
        tracing::debug!(x = start.x, y = start.y, "drag session started");
        true
    }

    /// Handle a move event from the broad scope.
    ///
    /// The event is intercepted immediately; processing goes through the throttle.
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

    /// Handle an end event from the broad scope. Ignored when no session is Active.
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
            tracing::trace!(%error, "keeping last known positions at drag end");
        }

        let dragged = self.state.dragged();
        if dragged {
            self.handler.ending(&self.state, event);
        } else {
            self.handler.clicked(&self.state, event);
        }
        self.release_scope();
        self.handler.cleanup();
        tracing::debug!(dragged, "drag session ended");
    }

    /// Suppress host text selection while a session is Active.
    pub fn handle_select_start(&mut self, event: &mut E) {
        if self.is_active() {
            event.prevent_default();
        }
    }

    /// Recompute `delta` and `current` from `event`.
    ///
    /// Fails with [`GestureError::MissingStartPositions`] if no session has
    /// recorded start positions, and with [`GestureError::Extraction`] if the
    /// event yields no absolute position (state is left unchanged).
    pub fn update_positions(&mut self, event: &E) -> Result<(), GestureError> {
        if self.state.absolute_start().is_none() {
            return Err(GestureError::MissingStartPositions);
        }
        let absolute = absolute_position(event).ok_or(GestureError::Extraction)?;
        self.state.advance(absolute);
        Ok(())
    }

    /// Process one throttle-released move.
    fn step(&mut self, event: &E) {
        if let Err(error) = self.update_positions(event) {
            tracing::trace!(%error, "drag move skipped");
            return;
        }
        let was_dragged = self.state.dragged();
        if !self.state.latch(self.config.min_drag_distance) {
            return;
        }
        if !was_dragged {
            tracing::trace!("drag threshold crossed");
        }
        self.handler.continuing(&self.state, event);
    }

    fn release_scope(&mut self) {
        if let Some(mode) = self.scope_mode.take() {
            self.scope.remove_listeners(SCOPE_KINDS, mode);
        }
    }
}
