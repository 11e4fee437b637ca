// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click adapter: one event in, one callback out.
//!
//! Unlike [`Drag`](crate::drag::Drag) there is no threshold and no session. The
//! position is cleared on every click before extraction, so a failed extraction
//! reports `None` rather than the previous click's point, and the callback fires
//! either way.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::binding::SurfaceBinding;
use crate::handler::ClickHandler;
use crate::host::{EventTarget, Extractor, GestureEvent, extract_with};
use crate::types::EventKinds;

/// Stateless click adapter bound to a surface.
pub struct Click<E, H, S> {
    enabled: bool,
    extract_from_event: Option<Extractor<E>>,
    handler: H,
    position: Option<Point>,
    binding: SurfaceBinding<S>,
}

impl<E, H, S> fmt::Debug for Click<E, H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Click")
            .field("enabled", &self.enabled)
            .field("custom_extractor", &self.extract_from_event.is_some())
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<E, H, S> Click<E, H, S>
where
    E: GestureEvent,
    H: ClickHandler<E>,
    S: EventTarget,
{
    /// Create an enabled, unbound adapter using the absolute position extractor.
    pub fn new(handler: H) -> Self {
        Self {
            enabled: true,
            extract_from_event: None,
            handler,
            position: None,
            binding: SurfaceBinding::new(EventKinds::CLICK),
        }
    }

    /// Replace the position extractor.
    pub fn with_extractor(mut self, f: impl Fn(&E) -> Option<Point> + 'static) -> Self {
        self.extract_from_event = Some(Box::new(f));
        self
    }

    /// Attach the click listener to `surface`, detaching from any previous surface first.
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

    /// Whether click events are handled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Position of the latest handled click.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Handle a click event. Returns whether the callback ran.
    pub fn handle_click(&mut self, event: &mut E) -> bool {
        if !self.enabled {
            return false;
        }
        event.prevent_default();
        event.stop_propagation();

        self.position = extract_with(self.extract_from_event.as_ref(), event);
        if self.position.is_none() {
            tracing::trace!("click without coordinates");
        }
        self.handler.clicked(self.position, event);
        true
    }
}
