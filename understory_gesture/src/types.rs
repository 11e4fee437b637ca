// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for gesture handling: event categories, listener modes, wheel data, and errors.
//!
//! ## Overview
//!
//! These types describe the contract between the engines and the host environment.
//! They are referenced by [`host`](crate::host) and by every engine in this crate.

use kurbo::Vec2;

bitflags::bitflags! {
    /// Logical input event categories.
    ///
    /// Hosts map their real event types onto these flags. Engines hand sets of
    /// them to [`EventTarget::add_listeners`](crate::host::EventTarget::add_listeners)
    /// to request delivery, and use [`GestureEvent::kind`](crate::host::GestureEvent::kind)
    /// to route what arrives.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventKinds: u16 {
        /// Pointer pressed on the target surface.
        const POINTER_DOWN = 1 << 0;
        /// Pointer moved.
        const POINTER_MOVE = 1 << 1;
        /// Pointer released.
        const POINTER_UP   = 1 << 2;
        /// A touch contact started on the target surface.
        const TOUCH_START  = 1 << 3;
        /// A touch contact moved.
        const TOUCH_MOVE   = 1 << 4;
        /// A touch contact ended.
        const TOUCH_END    = 1 << 5;
        /// A touch contact was cancelled by the host.
        const TOUCH_CANCEL = 1 << 6;
        /// A touch contact left the interactive area.
        const TOUCH_LEAVE  = 1 << 7;
        /// Host text-selection attempt.
        const SELECT_START = 1 << 8;
        /// Wheel or scroll input.
        const WHEEL        = 1 << 9;
        /// Plain click.
        const CLICK        = 1 << 10;

        /// Events that begin a drag session (bound on the target surface).
        const DRAG_START = Self::POINTER_DOWN.bits() | Self::TOUCH_START.bits();
        /// Events that continue a drag session (bound on the broad scope).
        const DRAG_MOVE = Self::POINTER_MOVE.bits() | Self::TOUCH_MOVE.bits();
        /// Events that end a drag session (bound on the broad scope).
        const DRAG_END = Self::POINTER_UP.bits()
            | Self::TOUCH_END.bits()
            | Self::TOUCH_CANCEL.bits()
            | Self::TOUCH_LEAVE.bits();
    }
}

/// How listeners are registered with the host.
///
/// Picked once per registration from the host's capability probe
/// ([`EventTarget::supports_listener_options`](crate::host::EventTarget::supports_listener_options))
/// and handed back unchanged on removal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListenerMode {
    /// Options-object registration. Engines always request `passive: false` so that
    /// `prevent_default` keeps working.
    Options {
        /// Whether the listener promises never to prevent default handling.
        passive: bool,
    },
    /// Legacy boolean registration; the flag is the capture bit.
    Capture(bool),
}

impl ListenerMode {
    /// The non-passive options mode.
    pub const NON_PASSIVE: Self = Self::Options { passive: false };
    /// The legacy fallback used when the host lacks an options object.
    pub const LEGACY: Self = Self::Capture(false);

    /// Choose the registration mode from a capability probe result.
    pub const fn from_probe(supports_options: bool) -> Self {
        if supports_options {
            Self::NON_PASSIVE
        } else {
            Self::LEGACY
        }
    }
}

/// Unit of a wheel delta as reported by the host.
///
/// The raw value is passed through unchanged; the constants name the values
/// hosts conventionally use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeltaMode(pub u32);

impl DeltaMode {
    /// Delta is in pixels.
    pub const PIXEL: Self = Self(0);
    /// Delta is in lines.
    pub const LINE: Self = Self(1);
    /// Delta is in pages.
    pub const PAGE: Self = Self(2);
}

/// Scroll delta carried by a wheel event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelDelta {
    /// Scroll amount along each axis.
    pub delta: Vec2,
    /// Unit of `delta`.
    pub mode: DeltaMode,
}

/// Errors raised while driving a gesture engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// A coordinate extractor produced no usable point.
    #[error("coordinate extraction failed")]
    Extraction,
    /// The position-update routine ran without a session in progress.
    ///
    /// This indicates the engine was driven out of protocol order by its embedder.
    #[error("missing start positions")]
    MissingStartPositions,
}
