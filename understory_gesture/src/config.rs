// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-engine configuration.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use kurbo::Point;

use crate::host::{Extractor, TouchExtractor};

/// Default movement, in extractor units, that turns a click into a drag.
pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 5.0;

/// Default interval between released move callbacks.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(40);

/// Configuration for [`Drag`](crate::drag::Drag) and [`MultiDrag`](crate::multi::MultiDrag).
///
/// Fixed once the engine is constructed.
///
/// ```
/// use core::time::Duration;
/// use understory_gesture::config::DragConfig;
/// # struct Ev;
///
/// let config: DragConfig<Ev> = DragConfig::default()
///     .with_min_drag_distance(8.0)
///     .with_throttle_interval(Duration::from_millis(16));
/// assert_eq!(config.min_drag_distance, 8.0);
/// ```
pub struct DragConfig<E> {
    /// Movement that classifies a session as a drag.
    pub min_drag_distance: f64,
    /// Minimum spacing between released move callbacks.
    pub throttle_interval: Duration,
    /// Custom caller-space extractor; `None` uses [`absolute_position`](crate::host::absolute_position).
    pub extract_from_event: Option<Extractor<E>>,
    /// Custom per-contact extractor (multi-touch only); `None` uses
    /// [`absolute_touch_position`](crate::host::absolute_touch_position).
    pub extract_from_touch_event: Option<TouchExtractor<E>>,
}

impl<E> Default for DragConfig<E> {
    fn default() -> Self {
        Self {
            min_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            extract_from_event: None,
            extract_from_touch_event: None,
        }
    }
}

impl<E> fmt::Debug for DragConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("min_drag_distance", &self.min_drag_distance)
            .field("throttle_interval", &self.throttle_interval)
            .field("extract_from_event", &self.extract_from_event.is_some())
            .field(
                "extract_from_touch_event",
                &self.extract_from_touch_event.is_some(),
            )
            .finish()
    }
}

impl<E> DragConfig<E> {
    /// Set the drag threshold.
    pub fn with_min_drag_distance(mut self, distance: f64) -> Self {
        self.min_drag_distance = distance;
        self
    }

    /// Set the throttle interval.
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    /// Use a custom caller-space extractor.
    pub fn with_extractor(mut self, f: impl Fn(&E) -> Option<Point> + 'static) -> Self {
        self.extract_from_event = Some(Box::new(f));
        self
    }

    /// Use a custom per-contact extractor.
    pub fn with_touch_extractor(
        mut self,
        f: impl Fn(&E, usize) -> Option<Point> + 'static,
    ) -> Self {
        self.extract_from_touch_event = Some(Box::new(f));
        self
    }
}
