// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge throttle: coalesce a high-frequency call stream into at most one run per interval.
//!
//! ## Usage
//!
//! 1) Call [`Throttle::call`] for every incoming call. A returned `Some(args)` must run now.
//! 2) When [`Throttle::deadline`] is `Some(t)`, arrange for [`Throttle::poll`] to be called at or after `t`.
//! 3) A returned `Some(args)` from `poll` is the most recent deferred call; run it.
//!
//! Time is supplied by the caller as a [`Duration`] since an arbitrary monotonic epoch,
//! which keeps the throttle deterministic and independent of any timer facility.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_gesture::throttle::Throttle;
//!
//! let ms = Duration::from_millis;
//! let mut t = Throttle::new(ms(40));
//!
//! // First call in a quiet period runs immediately.
//! assert_eq!(t.call(ms(0), 'a'), Some('a'));
//! // Calls inside the window are deferred; only the newest survives.
//! assert_eq!(t.call(ms(10), 'b'), None);
//! assert_eq!(t.call(ms(20), 'c'), None);
//! assert_eq!(t.deadline(), Some(ms(40)));
//! assert_eq!(t.poll(ms(39)), None);
//! assert_eq!(t.poll(ms(40)), Some('c'));
//! ```

use core::time::Duration;

/// A single-slot trailing-edge throttle.
///
/// Holds at most one pending call. Intermediate calls are replaced, never queued,
/// so released calls keep their arrival order.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval: Duration,
    last_run: Option<Duration>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Create a throttle releasing at most one call per `interval`.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    /// The configured interval.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Offer a call made at `now`.
    ///
    /// Returns `Some(args)` when the call should run immediately, or `None` when it
    /// was stored as the pending call (replacing any older pending call).
    pub fn call(&mut self, now: Duration, args: T) -> Option<T> {
        match self.boundary() {
            Some(boundary) if now < boundary => {
                self.pending = Some(args);
                None
            }
            _ => {
                // Window has elapsed; a stale pending call is superseded by this one.
                self.pending = None;
                self.last_run = Some(now);
                Some(args)
            }
        }
    }

    /// Release the pending call if its boundary has been reached.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.last_run = Some(now);
        self.pending.take()
    }

    /// When the pending call becomes due, if there is one.
    pub fn deadline(&self) -> Option<Duration> {
        if self.pending.is_some() {
            self.boundary()
        } else {
            None
        }
    }

    /// Whether a deferred call is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending call now, regardless of its boundary.
    pub fn flush(&mut self, now: Duration) -> Option<T> {
        let args = self.pending.take()?;
        self.last_run = Some(now);
        Some(args)
    }

    /// Drop the pending call and forget the last run, returning the throttle to a quiet state.
    pub fn cancel(&mut self) -> Option<T> {
        self.last_run = None;
        self.pending.take()
    }

    /// End of the current window; saturates at [`Duration::MAX`].
    fn boundary(&self) -> Option<Duration> {
        self.last_run.map(|t| t.saturating_add(self.interval))
    }
}
