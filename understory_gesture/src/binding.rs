// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface binding shared by all engines.

use crate::host::{EventTarget, probe_mode};
use crate::types::{EventKinds, ListenerMode};

/// Owns the target surface and its listener registration.
///
/// The mode used at bind time is remembered so removal is symmetric.
#[derive(Debug)]
pub(crate) struct SurfaceBinding<S> {
    kinds: EventKinds,
    bound: Option<(S, ListenerMode)>,
}

impl<S: EventTarget> SurfaceBinding<S> {
    pub(crate) const fn new(kinds: EventKinds) -> Self {
        Self { kinds, bound: None }
    }

    /// Attach to `surface`, first detaching from (and returning) any previous one.
    pub(crate) fn bind(&mut self, mut surface: S) -> Option<S> {
        let previous = self.unbind();
        let mode = probe_mode(&surface);
        surface.add_listeners(self.kinds, mode);
        self.bound = Some((surface, mode));
        previous
    }

    /// Detach and release the surface. Returns `None` if nothing was bound.
    pub(crate) fn unbind(&mut self) -> Option<S> {
        let (mut surface, mode) = self.bound.take()?;
        surface.remove_listeners(self.kinds, mode);
        Some(surface)
    }

    pub(crate) fn surface(&self) -> Option<&S> {
        self.bound.as_ref().map(|(s, _)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;

    #[test]
    fn bind_attaches_with_probed_mode() {
        let mut b = SurfaceBinding::new(EventKinds::CLICK);
        assert!(b.bind(Recorder::legacy()).is_none());
        let s = b.surface().unwrap();
        assert_eq!(s.live(), EventKinds::CLICK);
        assert_eq!(s.adds(), 1);
        assert_eq!(s.last_mode(), Some(ListenerMode::LEGACY));
    }

    #[test]
    fn rebind_detaches_previous_first() {
        let mut b = SurfaceBinding::new(EventKinds::WHEEL);
        let _ = b.bind(Recorder::new());
        let old = b.bind(Recorder::new()).unwrap();
        assert_eq!(old.live(), EventKinds::empty());
        assert_eq!(old.removes(), 1);
        assert_eq!(b.surface().unwrap().live(), EventKinds::WHEEL);
    }

    #[test]
    fn unbind_is_idempotent() {
        let mut b = SurfaceBinding::new(EventKinds::DRAG_START);
        let _ = b.bind(Recorder::new());
        let s = b.unbind().unwrap();
        assert_eq!(s.removes(), 1);
        assert!(b.unbind().is_none());
        assert!(b.surface().is_none());
    }
}
