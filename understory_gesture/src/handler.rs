// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback surfaces for the engines.
//!
//! ## Overview
//!
//! Drag engines call into a [`DragHandler`], whose methods all default to no-ops
//! (`beginning` defaults to accepting the gesture). Implement the trait on your own
//! type, or use [`DragCallbacks`] to hold individually replaceable closures.
//!
//! The wheel and click adapters take a [`WheelHandler`] or [`ClickHandler`]; both
//! are implemented for plain closures.
//!
//! ## Ordering
//!
//! Within one session: `beginning` → `continuing`* → (`ending` | `clicked`) → `cleanup`.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::state::DragState;
use crate::wheel::WheelState;

/// Callbacks for a drag session.
///
/// `S` is the session state handed to each callback: [`DragState`] for
/// [`Drag`](crate::drag::Drag), [`MultiDragState`](crate::state::MultiDragState) for
/// [`MultiDrag`](crate::multi::MultiDrag).
pub trait DragHandler<E, S = DragState> {
    /// Decide whether to proceed past the start event. Returning `false` vetoes the session.
    fn beginning(&mut self, state: &S, event: &E) -> bool {
        let _ = (state, event);
        true
    }

    /// A throttle-released move after the drag threshold was crossed.
    fn continuing(&mut self, state: &S, event: &E) {
        let _ = (state, event);
    }

    /// Session ended after crossing the drag threshold.
    fn ending(&mut self, state: &S, event: &E) {
        let _ = (state, event);
    }

    /// Session ended without crossing the drag threshold.
    fn clicked(&mut self, state: &S, event: &E) {
        let _ = (state, event);
    }

    /// Runs once after `ending` or `clicked`, whichever fired.
    fn cleanup(&mut self) {}
}

/// The no-op handler.
impl<E, S> DragHandler<E, S> for () {}

type Predicate<E, S> = Box<dyn FnMut(&S, &E) -> bool>;
type Callback<E, S> = Box<dyn FnMut(&S, &E)>;

/// A [`DragHandler`] made of replaceable closure slots.
///
/// ```
/// use understory_gesture::handler::DragCallbacks;
/// use understory_gesture::state::DragState;
/// # struct Ev;
///
/// let callbacks: DragCallbacks<Ev> = DragCallbacks::new()
///     .on_continuing(|s: &DragState, _| {
///         let _ = s.delta();
///     })
///     .on_cleanup(|| {});
/// # let _ = callbacks;
/// ```
pub struct DragCallbacks<E, S = DragState> {
    beginning: Option<Predicate<E, S>>,
    continuing: Option<Callback<E, S>>,
    ending: Option<Callback<E, S>>,
    clicked: Option<Callback<E, S>>,
    cleanup: Option<Box<dyn FnMut()>>,
}

impl<E, S> Default for DragCallbacks<E, S> {
    fn default() -> Self {
        Self {
            beginning: None,
            continuing: None,
            ending: None,
            clicked: None,
            cleanup: None,
        }
    }
}

impl<E, S> fmt::Debug for DragCallbacks<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("beginning", &self.beginning.is_some())
            .field("continuing", &self.continuing.is_some())
            .field("ending", &self.ending.is_some())
            .field("clicked", &self.clicked.is_some())
            .field("cleanup", &self.cleanup.is_some())
            .finish()
    }
}

impl<E, S> DragCallbacks<E, S> {
    /// All slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_beginning`](Self::set_beginning).
    pub fn on_beginning(mut self, f: impl FnMut(&S, &E) -> bool + 'static) -> Self {
        self.set_beginning(f);
        self
    }

    /// Builder form of [`set_continuing`](Self::set_continuing).
    pub fn on_continuing(mut self, f: impl FnMut(&S, &E) + 'static) -> Self {
        self.set_continuing(f);
        self
    }

    /// Builder form of [`set_ending`](Self::set_ending).
    pub fn on_ending(mut self, f: impl FnMut(&S, &E) + 'static) -> Self {
        self.set_ending(f);
        self
    }

    /// Builder form of [`set_clicked`](Self::set_clicked).
    pub fn on_clicked(mut self, f: impl FnMut(&S, &E) + 'static) -> Self {
        self.set_clicked(f);
        self
    }

    /// Builder form of [`set_cleanup`](Self::set_cleanup).
    pub fn on_cleanup(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_cleanup(f);
        self
    }

    /// Replace the `beginning` slot.
    pub fn set_beginning(&mut self, f: impl FnMut(&S, &E) -> bool + 'static) {
        self.beginning = Some(Box::new(f));
    }

    /// Replace the `continuing` slot.
    pub fn set_continuing(&mut self, f: impl FnMut(&S, &E) + 'static) {
        self.continuing = Some(Box::new(f));
    }

    /// Replace the `ending` slot.
    pub fn set_ending(&mut self, f: impl FnMut(&S, &E) + 'static) {
        self.ending = Some(Box::new(f));
    }

    /// Replace the `clicked` slot.
    pub fn set_clicked(&mut self, f: impl FnMut(&S, &E) + 'static) {
        self.clicked = Some(Box::new(f));
    }

    /// Replace the `cleanup` slot.
    pub fn set_cleanup(&mut self, f: impl FnMut() + 'static) {
        self.cleanup = Some(Box::new(f));
    }

    /// Empty every slot, restoring the no-op defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<E, S> DragHandler<E, S> for DragCallbacks<E, S> {
    fn beginning(&mut self, state: &S, event: &E) -> bool {
        self.beginning.as_mut().is_none_or(|f| f(state, event))
    }

    fn continuing(&mut self, state: &S, event: &E) {
        if let Some(f) = self.continuing.as_mut() {
            f(state, event);
        }
    }

    fn ending(&mut self, state: &S, event: &E) {
        if let Some(f) = self.ending.as_mut() {
            f(state, event);
        }
    }

    fn clicked(&mut self, state: &S, event: &E) {
        if let Some(f) = self.clicked.as_mut() {
            f(state, event);
        }
    }

    fn cleanup(&mut self) {
        if let Some(f) = self.cleanup.as_mut() {
            f();
        }
    }
}

/// Callback for [`Wheel`](crate::wheel::Wheel).
pub trait WheelHandler<E> {
    /// A qualifying wheel event was captured into `state`.
    fn scrolling(&mut self, state: &WheelState, event: &E);
}

impl<E, F: FnMut(&WheelState, &E)> WheelHandler<E> for F {
    fn scrolling(&mut self, state: &WheelState, event: &E) {
        self(state, event);
    }
}

/// Callback for [`Click`](crate::click::Click).
pub trait ClickHandler<E> {
    /// A click arrived; `position` is `None` if extraction failed.
    fn clicked(&mut self, position: Option<Point>, event: &E);
}

impl<E, F: FnMut(Option<Point>, &E)> ClickHandler<E> for F {
    fn clicked(&mut self, position: Option<Point>, event: &E) {
        self(position, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn empty_callbacks_accept_and_do_nothing() {
        let mut cb: DragCallbacks<(), DragState> = DragCallbacks::new();
        let state = DragState::default();
        assert!(cb.beginning(&state, &()));
        cb.continuing(&state, &());
        cb.cleanup();
    }

    #[test]
    fn slots_are_replaceable() {
        let hits = Rc::new(Cell::new(0_u32));
        let h = hits.clone();
        let mut cb: DragCallbacks<(), DragState> = DragCallbacks::new()
            .on_beginning(|_, _| false)
            .on_cleanup(move || h.set(h.get() + 1));
        let state = DragState::default();
        assert!(!cb.beginning(&state, &()));
        cb.set_beginning(|_, _| true);
        assert!(cb.beginning(&state, &()));

        cb.cleanup();
        let h = hits.clone();
        cb.set_cleanup(move || h.set(h.get() + 10));
        cb.cleanup();
        assert_eq!(hits.get(), 11);

        cb.clear();
        cb.cleanup();
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn unit_handler_accepts() {
        let state = DragState::default();
        assert!(DragHandler::<(), DragState>::beginning(&mut (), &state, &()));
    }
}
