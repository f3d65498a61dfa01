//! # Thumb Focus
//!
//! Tracks which thumb holds focus and whether the control as a whole is
//! focused.
//!
//! The two thumbs never reference each other. Focus and blur events from the
//! host are routed through a single [`FocusCoordinator`], and when the
//! coordinator decides focus has to move to the other thumb it answers with
//! a [`FocusRequest`] that the host carries out.
//!
//! ## Stacked thumbs at the minimum
//!
//! When both thumbs sit on `min`, entering the control on the start thumb
//! would leave the stop thumb unreachable by forward tab navigation. In that
//! case focus is handed to the stop thumb, unless it is the stop thumb that
//! focus just came from.

use tracing::debug;

use crate::pair::{Handle, PairValue};

/// Ask the host to move its keyboard focus to `handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    /// The thumb that should receive focus.
    pub handle: Handle,
}

/// Focus bookkeeping for both thumbs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusCoordinator {
    focused: Option<Handle>,
    is_focused: bool,
}

impl FocusCoordinator {
    /// Creates a coordinator with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The thumb that currently holds focus.
    pub fn focused(&self) -> Option<Handle> {
        self.focused
    }

    /// Whether the control as a whole is focused.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Whether `handle` should be drawn focused.
    pub fn is_thumb_focused(&self, handle: Handle) -> bool {
        self.is_focused && self.focused == Some(handle)
    }

    /// Records that `handle` gained focus, coming from `related` (`None` when
    /// focus came from outside the control).
    ///
    /// Returns a request to move focus to the stop thumb when both thumbs are
    /// stacked at `min` and focus did not come from the stop thumb.
    pub fn on_focus(
        &mut self,
        handle: Handle,
        related: Option<Handle>,
        pair: PairValue,
        min: f32,
    ) -> Option<FocusRequest> {
        self.is_focused = true;
        self.focused = Some(handle);

        let stacked_at_min = pair.lo == pair.hi && pair.lo == min;
        if handle == Handle::Start && stacked_at_min && related != Some(Handle::Stop) {
            debug!("thumbs stacked at minimum, moving focus to stop thumb");
            self.focused = Some(Handle::Stop);
            return Some(FocusRequest {
                handle: Handle::Stop,
            });
        }
        None
    }

    /// Records that the focused thumb lost focus.
    pub fn on_blur(&mut self) {
        self.is_focused = false;
        self.focused = None;
    }
}
