//! Drag sessions and the non-crossing rule.
//!
//! A session is opened on press and pins one handle until release or cancel.
//! Every move proposes a new value for that handle; moves that would carry a
//! thumb past the other one are dropped, not clamped.

use tracing::{debug, trace};

use crate::{
    pair::{Handle, ProxiedPairModel},
    value_mapper::ValueMapper,
};

/// An open drag, from press to release or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The thumb this drag moves.
    pub handle: Handle,
    /// Pixels along the active axis between the press and the thumb center,
    /// zero when the press landed on the bare track.
    pub grab_offset: f32,
}

/// What happened to a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pair changed and was published.
    Accepted,
    /// The move was valid but rounded to the current pair.
    Unchanged,
    /// The move would have crossed the other thumb.
    Crossing,
    /// No drag is open.
    NoSession,
    /// The move targets a thumb other than the one being dragged.
    HandleMismatch,
}

impl MoveOutcome {
    /// Whether the pair changed.
    pub fn changed(self) -> bool {
        self == MoveOutcome::Accepted
    }
}

/// Routes pointer moves into the pair model for the duration of a drag.
#[derive(Debug, Default, Clone)]
pub struct DragCoordinator {
    session: Option<DragSession>,
}

impl DragCoordinator {
    /// Creates a coordinator with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Whether `handle` is being dragged.
    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.session.is_some_and(|s| s.handle == handle)
    }

    /// Opens a session for `handle`, replacing any stale one.
    pub fn begin(&mut self, handle: Handle, grab_offset: f32) -> DragSession {
        if let Some(stale) = self.session {
            debug!(?stale, "replacing unfinished drag session");
        }
        let session = DragSession {
            handle,
            grab_offset,
        };
        debug!(?handle, grab_offset, "drag started");
        self.session = Some(session);
        session
    }

    /// Closes the session. Returns the session that was open.
    pub fn end(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if let Some(session) = session {
            debug!(handle = ?session.handle, "drag ended");
        }
        session
    }

    /// Applies a move proposed for `handle` within the open session.
    pub fn apply_move(
        &self,
        handle: Handle,
        value: f32,
        model: &mut ProxiedPairModel,
        mapper: &impl ValueMapper,
    ) -> MoveOutcome {
        match self.session {
            None => MoveOutcome::NoSession,
            Some(session) if session.handle != handle => {
                trace!(?handle, active = ?session.handle, "move for inactive thumb dropped");
                MoveOutcome::HandleMismatch
            }
            Some(_) => apply_ordered(handle, value, model, mapper),
        }
    }
}

/// Writes `value` to `handle`'s side of the pair only if it keeps
/// `lo <= hi`.
pub fn apply_ordered(
    handle: Handle,
    value: f32,
    model: &mut ProxiedPairModel,
    mapper: &impl ValueMapper,
) -> MoveOutcome {
    let pair = model.get();
    let keeps_order = match handle {
        Handle::Start => value <= pair.hi,
        Handle::Stop => value >= pair.lo,
    };
    if !keeps_order {
        trace!(?handle, value, lo = pair.lo, hi = pair.hi, "crossing move rejected");
        return MoveOutcome::Crossing;
    }
    let next = pair.with(handle, value);
    if model.set(next.lo, next.hi, mapper) {
        MoveOutcome::Accepted
    } else {
        MoveOutcome::Unchanged
    }
}
