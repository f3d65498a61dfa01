//! The range slider controller.
//!
//! [`RangeSliderController`] owns the pair and everything that may change it.
//! Hosts feed it pointer, focus and key events in delivery order; each call
//! reads the pair, validates, writes and publishes before returning.

use tracing::{debug, instrument};

use crate::{
    args::RangeSliderArgs,
    drag::{DragCoordinator, DragSession, MoveOutcome, apply_ordered},
    error::{ConfigError, GeometryError},
    focus_state::{FocusCoordinator, FocusRequest},
    form::{FormProxy, generate_id},
    keyboard::{KeyInput, ThumbBounds, next_value},
    pair::{Handle, PairValue, ProxiedPairModel},
    px::PxPosition,
    resolver::{SliderGeometry, resolve_thumb, thumb_rect, track_rect},
    value_mapper::{LinearValueMapper, ValueMapper},
};

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventContent {
    /// A mouse button or touch point went down on the slider.
    Pressed,
    /// The pointer moved while captured by the slider.
    Moved,
    /// The button or touch point was released.
    Released,
    /// Pointer capture was lost without a release.
    Cancelled,
}

/// A pointer event in the same coordinate space as [`SliderGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: PxPosition,
    /// Phase of the gesture.
    pub content: PointerEventContent,
    /// Thumb element the event was dispatched to, if any.
    pub target: Option<Handle>,
}

impl PointerEvent {
    fn new(position: PxPosition, content: PointerEventContent) -> Self {
        Self {
            position,
            content,
            target: None,
        }
    }

    /// A press at `position`.
    pub fn pressed(position: PxPosition) -> Self {
        Self::new(position, PointerEventContent::Pressed)
    }

    /// A move to `position`.
    pub fn moved(position: PxPosition) -> Self {
        Self::new(position, PointerEventContent::Moved)
    }

    /// A release at `position`.
    pub fn released(position: PxPosition) -> Self {
        Self::new(position, PointerEventContent::Released)
    }

    /// Loss of pointer capture.
    pub fn cancelled(position: PxPosition) -> Self {
        Self::new(position, PointerEventContent::Cancelled)
    }

    /// Marks the event as dispatched to `handle`'s thumb element.
    pub fn on_thumb(mut self, handle: Handle) -> Self {
        self.target = Some(handle);
        self
    }
}

/// Result of a pointer event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerResponse {
    /// Session the event belonged to, if any.
    pub session: Option<DragSession>,
    /// What happened to the value carried by the event.
    pub outcome: Option<MoveOutcome>,
    /// Focus the host should move.
    pub focus_request: Option<FocusRequest>,
}

/// Render-side snapshot of one thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbView {
    /// Which thumb.
    pub handle: Handle,
    /// Current value.
    pub value: f32,
    /// Normalized track position of the value.
    pub position: f32,
    /// Lowest value this thumb may take.
    pub min: f32,
    /// Highest value this thumb may take.
    pub max: f32,
    /// Whether to draw the focus ring.
    pub focused: bool,
    /// Whether the thumb is being dragged.
    pub dragging: bool,
}

/// Interaction controller for a two-thumb range slider.
#[derive(Debug, Clone)]
pub struct RangeSliderController {
    args: RangeSliderArgs,
    mapper: LinearValueMapper,
    model: ProxiedPairModel,
    drag: DragCoordinator,
    focus: FocusCoordinator,
    base_id: String,
}

impl RangeSliderController {
    /// Creates a controller bound to the host's `external` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `args` fail validation.
    pub fn new(args: RangeSliderArgs, external: Option<&[f32]>) -> Result<Self, ConfigError> {
        args.validate()?;
        let mapper = LinearValueMapper::new(&args);
        let model = ProxiedPairModel::new(external, &mapper, args.on_change.clone());
        let base_id = args.id.clone().unwrap_or_else(generate_id);
        Ok(Self {
            args,
            mapper,
            model,
            drag: DragCoordinator::new(),
            focus: FocusCoordinator::new(),
            base_id,
        })
    }

    /// Current arguments.
    pub fn args(&self) -> &RangeSliderArgs {
        &self.args
    }

    /// The value mapper derived from the arguments.
    pub fn mapper(&self) -> &LinearValueMapper {
        &self.mapper
    }

    /// Replaces the arguments and re-derives the pair from the host's last
    /// value under the new bounds. Nothing is published.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] and keeps the old arguments when `args` fail
    /// validation.
    pub fn set_args(&mut self, args: RangeSliderArgs) -> Result<(), ConfigError> {
        args.validate()?;
        self.mapper = LinearValueMapper::new(&args);
        self.model.set_on_change(args.on_change.clone());
        self.model.rederive(&self.mapper);
        if let Some(id) = &args.id {
            self.base_id.clone_from(id);
        }
        if !args.is_interactive() {
            self.drag.end();
        }
        self.args = args;
        Ok(())
    }

    /// Current pair.
    pub fn value(&self) -> PairValue {
        self.model.get()
    }

    /// Writes a pair, repairing it first. Returns whether it was published.
    pub fn set_value(&mut self, lo: f32, hi: f32) -> bool {
        self.model.set(lo, hi, &self.mapper)
    }

    /// Takes a new value from the host without echoing it back.
    pub fn sync_external(&mut self, external: Option<&[f32]>) {
        self.model.sync_external(external, &self.mapper);
    }

    /// The open drag session, if any.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    /// The thumb holding focus, if any.
    pub fn focused_handle(&self) -> Option<Handle> {
        self.focus.focused()
    }

    /// Whether the control as a whole is focused.
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Handles one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the host has not mounted the track or
    /// the thumbs; the event is dropped.
    #[instrument(level = "trace", skip(self, geometry))]
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        geometry: &impl SliderGeometry,
    ) -> Result<PointerResponse, GeometryError> {
        if !self.args.is_interactive() {
            self.drag.end();
            return Ok(PointerResponse::default());
        }

        match event.content {
            PointerEventContent::Pressed => self.on_pressed(event, geometry),
            PointerEventContent::Moved => {
                let Some(session) = self.drag.session() else {
                    return Ok(PointerResponse {
                        outcome: Some(MoveOutcome::NoSession),
                        ..PointerResponse::default()
                    });
                };
                let track = track_rect(geometry)?;
                let value = self
                    .mapper
                    .position_to_value(event.position, &track, session.grab_offset);
                let handle = event.target.unwrap_or(session.handle);
                let outcome = self
                    .drag
                    .apply_move(handle, value, &mut self.model, &self.mapper);
                Ok(PointerResponse {
                    session: Some(session),
                    outcome: Some(outcome),
                    focus_request: None,
                })
            }
            PointerEventContent::Released => {
                let Some(session) = self.drag.session() else {
                    return Ok(PointerResponse::default());
                };
                let track = track_rect(geometry);
                self.drag.end();
                let track = track?;
                let value = self
                    .mapper
                    .position_to_value(event.position, &track, session.grab_offset);
                let outcome = apply_ordered(session.handle, value, &mut self.model, &self.mapper);
                Ok(PointerResponse {
                    session: Some(session),
                    outcome: Some(outcome),
                    focus_request: None,
                })
            }
            PointerEventContent::Cancelled => Ok(PointerResponse {
                session: self.drag.end(),
                ..PointerResponse::default()
            }),
        }
    }

    fn on_pressed(
        &mut self,
        event: PointerEvent,
        geometry: &impl SliderGeometry,
    ) -> Result<PointerResponse, GeometryError> {
        let track = track_rect(geometry)?;
        let resolved = resolve_thumb(event.position, geometry, &self.mapper)?;

        let focus_request = if self.focus.is_thumb_focused(resolved) {
            None
        } else {
            let related = self.focus.focused();
            self.handle_focus(resolved, related)
        };
        let handle = focus_request.map_or(resolved, |request| request.handle);

        if event.target == Some(resolved) {
            let thumb = thumb_rect(geometry, resolved)?;
            let grab_offset = self.mapper.axis_offset(event.position, &thumb);
            let session = self.drag.begin(handle, grab_offset);
            return Ok(PointerResponse {
                session: Some(session),
                outcome: None,
                focus_request,
            });
        }

        let session = self.drag.begin(handle, 0.0);
        let value = self.mapper.position_to_value(event.position, &track, 0.0);
        let outcome = self
            .drag
            .apply_move(handle, value, &mut self.model, &self.mapper);
        Ok(PointerResponse {
            session: Some(session),
            outcome: Some(outcome),
            focus_request,
        })
    }

    /// Records that `handle` gained focus from `related` (`None` when focus
    /// came from outside the control). Returns the focus move the host must
    /// perform, if any.
    pub fn handle_focus(&mut self, handle: Handle, related: Option<Handle>) -> Option<FocusRequest> {
        let request = self
            .focus
            .on_focus(handle, related, self.model.get(), self.mapper.min());
        if let Some(request) = request {
            debug!(from = ?handle, to = ?request.handle, "focus transfer requested");
        }
        request
    }

    /// Records that the focused thumb lost focus.
    pub fn handle_blur(&mut self) {
        self.focus.on_blur();
    }

    /// Applies a key press to the focused thumb. Returns whether the pair
    /// changed.
    pub fn handle_key(&mut self, input: impl Into<KeyInput>) -> bool {
        if !self.args.is_interactive() {
            return false;
        }
        let Some(handle) = self.focus.focused() else {
            return false;
        };
        let pair = self.model.get();
        let view = self.thumb_view(handle);
        let bounds = ThumbBounds {
            lower: view.min,
            upper: view.max,
            step: self.mapper.step(),
            span: self.mapper.max() - self.mapper.min(),
            reverse: self.args.reverse,
        };
        let next = next_value(input.into(), pair.get(handle), &bounds);
        let next = pair.with(handle, next);
        self.model.set(next.lo, next.hi, &self.mapper)
    }

    /// Snapshot of `handle` for rendering.
    pub fn thumb_view(&self, handle: Handle) -> ThumbView {
        let pair = self.model.get();
        let (min, max) = match handle {
            Handle::Start => (self.mapper.min(), pair.hi),
            Handle::Stop => (pair.lo, self.mapper.max()),
        };
        let value = pair.get(handle);
        ThumbView {
            handle,
            value,
            position: self.mapper.position(value),
            min,
            max,
            focused: self.focus.is_thumb_focused(handle),
            dragging: self.drag.is_dragging(handle),
        }
    }

    /// Normalized track positions of `[lo, hi]`, for drawing the filled
    /// segment.
    pub fn track_fill(&self) -> [f32; 2] {
        let pair = self.model.get();
        [self.mapper.position(pair.lo), self.mapper.position(pair.hi)]
    }

    /// Base identifier of the form proxies.
    pub fn id(&self) -> &str {
        &self.base_id
    }

    /// The start and stop form proxies.
    pub fn form_proxies(&self) -> [FormProxy; 2] {
        let name = self.args.name.as_deref().unwrap_or(&self.base_id);
        Handle::ALL.map(|handle| {
            FormProxy::new(
                handle,
                &self.base_id,
                name,
                self.model.get(),
                self.args.disabled,
                self.args.readonly,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::{
        keyboard::SliderKey,
        px::{Px, PxRect},
        resolver::TrackLayout,
    };

    struct Unmounted;

    impl SliderGeometry for Unmounted {
        fn track_rect(&self) -> Option<PxRect> {
            None
        }

        fn thumb_rect(&self, _handle: Handle) -> Option<PxRect> {
            None
        }
    }

    type Log = Arc<Mutex<Vec<[f32; 2]>>>;

    fn controller(lo: f32, hi: f32) -> (RangeSliderController, Log) {
        controller_with(RangeSliderArgs::default(), lo, hi)
    }

    fn controller_with(args: RangeSliderArgs, lo: f32, hi: f32) -> (RangeSliderController, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let args = args
            .min(0.0)
            .max(10.0)
            .step(1.0)
            .on_change(move |v| sink.lock().push(v));
        let controller = RangeSliderController::new(args, Some(&[lo, hi])).unwrap();
        (controller, log)
    }

    /// 100px track at x = 0..100, 10px per unit.
    fn geometry(c: &RangeSliderController) -> TrackLayout {
        TrackLayout::new(
            PxRect::new(Px(0), Px(0), Px(100), Px(20)),
            Px(20),
            c.mapper(),
            c.value(),
        )
    }

    fn at(x: i32) -> PxPosition {
        PxPosition::new(Px(x), Px(10))
    }

    #[test]
    fn press_on_track_moves_nearest_thumb() {
        let (mut c, log) = controller(2.0, 8.0);
        let g = geometry(&c);
        let response = c.handle_pointer_event(PointerEvent::pressed(at(40)), &g).unwrap();
        assert_eq!(response.outcome, Some(MoveOutcome::Accepted));
        assert_eq!(response.session.map(|s| s.handle), Some(Handle::Start));
        assert_eq!(c.value(), PairValue::new(4.0, 8.0));
        assert_eq!(c.focused_handle(), Some(Handle::Start));
        assert_eq!(*log.lock(), vec![[4.0, 8.0]]);
    }

    #[test]
    fn drag_rejects_crossing_and_keeps_last_value() {
        let (mut c, _) = controller(2.0, 8.0);
        let g = geometry(&c);
        c.handle_pointer_event(PointerEvent::pressed(at(20)).on_thumb(Handle::Start), &g)
            .unwrap();
        let moved = c.handle_pointer_event(PointerEvent::moved(at(50)), &g).unwrap();
        assert_eq!(moved.outcome, Some(MoveOutcome::Accepted));
        assert_eq!(c.value(), PairValue::new(5.0, 8.0));

        let crossed = c.handle_pointer_event(PointerEvent::moved(at(90)), &g).unwrap();
        assert_eq!(crossed.outcome, Some(MoveOutcome::Crossing));
        assert_eq!(c.value(), PairValue::new(5.0, 8.0));

        let released = c.handle_pointer_event(PointerEvent::released(at(90)), &g).unwrap();
        assert_eq!(released.outcome, Some(MoveOutcome::Crossing));
        assert_eq!(c.value(), PairValue::new(5.0, 8.0));
        assert_eq!(c.drag_session(), None);
        assert_eq!(c.focused_handle(), Some(Handle::Start));
    }

    #[test]
    fn press_on_thumb_records_grab_offset() {
        let (mut c, log) = controller(2.0, 8.0);
        let g = geometry(&c);
        let response = c
            .handle_pointer_event(PointerEvent::pressed(at(84)).on_thumb(Handle::Stop), &g)
            .unwrap();
        assert_eq!(response.outcome, None);
        assert_eq!(
            response.session,
            Some(DragSession {
                handle: Handle::Stop,
                grab_offset: 4.0
            })
        );
        assert!(log.lock().is_empty());

        c.handle_pointer_event(PointerEvent::moved(at(64)), &g).unwrap();
        assert_eq!(c.value(), PairValue::new(2.0, 6.0));
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let (mut c, log) = controller(2.0, 8.0);
        let g = geometry(&c);
        let response = c.handle_pointer_event(PointerEvent::moved(at(50)), &g).unwrap();
        assert_eq!(response.outcome, Some(MoveOutcome::NoSession));
        assert_eq!(c.value(), PairValue::new(2.0, 8.0));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn cancel_ends_session_without_commit() {
        let (mut c, _) = controller(2.0, 8.0);
        let g = geometry(&c);
        c.handle_pointer_event(PointerEvent::pressed(at(20)).on_thumb(Handle::Start), &g)
            .unwrap();
        let response = c
            .handle_pointer_event(PointerEvent::cancelled(at(60)), &g)
            .unwrap();
        assert_eq!(response.session.map(|s| s.handle), Some(Handle::Start));
        assert_eq!(c.drag_session(), None);
        assert_eq!(c.value(), PairValue::new(2.0, 8.0));
    }

    #[test]
    fn press_on_stacked_thumbs_at_min_drives_stop() {
        let (mut c, _) = controller(0.0, 0.0);
        let g = geometry(&c);
        let response = c.handle_pointer_event(PointerEvent::pressed(at(30)), &g).unwrap();
        assert_eq!(response.focus_request, None);
        assert_eq!(response.session.map(|s| s.handle), Some(Handle::Stop));
        assert_eq!(c.value(), PairValue::new(0.0, 3.0));
        assert_eq!(c.focused_handle(), Some(Handle::Stop));
    }

    #[test]
    fn stacked_at_min_with_stop_focused_still_separates() {
        let (mut c, _) = controller(0.0, 0.0);
        c.handle_focus(Handle::Stop, None);
        let g = geometry(&c);

        let pressed = c.handle_pointer_event(PointerEvent::pressed(at(50)), &g).unwrap();
        assert_eq!(pressed.session.map(|s| s.handle), Some(Handle::Stop));
        assert_eq!(pressed.outcome, Some(MoveOutcome::Accepted));

        let moved = c.handle_pointer_event(PointerEvent::moved(at(70)), &g).unwrap();
        assert_eq!(moved.outcome, Some(MoveOutcome::Accepted));
        assert_eq!(c.value(), PairValue::new(0.0, 7.0));
    }

    #[test]
    fn redirected_thumb_press_keeps_grab_offset() {
        let (mut c, log) = controller(0.0, 0.0);
        // Track starts at x = 20, so the stacked thumbs are centered there.
        let g = TrackLayout::new(
            PxRect::new(Px(20), Px(0), Px(100), Px(20)),
            Px(20),
            c.mapper(),
            c.value(),
        );

        let response = c
            .handle_pointer_event(PointerEvent::pressed(at(16)).on_thumb(Handle::Start), &g)
            .unwrap();
        assert_eq!(
            response.focus_request,
            Some(FocusRequest {
                handle: Handle::Stop
            })
        );
        assert_eq!(
            response.session,
            Some(DragSession {
                handle: Handle::Stop,
                grab_offset: -4.0
            })
        );
        assert_eq!(response.outcome, None);
        assert!(log.lock().is_empty());

        c.handle_pointer_event(PointerEvent::moved(at(44)), &g).unwrap();
        assert_eq!(c.value(), PairValue::new(0.0, 3.0));
    }

    #[test]
    fn move_aimed_at_the_other_thumb_is_ignored() {
        let (mut c, log) = controller(2.0, 8.0);
        let g = geometry(&c);
        c.handle_pointer_event(PointerEvent::pressed(at(20)).on_thumb(Handle::Start), &g)
            .unwrap();

        let response = c
            .handle_pointer_event(PointerEvent::moved(at(50)).on_thumb(Handle::Stop), &g)
            .unwrap();
        assert_eq!(response.outcome, Some(MoveOutcome::HandleMismatch));
        assert_eq!(c.value(), PairValue::new(2.0, 8.0));
        assert!(log.lock().is_empty());

        let response = c
            .handle_pointer_event(PointerEvent::moved(at(50)).on_thumb(Handle::Start), &g)
            .unwrap();
        assert_eq!(response.outcome, Some(MoveOutcome::Accepted));
        assert_eq!(c.value(), PairValue::new(5.0, 8.0));
    }

    #[test]
    fn turning_readonly_mid_drag_closes_the_session() {
        let (mut c, _) = controller(2.0, 8.0);
        let g = geometry(&c);
        c.handle_pointer_event(PointerEvent::pressed(at(20)).on_thumb(Handle::Start), &g)
            .unwrap();
        assert!(c.thumb_view(Handle::Start).dragging);

        let readonly = c.args().clone().readonly(true);
        c.set_args(readonly).unwrap();
        assert_eq!(c.drag_session(), None);
        assert!(!c.thumb_view(Handle::Start).dragging);

        let released = c.handle_pointer_event(PointerEvent::released(at(50)), &g).unwrap();
        assert_eq!(released, PointerResponse::default());
        assert_eq!(c.value(), PairValue::new(2.0, 8.0));
    }

    #[test]
    fn disabled_and_readonly_ignore_pointer() {
        let (mut c, _) = controller_with(RangeSliderArgs::default().readonly(true), 2.0, 8.0);
        let g = geometry(&c);
        let response = c.handle_pointer_event(PointerEvent::pressed(at(40)), &g).unwrap();
        assert_eq!(response, PointerResponse::default());
        assert_eq!(c.value(), PairValue::new(2.0, 8.0));

        let (mut c, _) = controller_with(RangeSliderArgs::default().disabled(true), 2.0, 8.0);
        let response = c.handle_pointer_event(PointerEvent::pressed(at(40)), &g).unwrap();
        assert_eq!(response, PointerResponse::default());
        assert_eq!(c.drag_session(), None);
    }

    #[test]
    fn unmounted_geometry_is_an_error() {
        let (mut c, _) = controller(2.0, 8.0);
        assert_eq!(
            c.handle_pointer_event(PointerEvent::pressed(at(40)), &Unmounted),
            Err(GeometryError::TrackNotMounted)
        );
        assert_eq!(c.drag_session(), None);
    }

    #[test]
    fn keyboard_moves_focused_thumb_within_its_bounds() {
        let (mut c, log) = controller(2.0, 8.0);
        assert!(!c.handle_key(SliderKey::ArrowRight));

        c.handle_focus(Handle::Start, None);
        assert!(c.handle_key(SliderKey::ArrowRight));
        assert_eq!(c.value(), PairValue::new(3.0, 8.0));
        assert!(c.handle_key(SliderKey::End));
        assert_eq!(c.value(), PairValue::new(8.0, 8.0));
        assert!(!c.handle_key(SliderKey::ArrowRight));

        c.handle_blur();
        c.handle_focus(Handle::Stop, Some(Handle::Start));
        assert!(c.handle_key(SliderKey::End));
        assert_eq!(c.value(), PairValue::new(8.0, 10.0));
        assert_eq!(log.lock().len(), 3);
    }

    #[test]
    fn thumb_views_reflect_state() {
        let (mut c, _) = controller(2.0, 8.0);
        c.handle_focus(Handle::Stop, None);
        let start = c.thumb_view(Handle::Start);
        let stop = c.thumb_view(Handle::Stop);
        assert_eq!((start.min, start.max), (0.0, 8.0));
        assert_eq!((stop.min, stop.max), (2.0, 10.0));
        assert_eq!(start.position, 0.2);
        assert!(!start.focused);
        assert!(stop.focused);
        assert_eq!(c.track_fill(), [0.2, 0.8]);
    }

    #[test]
    fn set_args_rederives_without_publishing() {
        let (mut c, log) = controller(2.0, 8.0);
        let narrowed = c.args().clone().min(3.0).max(6.0);
        c.set_args(narrowed).unwrap();
        assert_eq!(c.value(), PairValue::new(3.0, 6.0));
        assert!(log.lock().is_empty());

        let invalid = c.args().clone().min(9.0);
        assert!(c.set_args(invalid).is_err());
        assert_eq!(c.args().min, 3.0);
    }

    #[test]
    fn form_proxies_mirror_pair() {
        let (mut c, _) = controller_with(RangeSliderArgs::default().id("price"), 2.0, 8.0);
        c.set_value(3.0, 7.0);
        let [start, stop] = c.form_proxies();
        assert_eq!(start.id, "price_start");
        assert_eq!(stop.id, "price_stop");
        assert_eq!(start.name, "price");
        assert_eq!((start.value, stop.value), (3.0, 7.0));
        assert_eq!(start.tab_index, -1);
    }
}
