//! Hit-testing: which thumb does a pointer press belong to.
//!
//! The resolver never queries a rendering tree itself. The host injects a
//! [`SliderGeometry`] that reports where the track and the two thumbs
//! currently sit; [`TrackLayout`] is a ready-made implementation for hosts
//! that lay the thumbs out linearly on the track.

use tracing::error;

use crate::{
    args::Direction,
    error::GeometryError,
    pair::{Handle, PairValue},
    px::{Px, PxPosition, PxRect},
    value_mapper::{LinearValueMapper, ValueMapper},
};

/// Rendered geometry of the slider, in the same coordinate space as pointer
/// events.
pub trait SliderGeometry {
    /// Bounding box of the track, `None` when not mounted.
    fn track_rect(&self) -> Option<PxRect>;

    /// Bounding box of `handle`'s thumb, `None` when not mounted.
    fn thumb_rect(&self, handle: Handle) -> Option<PxRect>;
}

/// Picks the thumb closest to `pointer` along the active axis.
///
/// Exact ties go to [`Handle::Stop`] unless the pointer lies before both
/// thumbs in value order, which only happens when they are stacked. A press
/// on stacked thumbs therefore drives the one that can move toward it.
///
/// # Errors
///
/// Returns [`GeometryError::ThumbNotMounted`] when the host cannot report a
/// thumb's bounding box; the control was wired up incorrectly.
pub fn resolve_thumb(
    pointer: PxPosition,
    geometry: &impl SliderGeometry,
    mapper: &impl ValueMapper,
) -> Result<Handle, GeometryError> {
    let start = thumb_rect(geometry, Handle::Start)?;
    let stop = thumb_rect(geometry, Handle::Stop)?;

    let from_start = mapper.axis_offset(pointer, &start);
    let a = from_start.abs();
    let b = mapper.axis_offset(pointer, &stop).abs();

    Ok(if a < b {
        Handle::Start
    } else if a > b {
        Handle::Stop
    } else {
        let toward_higher = if mapper.is_inverted() {
            from_start <= 0.0
        } else {
            from_start >= 0.0
        };
        if toward_higher { Handle::Stop } else { Handle::Start }
    })
}

pub(crate) fn thumb_rect(
    geometry: &impl SliderGeometry,
    handle: Handle,
) -> Result<PxRect, GeometryError> {
    geometry.thumb_rect(handle).ok_or_else(|| {
        error!(?handle, "thumb geometry requested before it was mounted");
        GeometryError::ThumbNotMounted(handle)
    })
}

pub(crate) fn track_rect(geometry: &impl SliderGeometry) -> Result<PxRect, GeometryError> {
    geometry.track_rect().ok_or_else(|| {
        error!("track geometry requested before it was mounted");
        GeometryError::TrackNotMounted
    })
}

/// Lays both thumbs out as squares centered on their track positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    track: PxRect,
    thumb_size: Px,
    direction: Direction,
    inverted: bool,
    positions: [f32; 2],
}

impl TrackLayout {
    /// Builds the layout for `pair` on `track`.
    pub fn new(track: PxRect, thumb_size: Px, mapper: &LinearValueMapper, pair: PairValue) -> Self {
        Self {
            track,
            thumb_size,
            direction: mapper.direction(),
            inverted: mapper.is_inverted(),
            positions: [mapper.position(pair.lo), mapper.position(pair.hi)],
        }
    }

    /// Returns a copy laid out for a new pair.
    pub fn relayout(self, mapper: &LinearValueMapper, pair: PairValue) -> Self {
        Self::new(self.track, self.thumb_size, mapper, pair)
    }

    /// Center of `handle`'s thumb.
    pub fn thumb_center(&self, handle: Handle) -> PxPosition {
        let position = self.positions[handle.index()];
        let fraction = if self.inverted { 1.0 - position } else { position };
        let (center_x, center_y) = self.track.center_f32();
        match self.direction {
            Direction::Horizontal => {
                let x = self.track.x.to_f32() + fraction * self.track.width.to_f32();
                PxPosition::new(Px::from_f32(x), Px::from_f32(center_y))
            }
            Direction::Vertical => {
                let y = self.track.y.to_f32() + fraction * self.track.height.to_f32();
                PxPosition::new(Px::from_f32(center_x), Px::from_f32(y))
            }
        }
    }
}

impl SliderGeometry for TrackLayout {
    fn track_rect(&self) -> Option<PxRect> {
        Some(self.track)
    }

    fn thumb_rect(&self, handle: Handle) -> Option<PxRect> {
        Some(PxRect::centered_square(
            self.thumb_center(handle),
            self.thumb_size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::RangeSliderArgs;

    struct Unmounted;

    impl SliderGeometry for Unmounted {
        fn track_rect(&self) -> Option<PxRect> {
            None
        }

        fn thumb_rect(&self, _handle: Handle) -> Option<PxRect> {
            None
        }
    }

    fn unit_mapper() -> LinearValueMapper {
        LinearValueMapper::new(&RangeSliderArgs::default().min(0.0).max(1.0))
    }

    fn layout(mapper: &LinearValueMapper, lo: f32, hi: f32) -> TrackLayout {
        TrackLayout::new(
            PxRect::new(Px(0), Px(0), Px(100), Px(20)),
            Px(20),
            mapper,
            PairValue::new(lo, hi),
        )
    }

    fn at(x: i32) -> PxPosition {
        PxPosition::new(Px(x), Px(10))
    }

    #[test]
    fn picks_nearest_thumb() {
        let mapper = unit_mapper();
        let geometry = layout(&mapper, 0.2, 0.8);
        assert_eq!(resolve_thumb(at(30), &geometry, &mapper), Ok(Handle::Start));
        assert_eq!(resolve_thumb(at(70), &geometry, &mapper), Ok(Handle::Stop));
        assert_eq!(resolve_thumb(at(0), &geometry, &mapper), Ok(Handle::Start));
        assert_eq!(resolve_thumb(at(100), &geometry, &mapper), Ok(Handle::Stop));
    }

    #[test]
    fn ties_break_toward_the_pointer() {
        let mapper = unit_mapper();
        let midpoint = layout(&mapper, 0.2, 0.8);
        assert_eq!(resolve_thumb(at(50), &midpoint, &mapper), Ok(Handle::Stop));

        let stacked = layout(&mapper, 0.5, 0.5);
        assert_eq!(resolve_thumb(at(90), &stacked, &mapper), Ok(Handle::Stop));
        assert_eq!(resolve_thumb(at(50), &stacked, &mapper), Ok(Handle::Stop));
        assert_eq!(resolve_thumb(at(10), &stacked, &mapper), Ok(Handle::Start));
    }

    #[test]
    fn reversed_ties_follow_value_order() {
        let mapper =
            LinearValueMapper::new(&RangeSliderArgs::default().min(0.0).max(1.0).reverse(true));
        let stacked = layout(&mapper, 0.5, 0.5);
        assert_eq!(resolve_thumb(at(90), &stacked, &mapper), Ok(Handle::Start));
        assert_eq!(resolve_thumb(at(10), &stacked, &mapper), Ok(Handle::Stop));
    }

    #[test]
    fn only_the_active_axis_counts() {
        let mapper = unit_mapper();
        let geometry = layout(&mapper, 0.2, 0.8);
        let far_below = PxPosition::new(Px(75), Px(500));
        assert_eq!(resolve_thumb(far_below, &geometry, &mapper), Ok(Handle::Stop));
    }

    #[test]
    fn vertical_layout_runs_bottom_up() {
        let mapper = LinearValueMapper::new(
            &RangeSliderArgs::default()
                .min(0.0)
                .max(1.0)
                .direction(Direction::Vertical),
        );
        let geometry = TrackLayout::new(
            PxRect::new(Px(0), Px(0), Px(20), Px(100)),
            Px(20),
            &mapper,
            PairValue::new(0.2, 0.8),
        );
        assert_eq!(geometry.thumb_center(Handle::Start), PxPosition::new(Px(10), Px(80)));
        assert_eq!(geometry.thumb_center(Handle::Stop), PxPosition::new(Px(10), Px(20)));
        let near_top = PxPosition::new(Px(10), Px(25));
        assert_eq!(resolve_thumb(near_top, &geometry, &mapper), Ok(Handle::Stop));
    }

    #[test]
    fn missing_thumbs_fail_fast() {
        let mapper = unit_mapper();
        assert_eq!(
            resolve_thumb(at(10), &Unmounted, &mapper),
            Err(GeometryError::ThumbNotMounted(Handle::Start))
        );
        assert_eq!(track_rect(&Unmounted), Err(GeometryError::TrackNotMounted));
    }
}
