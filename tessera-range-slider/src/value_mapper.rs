//! Conversion between pointer coordinates, slider values and track positions.
//!
//! The controller only talks to the [`ValueMapper`] trait. Hosts with their
//! own substrate can implement it; [`LinearValueMapper`] covers the usual
//! linear track.

use crate::{
    args::{Direction, RangeSliderArgs},
    px::{PxPosition, PxRect},
};

/// The slider substrate's value mapping.
pub trait ValueMapper {
    /// Lower bound of the track.
    fn min(&self) -> f32;

    /// Upper bound of the track.
    fn max(&self) -> f32;

    /// Snaps `raw` to the step grid and clamps it to `[min, max]`.
    fn round_value(&self, raw: f32) -> f32;

    /// Normalized track position (0.0..=1.0) of `value`.
    fn position(&self, value: f32) -> f32;

    /// Rounded value under `pointer` on `track`, after removing the drag
    /// `grab_offset` (pixels along the active axis).
    fn position_to_value(&self, pointer: PxPosition, track: &PxRect, grab_offset: f32) -> f32;

    /// Signed distance along the active axis from the center of `rect` to
    /// `pointer`.
    fn axis_offset(&self, pointer: PxPosition, rect: &PxRect) -> f32;

    /// Whether values grow opposite to screen coordinates on the active axis.
    fn is_inverted(&self) -> bool;
}

/// Linear mapping derived from [`RangeSliderArgs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearValueMapper {
    min: f32,
    max: f32,
    step: f32,
    decimals: u32,
    direction: Direction,
    reverse: bool,
}

impl LinearValueMapper {
    /// Builds a mapper from already validated args.
    pub fn new(args: &RangeSliderArgs) -> Self {
        Self {
            min: args.min,
            max: args.max,
            step: args.step,
            decimals: args.decimals(),
            direction: args.direction,
            reverse: args.reverse,
        }
    }

    /// Step size, `0.0` when continuous.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Axis the pointer is read on.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn trim(&self, value: f32) -> f32 {
        if self.decimals == 0 {
            return value.round();
        }
        let factor = 10f32.powi(self.decimals as i32);
        (value * factor).round() / factor
    }

    fn axis(&self, pointer: PxPosition) -> f32 {
        match self.direction {
            Direction::Horizontal => pointer.x.to_f32(),
            Direction::Vertical => pointer.y.to_f32(),
        }
    }
}

impl ValueMapper for LinearValueMapper {
    fn min(&self) -> f32 {
        self.min
    }

    fn max(&self) -> f32 {
        self.max
    }

    fn round_value(&self, raw: f32) -> f32 {
        if !raw.is_finite() {
            return self.min;
        }
        let clamped = raw.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let offset = self.min % self.step;
        let snapped = ((clamped - offset) / self.step).round() * self.step + offset;
        self.trim(snapped.min(self.max)).clamp(self.min, self.max)
    }

    fn position(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    fn position_to_value(&self, pointer: PxPosition, track: &PxRect, grab_offset: f32) -> f32 {
        let (track_start, track_length) = match self.direction {
            Direction::Horizontal => (track.x.to_f32(), track.width.to_f32()),
            Direction::Vertical => (track.y.to_f32(), track.height.to_f32()),
        };
        let mut fraction = if track_length > 0.0 {
            ((self.axis(pointer) - track_start - grab_offset) / track_length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.is_inverted() {
            fraction = 1.0 - fraction;
        }
        self.round_value(self.min + fraction * (self.max - self.min))
    }

    fn axis_offset(&self, pointer: PxPosition, rect: &PxRect) -> f32 {
        let (center_x, center_y) = rect.center_f32();
        match self.direction {
            Direction::Horizontal => pointer.x.to_f32() - center_x,
            Direction::Vertical => pointer.y.to_f32() - center_y,
        }
    }

    /// Vertical tracks grow upward while screen Y grows downward, so they are
    /// inverted unless `reverse` flips them back.
    fn is_inverted(&self) -> bool {
        match self.direction {
            Direction::Horizontal => self.reverse,
            Direction::Vertical => !self.reverse,
        }
    }
}
