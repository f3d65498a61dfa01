//! Error types surfaced to the host.
//!
//! Malformed values and crossing drags are repaired silently and never
//! show up here. What remains are integration faults: invalid configuration
//! and geometry the host failed to provide.

use thiserror::Error;

use crate::pair::Handle;

/// Invalid [`RangeSliderArgs`](crate::args::RangeSliderArgs).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min`, `max` or `step` is NaN or infinite.
    #[error("slider {field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// `min` is greater than `max`.
    #[error("slider min ({min}) is greater than max ({max})")]
    InvertedBounds {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },
    /// `step` is negative.
    #[error("slider step must not be negative, got {0}")]
    NegativeStep(f32),
}

/// The host has not mounted the elements the controller needs to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// No bounding box is available for the track.
    #[error("slider track is not mounted")]
    TrackNotMounted,
    /// No bounding box is available for the given thumb.
    #[error("slider thumb {0:?} is not mounted")]
    ThumbNotMounted(Handle),
}
