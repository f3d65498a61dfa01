//! Configuration for the range slider.

use derive_setters::Setters;

use crate::{error::ConfigError, prop::CallbackWith};

/// Precision cap for derived decimals; f32 has no meaningful digits beyond it.
const MAX_DECIMALS: u32 = 6;

/// Axis along which the thumbs travel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The track runs left to right; the pointer's X coordinate is read.
    #[default]
    Horizontal,
    /// The track runs bottom to top; the pointer's Y coordinate is read.
    Vertical,
}

/// Arguments for a range slider controller.
///
/// ```
/// use tessera_range_slider::args::{Direction, RangeSliderArgs};
///
/// let args = RangeSliderArgs::default()
///     .min(0.0)
///     .max(10.0)
///     .step(1.0)
///     .direction(Direction::Vertical)
///     .on_change(|[lo, hi]| println!("{lo}..{hi}"));
/// assert!(args.validate().is_ok());
/// ```
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct RangeSliderArgs {
    /// Lower bound of the track.
    pub min: f32,
    /// Upper bound of the track.
    pub max: f32,
    /// Granularity values snap to. `0.0` means continuous.
    pub step: f32,
    /// Axis the pointer is read on.
    pub direction: Direction,
    /// Flips the value axis: right-to-left for horizontal tracks, top-to-bottom
    /// for vertical ones.
    pub reverse: bool,
    /// Ignore all pointer and keyboard input.
    pub disabled: bool,
    /// Show the value but refuse edits.
    pub readonly: bool,
    /// Base identifier for the form proxies. Generated when absent.
    #[setters(strip_option, into)]
    pub id: Option<String>,
    /// Form field name shared by both proxies. Falls back to the id.
    #[setters(strip_option, into)]
    pub name: Option<String>,
    /// Called with the new `[lo, hi]` whenever the pair changes.
    #[setters(skip)]
    pub on_change: CallbackWith<[f32; 2]>,
}

impl RangeSliderArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn([f32; 2]) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<[f32; 2]>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Checks that the bounds and step describe a usable track.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is not finite, `min > max`, or
    /// `step` is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("min", self.min), ("max", self.max), ("step", self.step)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.step < 0.0 {
            return Err(ConfigError::NegativeStep(self.step));
        }
        Ok(())
    }

    /// Number of fractional digits rounded values are trimmed to.
    pub fn decimals(&self) -> u32 {
        fractional_digits(self.step).max(fractional_digits(self.min))
    }

    /// Whether pointer and keyboard edits are accepted.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.readonly
    }
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 0.0,
            direction: Direction::default(),
            reverse: false,
            disabled: false,
            readonly: false,
            id: None,
            name: None,
            on_change: CallbackWith::default(),
        }
    }
}

fn fractional_digits(value: f32) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let text = value.to_string();
    let digits = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    u32::try_from(digits).map_or(MAX_DECIMALS, |d| d.min(MAX_DECIMALS))
}
