//! Physical pixel geometry used by the range slider.
//!
//! Pointer coordinates, the track bounding box and the thumb bounding boxes
//! are all expressed in physical pixels with the origin at the top-left
//! corner, X growing to the right and Y growing downward.
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::px::{Px, PxPosition, PxRect};
//!
//! let track = PxRect::new(Px(10), Px(0), Px(200), Px(20));
//! assert_eq!(track.center(), PxPosition::new(Px(110), Px(10)));
//! assert!(track.contains(PxPosition::new(Px(50), Px(5))));
//! ```

use std::ops::{Add, Sub};

/// A physical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, rounding to the nearest pixel and
    /// saturating at the i32 range.
    pub fn from_f32(value: f32) -> Self {
        let rounded = value.round();
        if rounded.is_nan() {
            Self::ZERO
        } else if rounded >= i32::MAX as f32 {
            Self(i32::MAX)
        } else if rounded <= i32::MIN as f32 {
            Self(i32::MIN)
        } else {
            Self(rounded as i32)
        }
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a `size`×`size` square centered on `center`.
    pub fn centered_square(center: PxPosition, size: Px) -> Self {
        let half = Px(size.0 / 2);
        Self {
            x: center.x - half,
            y: center.y - half,
            width: size,
            height: size,
        }
    }

    /// Center point of the rectangle, truncated to whole pixels.
    pub fn center(&self) -> PxPosition {
        PxPosition {
            x: self.x + Px(self.width.0 / 2),
            y: self.y + Px(self.height.0 / 2),
        }
    }

    /// Exact center as floating point `(x, y)`.
    pub fn center_f32(&self) -> (f32, f32) {
        (
            self.x.to_f32() + self.width.to_f32() / 2.0,
            self.y.to_f32() + self.height.to_f32() / 2.0,
        )
    }

    /// Checks whether the point lies within the rectangle.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.x.0 < self.x.0 + self.width.0
            && point.y.0 >= self.y.0
            && point.y.0 < self.y.0 + self.height.0
    }
}
