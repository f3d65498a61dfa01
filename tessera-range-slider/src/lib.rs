//! Headless interaction controller for a two-thumb range slider.
//!
//! The crate decides what a range slider does with input and leaves drawing
//! to the host. A host forwards pointer, focus and key events to a
//! [`RangeSliderController`], reports where it drew the track and thumbs
//! through [`SliderGeometry`], and receives the new `[lo, hi]` pair through
//! the `on_change` callback.
//!
//! # Guarantees
//!
//! - `min <= lo <= hi <= max` after every call.
//! - A drag moves only the thumb picked when it started; moves that would
//!   cross the other thumb are dropped.
//! - `on_change` fires once per actual change, never for echoes of the
//!   host's own value.
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::{
//!     Handle, PointerEvent, RangeSliderArgs, RangeSliderController, TrackLayout,
//!     px::{Px, PxPosition, PxRect},
//! };
//!
//! let args = RangeSliderArgs::default()
//!     .min(0.0)
//!     .max(10.0)
//!     .step(1.0)
//!     .on_change(|[lo, hi]| println!("range is now {lo}..{hi}"));
//! let mut slider = RangeSliderController::new(args, Some(&[2.0, 8.0])).unwrap();
//!
//! let track = PxRect::new(Px(0), Px(0), Px(100), Px(20));
//! let layout = TrackLayout::new(track, Px(20), slider.mapper(), slider.value());
//!
//! let press = PxPosition::new(Px(20), Px(10));
//! slider
//!     .handle_pointer_event(PointerEvent::pressed(press).on_thumb(Handle::Start), &layout)
//!     .unwrap();
//! slider
//!     .handle_pointer_event(PointerEvent::moved(PxPosition::new(Px(50), Px(10))), &layout)
//!     .unwrap();
//! assert_eq!(slider.value().to_array(), [5.0, 8.0]);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod args;
pub mod controller;
pub mod drag;
pub mod error;
pub mod focus_state;
pub mod form;
pub mod keyboard;
pub mod pair;
pub mod prop;
pub mod px;
pub mod resolver;
pub mod state;
pub mod value_mapper;

pub use crate::{
    args::{Direction, RangeSliderArgs},
    controller::{
        PointerEvent, PointerEventContent, PointerResponse, RangeSliderController, ThumbView,
    },
    drag::{DragCoordinator, DragSession, MoveOutcome},
    error::{ConfigError, GeometryError},
    focus_state::{FocusCoordinator, FocusRequest},
    form::FormProxy,
    keyboard::{KeyInput, KeyModifiers, SliderKey},
    pair::{Handle, PairValue, ProxiedPairModel, derive_internal},
    prop::CallbackWith,
    resolver::{SliderGeometry, TrackLayout, resolve_thumb},
    state::State,
    value_mapper::{LinearValueMapper, ValueMapper},
};
