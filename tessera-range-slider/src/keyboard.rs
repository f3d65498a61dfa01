//! Keyboard stepping for the focused thumb.

/// Fallback increment when the slider is continuous.
const CONTINUOUS_STEP: f32 = 0.1;
/// Page keys jump this many steps on short tracks.
const PAGE_STEPS: f32 = 10.0;
/// Tracks spanning more than this many steps page by a tenth of the range.
const LONG_TRACK_STEPS: f32 = 100.0;

/// Keys the thumbs respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
}

/// Modifier keys held with a [`SliderKey`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    /// Shift triples arrow increments.
    pub shift: bool,
    /// Ctrl doubles arrow increments.
    pub ctrl: bool,
}

/// A key press delivered to the focused thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// The key.
    pub key: SliderKey,
    /// Modifiers held at the time.
    pub modifiers: KeyModifiers,
}

impl From<SliderKey> for KeyInput {
    fn from(key: SliderKey) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::default(),
        }
    }
}

/// The range a thumb may move in and the track it lives on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbBounds {
    /// Lowest value this thumb may take.
    pub lower: f32,
    /// Highest value this thumb may take.
    pub upper: f32,
    /// Step of the track, `0.0` when continuous.
    pub step: f32,
    /// Full extent of the track, `max - min`. Page keys size their jump from
    /// this, not from `upper - lower`, so the jump stays the same however
    /// close the other thumb is.
    pub span: f32,
    /// Whether left/right are swapped.
    pub reverse: bool,
}

/// Value a thumb at `current` should take after `input`, clamped to the
/// thumb's own bounds.
pub fn next_value(input: KeyInput, current: f32, bounds: &ThumbBounds) -> f32 {
    let step = if bounds.step > 0.0 {
        bounds.step
    } else {
        CONTINUOUS_STEP
    };
    let steps = bounds.span / step;

    let next = match input.key {
        SliderKey::Home => bounds.lower,
        SliderKey::End => bounds.upper,
        SliderKey::PageUp | SliderKey::PageDown => {
            let jump = if steps > LONG_TRACK_STEPS {
                steps / 10.0
            } else {
                PAGE_STEPS
            };
            let sign = if input.key == SliderKey::PageUp { 1.0 } else { -1.0 };
            current + sign * step * jump
        }
        SliderKey::ArrowLeft | SliderKey::ArrowRight | SliderKey::ArrowUp | SliderKey::ArrowDown => {
            let increase = match input.key {
                SliderKey::ArrowUp => true,
                SliderKey::ArrowDown => false,
                SliderKey::ArrowRight => !bounds.reverse,
                _ => bounds.reverse,
            };
            let multiplier = if input.modifiers.shift {
                3.0
            } else if input.modifiers.ctrl {
                2.0
            } else {
                1.0
            };
            let sign = if increase { 1.0 } else { -1.0 };
            current + sign * step * multiplier
        }
    };
    next.clamp(bounds.lower, bounds.upper)
}
