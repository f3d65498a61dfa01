//! The `[lo, hi]` pair and its two-way binding with the host's value.
//!
//! The host owns the bound value. [`derive_internal`] pulls a repaired copy
//! out of it and [`ProxiedPairModel::set`] pushes edits back through the
//! `on_change` callback, skipping the push when nothing changed so that
//! echoes from the host do not loop.

use tracing::trace;

use crate::{prop::CallbackWith, value_mapper::ValueMapper};

/// One of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The thumb holding `lo`.
    Start,
    /// The thumb holding `hi`.
    Stop,
}

impl Handle {
    /// Both handles in visual order.
    pub const ALL: [Handle; 2] = [Handle::Start, Handle::Stop];

    /// The opposite thumb.
    pub fn other(self) -> Self {
        match self {
            Handle::Start => Handle::Stop,
            Handle::Stop => Handle::Start,
        }
    }

    /// Index of this handle's element in `[lo, hi]`.
    pub fn index(self) -> usize {
        match self {
            Handle::Start => 0,
            Handle::Stop => 1,
        }
    }
}

/// An ordered pair with `lo <= hi`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PairValue {
    /// Value of the start thumb.
    pub lo: f32,
    /// Value of the stop thumb.
    pub hi: f32,
}

impl PairValue {
    /// Creates a pair without repairing it.
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Value held by `handle`.
    pub fn get(&self, handle: Handle) -> f32 {
        match handle {
            Handle::Start => self.lo,
            Handle::Stop => self.hi,
        }
    }

    /// Copy of this pair with `handle`'s side replaced.
    pub fn with(self, handle: Handle, value: f32) -> Self {
        match handle {
            Handle::Start => Self { lo: value, ..self },
            Handle::Stop => Self { hi: value, ..self },
        }
    }

    /// The pair as the host-facing array.
    pub fn to_array(self) -> [f32; 2] {
        [self.lo, self.hi]
    }
}

impl From<[f32; 2]> for PairValue {
    fn from([lo, hi]: [f32; 2]) -> Self {
        Self { lo, hi }
    }
}

/// Projects a host value onto a valid pair.
///
/// Absent or empty input becomes `(min, min)`. A single element fills both
/// sides. Otherwise only the first two elements are read, each rounded
/// independently; a pair that comes out descending is swapped.
pub fn derive_internal(external: Option<&[f32]>, mapper: &impl ValueMapper) -> PairValue {
    let (lo, hi) = match external {
        None | Some([]) => return PairValue::new(mapper.min(), mapper.min()),
        Some([only]) => {
            let v = mapper.round_value(*only);
            (v, v)
        }
        Some([first, second, ..]) => (mapper.round_value(*first), mapper.round_value(*second)),
    };
    if lo <= hi {
        PairValue::new(lo, hi)
    } else {
        PairValue::new(hi, lo)
    }
}

/// Owns the working copy of the pair and its link back to the host.
#[derive(Debug, Clone)]
pub struct ProxiedPairModel {
    value: PairValue,
    external: Option<Vec<f32>>,
    on_change: CallbackWith<[f32; 2]>,
}

impl ProxiedPairModel {
    /// Creates a model seeded from the host's current value.
    pub fn new(
        external: Option<&[f32]>,
        mapper: &impl ValueMapper,
        on_change: CallbackWith<[f32; 2]>,
    ) -> Self {
        Self {
            value: derive_internal(external, mapper),
            external: external.map(<[f32]>::to_vec),
            on_change,
        }
    }

    /// Current pair.
    pub fn get(&self) -> PairValue {
        self.value
    }

    /// Repairs `(lo, hi)` and publishes it if it differs from the current
    /// pair. Returns whether `on_change` fired.
    pub fn set(&mut self, lo: f32, hi: f32, mapper: &impl ValueMapper) -> bool {
        let next = derive_internal(Some(&[lo, hi]), mapper);
        self.publish_external(next)
    }

    /// Stores `next` and notifies the host, unless it equals the current pair.
    pub fn publish_external(&mut self, next: PairValue) -> bool {
        if next == self.value {
            trace!(lo = next.lo, hi = next.hi, "pair unchanged, skipping publish");
            return false;
        }
        self.value = next;
        self.external = Some(next.to_array().to_vec());
        self.on_change.call(next.to_array());
        true
    }

    /// Takes a new value from the host and re-derives the pair without
    /// publishing it back.
    pub fn sync_external(&mut self, external: Option<&[f32]>, mapper: &impl ValueMapper) {
        self.external = external.map(<[f32]>::to_vec);
        self.value = derive_internal(external, mapper);
    }

    /// Re-derives the pair from the last known host value, e.g. after the
    /// bounds changed.
    pub fn rederive(&mut self, mapper: &impl ValueMapper) {
        self.value = derive_internal(self.external.as_deref(), mapper);
    }

    /// Replaces the change callback.
    pub fn set_on_change(&mut self, on_change: CallbackWith<[f32; 2]>) {
        self.on_change = on_change;
    }
}
