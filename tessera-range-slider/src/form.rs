//! Hidden inputs that carry the pair into native form submission.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::pair::{Handle, PairValue};

static NEXT_UID: AtomicU64 = AtomicU64::new(0);

/// Process-unique fallback id, `input-{n}`.
pub fn generate_id() -> String {
    format!("input-{}", NEXT_UID.fetch_add(1, Ordering::Relaxed))
}

/// A read-only, non-tabbable input mirroring one side of the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FormProxy {
    /// Element id, `{base}_start` or `{base}_stop`.
    pub id: String,
    /// Submitted field name, shared by both proxies.
    pub name: String,
    /// Mirrored value.
    pub value: f32,
    /// Mirrors the control's disabled flag.
    pub disabled: bool,
    /// Mirrors the control's readonly flag.
    pub readonly: bool,
    /// Always `-1`; the proxies never take focus.
    pub tab_index: i32,
}

impl FormProxy {
    /// Builds the proxy for `handle`.
    pub fn new(
        handle: Handle,
        base_id: &str,
        name: &str,
        pair: PairValue,
        disabled: bool,
        readonly: bool,
    ) -> Self {
        Self {
            id: format!("{base_id}{}", suffix(handle)),
            name: name.to_owned(),
            value: pair.get(handle),
            disabled,
            readonly,
            tab_index: -1,
        }
    }
}

fn suffix(handle: Handle) -> &'static str {
    match handle {
        Handle::Start => "_start",
        Handle::Stop => "_stop",
    }
}
