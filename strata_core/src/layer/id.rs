// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer handles.

use core::fmt;

/// Marks an empty `below`/`above` link or a slot that is not in the stack.
pub const INVALID: u32 = u32::MAX;

/// Names one placement of an element in a [`LayerStack`](super::LayerStack).
///
/// Removing a layer frees its slot for the next append and advances the
/// slot's generation, so a handle kept from before the removal no longer
/// matches and is reported as stale instead of aliasing the new layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl LayerId {
    /// Slot the layer occupies. Slots are reused, so this alone does not
    /// identify a layer.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// How many layers occupied this slot before this one.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({}@gen{})", self.idx, self.generation)
    }
}
