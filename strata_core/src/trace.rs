// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for rendering.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the compositor calls while flattening a stack. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing. When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Editing operations (element creation, layer moves) are reported through
//! the [`log`] facade instead.

use crate::element::ElementId;
use crate::grid::{Dims, Pixel, Position};
use crate::layer::LayerId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted before any layer is composited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderBeginEvent {
    /// The layer the render starts from.
    pub top: LayerId,
    /// Output dimensions.
    pub dims: Dims,
    /// Background value of the fresh output.
    pub background: Pixel,
    /// Number of layers at or below `top`.
    pub layer_count: usize,
}

/// Emitted after one layer has been overlaid onto the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerCompositedEvent {
    /// The layer that was composited.
    pub layer: LayerId,
    /// The element the layer shows.
    pub element: ElementId,
    /// Where the element was placed.
    pub position: Position,
    /// Paint order, 0 for the bottom-most layer.
    pub depth: usize,
}

/// Emitted once the output is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderEndEvent {
    /// The layer the render started from.
    pub top: LayerId,
    /// Output dimensions.
    pub dims: Dims,
    /// Number of layers composited.
    pub layer_count: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the compositor.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called before compositing starts.
    fn on_render_begin(&mut self, e: &RenderBeginEvent) {
        _ = e;
    }

    /// Called after each layer is composited, bottom-most first.
    fn on_layer_composited(&mut self, e: &LayerCompositedEvent) {
        _ = e;
    }

    /// Called when the render is complete.
    fn on_render_end(&mut self, e: &RenderEndEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RenderBeginEvent`].
    #[inline]
    pub fn render_begin(&mut self, e: &RenderBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerCompositedEvent`].
    #[inline]
    pub fn layer_composited(&mut self, e: &LayerCompositedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_composited(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderEndEvent`].
    #[inline]
    pub fn render_end(&mut self, e: &RenderEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}
