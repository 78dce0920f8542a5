// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay and render: flattening a layer stack into one bitmap.
//!
//! [`render`] follows the painter's algorithm. Starting from a layer it
//! collects that layer and everything below it, then overlays them onto a
//! fresh background from the bottom up, so a higher layer's pixels replace a
//! lower layer's wherever both cover the same cell. Layers above the
//! starting layer do not take part.
//!
//! Rendering never writes to a source element; only the returned output is
//! new.

use alloc::vec::Vec;

use crate::element::Element;
use crate::error::Error;
use crate::grid::{Dims, Pixel, Position};
use crate::layer::{LayerId, LayerStack};
use crate::registry::Registry;
use crate::trace::{LayerCompositedEvent, RenderBeginEvent, RenderEndEvent, Tracer};

/// Name given to every rendered element.
pub const RENDER_NAME: &str = "render";

/// Configuration for [`render_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Value of every output cell no layer covers.
    pub background: Pixel,
}

impl RenderConfig {
    /// Zero background.
    pub const DEFAULT: Self = Self { background: 0 };

    /// Returns a configuration with the given background value.
    #[must_use]
    pub const fn with_background(background: Pixel) -> Self {
        Self { background }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Copies `src` onto `dst` with its top-left corner at `offset`, clipping to
/// `dst`'s bounds.
///
/// Same as [`Element::overlay`]; provided for single-pair compositing.
pub fn overlay(dst: &mut Element, src: &Element, offset: Position) {
    dst.overlay(src, offset);
}

/// Renders `top` and every layer below it into a new `dims`-sized element
/// with a zero background.
///
/// Fails with [`Error::LayerNotFound`] if `top` is not in `layers`.
pub fn render(
    layers: &LayerStack,
    elements: &Registry,
    top: LayerId,
    dims: Dims,
) -> Result<Element, Error> {
    render_with(
        layers,
        elements,
        top,
        dims,
        &RenderConfig::DEFAULT,
        &mut Tracer::none(),
    )
}

/// Like [`render`], with an explicit configuration and a tracer that
/// receives one event per composited layer.
pub fn render_with(
    layers: &LayerStack,
    elements: &Registry,
    top: LayerId,
    dims: Dims,
    config: &RenderConfig,
    tracer: &mut Tracer<'_>,
) -> Result<Element, Error> {
    layers.index_of(top)?;

    // Collected top-down, painted bottom-up.
    let stack: Vec<LayerId> = layers.descend(top).collect();
    let layer_count = stack.len();

    log::debug!("rendering {layer_count} layers from {top:?} into {dims:?}");
    tracer.render_begin(&RenderBeginEvent {
        top,
        dims,
        background: config.background,
        layer_count,
    });

    let mut output = Element::solid(RENDER_NAME, dims, config.background);
    for (depth, &layer) in stack.iter().rev().enumerate() {
        let element = layers.element(layer);
        let position = layers.position(layer);
        output.overlay(elements.get(element), position);
        tracer.layer_composited(&LayerCompositedEvent {
            layer,
            element,
            position,
            depth,
        });
    }

    tracer.render_end(&RenderEndEvent {
        top,
        dims,
        layer_count,
    });
    Ok(output)
}
