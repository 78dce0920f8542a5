// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for a layered image-composition editor.
//!
//! `strata_core` models named integer-pixel elements stacked into an ordered
//! sequence of positioned layers that can be reordered and flattened into a
//! single bitmap. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Editor::new_rectangle / new_image ──► Registry (name → Element)
//!                                              │
//!   Editor::add_layer ──► LayerStack::append_top
//!   Editor::move_below ──► LayerStack::swap_with_below
//!                                              │
//!   Editor::render ──► composite::render ──► Element "render"
//! ```
//!
//! **[`grid`]**: [`PixelGrid`](grid::PixelGrid) with fixed [`Dims`](grid::Dims)
//! and the clipped blit behind every overlay.
//!
//! **[`element`]**: the two element kinds, solid rectangles and pixel maps,
//! behind one [`Element`](element::Element) enum.
//!
//! **[`image`]**: parsing of the whitespace-separated text image format.
//!
//! **[`layer`]**: struct-of-arrays layer stack with generational handles
//! and `below`/`above` neighbor links.
//!
//! **[`composite`]**: `overlay` and painter's-algorithm `render`.
//!
//! **[`registry`]** and **[`editor`]**: name-keyed element storage and the
//! editing session that ties everything together.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) hooks for render
//! instrumentation, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//! Editing operations log through the `log` facade.
//!
//! # Example
//!
//! ```
//! use strata_core::{Dims, Editor, Position};
//!
//! let mut editor = Editor::new();
//! editor.new_rectangle("r1", Dims::new(3, 5), 9)?;
//! editor.new_image_from_str("im1", "1 2 3\n4 5 6\n")?;
//!
//! let bottom = editor.add_layer("r1", Position::new(0, 0))?;
//! let top = editor.add_layer("im1", Position::new(1, 1))?;
//! assert_eq!(editor.layers().below(top), Some(bottom));
//!
//! let out = editor.render(top, Dims::new(3, 5))?;
//! assert_eq!(out.bitmap()[1], [9, 1, 2, 3, 9]);
//! # Ok::<(), strata_core::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): file loading via
//!   `Editor::new_image_from_path` and `std::io::Error` conversion.
//! - `trace` (disabled by default): enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod composite;
pub mod editor;
pub mod element;
pub mod grid;
pub mod image;
pub mod layer;
pub mod registry;
pub mod trace;

mod error;

pub use editor::Editor;
pub use error::Error;
pub use grid::{Dims, Pixel, Position};
