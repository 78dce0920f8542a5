// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered layer stack.
//!
//! A *layer* places one element at a signed [`Position`](crate::grid::Position)
//! within a render. Each layer has:
//!
//! - An identity ([`LayerId`]), a generational handle that becomes stale when
//!   the layer is removed.
//! - Its element ([`ElementId`](crate::element::ElementId)). Several layers
//!   may show the same element.
//! - Neighbor links: [`below`](LayerStack::below) and
//!   [`above`](LayerStack::above). Exactly one layer has no layer below it
//!   (the bottom) and exactly one has none above it (the top).
//!
//! New layers always go on top ([`append_top`](LayerStack::append_top)).
//! Reordering is a single step at a time:
//! [`swap_with_below`](LayerStack::swap_with_below) exchanges a layer with its
//! lower neighbor, and reports [`AlreadyAtBottom`](crate::Error::AlreadyAtBottom)
//! for the bottom layer.
//!
//! Layers are stored in struct-of-arrays layout with index-based handles;
//! neighbor links are slot indices rebuilt from the stack order after each
//! change.

mod id;
mod store;
mod traverse;

pub use id::{INVALID, LayerId};
pub use store::LayerStack;
pub use traverse::{Descend, Iter};
