// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The error type shared by the registry, the layer stack, and the editor.

use alloc::string::String;

use crate::image::ImageError;
use crate::layer::LayerId;

/// Errors reported by editor operations.
///
/// Every variant is recoverable. Operations that fail leave the editor
/// exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element with this name is already registered.
    #[error("an element named `{0}` already exists")]
    DuplicateName(String),

    /// No element with this name is registered.
    #[error("no element named `{0}`")]
    UnknownElement(String),

    /// An image source could not be parsed into a rectangular grid.
    #[error("malformed image: {0}")]
    MalformedImage(#[from] ImageError),

    /// The layer handle does not refer to a live layer of this stack.
    #[error("layer {0:?} is not in the stack")]
    LayerNotFound(LayerId),

    /// The layer is already the bottom-most layer and cannot move down.
    #[error("layer {0:?} is already at the bottom")]
    AlreadyAtBottom(LayerId),

    /// Reading an image file failed.
    #[cfg(feature = "std")]
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}
