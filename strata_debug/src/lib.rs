// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for strata diagnostics.
//!
//! This crate provides [`TraceSink`](strata_core::trace::TraceSink)
//! implementations and output helpers for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: keeps render events in memory for replay
//!   and export.
//! - [`bitmap::BitmapFormat`]: fixed-width text rendering of an element's
//!   pixels.
//! - [`json`]: JSON export of elements and recorded traces.

pub mod bitmap;
pub mod json;
pub mod pretty;
pub mod recorder;
