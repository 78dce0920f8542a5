// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::trace::{LayerCompositedEvent, RenderBeginEvent, RenderEndEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    renders: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("renders", &self.renders)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, renders: 0 }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_render_begin(&mut self, e: &RenderBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[render:begin] #{} top={:?} dims={}x{} layers={} background={}",
            self.renders,
            e.top,
            e.dims.rows,
            e.dims.columns,
            e.layer_count,
            e.background,
        );
    }

    fn on_layer_composited(&mut self, e: &LayerCompositedEvent) {
        let _ = writeln!(
            self.writer,
            "[layer] depth={} {:?} element={:?} at ({}, {})",
            e.depth, e.layer, e.element, e.position.row, e.position.column,
        );
    }

    fn on_render_end(&mut self, e: &RenderEndEvent) {
        let _ = writeln!(
            self.writer,
            "[render:end] #{} top={:?} layers={}",
            self.renders, e.top, e.layer_count,
        );
        self.renders += 1;
    }
}
