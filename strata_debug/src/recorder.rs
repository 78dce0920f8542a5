// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording and playback.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event it sees,
//! in arrival order. [`RecorderSink::replay`] feeds them to another sink, and
//! [`json::export_trace`](crate::json::export_trace) writes them out.

use strata_core::trace::{LayerCompositedEvent, RenderBeginEvent, RenderEndEvent, TraceSink};

/// A recorded render event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`RenderBeginEvent`].
    RenderBegin(RenderBeginEvent),
    /// A [`LayerCompositedEvent`].
    LayerComposited(LayerCompositedEvent),
    /// A [`RenderEndEvent`].
    RenderEnd(RenderEndEvent),
}

impl RecordedEvent {
    /// Returns a short name for the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RenderBegin(_) => "RenderBegin",
            Self::LayerComposited(_) => "LayerComposited",
            Self::RenderEnd(_) => "RenderEnd",
        }
    }
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Dispatches every recorded event to `sink`, in recording order.
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        for event in &self.events {
            match event {
                RecordedEvent::RenderBegin(e) => sink.on_render_begin(e),
                RecordedEvent::LayerComposited(e) => sink.on_layer_composited(e),
                RecordedEvent::RenderEnd(e) => sink.on_render_end(e),
            }
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_render_begin(&mut self, e: &RenderBeginEvent) {
        self.events.push(RecordedEvent::RenderBegin(*e));
    }

    fn on_layer_composited(&mut self, e: &LayerCompositedEvent) {
        self.events.push(RecordedEvent::LayerComposited(*e));
    }

    fn on_render_end(&mut self, e: &RenderEndEvent) {
        self.events.push(RecordedEvent::RenderEnd(*e));
    }
}
