// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export.
//!
//! [`element_to_value`] describes an element as
//! `{"name", "rows", "columns", "pixels": [[...]]}`. [`export_trace`] writes
//! events from a [`RecorderSink`](crate::recorder::RecorderSink) as a JSON
//! array with one object per event.

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::element::Element;

use crate::recorder::RecordedEvent;

/// Returns the JSON description of `element`.
#[must_use]
pub fn element_to_value(element: &Element) -> Value {
    let dims = element.dims();
    json!({
        "name": element.name(),
        "rows": dims.rows,
        "columns": dims.columns,
        "pixels": element.bitmap(),
    })
}

/// Writes the JSON description of `element`.
pub fn export_element(element: &Element, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &element_to_value(element))?;
    Ok(())
}

/// Returns the JSON object for one recorded event.
#[must_use]
pub fn event_to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::RenderBegin(e) => json!({
            "event": event.name(),
            "top": e.top.index(),
            "rows": e.dims.rows,
            "columns": e.dims.columns,
            "background": e.background,
            "layer_count": e.layer_count,
        }),
        RecordedEvent::LayerComposited(e) => json!({
            "event": event.name(),
            "layer": e.layer.index(),
            "generation": e.layer.generation(),
            "element": e.element.index(),
            "row": e.position.row,
            "column": e.position.column,
            "depth": e.depth,
        }),
        RecordedEvent::RenderEnd(e) => json!({
            "event": event.name(),
            "top": e.top.index(),
            "rows": e.dims.rows,
            "columns": e.dims.columns,
            "layer_count": e.layer_count,
        }),
    }
}

/// Writes recorded events as a JSON array.
pub fn export_trace(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = events.iter().map(event_to_value).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}
