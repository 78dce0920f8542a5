// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small three-layer scene, reorders it, and prints the results.
//!
//! Render events go to a
//! [`RecorderSink`](strata_debug::recorder::RecorderSink), are replayed
//! through a [`PrettyPrintSink`](strata_debug::pretty::PrettyPrintSink) on
//! stderr, and are exported as `render_trace.json`. Set `RUST_LOG=debug` to
//! see editing operations as they happen.

use std::fs::File;
use std::io::BufWriter;

use strata_core::layer::LayerId;
use strata_core::trace::Tracer;
use strata_core::{Dims, Editor, Error, Position};
use strata_debug::bitmap::BitmapFormat;
use strata_debug::pretty::PrettyPrintSink;
use strata_debug::recorder::RecorderSink;

const IMAGE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/img.txt");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let format = BitmapFormat::DEFAULT;

    // -- elements ----------------------------------------------------------
    let mut editor = Editor::new();
    editor.new_rectangle("r1", Dims::new(3, 5), 9)?;
    editor.new_image_from_path("im1", IMAGE_PATH)?;
    for name in ["r1", "im1"] {
        if let Some(element) = editor.element_by_name(name) {
            println!("{name} {:?}:\n{}\n", element.dims(), format.format(element));
        }
    }
    if let Err(err) = editor.new_rectangle("im1", Dims::new(3, 5), 9) {
        println!("rejected: {err}\n");
    }

    // -- layers ------------------------------------------------------------
    let l1 = editor.add_layer("im1", Position::new(0, 0))?;
    let l2 = editor.add_layer("r1", Position::new(2, 3))?;
    let l3 = editor.add_layer("r1", Position::new(0, -1))?;
    log::info!("scene has {} layers", editor.layers().len());
    print_stack(&editor, "initial");

    let mut recorder = RecorderSink::new();
    render(&editor, l3, Dims::new(6, 7), &mut recorder, format)?;
    render(&editor, l2, Dims::new(4, 5), &mut recorder, format)?;

    for _ in 0..3 {
        match editor.move_below(l3) {
            Ok(()) | Err(Error::AlreadyAtBottom(_)) => {}
            Err(err) => return Err(err.into()),
        }
    }
    editor.move_below(l2)?;
    print_stack(&editor, "reordered");
    render(&editor, l1, Dims::new(6, 7), &mut recorder, format)?;

    // -- overlay -----------------------------------------------------------
    editor.new_rectangle("r_test", Dims::new(4, 5), 111)?;
    editor.overlay("r_test", "im1", Position::new(-2, -3))?;
    if let Some(element) = editor.element_by_name("r_test") {
        println!("r_test after overlay:\n{}\n", format.format(element));
    }

    // -- diagnostics -------------------------------------------------------
    recorder.replay(&mut PrettyPrintSink::stderr());
    let path = "render_trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    strata_debug::json::export_trace(recorder.events(), &mut writer)?;
    println!("Wrote {path} ({} events)", recorder.events().len());
    Ok(())
}

fn render(
    editor: &Editor,
    top: LayerId,
    dims: Dims,
    recorder: &mut RecorderSink,
    format: BitmapFormat,
) -> Result<(), Error> {
    let output = editor.render_with(top, dims, &mut Tracer::new(recorder))?;
    println!("render from {top:?} {dims:?}:\n{}\n", format.format(&output));
    Ok(())
}

fn print_stack(editor: &Editor, label: &str) {
    let names: Vec<_> = editor
        .layers()
        .iter()
        .map(|layer| format!("{layer:?}={}", editor.layer_element(layer).name()))
        .collect();
    println!("{label} stack (bottom to top): {}\n", names.join(", "));
}
