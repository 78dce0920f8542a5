// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session: element registry plus layer stack.

use alloc::vec::Vec;

use crate::composite::{self, RenderConfig};
use crate::element::{Element, ElementId};
use crate::error::Error;
use crate::grid::{Dims, Pixel, Position};
use crate::image;
use crate::layer::{LayerId, LayerStack};
use crate::registry::Registry;
use crate::trace::Tracer;

/// An editing session.
///
/// Owns the named elements and the ordered layer stack built on top of them.
/// Every fallible operation either succeeds completely or leaves the session
/// unchanged.
#[derive(Debug, Default)]
pub struct Editor {
    elements: Registry,
    layers: LayerStack,
    config: RenderConfig,
}

impl Editor {
    /// Creates an empty session with the default render configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session that renders with `config`.
    #[must_use]
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the render configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    // -- Elements --

    /// Creates a solid rectangle named `name`.
    pub fn new_rectangle(&mut self, name: &str, dims: Dims, fill: Pixel) -> Result<ElementId, Error> {
        let id = self.elements.insert(Element::solid(name, dims, fill))?;
        log::debug!("created rectangle `{name}` {dims:?} fill {fill} as {id:?}");
        Ok(id)
    }

    /// Creates a pixel map named `name` from already parsed rows.
    ///
    /// The name is checked before the rows, so a duplicate name is reported
    /// even when the rows are malformed.
    pub fn new_image(&mut self, name: &str, rows: &[Vec<Pixel>]) -> Result<ElementId, Error> {
        self.elements.ensure_vacant(name)?;
        let element = Element::from_rows(name, rows)?;
        self.register_image(element)
    }

    /// Creates a pixel map named `name` by parsing an image source.
    pub fn new_image_from_str(&mut self, name: &str, source: &str) -> Result<ElementId, Error> {
        self.elements.ensure_vacant(name)?;
        let element = Element::from_grid(name, image::parse_grid(source)?);
        self.register_image(element)
    }

    /// Creates a pixel map named `name` by reading and parsing the file at
    /// `path`.
    #[cfg(feature = "std")]
    pub fn new_image_from_path(
        &mut self,
        name: &str,
        path: impl AsRef<std::path::Path>,
    ) -> Result<ElementId, Error> {
        self.elements.ensure_vacant(name)?;
        let source = std::fs::read_to_string(path)?;
        let element = Element::from_grid(name, image::parse_grid(&source)?);
        self.register_image(element)
    }

    fn register_image(&mut self, element: Element) -> Result<ElementId, Error> {
        let dims = element.dims();
        let id = self.elements.insert(element)?;
        log::debug!("created image {id:?} {dims:?}");
        Ok(id)
    }

    /// Returns the element for a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another editor and is out of range here.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &Element {
        self.elements.get(id)
    }

    /// Returns the element named `name`, if any.
    #[must_use]
    pub fn element_by_name(&self, name: &str) -> Option<&Element> {
        self.elements.by_name(name)
    }

    /// Returns the handle of the element named `name`.
    pub fn id_of(&self, name: &str) -> Result<ElementId, Error> {
        self.elements.id_of(name)
    }

    /// Returns `true` if an element named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains(name)
    }

    /// Returns the element registry.
    #[must_use]
    pub fn elements(&self) -> &Registry {
        &self.elements
    }

    /// Copies the element `src` onto the element `dst` at `offset`.
    ///
    /// `dst` is modified in place, so every layer showing it sees the change.
    pub fn overlay(&mut self, dst: &str, src: &str, offset: Position) -> Result<(), Error> {
        let dst = self.elements.id_of(dst)?;
        let src = self.elements.id_of(src)?;
        if let Some((target, source)) = self.elements.split_mut(dst, src) {
            target.overlay(source, offset);
        } else {
            // Overlaying an element onto itself reads from a snapshot.
            let source = self.elements.get(src).clone();
            self.elements.get_mut(dst).overlay(&source, offset);
        }
        Ok(())
    }

    // -- Layers --

    /// Places the element named `name` on top of the stack at `position`.
    pub fn add_layer(&mut self, name: &str, position: Position) -> Result<LayerId, Error> {
        let element = self.elements.id_of(name)?;
        Ok(self.layers.append_top(element, position))
    }

    /// Moves `layer` one step down, swapping it with its lower neighbor.
    ///
    /// Fails with [`Error::AlreadyAtBottom`] if it is already the bottom-most
    /// layer; the order is unchanged in that case.
    pub fn move_below(&mut self, layer: LayerId) -> Result<(), Error> {
        self.layers.swap_with_below(layer).inspect_err(|err| {
            log::warn!("move_below rejected: {err}");
        })
    }

    /// Removes `layer` from the stack. The element stays registered.
    pub fn remove_layer(&mut self, layer: LayerId) -> Result<(), Error> {
        self.layers.remove(layer)
    }

    /// Returns the layer stack.
    #[must_use]
    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Returns the element shown by `layer`.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is stale.
    #[must_use]
    pub fn layer_element(&self, layer: LayerId) -> &Element {
        self.elements.get(self.layers.element(layer))
    }

    // -- Rendering --

    /// Renders `layer` and everything below it into a new `dims` element.
    pub fn render(&self, layer: LayerId, dims: Dims) -> Result<Element, Error> {
        self.render_with(layer, dims, &mut Tracer::none())
    }

    /// Like [`render`](Self::render), reporting progress to `tracer`.
    pub fn render_with(
        &self,
        layer: LayerId,
        dims: Dims,
        tracer: &mut Tracer<'_>,
    ) -> Result<Element, Error> {
        composite::render_with(
            &self.layers,
            &self.elements,
            layer,
            dims,
            &self.config,
            tracer,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::image::ImageError;

    const IMAGE: &str = "1 2 3 4 5 6\n1 2 3 4 5 6\n1 2 3 4 5 6\n1 2 3 4 5 6\n1 2 3 4 5 6\n";

    #[test]
    fn duplicate_rectangle_is_rejected_and_first_kept() {
        let mut editor = Editor::new();
        editor.new_rectangle("r1", Dims::new(3, 5), 9).unwrap();
        let err = editor.new_rectangle("r1", Dims::new(1, 1), 0).unwrap_err();
        assert!(matches!(err, Error::DuplicateName(ref n) if n == "r1"));
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(
            editor.element_by_name("r1").unwrap().bitmap(),
            vec![vec![9; 5]; 3]
        );
    }

    #[test]
    fn duplicate_wins_over_malformed_image() {
        let mut editor = Editor::new();
        editor.new_image_from_str("im1", IMAGE).unwrap();
        assert!(matches!(
            editor.new_image_from_str("im1", "1 2\n3\n"),
            Err(Error::DuplicateName(_))
        ));
        assert!(matches!(
            editor.new_rectangle("im1", Dims::new(3, 5), 9),
            Err(Error::DuplicateName(_))
        ));
    }

    #[test]
    fn malformed_image_registers_nothing() {
        let mut editor = Editor::new();
        let err = editor.new_image_from_str("bad", "1 2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedImage(ImageError::RaggedRow { line: 2, .. })
        ));
        assert!(!editor.contains("bad"));
        assert!(matches!(
            editor.new_image("empty", &[]),
            Err(Error::MalformedImage(ImageError::Empty))
        ));
        assert!(editor.elements().is_empty());
    }

    #[test]
    fn interior_blank_line_registers_nothing() {
        let mut editor = Editor::new();
        let err = editor
            .new_image_from_str("gap", "1 2\n\n3 4\n")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedImage(ImageError::RaggedRow {
                line: 2,
                expected: 2,
                found: 0
            })
        ));
        assert!(!editor.contains("gap"));
        assert!(editor.elements().is_empty());

        editor.new_image_from_str("gap", "1 2\n3 4\n\n").unwrap();
        assert_eq!(
            editor.element_by_name("gap").unwrap().bitmap(),
            vec![vec![1, 2], vec![3, 4]]
        );
    }

    #[test]
    fn overlay_between_distinct_elements_leaves_source_alone() {
        let mut editor = Editor::new();
        editor.new_rectangle("a", Dims::new(2, 3), 0).unwrap();
        editor.new_image("b", &[vec![5, 6]]).unwrap();
        editor.overlay("a", "b", Position::new(1, 2)).unwrap();
        assert_eq!(
            editor.element_by_name("a").unwrap().bitmap(),
            vec![vec![0, 0, 0], vec![0, 0, 5]]
        );
        assert_eq!(
            editor.element_by_name("b").unwrap().bitmap(),
            vec![vec![5, 6]]
        );

        editor.overlay("b", "a", Position::new(-1, -1)).unwrap();
        assert_eq!(
            editor.element_by_name("b").unwrap().bitmap(),
            vec![vec![0, 5]]
        );
        assert_eq!(
            editor.element_by_name("a").unwrap().bitmap(),
            vec![vec![0, 0, 0], vec![0, 0, 5]]
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn element_panics_on_foreign_handle() {
        let mut other = Editor::new();
        other.new_rectangle("a", Dims::new(1, 1), 0).unwrap();
        let foreign = other.new_rectangle("b", Dims::new(1, 1), 0).unwrap();
        let _ = Editor::new().element(foreign);
    }

    #[test]
    fn add_layer_requires_known_element() {
        let mut editor = Editor::new();
        editor.new_rectangle("rect1", Dims::new(5, 7), 44).unwrap();
        editor.add_layer("rect1", Position::new(1, 2)).unwrap();
        let err = editor.add_layer("rect2", Position::new(-1, -1)).unwrap_err();
        assert!(matches!(err, Error::UnknownElement(ref n) if n == "rect2"));
        assert_eq!(editor.layers().len(), 1);
    }

    #[test]
    fn layers_report_element_and_position() {
        let mut editor = Editor::new();
        editor.new_rectangle("rect1", Dims::new(5, 7), 44).unwrap();
        editor.new_image_from_str("img1", IMAGE).unwrap();
        let l1 = editor.add_layer("img1", Position::new(-4, 7)).unwrap();
        let l2 = editor.add_layer("rect1", Position::new(3, 2)).unwrap();
        assert_eq!(editor.layer_element(l1).name(), "img1");
        assert_eq!(editor.layer_element(l2).name(), "rect1");
        assert_eq!(editor.layers().position(l1), Position::new(-4, 7));
        assert_eq!(editor.layers().position(l2), Position::new(3, 2));
    }

    #[test]
    fn move_below_at_bottom_is_reported() {
        let mut editor = Editor::new();
        editor.new_rectangle("r", Dims::new(1, 1), 1).unwrap();
        let a = editor.add_layer("r", Position::ORIGIN).unwrap();
        let b = editor.add_layer("r", Position::ORIGIN).unwrap();
        assert!(matches!(editor.move_below(a), Err(Error::AlreadyAtBottom(id)) if id == a));
        assert_eq!(editor.layers().iter().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn overlay_by_name_is_visible_through_layers() {
        let mut editor = Editor::new();
        editor.new_rectangle("canvas", Dims::new(2, 2), 0).unwrap();
        editor.new_rectangle("dot", Dims::new(1, 1), 7).unwrap();
        let layer = editor.add_layer("canvas", Position::ORIGIN).unwrap();
        editor.overlay("canvas", "dot", Position::new(1, 1)).unwrap();
        assert_eq!(
            editor.render(layer, Dims::new(2, 2)).unwrap().bitmap(),
            vec![vec![0, 0], vec![0, 7]]
        );
        assert_eq!(editor.element_by_name("dot").unwrap().get(0, 0), Some(7));
    }

    #[test]
    fn overlay_onto_itself_uses_a_snapshot() {
        let mut editor = Editor::new();
        editor
            .new_image("img", &[vec![1, 2, 3], vec![4, 5, 6]])
            .unwrap();
        editor.overlay("img", "img", Position::new(0, 1)).unwrap();
        assert_eq!(
            editor.element_by_name("img").unwrap().bitmap(),
            vec![vec![1, 1, 2], vec![4, 4, 5]]
        );
        assert!(matches!(
            editor.overlay("img", "missing", Position::ORIGIN),
            Err(Error::UnknownElement(_))
        ));
    }

    #[test]
    fn configured_background_is_used() {
        let mut editor = Editor::with_config(RenderConfig::with_background(5));
        editor.new_rectangle("r", Dims::new(1, 1), 1).unwrap();
        let layer = editor.add_layer("r", Position::new(1, 1)).unwrap();
        assert_eq!(
            editor.render(layer, Dims::new(2, 2)).unwrap().bitmap(),
            vec![vec![5, 5], vec![5, 1]]
        );
    }

    #[test]
    fn removed_layer_leaves_element_registered() {
        let mut editor = Editor::new();
        editor.new_rectangle("r", Dims::new(1, 1), 1).unwrap();
        let layer = editor.add_layer("r", Position::ORIGIN).unwrap();
        editor.remove_layer(layer).unwrap();
        assert!(editor.layers().is_empty());
        assert!(editor.contains("r"));
        assert!(matches!(
            editor.render(layer, Dims::new(1, 1)),
            Err(Error::LayerNotFound(_))
        ));
    }
}
