// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named graphical elements.
//!
//! An *element* is a named pixel grid with fixed dimensions. Two kinds
//! exist:
//!
//! - [`SolidElement`]: every cell starts at one fill value.
//! - [`PixelMapElement`]: cells come from an image source.
//!
//! Both expose the same capabilities through [`Element`]: a name, fixed
//! [`Dims`], read access to the grid, and [`overlay`](Element::overlay).
//! Overlay is the only way an element's cells change after construction.

mod id;

use alloc::string::String;
use alloc::vec::Vec;

use crate::grid::{Dims, Pixel, PixelGrid, Position};
use crate::image::{self, ImageError};

pub use id::ElementId;

/// A rectangle filled with a single value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidElement {
    name: String,
    fill: Pixel,
    grid: PixelGrid,
}

impl SolidElement {
    /// Returns the value the rectangle was filled with at construction.
    #[inline]
    #[must_use]
    pub const fn fill(&self) -> Pixel {
        self.fill
    }
}

/// A grid of arbitrary pixels, typically loaded from an image source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMapElement {
    name: String,
    grid: PixelGrid,
}

/// A named graphical element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// A solid-color rectangle.
    Solid(SolidElement),
    /// A pixel map.
    PixelMap(PixelMapElement),
}

impl Element {
    /// Creates a solid rectangle of `dims` with every cell set to `fill`.
    ///
    /// Zero-sized dimensions are allowed; such an element has no cells.
    #[must_use]
    pub fn solid(name: impl Into<String>, dims: Dims, fill: Pixel) -> Self {
        Self::Solid(SolidElement {
            name: name.into(),
            fill,
            grid: PixelGrid::filled(dims, fill),
        })
    }

    /// Creates a pixel map from externally parsed rows.
    ///
    /// Fails if `rows` is empty or the rows differ in length.
    pub fn from_rows(name: impl Into<String>, rows: &[Vec<Pixel>]) -> Result<Self, ImageError> {
        Ok(Self::from_grid(name, image::grid_from_rows(rows)?))
    }

    /// Wraps an existing grid as a pixel map.
    #[must_use]
    pub fn from_grid(name: impl Into<String>, grid: PixelGrid) -> Self {
        Self::PixelMap(PixelMapElement {
            name: name.into(),
            grid,
        })
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Solid(e) => &e.name,
            Self::PixelMap(e) => &e.name,
        }
    }

    /// Returns the element dimensions.
    #[must_use]
    pub fn dims(&self) -> Dims {
        self.pixels().dims()
    }

    /// Returns the element's pixel grid.
    #[must_use]
    pub fn pixels(&self) -> &PixelGrid {
        match self {
            Self::Solid(e) => &e.grid,
            Self::PixelMap(e) => &e.grid,
        }
    }

    /// Returns a copy of the pixels as nested rows.
    #[must_use]
    pub fn bitmap(&self) -> Vec<Vec<Pixel>> {
        self.pixels().to_rows()
    }

    /// Returns the pixel at `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: u32, column: u32) -> Option<Pixel> {
        self.pixels().get(row, column)
    }

    /// Copies `other` onto this element with its top-left corner at
    /// `offset`.
    ///
    /// Cells of `other` that fall outside this element are skipped.
    pub fn overlay(&mut self, other: &Self, offset: Position) {
        self.pixels_mut().overlay(other.pixels(), offset);
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut PixelGrid {
        match self {
            Self::Solid(e) => &mut e.grid,
            Self::PixelMap(e) => &mut e.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn image_5x6() -> Element {
        let rows: Vec<Vec<Pixel>> = (0..5).map(|_| (1..=6).collect()).collect();
        Element::from_rows("img", &rows).unwrap()
    }

    #[test]
    fn solid_element_reports_name_dims_and_fill() {
        let rect = Element::solid("r1", Dims::new(3, 5), 9);
        assert_eq!(rect.name(), "r1");
        assert_eq!(rect.dims(), Dims::new(3, 5));
        assert_eq!(rect.bitmap(), vec![vec![9; 5]; 3]);
        match rect {
            Element::Solid(s) => assert_eq!(s.fill(), 9),
            Element::PixelMap(_) => panic!("expected a solid element"),
        }
    }

    #[test]
    fn pixel_map_keeps_rows_verbatim() {
        let img = image_5x6();
        assert_eq!(img.dims(), Dims::new(5, 6));
        for row in img.pixels().rows() {
            assert_eq!(row, &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        assert!(Element::from_rows("e", &[vec![1, 2], vec![3]]).is_err());
        assert_eq!(Element::from_rows("e", &[]), Err(ImageError::Empty));
    }

    #[test]
    fn overlay_with_negative_offset_covers_top_left_only() {
        let mut rect = Element::solid("r", Dims::new(4, 5), 111);
        let img = image_5x6();
        rect.overlay(&img, Position::new(-2, -3));
        assert_eq!(
            rect.bitmap(),
            vec![
                vec![4, 5, 6, 111, 111],
                vec![4, 5, 6, 111, 111],
                vec![4, 5, 6, 111, 111],
                vec![111, 111, 111, 111, 111],
            ]
        );
        // The source is left untouched.
        assert_eq!(img, image_5x6());
    }

    #[test]
    fn overlay_does_not_change_dims() {
        let mut small = Element::solid("s", Dims::new(2, 2), 0);
        small.overlay(&image_5x6(), Position::ORIGIN);
        assert_eq!(small.dims(), Dims::new(2, 2));
        assert_eq!(small.bitmap(), vec![vec![1, 2], vec![1, 2]]);
    }

    #[test]
    fn empty_solid_is_representable() {
        let empty = Element::solid("e", Dims::new(0, 3), 4);
        assert!(empty.dims().is_empty());
        assert!(empty.bitmap().is_empty());
    }
}
