// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel grids and the coordinate types used to size and place them.
//!
//! A [`PixelGrid`] is a fixed-size, row-major buffer of integer [`Pixel`]s.
//! Its [`Dims`] are set at construction and never change; only cell values
//! are mutated, and only through [`PixelGrid::overlay`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

/// A single pixel value.
pub type Pixel = i32;

/// Grid dimensions as `(rows, columns)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dims {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
}

impl Dims {
    /// Creates a new `Dims`.
    #[inline]
    #[must_use]
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Returns the number of cells covered by these dimensions.
    #[inline]
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl fmt::Debug for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dims({}x{})", self.rows, self.columns)
    }
}

/// A signed `(row, column)` offset.
///
/// Used both as a layer's placement within a render and as the offset of a
/// single overlay. Negative values shift the source up or to the left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row offset.
    pub row: i32,
    /// Column offset.
    pub column: i32,
}

impl Position {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new `Position`.
    #[inline]
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.column)
    }
}

/// A row-major grid of pixels with fixed dimensions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    dims: Dims,
    cells: Vec<Pixel>,
}

impl PixelGrid {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(dims: Dims, value: Pixel) -> Self {
        Self {
            dims,
            cells: vec![value; dims.area()],
        }
    }

    /// Creates a grid from row-major cells.
    ///
    /// The caller guarantees `cells.len() == dims.area()`.
    pub(crate) fn from_cells(dims: Dims, cells: Vec<Pixel>) -> Self {
        debug_assert_eq!(cells.len(), dims.area(), "cell count must match dims");
        Self { dims, cells }
    }

    /// Returns the grid dimensions.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the value at `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: u32, column: u32) -> Option<Pixel> {
        if row < self.dims.rows && column < self.dims.columns {
            Some(self.cells[self.cell_index(row, column)])
        } else {
            None
        }
    }

    /// Returns one row as a slice of length `dims().columns`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= dims().rows`.
    #[must_use]
    pub fn row(&self, row: u32) -> &[Pixel] {
        assert!(
            row < self.dims.rows,
            "row {row} out of range (rows {})",
            self.dims.rows
        );
        let start = self.cell_index(row, 0);
        &self.cells[start..start + self.dims.columns as usize]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        (0..self.dims.rows).map(|r| self.row(r))
    }

    /// Returns all cells in row-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Pixel] {
        &self.cells
    }

    /// Copies the grid into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Copies `src` into this grid with its top-left corner at `offset`.
    ///
    /// Source cells that land outside this grid are skipped; clipping is not
    /// an error. Only cells inside `[0, rows) × [0, columns)` are written.
    pub fn overlay(&mut self, src: &Self, offset: Position) {
        let Some(rows) = clip_span(offset.row, src.dims.rows, self.dims.rows) else {
            return;
        };
        let Some(cols) = clip_span(offset.column, src.dims.columns, self.dims.columns) else {
            return;
        };

        let width = cols.dst.len();
        for (src_row, dst_row) in rows.src.zip(rows.dst) {
            let s = src.cell_index(src_row, cols.src.start);
            let d = self.cell_index(dst_row, cols.dst.start);
            self.cells[d..d + width].copy_from_slice(&src.cells[s..s + width]);
        }
    }

    #[inline]
    fn cell_index(&self, row: u32, column: u32) -> usize {
        row as usize * self.dims.columns as usize + column as usize
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelGrid")
            .field("dims", &self.dims)
            .field("rows", &self.to_rows())
            .finish()
    }
}

/// Matching source and destination index ranges along one axis.
#[derive(Debug)]
struct Span {
    src: Range<u32>,
    dst: Range<u32>,
}

/// Intersects a source run of `src_len` cells placed at `offset` with the
/// destination run `[0, dst_len)`.
///
/// Returns `None` when nothing overlaps.
fn clip_span(offset: i32, src_len: u32, dst_len: u32) -> Option<Span> {
    let offset = i64::from(offset);
    let start = offset.max(0);
    let end = (offset + i64::from(src_len)).min(i64::from(dst_len));
    if start >= end {
        return None;
    }
    // Both bounds lie within `[0, dst_len]`, and `start - offset` within
    // `[0, src_len]`, so the narrowing casts are lossless.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "bounds clamped to u32 ranges above"
    )]
    let span = Span {
        src: (start - offset) as u32..(end - offset) as u32,
        dst: start as u32..end as u32,
    };
    Some(span)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn ramp(dims: Dims) -> PixelGrid {
        let cells = (0..dims.area())
            .map(|i| Pixel::try_from(i).unwrap())
            .collect();
        PixelGrid::from_cells(dims, cells)
    }

    #[test]
    fn filled_grid_has_uniform_rows() {
        let grid = PixelGrid::filled(Dims::new(3, 5), 9);
        assert_eq!(grid.rows().len(), 3);
        for row in grid.rows() {
            assert_eq!(row, &[9, 9, 9, 9, 9]);
        }
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = ramp(Dims::new(2, 3));
        assert_eq!(grid.get(1, 2), Some(5));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn overlay_inside_bounds() {
        let mut dst = PixelGrid::filled(Dims::new(3, 3), 0);
        let src = PixelGrid::filled(Dims::new(2, 2), 7);
        dst.overlay(&src, Position::new(1, 1));
        assert_eq!(dst.to_rows(), vec![vec![0, 0, 0], vec![0, 7, 7], vec![0, 7, 7]]);
    }

    #[test]
    fn overlay_clips_negative_offset() {
        let mut dst = PixelGrid::filled(Dims::new(2, 2), 0);
        let src = ramp(Dims::new(3, 3));
        dst.overlay(&src, Position::new(-1, -1));
        assert_eq!(dst.to_rows(), vec![vec![4, 5], vec![7, 8]]);
    }

    #[test]
    fn overlay_clips_past_far_edge() {
        let mut dst = PixelGrid::filled(Dims::new(2, 3), 0);
        let src = PixelGrid::filled(Dims::new(4, 4), 1);
        dst.overlay(&src, Position::new(1, 2));
        assert_eq!(dst.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn overlay_fully_outside_is_noop() {
        let mut dst = PixelGrid::filled(Dims::new(2, 2), 3);
        let before = dst.clone();
        let src = PixelGrid::filled(Dims::new(2, 2), 1);
        dst.overlay(&src, Position::new(2, 0));
        dst.overlay(&src, Position::new(0, -2));
        dst.overlay(&src, Position::new(i32::MAX, i32::MIN));
        assert_eq!(dst, before);
    }

    #[test]
    fn overlay_empty_grids_is_noop() {
        let mut dst = PixelGrid::filled(Dims::new(0, 4), 0);
        let src = PixelGrid::filled(Dims::new(2, 2), 1);
        dst.overlay(&src, Position::ORIGIN);
        assert!(dst.as_slice().is_empty());

        let mut dst = PixelGrid::filled(Dims::new(2, 2), 5);
        dst.overlay(&PixelGrid::filled(Dims::new(3, 0), 1), Position::ORIGIN);
        assert_eq!(dst.as_slice(), &[5, 5, 5, 5]);
    }

    #[test]
    fn clip_span_reports_matching_ranges() {
        let span = clip_span(-2, 5, 4).unwrap();
        assert_eq!(span.src, 2..5);
        assert_eq!(span.dst, 0..3);
        assert!(clip_span(4, 2, 4).is_none());
        assert!(clip_span(-3, 3, 4).is_none());
    }

    #[test]
    #[should_panic(expected = "row 2 out of range")]
    fn row_out_of_range_panics() {
        let grid = PixelGrid::filled(Dims::new(2, 2), 0);
        let _ = grid.row(2);
    }
}
