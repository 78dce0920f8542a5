// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-width text rendering of element pixels.
//!
//! Each cell is right-aligned to [`BitmapFormat::cell_width`] characters and
//! cells are separated by a single space, one grid row per line:
//!
//! ```text
//!   9   9   9   9   5   6   0
//!   1   2   3   9   9   9   9
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use strata_core::element::Element;
use strata_core::grid::PixelGrid;

/// Text layout for bitmap output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFormat {
    /// Minimum width of one cell. Wider values are not truncated.
    pub cell_width: usize,
}

impl BitmapFormat {
    /// Three-character cells.
    pub const DEFAULT: Self = Self { cell_width: 3 };

    /// Formats `element`'s pixels, rows joined by `\n`, with no trailing
    /// newline.
    #[must_use]
    pub fn format(&self, element: &Element) -> String {
        self.format_grid(element.pixels())
    }

    /// Formats a raw pixel grid.
    #[must_use]
    pub fn format_grid(&self, grid: &PixelGrid) -> String {
        let width = self.cell_width;
        let mut out = String::new();
        for (r, row) in grid.rows().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{cell:>width$}");
            }
        }
        out
    }

    /// Writes `element`'s pixels followed by a newline.
    pub fn write(&self, element: &Element, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", self.format(element))
    }
}

impl Default for BitmapFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Formats `element` with [`BitmapFormat::DEFAULT`].
#[must_use]
pub fn bitmap_str(element: &Element) -> String {
    BitmapFormat::DEFAULT.format(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Dims;

    #[test]
    fn cells_are_right_aligned() {
        let element = Element::from_rows("img", &[vec![1, 22, 333], vec![-4, 0, 1234]]).unwrap();
        assert_eq!(bitmap_str(&element), "  1  22 333\n -4   0 1234");
    }

    #[test]
    fn custom_width() {
        let element = Element::solid("r", Dims::new(2, 2), 7);
        let fmt = BitmapFormat { cell_width: 1 };
        assert_eq!(fmt.format(&element), "7 7\n7 7");
    }

    #[test]
    fn empty_element_is_empty_text() {
        let element = Element::solid("r", Dims::new(0, 0), 7);
        assert_eq!(bitmap_str(&element), "");
    }

    #[test]
    fn write_appends_newline() {
        let element = Element::solid("r", Dims::new(1, 2), 111);
        let mut out = Vec::new();
        BitmapFormat::default().write(&element, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "111 111\n");
    }
}
