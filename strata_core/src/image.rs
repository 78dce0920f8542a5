// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the plain-text image format.
//!
//! Each line holds whitespace-separated integers and every line must carry
//! the same number of tokens. Line count becomes the row count, token count
//! the column count. Trailing blank lines are ignored; a blank line between
//! two rows is a row with no pixels and fails as ragged.
//!
//! ```text
//! 1 2 3 4 5 6
//! 1 2 3 4 5 6
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::grid::{Dims, Pixel, PixelGrid};

/// Why an image source could not be turned into a rectangular grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    /// The source contained no pixels.
    #[error("image source is empty")]
    Empty,
    /// A row had a different number of pixels than the first row.
    #[error("line {line} has {found} pixels, expected {expected}")]
    RaggedRow {
        /// One-based source line number.
        line: usize,
        /// Pixel count of the first row.
        expected: usize,
        /// Pixel count of this row.
        found: usize,
    },
    /// A token was not an integer.
    #[error("line {line}: `{token}` is not an integer pixel")]
    InvalidPixel {
        /// One-based source line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The grid does not fit the `u32` dimensions of a [`PixelGrid`].
    #[error("image dimensions exceed u32::MAX")]
    TooLarge,
}

/// Parses an image source into nested rows.
///
/// The result is guaranteed rectangular and non-empty.
pub fn parse_rows(source: &str) -> Result<Vec<Vec<Pixel>>, ImageError> {
    let mut rows: Vec<Vec<Pixel>> = Vec::new();
    // First blank line seen since the last row, reported if a row follows.
    let mut blank: Option<usize> = None;
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            blank.get_or_insert(idx + 1);
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<Pixel>().map_err(|_| ImageError::InvalidPixel {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(blank_line) = blank.take() {
            return Err(match rows.first() {
                Some(first) => ImageError::RaggedRow {
                    line: blank_line,
                    expected: first.len(),
                    found: 0,
                },
                // Leading blank lines make the first row empty.
                None => ImageError::RaggedRow {
                    line: idx + 1,
                    expected: 0,
                    found: row.len(),
                },
            });
        }
        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            return Err(ImageError::RaggedRow {
                line: idx + 1,
                expected: first.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(rows)
}

/// Builds a grid from nested rows.
///
/// Fails with [`ImageError::Empty`] if there are no rows or the rows are
/// empty, and with [`ImageError::RaggedRow`] if row lengths differ (lines are
/// numbered by row index here).
pub fn grid_from_rows(rows: &[Vec<Pixel>]) -> Result<PixelGrid, ImageError> {
    let columns = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(ImageError::Empty),
    };
    let mut cells = Vec::with_capacity(rows.len() * columns);
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != columns {
            return Err(ImageError::RaggedRow {
                line: idx + 1,
                expected: columns,
                found: row.len(),
            });
        }
        cells.extend_from_slice(row);
    }
    let dims = Dims::new(
        u32::try_from(rows.len()).map_err(|_| ImageError::TooLarge)?,
        u32::try_from(columns).map_err(|_| ImageError::TooLarge)?,
    );
    Ok(PixelGrid::from_cells(dims, cells))
}

/// Parses an image source straight into a grid.
pub fn parse_grid(source: &str) -> Result<PixelGrid, ImageError> {
    grid_from_rows(&parse_rows(source)?)
}
