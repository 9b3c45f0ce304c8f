/*
sizer.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordshape.

Wordshape is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordshape is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordshape. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Choose the dimension of the grid.
//!
//! Square puzzles stay small (8 to 12 cells wide).
//! Decorative shapes lose cells to the outline, so they get a larger grid (20 to 30 cells wide).

use log::debug;

use super::shapes::SQUARE;

/// Longest word length assumed when the word list is empty.
const DEFAULT_LONGEST_WORD: usize = 10;

/// Grid bounds and margin for the square shape.
const SQUARE_MIN: usize = 8;
const SQUARE_MAX: usize = 12;
const SQUARE_MARGIN: usize = 2;

/// Grid bounds and margin for the other shapes.
const SHAPE_MIN: usize = 20;
const SHAPE_MAX: usize = 30;
const SHAPE_MARGIN: usize = 8;

/// Return the grid dimension for the words and the shape name.
pub fn compute_size(words: &[String], shape: &str) -> usize {
    let longest: usize = words
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(DEFAULT_LONGEST_WORD);

    let size: usize = if shape == SQUARE {
        (longest + SQUARE_MARGIN).clamp(SQUARE_MIN, SQUARE_MAX)
    } else {
        (longest + SHAPE_MARGIN).clamp(SHAPE_MIN, SHAPE_MAX)
    };
    debug!("Longest word = {longest}  Shape = {shape}  Grid size = {size}");
    size
}

/// Return the grid dimension, honoring a size requested by the caller.
///
/// A requested size is used as is, except for the square shape that never exceeds 12 cells.
pub fn compute_size_with_override(
    words: &[String],
    shape: &str,
    requested: Option<usize>,
) -> usize {
    match requested {
        Some(size) if shape == SQUARE => size.min(SQUARE_MAX),
        Some(size) => size,
        None => compute_size(words, shape),
    }
}
