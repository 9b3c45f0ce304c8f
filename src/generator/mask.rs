/*
mask.rs

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

//! Square boolean masks that mark the cells inside the puzzle outline.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::geometry::Region;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum MaskError {
    /// The mask has no rows.
    #[error("the mask is empty")]
    Empty,

    /// A row does not have as many cells as there are rows.
    #[error("the mask is not square: row {row} has {len} cells instead of {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// Square boolean matrix.
///
/// A `true` cell is inside the puzzle outline and can receive a letter.
/// A `false` cell is outside and is never written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Mask {
    /// Rows of the mask, each row having [`Mask::size`] cells.
    rows: Vec<Vec<bool>>,
}

impl Mask {
    /// Create a mask where every cell is inside the outline.
    pub fn filled(size: usize) -> Self {
        Self {
            rows: vec![vec![true; size]; size],
        }
    }

    /// Create a mask from its rows.
    ///
    /// # Errors
    ///
    /// The method returns an error if there are no rows or if the matrix is not square.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MaskError> {
        let size: usize = rows.len();
        if size == 0 {
            return Err(MaskError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MaskError::NotSquare {
                row,
                len: r.len(),
                size,
            });
        }
        Ok(Self { rows })
    }

    /// Rasterize a plane region.
    ///
    /// Each cell `(i, j)` is tested at `x = j - center`, `y = center - i` with
    /// `center = size / 2`.
    pub fn from_region(region: &Region, size: usize) -> Self {
        let center: f64 = (size / 2) as f64;
        let rows: Vec<Vec<bool>> = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| region.contains(j as f64 - center, center - i as f64))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Create a mask from an "ASCII art" picture such as:
    ///
    /// ```text
    ///  oo oo
    /// ooooooo
    ///  ooooo
    ///   ooo
    ///    o
    /// ```
    ///
    /// - `o`, `O`, `x`, `X`, or `#` represents a cell inside the outline.
    /// - All other characters are outside.
    ///
    /// Blank lines are ignored. The picture is padded with outside cells on the right and at the
    /// bottom to get a square mask.
    ///
    /// # Errors
    ///
    /// The method returns an error if the picture has no lines.
    pub fn from_ascii_art(picture: &str) -> Result<Self, MaskError> {
        let mut rows: Vec<Vec<bool>> = picture
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.chars()
                    .map(|c| matches!(c, 'o' | 'O' | 'x' | 'X' | '#'))
                    .collect()
            })
            .collect();

        let width: usize = rows.iter().map(Vec::len).max().unwrap_or(0);
        let size: usize = width.max(rows.len());

        for r in &mut rows {
            r.resize(size, false);
        }
        rows.resize(size, vec![false; size]);
        Self::from_rows(rows)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell is inside the outline. Out-of-bound cells are outside.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Set the status of a cell.
    pub fn set(&mut self, row: usize, col: usize, inside: bool) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = inside;
        }
    }

    /// Number of cells inside the outline.
    pub fn count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| **c).count()
    }

    /// Coordinates of the cells inside the outline, in row-major order.
    pub fn active_cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<(usize, usize)> = Vec::with_capacity(self.count());
        for (i, r) in self.rows.iter().enumerate() {
            for (j, c) in r.iter().enumerate() {
                if *c {
                    cells.push((i, j));
                }
            }
        }
        cells
    }

    /// Return a reference to the rows.
    pub fn rows(&self) -> &Vec<Vec<bool>> {
        &self.rows
    }

    /// Resize the mask with nearest-neighbour sampling.
    ///
    /// The target cell `(i, j)` takes the value of the source cell
    /// `(floor(i * scale), floor(j * scale))` where `scale = source size / target size`.
    pub fn resize(&self, target_size: usize) -> Self {
        let current_size: usize = self.size();
        if current_size == 0 {
            return Self::filled(target_size);
        }
        if current_size == target_size {
            return self.clone();
        }
        let scale: f64 = current_size as f64 / target_size as f64;
        let last: usize = current_size.saturating_sub(1);
        let rows: Vec<Vec<bool>> = (0..target_size)
            .map(|i| {
                let src_i: usize = ((i as f64 * scale) as usize).min(last);
                (0..target_size)
                    .map(|j| {
                        let src_j: usize = ((j as f64 * scale) as usize).min(last);
                        self.rows[src_i][src_j]
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Mask {
    type Error = MaskError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Mask> for Vec<Vec<bool>> {
    fn from(mask: Mask) -> Self {
        mask.rows
    }
}

/// Print the mask as "ASCII art", `O` for the cells inside the outline.
impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in &self.rows {
            let line: String = r.iter().map(|c| if *c { 'O' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_non_square() {
        assert_eq!(Mask::from_rows(Vec::new()), Err(MaskError::Empty));
        assert_eq!(
            Mask::from_rows(vec![vec![true, true], vec![true]]),
            Err(MaskError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert!(Mask::from_rows(vec![vec![true, false], vec![false, true]]).is_ok());
    }

    #[test]
    fn ascii_art_is_padded() {
        let mask: Mask = Mask::from_ascii_art("\n ooo\no\n\n").unwrap();
        assert_eq!(mask.size(), 4);
        assert!(mask.get(0, 1));
        assert!(mask.get(1, 0));
        assert!(!mask.get(0, 0));
        assert!(!mask.get(3, 3));
        assert_eq!(mask.count(), 4);
        assert_eq!(Mask::from_ascii_art("\n\n"), Err(MaskError::Empty));
    }

    #[test]
    fn display_round_trip() {
        let mask: Mask = Mask::from_ascii_art("O.O\n.O.\nO.O").unwrap();
        assert_eq!(mask.to_string(), "O.O\n.O.\nO.O\n");
        assert_eq!(Mask::from_ascii_art(&mask.to_string()).unwrap(), mask);
    }

    #[test]
    fn resize_nearest_neighbour() {
        // Left half inside
        let rows: Vec<Vec<bool>> = (0..4).map(|_| vec![true, true, false, false]).collect();
        let mask: Mask = Mask::from_rows(rows).unwrap();

        let big: Mask = mask.resize(8);
        assert_eq!(big.size(), 8);
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(big.get(i, j), j < 4, "cell ({i}, {j})");
            }
        }

        let small: Mask = mask.resize(2);
        assert_eq!(small.rows(), &vec![vec![true, false], vec![true, false]]);

        assert_eq!(mask.resize(4), mask);
    }

    #[test]
    fn resize_from_odd_size() {
        let mut mask: Mask = Mask::filled(15);
        mask.set(14, 14, false);
        let resized: Mask = mask.resize(20);
        assert_eq!(resized.size(), 20);
        assert!(!resized.get(19, 19));
        assert!(resized.get(0, 0));
    }

    #[test]
    fn active_cells_row_major() {
        let mask: Mask = Mask::from_ascii_art("o.\n.o").unwrap();
        assert_eq!(mask.active_cells(), vec![(0, 0), (1, 1)]);
        assert!(!mask.get(5, 0));
    }

    #[test]
    fn serde_validates_shape() {
        let mask: Mask = serde_json::from_str("[[true,false],[false,true]]").unwrap();
        assert_eq!(mask.count(), 2);
        assert!(serde_json::from_str::<Mask>("[[true,false],[true]]").is_err());
        assert_eq!(
            serde_json::to_string(&mask).unwrap(),
            "[[true,false],[false,true]]"
        );
    }
}
