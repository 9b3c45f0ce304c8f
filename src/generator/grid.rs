/*
grid.rs

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

//! Letter grid of a puzzle.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

use super::direction::Direction;
use super::mask::Mask;

/// Square matrix of cells.
///
/// A cell is either empty (`None`) or holds an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![None; size]; size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Return the letter in the cell, or None if the cell is empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Write a letter in the cell. Out-of-bound cells are ignored.
    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Some(letter);
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Return the cell that is `steps` cells away from `(row, col)` in the given direction, or
    /// None if that cell is outside the grid.
    pub fn step(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        steps: usize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let r: isize = row as isize + dr * steps as isize;
        let c: isize = col as isize + dc * steps as isize;
        let size: isize = self.size() as isize;
        if r < 0 || c < 0 || r >= size || c >= size {
            None
        } else {
            Some((r as usize, c as usize))
        }
    }

    /// Whether the word can be read from `(row, col)` in the given direction, using only cells
    /// inside the mask.
    pub fn reads(
        &self,
        mask: &Mask,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> bool {
        word.chars()
            .enumerate()
            .all(|(k, letter)| match self.step(row, col, direction, k) {
                Some((i, j)) => mask.get(i, j) && self.get(i, j) == Some(letter),
                None => false,
            })
    }

    /// Search the grid for the word and return its starting cell and direction.
    ///
    /// Return None if the word cannot be read along any straight line inside the mask.
    pub fn locate(&self, mask: &Mask, word: &str) -> Option<(usize, usize, Direction)> {
        if word.is_empty() {
            return None;
        }
        for (row, col) in mask.active_cells() {
            for direction in Direction::all() {
                if self.reads(mask, word, row, col, direction) {
                    return Some((row, col, direction));
                }
            }
        }
        None
    }

    /// Rows of the grid as strings, with an empty string for empty cells.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|r| {
                r.iter()
                    .map(|c| c.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Serialize the grid as rows of one-character strings (empty strings for empty cells).
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for row in self.to_strings() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

/// Print the grid, one row per line, empty cells as spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in &self.cells {
            let line: Vec<String> = r.iter().map(|c| c.unwrap_or(' ').to_string()).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
