/*
placement.rs

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

//! Place words in a masked grid.
//!
//! Words are placed longest first.
//! For each word, the engine shuffles the cells inside the mask, scans a bounded number of them
//! as starting cells, and tries every allowed direction from each one.
//! The first position where every letter lands inside the mask, on an empty cell or on the same
//! letter, is used.
//! A word that cannot be placed after a bounded number of attempts is dropped: this is the normal
//! outcome for words that do not fit, not an error.
//! When all the words are processed, the remaining cells inside the mask receive random letters.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thiserror::Error;

use super::direction::{Direction, Directions};
use super::grid::Grid;
use super::mask::Mask;

/// Number of times the engine tries to place a word before giving up.
pub const MAX_ATTEMPTS_PER_WORD: usize = 10;

/// Number of shuffled starting cells scanned during one attempt.
pub const MAX_POSITIONS_SCANNED: usize = 200;

/// Letters used to fill the cells that are not used by words.
const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum PlacementError {
    /// The grid and the mask do not have the same dimensions.
    #[error("the grid is {grid}x{grid} but the mask is {mask}x{mask}")]
    SizeMismatch { grid: usize, mask: usize },

    /// A word without letters reached the engine.
    #[error("cannot place an empty word")]
    EmptyWord,
}

/// Bounds of the randomized search.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Number of attempts for each word.
    pub max_attempts_per_word: usize,

    /// Number of starting cells scanned during one attempt.
    pub max_positions_scanned: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts_per_word: MAX_ATTEMPTS_PER_WORD,
            max_positions_scanned: MAX_POSITIONS_SCANNED,
        }
    }
}

/// Position of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Word, as it was given to the engine.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Reading direction.
    pub direction: Direction,
}

impl Placement {
    /// Return the cells covered by the word, from the first letter to the last one.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.word.chars().count() as isize)
            .map(|k| {
                (
                    (self.row as isize + dr * k) as usize,
                    (self.col as isize + dc * k) as usize,
                )
            })
            .collect()
    }
}

/// Word placement engine.
pub struct WordPlacer {
    /// Search bounds.
    config: PlacementConfig,

    /// Random source for shuffling the starting cells and for the fill letters.
    rng: StdRng,

    /// Number of attempts made during the last [`WordPlacer::generate`] call.
    pub attempts: usize,
}

impl WordPlacer {
    /// Create the object.
    ///
    /// With a seed, the generated grids are reproducible. Otherwise, the random source is
    /// seeded by the operating system.
    pub fn new(config: PlacementConfig, seed: Option<u64>) -> Self {
        let rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            attempts: 0,
        }
    }

    /// Verify that the grid and the mask have the same size.
    fn check_sizes(grid: &Grid, mask: &Mask) -> Result<(), PlacementError> {
        if grid.size() != mask.size() {
            return Err(PlacementError::SizeMismatch {
                grid: grid.size(),
                mask: mask.size(),
            });
        }
        Ok(())
    }

    /// Whether the word can be written from `(row, col)` in the given direction.
    ///
    /// Each letter must land in the grid, inside the mask, on a cell that is empty or that
    /// already holds the same letter.
    pub fn can_place(
        grid: &Grid,
        mask: &Mask,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> bool {
        word.chars()
            .enumerate()
            .all(|(k, letter)| match grid.step(row, col, direction, k) {
                Some((i, j)) => {
                    mask.get(i, j) && grid.get(i, j).is_none_or(|current| current == letter)
                }
                None => false,
            })
    }

    /// Write the word in the grid.
    fn write(grid: &mut Grid, placement: &Placement) {
        for ((i, j), letter) in placement.cells().into_iter().zip(placement.word.chars()) {
            grid.set(i, j, letter);
        }
    }

    /// Make one attempt at placing the word.
    ///
    /// The grid is updated only when the word is placed.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid and the mask sizes differ, or if the word is
    /// empty.
    pub fn place(
        &mut self,
        grid: &mut Grid,
        mask: &Mask,
        word: &str,
        directions: &Directions,
    ) -> Result<Option<Placement>, PlacementError> {
        Self::check_sizes(grid, mask)?;
        if word.is_empty() {
            return Err(PlacementError::EmptyWord);
        }

        let mut positions: Vec<(usize, usize)> = mask.active_cells();
        positions.shuffle(&mut self.rng);
        positions.truncate(self.config.max_positions_scanned);

        for (row, col) in positions {
            for direction in directions.iter() {
                if Self::can_place(grid, mask, word, row, col, *direction) {
                    let placement: Placement = Placement {
                        word: word.to_string(),
                        row,
                        col,
                        direction: *direction,
                    };
                    Self::write(grid, &placement);
                    return Ok(Some(placement));
                }
            }
        }
        Ok(None)
    }

    /// Place the word, retrying up to the configured number of attempts.
    ///
    /// Return None when the word cannot be placed.
    ///
    /// # Errors
    ///
    /// See [`WordPlacer::place`].
    pub fn place_word(
        &mut self,
        grid: &mut Grid,
        mask: &Mask,
        word: &str,
        directions: &Directions,
    ) -> Result<Option<Placement>, PlacementError> {
        for attempt in 0..self.config.max_attempts_per_word {
            self.attempts += 1;
            if let Some(p) = self.place(grid, mask, word, directions)? {
                debug!(
                    "Placed '{word}' at ({}, {}) going {} (attempt {})",
                    p.row,
                    p.col,
                    p.direction.as_ref(),
                    attempt + 1
                );
                return Ok(Some(p));
            }
        }
        warn!(
            "Could not place word '{word}' after {} attempts",
            self.config.max_attempts_per_word
        );
        Ok(None)
    }

    /// Fill the empty cells inside the mask with random letters.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid and the mask sizes differ.
    pub fn fill(&mut self, grid: &mut Grid, mask: &Mask) -> Result<(), PlacementError> {
        Self::check_sizes(grid, mask)?;
        for (row, col) in mask.active_cells() {
            if grid.is_empty(row, col) {
                let letter: u8 = ALPHABET[self.rng.random_range(0..ALPHABET.len())];
                grid.set(row, col, letter as char);
            }
        }
        Ok(())
    }

    /// Build a grid for the mask, place the words, and fill the remaining cells.
    ///
    /// Return the grid and the placement of the words that could be placed, longest words
    /// first. Words that do not fit are missing from the list.
    ///
    /// # Errors
    ///
    /// The method returns an error if a word is empty.
    pub fn generate(
        &mut self,
        words: &[String],
        mask: &Mask,
        directions: &Directions,
    ) -> Result<(Grid, Vec<Placement>), PlacementError> {
        if words.iter().any(String::is_empty) {
            return Err(PlacementError::EmptyWord);
        }
        self.attempts = 0;

        // Longest words have fewer possible positions, so place them first
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort_by_key(|w| Reverse(w.chars().count()));

        if directions.is_empty() {
            debug!("No direction allowed: none of the words can be placed");
        }

        let mut grid: Grid = Grid::new(mask.size());
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        for word in sorted {
            if let Some(p) = self.place_word(&mut grid, mask, word, directions)? {
                placements.push(p);
            }
        }
        debug!(
            "Placed {} of {} words ({} attempts)",
            placements.len(),
            words.len(),
            self.attempts
        );

        self.fill(&mut grid, mask)?;
        Ok((grid, placements))
    }
}
