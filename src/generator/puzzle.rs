/*
puzzle.rs

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

//! Generate a complete puzzle from a word list.

use log::{Level, debug, log_enabled};
use serde::Serialize;

use super::direction::Directions;
use super::grid::Grid;
use super::mask::Mask;
use super::placement::{Placement, PlacementConfig, PlacementError, WordPlacer};
use super::shapes::{MaskProvider, SQUARE};
use super::sizer;

/// Parameters of a puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleOptions {
    /// Name of the shape (built-in or custom).
    pub shape: String,

    /// Allow words that read left to right and right to left.
    pub allow_horizontal: bool,

    /// Allow words that read top to bottom and bottom to top.
    pub allow_vertical: bool,

    /// Allow words that read along the four diagonals.
    pub allow_diagonal: bool,

    /// Grid dimension. When None, the dimension is computed from the words.
    pub size: Option<usize>,

    /// Seed of the random source, for reproducible puzzles.
    pub seed: Option<u64>,

    /// Bounds of the placement search.
    pub placement: PlacementConfig,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self {
            shape: SQUARE.to_string(),
            allow_horizontal: true,
            allow_vertical: true,
            allow_diagonal: true,
            size: None,
            seed: None,
            placement: PlacementConfig::default(),
        }
    }
}

impl PuzzleOptions {
    /// Return the set of allowed directions.
    pub fn directions(&self) -> Directions {
        Directions::new(
            self.allow_horizontal,
            self.allow_vertical,
            self.allow_diagonal,
        )
    }
}

/// Generated puzzle.
#[derive(Serialize, Debug, Clone)]
pub struct Puzzle {
    /// Name of the requested shape.
    pub shape: String,

    /// Letter grid. Cells outside the mask are empty.
    pub grid: Grid,

    /// Outline of the puzzle.
    pub mask: Mask,

    /// Position of every word that could be placed, longest words first.
    pub placements: Vec<Placement>,
}

impl Puzzle {
    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Return the words that were placed in the grid.
    pub fn placed_words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }

    /// Return the words of the list that are not in the grid, in the list order.
    ///
    /// Each placement accounts for one occurrence of its word, so a word given twice but placed
    /// once is reported once.
    pub fn missing(&self, words: &[String]) -> Vec<String> {
        let mut placed: Vec<&str> = self.placements.iter().map(|p| p.word.as_str()).collect();
        let mut missing: Vec<String> = Vec::new();
        for word in words {
            match placed.iter().position(|w| w == word) {
                Some(idx) => {
                    placed.swap_remove(idx);
                }
                None => missing.push(word.clone()),
            }
        }
        missing
    }

    /// Return the answer key: a grid that only holds the letters of the placed words.
    pub fn solution(&self) -> Grid {
        let mut solution: Grid = Grid::new(self.size());
        for (i, j) in self.placements.iter().flat_map(|p| p.cells()) {
            if let Some(letter) = self.grid.get(i, j) {
                solution.set(i, j, letter);
            }
        }
        solution
    }
}

/// Generate a puzzle.
///
/// The grid dimension comes from the words and the shape (see [`sizer`]), the outline from the
/// provider, and the words are then placed with a [`WordPlacer`].
/// Words that do not fit are silently left out of [`Puzzle::placements`].
///
/// # Errors
///
/// The function returns an error if a word is empty, or if the provider returns a mask that does
/// not have the requested size.
pub fn generate_puzzle(
    words: &[String],
    options: &PuzzleOptions,
    provider: &dyn MaskProvider,
) -> Result<Puzzle, PlacementError> {
    let size: usize = sizer::compute_size_with_override(words, &options.shape, options.size);
    let mask: Mask = provider.mask(&options.shape, size);
    if mask.size() != size {
        return Err(PlacementError::SizeMismatch {
            grid: size,
            mask: mask.size(),
        });
    }
    if log_enabled!(Level::Debug) {
        debug!("Mask for {} ({} cells):\n{mask}", options.shape, mask.count());
    }

    let mut placer: WordPlacer = WordPlacer::new(options.placement, options.seed);
    let (grid, placements) = placer.generate(words, &mask, &options.directions())?;

    Ok(Puzzle {
        shape: options.shape.clone(),
        grid,
        mask,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;
    use crate::generator::shapes::BuiltinShapes;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Provider that ignores the requested size.
    struct FixedSize;

    impl MaskProvider for FixedSize {
        fn mask(&self, _name: &str, _size: usize) -> Mask {
            Mask::filled(4)
        }

        fn names(&self) -> Vec<String> {
            vec!["fixed".to_string()]
        }
    }

    #[test]
    fn square_puzzle() {
        let list: Vec<String> = words(&["CAT", "DOG"]);
        let options: PuzzleOptions = PuzzleOptions {
            seed: Some(42),
            ..Default::default()
        };
        let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

        assert_eq!(puzzle.size(), 8);
        assert_eq!(puzzle.shape, "square");
        assert_eq!(puzzle.placed_words().len(), 2);
        assert!(puzzle.missing(&list).is_empty());
        for word in &list {
            assert!(puzzle.grid.locate(&puzzle.mask, word).is_some());
        }
    }

    #[test]
    fn shaped_puzzle_stays_in_mask() {
        let list: Vec<String> = words(&["HEART", "LOVE", "ROSE"]);
        let options: PuzzleOptions = PuzzleOptions {
            shape: "heart".to_string(),
            seed: Some(5),
            ..Default::default()
        };
        let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

        assert_eq!(puzzle.size(), 20);
        for i in 0..20 {
            for j in 0..20 {
                assert_eq!(puzzle.grid.get(i, j).is_some(), puzzle.mask.get(i, j));
            }
        }
    }

    #[test]
    fn missing_counts_occurrences() {
        let puzzle: Puzzle = Puzzle {
            shape: SQUARE.to_string(),
            grid: Grid::new(3),
            mask: Mask::filled(3),
            placements: vec![Placement {
                word: "OX".to_string(),
                row: 0,
                col: 0,
                direction: Direction::East,
            }],
        };
        assert_eq!(
            puzzle.missing(&words(&["OX", "EMU", "OX"])),
            words(&["EMU", "OX"])
        );
    }

    #[test]
    fn solution_keeps_word_letters() {
        let list: Vec<String> = words(&["LION"]);
        let options: PuzzleOptions = PuzzleOptions {
            seed: Some(9),
            ..Default::default()
        };
        let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();
        let solution: Grid = puzzle.solution();

        let cells: Vec<(usize, usize)> = puzzle.placements[0].cells();
        for i in 0..puzzle.size() {
            for j in 0..puzzle.size() {
                if cells.contains(&(i, j)) {
                    assert_eq!(solution.get(i, j), puzzle.grid.get(i, j));
                } else {
                    assert!(solution.is_empty(i, j));
                }
            }
        }
    }

    #[test]
    fn size_override_and_mismatch() {
        let list: Vec<String> = words(&["CAT"]);
        let options: PuzzleOptions = PuzzleOptions {
            shape: "star".to_string(),
            size: Some(15),
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(
            generate_puzzle(&list, &options, &BuiltinShapes)
                .unwrap()
                .size(),
            15
        );
        assert_eq!(
            generate_puzzle(&list, &options, &FixedSize).unwrap_err(),
            PlacementError::SizeMismatch { grid: 15, mask: 4 }
        );
    }

    #[test]
    fn seeded_puzzles_repeat() {
        let list: Vec<String> = words(&["APPLE", "PEAR", "PLUM", "FIG"]);
        let options: PuzzleOptions = PuzzleOptions {
            shape: "fish".to_string(),
            seed: Some(2025),
            ..Default::default()
        };
        let first: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();
        let second: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.placements, second.placements);
    }
}
