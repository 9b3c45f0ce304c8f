/*
properties.rs

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

//! Property-based tests of the generated puzzles.

use proptest::prelude::*;

use wordshape::generator::mask::Mask;
use wordshape::generator::puzzle::{Puzzle, PuzzleOptions, generate_puzzle};
use wordshape::generator::shapes::{BuiltinShapes, Shape};

/// Word lists and puzzle options.
fn puzzle_input() -> impl Strategy<Value = (Vec<String>, PuzzleOptions)> {
    let shapes: Vec<String> = Shape::all()
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    (
        prop::collection::vec("[A-Z]{1,12}", 1..10),
        prop::sample::select(shapes),
        any::<(bool, bool, bool)>(),
        any::<u64>(),
    )
        .prop_map(|(words, shape, (h, v, d), seed)| {
            let options: PuzzleOptions = PuzzleOptions {
                shape,
                allow_horizontal: h,
                allow_vertical: v,
                allow_diagonal: d,
                seed: Some(seed),
                ..Default::default()
            };
            (words, options)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Letters are only in the mask, and every cell of the mask has a letter.
    #[test]
    fn letters_follow_the_mask((words, options) in puzzle_input()) {
        let puzzle: Puzzle = generate_puzzle(&words, &options, &BuiltinShapes).unwrap();
        for i in 0..puzzle.size() {
            for j in 0..puzzle.size() {
                match puzzle.grid.get(i, j) {
                    Some(c) => {
                        prop_assert!(puzzle.mask.get(i, j));
                        prop_assert!(c.is_ascii_uppercase());
                    }
                    None => prop_assert!(!puzzle.mask.get(i, j)),
                }
            }
        }
    }

    /// Every placed word can be read along its placement, inside the mask.
    #[test]
    fn placed_words_can_be_read((words, options) in puzzle_input()) {
        let puzzle: Puzzle = generate_puzzle(&words, &options, &BuiltinShapes).unwrap();
        for p in &puzzle.placements {
            let mut letters: String = String::new();
            for (i, j) in p.cells() {
                prop_assert!(puzzle.mask.get(i, j));
                letters.push(puzzle.grid.get(i, j).unwrap_or(' '));
            }
            prop_assert_eq!(&letters, &p.word);
            prop_assert!(puzzle.grid.locate(&puzzle.mask, &p.word).is_some());
        }
    }

    /// Placed words are a sub-list of the input words.
    #[test]
    fn placed_words_are_a_subset((words, options) in puzzle_input()) {
        let puzzle: Puzzle = generate_puzzle(&words, &options, &BuiltinShapes).unwrap();
        let placed: Vec<String> = puzzle.placed_words();
        prop_assert_eq!(placed.len() + puzzle.missing(&words).len(), words.len());
        for w in &placed {
            let requested: usize = words.iter().filter(|x| *x == w).count();
            let seated: usize = placed.iter().filter(|x| *x == w).count();
            prop_assert!(seated <= requested);
        }
        if !options.allow_horizontal && !options.allow_vertical && !options.allow_diagonal {
            prop_assert!(placed.is_empty());
        }
    }

    /// Resizing keeps the mask square, and resizing to the same size changes nothing.
    #[test]
    fn resize_shape(index in 0usize..15, size in 3usize..31, target in 1usize..40) {
        let mask: Mask = Shape::all()[index].mask(size);
        let resized: Mask = mask.resize(target);
        prop_assert_eq!(resized.size(), target);
        prop_assert!(resized.rows().iter().all(|r| r.len() == target));
        prop_assert_eq!(mask.resize(size), mask);
    }
}
