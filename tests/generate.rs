/*
generate.rs

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

//! End-to-end puzzle generation scenarios.

use wordshape::generator::mask::Mask;
use wordshape::generator::placement::PlacementConfig;
use wordshape::generator::puzzle::{Puzzle, PuzzleOptions, generate_puzzle};
use wordshape::generator::shapes::{BuiltinShapes, MaskProvider, Shape};
use wordshape::generator::sizer::compute_size;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn is_letter(c: Option<char>) -> bool {
    c.is_some_and(|l| l.is_ascii_uppercase())
}

#[test]
fn cat_and_dog() {
    let list: Vec<String> = words(&["CAT", "DOG"]);
    let options: PuzzleOptions = PuzzleOptions {
        seed: Some(8),
        ..Default::default()
    };
    let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

    assert_eq!(puzzle.size(), 8);
    for i in 0..8 {
        for j in 0..8 {
            assert!(is_letter(puzzle.grid.get(i, j)), "cell ({i}, {j}) is empty");
        }
    }
    assert!(puzzle.grid.locate(&puzzle.mask, "CAT").is_some());
    assert!(puzzle.grid.locate(&puzzle.mask, "DOG").is_some());
    let mut placed: Vec<String> = puzzle.placed_words();
    placed.sort();
    assert_eq!(placed, list);
}

#[test]
fn word_too_long_is_dropped() {
    let list: Vec<String> = words(&["SUPERCALIFRAGILISTIC"]);
    let options: PuzzleOptions = PuzzleOptions {
        allow_vertical: false,
        allow_diagonal: false,
        seed: Some(20),
        ..Default::default()
    };
    let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

    assert_eq!(puzzle.size(), 12);
    assert!(puzzle.placed_words().is_empty());
    assert_eq!(puzzle.missing(&list), list);
    for i in 0..12 {
        for j in 0..12 {
            assert!(is_letter(puzzle.grid.get(i, j)));
        }
    }
}

#[test]
fn partial_success_is_normal() {
    // Sixteen different 11-letter words, but only one of them fits in each row
    let list: Vec<String> = (0..30)
        .map(|k| format!("{}ABCDEFGHIJ", char::from(b'K' + (k % 16) as u8)))
        .collect();
    let options: PuzzleOptions = PuzzleOptions {
        allow_vertical: false,
        allow_diagonal: false,
        seed: Some(30),
        placement: PlacementConfig {
            max_attempts_per_word: 3,
            max_positions_scanned: 50,
        },
        ..Default::default()
    };
    let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

    let placed: usize = puzzle.placed_words().len();
    assert!(placed > 0);
    assert!(placed < list.len());
    assert_eq!(placed + puzzle.missing(&list).len(), list.len());
}

#[test]
fn no_direction_allowed() {
    let list: Vec<String> = words(&["SUN", "MOON"]);
    let options: PuzzleOptions = PuzzleOptions {
        shape: "circle".to_string(),
        allow_horizontal: false,
        allow_vertical: false,
        allow_diagonal: false,
        seed: Some(4),
        ..Default::default()
    };
    let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();
    assert!(puzzle.placements.is_empty());
    assert_eq!(puzzle.size(), 20);
}

#[test]
fn sizer_boundaries() {
    assert_eq!(compute_size(&words(&["AB"]), "square"), 8);
    assert_eq!(compute_size(&words(&["A".repeat(20).as_str()]), "square"), 12);
    assert_eq!(compute_size(&words(&["A".repeat(30).as_str()]), "circle"), 30);
}

#[test]
fn masks_are_stable() {
    for shape in Shape::all() {
        for size in [3, 8, 12, 20, 25, 30] {
            let first: Mask = BuiltinShapes.mask(shape.as_ref(), size);
            let second: Mask = BuiltinShapes.mask(shape.as_ref(), size);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn unknown_shape_is_square() {
    let list: Vec<String> = words(&["KOALA"]);
    let options: PuzzleOptions = PuzzleOptions {
        shape: "unicorn".to_string(),
        seed: Some(1),
        ..Default::default()
    };
    let puzzle: Puzzle = generate_puzzle(&list, &options, &BuiltinShapes).unwrap();

    // Not a built-in name, so the decorative size rule applies with a full mask
    assert_eq!(puzzle.size(), 20);
    assert_eq!(puzzle.mask, Mask::filled(20));
}
