/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a heart-shaped puzzle:
//!
//! ```
//! $ wordshape -s heart LOVE ROSES "VALENTINE DAY" CUPID
//! ```
//!
//! Read the words from a file, one word per line, and print a JSON document:
//!
//! ```
//! $ wordshape -w animals.txt -s dog --json
//! ```
//!
//! Add a custom shape from a drawing, and then use it:
//!
//! ```
//! $ wordshape --add-shape rocket --image rocket.png
//! Added custom shape rocket
//! $ wordshape -s rocket -w space.txt
//! ```
//!
//! List the available shapes:
//!
//! ```
//! $ wordshape --ls
//! square
//! circle
//! heart
//! ...
//! rocket
//! ```

use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug};
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use wordshape::config::{COPYRIGHT_NOTICE, CUSTOM_SHAPE_SIZE, DEFAULT_SHAPES_FILE};
use wordshape::generator::mask::Mask;
use wordshape::generator::outline::{self, Threshold};
use wordshape::generator::puzzle::{self, Puzzle, PuzzleOptions};
use wordshape::generator::registry::ShapeRegistry;
use wordshape::generator::shapes::{MaskProvider, SQUARE};
use wordshape::generator::sizer;
use wordshape::saver::shapes::SaverShapes;

/// How border pixels are detected in pictures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThresholdKind {
    /// Dark lines on a white background (drawings)
    Fixed,
    /// Relative to the average brightness (photos and scans)
    Adaptive,
}

impl From<ThresholdKind> for Threshold {
    fn from(kind: ThresholdKind) -> Self {
        match kind {
            ThresholdKind::Fixed => Threshold::default(),
            ThresholdKind::Adaptive => Threshold::Adaptive,
        }
    }
}

/// Generate word-search puzzles in the shape of hearts, stars, animals, or your own drawings.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Words to hide in the grid
    words: Vec<String>,

    /// File with the words to hide, one word per line
    #[arg(short, long, value_name = "FILE")]
    words_file: Option<PathBuf>,

    /// Shape of the puzzle
    #[arg(short, long, default_value = SQUARE)]
    shape: String,

    /// Dimension of the grid (computed from the words by default)
    #[arg(long)]
    size: Option<usize>,

    /// Do not hide words horizontally
    #[arg(long, default_value_t = false)]
    no_horizontal: bool,

    /// Do not hide words vertically
    #[arg(long, default_value_t = false)]
    no_vertical: bool,

    /// Do not hide words diagonally
    #[arg(long, default_value_t = false)]
    no_diagonal: bool,

    /// Seed for the random generator, to get the same puzzle again
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzle as a JSON document
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also print the answer key
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// List the shapes
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Print the outline of the shape
    #[arg(long, default_value_t = false)]
    show_mask: bool,

    /// Add a custom shape from a picture or an ASCII art file
    #[arg(long, value_name = "NAME", group = "manage")]
    add_shape: Option<String>,

    /// Picture of the custom shape (dark outline on a light background)
    #[arg(long, value_name = "FILE", requires = "add_shape", conflicts_with = "text")]
    image: Option<PathBuf>,

    /// Border detection for the picture
    #[arg(value_enum, long, default_value_t = ThresholdKind::Fixed, requires = "image")]
    threshold: ThresholdKind,

    /// ASCII art file of the custom shape ('o', 'x', or '#' for the cells inside)
    #[arg(long, value_name = "FILE", requires = "add_shape")]
    text: Option<PathBuf>,

    /// Delete a custom shape
    #[arg(long, value_name = "NAME", group = "manage")]
    delete_shape: Option<String>,

    /// Delete all the custom shapes
    #[arg(long, default_value_t = false, group = "manage")]
    clear_shapes: bool,

    /// File that stores the custom shapes
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SHAPES_FILE)]
    store: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Uppercase and trim the words, and drop the blank ones.
///
/// Return the words to hide, without spaces, and the mapping to their display form.
fn normalize_words(raw: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut words: Vec<String> = Vec::new();
    let mut display: HashMap<String, String> = HashMap::new();

    for w in raw {
        let original: String = w.trim().to_uppercase();
        if original.is_empty() {
            continue;
        }
        let word: String = original.replace(' ', "");
        display.entry(word.clone()).or_insert(original);
        words.push(word);
    }
    (words, display)
}

/// Return the display form of the words.
fn display_words(words: &[String], display: &HashMap<String, String>) -> Vec<String> {
    words
        .iter()
        .map(|w| display.get(w).unwrap_or(w).clone())
        .collect()
}

/// Read the words from the command line and from the words file.
fn collect_words(args: &Args) -> Result<Vec<String>, String> {
    let mut raw: Vec<String> = args.words.clone();
    if let Some(path) = &args.words_file {
        let content: String =
            fs::read_to_string(path).map_err(|e| format!("Cannot read {path:?}: {e}"))?;
        raw.extend(content.lines().map(String::from));
    }
    Ok(raw)
}

/// Build the mask of a new custom shape.
fn custom_mask(args: &Args) -> Result<Mask, String> {
    match (&args.image, &args.text) {
        (Some(path), _) => Ok(outline::mask_from_file(
            path,
            CUSTOM_SHAPE_SIZE,
            args.threshold.into(),
        )),
        (None, Some(path)) => {
            let picture: String =
                fs::read_to_string(path).map_err(|e| format!("Cannot read {path:?}: {e}"))?;
            Mask::from_ascii_art(&picture).map_err(|e| format!("{path:?}: {e}"))
        }
        (None, None) => Err("--add-shape requires --image or --text".to_string()),
    }
}

/// Run the custom shape management options.
///
/// Return None when no such option is given.
fn manage_shapes(args: &Args, registry: &ShapeRegistry, saver: &SaverShapes) -> Option<u8> {
    if args.clear_shapes {
        let count: usize = registry.clear();
        if let Err(e) = saver.delete_save() {
            eprintln!("Error: cannot delete {:?}: {e}", saver.path());
            return Some(1);
        }
        println!("Deleted {count} custom shapes");
        return Some(0);
    } else if let Some(name) = &args.delete_shape {
        if !registry.delete(name) {
            eprintln!("Unknown custom shape {name}. Use --ls to list the available shapes.");
            return Some(1);
        }
        println!("Deleted custom shape {name}");
    } else if let Some(name) = &args.add_shape {
        match custom_mask(args) {
            Ok(mask) => registry.add(name, mask),
            Err(msg) => {
                eprintln!("Error: {msg}");
                return Some(1);
            }
        }
        println!("Added custom shape {name}");
    } else {
        return None;
    }

    match saver.save_registry(registry) {
        Ok(()) => Some(0),
        Err(e) => {
            eprintln!("Error: cannot save the custom shapes to {:?}: {e}", saver.path());
            Some(1)
        }
    }
}

/// Print the puzzle as text.
fn print_text(
    puzzle: &Puzzle,
    words: &[String],
    display: &HashMap<String, String>,
    solution: bool,
) {
    println!("{}", puzzle.grid);

    println!("Words:");
    for w in display_words(&puzzle.placed_words(), display) {
        println!("  {w}");
    }

    let missing: Vec<String> = puzzle.missing(words);
    if !missing.is_empty() {
        println!("Could not place:");
        for w in display_words(&missing, display) {
            println!("  {w}");
        }
    }

    if solution {
        println!("\nSolution:\n{}", puzzle.solution());
    }
}

/// Print the puzzle as a JSON document.
fn print_json(
    puzzle: &Puzzle,
    words: &[String],
    display: &HashMap<String, String>,
    solution: bool,
) -> Result<(), serde_json::Error> {
    let mut doc = json!({
        "shape": puzzle.shape,
        "size": puzzle.size(),
        "grid": puzzle.grid,
        "words": display_words(&puzzle.placed_words(), display),
        "missing": display_words(&puzzle.missing(words), display),
    });
    if solution {
        doc["solution"] = json!(puzzle.solution());
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Initialize the logger.
///
/// Warnings, such as words that cannot be placed, are always displayed.
fn init_logger(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();
    init_logger(args.debug);

    //
    // Load the custom shapes
    //
    let saver: SaverShapes = SaverShapes::new(&args.store);
    let registry: ShapeRegistry = match saver.get_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: cannot load the custom shapes from {:?}: {e}", args.store);
            return 1;
        }
    };

    if let Some(ret) = manage_shapes(&args, &registry, &saver) {
        return ret;
    }

    //
    // List the shapes
    //
    if args.ls {
        for name in registry.names() {
            println!("{name}");
        }
        return 0;
    }

    let raw: Vec<String> = match collect_words(&args) {
        Ok(w) => w,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };
    let (words, display) = normalize_words(&raw);

    //
    // Print the outline of the shape
    //
    if args.show_mask {
        let size: usize = sizer::compute_size_with_override(&words, &args.shape, args.size);
        print!("{}", registry.mask(&args.shape, size));
        return 0;
    }

    if words.is_empty() {
        eprintln!("Error: no words to place. Give words as arguments or with --words-file.");
        return 1;
    }
    debug!("Words: {words:?}");

    //
    // Generate the puzzle
    //
    let options: PuzzleOptions = PuzzleOptions {
        shape: args.shape.clone(),
        allow_horizontal: !args.no_horizontal,
        allow_vertical: !args.no_vertical,
        allow_diagonal: !args.no_diagonal,
        size: args.size,
        seed: args.seed,
        ..Default::default()
    };
    let puzzle: Puzzle = match puzzle::generate_puzzle(&words, &options, &registry) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if args.json {
        if let Err(e) = print_json(&puzzle, &words, &display, args.solution) {
            eprintln!("Error: {e}");
            return 1;
        }
    } else {
        print_text(&puzzle, &words, &display, args.solution);
    }
    0
}
