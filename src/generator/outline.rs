/*
outline.rs

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

//! Build masks from drawings and pictures.
//!
//! The picture is converted to grayscale and resized to the grid size.
//! Dark pixels form the border of the shape.
//! The inside of the border is then flood-filled from the center of the grid, and the mask is
//! the union of the border and of the filled area.
//!
//! Failures never propagate: when the picture cannot be decoded, or when no border is detected,
//! the mask covers the whole grid.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use log::{Level, debug, log_enabled, warn};
use std::path::Path;

use super::mask::Mask;

/// Pixels darker than this value are part of the border in drawings.
pub const DRAWING_THRESHOLD: u8 = 240;

/// For pictures, pixels darker than this fraction of the average intensity are part of the
/// border.
const ADAPTIVE_FACTOR: f64 = 0.8;

/// How to separate border pixels from background pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Threshold {
    /// Pixels darker than the value are border pixels. Suitable for line drawings on a white
    /// background.
    Fixed(u8),

    /// The contrast is stretched, and then pixels darker than 80% of the average intensity are
    /// border pixels. Suitable for photos and scans.
    Adaptive,
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Fixed(DRAWING_THRESHOLD)
    }
}

/// Stretch the pixel values to use the full 0-255 range.
fn autocontrast(gray: &mut GrayImage) {
    let (min, max) = gray
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));
    if max <= min {
        return;
    }
    let range: f64 = (max - min) as f64;
    for p in gray.pixels_mut() {
        p[0] = (((p[0] - min) as f64) * 255.0 / range).round() as u8;
    }
}

/// Return the border mask of a square grayscale picture.
pub fn border_from_gray(gray: &GrayImage, threshold: Threshold) -> Mask {
    let size: usize = gray.width().min(gray.height()) as usize;
    match threshold {
        Threshold::Fixed(v) => border_below(gray, size, v as f64),
        Threshold::Adaptive => {
            let mut stretched: GrayImage = gray.clone();
            autocontrast(&mut stretched);
            let total: f64 = stretched.pixels().map(|p| p[0] as f64).sum();
            let mean: f64 = total / (stretched.width() * stretched.height()).max(1) as f64;
            border_below(&stretched, size, mean * ADAPTIVE_FACTOR)
        }
    }
}

/// Mark the pixels darker than the cutoff.
fn border_below(gray: &GrayImage, size: usize, cutoff: f64) -> Mask {
    let mut border: Mask = Mask::filled(size);
    for i in 0..size {
        for j in 0..size {
            let value: u8 = gray.get_pixel(j as u32, i as u32)[0];
            border.set(i, j, (value as f64) < cutoff);
        }
    }
    border
}

/// Find the cell where the flood fill starts.
///
/// The center of the grid is preferred, then its eight neighbors, and then the first cell that
/// is not part of the border, in row-major order.
fn seed(border: &Mask) -> Option<(usize, usize)> {
    let size: usize = border.size();
    let center: isize = (size / 2) as isize;
    let around: [(isize, isize); 9] = [
        (0, 0),
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (-1, -1),
        (1, -1),
        (-1, 1),
    ];

    around
        .iter()
        .map(|(di, dj)| (center + di, center + dj))
        .filter(|(i, j)| *i >= 0 && *j >= 0 && *i < size as isize && *j < size as isize)
        .map(|(i, j)| (i as usize, j as usize))
        .find(|(i, j)| !border.get(*i, *j))
        .or_else(|| {
            (0..size)
                .flat_map(|i| (0..size).map(move |j| (i, j)))
                .find(|(i, j)| !border.get(*i, *j))
        })
}

/// Fill the inside of a border.
///
/// The fill spreads to the four direct neighbors of each cell and stops on border cells.
/// Return the union of the border and of the filled cells.
/// When every cell is a border cell, the border is returned as is.
pub fn fill_outline(border: &Mask) -> Mask {
    let mut filled: Mask = border.clone();
    let (start_i, start_j) = match seed(border) {
        Some(s) => s,
        None => return filled,
    };
    debug!("Flood fill starts at ({start_i}, {start_j})");

    let size: usize = border.size();
    let mut stack: Vec<(usize, usize)> = vec![(start_i, start_j)];
    while let Some((i, j)) = stack.pop() {
        if border.get(i, j) || filled.get(i, j) {
            continue;
        }
        filled.set(i, j, true);
        if i > 0 {
            stack.push((i - 1, j));
        }
        if i + 1 < size {
            stack.push((i + 1, j));
        }
        if j > 0 {
            stack.push((i, j - 1));
        }
        if j + 1 < size {
            stack.push((i, j + 1));
        }
    }
    filled
}

/// Build a mask from a picture.
pub fn mask_from_image(image: &DynamicImage, size: usize, threshold: Threshold) -> Mask {
    let gray: GrayImage = image.to_luma8();
    let resized: GrayImage =
        imageops::resize(&gray, size as u32, size as u32, FilterType::Lanczos3);
    let border: Mask = border_from_gray(&resized, threshold);

    if border.count() == 0 {
        warn!("No border detected in the picture: using the whole grid");
        return Mask::filled(size);
    }
    let mask: Mask = fill_outline(&border);
    if log_enabled!(Level::Debug) {
        debug!("Mask from picture:\n{mask}");
    }
    mask
}

/// Build a mask from an encoded picture (PNG, JPEG, ...).
pub fn mask_from_bytes(bytes: &[u8], size: usize, threshold: Threshold) -> Mask {
    match image::load_from_memory(bytes) {
        Ok(img) => mask_from_image(&img, size, threshold),
        Err(e) => {
            warn!("Cannot decode the picture: {e}: using the whole grid");
            Mask::filled(size)
        }
    }
}

/// Build a mask from a picture file.
pub fn mask_from_file(path: &Path, size: usize, threshold: Threshold) -> Mask {
    match image::open(path) {
        Ok(img) => mask_from_image(&img, size, threshold),
        Err(e) => {
            warn!("Cannot read the picture {path:?}: {e}: using the whole grid");
            Mask::filled(size)
        }
    }
}
