/*
geometry.rs

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

//! Plane regions used to describe the built-in shapes.
//!
//! Regions are expressed in plane coordinates centered on the grid: `x` grows to the right and
//! `y` grows upwards.
//! For a grid cell at `(row, column)`, `x = column - center` and `y = center - row`, where
//! `center = size / 2`.
//!
//! Shapes are built by combining primitives:
//!
//! ```
//! use wordshape::generator::geometry::Region;
//!
//! // A disc with a horizontal bar through it
//! let r = Region::disc(0.0, 0.0, 3.0).or(Region::rect(-6.0, 6.0, -1.0, 1.0));
//! assert!(r.contains(5.0, 0.0));
//! assert!(!r.contains(0.0, 5.0));
//! ```

/// Region of the plane.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Points where `a * x + b * y <= c`.
    HalfPlane { a: f64, b: f64, c: f64 },

    /// Axis-aligned rectangle, bounds included. Bounds can be infinite.
    Rect { x0: f64, x1: f64, y0: f64, y1: f64 },

    /// Disc of radius `r`, boundary included.
    Disc { cx: f64, cy: f64, r: f64 },

    /// Ellipse with the `rx` and `ry` semi-axes, boundary included.
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },

    /// The region and its reflection across the vertical axis (`x = 0`).
    MirrorX(Box<Region>),

    /// Points in at least one of the regions.
    Union(Vec<Region>),

    /// Points in all the regions.
    Intersection(Vec<Region>),
}

impl Region {
    /// Create a half-plane region: `a * x + b * y <= c`.
    pub fn half_plane(a: f64, b: f64, c: f64) -> Self {
        Region::HalfPlane { a, b, c }
    }

    /// Create a rectangle region.
    pub fn rect(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Region::Rect { x0, x1, y0, y1 }
    }

    /// Create a disc region.
    pub fn disc(cx: f64, cy: f64, r: f64) -> Self {
        Region::Disc { cx, cy, r }
    }

    /// Create an ellipse region.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Region::Ellipse { cx, cy, rx, ry }
    }

    /// Region made of the given regions (union).
    pub fn any(regions: Vec<Region>) -> Self {
        Region::Union(regions)
    }

    /// Region common to the given regions (intersection).
    pub fn all(regions: Vec<Region>) -> Self {
        Region::Intersection(regions)
    }

    /// Union of this region and another one.
    pub fn or(self, other: Region) -> Self {
        match self {
            Region::Union(mut v) => {
                v.push(other);
                Region::Union(v)
            }
            r => Region::Union(vec![r, other]),
        }
    }

    /// Intersection of this region and another one.
    pub fn and(self, other: Region) -> Self {
        match self {
            Region::Intersection(mut v) => {
                v.push(other);
                Region::Intersection(v)
            }
            r => Region::Intersection(vec![r, other]),
        }
    }

    /// This region plus its mirror image across the vertical axis.
    pub fn mirrored(self) -> Self {
        Region::MirrorX(Box::new(self))
    }

    /// Whether the point is inside the region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Region::HalfPlane { a, b, c } => a * x + b * y <= *c,
            Region::Rect { x0, x1, y0, y1 } => x >= *x0 && x <= *x1 && y >= *y0 && y <= *y1,
            Region::Disc { cx, cy, r } => (x - cx).powi(2) + (y - cy).powi(2) <= r * r,
            Region::Ellipse { cx, cy, rx, ry } => {
                ((x - cx) / rx).powi(2) + ((y - cy) / ry).powi(2) <= 1.0
            }
            Region::MirrorX(r) => r.contains(x, y) || r.contains(-x, y),
            Region::Union(v) => v.iter().any(|r| r.contains(x, y)),
            Region::Intersection(v) => v.iter().all(|r| r.contains(x, y)),
        }
    }
}
