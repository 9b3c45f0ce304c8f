/*
shapes.rs

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

//! Built-in puzzle outlines.
//!
//! Each [`Shape`] is described as a [`Region`] of the plane and rasterized into a [`Mask`].
//! The geometry only depends on `center = size / 2`, so the same shape scales with the grid.

use log::warn;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, FromRepr};

use super::geometry::Region;
use super::mask::Mask;

/// Name of the shape that does not carve the grid.
pub const SQUARE: &str = "square";

/// Built-in shapes.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, FromRepr, Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Heart,
    Star,
    Diamond,
    Triangle,
    Hexagon,
    Dog,
    Cat,
    Fish,
    Butterfly,
    Flower,
    Tree,
    House,
    Car,
}

impl Shape {
    /// Return all the built-in shapes.
    pub fn all() -> Vec<Shape> {
        (0..=u8::MAX).map_while(Shape::from_repr).collect()
    }

    /// Retrieve a built-in shape by name.
    pub fn from_name(name: &str) -> Option<Shape> {
        Self::all().into_iter().find(|s| s.as_ref() == name)
    }

    /// Return the region of the plane covered by the shape, for the given grid center.
    pub fn region(&self, center: f64) -> Region {
        let c: f64 = center;
        let inf: f64 = f64::INFINITY;

        match self {
            Shape::Square => Region::rect(-inf, inf, -inf, inf),

            Shape::Circle => Region::disc(0.0, 0.0, c - 0.5),

            Shape::Diamond => Region::all(vec![
                Region::half_plane(1.0, 1.0, c),
                Region::half_plane(-1.0, 1.0, c),
                Region::half_plane(1.0, -1.0, c),
                Region::half_plane(-1.0, -1.0, c),
            ]),

            // Apex at the top center, base on the middle row
            Shape::Triangle => Region::all(vec![
                Region::half_plane(0.0, -1.0, 0.0),
                Region::half_plane(-1.0, 1.0, c),
                Region::half_plane(1.0, 1.0, c),
            ]),

            Shape::Hexagon => Region::all(vec![
                Region::rect(-c, c, -c, c),
                Region::half_plane(1.0, 1.0, c),
                Region::half_plane(-1.0, -1.0, c),
            ]),

            Shape::Heart => {
                // Two lobes over a triangle pointing down, in a frame scaled to 80% of the grid
                let s: f64 = c * 0.8;
                let lobe_radius: f64 = 0.5_f64.sqrt() * s;
                Region::any(vec![
                    Region::disc(-0.5 * s, 0.5 * s, lobe_radius),
                    Region::disc(0.5 * s, 0.5 * s, lobe_radius),
                    Region::all(vec![
                        Region::rect(-inf, inf, -s, 0.5 * s),
                        Region::half_plane(1.0, 1.0, s),
                        Region::half_plane(-1.0, 1.0, s),
                    ]),
                ])
            }

            Shape::Star => {
                let arm: f64 = c * 0.2;
                let ray: f64 = c * 0.15;
                Region::any(vec![
                    Region::disc(0.0, 0.0, c * 0.4),
                    // North, south, east, and west arms
                    Region::rect(-arm, arm, -c, c),
                    Region::rect(-c, c, -arm, arm),
                    // Diagonal rays
                    Region::all(vec![
                        Region::half_plane(1.0, -1.0, ray),
                        Region::half_plane(-1.0, 1.0, ray),
                        Region::rect(0.0, inf, 0.0, inf).or(Region::rect(-inf, 0.0, -inf, 0.0)),
                    ]),
                    Region::all(vec![
                        Region::half_plane(1.0, 1.0, ray),
                        Region::half_plane(-1.0, -1.0, ray),
                        Region::rect(-inf, 0.0, 0.0, inf).or(Region::rect(0.0, inf, -inf, 0.0)),
                    ]),
                ])
                .and(Region::disc(0.0, 0.0, c))
            }

            // The dog also has a snout
            Shape::Dog => {
                Self::pet(c, 0.3, 0.5).or(Region::rect(-c * 0.2, c * 0.2, -inf, -c * 0.2))
            }

            Shape::Cat => Self::pet(c, 0.2, 0.4),

            Shape::Fish => Region::any(vec![
                Region::ellipse(0.0, 0.0, c * 0.8_f64.sqrt(), c * 0.5_f64.sqrt()),
                Region::rect(-inf, -c * 0.5, -c * 0.3, c * 0.3),
            ]),

            Shape::Butterfly => Region::ellipse(c * 0.3, 0.0, c * 0.4, c * 0.6).mirrored(),

            Shape::Flower => {
                let petal: f64 = c * 0.3;
                Region::any(vec![
                    Region::disc(c * 0.4, 0.0, petal),
                    Region::disc(-c * 0.4, 0.0, petal),
                    Region::disc(0.0, c * 0.4, petal),
                    Region::disc(0.0, -c * 0.4, petal),
                    Region::disc(0.0, 0.0, c * 0.2),
                ])
            }

            Shape::Tree => Region::any(vec![
                // Trunk
                Region::rect(-c * 0.15, c * 0.15, -inf, -c * 0.2),
                // Crown: |x| <= 0.7 * (y + 0.2c)
                Region::all(vec![
                    Region::rect(-inf, inf, -c * 0.2, inf),
                    Region::half_plane(1.0, -0.7, c * 0.14),
                    Region::half_plane(-1.0, -0.7, c * 0.14),
                ]),
                // Branches
                Region::rect(-c * 0.6, c * 0.6, -c * 0.1, c * 0.1),
            ]),

            Shape::House => Region::any(vec![
                Region::rect(-c * 0.4, c * 0.4, -c * 0.3, c * 0.3),
                // Roof: |x| <= 0.8c - y / 2
                Region::all(vec![
                    Region::rect(-inf, inf, c * 0.3, inf),
                    Region::half_plane(1.0, 0.5, c * 0.8),
                    Region::half_plane(-1.0, 0.5, c * 0.8),
                ]),
            ]),

            Shape::Car => Region::any(vec![
                // Body and cabin
                Region::rect(-c * 0.7, c * 0.7, -c * 0.25, c * 0.25),
                Region::rect(-c * 0.5, c * 0.5, c * 0.1, c * 0.25),
                // Wheels
                Region::disc(c * 0.45, c * 0.18, c * 0.12).mirrored(),
                // Bumpers
                Region::rect(c * 0.6, inf, -c * 0.2, c * 0.2).mirrored(),
            ]),
        }
    }

    /// Body, head, ears, and tail shared by the dog and the cat.
    ///
    /// Ears span `ear_in * c <= |x| <= ear_out * c` above `y = 0.1 * c`.
    fn pet(c: f64, ear_in: f64, ear_out: f64) -> Region {
        let inf: f64 = f64::INFINITY;
        Region::any(vec![
            Region::ellipse(0.0, 0.0, c * 0.8, c * 0.6),
            Region::ellipse(0.0, c * 0.2, c * 0.7, c * 0.5),
            Region::rect(c * ear_in, c * ear_out, c * 0.1, inf).mirrored(),
            Region::rect(c * 0.6, inf, -c * 0.3, c * 0.3),
        ])
    }

    /// Rasterize the shape into a mask of the given size.
    pub fn mask(&self, size: usize) -> Mask {
        match self {
            Shape::Square => Mask::filled(size),
            _ => Mask::from_region(&self.region((size / 2) as f64), size),
        }
    }
}

/// Object that turns a shape name into a mask.
pub trait MaskProvider {
    /// Return the mask for the shape name, at the given size.
    ///
    /// Unknown names never fail: the filled square mask is returned instead.
    fn mask(&self, name: &str, size: usize) -> Mask;

    /// Names of the shapes known by the provider.
    fn names(&self) -> Vec<String>;
}

/// Provider limited to the built-in shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinShapes;

impl MaskProvider for BuiltinShapes {
    fn mask(&self, name: &str, size: usize) -> Mask {
        match Shape::from_name(name) {
            Some(s) => s.mask(size),
            None => {
                warn!("Unknown shape '{name}': using the {SQUARE} shape");
                Mask::filled(size)
            }
        }
    }

    fn names(&self) -> Vec<String> {
        Shape::all().iter().map(|s| s.as_ref().to_string()).collect()
    }
}
