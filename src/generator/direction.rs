/*
direction.rs

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

//! Directions in which words can be read.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, FromRepr};

/// One of the eight reading directions.
///
/// The order of the variants is the order in which the placement engine tries them.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, FromRepr)]
#[repr(u8)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Direction {
    /// Return all the directions.
    pub fn all() -> Vec<Direction> {
        (0..=u8::MAX).map_while(Direction::from_repr).collect()
    }

    /// Row and column increments for moving one cell in that direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Whether the direction is horizontal, vertical, or diagonal.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::South | Direction::North)
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_horizontal() && !self.is_vertical()
    }
}

/// Ordered set of the directions allowed for a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Directions {
    directions: Vec<Direction>,
}

impl Default for Directions {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl Directions {
    /// Create a [`Directions`] object from the three direction flags.
    ///
    /// With all the flags set to `false`, the set is empty and no word can be placed.
    pub fn new(horizontal: bool, vertical: bool, diagonal: bool) -> Self {
        Self {
            directions: Direction::all()
                .into_iter()
                .filter(|d| {
                    (horizontal && d.is_horizontal())
                        || (vertical && d.is_vertical())
                        || (diagonal && d.is_diagonal())
                })
                .collect(),
        }
    }

    /// Whether no direction is allowed.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Number of allowed directions.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Iterate over the allowed directions, in the order in which they must be tried.
    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.directions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_vectors() {
        let all: Vec<Direction> = Direction::all();
        assert_eq!(all.len(), 8);
        let mut deltas: Vec<(isize, isize)> = all.iter().map(Direction::delta).collect();
        deltas.sort_unstable();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
    }

    #[test]
    fn flags() {
        assert_eq!(Directions::default().len(), 8);
        assert!(Directions::new(false, false, false).is_empty());

        let h: Vec<Direction> = Directions::new(true, false, false).iter().copied().collect();
        assert_eq!(h, vec![Direction::East, Direction::West]);

        let v: Vec<Direction> = Directions::new(false, true, false).iter().copied().collect();
        assert_eq!(v, vec![Direction::South, Direction::North]);

        let d: Directions = Directions::new(false, false, true);
        assert_eq!(d.len(), 4);
        assert!(d.iter().all(Direction::is_diagonal));
    }

    #[test]
    fn names() {
        assert_eq!(Direction::NorthEast.as_ref(), "north-east");
    }
}
