/*
generator.rs

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

//! Generate shaped word-search puzzles.
//!
//! A puzzle is built in three steps:
//!
//! * The [`sizer`] module chooses the dimension of the square grid from the length of the
//!   longest word and from the shape family.
//!
//! * A [`shapes::MaskProvider`] object returns the [`mask::Mask`] for the shape name at that
//!   dimension.
//!   Built-in shapes are compositions of [`geometry::Region`] primitives and are rasterized on
//!   demand.
//!   Custom shapes are stored in a [`registry::ShapeRegistry`] object, which also acts as a
//!   provider.
//!   Custom shapes are usually drawn or uploaded, and converted into masks with the [`outline`]
//!   module.
//!
//! * A [`placement::WordPlacer`] object places the words, longest first, in the cells of the
//!   mask, along the allowed [`direction::Directions`], and fills the remaining cells with
//!   random letters.
//!   Placement is best effort: words that do not fit are dropped.
//!
//! The [`puzzle::generate_puzzle`] function runs the three steps and returns a
//! [`puzzle::Puzzle`] object.

pub mod direction;
pub mod geometry;
pub mod grid;
pub mod mask;
pub mod outline;
pub mod placement;
pub mod puzzle;
pub mod registry;
pub mod shapes;
pub mod sizer;
