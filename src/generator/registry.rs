/*
registry.rs

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

//! Store of the custom shapes.
//!
//! Custom shapes are drawn or uploaded by the user and kept by name.
//! The registry can be shared between threads: updates are serialized by a lock, and readers
//! always get a copy of a mask as it was when they asked for it.
//! Adding a shape with an existing name replaces it.

use log::{Level, debug, info, log_enabled};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::mask::Mask;
use super::shapes::{BuiltinShapes, MaskProvider};

/// Custom shape store.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    /// Masks indexed by shape name. Each mask keeps the size it was created with.
    shapes: RwLock<BTreeMap<String, Mask>>,
}

impl ShapeRegistry {
    /// Create an empty [`ShapeRegistry`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`ShapeRegistry`] object that contains the given shapes.
    pub fn from_shapes(shapes: BTreeMap<String, Mask>) -> Self {
        Self {
            shapes: RwLock::new(shapes),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Mask>> {
        self.shapes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Mask>> {
        self.shapes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace a custom shape.
    pub fn add(&self, name: &str, mask: Mask) {
        let size: usize = mask.size();
        if self.write().insert(name.to_string(), mask).is_some() {
            info!("Replaced custom shape: {name} ({size}x{size})");
        } else {
            info!("Added custom shape: {name} ({size}x{size})");
        }
    }

    /// Return a copy of the custom shape mask, or None if there is no such shape.
    pub fn get(&self, name: &str) -> Option<Mask> {
        self.read().get(name).cloned()
    }

    /// Return the names of the custom shapes, in alphabetical order.
    pub fn list(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Delete a custom shape.
    ///
    /// Return `false` if the shape does not exist.
    pub fn delete(&self, name: &str) -> bool {
        let found: bool = self.write().remove(name).is_some();
        if found {
            info!("Deleted custom shape: {name}");
        }
        found
    }

    /// Delete all the custom shapes and return the number of deleted shapes.
    pub fn clear(&self) -> usize {
        let mut shapes = self.write();
        let count: usize = shapes.len();
        shapes.clear();
        info!("Cleared {count} custom shapes");
        count
    }

    /// Number of custom shapes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Return a copy of all the custom shapes.
    pub fn snapshot(&self) -> BTreeMap<String, Mask> {
        self.read().clone()
    }
}

/// Custom shapes first, then the built-in shapes.
///
/// Custom masks are resized to the requested size with nearest-neighbour sampling.
impl MaskProvider for ShapeRegistry {
    fn mask(&self, name: &str, size: usize) -> Mask {
        let mask: Mask = match self.get(name) {
            Some(m) if m.size() == size => m,
            Some(m) => {
                debug!("Resizing custom shape {name} from {} to {size}", m.size());
                m.resize(size)
            }
            None => return BuiltinShapes.mask(name, size),
        };
        if log_enabled!(Level::Debug) {
            debug!("Custom shape {name}:\n{mask}");
        }
        mask
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = BuiltinShapes.names();
        let custom: Vec<String> = self
            .list()
            .into_iter()
            .filter(|n| !names.contains(n))
            .collect();
        names.extend(custom);
        names
    }
}
