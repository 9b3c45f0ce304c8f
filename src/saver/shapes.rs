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

//! Save and restore the custom shapes.
//!
//! The custom shapes are stored in a JSON file that maps each shape name to its mask, given as
//! rows of booleans.
//! Masks are verified when loaded: a mask that is not square makes the whole file invalid.

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::generator::mask::Mask;
use crate::generator::registry::ShapeRegistry;

/// Object to save and restore the custom shapes.
pub struct SaverShapes {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverShapes {
    /// Create a [`SaverShapes`] object that uses the given file.
    pub fn new(save_file: &Path) -> Self {
        debug!("Custom shapes file: {save_file:?}");
        Self {
            save_file: save_file.to_path_buf(),
        }
    }

    /// Path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the custom shapes from the save file.
    ///
    /// Return an empty registry if the file does not exist.
    pub fn get_registry(&self) -> Result<ShapeRegistry, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(ShapeRegistry::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let shapes: BTreeMap<String, Mask> = serde_json::from_reader(reader)?;
        debug!("Loaded {} custom shapes", shapes.len());
        Ok(ShapeRegistry::from_shapes(shapes))
    }

    /// Save the custom shapes.
    pub fn save_registry(&self, registry: &ShapeRegistry) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &registry.snapshot())?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the save file.
    ///
    /// Deleting a file that does not exist is not an error.
    pub fn delete_save(&self) -> Result<(), Box<dyn Error>> {
        match remove_file(&self.save_file) {
            Ok(()) => {
                debug!("Deleted {:?}", self.save_file);
                Ok(())
            }
            Err(error) => match error.kind() {
                ErrorKind::NotFound => Ok(()),
                _ => Err(Box::new(error)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverShapes = SaverShapes::new(&dir.path().join("none.json"));
        assert!(saver.get_registry().unwrap().is_empty());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverShapes = SaverShapes::new(&dir.path().join("shapes.json"));
        let registry: ShapeRegistry = ShapeRegistry::new();
        let arrow: Mask = Mask::from_ascii_art("  o\nooooo\n  o").unwrap();
        registry.add("arrow", arrow.clone());
        registry.add("block", Mask::filled(4));
        saver.save_registry(&registry).unwrap();

        let loaded: ShapeRegistry = saver.get_registry().unwrap();
        assert_eq!(loaded.list(), vec!["arrow", "block"]);
        assert_eq!(loaded.get("arrow"), Some(arrow));

        saver.delete_save().unwrap();
        assert!(!saver.path().exists());
        assert!(saver.get_registry().unwrap().is_empty());
        // Already deleted
        assert!(saver.delete_save().is_ok());
    }

    #[test]
    fn invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("shapes.json");
        let saver: SaverShapes = SaverShapes::new(&path);

        fs::write(&path, "not json").unwrap();
        assert!(saver.get_registry().is_err());

        fs::write(&path, r#"{"bad": [[true, false], [true]]}"#).unwrap();
        assert!(saver.get_registry().is_err());
    }
}
