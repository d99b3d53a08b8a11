//! Saving and loading designs.
//!
//! The design text format is produced by the serialization module;
//! this layer binds it to the filesystem and to the session's file
//! association. Loading is all or nothing: the current design is only
//! replaced once the entire file has parsed and reconstructed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use shapekit_core::SerializationError;

use crate::serialization::{deserialize_design, serialize_design};

use super::DesignerState;

impl DesignerState {
    /// Serialize the current design to text.
    pub fn save_design(&self) -> Result<String, SerializationError> {
        serialize_design(self.collection.iter(), None)
    }

    /// Replace the current design with one parsed from text.
    ///
    /// Shape ids and creation timestamps are regenerated; the undo
    /// history and selection are reset. On any error the current
    /// design is left untouched.
    pub fn load_design(&mut self, text: &str) -> Result<(), SerializationError> {
        let (shapes, _metadata) = deserialize_design(text, &mut self.factory)?;
        self.collection.clear();
        for shape in shapes {
            self.collection.add(shape);
        }
        self.undo.clear();
        self.selected_id = None;
        self.is_modified = false;
        Ok(())
    }

    /// Save the design to a file and adopt it as the current file.
    pub fn save_to_file(&mut self, path: &Path) -> Result<()> {
        let text = self
            .save_design()
            .with_context(|| format!("Failed to serialize design '{}'", self.design_name))?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write design file: {}", path.display()))?;
        self.current_file_path = Some(path.to_path_buf());
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.design_name = stem.to_string();
        }
        self.is_modified = false;
        info!(path = %path.display(), shapes = self.collection.len(), "saved design");
        Ok(())
    }

    /// Load a design from a file and adopt it as the current file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read design file: {}", path.display()))?;
        self.load_design(&text)
            .with_context(|| format!("Failed to parse design file: {}", path.display()))?;
        self.current_file_path = Some(path.to_path_buf());
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.design_name = stem.to_string();
        }
        info!(path = %path.display(), shapes = self.collection.len(), "loaded design");
        Ok(())
    }

    /// Discard everything and start an empty, unnamed design.
    pub fn new_design(&mut self) {
        self.collection.clear();
        self.undo.clear();
        self.selected_id = None;
        self.design_name = super::DEFAULT_DESIGN_NAME.to_string();
        self.current_file_path = None;
        self.is_modified = false;
    }
}
