//! Central mutable state for a design session.
//!
//! `DesignerState` owns the shape collection, the undo history, the
//! factory, the current selection, and the file association. Every
//! mutation flows through here so that undo records and the modified
//! flag stay consistent with the collection.

mod file_io;
mod history;
mod shapes;

use std::path::PathBuf;

use shapekit_core::ShapeError;

use crate::collection::ShapeCollection;
use crate::factory::{IdGenerator, ShapeFactory};
use crate::history::UndoManager;
use crate::model::Shape;

pub const DEFAULT_DESIGN_NAME: &str = "Untitled";

#[derive(Debug, Clone)]
pub struct DesignerState {
    collection: ShapeCollection,
    undo: UndoManager,
    factory: ShapeFactory,
    selected_id: Option<String>,
    design_name: String,
    current_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl DesignerState {
    pub fn new() -> Self {
        Self {
            collection: ShapeCollection::new(),
            undo: UndoManager::default(),
            factory: ShapeFactory::new(),
            selected_id: None,
            design_name: DEFAULT_DESIGN_NAME.to_string(),
            current_file_path: None,
            is_modified: false,
        }
    }

    /// A state whose factory uses the given id generator. Tests use
    /// this with sequential ids.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            factory: ShapeFactory::with_id_generator(ids),
            ..Self::new()
        }
    }

    /// Select a shape by id, or clear the selection with `None`.
    pub fn select_shape(&mut self, id: Option<&str>) -> Result<(), ShapeError> {
        match id {
            Some(id) => {
                self.collection.get(id)?;
                self.selected_id = Some(id.to_string());
            }
            None => self.selected_id = None,
        }
        Ok(())
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.collection.get(id).ok())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.collection.iter()
    }

    pub fn shape_count(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    pub fn design_name(&self) -> &str {
        &self.design_name
    }

    pub fn set_design_name(&mut self, name: impl Into<String>) {
        self.design_name = name.into();
        self.is_modified = true;
    }

    pub fn current_file_path(&self) -> Option<&PathBuf> {
        self.current_file_path.as_ref()
    }

    /// The design name with an asterisk suffix when there are unsaved
    /// changes.
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.design_name)
        } else {
            self.design_name.clone()
        }
    }

    fn deselect_if(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
