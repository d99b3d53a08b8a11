//! Shape lifecycle and editing operations.
//!
//! Each successful mutation records an undo action carrying the
//! shape's prior snapshot, then raises the modified flag. Failed
//! operations record nothing and leave the collection untouched.

use std::collections::HashMap;

use tracing::debug;

use shapekit_core::{ShapeError, Unit};

use crate::history::{Action, ActionKind};
use crate::model::{Calculation, ScaleFactor, Shape};
use crate::preview;
use crate::serialization::ShapeDocument;

use super::DesignerState;

impl DesignerState {
    /// Create a shape and add it to the design. The new shape becomes
    /// the selection.
    pub fn add_shape(
        &mut self,
        type_tag: &str,
        dimensions: &HashMap<String, f64>,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<&Shape, ShapeError> {
        let shape = self.factory.create(type_tag, dimensions, x, y, color)?;
        let id = shape.id().to_string();
        let snapshot = ShapeDocument::from_shape(&shape);
        self.collection.add(shape);
        self.undo.push(Action::new(ActionKind::Add, &id, snapshot));
        self.selected_id = Some(id.clone());
        self.is_modified = true;
        debug!(shape_id = %id, shape_type = type_tag, "added shape");
        self.collection.get(&id)
    }

    /// Remove a shape by id, returning it. The removal is undoable.
    pub fn remove_shape(&mut self, id: &str) -> Result<Shape, ShapeError> {
        let removed = self
            .collection
            .remove(id)
            .ok_or_else(|| ShapeError::ShapeNotFound { id: id.to_string() })?;
        let snapshot = ShapeDocument::from_shape(&removed);
        self.undo.push(Action::new(ActionKind::Remove, id, snapshot));
        self.deselect_if(id);
        self.is_modified = true;
        debug!(shape_id = id, "removed shape");
        Ok(removed)
    }

    /// Set one dimension field of a shape by name.
    pub fn set_shape_dimension(
        &mut self,
        id: &str,
        name: &str,
        value: f64,
    ) -> Result<(), ShapeError> {
        let snapshot = ShapeDocument::from_shape(self.collection.get(id)?);
        self.collection.get_mut(id)?.set_dimension(name, value)?;
        self.undo.push(Action::new(ActionKind::Modify, id, snapshot));
        self.is_modified = true;
        debug!(shape_id = id, dimension = name, value, "set dimension");
        Ok(())
    }

    pub fn set_shape_color(&mut self, id: &str, color: &str) -> Result<(), ShapeError> {
        let snapshot = ShapeDocument::from_shape(self.collection.get(id)?);
        self.collection.get_mut(id)?.set_color(color)?;
        self.undo.push(Action::new(ActionKind::Modify, id, snapshot));
        self.is_modified = true;
        Ok(())
    }

    pub fn scale_shape(&mut self, id: &str, factor: ScaleFactor) -> Result<(), ShapeError> {
        let snapshot = ShapeDocument::from_shape(self.collection.get(id)?);
        self.collection.get_mut(id)?.scale(factor)?;
        self.undo.push(Action::new(ActionKind::Modify, id, snapshot));
        self.is_modified = true;
        Ok(())
    }

    pub fn translate_shape(&mut self, id: &str, dx: f64, dy: f64) -> Result<(), ShapeError> {
        let snapshot = ShapeDocument::from_shape(self.collection.get(id)?);
        self.collection.get_mut(id)?.translate(dx, dy)?;
        self.undo.push(Action::new(ActionKind::Modify, id, snapshot));
        self.is_modified = true;
        Ok(())
    }

    /// Duplicate a shape. The copy gets a fresh id, becomes the
    /// selection, and its addition is undoable.
    pub fn duplicate_shape(&mut self, id: &str) -> Result<&Shape, ShapeError> {
        let copy = self.factory.duplicate(self.collection.get(id)?)?;
        let copy_id = copy.id().to_string();
        let snapshot = ShapeDocument::from_shape(&copy);
        self.collection.add(copy);
        self.undo
            .push(Action::new(ActionKind::Add, &copy_id, snapshot));
        self.selected_id = Some(copy_id.clone());
        self.is_modified = true;
        debug!(source_id = id, shape_id = %copy_id, "duplicated shape");
        self.collection.get(&copy_id)
    }

    /// Area and perimeter of a shape, converted from centimeters when
    /// a unit is given.
    pub fn calculate(&self, id: &str, unit: Option<Unit>) -> Result<Calculation, ShapeError> {
        Ok(self.collection.get(id)?.calc(unit))
    }

    pub fn ascii_preview(&self, id: &str) -> Result<String, ShapeError> {
        Ok(preview::ascii_preview(self.collection.get(id)?))
    }
}
