//! Undo over the design session.
//!
//! Undo is transactional: the recorded action is only consumed once
//! its inverse has applied cleanly, so a failed undo leaves both the
//! design and the history as they were.

use tracing::debug;

use shapekit_core::ShapeError;

use crate::history::{Action, ActionKind};
use crate::model::Shape;
use crate::serialization::ShapeDocument;

use super::DesignerState;

impl DesignerState {
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Undo the most recent action. Returns false when the history is
    /// empty.
    pub fn undo(&mut self) -> Result<bool, ShapeError> {
        let action = match self.undo.peek() {
            Some(action) => action.clone(),
            None => return Ok(false),
        };
        match action.kind {
            ActionKind::Add => {
                self.collection
                    .remove(&action.shape_id)
                    .ok_or_else(|| ShapeError::ShapeNotFound {
                        id: action.shape_id.clone(),
                    })?;
                self.deselect_if(&action.shape_id);
            }
            ActionKind::Remove => {
                let restored = self.factory.from_document(&action.snapshot)?;
                let id = restored.id().to_string();
                if !self.collection.add(restored) {
                    return Err(ShapeError::DuplicateShapeId { id });
                }
            }
            ActionKind::Modify => {
                let shape = self.collection.get_mut(&action.shape_id)?;
                apply_snapshot(shape, &action.snapshot)?;
            }
        }
        self.undo.pop();
        self.is_modified = true;
        debug!(shape_id = %action.shape_id, ?action.kind, "undid action");
        Ok(true)
    }

    pub fn clear_history(&mut self) {
        self.undo.clear();
    }

    /// Remove every shape, recording one undoable removal per shape.
    pub fn clear_all(&mut self) {
        let snapshots: Vec<Action> = self
            .collection
            .iter()
            .map(|shape| {
                Action::new(
                    ActionKind::Remove,
                    shape.id(),
                    ShapeDocument::from_shape(shape),
                )
            })
            .collect();
        if snapshots.is_empty() {
            return;
        }
        for action in snapshots {
            self.undo.push(action);
        }
        self.collection.clear();
        self.selected_id = None;
        self.is_modified = true;
        debug!("cleared all shapes");
    }
}

/// Restore a shape's editable fields from a snapshot taken before a
/// modification. The snapshot came from a valid shape, so each setter
/// succeeds unless the document was tampered with.
fn apply_snapshot(shape: &mut Shape, doc: &ShapeDocument) -> Result<(), ShapeError> {
    for (name, value) in [
        ("width", doc.width),
        ("height", doc.height),
        ("side", doc.side),
        ("base", doc.base),
        ("radius", doc.radius),
    ] {
        if let Some(value) = value {
            shape.set_dimension(name, value)?;
        }
    }
    shape.set_position(doc.position.x, doc.position.y)?;
    shape.set_color(&doc.color)?;
    Ok(())
}
