//! Insertion-ordered shape collection keyed by id.
//!
//! Lookup is by id through a map; iteration preserves the order shapes
//! were added, which is the order listings and previews render in.

use std::collections::HashMap;

use shapekit_core::ShapeError;

use crate::model::Shape;

#[derive(Debug, Clone, Default)]
pub struct ShapeCollection {
    shapes: HashMap<String, Shape>,
    order: Vec<String>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Returns false if a shape with the same id is
    /// already present, in which case the collection is unchanged.
    pub fn add(&mut self, shape: Shape) -> bool {
        let id = shape.id().to_string();
        if self.shapes.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.shapes.insert(id, shape);
        true
    }

    /// Remove a shape by id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Shape> {
        let removed = self.shapes.remove(id)?;
        self.order.retain(|entry| entry != id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Result<&Shape, ShapeError> {
        self.shapes.get(id).ok_or_else(|| ShapeError::ShapeNotFound {
            id: id.to_string(),
        })
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Shape, ShapeError> {
        self.shapes
            .get_mut(id)
            .ok_or_else(|| ShapeError::ShapeNotFound {
                id: id.to_string(),
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shapes.contains_key(id)
    }

    /// Iterate shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// The most recently added shape, if any.
    pub fn last(&self) -> Option<&Shape> {
        self.order.last().and_then(|id| self.shapes.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }
}
