//! Shape factory: constructs shapes from a type tag and a dimension
//! map, and reconstructs them from persisted documents.
//!
//! Id generation is injected so tests can produce deterministic ids.

use std::collections::HashMap;
use std::str::FromStr;

use uuid::Uuid;

use shapekit_core::ShapeError;

use crate::model::{Circle, Rectangle, Shape, ShapeType, Square, Triangle};
use crate::serialization::ShapeDocument;

/// Source of process-unique shape ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdGenerator {
    /// Random UUID-backed ids (the default).
    Random,
    /// Counter-backed ids for deterministic tests.
    Sequential {
        /// The next counter value to hand out.
        next: u64,
    },
}

impl IdGenerator {
    pub fn next_id(&mut self) -> String {
        match self {
            Self::Random => format!("shape_{}", Uuid::new_v4().simple()),
            Self::Sequential { next } => {
                let id = format!("shape_{}", next);
                *next += 1;
                id
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::Random
    }
}

/// Constructs shapes from type tags, dimension maps, and persisted
/// documents. Dimension validation is delegated to the shape
/// constructors, so a failed creation never yields a partial shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeFactory {
    ids: IdGenerator,
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Create a shape from a type tag and a dimension map.
    ///
    /// Missing dimension fields fail validation in the shape
    /// constructor; an unknown tag fails with `InvalidShapeType`.
    pub fn create(
        &mut self,
        type_tag: &str,
        dimensions: &HashMap<String, f64>,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<Shape, ShapeError> {
        let ty = ShapeType::from_str(type_tag)?;
        let id = self.ids.next_id();
        let dim = |name: &str| dimensions.get(name).copied().unwrap_or(f64::NAN);
        match ty {
            ShapeType::Rectangle => Ok(Shape::Rectangle(Rectangle::new(
                id,
                dim("width"),
                dim("height"),
                x,
                y,
                color,
            )?)),
            ShapeType::Square => Ok(Shape::Square(Square::new(id, dim("side"), x, y, color)?)),
            ShapeType::Triangle => Ok(Shape::Triangle(Triangle::new(
                id,
                dim("base"),
                dim("height"),
                x,
                y,
                color,
            )?)),
            ShapeType::Circle => Ok(Shape::Circle(Circle::new(id, dim("radius"), x, y, color)?)),
        }
    }

    /// Reconstruct a shape from its persisted document.
    ///
    /// The document's type tag drives the dispatch; dimension and
    /// color validation apply as at creation. The reconstructed shape
    /// receives a fresh id and creation timestamp.
    pub fn from_document(&mut self, doc: &ShapeDocument) -> Result<Shape, ShapeError> {
        let ty = ShapeType::from_str(&doc.shape_type)?;
        let id = self.ids.next_id();
        let x = doc.position.x;
        let y = doc.position.y;
        let color = doc.color.as_str();
        let dim = |field: Option<f64>| field.unwrap_or(f64::NAN);
        match ty {
            ShapeType::Rectangle => Ok(Shape::Rectangle(Rectangle::new(
                id,
                dim(doc.width),
                dim(doc.height),
                x,
                y,
                color,
            )?)),
            ShapeType::Square => Ok(Shape::Square(Square::new(id, dim(doc.side), x, y, color)?)),
            ShapeType::Triangle => Ok(Shape::Triangle(Triangle::new(
                id,
                dim(doc.base),
                dim(doc.height),
                x,
                y,
                color,
            )?)),
            ShapeType::Circle => Ok(Shape::Circle(Circle::new(
                id,
                dim(doc.radius),
                x,
                y,
                color,
            )?)),
        }
    }

    /// Duplicate a shape: same dimensions, position, and color, with a
    /// fresh id and creation timestamp.
    pub fn duplicate(&mut self, shape: &Shape) -> Result<Shape, ShapeError> {
        self.from_document(&ShapeDocument::from_shape(shape))
    }

    /// Ordered dimension field names for a type tag.
    ///
    /// Unknown tags yield an empty list rather than an error; dimension
    /// entry surfaces use this to build their inputs.
    pub fn dimension_fields(type_tag: &str) -> &'static [&'static str] {
        match type_tag {
            "rectangle" => &["width", "height"],
            "square" => &["side"],
            "triangle" => &["base", "height"],
            "circle" => &["radius"],
            _ => &[],
        }
    }

    /// All supported type tags, in display order.
    pub fn shape_types() -> [&'static str; 4] {
        ["rectangle", "square", "triangle", "circle"]
    }
}
