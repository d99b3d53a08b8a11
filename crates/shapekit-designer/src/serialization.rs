//! Serialization and deserialization for design files.
//!
//! Implements save/load of the versioned JSON design-state document:
//! a `version` tag, timestamps, one flat document per shape, and an
//! optional open metadata map. Loading is all-or-nothing: a single
//! malformed shape aborts the whole load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shapekit_core::SerializationError;

use crate::factory::ShapeFactory;
use crate::model::Shape;

/// Design file format version
pub const FILE_FORMAT_VERSION: &str = "1.0.0";

/// Serialized position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDocument {
    pub x: f64,
    pub y: f64,
}

/// Serialized shape data
///
/// One flat record per shape; dimension fields not carried by the
/// variant are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDocument {
    #[serde(rename = "type")]
    pub shape_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub position: PositionDocument,
    pub color: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ShapeDocument {
    /// Captures a shape's serializable form.
    ///
    /// The document is an independent value copy; mutating the live
    /// shape afterwards does not affect it.
    pub fn from_shape(shape: &Shape) -> Self {
        let mut doc = Self {
            shape_type: shape.shape_type().as_str().to_string(),
            id: shape.id().to_string(),
            width: None,
            height: None,
            side: None,
            base: None,
            radius: None,
            position: PositionDocument {
                x: shape.position().x(),
                y: shape.position().y(),
            },
            color: shape.color().to_string(),
            created_at: shape.created_at(),
        };
        match shape {
            Shape::Rectangle(r) => {
                doc.width = Some(r.width());
                doc.height = Some(r.height());
            }
            Shape::Square(s) => {
                doc.side = Some(s.side());
            }
            Shape::Triangle(t) => {
                doc.base = Some(t.base());
                doc.height = Some(t.height());
            }
            Shape::Circle(c) => {
                doc.radius = Some(c.radius());
            }
        }
        doc
    }
}

/// Complete design state document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub shapes: Vec<ShapeDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl DesignFile {
    /// Create a design file from shape documents, stamped "now".
    pub fn new(shapes: Vec<ShapeDocument>, metadata: Option<Map<String, Value>>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            shapes,
            metadata,
        }
    }

    /// Serialize the design to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        serde_json::to_string_pretty(self).map_err(|e| SerializationError::Save {
            reason: e.to_string(),
        })
    }

    /// Parse a design from JSON text.
    ///
    /// A document without a `version` field is rejected.
    pub fn from_json(text: &str) -> Result<Self, SerializationError> {
        let design: DesignFile =
            serde_json::from_str(text).map_err(|e| SerializationError::Load {
                reason: e.to_string(),
            })?;
        if design.version.is_empty() {
            return Err(SerializationError::Load {
                reason: "missing version in design file".to_string(),
            });
        }
        Ok(design)
    }
}

/// Serialize shapes into a design document text.
pub fn serialize_design<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    metadata: Option<Map<String, Value>>,
) -> Result<String, SerializationError> {
    let docs = shapes.into_iter().map(ShapeDocument::from_shape).collect();
    DesignFile::new(docs, metadata).to_json()
}

/// Deserialize a design document text into live shapes.
///
/// Every embedded shape is reconstructed through the factory before
/// anything is returned; one failing shape aborts the whole load with
/// the underlying cause. Ids and creation timestamps are regenerated.
pub fn deserialize_design(
    text: &str,
    factory: &mut ShapeFactory,
) -> Result<(Vec<Shape>, Option<Map<String, Value>>), SerializationError> {
    let design = DesignFile::from_json(text)?;
    let mut shapes = Vec::with_capacity(design.shapes.len());
    for doc in &design.shapes {
        let shape = factory
            .from_document(doc)
            .map_err(|e| SerializationError::Load {
                reason: e.to_string(),
            })?;
        shapes.push(shape);
    }
    Ok((shapes, design.metadata))
}
