//! Error handling for ShapeKit
//!
//! Provides the error types for all layers of the library:
//! - Shape errors (dimension/coordinate/color validation, lookups)
//! - Serialization errors (design save/load)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Validation errors are raised at the point of violation so that an
//! invalid shape state is never observable.

use thiserror::Error;

/// Shape error type
///
/// Represents errors raised by shape construction, validated mutation,
/// and collection lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A dimension value is non-finite or not strictly positive
    #[error("Invalid dimension '{name}': {value}. Dimensions must be positive numbers.")]
    InvalidDimension {
        /// The dimension field name (e.g. "width", "radius").
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A coordinate component is non-finite
    #[error("Invalid {axis} coordinate: {value}. Coordinates must be finite numbers.")]
    InvalidCoordinate {
        /// The coordinate axis ("x" or "y").
        axis: String,
        /// The rejected value.
        value: f64,
    },

    /// A color string does not match the hex format
    #[error("Invalid color format: '{value}'. Use hex format (#RRGGBB or #RGB).")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },

    /// An unrecognized shape type tag at creation or reconstruction
    #[error("Invalid shape type: '{shape_type}'. Valid types are: rectangle, square, triangle, circle.")]
    InvalidShapeType {
        /// The unrecognized type tag.
        shape_type: String,
    },

    /// A lookup by unknown shape id
    #[error("Shape with ID '{id}' not found.")]
    ShapeNotFound {
        /// The id that was not found.
        id: String,
    },

    /// An insert under an id that is already taken
    #[error("Shape with ID '{id}' already exists.")]
    DuplicateShapeId {
        /// The id that collided.
        id: String,
    },
}

/// Serialization error type
///
/// Represents failures while producing or consuming a persisted design
/// document, tagged with the operation that failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    /// Producing the design document failed
    #[error("Serialization error during save: {reason}")]
    Save {
        /// The underlying cause.
        reason: String,
    },

    /// Parsing or reconstructing a design document failed
    #[error("Serialization error during load: {reason}")]
    Load {
        /// The underlying cause.
        reason: String,
    },
}

/// Main error type for ShapeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl Error {
    /// Check if this is a missing-shape lookup error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Shape(ShapeError::ShapeNotFound { .. }))
    }

    /// Check if this is a validation error (dimension, coordinate, color, or type tag)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Shape(
                ShapeError::InvalidDimension { .. }
                    | ShapeError::InvalidCoordinate { .. }
                    | ShapeError::InvalidColor { .. }
                    | ShapeError::InvalidShapeType { .. }
            )
        )
    }

    /// Check if this is a serialization error
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
