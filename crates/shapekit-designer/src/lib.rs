//! # ShapeKit Designer
//!
//! This crate provides the shape design layer: a typed model of 2D
//! shapes with validated geometry, plus the session state that edits,
//! measures, previews, and persists them.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Shapes**: Rectangles, squares, triangles, and circles with
//!   validated dimensions, positions, and colors
//! - **Factory**: Constructs shapes from type tags and dimension maps,
//!   with injectable id generation
//! - **Collection**: Insertion-ordered, id-keyed shape storage
//!
//! ### Session Features
//! - **Undo**: Bounded history of add/remove/modify actions with full
//!   shape snapshots
//! - **Measurement**: Area and perimeter with unit conversion
//! - **Preview**: Box-drawing sketches for terminal output
//! - **Persistence**: Versioned JSON design files with all-or-nothing
//!   loading
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session)
//!   ├── ShapeCollection (shapes, insertion-ordered)
//!   ├── UndoManager (bounded action ring)
//!   ├── ShapeFactory (creation, duplication, reconstruction)
//!   └── serialization (versioned design files)
//! ```

pub mod collection;
pub mod designer_state;
pub mod factory;
pub mod history;
pub mod model;
pub mod preview;
pub mod serialization;

pub use collection::ShapeCollection;
pub use designer_state::DesignerState;
pub use factory::{IdGenerator, ShapeFactory};
pub use history::{Action, ActionKind, UndoManager, DEFAULT_UNDO_CAPACITY};
pub use model::{
    Calculation, Circle, Coordinate, Rectangle, ScaleFactor, Shape, ShapeType, Square, Triangle,
};
pub use preview::ascii_preview;
pub use serialization::{
    deserialize_design, serialize_design, DesignFile, ShapeDocument, FILE_FORMAT_VERSION,
};
