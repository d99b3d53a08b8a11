//! # ShapeKit Core
//!
//! Core types and utilities for ShapeKit.
//! Provides the error vocabulary shared by every layer and the unit
//! conversion helpers used when reporting measurements.

pub mod error;
pub mod units;

pub use error::{Error, Result, SerializationError, ShapeError};
pub use units::Unit;
