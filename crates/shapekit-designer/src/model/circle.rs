use std::f64::consts::PI;

use shapekit_core::ShapeError;

use super::{validate_dimension, ScaleFactor, ShapeCommon};

/// A circle with a strictly positive radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) common: ShapeCommon,
    radius: f64,
}

impl Circle {
    pub fn new(
        id: impl Into<String>,
        radius: f64,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<Self, ShapeError> {
        validate_dimension("radius", radius)?;
        Ok(Self {
            common: ShapeCommon::new(id.into(), x, y, color)?,
            radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn set_radius(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("radius", value)?;
        self.radius = value;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Circumference alias for the perimeter.
    pub fn circumference(&self) -> f64 {
        self.perimeter()
    }

    /// Scales the radius. A per-axis pair is collapsed to its average;
    /// a circle has no independent axes.
    pub fn scale(&mut self, factor: ScaleFactor) -> Result<(), ShapeError> {
        let radius = self.radius * factor.averaged();
        validate_dimension("radius", radius)?;
        self.radius = radius;
        Ok(())
    }
}
