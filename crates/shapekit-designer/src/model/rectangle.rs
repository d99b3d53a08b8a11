use shapekit_core::ShapeError;

use super::{validate_dimension, ScaleFactor, ShapeCommon};

/// An axis-aligned rectangle with strictly positive width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) common: ShapeCommon,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(
        id: impl Into<String>,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<Self, ShapeError> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self {
            common: ShapeCommon::new(id.into(), x, y, color)?,
            width,
            height,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_width(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("width", value)?;
        self.width = value;
        Ok(())
    }

    pub fn set_height(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("height", value)?;
        self.height = value;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Scales width and height, applying per-axis factors
    /// independently. Both new dimensions are validated before either
    /// is assigned.
    pub fn scale(&mut self, factor: ScaleFactor) -> Result<(), ShapeError> {
        let (fx, fy) = factor.per_axis();
        let width = self.width * fx;
        let height = self.height * fy;
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}
