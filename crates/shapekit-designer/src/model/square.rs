use shapekit_core::ShapeError;

use super::{validate_dimension, ScaleFactor, ShapeCommon};

/// A square, stored as a single side length so width and height can
/// never diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub(crate) common: ShapeCommon,
    side: f64,
}

impl Square {
    pub fn new(
        id: impl Into<String>,
        side: f64,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<Self, ShapeError> {
        validate_dimension("side", side)?;
        Ok(Self {
            common: ShapeCommon::new(id.into(), x, y, color)?,
            side,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// Width alias; always equal to the side.
    pub fn width(&self) -> f64 {
        self.side
    }

    /// Height alias; always equal to the side.
    pub fn height(&self) -> f64 {
        self.side
    }

    pub fn set_side(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("side", value)?;
        self.side = value;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    pub fn diagonal(&self) -> f64 {
        self.side * std::f64::consts::SQRT_2
    }

    /// Scales the side. A per-axis pair is collapsed to its average so
    /// the square stays a square.
    pub fn scale(&mut self, factor: ScaleFactor) -> Result<(), ShapeError> {
        let side = self.side * factor.averaged();
        validate_dimension("side", side)?;
        self.side = side;
        Ok(())
    }
}
