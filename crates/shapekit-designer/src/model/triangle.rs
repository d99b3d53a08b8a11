use shapekit_core::ShapeError;

use super::{validate_dimension, ScaleFactor, ShapeCommon};

/// An isosceles triangle described by base and height.
///
/// The two equal legs are derived from base and height and recomputed
/// after every mutation, so `side_a == side_b` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub(crate) common: ShapeCommon,
    base: f64,
    height: f64,
    side_a: f64,
    side_b: f64,
}

impl Triangle {
    pub fn new(
        id: impl Into<String>,
        base: f64,
        height: f64,
        x: f64,
        y: f64,
        color: &str,
    ) -> Result<Self, ShapeError> {
        validate_dimension("base", base)?;
        validate_dimension("height", height)?;
        let leg = leg_length(base, height);
        Ok(Self {
            common: ShapeCommon::new(id.into(), x, y, color)?,
            base,
            height,
            side_a: leg,
            side_b: leg,
        })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    pub fn side_b(&self) -> f64 {
        self.side_b
    }

    pub fn set_base(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("base", value)?;
        self.base = value;
        self.recompute_sides();
        Ok(())
    }

    pub fn set_height(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_dimension("height", value)?;
        self.height = value;
        self.recompute_sides();
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.base + self.side_a + self.side_b
    }

    pub fn is_equilateral(&self) -> bool {
        let tolerance = 1e-3;
        (self.base - self.side_a).abs() < tolerance && (self.side_a - self.side_b).abs() < tolerance
    }

    /// Scales base and height, applying per-axis factors independently,
    /// then recomputes the equal legs. Both new dimensions are
    /// validated before either is assigned.
    pub fn scale(&mut self, factor: ScaleFactor) -> Result<(), ShapeError> {
        let (fx, fy) = factor.per_axis();
        let base = self.base * fx;
        let height = self.height * fy;
        validate_dimension("base", base)?;
        validate_dimension("height", height)?;
        self.base = base;
        self.height = height;
        self.recompute_sides();
        Ok(())
    }

    fn recompute_sides(&mut self) {
        let leg = leg_length(self.base, self.height);
        self.side_a = leg;
        self.side_b = leg;
    }
}

fn leg_length(base: f64, height: f64) -> f64 {
    let half_base = base / 2.0;
    (half_base * half_base + height * height).sqrt()
}
