//! Shape model: the geometric entities a design is made of.
//!
//! Shapes form a closed sum over rectangle, square, triangle, and
//! circle. Shared identity, position, and color live in a composed
//! [`ShapeCommon`] value embedded in every variant; invariants are
//! enforced centrally in constructors and validated setters, so an
//! invalid shape state is never observable.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use shapekit_core::units::{self, Unit};
use shapekit_core::ShapeError;

mod circle;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// A point in 2D space for shape positioning.
///
/// Both components are always finite; every mutation is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    x: f64,
    y: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite components.
    pub fn new(x: f64, y: f64) -> Result<Self, ShapeError> {
        validate_coordinate("x", x)?;
        validate_coordinate("y", y)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_coordinate("x", value)?;
        self.x = value;
        Ok(())
    }

    pub fn set_y(&mut self, value: f64) -> Result<(), ShapeError> {
        validate_coordinate("y", value)?;
        self.y = value;
        Ok(())
    }

    /// Moves the coordinate by an offset, rejecting a non-finite result.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), ShapeError> {
        let x = self.x + dx;
        let y = self.y + dy;
        validate_coordinate("x", x)?;
        validate_coordinate("y", y)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Identity, position, and color shared by every shape variant.
///
/// `id` and `created_at` are immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShapeCommon {
    pub(crate) id: String,
    pub(crate) position: Coordinate,
    pub(crate) color: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl ShapeCommon {
    pub(crate) fn new(id: String, x: f64, y: f64, color: &str) -> Result<Self, ShapeError> {
        validate_color(color)?;
        Ok(Self {
            id,
            position: Coordinate::new(x, y)?,
            color: color.to_string(),
            created_at: Utc::now(),
        })
    }

    pub(crate) fn set_color(&mut self, color: &str) -> Result<(), ShapeError> {
        validate_color(color)?;
        self.color = color.to_string();
        Ok(())
    }
}

/// Validates a strictly positive, finite dimension value.
pub(crate) fn validate_dimension(name: &str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::InvalidDimension {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

pub(crate) fn validate_coordinate(axis: &str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::InvalidCoordinate {
            axis: axis.to_string(),
            value,
        });
    }
    Ok(())
}

/// Validates a `#RRGGBB` or `#RGB` hex color string.
pub(crate) fn validate_color(color: &str) -> Result<(), ShapeError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    let valid = (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if color.starts_with('#') && valid {
        Ok(())
    } else {
        Err(ShapeError::InvalidColor {
            value: color.to_string(),
        })
    }
}

/// Discriminant tag for the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rectangle,
    Square,
    Triangle,
    Circle,
}

impl ShapeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "circle" => Ok(Self::Circle),
            other => Err(ShapeError::InvalidShapeType {
                shape_type: other.to_string(),
            }),
        }
    }
}

/// Scale factor for shape resizing.
///
/// Rectangle and triangle apply per-axis factors independently; circle
/// and square collapse a per-axis pair to its average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFactor {
    /// One factor applied to every dimension.
    Uniform(f64),
    /// Independent horizontal and vertical factors.
    PerAxis(f64, f64),
}

impl ScaleFactor {
    /// The `(x, y)` factor pair.
    pub fn per_axis(self) -> (f64, f64) {
        match self {
            Self::Uniform(f) => (f, f),
            Self::PerAxis(fx, fy) => (fx, fy),
        }
    }

    /// The pair collapsed to a single factor by averaging.
    pub fn averaged(self) -> f64 {
        match self {
            Self::Uniform(f) => f,
            Self::PerAxis(fx, fy) => (fx + fy) / 2.0,
        }
    }
}

/// Area and perimeter of a shape, optionally converted to a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub area: f64,
    pub perimeter: f64,
    /// The unit the values are expressed in; `None` means the native
    /// (centimeter) dimensions.
    pub unit: Option<Unit>,
}

/// A geometric shape: a closed sum over the four supported variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Square(_) => ShapeType::Square,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn position(&self) -> &Coordinate {
        &self.common().position
    }

    pub fn color(&self) -> &str {
        &self.common().color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.common().created_at
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), ShapeError> {
        self.common_mut().set_color(color)
    }

    /// Moves the shape by an offset.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), ShapeError> {
        self.common_mut().position.translate(dx, dy)
    }

    /// Repositions the shape, rejecting non-finite components.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), ShapeError> {
        self.common_mut().position = Coordinate::new(x, y)?;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.area(),
            Shape::Square(s) => s.area(),
            Shape::Triangle(s) => s.area(),
            Shape::Circle(s) => s.area(),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Triangle(s) => s.perimeter(),
            Shape::Circle(s) => s.perimeter(),
        }
    }

    /// Scales the shape's dimensions.
    ///
    /// A failing factor leaves the shape unmodified.
    pub fn scale(&mut self, factor: ScaleFactor) -> Result<(), ShapeError> {
        match self {
            Shape::Rectangle(s) => s.scale(factor),
            Shape::Square(s) => s.scale(factor),
            Shape::Triangle(s) => s.scale(factor),
            Shape::Circle(s) => s.scale(factor),
        }
    }

    /// Sets one dimension field by name.
    ///
    /// Names not carried by the variant are rejected as invalid
    /// dimensions. Dependent values (triangle sides) are recomputed
    /// before the call returns.
    pub fn set_dimension(&mut self, name: &str, value: f64) -> Result<(), ShapeError> {
        match (self, name) {
            (Shape::Rectangle(s), "width") => s.set_width(value),
            (Shape::Rectangle(s), "height") => s.set_height(value),
            (Shape::Square(s), "side") => s.set_side(value),
            (Shape::Triangle(s), "base") => s.set_base(value),
            (Shape::Triangle(s), "height") => s.set_height(value),
            (Shape::Circle(s), "radius") => s.set_radius(value),
            (_, other) => Err(ShapeError::InvalidDimension {
                name: other.to_string(),
                value,
            }),
        }
    }

    /// Dimension fields and their current values, in canonical order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            Shape::Rectangle(s) => vec![("width", s.width()), ("height", s.height())],
            Shape::Square(s) => vec![("side", s.side())],
            Shape::Triangle(s) => vec![("base", s.base()), ("height", s.height())],
            Shape::Circle(s) => vec![("radius", s.radius())],
        }
    }

    /// Area and perimeter, converted from centimeters when a unit is
    /// requested.
    pub fn calc(&self, unit: Option<Unit>) -> Calculation {
        let area = self.area();
        let perimeter = self.perimeter();
        match unit {
            Some(u) => Calculation {
                area: units::convert(area, Unit::Cm, u),
                perimeter: units::convert(perimeter, Unit::Cm, u),
                unit: Some(u),
            },
            None => Calculation {
                area,
                perimeter,
                unit: None,
            },
        }
    }

    fn common(&self) -> &ShapeCommon {
        match self {
            Shape::Rectangle(s) => &s.common,
            Shape::Square(s) => &s.common,
            Shape::Triangle(s) => &s.common,
            Shape::Circle(s) => &s.common,
        }
    }

    fn common_mut(&mut self) -> &mut ShapeCommon {
        match self {
            Shape::Rectangle(s) => &mut s.common,
            Shape::Square(s) => &mut s.common,
            Shape::Triangle(s) => &mut s.common,
            Shape::Circle(s) => &mut s.common,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.shape_type().as_str();
        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        write!(
            f,
            "{} | Area: {:.2} | Perimeter: {:.2}",
            capitalized,
            self.area(),
            self.perimeter()
        )
    }
}
