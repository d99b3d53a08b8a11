use shapekit_core::{ShapeError, Unit};
use shapekit_designer::model::{Circle, Rectangle, ScaleFactor, Shape, Square, Triangle};

const EPS: f64 = 1e-9;

#[test]
fn test_rectangle_measurements() {
    let rect = Rectangle::new("r1", 10.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap();
    assert!((rect.area() - 40.0).abs() < EPS);
    assert!((rect.perimeter() - 28.0).abs() < EPS);
    assert!((rect.diagonal() - (116.0_f64).sqrt()).abs() < EPS);
    assert!(!rect.is_square());

    let square_ish = Rectangle::new("r2", 5.0, 5.0, 0.0, 0.0, "#00d4ff").unwrap();
    assert!(square_ish.is_square());
}

#[test]
fn test_square_measurements() {
    let square = Square::new("s1", 6.0, 0.0, 0.0, "#00d4ff").unwrap();
    assert!((square.area() - 36.0).abs() < EPS);
    assert!((square.perimeter() - 24.0).abs() < EPS);
    assert_eq!(square.width(), square.height());
    assert!((square.diagonal() - 6.0 * std::f64::consts::SQRT_2).abs() < EPS);
}

#[test]
fn test_triangle_measurements_and_side_invariant() {
    let triangle = Triangle::new("t1", 6.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap();
    assert!((triangle.area() - 12.0).abs() < EPS);
    // Isosceles legs: sqrt((6/2)^2 + 4^2) = 5.
    assert!((triangle.side_a() - 5.0).abs() < EPS);
    assert!((triangle.side_b() - 5.0).abs() < EPS);
    assert!((triangle.perimeter() - 16.0).abs() < EPS);
}

#[test]
fn test_triangle_sides_recomputed_on_every_mutation() {
    let mut triangle = Triangle::new("t1", 6.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap();

    triangle.set_base(8.0).unwrap();
    let expected = ((4.0_f64).powi(2) + (4.0_f64).powi(2)).sqrt();
    assert!((triangle.side_a() - expected).abs() < EPS);

    triangle.set_height(3.0).unwrap();
    let expected = ((4.0_f64).powi(2) + (3.0_f64).powi(2)).sqrt();
    assert!((triangle.side_a() - expected).abs() < EPS);
    assert_eq!(triangle.side_a(), triangle.side_b());

    triangle.scale(ScaleFactor::PerAxis(2.0, 3.0)).unwrap();
    let expected = ((8.0_f64).powi(2) + (9.0_f64).powi(2)).sqrt();
    assert!((triangle.side_a() - expected).abs() < EPS);
}

#[test]
fn test_circle_measurements() {
    let circle = Circle::new("c1", 3.0, 0.0, 0.0, "#00d4ff").unwrap();
    assert!((circle.area() - 9.0 * std::f64::consts::PI).abs() < EPS);
    assert!((circle.perimeter() - 6.0 * std::f64::consts::PI).abs() < EPS);
    assert_eq!(circle.perimeter(), circle.circumference());
    assert!((circle.diameter() - 6.0).abs() < EPS);
}

#[test]
fn test_invalid_dimensions_rejected_at_construction() {
    assert!(Rectangle::new("r", 0.0, 4.0, 0.0, 0.0, "#00d4ff").is_err());
    assert!(Rectangle::new("r", 10.0, -1.0, 0.0, 0.0, "#00d4ff").is_err());
    assert!(Square::new("s", f64::NAN, 0.0, 0.0, "#00d4ff").is_err());
    assert!(Triangle::new("t", 6.0, f64::INFINITY, 0.0, 0.0, "#00d4ff").is_err());
    assert!(Circle::new("c", 0.0, 0.0, 0.0, "#00d4ff").is_err());
}

#[test]
fn test_invalid_mutation_leaves_shape_untouched() {
    let mut rect = Rectangle::new("r1", 10.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap();

    assert!(rect.set_width(-2.0).is_err());
    assert_eq!(rect.width(), 10.0);

    // A factor that would zero the height fails both axes atomically.
    assert!(rect.scale(ScaleFactor::PerAxis(2.0, 0.0)).is_err());
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.height(), 4.0);
}

#[test]
fn test_color_validation() {
    let mut shape = Shape::Circle(Circle::new("c1", 3.0, 0.0, 0.0, "#00d4ff").unwrap());
    assert!(shape.set_color("#abc").is_ok());
    assert!(shape.set_color("#A1B2C3").is_ok());

    for bad in ["00d4ff", "#00d4f", "#00d4fg", "#12345", "blue", ""] {
        let err = shape.set_color(bad).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidColor { .. }), "{bad:?}");
    }
    assert_eq!(shape.color(), "#A1B2C3");
}

#[test]
fn test_scale_averaging_for_uniform_variants() {
    // Circle and square collapse a per-axis pair to its average.
    let mut circle = Circle::new("c1", 4.0, 0.0, 0.0, "#00d4ff").unwrap();
    circle.scale(ScaleFactor::PerAxis(2.0, 4.0)).unwrap();
    assert!((circle.radius() - 12.0).abs() < EPS);

    let mut square = Square::new("s1", 2.0, 0.0, 0.0, "#00d4ff").unwrap();
    square.scale(ScaleFactor::PerAxis(1.0, 3.0)).unwrap();
    assert!((square.side() - 4.0).abs() < EPS);

    // Rectangle scales each axis independently.
    let mut rect = Rectangle::new("r1", 10.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap();
    rect.scale(ScaleFactor::PerAxis(2.0, 4.0)).unwrap();
    assert!((rect.width() - 20.0).abs() < EPS);
    assert!((rect.height() - 16.0).abs() < EPS);
}

#[test]
fn test_position_and_translation() {
    let mut shape = Shape::Rectangle(Rectangle::new("r1", 10.0, 4.0, 1.0, 2.0, "#00d4ff").unwrap());
    shape.translate(3.0, -1.0).unwrap();
    assert_eq!(shape.position().x(), 4.0);
    assert_eq!(shape.position().y(), 1.0);

    assert!(shape.set_position(f64::NAN, 0.0).is_err());
    assert_eq!(shape.position().x(), 4.0);
}

#[test]
fn test_unit_conversion_of_measurements() {
    let shape = Shape::Rectangle(Rectangle::new("r1", 100.0, 100.0, 0.0, 0.0, "#00d4ff").unwrap());

    let native = shape.calc(None);
    assert!((native.area - 10_000.0).abs() < EPS);
    assert_eq!(native.unit, None);

    // Conversion applies the linear factor to both measurements.
    let meters = shape.calc(Some(Unit::M));
    assert!((meters.area - 100.0).abs() < EPS);
    assert!((meters.perimeter - 4.0).abs() < EPS);
    assert_eq!(meters.unit, Some(Unit::M));

    let inches = shape.calc(Some(Unit::Inch));
    assert!((inches.perimeter - 400.0 * 0.393701).abs() < 1e-6);
}

#[test]
fn test_display_format() {
    let shape = Shape::Rectangle(Rectangle::new("r1", 10.0, 4.0, 0.0, 0.0, "#00d4ff").unwrap());
    assert_eq!(shape.to_string(), "Rectangle | Area: 40.00 | Perimeter: 28.00");
}
