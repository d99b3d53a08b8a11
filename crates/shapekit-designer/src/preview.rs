//! Box-drawing previews of shapes for terminal output.
//!
//! Dimensions are mapped to character cells at a 5:1 ratio and clamped
//! per shape, so previews stay readable for any valid dimension.

use crate::model::Shape;

/// Render a shape as a multi-line box-drawing sketch.
pub fn ascii_preview(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle(rect) => {
            let w = cells(rect.width(), 20);
            let h = cells(rect.height(), 10);
            framed(w, h, ('┌', '─', '┐'), ('│', '│'), ('└', '─', '┘'))
        }
        Shape::Square(square) => {
            let size = cells(square.side(), 15);
            framed(size, size, ('╔', '═', '╗'), ('║', '║'), ('╚', '═', '╝'))
        }
        Shape::Triangle(triangle) => {
            let w = cells(triangle.base(), 20);
            let h = cells(triangle.height(), 10);
            let mut out = String::new();
            for i in 0..h {
                let spaces = ((h - i - 1) * w) / (h * 2);
                let chars = ((i + 1) * w) / h;
                out.push_str(&" ".repeat(spaces));
                out.push('/');
                out.push_str(&"*".repeat(chars));
                out.push_str("\\\n");
            }
            out.push('└');
            out.push_str(&"─".repeat(w));
            out.push('┘');
            out
        }
        Shape::Circle(circle) => {
            let r = cells(circle.radius(), 8) as i64;
            let mut out = String::new();
            for y in 0..=r * 2 {
                let mut row = String::new();
                for x in 0..=r * 2 {
                    let dx = (x - r) as f64;
                    let dy = (y - r) as f64;
                    let distance = (dx * dx + dy * dy).sqrt();
                    row.push(if (distance - r as f64).abs() < 0.5 { '*' } else { ' ' });
                }
                out.push_str(row.trim_end());
                out.push('\n');
            }
            out.pop();
            out
        }
    }
}

fn cells(dimension: f64, max: usize) -> usize {
    ((dimension / 5.0).round() as usize).min(max)
}

fn framed(
    w: usize,
    h: usize,
    top: (char, char, char),
    middle: (char, char),
    bottom: (char, char, char),
) -> String {
    let mut out = String::new();
    out.push(top.0);
    out.push_str(&top.1.to_string().repeat(w));
    out.push(top.2);
    out.push('\n');
    for _ in 0..h {
        out.push(middle.0);
        out.push_str(&" ".repeat(w));
        out.push(middle.1);
        out.push('\n');
    }
    out.push(bottom.0);
    out.push_str(&bottom.1.to_string().repeat(w));
    out.push(bottom.2);
    out
}
