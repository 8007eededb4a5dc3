//! `f(x, y) = x² + y²`, the circular paraboloid.

use super::{FunctionKind, FunctionSpec};
use gradviz_common::geom::point::Point;

pub static SPEC: FunctionSpec = FunctionSpec {
    kind: FunctionKind::Paraboloid,
    label: "f(x, y) = x² + y²",
    latex: r"f(x, y) = x^2 + y^2",
    value,
    gradient,
    extended: None,
};

fn value(x: f64, y: f64) -> f64 {
    x * x + y * y
}

fn gradient(x: f64, y: f64) -> Point<f64> {
    Point::new(2.0 * x, 2.0 * y)
}
