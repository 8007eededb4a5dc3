//! `f(x, y) = x²y + y`.

use super::{FunctionKind, FunctionSpec};
use crate::explanation::CUBIC_WALKTHROUGH;
use gradviz_common::geom::point::Point;

pub static SPEC: FunctionSpec = FunctionSpec {
    kind: FunctionKind::Cubic,
    label: "f(x, y) = x²y + y",
    latex: r"f(x, y) = x^2 y + y",
    value,
    gradient,
    extended: Some(&CUBIC_WALKTHROUGH),
};

fn value(x: f64, y: f64) -> f64 {
    x * x * y + y
}

// ∂f/∂x = 2xy, ∂f/∂y = x² + 1
fn gradient(x: f64, y: f64) -> Point<f64> {
    Point::new(2.0 * x * y, x * x + 1.0)
}
