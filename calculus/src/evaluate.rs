use crate::function::{FunctionKind, FunctionSpec};
use crate::sampling::{GridSpec, sample_surface};
use gradviz_common::geom::point::Point;
use gradviz_common::geom::surface::SurfaceGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRequest {
    pub function: FunctionKind,
    pub x0: f64,
    pub y0: f64,
}

impl EvaluationRequest {
    pub fn new(function: FunctionKind, x0: f64, y0: f64) -> Self {
        Self { function, x0, y0 }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.x0, self.y0)
    }

    pub fn evaluate(&self) -> EvaluationResult {
        evaluate(self.function.spec(), self.x0, self.y0)
    }

    pub fn evaluate_with(&self, grid: &GridSpec) -> EvaluationResult {
        evaluate_with(self.function.spec(), self.x0, self.y0, grid)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub function: FunctionKind,
    pub point: Point<f64>,
    pub grid: SurfaceGrid,
    pub point_value: f64,
    pub gradient: Point<f64>,
    pub magnitude: f64,
}

impl EvaluationResult {
    pub fn highlighted_point(&self) -> (f64, f64, f64) {
        (self.point.x, self.point.y, self.point_value)
    }

    pub fn arrow(&self) -> (Point<f64>, Point<f64>) {
        (self.point, self.point + self.gradient)
    }

    pub fn steepest_ascent_direction(&self) -> Option<Point<f64>> {
        self.gradient.normalized()
    }

    /// Rate of change of `f` along `direction` (normalised first). `None`
    /// for a zero-length direction.
    pub fn directional_derivative(&self, direction: Point<f64>) -> Option<f64> {
        direction.normalized().map(|u| self.gradient.dot(&u))
    }
}

/// Evaluates `spec` at `(x0, y0)` and samples it on the default 60×60 mesh
/// over `[-3, 3]²`.
pub fn evaluate(spec: &FunctionSpec, x0: f64, y0: f64) -> EvaluationResult {
    evaluate_with(spec, x0, y0, &GridSpec::default())
}

pub fn evaluate_with(spec: &FunctionSpec, x0: f64, y0: f64, grid: &GridSpec) -> EvaluationResult {
    let point_value = spec.value_at(x0, y0);
    let gradient = spec.gradient_at(x0, y0);
    let magnitude = gradient.norm();

    log::debug!(
        "{} at ({}, {}): z={} grad=({}, {}) |grad|={}",
        spec.kind.short_name(),
        x0,
        y0,
        point_value,
        gradient.x,
        gradient.y,
        magnitude
    );

    EvaluationResult {
        function: spec.kind,
        point: Point::new(x0, y0),
        grid: sample_surface(spec, grid),
        point_value,
        gradient,
        magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn request_delegates_to_its_function() {
        let request = EvaluationRequest::new(FunctionKind::Cubic, 0.0, 2.0);
        let result = request.evaluate();
        assert_eq!(result.function, FunctionKind::Cubic);
        assert_eq!(result.point, request.point());
        assert_eq!(result.point_value, 2.0);
        assert_eq!(result.gradient, Point::new(0.0, 1.0));
    }

    #[test]
    fn custom_grid_is_honoured() {
        let grid = GridSpec::new(11, 1.0).unwrap();
        let result = EvaluationRequest::new(FunctionKind::Paraboloid, 0.5, 0.5).evaluate_with(&grid);
        assert_eq!(result.grid.resolution(), 11);
        assert_eq!(result.grid.axis()[0], -1.0);
        assert_eq!(result.grid.get(10, 10), Some(2.0));
    }

    #[test]
    fn out_of_range_points_still_evaluate() {
        let result = evaluate(FunctionKind::Paraboloid.spec(), 10.0, -7.5);
        assert_eq!(result.point_value, 156.25);
        assert_eq!(result.gradient, Point::new(20.0, -15.0));
        assert_relative_eq!(result.magnitude, 25.0);
    }

    #[test]
    fn arrow_ends_at_point_plus_gradient() {
        let result = evaluate(FunctionKind::Paraboloid.spec(), 1.0, -0.5);
        let (start, end) = result.arrow();
        assert_eq!(start, Point::new(1.0, -0.5));
        assert_eq!(end, Point::new(3.0, -1.5));
        assert_eq!(result.highlighted_point(), (1.0, -0.5, 1.25));
    }

    #[test]
    fn steepest_ascent_maximises_directional_derivative() {
        let result = evaluate(FunctionKind::Cubic.spec(), 1.3, -0.7);
        let best = result.steepest_ascent_direction().unwrap();
        let along = result.directional_derivative(best).unwrap();
        assert_relative_eq!(along, result.magnitude, epsilon = 1e-12);

        for k in 0..36 {
            let angle = (k as f64 * 10.0).to_radians();
            let u = Point::new(angle.cos(), angle.sin());
            assert!(result.directional_derivative(u).unwrap() <= result.magnitude + 1e-12);
        }
    }

    #[test]
    fn directional_derivative_normalises_its_input() {
        let result = evaluate(FunctionKind::Paraboloid.spec(), 1.0, 0.0);
        assert_abs_diff_eq!(result.directional_derivative(Point::new(5.0, 0.0)).unwrap(), 2.0);
        assert_abs_diff_eq!(result.directional_derivative(Point::new(0.0, -3.0)).unwrap(), 0.0);
        assert!(result.directional_derivative(Point::default()).is_none());
    }

    #[test]
    fn stationary_point_has_no_ascent_direction() {
        let result = evaluate(FunctionKind::Paraboloid.spec(), 0.0, 0.0);
        assert!(result.steepest_ascent_direction().is_none());
    }
}
