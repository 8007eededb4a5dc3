use gradviz_common::geom::point::Point;

pub trait DifferentiableFunction {
    fn evaluate(&self, p: Point<f64>) -> f64;
    fn gradient(&self, p: Point<f64>) -> Point<f64>;
}
