use super::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point<f64>,
    pub max: Point<f64>,
}

impl Rect {
    pub fn new(min: Point<f64>, max: Point<f64>) -> Self {
        Self { min, max }
    }

    pub fn square(bound: f64) -> Self {
        let b = bound.abs();
        Self::new(Point::new(-b, -b), Point::new(b, b))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn to_pixel(&self, p: Point<f64>, width: u32, height: u32) -> (f32, f32) {
        let scale_x = width as f64 / self.width();
        let scale_y = height as f64 / self.height();
        (
            ((p.x - self.min.x) * scale_x) as f32,
            (height as f64 - (p.y - self.min.y) * scale_y) as f32,
        )
    }
}
