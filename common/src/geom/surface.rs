use super::point::Point;
use super::rect::Rect;

/// `n` evenly spaced samples on `[start, end]`, endpoints included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Heights of a scalar field sampled on a square mesh.
///
/// Both axes share the same sample coordinates. Heights are stored row-major:
/// row `j` holds the samples at `y = axis[j]`, column `i` the samples at
/// `x = axis[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    axis: Vec<f64>,
    heights: Vec<f64>,
}

impl SurfaceGrid {
    pub fn new(axis: Vec<f64>, heights: Vec<f64>) -> Self {
        assert_eq!(
            heights.len(),
            axis.len() * axis.len(),
            "surface heights must cover the full mesh"
        );
        Self { axis, heights }
    }

    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn bounds(&self) -> Rect {
        match (self.axis.first(), self.axis.last()) {
            (Some(&lo), Some(&hi)) => Rect::new(Point::new(lo, lo), Point::new(hi, hi)),
            _ => Rect::default(),
        }
    }

    /// Height at column `i` (x) and row `j` (y).
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.resolution();
        if i < n && j < n {
            Some(self.heights[j * n + i])
        } else {
            None
        }
    }

    pub fn point(&self, i: usize, j: usize) -> Option<(f64, f64, f64)> {
        self.get(i, j).map(|z| (self.axis[i], self.axis[j], z))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.heights.chunks(self.resolution().max(1))
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let n = self.resolution();
        self.heights
            .iter()
            .enumerate()
            .map(move |(k, &z)| (self.axis[k % n], self.axis[k / n], z))
    }

    /// Lowest and highest finite height, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.heights
            .iter()
            .copied()
            .filter(|z| z.is_finite())
            .fold(None, |acc, z| match acc {
                None => Some((z, z)),
                Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
            })
    }
}
