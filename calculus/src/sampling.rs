use crate::function::DifferentiableFunction;
use gradviz_common::geom::point::Point;
use gradviz_common::geom::surface::{SurfaceGrid, linspace};
use gradviz_common::util::config::{self, GridConfig};
use gradviz_common::util::profiler::ScopedTimer;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid needs at least 2 samples per axis, got {0}")]
    ResolutionTooSmall(usize),
    #[error("grid allows at most {max} samples per axis, got {0}", max = GridSpec::MAX_RESOLUTION)]
    ResolutionTooLarge(usize),
    #[error("grid bound must be positive and finite, got {0}")]
    InvalidBound(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    resolution: usize,
    bound: f64,
}

impl GridSpec {
    pub const DEFAULT_RESOLUTION: usize = 60;
    pub const DEFAULT_BOUND: f64 = 3.0;
    pub const MAX_RESOLUTION: usize = config::MAX_RESOLUTION;

    pub fn new(resolution: usize, bound: f64) -> Result<Self, GridError> {
        if resolution < 2 {
            return Err(GridError::ResolutionTooSmall(resolution));
        }
        if resolution > Self::MAX_RESOLUTION {
            return Err(GridError::ResolutionTooLarge(resolution));
        }
        if !(bound.is_finite() && bound > 0.0) {
            return Err(GridError::InvalidBound(bound));
        }
        Ok(Self { resolution, bound })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn axis(&self) -> Vec<f64> {
        linspace(-self.bound, self.bound, self.resolution)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            bound: Self::DEFAULT_BOUND,
        }
    }
}

impl TryFrom<&GridConfig> for GridSpec {
    type Error = GridError;

    fn try_from(config: &GridConfig) -> Result<Self, Self::Error> {
        GridSpec::new(config.resolution, config.bound)
    }
}

/// Samples `f` on the mesh described by `spec`. Rows are filled in parallel;
/// every height depends only on its own coordinates, so the result is the
/// same as a sequential sweep.
pub fn sample_surface<F>(f: &F, spec: &GridSpec) -> SurfaceGrid
where
    F: DifferentiableFunction + Sync + ?Sized,
{
    let _timer = ScopedTimer::with_level("Surface sampling", log::Level::Debug);
    let axis = spec.axis();
    let n = axis.len();
    let mut heights = vec![0.0; n * n];

    heights
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(j, row)| {
            let y = axis[j];
            for (z, &x) in row.iter_mut().zip(axis.iter()) {
                *z = f.evaluate(Point::new(x, y));
            }
        });

    SurfaceGrid::new(axis, heights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::FunctionKind;

    #[test]
    fn default_is_sixty_by_sixty_on_three() {
        let spec = GridSpec::default();
        assert_eq!(spec.resolution(), 60);
        assert_eq!(spec.bound(), 3.0);
        let axis = spec.axis();
        assert_eq!(axis.first(), Some(&-3.0));
        assert_eq!(axis.last(), Some(&3.0));
    }

    #[test]
    fn rejects_degenerate_specs() {
        assert_eq!(GridSpec::new(1, 3.0), Err(GridError::ResolutionTooSmall(1)));
        assert_eq!(GridSpec::new(10, 0.0), Err(GridError::InvalidBound(0.0)));
        assert!(GridSpec::new(10, f64::INFINITY).is_err());
    }

    #[test]
    fn caps_resolution_before_allocating() {
        assert!(GridSpec::new(GridSpec::MAX_RESOLUTION, 3.0).is_ok());
        assert_eq!(
            GridSpec::new(GridSpec::MAX_RESOLUTION + 1, 3.0),
            Err(GridError::ResolutionTooLarge(GridSpec::MAX_RESOLUTION + 1))
        );
        assert_eq!(
            GridSpec::new(usize::MAX, 3.0),
            Err(GridError::ResolutionTooLarge(usize::MAX))
        );
    }

    #[test]
    fn converts_from_config() {
        let config = GridConfig {
            resolution: 25,
            bound: 2.0,
        };
        let spec = GridSpec::try_from(&config).unwrap();
        assert_eq!(spec.resolution(), 25);
        assert_eq!(spec.bound(), 2.0);
    }

    #[test]
    fn parallel_fill_matches_sequential_definition() {
        let spec = GridSpec::new(17, 2.5).unwrap();
        let f = FunctionKind::Cubic.spec();
        let grid = sample_surface(f, &spec);

        let axis = spec.axis();
        for (j, &y) in axis.iter().enumerate() {
            for (i, &x) in axis.iter().enumerate() {
                assert_eq!(grid.get(i, j), Some(f.value_at(x, y)));
            }
        }
    }
}
