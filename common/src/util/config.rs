use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid resolution must be between 2 and {max} samples per axis, got {0}", max = MAX_RESOLUTION)]
    InvalidResolution(usize),
    #[error("grid bound must be positive and finite, got {0}")]
    InvalidBound(f64),
    #[error("invalid control range [{min}, {max}] with step {step}")]
    InvalidControls { min: f64, max: f64, step: f64 },
    #[error("default {axis} value {value} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        axis: char,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("image size must be non-zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

pub const MAX_RESOLUTION: usize = 4096;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.controls.validate()?;
        self.output.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default = "default_bound")]
    pub bound: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            bound: default_bound(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !(self.bound.is_finite() && self.bound > 0.0) {
            return Err(ConfigError::InvalidBound(self.bound));
        }
        Ok(())
    }
}

/// Slider policy of the interactive front end. The evaluation itself
/// accepts any finite point; these bounds only shape user input.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_control_min")]
    pub min: f64,
    #[serde(default = "default_control_max")]
    pub max: f64,
    #[serde(default = "default_control_step")]
    pub step: f64,
    #[serde(default = "default_x")]
    pub default_x: f64,
    #[serde(default = "default_y")]
    pub default_y: f64,
    #[serde(default = "default_function")]
    pub default_function: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min: default_control_min(),
            max: default_control_max(),
            step: default_control_step(),
            default_x: default_x(),
            default_y: default_y(),
            default_function: default_function(),
        }
    }
}

impl ControlsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min >= self.max || self.step <= 0.0 {
            return Err(ConfigError::InvalidControls {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        for (axis, value) in [('x', self.default_x), ('y', self.default_y)] {
            if !(self.min..=self.max).contains(&value) {
                return Err(ConfigError::DefaultOutOfRange {
                    axis,
                    value,
                    min: self.min,
                    max: self.max,
                });
            }
        }
        Ok(())
    }

    /// Clamps `value` into `[min, max]` and rounds it onto the step lattice
    /// anchored at `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Trim representation noise such as 0.30000000000000004.
        let scale = 1e9;
        ((snapped * scale).round() / scale).clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
    #[serde(default = "default_surface_file")]
    pub surface_file: String,
    #[serde(default = "default_gradient_file")]
    pub gradient_file: String,
    #[serde(default = "default_image_width")]
    pub width: u32,
    #[serde(default = "default_image_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            surface_file: default_surface_file(),
            gradient_file: default_gradient_file(),
            width: default_image_width(),
            height: default_image_height(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn default_resolution() -> usize {
    60
}

fn default_bound() -> f64 {
    3.0
}

fn default_control_min() -> f64 {
    -3.0
}

fn default_control_max() -> f64 {
    3.0
}

fn default_control_step() -> f64 {
    0.1
}

fn default_x() -> f64 {
    1.0
}

fn default_y() -> f64 {
    1.0
}

fn default_function() -> String {
    "paraboloid".to_string()
}

fn default_output_directory() -> String {
    "output".to_string()
}

fn default_surface_file() -> String {
    "surface.png".to_string()
}

fn default_gradient_file() -> String {
    "gradient.png".to_string()
}

fn default_image_width() -> u32 {
    800
}

fn default_image_height() -> u32 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.grid.resolution, 60);
        assert_eq!(config.grid.bound, 3.0);
        assert_eq!(config.controls.step, 0.1);
        assert_eq!(config.controls.default_function, "paraboloid");
        assert_eq!(config.output.surface_file, "surface.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            resolution = 120

            [controls]
            default_function = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.resolution, 120);
        assert_eq!(config.grid.bound, 3.0);
        assert_eq!(config.controls.default_function, "cubic");
        assert_eq!(config.controls.default_x, 1.0);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let grid = GridConfig {
            resolution: 1,
            bound: 3.0,
        };
        assert_eq!(grid.validate(), Err(ConfigError::InvalidResolution(1)));

        let grid = GridConfig {
            resolution: MAX_RESOLUTION + 1,
            bound: 3.0,
        };
        assert_eq!(
            grid.validate(),
            Err(ConfigError::InvalidResolution(MAX_RESOLUTION + 1))
        );

        let grid = GridConfig {
            resolution: 60,
            bound: -1.0,
        };
        assert_eq!(grid.validate(), Err(ConfigError::InvalidBound(-1.0)));
    }

    #[test]
    fn rejects_inverted_controls_and_stray_defaults() {
        let controls = ControlsConfig {
            min: 3.0,
            max: -3.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            controls.validate(),
            Err(ConfigError::InvalidControls { .. })
        ));

        let controls = ControlsConfig {
            default_y: 4.0,
            ..ControlsConfig::default()
        };
        assert!(matches!(
            controls.validate(),
            Err(ConfigError::DefaultOutOfRange { axis: 'y', .. })
        ));
    }

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        let controls = ControlsConfig::default();
        assert_abs_diff_eq!(controls.snap(1.0), 1.0);
        assert_abs_diff_eq!(controls.snap(0.26), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(controls.snap(-1.04), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(controls.snap(7.0), 3.0);
        assert_abs_diff_eq!(controls.snap(-12.5), -3.0);
    }

    #[test]
    fn zero_sized_images_are_rejected() {
        let output = OutputConfig {
            width: 0,
            ..OutputConfig::default()
        };
        assert!(output.validate().is_err());
    }
}
