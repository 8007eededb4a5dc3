pub mod cubic;
pub mod paraboloid;
pub mod traits;

use crate::explanation::Explanation;
use gradviz_common::geom::point::Point;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
pub use traits::DifferentiableFunction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("function index {index} out of range (only {len} functions are supported)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Paraboloid,
    Cubic,
}

impl FunctionKind {
    /// Display order of the selection control.
    pub const ALL: [FunctionKind; 2] = [FunctionKind::Paraboloid, FunctionKind::Cubic];

    pub fn spec(self) -> &'static FunctionSpec {
        match self {
            FunctionKind::Paraboloid => &paraboloid::SPEC,
            FunctionKind::Cubic => &cubic::SPEC,
        }
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn short_name(self) -> &'static str {
        match self {
            FunctionKind::Paraboloid => "paraboloid",
            FunctionKind::Cubic => "cubic",
        }
    }

    pub fn from_index(index: usize) -> Result<Self, SelectionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                len: Self::ALL.len(),
            })
    }

    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| SelectionError::UnknownFunction(label.to_string()))
    }
}

impl FromStr for FunctionKind {
    type Err = SelectionError;

    /// Accepts the display label, the short name, or the letters `a`/`b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(kind) = Self::from_label(trimmed) {
            return Ok(kind);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "paraboloid" | "a" => Ok(FunctionKind::Paraboloid),
            "cubic" | "b" => Ok(FunctionKind::Cubic),
            _ => Err(SelectionError::UnknownFunction(s.to_string())),
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A function paired with its hand-derived gradient.
///
/// Value and gradient are defined side by side in the variant's module.
#[derive(Clone, Copy)]
pub struct FunctionSpec {
    pub kind: FunctionKind,
    pub label: &'static str,
    pub latex: &'static str,
    value: fn(f64, f64) -> f64,
    gradient: fn(f64, f64) -> Point<f64>,
    pub extended: Option<&'static Explanation>,
}

impl FunctionSpec {
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        (self.value)(x, y)
    }

    pub fn gradient_at(&self, x: f64, y: f64) -> Point<f64> {
        (self.gradient)(x, y)
    }
}

impl fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("extended", &self.extended.map(|e| e.title))
            .finish()
    }
}

impl DifferentiableFunction for FunctionSpec {
    fn evaluate(&self, p: Point<f64>) -> f64 {
        self.value_at(p.x, p.y)
    }

    fn gradient(&self, p: Point<f64>) -> Point<f64> {
        self.gradient_at(p.x, p.y)
    }
}

pub fn supported_functions() -> Vec<&'static str> {
    FunctionKind::ALL.iter().map(|kind| kind.label()).collect()
}
