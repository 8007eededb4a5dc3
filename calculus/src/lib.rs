//! Closed-form two-variable functions, their analytic gradients, and the
//! pure evaluation that feeds the gradient visualiser.

pub mod evaluate;
pub mod explanation;
pub mod function;
pub mod report;
pub mod sampling;

pub use evaluate::{EvaluationRequest, EvaluationResult, evaluate, evaluate_with};
pub use function::{FunctionKind, FunctionSpec, SelectionError, supported_functions};
pub use report::GradientReport;
pub use sampling::{GridError, GridSpec};
