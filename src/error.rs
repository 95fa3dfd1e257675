use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplineError>;

/// Failures of spline construction, evaluation and sampling. All of them are deterministic input
/// validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Fewer knots than needed to form a single interval.
    #[error("Error in Spline: at least {required} knots are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Interval `index` has a zero or negative width.
    #[error("Error in Spline: knot x values must be strictly increasing, interval {index} is [{left}, {right}]")]
    NonMonotonicInput { index: usize, left: f64, right: f64 },

    /// Knot `index` has an infinite or NaN x value.
    #[error("Error in Spline: knot {index} has non finite x = {x}")]
    NonFiniteInput { index: usize, x: f64 },

    /// Sampling step is not a finite positive number.
    #[error("Error in Spline: sampling step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    /// Evaluation point lies outside of the knots range.
    #[error("Error in Spline: x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },
}
