//! Error types.
//!
//! - `FitError` is the regression engine's taxonomy. Every variant is a
//!   recoverable condition detected before any numerical work begins.
//! - `AppError` is the command-line layer's error: a message plus the process
//!   exit code it maps to.
//!
//! Near-singular systems are deliberately absent from `FitError`: they are
//! absorbed by the safe-division policy in `math::safe_div` and produce a
//! degenerate (but finite) fit instead of an error.

use crate::domain::ModelKind;

/// Failure of a regression driver or of dataset growth.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Fewer samples than the model needs.
    InsufficientPoints {
        model: ModelKind,
        required: usize,
        got: usize,
    },
    /// An `x` value outside the domain of `ln(x)`.
    NonPositiveX { index: usize, value: f64 },
    /// A `y` value outside the domain of `ln(y)`.
    NonPositiveY { index: usize, value: f64 },
    /// Polynomial degree outside `1..=max`.
    InvalidDegree { degree: usize, max: usize },
    /// Dataset storage could not grow to `requested` samples.
    Allocation { requested: usize },
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InsufficientPoints { model, required, got } => write!(
                f,
                "{} regression needs at least {required} points, got {got}",
                model.display_name()
            ),
            FitError::NonPositiveX { index, value } => {
                write!(f, "x[{index}] = {value:.2} <= 0 (not valid for logarithmic regression)")
            }
            FitError::NonPositiveY { index, value } => {
                write!(f, "y[{index}] = {value:.2} <= 0 (not valid for exponential regression)")
            }
            FitError::InvalidDegree { degree, max } => {
                if *max == 0 {
                    write!(f, "invalid polynomial degree {degree}: not enough points for any polynomial fit")
                } else {
                    write!(f, "invalid polynomial degree {degree}: expected 1..={max}")
                }
            }
            FitError::Allocation { requested } => {
                write!(f, "out of memory growing dataset to {requested} points")
            }
        }
    }
}

impl std::error::Error for FitError {}

/// Command-line error carrying an exit code.
#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
