//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - passed between the regression engine and the presentation layer
//! - exported to JSON
//! - written to the regression log

use std::borrow::Cow;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Concrete model family fitted by a regression driver.
///
/// The polynomial variant carries its degree so an evaluator always knows how
/// many terms to sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Logarithmic,
    Exponential,
    Quadratic,
    Polynomial(usize),
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> String {
        match self {
            ModelKind::Linear => "Linear".to_string(),
            ModelKind::Logarithmic => "Logarithmic".to_string(),
            ModelKind::Exponential => "Exponential".to_string(),
            ModelKind::Quadratic => "Quadratic".to_string(),
            ModelKind::Polynomial(degree) => format!("Polynomial (degree {degree})"),
        }
    }

    /// Number of fitted coefficients.
    pub fn coefficient_len(self) -> usize {
        match self {
            ModelKind::Linear | ModelKind::Logarithmic | ModelKind::Exponential => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Polynomial(degree) => degree.saturating_add(1),
        }
    }

    /// Minimum number of samples the driver accepts.
    pub fn min_points(self) -> usize {
        match self {
            ModelKind::Linear | ModelKind::Logarithmic | ModelKind::Exponential => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Polynomial(degree) => degree.saturating_add(1),
        }
    }
}

/// Which model(s) to fit, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelSpec {
    Linear,
    #[value(alias = "logarithmic")]
    Log,
    #[value(alias = "exponential")]
    Exp,
    Quadratic,
    #[value(alias = "polynomial")]
    Poly,
    All,
}

impl ModelSpec {
    /// Resolve to a concrete model kind; `None` for `All`.
    ///
    /// `Poly` requires a degree; the degree's range is validated by the driver.
    pub fn to_kind(self, degree: Option<usize>) -> Option<ModelKind> {
        match self {
            ModelSpec::Linear => Some(ModelKind::Linear),
            ModelSpec::Log => Some(ModelKind::Logarithmic),
            ModelSpec::Exp => Some(ModelKind::Exponential),
            ModelSpec::Quadratic => Some(ModelKind::Quadratic),
            ModelSpec::Poly => degree.map(ModelKind::Polynomial),
            ModelSpec::All => None,
        }
    }
}

/// A derived per-row quantity exposed in the trace (e.g. `x^2`, `ln(x)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTerm {
    pub label: Cow<'static, str>,
    pub value: f64,
}

impl DerivedTerm {
    pub fn new(label: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One row of a driver's trace: the raw sample plus its derived terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRow {
    /// Zero-based sample index.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub terms: Vec<DerivedTerm>,
}

impl TraceRow {
    pub fn new(index: usize, sample: Sample, terms: Vec<DerivedTerm>) -> Self {
        Self {
            index,
            x: sample.x,
            y: sample.y,
            terms,
        }
    }

    /// Look up a derived term by label.
    pub fn term(&self, label: &str) -> Option<f64> {
        self.terms.iter().find(|t| t.label == label).map(|t| t.value)
    }
}

/// Output of a single regression driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub model: ModelKind,
    /// Model-space coefficients, lowest order first (`a`, `b`, `c`, ...).
    pub coefficients: Vec<f64>,
    pub r2: f64,
    pub trace: Vec<TraceRow>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags plus environment defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub model_spec: ModelSpec,
    pub degree: Option<usize>,

    /// Regression log path; `None` disables logging to file.
    pub log_path: Option<PathBuf>,
    pub export: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}
