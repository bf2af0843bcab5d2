//! Regression drivers, one per model family.
//!
//! Each driver:
//! 1. validates its preconditions (point count, log domain) before any
//!    numerical work, returning a `FitError` on violation
//! 2. accumulates the sums its normal equations need, recording a per-row
//!    trace of the derived terms
//! 3. solves the system (closed form for the two-parameter models, the pivoted
//!    solver for quadratic and polynomial)
//! 4. back-transforms to model space where needed and evaluates R²
//!
//! Drivers borrow the dataset immutably and keep no state between calls.

use crate::data::Dataset;
use crate::domain::{DerivedTerm, FitResult, ModelKind, TraceRow};
use crate::error::FitError;
use crate::fit::r2::r_squared;
use crate::math::{safe_div, solve, AugmentedMatrix};

/// Fit the given model kind.
pub fn fit_model(dataset: &Dataset, model: ModelKind) -> Result<FitResult, FitError> {
    match model {
        ModelKind::Linear => fit_linear(dataset),
        ModelKind::Logarithmic => fit_logarithmic(dataset),
        ModelKind::Exponential => fit_exponential(dataset),
        ModelKind::Quadratic => fit_quadratic(dataset),
        ModelKind::Polynomial(degree) => fit_polynomial(dataset, degree),
    }
}

/// `y = a + b·x`.
pub fn fit_linear(dataset: &Dataset) -> Result<FitResult, FitError> {
    let model = ModelKind::Linear;
    require_points(dataset, model)?;

    let mut sums = PairSums::default();
    let mut trace = Vec::with_capacity(dataset.len());
    for (i, s) in dataset.iter().enumerate() {
        sums.add(s.x, s.y);
        trace.push(TraceRow::new(
            i,
            *s,
            vec![
                DerivedTerm::new("x^2", s.x * s.x),
                DerivedTerm::new("x*y", s.x * s.y),
            ],
        ));
    }

    let (a, b) = sums.solve();
    Ok(finish(dataset, model, vec![a, b], trace))
}

/// `y = a + b·ln(x)`, fitted as a line in `(ln x, y)`.
pub fn fit_logarithmic(dataset: &Dataset) -> Result<FitResult, FitError> {
    let model = ModelKind::Logarithmic;
    require_points(dataset, model)?;
    if let Some((index, s)) = dataset.iter().enumerate().find(|(_, s)| s.x <= 0.0) {
        return Err(FitError::NonPositiveX { index, value: s.x });
    }

    let mut sums = PairSums::default();
    let mut trace = Vec::with_capacity(dataset.len());
    for (i, s) in dataset.iter().enumerate() {
        let ln_x = s.x.ln();
        sums.add(ln_x, s.y);
        trace.push(TraceRow::new(
            i,
            *s,
            vec![
                DerivedTerm::new("ln(x)", ln_x),
                DerivedTerm::new("ln(x)^2", ln_x * ln_x),
                DerivedTerm::new("ln(x)*y", ln_x * s.y),
            ],
        ));
    }

    let (a, b) = sums.solve();
    Ok(finish(dataset, model, vec![a, b], trace))
}

/// `y = a·e^(b·x)`, fitted as a line in `(x, ln y)` and back-transformed with
/// `a = e^A`.
pub fn fit_exponential(dataset: &Dataset) -> Result<FitResult, FitError> {
    let model = ModelKind::Exponential;
    require_points(dataset, model)?;
    if let Some((index, s)) = dataset.iter().enumerate().find(|(_, s)| s.y <= 0.0) {
        return Err(FitError::NonPositiveY { index, value: s.y });
    }

    let mut sums = PairSums::default();
    let mut trace = Vec::with_capacity(dataset.len());
    for (i, s) in dataset.iter().enumerate() {
        let ln_y = s.y.ln();
        sums.add(s.x, ln_y);
        trace.push(TraceRow::new(
            i,
            *s,
            vec![
                DerivedTerm::new("ln(y)", ln_y),
                DerivedTerm::new("x*ln(y)", s.x * ln_y),
            ],
        ));
    }

    let (intercept, slope) = sums.solve();
    Ok(finish(dataset, model, vec![intercept.exp(), slope], trace))
}

/// `y = a + b·x + c·x²` via the 3×3 normal equations.
pub fn fit_quadratic(dataset: &Dataset) -> Result<FitResult, FitError> {
    let model = ModelKind::Quadratic;
    require_points(dataset, model)?;

    let mut power_sums = [0.0; 5];
    let mut rhs = [0.0; 3];
    let mut trace = Vec::with_capacity(dataset.len());
    for (i, s) in dataset.iter().enumerate() {
        let (x, y) = (s.x, s.y);
        let x2 = x * x;
        let x3 = x2 * x;
        let x4 = x2 * x2;

        power_sums[0] += 1.0;
        power_sums[1] += x;
        power_sums[2] += x2;
        power_sums[3] += x3;
        power_sums[4] += x4;
        rhs[0] += y;
        rhs[1] += x * y;
        rhs[2] += x2 * y;

        trace.push(TraceRow::new(
            i,
            *s,
            vec![
                DerivedTerm::new("x^2", x2),
                DerivedTerm::new("x^3", x3),
                DerivedTerm::new("x^4", x4),
                DerivedTerm::new("x*y", x * y),
                DerivedTerm::new("x^2*y", x2 * y),
            ],
        ));
    }

    let c = solve(AugmentedMatrix::normal_equations(&power_sums, &rhs));
    Ok(finish(dataset, model, c.iter().copied().collect(), trace))
}

/// `y = Σ c_i·x^i` for `i in 0..=degree` via the `(d+1)×(d+2)` normal
/// equations.
///
/// The degree must lie in `1..=n-1`; a zero degree is `InvalidDegree`, and a
/// dataset with `n <= degree` samples is `InsufficientPoints`.
pub fn fit_polynomial(dataset: &Dataset, degree: usize) -> Result<FitResult, FitError> {
    let model = ModelKind::Polynomial(degree);
    if degree == 0 {
        return Err(FitError::InvalidDegree {
            degree,
            max: dataset.len().saturating_sub(1),
        });
    }
    require_points(dataset, model)?;

    let mut power_sums = vec![0.0; 2 * degree + 1];
    let mut rhs = vec![0.0; degree + 1];
    let mut trace = Vec::with_capacity(dataset.len());
    for (i, s) in dataset.iter().enumerate() {
        let mut terms = Vec::with_capacity(degree);
        let mut p = 1.0;
        for (k, sum) in power_sums.iter_mut().enumerate() {
            *sum += p;
            if k <= degree {
                rhs[k] += p * s.y;
                if k >= 1 {
                    terms.push(DerivedTerm::new(format!("x^{k}*y"), p * s.y));
                }
            }
            p *= s.x;
        }
        trace.push(TraceRow::new(i, *s, terms));
    }

    let c = solve(AugmentedMatrix::normal_equations(&power_sums, &rhs));
    Ok(finish(dataset, model, c.iter().copied().collect(), trace))
}

fn require_points(dataset: &Dataset, model: ModelKind) -> Result<(), FitError> {
    let required = model.min_points();
    if dataset.len() < required {
        log::debug!(
            "{}: rejected, {} points < {required}",
            model.display_name(),
            dataset.len()
        );
        return Err(FitError::InsufficientPoints {
            model,
            required,
            got: dataset.len(),
        });
    }
    Ok(())
}

fn finish(dataset: &Dataset, model: ModelKind, coefficients: Vec<f64>, trace: Vec<TraceRow>) -> FitResult {
    let r2 = r_squared(dataset, model, &coefficients);
    log::debug!(
        "{}: n={} coefficients={:?} r2={r2:.6}",
        model.display_name(),
        dataset.len(),
        coefficients
    );
    FitResult {
        model,
        coefficients,
        r2,
        trace,
    }
}

/// Running sums for a two-parameter least-squares line `v = a + b·u`.
#[derive(Debug, Default)]
struct PairSums {
    n: f64,
    su: f64,
    sv: f64,
    suu: f64,
    suv: f64,
}

impl PairSums {
    fn add(&mut self, u: f64, v: f64) {
        self.n += 1.0;
        self.su += u;
        self.sv += v;
        self.suu += u * u;
        self.suv += u * v;
    }

    /// Closed-form solution of the 2×2 normal equations: `(a, b)`.
    fn solve(&self) -> (f64, f64) {
        let denom = self.n * self.suu - self.su * self.su;
        let a = safe_div(self.sv * self.suu - self.su * self.suv, denom);
        let b = safe_div(self.n * self.suv - self.su * self.sv, denom);
        (a, b)
    }
}
