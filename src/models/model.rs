//! Model evaluation for linear / logarithmic / exponential / quadratic /
//! polynomial fits.
//!
//! The rest of the crate relies on two primitive operations:
//! - predict `y(x)` given the model and its coefficients (R², plots)
//! - render the fitted equation for reports and the regression log

use crate::domain::ModelKind;

/// Predict `y(x)` for the given model kind.
///
/// Coefficients are lowest order first. The logarithmic model is only defined
/// for `x > 0`; callers get `NaN`/`-inf` outside that domain.
///
/// # Panics
/// Panics if `coefficients` is shorter than `model.coefficient_len()`.
pub fn predict(model: ModelKind, x: f64, coefficients: &[f64]) -> f64 {
    let c = coefficients;
    match model {
        ModelKind::Linear => c[0] + c[1] * x,
        ModelKind::Logarithmic => c[0] + c[1] * x.ln(),
        ModelKind::Exponential => c[0] * (c[1] * x).exp(),
        ModelKind::Quadratic => c[0] + c[1] * x + c[2] * x * x,
        ModelKind::Polynomial(degree) => c[..=degree].iter().rev().fold(0.0, |acc, &ci| acc * x + ci),
    }
}

/// Render `y = ...` with six decimals per coefficient.
///
/// Missing coefficients render as `NaN`; polynomial terms past the end of
/// `coefficients` are left out.
pub fn format_equation(model: ModelKind, coefficients: &[f64]) -> String {
    let c = |i: usize| coefficients.get(i).copied().unwrap_or(f64::NAN);
    match model {
        ModelKind::Linear => format!("y = {:.6} + {:.6} * x", c(0), c(1)),
        ModelKind::Logarithmic => format!("y = {:.6} + {:.6} * ln(x)", c(0), c(1)),
        ModelKind::Exponential => format!("y = {:.6} * e^({:.6} * x)", c(0), c(1)),
        ModelKind::Quadratic => format!("y = {:.6} + {:.6} * x + {:.6} * x^2", c(0), c(1), c(2)),
        ModelKind::Polynomial(degree) => {
            let mut out = format!("y = {:.6}", c(0));
            for (i, ci) in coefficients.iter().enumerate().take(degree.saturating_add(1)).skip(1) {
                out.push_str(&format!(" {ci:+.6}x^{i}"));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluators_match_closed_forms() {
        assert_eq!(predict(ModelKind::Linear, 2.0, &[1.0, 3.0]), 7.0);
        assert!((predict(ModelKind::Logarithmic, std::f64::consts::E, &[1.0, 2.0]) - 3.0).abs() < 1e-12);
        assert!((predict(ModelKind::Exponential, 0.0, &[4.0, 9.0]) - 4.0).abs() < 1e-12);
        assert_eq!(predict(ModelKind::Quadratic, 3.0, &[1.0, 0.0, 2.0]), 19.0);
    }

    #[test]
    fn polynomial_uses_degree_terms_only() {
        // 1 + 2x + 3x^2 at x = 2 -> 17; the trailing coefficient is ignored.
        let y = predict(ModelKind::Polynomial(2), 2.0, &[1.0, 2.0, 3.0, 100.0]);
        assert_eq!(y, 17.0);
        assert_eq!(predict(ModelKind::Polynomial(1), -1.0, &[0.5, 0.5]), 0.0);
    }

    #[test]
    fn equations_render_signed_polynomial_terms() {
        let eq = format_equation(ModelKind::Polynomial(2), &[1.0, -2.0, 0.5]);
        assert_eq!(eq, "y = 1.000000 -2.000000x^1 +0.500000x^2");
        let eq = format_equation(ModelKind::Exponential, &[2.0, 0.1]);
        assert_eq!(eq, "y = 2.000000 * e^(0.100000 * x)");
    }

    #[test]
    fn short_coefficient_slices_render_nan() {
        assert_eq!(format_equation(ModelKind::Linear, &[1.0]), "y = 1.000000 + NaN * x");
        assert_eq!(format_equation(ModelKind::Quadratic, &[]), "y = NaN + NaN * x + NaN * x^2");
        assert_eq!(format_equation(ModelKind::Polynomial(usize::MAX), &[2.0, 1.0]), "y = 2.000000 +1.000000x^1");
    }
}
