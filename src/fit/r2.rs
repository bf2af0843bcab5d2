//! Goodness of fit.
//!
//! `R² = 1 − SS_res / SS_tot` with
//! `SS_tot = Σ (y_i − ȳ)²` and `SS_res = Σ (y_i − model(x_i))²`.

use crate::data::Dataset;
use crate::domain::ModelKind;
use crate::math::safe_div;
use crate::models::predict;

/// Coefficient of determination of `model` with `coefficients` over `dataset`.
///
/// Returns `0.0` when `SS_tot` is numerically zero (all `y` equal, or an empty
/// dataset), so the result is never `NaN`/`Inf` from that division.
pub fn r_squared(dataset: &Dataset, model: ModelKind, coefficients: &[f64]) -> f64 {
    let y_mean = safe_div(dataset.iter().map(|s| s.y).sum(), dataset.len() as f64);

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for s in dataset {
        let residual = s.y - predict(model, s.x, coefficients);
        let deviation = s.y - y_mean;
        ss_res += residual * residual;
        ss_tot += deviation * deviation;
    }

    if ss_tot.abs() < f64::EPSILON {
        return 0.0;
    }
    1.0 - safe_div(ss_res, ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_is_one() {
        let ds = Dataset::from_pairs([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
        let r2 = r_squared(&ds, ModelKind::Linear, &[0.0, 2.0]);
        assert!((r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_model_is_zero() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 3.0), (3.0, 2.0)]).unwrap();
        let r2 = r_squared(&ds, ModelKind::Linear, &[2.0, 0.0]);
        assert!(r2.abs() < 1e-12);
    }

    #[test]
    fn worse_than_mean_is_negative() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
        let r2 = r_squared(&ds, ModelKind::Linear, &[4.0, -1.0]);
        assert!(r2 < 0.0);
    }

    #[test]
    fn constant_y_is_zero_not_nan() {
        let ds = Dataset::from_pairs([(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]).unwrap();
        assert_eq!(r_squared(&ds, ModelKind::Linear, &[5.0, 0.0]), 0.0);
        assert_eq!(r_squared(&Dataset::new(), ModelKind::Linear, &[0.0, 0.0]), 0.0);
    }
}
