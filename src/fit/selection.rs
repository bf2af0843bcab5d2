//! Model comparison: fit every applicable model and rank by R².
//!
//! Models that cannot be fitted (too few points, log-domain violations, an
//! out-of-range degree) are recorded as skipped with their reason instead of
//! failing the whole comparison.

use crate::data::Dataset;
use crate::domain::{FitResult, ModelKind, ModelSpec};
use crate::error::{AppError, FitError};
use crate::fit::drivers::fit_model;

/// Output of fitting + ranking.
#[derive(Debug, Clone)]
pub struct FitSelection {
    /// Successful fits, best R² first.
    pub fits: Vec<FitResult>,
    /// Models that were skipped and why.
    pub skipped: Vec<(ModelKind, FitError)>,
}

impl FitSelection {
    /// Highest-R² fit, if any model succeeded.
    pub fn best(&self) -> Option<&FitResult> {
        self.fits.first()
    }
}

/// The model kinds compared by `fit_all`, in order of increasing complexity.
pub fn candidate_models(degree: Option<usize>) -> Vec<ModelKind> {
    let mut kinds = vec![
        ModelKind::Linear,
        ModelKind::Logarithmic,
        ModelKind::Exponential,
        ModelKind::Quadratic,
    ];
    if let Some(degree) = degree {
        kinds.push(ModelKind::Polynomial(degree));
    }
    kinds
}

/// Fit every candidate model and rank the successes by R² (descending).
///
/// The polynomial model is only attempted when a degree is supplied.
pub fn fit_all(dataset: &Dataset, degree: Option<usize>) -> FitSelection {
    let mut fits = Vec::new();
    let mut skipped = Vec::new();

    for kind in candidate_models(degree) {
        match fit_model(dataset, kind) {
            Ok(fit) => fits.push(fit),
            Err(err) => {
                log::debug!("skipping {}: {err}", kind.display_name());
                skipped.push((kind, err));
            }
        }
    }

    // Stable sort: ties keep the simpler model first.
    fits.sort_by(|a, b| b.r2.partial_cmp(&a.r2).unwrap_or(std::cmp::Ordering::Equal));

    FitSelection { fits, skipped }
}

/// Fit the model(s) selected on the command line.
///
/// A single requested model that fails is an error; `All` reports failures as
/// skipped and only errors when nothing could be fitted.
pub fn fit_and_select(dataset: &Dataset, spec: ModelSpec, degree: Option<usize>) -> Result<FitSelection, AppError> {
    if spec == ModelSpec::All {
        let selection = fit_all(dataset, degree);
        if selection.fits.is_empty() {
            return Err(AppError::new(3, "Insufficient data to fit any model."));
        }
        return Ok(selection);
    }

    let kind = spec
        .to_kind(degree)
        .ok_or_else(|| AppError::new(2, "Polynomial regression requires --degree."))?;
    let fit = fit_model(dataset, kind)?;
    Ok(FitSelection {
        fits: vec![fit],
        skipped: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_r2_and_records_skips() {
        // Exactly quadratic, with a non-positive x so the log model is skipped.
        let ds = Dataset::from_pairs((-2..=4).map(|i| {
            let x = f64::from(i);
            (x, 1.0 + x * x)
        }))
        .unwrap();

        let selection = fit_all(&ds, None);
        let best = selection.best().unwrap();
        assert_eq!(best.model, ModelKind::Quadratic);
        assert!((best.r2 - 1.0).abs() < 1e-9);

        for pair in selection.fits.windows(2) {
            assert!(pair[0].r2 >= pair[1].r2);
        }
        assert_eq!(selection.skipped.len(), 1);
        assert_eq!(selection.skipped[0].0, ModelKind::Logarithmic);
        assert!(matches!(selection.skipped[0].1, FitError::NonPositiveX { index: 0, .. }));
    }

    #[test]
    fn polynomial_included_only_with_degree() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 3.0), (3.0, 2.0), (4.0, 5.0)]).unwrap();
        let without = fit_all(&ds, None);
        assert_eq!(without.fits.len() + without.skipped.len(), 4);
        let with = fit_all(&ds, Some(3));
        assert!(with.fits.iter().any(|f| f.model == ModelKind::Polynomial(3)));
    }

    #[test]
    fn single_model_failure_is_an_error() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let err = fit_and_select(&ds, ModelSpec::Quadratic, None).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let err = fit_and_select(&ds, ModelSpec::Poly, None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn all_fails_only_when_nothing_fits() {
        let ds = Dataset::from_pairs([(1.0, 1.0)]).unwrap();
        assert!(fit_and_select(&ds, ModelSpec::All, Some(1)).is_err());

        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let selection = fit_and_select(&ds, ModelSpec::All, None).unwrap();
        assert_eq!(selection.fits.len(), 3);
        assert_eq!(selection.skipped.len(), 1);
    }
}
