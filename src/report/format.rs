//! Console tables for datasets, fits and model comparisons.

use crate::data::Dataset;
use crate::domain::FitResult;
use crate::fit::FitSelection;
use crate::models::format_equation;

/// Rows shown by `format_dataset` before eliding the middle.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

const INDEX_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 10;

/// Format the first `limit` samples, then an ellipsis row and the last sample
/// when the dataset is longer.
pub fn format_dataset(dataset: &Dataset, limit: usize) -> String {
    let widths = [INDEX_WIDTH, VALUE_WIDTH, VALUE_WIDTH];
    let mut out = String::new();

    out.push_str(&border(&widths));
    out.push_str(&row(&widths, &["#", "x", "y"]));
    out.push_str(&border(&widths));

    for (i, s) in dataset.iter().take(limit).enumerate() {
        out.push_str(&sample_row(&widths, i + 1, s.x, s.y));
    }
    if dataset.len() > limit {
        out.push_str(&row(&widths, &["...", "...", "..."]));
        if let Some(last) = dataset.last() {
            out.push_str(&sample_row(&widths, dataset.len(), last.x, last.y));
        }
    }
    out.push_str(&border(&widths));
    out.push_str(&format!("Total: {} data points\n", dataset.len()));
    out
}

/// Format a fit: the per-row trace table, the equation and R².
pub fn format_fit(fit: &FitResult) -> String {
    let labels: Vec<&str> = fit
        .trace
        .first()
        .map(|r| r.terms.iter().map(|t| &*t.label).collect())
        .unwrap_or_default();

    let mut widths = vec![INDEX_WIDTH, VALUE_WIDTH, VALUE_WIDTH];
    widths.extend(labels.iter().map(|l| l.len().max(VALUE_WIDTH)));

    let mut header = vec!["#", "x", "y"];
    header.extend(labels.iter().copied());

    let mut out = String::new();
    out.push_str(&format!(
        "\n=== {} REGRESSION ===\n",
        fit.model.display_name().to_uppercase()
    ));
    out.push_str(&border(&widths));
    out.push_str(&row(&widths, &header));
    out.push_str(&border(&widths));
    for r in &fit.trace {
        let mut cells = vec![(r.index + 1).to_string(), format!("{:.2}", r.x), format!("{:.2}", r.y)];
        cells.extend(r.terms.iter().map(|t| format!("{:.3}", t.value)));
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        out.push_str(&row(&widths, &cells));
    }
    out.push_str(&border(&widths));

    out.push_str("\nRegression equation:\n");
    out.push_str(&format_equation(fit.model, &fit.coefficients));
    out.push('\n');
    out.push_str(&format!("Coefficient of determination R^2: {:.6}\n", fit.r2));
    out
}

/// Format the ranking produced by `fit_all`.
pub fn format_comparison(selection: &FitSelection) -> String {
    let mut out = String::from("Model comparison (by R^2):\n");
    for (i, fit) in selection.fits.iter().enumerate() {
        let chosen = if i == 0 { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<24} R^2={:>10.6}  {}\n",
            fit.model.display_name(),
            fit.r2,
            format_equation(fit.model, &fit.coefficients)
        ));
    }
    for (kind, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", kind.display_name()));
    }
    out
}

fn sample_row(widths: &[usize], number: usize, x: f64, y: f64) -> String {
    let cells = [number.to_string(), format!("{x:.2}"), format!("{y:.2}")];
    let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
    row(widths, &cells)
}

fn border(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for w in widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn row(widths: &[usize], cells: &[&str]) -> String {
    let mut out = String::from("|");
    for (&w, cell) in widths.iter().zip(cells) {
        out.push_str(&format!(" {cell:<w$} |"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{fit_all, fit_quadratic};

    #[test]
    fn dataset_preview_elides_middle() {
        let ds = Dataset::from_pairs((0..25).map(|i| (f64::from(i), 2.0 * f64::from(i)))).unwrap();
        let text = format_dataset(&ds, DEFAULT_PREVIEW_ROWS);
        assert!(text.contains("| 20    | 19.00      | 38.00      |"), "{text}");
        assert!(!text.contains("| 21    |"), "{text}");
        assert!(text.contains("| ...   |"), "{text}");
        assert!(text.contains("| 25    | 24.00      | 48.00      |"), "{text}");
        assert!(text.ends_with("Total: 25 data points\n"));
    }

    #[test]
    fn short_dataset_has_no_ellipsis() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let text = format_dataset(&ds, DEFAULT_PREVIEW_ROWS);
        assert!(!text.contains("..."));
    }

    #[test]
    fn fit_table_uses_model_terms() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]).unwrap();
        let text = format_fit(&fit_quadratic(&ds).unwrap());
        assert!(text.contains("=== QUADRATIC REGRESSION ==="), "{text}");
        for label in ["x^2", "x^3", "x^4", "x*y", "x^2*y"] {
            assert!(text.contains(label), "missing {label}: {text}");
        }
        assert!(text.contains("81.000"), "{text}");
        assert!(text.contains("R^2: 1.000000"), "{text}");
    }

    #[test]
    fn comparison_marks_best_and_lists_skips() {
        let ds = Dataset::from_pairs([(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)]).unwrap();
        let text = format_comparison(&fit_all(&ds, None));
        let first = text.lines().nth(1).unwrap();
        assert!(first.starts_with("* Quadratic"), "{text}");
        assert!(text.contains("(skipped Logarithmic) x[0]"), "{text}");
    }
}
