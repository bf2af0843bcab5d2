//! Exports: fit results to JSON, datasets to plain `x y` text.
//!
//! The JSON export is meant to be easy to consume in notebooks or downstream
//! scripts: model, coefficients, R² and the per-row trace for every fit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::data::Dataset;
use crate::domain::FitResult;
use crate::error::AppError;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct ResultsFile<'a> {
    pub tool: &'static str,
    pub generated_at: DateTime<Local>,
    pub n_points: usize,
    pub fits: &'a [FitResult],
}

impl<'a> ResultsFile<'a> {
    pub fn new(n_points: usize, fits: &'a [FitResult]) -> Self {
        Self {
            tool: "lsq",
            generated_at: Local::now(),
            n_points,
            fits,
        }
    }
}

/// Write fit results to a pretty-printed JSON file.
pub fn write_results_json(path: &Path, n_points: usize, fits: &[FitResult]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), &ResultsFile::new(n_points, fits))
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    log::info!("exported {} fit(s) to '{}'", fits.len(), path.display());
    Ok(())
}

/// Write a dataset as one `x y` pair per line, readable by `load_dataset`.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create data file '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_pairs(&mut out, dataset)
        .and_then(|_| out.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write data file: {e}")))
}

/// Write `x y` lines to any writer.
pub fn write_pairs<W: Write>(out: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    writeln!(out, "# x y")?;
    for s in dataset {
        writeln!(out, "{} {}", s.x, s.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{fit_linear, fit_polynomial};

    #[test]
    fn writes_models_coefficients_and_trace() {
        let ds = Dataset::from_pairs([(1.0, 2.0), (2.0, 4.0), (3.0, 6.5)]).unwrap();
        let fits = vec![fit_linear(&ds).unwrap(), fit_polynomial(&ds, 2).unwrap()];

        let path = std::env::temp_dir().join(format!("lsq_curves_export_{}.json", std::process::id()));
        write_results_json(&path, ds.len(), &fits).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["tool"], "lsq");
        assert_eq!(doc["n_points"], 3);
        assert_eq!(doc["fits"][0]["model"], "linear");
        assert_eq!(doc["fits"][1]["model"]["polynomial"], 2);
        assert_eq!(doc["fits"][1]["coefficients"].as_array().unwrap().len(), 3);
        assert_eq!(doc["fits"][0]["trace"][2]["terms"][0]["label"], "x^2");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn written_dataset_reads_back_in_order() {
        let ds = Dataset::from_pairs([(0.5, -1.25), (2.0, 3.0), (1e-3, 7.5)]).unwrap();
        let path = std::env::temp_dir().join(format!("lsq_curves_pairs_{}.txt", std::process::id()));
        write_dataset(&path, &ds).unwrap();

        let back = crate::io::load_dataset(&path).unwrap();
        assert_eq!(back.dataset, ds);
        assert!(back.row_errors.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
