//! Text ingest of `(x, y)` samples.
//!
//! Input files hold numeric tokens separated by whitespace or commas, read
//! pairwise as `x y`. A line may carry several pairs.
//!
//! Design goals:
//! - **Row-level validation** (skip bad lines, but report what happened)
//! - **Deterministic behavior** (samples keep file order)
//! - **Separation of concerns**: no fitting logic here
//!
//! Blank lines and `#` comments are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::Dataset;
use crate::error::AppError;

/// A line-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Ingest output: the dataset plus what was skipped.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub dataset: Dataset,
    pub row_errors: Vec<RowError>,
    /// Non-blank, non-comment lines seen.
    pub rows_read: usize,
    /// Lines that contributed samples.
    pub rows_used: usize,
}

/// Load samples from a file.
pub fn load_dataset(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open data file '{}': {e}", path.display())))?;
    let data = read_dataset(BufReader::new(file))?;
    log::info!(
        "loaded {} points from '{}' ({} of {} lines used)",
        data.dataset.len(),
        path.display(),
        data.rows_used,
        data.rows_read
    );
    Ok(data)
}

/// Read samples from any buffered reader.
pub fn read_dataset<R: BufRead>(reader: R) -> Result<IngestedData, AppError> {
    let mut dataset = Dataset::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_used = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AppError::new(2, format!("Failed to read line {line_no}: {e}")))?;

        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        rows_read += 1;

        match parse_pairs(content) {
            Ok(pairs) => {
                for (x, y) in pairs {
                    dataset.add_point(x, y)?;
                }
                rows_used += 1;
            }
            Err(message) => {
                log::warn!("skipping line {line_no}: {message}");
                row_errors.push(RowError { line: line_no, message });
            }
        }
    }

    if dataset.is_empty() {
        return Err(AppError::new(3, "No valid data points found in input."));
    }

    Ok(IngestedData {
        dataset,
        row_errors,
        rows_read,
        rows_used,
    })
}

/// Parse one line's tokens into `(x, y)` pairs.
pub fn parse_pairs(content: &str) -> Result<Vec<(f64, f64)>, String> {
    let values = content
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<f64>, String>>()?;

    if values.len() % 2 != 0 {
        return Err(format!("expected x y pairs, found {} value(s)", values.len()));
    }
    Ok(values.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

fn parse_value(token: &str) -> Result<f64, String> {
    let v = token
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{token}'"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("non-finite value '{token}'"))
    }
}
