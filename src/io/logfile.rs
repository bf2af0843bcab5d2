//! Append-only regression log.
//!
//! Each session starts with a timestamped header. Every successful fit appends
//! its per-row trace, the fitted equation and R², tagged with the model name:
//!
//! ```text
//! x[0]=1.00 y=2.00 x^2=1.000 x*y=2.000
//! ...
//! [Linear] y = 0.000000 + 2.000000 * x
//! [Linear] R^2 = 1.000000
//! ```
//!
//! A rejected fit appends a single `[Model] error: ...` line and no trace.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::{FitResult, ModelKind};
use crate::error::{AppError, FitError};
use crate::models::format_equation;

/// Default log file name when neither a flag nor `LSQ_LOG_FILE` is set.
pub const DEFAULT_LOG_FILE: &str = "regression_log.txt";

/// Writer for the regression log.
pub struct RegressionLog<W: Write> {
    out: W,
    path: Option<PathBuf>,
}

impl RegressionLog<BufWriter<File>> {
    /// Open `path` for appending (creating it if needed) and write a session
    /// header.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AppError::new(2, format!("Failed to open regression log '{}': {e}", path.display())))?;
        let mut writer = Self {
            out: BufWriter::new(file),
            path: Some(path.to_path_buf()),
        };
        writer.write_header()?;
        log::debug!("regression log: {}", path.display());
        Ok(writer)
    }
}

impl<W: Write> RegressionLog<W> {
    /// Wrap an arbitrary writer (no session header is written).
    pub fn from_writer(out: W) -> Self {
        Self { out, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn write_header(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "=== regression session {} ===", Local::now().to_rfc3339())
            .and_then(|_| self.out.flush())
            .map_err(write_err)
    }

    /// Append a successful fit.
    pub fn record(&mut self, fit: &FitResult) -> Result<(), AppError> {
        let tag = fit.model.display_name();
        for row in &fit.trace {
            write!(self.out, "x[{}]={:.2} y={:.2}", row.index, row.x, row.y).map_err(write_err)?;
            for term in &row.terms {
                write!(self.out, " {}={:.3}", term.label, term.value).map_err(write_err)?;
            }
            writeln!(self.out).map_err(write_err)?;
        }
        writeln!(self.out, "\n[{tag}] {}", format_equation(fit.model, &fit.coefficients)).map_err(write_err)?;
        writeln!(self.out, "[{tag}] R^2 = {:.6}\n", fit.r2).map_err(write_err)?;
        self.out.flush().map_err(write_err)
    }

    /// Append a rejected fit.
    pub fn record_failure(&mut self, model: ModelKind, err: &FitError) -> Result<(), AppError> {
        writeln!(self.out, "[{}] error: {err}\n", model.display_name())
            .and_then(|_| self.out.flush())
            .map_err(write_err)
    }

    /// Consume the log, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write regression log: {e}"))
}
