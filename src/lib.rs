//! `lsq-curves` library crate.
//!
//! Least-squares fitting of linear, logarithmic, exponential, quadratic and
//! polynomial models to `(x, y)` samples.
//!
//! The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - the fitting engine is testable without spawning processes
//! - the interactive shell and the batch CLI share one code path

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod shell;
