//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - samples and model kinds (`Sample`, `ModelKind`, `ModelSpec`)
//! - fit outputs (`FitResult`, `TraceRow`, `DerivedTerm`)
//! - the resolved run configuration (`RunConfig`)

pub mod types;

pub use types::*;
