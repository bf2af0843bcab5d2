//! Input/output helpers.
//!
//! - text ingest + validation (`ingest`)
//! - append-only regression log (`logfile`)
//! - JSON result exports (`export`)

pub mod export;
pub mod ingest;
pub mod logfile;

pub use export::*;
pub use ingest::*;
pub use logfile::*;
