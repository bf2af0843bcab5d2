//! Least-squares fitting.
//!
//! Responsibilities:
//!
//! - one regression driver per model family (`drivers`)
//! - goodness of fit (`r2`)
//! - fitting every model and ranking by R² (`selection`)

pub mod drivers;
pub mod r2;
pub mod selection;

pub use drivers::*;
pub use r2::*;
pub use selection::*;
