//! Sample storage and synthetic data generation.

pub mod dataset;
pub mod sample;

pub use dataset::*;
pub use sample::*;
