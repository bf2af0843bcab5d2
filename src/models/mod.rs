//! Model evaluators for the five regression families.
//!
//! Models are implemented as small, pure functions so that the drivers, R²
//! evaluation and plotting can stay generic over `ModelKind`.

pub mod model;

pub use model::*;
