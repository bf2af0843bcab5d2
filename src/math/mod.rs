//! Mathematical utilities: safe division and the normal-equation solver.

pub mod gauss;
pub mod safe;

pub use gauss::*;
pub use safe::*;
