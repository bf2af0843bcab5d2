//! Safe division.
//!
//! Every division in the regression engine goes through `safe_div`, so a
//! near-zero denominator (singular normal equations, constant `y`, an empty
//! sum) yields `0.0` instead of propagating `Inf`/`NaN` into reported results.

/// Divide `a / b`, returning `0.0` when `|b| < f64::EPSILON`.
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b.abs() < f64::EPSILON { 0.0 } else { a / b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_div(-5.0, 1e-17), 0.0);
        assert_eq!(safe_div(0.0, -0.0), 0.0);
    }

    #[test]
    fn regular_division_is_untouched() {
        assert_eq!(safe_div(6.0, 3.0), 2.0);
        assert_eq!(safe_div(1.0, -4.0), -0.25);
    }
}
