//! Gaussian elimination with partial pivoting.
//!
//! The regression drivers solve small normal-equation systems `A·c = b`
//! stored as an augmented `n × (n + 1)` matrix `[A | b]`:
//!
//! ```text
//! | Σx^0   Σx^1   ...  Σx^d     | Σx^0·y |
//! | Σx^1   Σx^2   ...  Σx^(d+1) | Σx^1·y |
//! | ...                         | ...    |
//! | Σx^d   ...         Σx^(2d)  | Σx^d·y |
//! ```
//!
//! Known limitation: a singular (or numerically singular) system is not
//! reported. Every pivot division goes through `safe_div`, so a zero pivot
//! contributes `0.0` and the solution is degenerate but finite.

use nalgebra::{DMatrix, DVector};

use crate::math::safe_div;

/// An `n × (n + 1)` augmented matrix `[A | b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    inner: DMatrix<f64>,
}

impl AugmentedMatrix {
    /// Zero-filled system of `n` unknowns.
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: DMatrix::zeros(n, n + 1),
        }
    }

    /// Build from row-major data of `n` rows by `n + 1` columns.
    ///
    /// # Panics
    /// Panics if `data.len() != n * (n + 1)`.
    pub fn from_row_slice(n: usize, data: &[f64]) -> Self {
        Self {
            inner: DMatrix::from_row_slice(n, n + 1, data),
        }
    }

    /// Assemble the polynomial normal equations from power sums and
    /// right-hand-side sums.
    ///
    /// `power_sums[k] = Σ x^k` for `k in 0..=2d` and `rhs[i] = Σ x^i·y` for
    /// `i in 0..=d`; the system has `rhs.len()` unknowns.
    ///
    /// # Panics
    /// Panics if `power_sums.len() < 2 * rhs.len() - 1`.
    pub fn normal_equations(power_sums: &[f64], rhs: &[f64]) -> Self {
        let n = rhs.len();
        let mut m = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                m.inner[(i, j)] = power_sums[i + j];
            }
            m.inner[(i, n)] = rhs[i];
        }
        m
    }

    /// Number of unknowns.
    pub fn unknowns(&self) -> usize {
        self.inner.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner[(row, col)]
    }
}

/// Solve `[A | b]` by forward elimination with partial pivoting followed by
/// back-substitution. The matrix is consumed.
pub fn solve(matrix: AugmentedMatrix) -> DVector<f64> {
    let mut a = matrix.inner;
    let n = a.nrows();

    for k in 0..n {
        // Largest |A[i][k]| for i in k..n becomes the pivot.
        let mut max_row = k;
        for i in (k + 1)..n {
            if a[(i, k)].abs() > a[(max_row, k)].abs() {
                max_row = i;
            }
        }
        if max_row != k {
            a.swap_rows(k, max_row);
        }

        for i in (k + 1)..n {
            let factor = safe_div(a[(i, k)], a[(k, k)]);
            if factor == 0.0 {
                continue;
            }
            for j in k..=n {
                a[(i, j)] -= factor * a[(k, j)];
            }
        }
    }

    let mut c = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut acc = a[(i, n)];
        for j in (i + 1)..n {
            acc -= a[(i, j)] * c[j];
        }
        c[i] = safe_div(acc, a[(i, i)]);
    }

    log::trace!("gauss: solved {n}x{} system -> {:?}", n + 1, c.as_slice());
    c
}
