use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

/// Single equation of the tridiagonal system for the second-derivative coefficients:
/// `sub * c[i-1] + diag * c[i] + sup * c[i+1] = rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TridiagonalRow {
    pub sub: f64,
    pub diag: f64,
    pub sup: f64,
    pub rhs: f64,
}

impl TridiagonalRow {
    pub fn new(sub: f64, diag: f64, sup: f64, rhs: f64) -> Self {
        TridiagonalRow { sub, diag, sup, rhs }
    }
}

/// Rows of the natural spline system, one per interior knot. The end knots are not part of the
/// system, their coefficients are fixed at zero by the natural boundary condition.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    rows: Vec<TridiagonalRow>,
}

impl TridiagonalSystem {
    pub fn new(rows: Vec<TridiagonalRow>) -> Self {
        TridiagonalSystem { rows }
    }

    pub fn rows(&self) -> &[TridiagonalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dense form of the coefficient matrix.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        let size = self.rows.len();
        let mut matrix = DMatrix::<f64>::zeros(size, size);

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                matrix[(i, i - 1)] = row.sub;
            }
            matrix[(i, i)] = row.diag;
            if i + 1 < size {
                matrix[(i, i + 1)] = row.sup;
            }
        }
        matrix
    }

    pub fn rhs(&self) -> DVector<f64> {
        DVector::from_iterator(self.rows.len(), self.rows.iter().map(|row| row.rhs))
    }
}

/// Builds the system from knots y values and interval widths. For interior knot `i`:
/// - `sub = h[i-1]`, `sup = h[i]`, `diag = 2 (h[i-1] + h[i])`,
/// - `rhs = 3 ((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])`.
///
/// `sub` of the first row and `sup` of the last row are zero.
///
/// Widths must be strictly positive and `ys` must hold one value more than `widths`.
pub fn build_system(ys: &[f64], widths: &[f64]) -> TridiagonalSystem {
    debug_assert_eq!(ys.len(), widths.len() + 1);

    let last_interior = widths.len().saturating_sub(1);
    let mut rows = Vec::with_capacity(last_interior);

    for i in 1..=last_interior {
        let h_prev = widths[i - 1];
        let h_next = widths[i];

        let sub = if i == 1 { 0.0 } else { h_prev };
        let sup = if i == last_interior { 0.0 } else { h_next };
        let diag = 2.0 * (h_prev + h_next);
        let rhs = 3.0 * ((ys[i + 1] - ys[i]) / h_next - (ys[i] - ys[i - 1]) / h_prev);

        trace!("row {}: sub={}, diag={}, sup={}, rhs={}", i, sub, diag, sup, rhs);
        rows.push(TridiagonalRow::new(sub, diag, sup, rhs));
    }

    debug!("built tridiagonal system with {} rows", rows.len());
    TridiagonalSystem::new(rows)
}
