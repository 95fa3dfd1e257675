use log::debug;
use nalgebra::DVector;

use crate::tridiagonal::TridiagonalSystem;

/// Forward elimination coefficients, one pair per row, so that `c[i] = u[i-1] * c[i+1] + v[i-1]`
/// for every interior knot `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

/// Forward pass of the Thomas algorithm.
///
/// The system rows are diagonally dominant for positive widths, so the denominators never vanish.
pub fn forward_sweep(system: &TridiagonalSystem) -> Sweep {
    let rows = system.rows();
    let mut u = Vec::with_capacity(rows.len());
    let mut v = Vec::with_capacity(rows.len());

    let mut rows_iter = rows.iter();
    if let Some(first) = rows_iter.next() {
        u.push(-first.sup / first.diag);
        v.push(first.rhs / first.diag);
    }

    for (i, row) in rows_iter.enumerate() {
        let denominator = row.sub * u[i] + row.diag;
        u.push(-row.sup / denominator);
        v.push((row.rhs - row.sub * v[i]) / denominator);
    }

    Sweep { u, v }
}

/// Backward pass. Returns second-derivative coefficients for all `knot_count` knots, the end ones
/// clamped to zero.
pub fn back_substitute(sweep: &Sweep, knot_count: usize) -> DVector<f64> {
    debug_assert_eq!(sweep.u.len() + 2, knot_count.max(2));

    let mut c = DVector::<f64>::zeros(knot_count);
    for i in (1..knot_count.saturating_sub(1)).rev() {
        c[i] = sweep.u[i - 1] * c[i + 1] + sweep.v[i - 1];
    }
    c
}

/// Solves the natural spline system, see [forward_sweep] and [back_substitute].
pub fn solve(system: &TridiagonalSystem) -> DVector<f64> {
    let sweep = forward_sweep(system);
    debug!("forward sweep: u = {:?}, v = {:?}", sweep.u, sweep.v);

    let c = back_substitute(&sweep, system.len() + 2);
    debug!("second derivative coefficients: {:?}", c.as_slice());
    c
}
