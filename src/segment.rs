use log::trace;

use crate::{
    error::{Result, SplineError},
    knot::Knot,
};

/// Range between two consecutive knots, covered by a single cubic polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub x_left: f64,
    pub x_right: f64,
}

impl Interval {
    pub fn new(x_left: f64, x_right: f64) -> Self {
        Interval { x_left, x_right }
    }

    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    /// Closed range check, both ends included.
    pub fn contains(&self, x: f64) -> bool {
        self.x_left <= x && x <= self.x_right
    }
}

/// Splits ordered knots into consecutive intervals.
///
/// # Errors
/// - [SplineError::InsufficientData] when fewer than 2 knots are given,
/// - [SplineError::NonFiniteInput] when any knot x is infinite or NaN,
/// - [SplineError::NonMonotonicInput] when any interval has a non positive width.
pub fn segment(knots: &[Knot]) -> Result<Vec<Interval>> {
    if knots.len() < 2 {
        return Err(SplineError::InsufficientData { required: 2, actual: knots.len() });
    }

    if let Some((index, knot)) = knots.iter().enumerate().find(|(_, k)| !k.get_x().is_finite()) {
        return Err(SplineError::NonFiniteInput { index, x: knot.get_x() });
    }

    let intervals: Vec<Interval> = knots
        .windows(2)
        .map(|w| Interval::new(w[0].get_x(), w[1].get_x()))
        .collect();

    for (index, interval) in intervals.iter().enumerate() {
        trace!("interval {}: [{}, {}]", index, interval.x_left, interval.x_right);
        if interval.width() <= 0.0 {
            return Err(SplineError::NonMonotonicInput {
                index,
                left: interval.x_left,
                right: interval.x_right,
            });
        }
    }
    Ok(intervals)
}

pub fn interval_widths(intervals: &[Interval]) -> Vec<f64> {
    intervals.iter().map(Interval::width).collect()
}
