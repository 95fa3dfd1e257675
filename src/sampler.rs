use log::debug;

use crate::{
    error::{Result, SplineError},
    knot::Point,
    options::SamplingOptions,
    polynomial::CubicPolynomial,
    segment::Interval,
};

const MAX_PREALLOCATED_POINTS: usize = 1 << 20;

/// Samples the piecewise polynomial at `x_0 + k * step` for `k = 0, 1, ...`, each sample
/// evaluated by the polynomial of the interval it falls into. The right end of an interval belongs
/// to the next one. A final sample is placed exactly at the last knot, so the output always spans
/// the whole knots range with strictly increasing x.
///
/// `polynomials[i]` must be the polynomial of `intervals[i]`.
///
/// # Errors
/// - [SplineError::InvalidStep] when `step` is not finite and positive,
/// - [SplineError::InsufficientData] when there are no intervals.
pub fn sample(intervals: &[Interval], polynomials: &[CubicPolynomial], step: f64) -> Result<Vec<Point>> {
    SamplingOptions::new(step).validate()?;
    debug_assert_eq!(intervals.len(), polynomials.len());

    let (first, last) = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SplineError::InsufficientData { required: 2, actual: 0 }),
    };
    let x_first = first.x_left;
    let x_last = last.x_right;

    let expected_points = (((x_last - x_first) / step).ceil() as usize).saturating_add(1);
    let mut points = Vec::with_capacity(expected_points.min(MAX_PREALLOCATED_POINTS));
    let mut k: u64 = 0;

    for (interval, polynomial) in intervals.iter().zip(polynomials) {
        loop {
            let x = x_first + k as f64 * step;
            if x >= interval.x_right {
                break;
            }
            // the step may be lost to rounding against large x values
            if points.last().map_or(true, |p: &Point| x > p.x) {
                points.push(Point::new(x, polynomial.evaluate(x)));
            }
            k += 1;
        }
    }

    if points.last().map_or(true, |p| p.x < x_last) {
        if let Some(polynomial) = polynomials.last() {
            points.push(Point::new(x_last, polynomial.evaluate(x_last)));
        }
    }

    debug!("sampled {} points with step {}", points.len(), step);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::coefficients::CubicCoefficients;

    fn linear(x_left: f64, x_right: f64, y_left: f64, slope: f64) -> (Interval, CubicPolynomial) {
        (
            Interval::new(x_left, x_right),
            CubicPolynomial::new(CubicCoefficients::new(y_left, slope, 0.0, 0.0), x_left),
        )
    }

    fn unzip(pieces: Vec<(Interval, CubicPolynomial)>) -> (Vec<Interval>, Vec<CubicPolynomial>) {
        pieces.into_iter().unzip()
    }

    #[test]
    fn bounds_and_ordering() {
        let (intervals, polynomials) = unzip(vec![linear(0.0, 1.0, 0.0, 1.0), linear(1.0, 2.0, 1.0, -1.0)]);
        let points = sample(&intervals, &polynomials, 0.3).unwrap();

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(8, xs.len());
        assert_eq!(0.0, xs[0]);
        assert_eq!(2.0, xs[7]);
        for pair in xs.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        // x = 1.2 belongs to the second interval
        assert_approx_eq!(1.2, points[4].x, 1e-12);
        assert_approx_eq!(0.8, points[4].y, 1e-12);
        assert_approx_eq!(0.0, points[7].y, 1e-12);
    }

    #[test]
    fn interval_shorter_than_step() {
        let (intervals, polynomials) = unzip(vec![
            linear(0.0, 0.5, 0.0, 2.0),
            linear(0.5, 0.6, 1.0, 0.0),
            linear(0.6, 2.0, 1.0, 1.0),
        ]);
        let points = sample(&intervals, &polynomials, 1.0).unwrap();

        let eps = 1e-12;
        assert_eq!(3, points.len());
        assert_eq!(Point::new(0.0, 0.0), points[0]);
        assert_eq!(1.0, points[1].x);
        assert_approx_eq!(1.4, points[1].y, eps);
        assert_eq!(2.0, points[2].x);
        assert_approx_eq!(2.4, points[2].y, eps);
    }

    #[test]
    fn step_larger_than_range() {
        let (intervals, polynomials) = unzip(vec![linear(1.0, 2.0, 3.0, 1.0)]);
        let points = sample(&intervals, &polynomials, 10.0).unwrap();

        assert_eq!(vec![Point::new(1.0, 3.0), Point::new(2.0, 4.0)], points);
    }

    #[test]
    fn last_knot_sampled_once() {
        let (intervals, polynomials) = unzip(vec![linear(0.0, 1.0, 0.0, 1.0)]);
        let points = sample(&intervals, &polynomials, 0.25).unwrap();

        assert_eq!(5, points.len());
        assert_eq!(Point::new(1.0, 1.0), points[4]);
    }

    #[test]
    fn lattice_values_collapsing_to_equal_x() {
        // doubles around 1e16 are 2 apart, so x_0 + k lands on the same value for consecutive k
        let x_left = 1e16;
        let x_right = 1e16 + 64.0;
        let (intervals, polynomials) = unzip(vec![linear(x_left, x_right, 0.0, 1.0)]);
        let points = sample(&intervals, &polynomials, 1.0).unwrap();

        assert!(points.len() < 65);
        assert_eq!(x_left, points[0].x);
        assert_eq!(x_right, points[points.len() - 1].x);
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn invalid_step() {
        let (intervals, polynomials) = unzip(vec![linear(0.0, 1.0, 0.0, 1.0)]);

        assert_eq!(Err(SplineError::InvalidStep { step: 0.0 }), sample(&intervals, &polynomials, 0.0));
        assert_eq!(Err(SplineError::InvalidStep { step: -0.1 }), sample(&intervals, &polynomials, -0.1));
        assert!(matches!(sample(&intervals, &polynomials, f64::NAN), Err(SplineError::InvalidStep { .. })));
        assert!(matches!(
            sample(&intervals, &polynomials, f64::INFINITY),
            Err(SplineError::InvalidStep { .. })
        ));
    }

    #[test]
    fn no_intervals() {
        assert!(matches!(sample(&[], &[], 0.1), Err(SplineError::InsufficientData { .. })));
    }
}
