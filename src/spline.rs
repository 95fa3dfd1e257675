use log::debug;
use nalgebra::DVector;

use crate::{
    coefficients::assemble_coefficients,
    error::{Result, SplineError},
    knot::{Knot, Point},
    options::SamplingOptions,
    polynomial::CubicPolynomial,
    sampler,
    segment::{interval_widths, segment, Interval},
    thomas,
    tridiagonal::build_system,
};

/// Natural cubic spline through ordered knots.
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    knots: Vec<Knot>,
    intervals: Vec<Interval>,
    second_derivatives: DVector<f64>,
    polynomials: Vec<CubicPolynomial>,
    min_x: f64,
    max_x: f64,
}

impl NaturalSpline {
    /// Fits the spline. Knots must be ordered by strictly increasing x, they are neither sorted nor
    /// deduplicated here.
    ///
    /// # Errors
    /// - [SplineError::InsufficientData] for fewer than 2 knots,
    /// - [SplineError::NonFiniteInput] when any x value is infinite or NaN,
    /// - [SplineError::NonMonotonicInput] when x values are not strictly increasing.
    pub fn new(knots: Vec<Knot>) -> Result<Self> {
        let intervals = segment(&knots)?;
        let widths = interval_widths(&intervals);
        let ys: Vec<f64> = knots.iter().map(Knot::get_y).collect();

        let system = build_system(&ys, &widths);
        let second_derivatives = thomas::solve(&system);

        let polynomials = assemble_coefficients(&ys, &widths, &second_derivatives)
            .into_iter()
            .zip(&intervals)
            .map(|(coefficients, interval)| CubicPolynomial::new(coefficients, interval.x_left))
            .collect();

        let min_x = knots[0].get_x();
        let max_x = knots[knots.len() - 1].get_x();
        debug!("natural spline fitted over [{}, {}] with {} intervals", min_x, max_x, intervals.len());

        Ok(NaturalSpline { knots, intervals, second_derivatives, polynomials, min_x, max_x })
    }

    /// Evaluates the spline inside of the knots range.
    pub fn interpolate(&self, x: f64) -> Result<f64> {
        self.check_in_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].evaluate(x))
    }

    /// Evaluates every x of the batch. Either all of them are inside of the knots range or an error
    /// is returned for the first one that is not.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>> {
        if let Some(x) = x_vector.iter().find(|x| !self.is_in_range(**x)) {
            return Err(self.out_of_range(*x));
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Evaluates the spline anywhere, outside of the knots range the boundary polynomials are
    /// continued.
    pub fn extrapolate(&self, x: f64) -> f64 {
        self.polynomial_at(x).evaluate(x)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        self.polynomial_at(x).derivative(x)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        self.polynomial_at(x).second_derivative(x)
    }

    /// Resamples the spline with a fixed step, see [sampler::sample].
    pub fn sample(&self, step: f64) -> Result<Vec<Point>> {
        sampler::sample(&self.intervals, &self.polynomials, step)
    }

    pub fn sample_with(&self, options: &SamplingOptions) -> Result<Vec<Point>> {
        self.sample(options.step)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Second-derivative coefficients `c`, one per knot. Ends are zero.
    pub fn second_derivatives(&self) -> &DVector<f64> {
        &self.second_derivatives
    }

    pub fn polynomials(&self) -> &[CubicPolynomial] {
        &self.polynomials
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn check_in_range(&self, x: f64) -> Result<()> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            Err(self.out_of_range(x))
        }
    }

    fn out_of_range(&self, x: f64) -> SplineError {
        SplineError::OutOfRange { x, min: self.min_x, max: self.max_x }
    }

    fn polynomial_at(&self, x: f64) -> &CubicPolynomial {
        let last = self.polynomials.len() - 1;
        if x < self.min_x {
            &self.polynomials[0]
        } else if x > self.max_x {
            &self.polynomials[last]
        } else {
            &self.polynomials[self.find_interval_index(x)]
        }
    }

    /// Bisection over knots. The last knot belongs to the last interval.
    fn find_interval_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.intervals[index_hint].contains(x) {
            index_hint
        } else if index_hint + 1 < self.intervals.len() && self.intervals[index_hint + 1].contains(x) {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }
}

/// Fits a natural spline through `knots` and resamples it with `step`.
///
/// # Example
/// ```
/// use natural_spline::{build_cubic_spline, Knot};
///
/// let knots: Vec<Knot> = vec![(0.0, 1.0).into(), (1.0, 3.0).into(), (2.0, 2.0).into()];
/// let points = build_cubic_spline(knots, 0.5).unwrap();
///
/// let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
/// assert_eq!(vec![0.0, 0.5, 1.0, 1.5, 2.0], xs);
/// ```
pub fn build_cubic_spline(knots: Vec<Knot>, step: f64) -> Result<Vec<Point>> {
    SamplingOptions::new(step).validate()?;
    NaturalSpline::new(knots)?.sample(step)
}
