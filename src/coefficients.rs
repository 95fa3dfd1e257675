use log::debug;
use nalgebra::DVector;

/// Coefficients of `a + b t + c t^2 + d t^3` for a single interval, `t` measured from the
/// interval's left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicCoefficients {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        CubicCoefficients { a, b, c, d }
    }
}

/// Derives per interval coefficients from the knots y values, interval widths and the solved
/// second-derivative coefficients `c` (one per knot).
pub fn assemble_coefficients(ys: &[f64], widths: &[f64], c: &DVector<f64>) -> Vec<CubicCoefficients> {
    debug_assert_eq!(ys.len(), widths.len() + 1);
    debug_assert_eq!(c.len(), ys.len());

    let coefficients: Vec<CubicCoefficients> = widths
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let a = ys[i];
            let b = (ys[i + 1] - ys[i]) / h - h * (c[i + 1] + 2.0 * c[i]) / 3.0;
            let d = (c[i + 1] - c[i]) / (3.0 * h);
            CubicCoefficients::new(a, b, c[i], d)
        })
        .collect();

    debug!("assembled coefficients for {} intervals", coefficients.len());
    coefficients
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn linear_for_two_knots() {
        let eps = 1e-12;
        let c = DVector::from_vec(vec![0.0, 0.0]);
        let coefficients = assemble_coefficients(&[1.0, 5.0], &[2.0], &c);

        assert_eq!(1, coefficients.len());
        assert_approx_eq!(1.0, coefficients[0].a, eps);
        assert_approx_eq!(2.0, coefficients[0].b, eps);
        assert_approx_eq!(0.0, coefficients[0].c, eps);
        assert_approx_eq!(0.0, coefficients[0].d, eps);
    }

    #[test]
    fn three_knots() {
        // y = 4, 2, 6 at x = 0, 1, 2 gives c = [0, 4.5, 0]
        let eps = 1e-12;
        let c = DVector::from_vec(vec![0.0, 4.5, 0.0]);
        let coefficients = assemble_coefficients(&[4.0, 2.0, 6.0], &[1.0, 1.0], &c);

        assert_approx_eq!(4.0, coefficients[0].a, eps);
        assert_approx_eq!(-3.5, coefficients[0].b, eps);
        assert_approx_eq!(0.0, coefficients[0].c, eps);
        assert_approx_eq!(1.5, coefficients[0].d, eps);

        assert_approx_eq!(2.0, coefficients[1].a, eps);
        assert_approx_eq!(1.0, coefficients[1].b, eps);
        assert_approx_eq!(4.5, coefficients[1].c, eps);
        assert_approx_eq!(-1.5, coefficients[1].d, eps);
    }

    #[test]
    fn value_at_right_knot() {
        let eps = 1e-12;
        let ys = [4.0, 2.0, 6.0];
        let widths = [1.0, 1.0];
        let c = DVector::from_vec(vec![0.0, 4.5, 0.0]);

        for (i, k) in assemble_coefficients(&ys, &widths, &c).iter().enumerate() {
            let h = widths[i];
            assert_approx_eq!(ys[i + 1], k.a + k.b * h + k.c * h * h + k.d * h * h * h, eps);
        }
    }
}
