use crate::coefficients::CubicCoefficients;

/// Cubic polynomial of a single interval, `x_offset` being the interval's left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial {
    coefficients: CubicCoefficients,
    x_offset: f64,
}

impl CubicPolynomial {
    pub fn new(coefficients: CubicCoefficients, x_offset: f64) -> Self {
        CubicPolynomial { coefficients, x_offset }
    }

    pub fn coefficients(&self) -> &CubicCoefficients {
        &self.coefficients
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.x_offset;
        let CubicCoefficients { a, b, c, d } = self.coefficients;
        a + t * (b + t * (c + t * d))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let t = x - self.x_offset;
        let CubicCoefficients { b, c, d, .. } = self.coefficients;
        b + t * (2.0 * c + 3.0 * d * t)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let t = x - self.x_offset;
        2.0 * self.coefficients.c + 6.0 * self.coefficients.d * t
    }
}
