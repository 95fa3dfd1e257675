use serde::{Deserialize, Serialize};

/// Knot represents an input sample through which the spline passes exactly.
/// - `x` - coordinate, must be strictly increasing across the knots sequence,
/// - `y` - coordinate, arbitrary value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    /// Creates [Knot] at given coordinates.
    /// # Example
    /// ```
    /// use natural_spline::Knot;
    ///
    /// let knot = Knot::new(1.0, 3.8);
    /// assert_eq!(1.0, knot.get_x());
    /// assert_eq!(3.8, knot.get_y());
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Knot {
    fn from((x, y): (f64, f64)) -> Self {
        Knot::new(x, y)
    }
}

/// Point sampled from the fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let knot = Knot::new(1.2, -3.5);

        assert_eq!(1.2, knot.x);
        assert_eq!(-3.5, knot.y);
    }

    #[test]
    fn test_from_tuple() {
        let knot: Knot = (0.5, 2.0).into();
        assert_eq!(Knot::new(0.5, 2.0), knot);

        let point: Point = (0.5, 2.0).into();
        assert_eq!(Point::new(0.5, 2.0), point);

        let pair: (f64, f64) = point.into();
        assert_eq!((0.5, 2.0), pair);
    }
}
