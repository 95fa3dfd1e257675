//! Natural cubic spline construction and fixed-step resampling.
//!
//! A [NaturalSpline] is built from ordered [Knot]s by solving the tridiagonal system for the
//! second-derivative coefficients with the Thomas algorithm. The fitted curve passes through every
//! knot, is continuous up to the second derivative and has zero curvature at both ends.
//!
//! # Example
//! ```
//! use natural_spline::{Knot, NaturalSpline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = vec![
//!     Knot::new(1.0, 3.8),
//!     Knot::new(1.2, 3.2),
//!     Knot::new(1.4, 2.9),
//!     Knot::new(1.6, 3.0),
//!     Knot::new(1.8, 4.2),
//!     Knot::new(2.0, 4.8),
//! ];
//! let spline = NaturalSpline::new(knots).unwrap();
//!
//! assert_approx_eq!(2.9, spline.interpolate(1.4).unwrap(), 1e-12);
//!
//! let points = spline.sample(0.01).unwrap();
//! assert_eq!(1.0, points[0].x);
//! assert_eq!(2.0, points[points.len() - 1].x);
//! ```

mod coefficients;
mod error;
mod knot;
mod options;
mod polynomial;
mod sampler;
mod segment;
mod spline;
mod thomas;
mod tridiagonal;

pub use coefficients::{assemble_coefficients, CubicCoefficients};
pub use error::{Result, SplineError};
pub use knot::{Knot, Point};
pub use options::SamplingOptions;
pub use polynomial::CubicPolynomial;
pub use sampler::sample;
pub use segment::{interval_widths, segment, Interval};
pub use spline::{build_cubic_spline, NaturalSpline};
pub use thomas::{back_substitute, forward_sweep, solve, Sweep};
pub use tridiagonal::{build_system, TridiagonalRow, TridiagonalSystem};
