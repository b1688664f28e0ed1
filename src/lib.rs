//! Global Lagrange polynomial interpolation and natural cubic spline interpolation
//! over a shared, validated set of sampled points.
//!
//! Both interpolants take an ordered sequence of query values and return a
//! same-length sequence of results. Node helpers build equally spaced and
//! Chebyshev node sets, the latter suppressing the Runge phenomenon that
//! high-degree Lagrange interpolation shows on equally spaced nodes.
//!
//! # Example
//! ```
//! use lagrange_spline::{Lagrange, NaturalSpline, SampleSet};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = SampleSet::new(&[-9.0, -4.0, -1.0, 7.0], &[5.0, 2.0, -2.0, 9.0]).unwrap();
//!
//! let lagrange = Lagrange::new(samples.clone());
//! assert_approx_eq!(9.0, lagrange.evaluate(&[7.0])[0], 1e-12);
//!
//! let spline = NaturalSpline::new(samples).unwrap();
//! assert_approx_eq!(-116.0 / 49.0, spline.evaluate_at(0.0).unwrap(), 1e-12);
//! ```

mod chebyshev;
mod error;
mod lagrange;
mod polynomial;
mod sample;
mod spline;
mod tridiagonal;

pub use chebyshev::{chebyshev_nodes, chebyshev_nodes_on, equispaced_nodes, max_abs_error};
pub use error::{InterpolationError, Result};
pub use lagrange::{lagrange_basis, lagrange_interpolate, Lagrange};
pub use polynomial::Polynomial;
pub use sample::{Sample, SampleSet};
pub use spline::{natural_spline_segments, NaturalSpline, OutOfDomain, Segment};
