//! Node placement helpers for building sample sets.

use std::f64::consts::PI;

use crate::error::{InterpolationError, Result};

/// Chebyshev nodes of the first kind on `[-1, 1]`: `x_j = cos((2j + 1)π / (2n + 2))`, `j = 0..n`.
///
/// `count` is `n + 1`. Nodes come out in decreasing order; [crate::SampleSet] sorts them.
///
/// # Example
/// ```
/// use lagrange_spline::chebyshev_nodes;
///
/// let nodes = chebyshev_nodes(3).unwrap();
/// assert!((nodes[0] - (3.0_f64).sqrt() / 2.0).abs() < 1e-15);
/// assert!(nodes[1].abs() < 1e-15);
/// ```
pub fn chebyshev_nodes(count: usize) -> Result<Vec<f64>> {
    chebyshev_nodes_on(-1.0, 1.0, count)
}

/// Chebyshev nodes mapped affinely onto `[lo, hi]`, decreasing.
pub fn chebyshev_nodes_on(lo: f64, hi: f64, count: usize) -> Result<Vec<f64>> {
    check_interval(lo, hi, count)?;

    let center = 0.5 * (lo + hi);
    let half_width = 0.5 * (hi - lo);
    let denominator = 2.0 * count as f64;

    Ok((0..count)
        .map(|j| {
            let angle = (2 * j + 1) as f64 * PI / denominator;
            center + half_width * angle.cos()
        })
        .collect())
}

/// `count` equally spaced nodes from `lo` to `hi` inclusive, increasing.
pub fn equispaced_nodes(lo: f64, hi: f64, count: usize) -> Result<Vec<f64>> {
    check_interval(lo, hi, count)?;

    let step = (hi - lo) / (count - 1) as f64;
    Ok((0..count)
        .map(|j| if j == count - 1 { hi } else { lo + step * j as f64 })
        .collect())
}

/// Largest absolute pointwise difference between two same-length sequences.
pub fn max_abs_error(approximation: &[f64], exact: &[f64]) -> f64 {
    approximation
        .iter()
        .zip(exact)
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, f64::max)
}

fn check_interval(lo: f64, hi: f64, count: usize) -> Result<()> {
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(InterpolationError::InvalidInterval { lo, hi });
    }
    if count < 2 {
        return Err(InterpolationError::Degenerate { nodes: count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn chebyshev_nodes_are_decreasing_and_interior() {
        let nodes = chebyshev_nodes(11).unwrap();

        assert_eq!(11, nodes.len());
        assert!(nodes.windows(2).all(|w| w[0] > w[1]));
        assert!(nodes.iter().all(|x| -1.0 < *x && *x < 1.0));
        assert_approx_eq!(nodes[0], (PI / 22.0).cos(), 1e-15);
        assert_approx_eq!(nodes[5], 0.0, 1e-15);
    }

    #[test]
    fn chebyshev_nodes_are_symmetric() {
        let nodes = chebyshev_nodes(8).unwrap();

        for j in 0..nodes.len() {
            assert_approx_eq!(nodes[j], -nodes[nodes.len() - 1 - j], 1e-14);
        }
    }

    #[test]
    fn chebyshev_nodes_on_interval() {
        let unit = chebyshev_nodes(5).unwrap();
        let mapped = chebyshev_nodes_on(2.0, 6.0, 5).unwrap();

        for (u, m) in unit.iter().zip(&mapped) {
            assert_approx_eq!(*m, 4.0 + 2.0 * u, 1e-14);
        }
    }

    #[test]
    fn equispaced_nodes_hit_both_ends() {
        let nodes = equispaced_nodes(-1.0, 1.0, 5).unwrap();

        assert_eq!(vec![-1.0, -0.5, 0.0, 0.5, 1.0], nodes);
    }

    #[test]
    fn invalid_requests() {
        assert_eq!(
            Err(InterpolationError::InvalidInterval { lo: 1.0, hi: -1.0 }),
            chebyshev_nodes_on(1.0, -1.0, 4)
        );
        assert_eq!(
            Err(InterpolationError::Degenerate { nodes: 1 }),
            equispaced_nodes(0.0, 1.0, 1)
        );
        assert!(chebyshev_nodes(0).is_err());
        assert!(equispaced_nodes(0.0, f64::NAN, 3).is_err());
    }

    #[test]
    fn max_abs_error_picks_largest_deviation() {
        assert_eq!(0.5, max_abs_error(&[1.0, 2.5, 3.0], &[1.0, 2.0, 3.25]));
        assert_eq!(0.0, max_abs_error(&[], &[]));
    }
}
