use tracing::trace;

use crate::error::{InterpolationError, Result};

/// Single sampled point `(x, y)` of the function being interpolated.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    x: f64,
    y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Sample {}

/// Validated, immutable set of nodes `x_0 < x_1 < ... < x_n` with their values `f_0..f_n`.
///
/// Nodes may be given in any order (Chebyshev nodes come out decreasing); they are
/// sorted ascending on construction, each value travelling with its node.
///
/// # Example
/// ```
/// use lagrange_spline::SampleSet;
///
/// let samples = SampleSet::new(&[1.0, -1.0, 0.0], &[1.0, 1.0, 0.0]).unwrap();
/// assert_eq!(&[-1.0, 0.0, 1.0], samples.nodes());
/// assert_eq!(&[1.0, 0.0, 1.0], samples.values());
/// ```
/// # Errors
/// Fails on mismatched lengths, fewer than 2 nodes, NaN/infinite entries or coinciding nodes.
/// ```
/// use lagrange_spline::{InterpolationError, SampleSet};
///
/// let samples = SampleSet::new(&[0.0, 1.0, 1.0], &[2.0, 3.0, 4.0]);
/// assert!(matches!(samples, Err(InterpolationError::DuplicateNode { index: 2, .. })));
/// ```
#[derive(Debug, Clone)]
pub struct SampleSet {
    nodes: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new(nodes: &[f64], values: &[f64]) -> Result<Self> {
        if nodes.len() != values.len() {
            return Err(InterpolationError::LengthMismatch {
                nodes: nodes.len(),
                values: values.len(),
            });
        }

        let samples = nodes
            .iter()
            .zip(values)
            .map(|(x, y)| Sample::new(*x, *y))
            .collect();
        Self::from_samples(samples)
    }

    /// Samples `function` at every node.
    pub fn from_fn<F>(nodes: &[f64], function: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let samples = nodes.iter().map(|x| Sample::new(*x, function(*x))).collect();
        Self::from_samples(samples)
    }

    pub fn from_samples(mut samples: Vec<Sample>) -> Result<Self> {
        if let Some(index) = samples
            .iter()
            .position(|s| !s.x.is_finite() || !s.y.is_finite())
        {
            return Err(InterpolationError::NonFinite { index });
        }
        if samples.len() < 2 {
            return Err(InterpolationError::Degenerate { nodes: samples.len() });
        }

        samples.sort();
        check_spacing(&samples)?;

        let (nodes, values) = samples.iter().map(|s| (s.x, s.y)).unzip();
        Ok(SampleSet { nodes, values })
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples, `n + 1`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn min_x(&self) -> f64 {
        self.nodes[0]
    }

    pub fn max_x(&self) -> f64 {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.nodes
            .iter()
            .zip(&self.values)
            .map(|(x, y)| Sample::new(*x, *y))
    }

    /// True when all intervals have the same width up to rounding.
    pub fn is_uniform(&self) -> bool {
        let spacing: Vec<f64> = self.nodes.windows(2).map(|w| w[1] - w[0]).collect();
        let mean = (self.max_x() - self.min_x()) / spacing.len() as f64;
        spacing.iter().all(|h| (h - mean).abs() <= 1e-12 * mean)
    }
}

/// Adjacent nodes closer than rounding noise on the domain width count as coinciding.
fn check_spacing(samples: &[Sample]) -> Result<()> {
    let width = samples[samples.len() - 1].x - samples[0].x;

    for (i, pair) in samples.windows(2).enumerate() {
        let spacing = pair[1].x - pair[0].x;
        trace!("node {} spacing {}", i + 1, spacing);

        if spacing <= f64::EPSILON * width {
            return Err(InterpolationError::DuplicateNode {
                index: i + 1,
                x: pair[1].x,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let samples = SampleSet::new(&[-9.0, -4.0, -1.0, 7.0], &[5.0, 2.0, -2.0, 9.0]).unwrap();

        assert_eq!(4, samples.len());
        assert_eq!(-9.0, samples.min_x());
        assert_eq!(7.0, samples.max_x());
        assert_eq!(&[5.0, 2.0, -2.0, 9.0], samples.values());
        assert!(!samples.is_uniform());
    }

    #[test]
    fn test_sorts_nodes_with_values() {
        let samples = SampleSet::new(&[0.5, -0.5, 0.0], &[3.0, 1.0, 2.0]).unwrap();

        assert_eq!(&[-0.5, 0.0, 0.5], samples.nodes());
        assert_eq!(&[1.0, 2.0, 3.0], samples.values());
        assert!(samples.is_uniform());
    }

    #[test]
    fn test_from_fn() {
        let samples = SampleSet::from_fn(&[2.0, 0.0, 1.0], |x| x * x).unwrap();

        assert_eq!(&[0.0, 1.0, 2.0], samples.nodes());
        assert_eq!(&[0.0, 1.0, 4.0], samples.values());
    }

    #[test]
    fn test_iter() {
        let samples = SampleSet::new(&[1.0, 2.0], &[10.0, 20.0]).unwrap();
        let collected: Vec<(f64, f64)> = samples.iter().map(|s| (s.get_x(), s.get_y())).collect();

        assert_eq!(vec![(1.0, 10.0), (2.0, 20.0)], collected);
    }

    #[test]
    fn test_length_mismatch() {
        let samples = SampleSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);

        assert_eq!(
            Err(InterpolationError::LengthMismatch { nodes: 3, values: 2 }),
            samples.map(|_| ())
        );
    }

    #[test]
    fn test_too_few_nodes() {
        assert!(matches!(
            SampleSet::new(&[1.0], &[1.0]),
            Err(InterpolationError::Degenerate { nodes: 1 })
        ));
        assert!(matches!(
            SampleSet::new(&[], &[]),
            Err(InterpolationError::Degenerate { nodes: 0 })
        ));
    }

    #[test]
    fn test_duplicate_node() {
        let samples = SampleSet::new(&[3.0, 1.0, 2.0, 1.0], &[0.0, 1.0, 2.0, 3.0]);

        assert!(matches!(
            samples,
            Err(InterpolationError::DuplicateNode { index: 1, x }) if x == 1.0
        ));
    }

    #[test]
    fn test_subnormal_spacing_is_duplicate() {
        let samples = SampleSet::new(&[0.0, 5e-324, 1.0], &[0.0, 1.0, 2.0]);

        assert!(matches!(
            samples,
            Err(InterpolationError::DuplicateNode { index: 1, .. })
        ));
    }

    #[test]
    fn test_signed_zero_nodes_are_duplicate() {
        assert!(matches!(
            SampleSet::new(&[0.0, 1.0, -0.0], &[0.0, 1.0, 2.0]),
            Err(InterpolationError::DuplicateNode { index: 1, .. })
        ));
    }

    #[test]
    fn test_sample_equality_follows_ordering() {
        let negative_zero = Sample::new(-0.0, 1.0);
        let zero = Sample::new(0.0, 1.0);

        assert_eq!(std::cmp::Ordering::Less, negative_zero.cmp(&zero));
        assert_ne!(negative_zero, zero);
        assert_eq!(zero, Sample::new(0.0, 5.0));
    }

    #[test]
    fn test_two_equal_nodes_only() {
        assert!(matches!(
            SampleSet::new(&[0.0, 0.0], &[1.0, 2.0]),
            Err(InterpolationError::DuplicateNode { index: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            Err(InterpolationError::NonFinite { index: 1 }),
            SampleSet::new(&[0.0, f64::NAN, 2.0], &[0.0, 1.0, 2.0]).map(|_| ())
        );
        assert_eq!(
            Err(InterpolationError::NonFinite { index: 2 }),
            SampleSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, f64::INFINITY]).map(|_| ())
        );
    }
}
