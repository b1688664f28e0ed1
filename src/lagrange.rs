use crate::{
    error::{InterpolationError, Result},
    polynomial::Polynomial,
    sample::SampleSet,
};

/// Values of the Lagrange basis polynomial `L_j(x) = ∏_{l≠j} (x - x_l) / (x_j - x_l)` at every query.
///
/// # Errors
/// Fails when `j` is not a node index.
pub fn lagrange_basis(samples: &SampleSet, j: usize, queries: &[f64]) -> Result<Vec<f64>> {
    if j >= samples.len() {
        return Err(InterpolationError::IndexOutOfRange { index: j, len: samples.len() });
    }
    let nodes = samples.nodes();
    Ok(queries.iter().map(|x| basis_value(nodes, j, *x)).collect())
}

/// Interpolating polynomial `P_n(x) = Σ_j f_j L_j(x)` evaluated at every query.
///
/// Evaluated directly in Lagrange form, so equally spaced nodes show the Runge phenomenon
/// as the node count grows.
pub fn lagrange_interpolate(samples: &SampleSet, queries: &[f64]) -> Vec<f64> {
    let nodes = samples.nodes();
    let mut results = vec![0.0; queries.len()];

    for (j, f_j) in samples.values().iter().enumerate() {
        for (result, x) in results.iter_mut().zip(queries) {
            *result += f_j * basis_value(nodes, j, *x);
        }
    }
    results
}

fn basis_value(nodes: &[f64], j: usize, x: f64) -> f64 {
    let x_j = nodes[j];
    nodes
        .iter()
        .enumerate()
        .filter(|(l, _)| *l != j)
        .map(|(_, x_l)| (x - x_l) / (x_j - x_l))
        .product()
}

/// Global polynomial interpolant of degree `n` through all `n + 1` samples.
///
/// # Example
/// ```
/// use lagrange_spline::{Lagrange, SampleSet};
/// use assert_approx_eq::assert_approx_eq;
///
/// let samples = SampleSet::new(&[-9.0, -4.0, -1.0, 7.0], &[5.0, 2.0, -2.0, 9.0]).unwrap();
/// let lagrange = Lagrange::new(samples);
///
/// assert_approx_eq!(2.0, lagrange.evaluate_at(-4.0), 1e-12);
/// assert_approx_eq!(-2587.0 / 880.0, lagrange.evaluate_at(0.0), 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lagrange {
    samples: SampleSet,
}

impl Lagrange {
    pub fn new(samples: SampleSet) -> Self {
        Lagrange { samples }
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn degree(&self) -> usize {
        self.samples.len() - 1
    }

    pub fn basis(&self, j: usize, queries: &[f64]) -> Result<Vec<f64>> {
        lagrange_basis(&self.samples, j, queries)
    }

    pub fn evaluate(&self, queries: &[f64]) -> Vec<f64> {
        lagrange_interpolate(&self.samples, queries)
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        let nodes = self.samples.nodes();
        self.samples
            .values()
            .iter()
            .enumerate()
            .map(|(j, f_j)| f_j * basis_value(nodes, j, x))
            .sum()
    }

    /// Expands the interpolant into monomial coefficients `c_0 + c_1 x + ... + c_n x^n`.
    pub fn coefficients(&self) -> Polynomial {
        let nodes = self.samples.nodes();
        let size = nodes.len();
        let mut coefficients = vec![0.0; size];

        for (j, f_j) in self.samples.values().iter().enumerate() {
            let mut numerator = Vec::with_capacity(size);
            numerator.push(1.0);
            let mut denominator = 1.0;

            for (l, x_l) in nodes.iter().enumerate() {
                if l == j {
                    continue;
                }
                // numerator *= (x - x_l)
                numerator.push(0.0);
                for k in (0..numerator.len()).rev() {
                    let shifted = if k > 0 { numerator[k - 1] } else { 0.0 };
                    numerator[k] = shifted - x_l * numerator[k];
                }
                denominator *= nodes[j] - x_l;
            }

            let weight = f_j / denominator;
            for (c, p) in coefficients.iter_mut().zip(&numerator) {
                *c += weight * p;
            }
        }
        Polynomial::new(coefficients)
    }
}
