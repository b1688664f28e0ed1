use tracing::debug;

use crate::{
    error::{InterpolationError, Result},
    polynomial::Polynomial,
    sample::SampleSet,
    tridiagonal::TridiagonalSystem,
};

/// What the spline evaluator does with a query outside `[x_0, x_n]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutOfDomain {
    /// Return [InterpolationError::OutOfDomain].
    #[default]
    Fail,
    /// Evaluate at the nearest endpoint.
    Clamp,
    /// Continue the first or last segment's cubic.
    Extrapolate,
}

/// Cubic `S_j(x) = a (x - x_j)^3 + b (x - x_j)^2 + c (x - x_j) + d` on `[x_j, x_{j+1}]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    x_end: f64,
    polynomial: Polynomial,
}

impl Segment {
    fn new(x_start: f64, x_end: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Segment {
            x_end,
            polynomial: Polynomial::around(x_start, vec![d, c, b, a]),
        }
    }

    pub fn x_start(&self) -> f64 {
        self.polynomial.origin()
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn a(&self) -> f64 {
        self.polynomial.coefficients()[3]
    }

    pub fn b(&self) -> f64 {
        self.polynomial.coefficients()[2]
    }

    pub fn c(&self) -> f64 {
        self.polynomial.coefficients()[1]
    }

    pub fn d(&self) -> f64 {
        self.polynomial.coefficients()[0]
    }

    pub fn value(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }

    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        self.polynomial.evaluate_derivative(x, order)
    }
}

/// Segment coefficients of the natural cubic spline through `samples`.
///
/// Solves the tridiagonal system for the interior curvatures `b_1..b_{n-1}`, with
/// `b_0 = b_n = 0`. Two samples give no unknowns and a straight line.
///
/// # Errors
/// [InterpolationError::SingularSystem] when the curvature system cannot be solved.
pub fn natural_spline_segments(samples: &SampleSet) -> Result<Vec<Segment>> {
    let x = samples.nodes();
    let f = samples.values();
    let number_of_intervals = x.len() - 1;

    let dx: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let g: Vec<f64> = f
        .windows(2)
        .zip(&dx)
        .map(|(w, h)| (w[1] - w[0]) / h)
        .collect();

    debug!(
        "building natural spline over {} intervals, uniform spacing: {}",
        number_of_intervals,
        samples.is_uniform()
    );

    let mut system = TridiagonalSystem::with_size(number_of_intervals - 1);
    for row in 0..system.size() {
        system.set_row(
            row,
            dx[row] / 3.0,
            2.0 / 3.0 * (dx[row] + dx[row + 1]),
            dx[row + 1] / 3.0,
            g[row + 1] - g[row],
        );
    }

    let mut b = Vec::with_capacity(number_of_intervals + 1);
    b.push(0.0);
    b.extend(system.solve()?);
    b.push(0.0);

    Ok((0..number_of_intervals)
        .map(|j| {
            let h = dx[j];
            let c = g[j] - h / 3.0 * (2.0 * b[j] + b[j + 1]);
            let a = (g[j] - h * b[j] - c) / (h * h);
            Segment::new(x[j], x[j + 1], a, b[j], c, f[j])
        })
        .collect())
}

/// Piecewise cubic interpolant with continuous value, first and second derivative at
/// interior nodes and zero curvature at both ends.
///
/// # Example
/// ```
/// use lagrange_spline::{NaturalSpline, OutOfDomain, SampleSet};
/// use assert_approx_eq::assert_approx_eq;
///
/// let samples = SampleSet::new(&[0.0, 1.0, 2.0], &[4.0, 2.0, 6.0]).unwrap();
/// let spline = NaturalSpline::new(samples).unwrap();
///
/// assert_approx_eq!(2.4375, spline.evaluate_at(0.5).unwrap(), 1e-12);
/// assert!(spline.evaluate_at(2.5).is_err());
///
/// let spline = spline.with_policy(OutOfDomain::Clamp);
/// assert_approx_eq!(6.0, spline.evaluate_at(2.5).unwrap(), 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    samples: SampleSet,
    segments: Vec<Segment>,
    policy: OutOfDomain,
}

impl NaturalSpline {
    pub fn new(samples: SampleSet) -> Result<Self> {
        let segments = natural_spline_segments(&samples)?;
        Ok(NaturalSpline {
            samples,
            segments,
            policy: OutOfDomain::default(),
        })
    }

    pub fn with_policy(mut self, policy: OutOfDomain) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OutOfDomain {
        self.policy
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn evaluate_at(&self, x: f64) -> Result<f64> {
        let x = self.resolve(x)?;
        Ok(self.segments[self.find_interval_index(x)].value(x))
    }

    pub fn evaluate(&self, queries: &[f64]) -> Result<Vec<f64>> {
        self.batch(queries, 0)
    }

    /// `order`-th derivative of the piecewise cubic at every query, under the same
    /// out-of-domain policy as [NaturalSpline::evaluate].
    pub fn derivative(&self, order: usize, queries: &[f64]) -> Result<Vec<f64>> {
        self.batch(queries, order)
    }

    fn batch(&self, queries: &[f64], order: usize) -> Result<Vec<f64>> {
        let mut results = Vec::with_capacity(queries.len());
        let mut index = 0;

        for x in queries {
            let x = self.resolve(*x)?;
            index = self.find_interval_index_with_hint(index, x);
            results.push(self.segments[index].derivative(x, order));
        }
        Ok(results)
    }

    fn resolve(&self, x: f64) -> Result<f64> {
        let min = self.samples.min_x();
        let max = self.samples.max_x();

        if self.is_in_range(x) {
            return Ok(x);
        }
        match self.policy {
            _ if !x.is_finite() => Err(InterpolationError::OutOfDomain { x, min, max }),
            OutOfDomain::Fail => Err(InterpolationError::OutOfDomain { x, min, max }),
            OutOfDomain::Clamp => Ok(x.clamp(min, max)),
            OutOfDomain::Extrapolate => Ok(x),
        }
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.samples.min_x() <= x && x <= self.samples.max_x()
    }

    /// Index `j` with `x_j <= x < x_{j+1}`; the last interval also owns `x_n`.
    /// Queries left of the domain map to the first interval, right of it to the last.
    fn find_interval_index(&self, x: f64) -> usize {
        let nodes = self.samples.nodes();
        let mut min = 0;
        let mut max = nodes.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < nodes[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.segments.len()
            && self.is_in_interval_range(index_hint + 1, x)
        {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        let nodes = self.samples.nodes();
        let is_last = interval_index + 1 == self.segments.len();

        nodes[interval_index] <= x
            && (x < nodes[interval_index + 1] || (is_last && x <= nodes[interval_index + 1]))
    }
}
