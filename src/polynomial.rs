/// Power series `Σ c_i * (x - origin)^i`, coefficients in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    origin: f64,
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { origin: 0.0, coefficients }
    }

    /// Polynomial in the local offset `x - origin`.
    pub fn around(origin: f64, coefficients: Vec<f64>) -> Self {
        Polynomial { origin, coefficients }
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.origin;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * t + c)
    }

    /// Value of the `order`-th derivative at `x`.
    pub fn evaluate_derivative(&self, x: f64, order: usize) -> f64 {
        let t = x - self.origin;
        self.coefficients
            .iter()
            .enumerate()
            .skip(order)
            .rev()
            .fold(0.0, |acc, (i, c)| acc * t + c * falling_factorial(i, order))
    }
}

/// `i * (i - 1) * ... * (i - order + 1)`, the factor `d^order/dt^order t^i` brings down.
fn falling_factorial(i: usize, order: usize) -> f64 {
    let mut multiplier = 1.0;
    let mut coeff = i as f64;
    for _ in 0..order {
        multiplier *= coeff;
        coeff -= 1.0;
    }
    multiplier
}
