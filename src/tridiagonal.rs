use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{InterpolationError, Result};

/// Square system `A u = rhs` where `A` is nonzero only on its three central diagonals.
///
/// `sub[i]` sits at `(i + 1, i)`, `sup[i]` at `(i, i + 1)`.
#[derive(Debug, Clone)]
pub(crate) struct TridiagonalSystem {
    sub: Vec<f64>,
    diag: Vec<f64>,
    sup: Vec<f64>,
    rhs: Vec<f64>,
}

impl TridiagonalSystem {
    pub(crate) fn with_size(size: usize) -> Self {
        TridiagonalSystem {
            sub: vec![0.0; size.saturating_sub(1)],
            diag: vec![0.0; size],
            sup: vec![0.0; size.saturating_sub(1)],
            rhs: vec![0.0; size],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.diag.len()
    }

    /// Fills row `row`: `lower * u[row - 1] + center * u[row] + upper * u[row + 1] = rhs`.
    /// Off-diagonal entries falling outside the matrix are dropped.
    pub(crate) fn set_row(&mut self, row: usize, lower: f64, center: f64, upper: f64, rhs: f64) {
        if row > 0 {
            self.sub[row - 1] = lower;
        }
        self.diag[row] = center;
        if row + 1 < self.size() {
            self.sup[row] = upper;
        }
        self.rhs[row] = rhs;
    }

    pub(crate) fn solve(self) -> Result<Vec<f64>> {
        let size = self.size();
        if size == 0 {
            return Ok(Vec::new());
        }

        let mut matrix = DMatrix::<f64>::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = self.diag[i];
            if i + 1 < size {
                matrix[(i, i + 1)] = self.sup[i];
                matrix[(i + 1, i)] = self.sub[i];
            }
        }
        let rhs = DVector::from_vec(self.rhs);

        debug!("solving {size}x{size} tridiagonal system");

        let solution = match matrix.lu().solve(&rhs) {
            Some(solution) => solution,
            None => return Err(InterpolationError::SingularSystem),
        };

        if solution.iter().any(|u| !u.is_finite()) {
            return Err(InterpolationError::SingularSystem);
        }
        Ok(solution.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn solves_diagonally_dominant_system() {
        // [4 1 0; 1 4 1; 0 1 4] u = [5 6 5] -> u = [1 1 1]
        let mut system = TridiagonalSystem::with_size(3);
        system.set_row(0, 99.0, 4.0, 1.0, 5.0);
        system.set_row(1, 1.0, 4.0, 1.0, 6.0);
        system.set_row(2, 1.0, 4.0, 99.0, 5.0);

        let solution = system.solve().unwrap();

        assert_eq!(3, solution.len());
        for u in solution {
            assert_approx_eq!(u, 1.0, 1e-12);
        }
    }

    #[test]
    fn solves_single_unknown() {
        let mut system = TridiagonalSystem::with_size(1);
        system.set_row(0, 7.0, 2.0, 7.0, 3.0);

        let solution = system.solve().unwrap();

        assert_approx_eq!(solution[0], 1.5, 1e-15);
    }

    #[test]
    fn empty_system_has_empty_solution() {
        let system = TridiagonalSystem::with_size(0);

        assert!(system.solve().unwrap().is_empty());
    }

    #[test]
    fn singular_system_is_reported() {
        // two identical rows
        let mut system = TridiagonalSystem::with_size(2);
        system.set_row(0, 0.0, 1.0, 1.0, 1.0);
        system.set_row(1, 1.0, 1.0, 0.0, 2.0);

        assert_eq!(Err(InterpolationError::SingularSystem), system.solve());
    }
}
