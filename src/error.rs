use std::{error::Error, fmt::Display};

pub type Result<T> = std::result::Result<T, InterpolationError>;

/// Every way interpolant construction or evaluation can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than 2 distinct nodes were supplied or requested.
    Degenerate { nodes: usize },
    /// Node and value sequences differ in length.
    LengthMismatch { nodes: usize, values: usize },
    /// Node or value at `index` is NaN or infinite.
    NonFinite { index: usize },
    /// Node at `index` coincides with its predecessor after sorting.
    DuplicateNode { index: usize, x: f64 },
    /// Node generator interval is empty or reversed.
    InvalidInterval { lo: f64, hi: f64 },
    /// Basis index is not a node index.
    IndexOutOfRange { index: usize, len: usize },
    /// Tridiagonal curvature system could not be solved.
    SingularSystem,
    /// Query lies outside the interval covered by the spline.
    OutOfDomain { x: f64, min: f64, max: f64 },
}

impl Display for InterpolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationError::Degenerate { nodes } => {
                write!(f, "Error in SampleSet: at least 2 distinct nodes required, got {nodes}")
            }
            InterpolationError::LengthMismatch { nodes, values } => write!(
                f,
                "Error in SampleSet: {nodes} nodes but {values} values"
            ),
            InterpolationError::NonFinite { index } => {
                write!(f, "Error in SampleSet: sample {index} is not finite")
            }
            InterpolationError::DuplicateNode { index, x } => write!(
                f,
                "Error in SampleSet: node {index} at x = {x} coincides with its neighbour"
            ),
            InterpolationError::InvalidInterval { lo, hi } => {
                write!(f, "Error in node generator: invalid interval [{lo}, {hi}]")
            }
            InterpolationError::IndexOutOfRange { index, len } => write!(
                f,
                "Error in Lagrange: basis index {index} out of range for {len} nodes"
            ),
            InterpolationError::SingularSystem => {
                write!(f, "Error in Spline: curvature system is singular")
            }
            InterpolationError::OutOfDomain { x, min, max } => {
                write!(f, "Error in Spline: x = {x} is out of range [{min}, {max}]")
            }
        }
    }
}

impl Error for InterpolationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_component() {
        let error = InterpolationError::OutOfDomain { x: 3.0, min: 0.0, max: 2.0 };
        assert_eq!("Error in Spline: x = 3 is out of range [0, 2]", error.to_string());

        let error = InterpolationError::DuplicateNode { index: 2, x: 1.5 };
        assert!(error.to_string().starts_with("Error in SampleSet"));
    }

    #[test]
    fn boxes_into_dyn_error() {
        let boxed: Box<dyn Error> = Box::new(InterpolationError::SingularSystem);
        assert!(boxed.downcast_ref::<InterpolationError>().is_some());
    }
}
