//! Error types for denclust operations.

use std::fmt;

/// Errors surfaced by clustering, preprocessing, and data construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DenclustError {
    /// A hyperparameter is outside its valid range.
    InvalidParameter {
        /// Parameter name.
        param: String,
        /// The rejected value.
        value: String,
        /// What the parameter must satisfy.
        constraint: String,
    },
    /// The input has no samples or no features.
    EmptyDataset,
    /// Rows of differing width were mixed.
    DimensionMismatch {
        /// Expected number of features.
        expected: usize,
        /// Number of features actually seen.
        actual: usize,
    },
    /// The input contains NaN or an infinity.
    NonFiniteData {
        /// Row of the first non-finite coordinate.
        row: usize,
        /// Column of the first non-finite coordinate.
        column: usize,
    },
    /// A point index outside `0..len` was queried.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of points in the labeling.
        len: usize,
    },
    /// A transformer was used before `fit`.
    NotFitted {
        /// The component that has no fitted state yet.
        what: String,
    },
}

impl fmt::Display for DenclustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenclustError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(f, "Invalid parameter {param} = {value}: must be {constraint}")
            }
            DenclustError::EmptyDataset => {
                write!(f, "Input must have at least one sample and one feature")
            }
            DenclustError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected} features, got {actual}")
            }
            DenclustError::NonFiniteData { row, column } => {
                write!(f, "Input contains a non-finite value at row {row}, column {column}")
            }
            DenclustError::IndexOutOfRange { index, len } => {
                write!(f, "Point index {index} out of range (len = {len})")
            }
            DenclustError::NotFitted { what } => {
                write!(f, "{what} not fitted. Call fit() first.")
            }
        }
    }
}

impl std::error::Error for DenclustError {}

/// Result type for denclust operations.
pub type Result<T> = std::result::Result<T, DenclustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = DenclustError::InvalidParameter {
            param: "eps".to_string(),
            value: "-0.5".to_string(),
            constraint: "> 0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter eps = -0.5: must be > 0");
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = DenclustError::EmptyDataset;
        assert!(err.to_string().contains("at least one sample"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = DenclustError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected 3 features, got 2"
        );
    }

    #[test]
    fn test_non_finite_data_display() {
        let err = DenclustError::NonFiniteData { row: 3, column: 1 };
        assert_eq!(
            err.to_string(),
            "Input contains a non-finite value at row 3, column 1"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = DenclustError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "Point index 9 out of range (len = 4)");
    }

    #[test]
    fn test_not_fitted_display() {
        let err = DenclustError::NotFitted {
            what: "StandardScaler".to_string(),
        };
        assert_eq!(err.to_string(), "StandardScaler not fitted. Call fit() first.");
    }

    #[test]
    fn test_errors_compare_equal() {
        let a = DenclustError::IndexOutOfRange { index: 1, len: 2 };
        let b = DenclustError::IndexOutOfRange { index: 1, len: 2 };
        assert_eq!(a, b);
    }
}
