//! Dataset construction from row-oriented input.

use crate::Matrix;
use crate::error::{DenclustError, Result};

/// Builds a sample matrix from equally sized rows.
///
/// Accepts anything row-like (`Vec<f64>`, slices, arrays). Rows become
/// matrix rows in order, so point indices match input order.
///
/// # Examples
///
/// ```rust
/// use denclust::dataset::from_rows;
///
/// let x = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(x.nrows(), 2);
/// assert_eq!(x[[1, 0]], 3.0);
/// ```
pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix> {
    if rows.is_empty() {
        return Err(DenclustError::EmptyDataset);
    }
    let width = rows[0].as_ref().len();
    if width == 0 {
        return Err(DenclustError::EmptyDataset);
    }
    let mut data = Vec::with_capacity(rows.len() * width);
    for row in rows {
        let row = row.as_ref();
        if row.len() != width {
            return Err(DenclustError::DimensionMismatch {
                expected: width,
                actual: row.len(),
            });
        }
        data.extend_from_slice(row);
    }
    Ok(Matrix::from_shape_vec((rows.len(), width), data).expect("rows * width elements"))
}

/// Verifies every coordinate is finite, reporting the first that is not.
///
/// NaN compares false against every threshold, so a non-finite coordinate
/// would silently vanish from every neighborhood.
pub(crate) fn check_finite(x: &Matrix) -> Result<()> {
    for ((row, column), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(DenclustError::NonFiniteData { row, column });
        }
    }
    Ok(())
}
