//! Feature scaling ahead of distance-based algorithms.

use ndarray::Axis;

use crate::error::{DenclustError, Result};
use crate::{Matrix, Vector};

/// Standardizes features to zero mean and unit variance.
///
/// Distance-based clustering mixes feature scales directly into `eps`, so
/// standardizing first keeps one wide-ranged column from dominating.
/// Zero-variance columns are left unscaled to avoid dividing by zero.
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(DenclustError::EmptyDataset);
        }
        let mean = data.mean_axis(Axis(0)).ok_or(DenclustError::EmptyDataset)?;
        // population std; constant columns divide by 1 instead
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 1e-10 { s } else { 1.0 });

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let mean = self.mean.as_ref().ok_or(DenclustError::NotFitted {
            what: "StandardScaler".to_string(),
        })?;
        let std = self.std.as_ref().ok_or(DenclustError::NotFitted {
            what: "StandardScaler".to_string(),
        })?;
        if data.ncols() != mean.len() {
            return Err(DenclustError::DimensionMismatch {
                expected: mean.len(),
                actual: data.ncols(),
            });
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}
