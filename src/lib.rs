//! Density-based clustering over `ndarray` matrices.
//!
//! `denclust` implements DBSCAN from scratch: points with dense
//! neighborhoods become cores, clusters grow outward from them, and
//! everything unreachable is noise. The number of clusters is discovered,
//! not supplied, and clusters can take arbitrary shapes.
//!
//! ```rust
//! use denclust::{Dbscan, StandardScaler, NOISE};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 2.0], [1.1, 2.1], [0.9, 1.9],
//!     [8.0, 8.0], [8.1, 8.1], [7.9, 7.9],
//!     [40.0, -40.0]
//! ];
//! let x = StandardScaler::new().fit_transform(&x).unwrap();
//!
//! let labeling = Dbscan::new(0.5, 3).fit(&x).unwrap();
//! assert_eq!(labeling.cluster_count(), 2);
//! assert_eq!(labeling.label_of(6), Ok(NOISE));
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod error;
pub mod metric;
pub mod neighbors;
pub mod preprocessing;
pub mod synthetic;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use cluster::{Dbscan, Labeling, NOISE, PointRole};
pub use error::{DenclustError, Result};
pub use metric::Metric;
pub use neighbors::{Algorithm, BruteScan, KdTree, RegionQuery};
pub use preprocessing::StandardScaler;
pub use synthetic::make_blobs;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
