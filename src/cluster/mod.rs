//! Density-based clustering.
//!
//! This module provides the DBSCAN clustering engine:
//! - `Dbscan`: the configured algorithm, reusable across datasets
//! - `Labeling`: the per-point assignment a run produces
//!
//! A point with at least `min_samples` neighbors within `eps` (itself
//! included) is a core point; clusters grow outward from core points, and
//! whatever stays unreachable is noise.
//!
//! # Examples
//!
//! ```rust
//! use denclust::{Dbscan, PointRole, NOISE};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // Outlier
//! ];
//!
//! let labeling = Dbscan::new(1.0, 2).fit(&x).unwrap();
//!
//! assert_eq!(labeling.cluster_count(), 2);
//! assert_eq!(labeling.label_of(6), Ok(NOISE));
//! assert_eq!(labeling.role_of(0), Ok(PointRole::Core));
//! assert_eq!(labeling.members(1), vec![3, 4, 5]);
//! ```
//!
//! Metric and neighborhood backend are configurable:
//!
//! ```rust
//! use denclust::{Algorithm, Dbscan, Metric};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//!
//! let labeling = Dbscan::new(2.0, 4)
//!     .metric(Metric::Manhattan)
//!     .algorithm(Algorithm::BruteForce)
//!     .fit(&x)
//!     .unwrap();
//!
//! assert_eq!(labeling.cluster_count(), 1);
//! ```

mod dbscan;
mod labeling;

pub use dbscan::Dbscan;
pub use labeling::{Labeling, NOISE, PointRole};
