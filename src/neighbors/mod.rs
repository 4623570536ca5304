//! Neighborhood indexes for range queries over a dataset.
//!
//! This module provides the region-query backends used by clustering:
//! - `BruteScan`: exhaustive O(n) scan per query, works with any metric
//! - `KdTree`: axis-aligned space partitioning for the built-in metrics
//!
//! Both backends answer the same question and return the same result set
//! for the same input: every point index whose distance to the query point
//! is at most `eps`, in ascending index order, the query point included.
//!
//! # Examples
//!
//! ```rust
//! use denclust::{BruteScan, KdTree, Metric, RegionQuery};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.5, 0.0], [3.0, 3.0]];
//!
//! let brute = BruteScan::new(&x, Metric::Euclidean);
//! let tree = KdTree::build(&x, Metric::Euclidean).unwrap();
//!
//! assert_eq!(brute.region_query(0, 1.0), vec![0, 1]);
//! assert_eq!(tree.region_query(0, 1.0), vec![0, 1]);
//! ```

mod brute;
mod kdtree;

pub use brute::BruteScan;
pub use kdtree::KdTree;

/// Answers eps-range queries against a fixed dataset.
pub trait RegionQuery {
    /// Indices of all points within `eps` of `points[point]`, in ascending
    /// order. The query point itself is always included.
    fn region_query(&self, point: usize, eps: f64) -> Vec<usize>;
}

/// Neighborhood backend selection for `Dbscan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Pick per metric: k-d tree for the built-in metrics, brute force
    /// for custom ones.
    Auto,
    /// Always scan every point per query.
    BruteForce,
    /// Always build a k-d tree. Rejects custom metrics.
    KdTree,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Auto
    }
}
