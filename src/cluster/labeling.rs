use std::collections::HashSet;

use crate::error::{DenclustError, Result};

/// Label assigned to points that belong to no cluster.
pub const NOISE: i32 = -1;

/// How a point ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Has at least `min_samples` neighbors within `eps`.
    Core,
    /// In a cluster only through some core point's neighborhood.
    Border,
    /// In no cluster.
    Noise,
}

/// Cluster assignment produced by a completed `Dbscan` run.
///
/// One entry per input point, in input order. Cluster ids are consecutive
/// integers starting at 0 in discovery order; noise points carry [`NOISE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Labeling {
    labels: Vec<i32>,
    core: Vec<bool>,
    n_clusters: usize,
}

impl Labeling {
    pub(crate) fn new(labels: Vec<i32>, core: Vec<bool>) -> Self {
        debug_assert_eq!(labels.len(), core.len());
        debug_assert!(labels.iter().all(|&label| label >= NOISE));
        let distinct: HashSet<i32> = labels
            .iter()
            .copied()
            .filter(|&label| label != NOISE)
            .collect();
        Self {
            labels,
            core,
            n_clusters: distinct.len(),
        }
    }

    /// Number of labeled points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of clusters found, noise excluded.
    pub fn cluster_count(&self) -> usize {
        self.n_clusters
    }

    /// Cluster id of one point, [`NOISE`] for noise.
    pub fn label_of(&self, point: usize) -> Result<i32> {
        self.labels
            .get(point)
            .copied()
            .ok_or(DenclustError::IndexOutOfRange {
                index: point,
                len: self.labels.len(),
            })
    }

    /// Whether one point is a core point.
    pub fn is_core(&self, point: usize) -> Result<bool> {
        self.core
            .get(point)
            .copied()
            .ok_or(DenclustError::IndexOutOfRange {
                index: point,
                len: self.core.len(),
            })
    }

    pub fn role_of(&self, point: usize) -> Result<PointRole> {
        let label = self.label_of(point)?;
        if self.core[point] {
            Ok(PointRole::Core)
        } else if label == NOISE {
            Ok(PointRole::Noise)
        } else {
            Ok(PointRole::Border)
        }
    }

    /// All labels in input order.
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Consumes the labeling, returning the label vector.
    pub fn into_labels(self) -> Vec<i32> {
        self.labels
    }

    /// Indices of the points in cluster `cluster_id`, in input order.
    ///
    /// Ids naming no cluster yield an empty list; in particular
    /// `members(NOISE)` is empty, noise is enumerated by [`noise_points`].
    ///
    /// [`noise_points`]: Labeling::noise_points
    pub fn members(&self, cluster_id: i32) -> Vec<usize> {
        if cluster_id < 0 {
            return Vec::new();
        }
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == cluster_id)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all noise points, in input order.
    pub fn noise_points(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == NOISE)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all core points, in input order.
    pub fn core_sample_indices(&self) -> Vec<usize> {
        self.core
            .iter()
            .enumerate()
            .filter(|&(_, &core)| core)
            .map(|(i, _)| i)
            .collect()
    }
}
