use std::num::NonZeroUsize;

use super::RegionQuery;
use crate::Matrix;
use crate::dataset::check_finite;
use crate::error::{DenclustError, Result};
use crate::metric::Metric;

/// k-d tree over the rows of a dataset.
///
/// Built once per clustering run by median splits along cycling axes.
/// Range queries skip any subtree whose splitting plane is farther than
/// `eps` from the query along the split axis. That pruning is only sound
/// when the per-axis difference lower-bounds the metric, which holds for
/// the built-in metrics but cannot be assumed for custom ones, so `build`
/// rejects `Metric::Custom`. NaN coordinates falsify the crossing test
/// the same way, so `build` also rejects non-finite data.
pub struct KdTree<'a> {
    points: &'a Matrix,
    metric: Metric,
    nodes: Vec<Node>,
    root: Option<NonZeroUsize>,
}

/// Arena node; child handles are 1-based indices into the node list.
struct Node {
    point: usize,
    left: Option<NonZeroUsize>,
    right: Option<NonZeroUsize>,
}

impl<'a> KdTree<'a> {
    pub fn build(points: &'a Matrix, metric: Metric) -> Result<Self> {
        if !metric.axis_lower_bounds() {
            return Err(DenclustError::InvalidParameter {
                param: "algorithm".to_string(),
                value: "kd-tree".to_string(),
                constraint: "used with a built-in metric (custom metrics need BruteForce)".to_string(),
            });
        }
        if points.nrows() > 0 && points.ncols() == 0 {
            return Err(DenclustError::EmptyDataset);
        }
        check_finite(points)?;
        let mut indices: Vec<usize> = (0..points.nrows()).collect();
        let mut nodes = Vec::with_capacity(indices.len());
        let root = build_part(points, &mut nodes, &mut indices, 0);
        Ok(Self {
            points,
            metric,
            nodes,
            root,
        })
    }

    fn node(&self, handle: NonZeroUsize) -> &Node {
        &self.nodes[handle.get() - 1]
    }

    fn collect_range(
        &self,
        handle: Option<NonZeroUsize>,
        query: usize,
        eps: f64,
        depth: usize,
        out: &mut Vec<usize>,
    ) {
        let Some(handle) = handle else {
            return;
        };
        let node = self.node(handle);
        let q = self.points.row(query);
        let p = self.points.row(node.point);
        if self.metric.distance(&q, &p) <= eps {
            out.push(node.point);
        }
        let axis = depth % self.points.ncols();
        let diff = q[axis] - p[axis];
        // descend the side holding the query; cross the split only when the
        // eps-ball around the query reaches the splitting plane
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        self.collect_range(near, query, eps, depth + 1, out);
        if diff.abs() <= eps {
            self.collect_range(far, query, eps, depth + 1, out);
        }
    }
}

impl RegionQuery for KdTree<'_> {
    fn region_query(&self, point: usize, eps: f64) -> Vec<usize> {
        let mut neighbors = Vec::new();
        self.collect_range(self.root, point, eps, 0, &mut neighbors);
        neighbors.sort_unstable();
        neighbors
    }
}

fn build_part(
    points: &Matrix,
    nodes: &mut Vec<Node>,
    indices: &mut [usize],
    depth: usize,
) -> Option<NonZeroUsize> {
    if indices.is_empty() {
        return None;
    }
    let axis = depth % points.ncols();
    indices.sort_unstable_by(|&a, &b| points[[a, axis]].total_cmp(&points[[b, axis]]));
    let mid = indices.len() / 2;
    let (left_half, rest) = indices.split_at_mut(mid);
    let (pivot, right_half) = rest.split_first_mut().expect("rest holds the pivot");
    let left = build_part(points, nodes, left_half, depth + 1);
    let right = build_part(points, nodes, right_half, depth + 1);
    nodes.push(Node {
        point: *pivot,
        left,
        right,
    });
    NonZeroUsize::new(nodes.len())
}
