use std::collections::VecDeque;

use crate::Matrix;
use crate::cluster::labeling::{Labeling, NOISE};
use crate::dataset::check_finite;
use crate::error::{DenclustError, Result};
use crate::metric::Metric;
use crate::neighbors::{Algorithm, BruteScan, KdTree, RegionQuery};

// Points the expansion has not reached yet. Never visible in a Labeling.
const UNCLASSIFIED: i32 = -2;

#[derive(Debug, Clone)]
pub struct Dbscan {
    eps: f64,
    min_samples: usize,
    metric: Metric,
    algorithm: Algorithm,
}

impl Dbscan {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            eps,
            min_samples,
            metric: Metric::Euclidean,
            algorithm: Algorithm::Auto,
        }
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Clusters `x` and returns the per-point assignment.
    ///
    /// Rows are points. The run touches nothing outside the returned
    /// [`Labeling`], so one configured `Dbscan` can fit many datasets.
    pub fn fit(&self, x: &Matrix) -> Result<Labeling> {
        if self.eps <= 0.0 || self.eps.is_nan() {
            return Err(DenclustError::InvalidParameter {
                param: "eps".to_string(),
                value: format!("{}", self.eps),
                constraint: "> 0".to_string(),
            });
        }
        if self.min_samples < 1 {
            return Err(DenclustError::InvalidParameter {
                param: "min_samples".to_string(),
                value: format!("{}", self.min_samples),
                constraint: ">= 1".to_string(),
            });
        }
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(DenclustError::EmptyDataset);
        }
        // NaN drops out of brute-scan neighborhoods but also defeats k-d
        // pruning; the backends would disagree, so reject it up front
        check_finite(x)?;

        match self.algorithm {
            Algorithm::BruteForce => Ok(self.expand(x, &BruteScan::new(x, self.metric))),
            Algorithm::KdTree => Ok(self.expand(x, &KdTree::build(x, self.metric)?)),
            Algorithm::Auto => {
                if self.metric.axis_lower_bounds() {
                    Ok(self.expand(x, &KdTree::build(x, self.metric)?))
                } else {
                    Ok(self.expand(x, &BruteScan::new(x, self.metric)))
                }
            }
        }
    }

    /// Convenience wrapper over [`fit`](Dbscan::fit) returning just the labels.
    pub fn fit_predict(&self, x: &Matrix) -> Result<Vec<i32>> {
        Ok(self.fit(x)?.into_labels())
    }

    fn expand<Q: RegionQuery>(&self, x: &Matrix, index: &Q) -> Labeling {
        let n = x.nrows();
        let mut labels = vec![UNCLASSIFIED; n];
        let mut core = vec![false; n];
        let mut visited = vec![false; n];
        let mut enqueued = vec![false; n];
        let mut next_cluster: i32 = 0;

        for point in 0..n {
            if visited[point] {
                continue;
            }
            visited[point] = true;

            let neighbors = index.region_query(point, self.eps);
            if neighbors.len() < self.min_samples {
                // provisional: a later cluster may still absorb it as border
                labels[point] = NOISE;
                continue;
            }

            // core point: seed a new cluster and expand breadth-first
            core[point] = true;
            labels[point] = next_cluster;
            enqueued[point] = true;

            let mut seeds = VecDeque::new();
            for &neighbor in &neighbors {
                if !enqueued[neighbor] {
                    enqueued[neighbor] = true;
                    seeds.push_back(neighbor);
                }
            }

            while let Some(seed) = seeds.pop_front() {
                if !visited[seed] {
                    visited[seed] = true;
                    let reach = index.region_query(seed, self.eps);
                    if reach.len() >= self.min_samples {
                        // seed is core too, so its neighborhood joins the frontier
                        core[seed] = true;
                        for &neighbor in &reach {
                            if !enqueued[neighbor] {
                                enqueued[neighbor] = true;
                                seeds.push_back(neighbor);
                            }
                        }
                    }
                }
                // claim the point unless an earlier cluster already did;
                // noise is upgraded to border here
                if labels[seed] == UNCLASSIFIED || labels[seed] == NOISE {
                    labels[seed] = next_cluster;
                }
            }

            next_cluster += 1;
        }

        Labeling::new(labels, core)
    }
}
