use super::RegionQuery;
use crate::Matrix;
use crate::metric::Metric;

/// Exhaustive region-query backend.
///
/// Every query walks the full dataset, so a clustering run costs O(n^2)
/// distance evaluations. No assumptions are made about the metric.
pub struct BruteScan<'a> {
    points: &'a Matrix,
    metric: Metric,
}

impl<'a> BruteScan<'a> {
    pub fn new(points: &'a Matrix, metric: Metric) -> Self {
        Self { points, metric }
    }
}

impl RegionQuery for BruteScan<'_> {
    fn region_query(&self, point: usize, eps: f64) -> Vec<usize> {
        let query = self.points.row(point);
        let mut neighbors = Vec::new();
        for i in 0..self.points.nrows() {
            if self.metric.distance(&query, &self.points.row(i)) <= eps {
                neighbors.push(i);
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_region_query_includes_self() {
        let x = array![[0.0, 0.0], [10.0, 10.0]];
        let scan = BruteScan::new(&x, Metric::Euclidean);
        assert_eq!(scan.region_query(0, 0.5), vec![0]);
        assert_eq!(scan.region_query(1, 0.5), vec![1]);
    }

    #[test]
    fn test_region_query_boundary_is_inclusive() {
        let x = array![[0.0], [1.0], [2.5]];
        let scan = BruteScan::new(&x, Metric::Euclidean);
        // distance exactly eps counts as a neighbor
        assert_eq!(scan.region_query(0, 1.0), vec![0, 1]);
        assert_eq!(scan.region_query(1, 1.5), vec![0, 1, 2]);
    }

    #[test]
    fn test_region_query_ascending_order() {
        let x = array![[0.3], [0.0], [0.2], [5.0], [0.1]];
        let scan = BruteScan::new(&x, Metric::Euclidean);
        assert_eq!(scan.region_query(1, 0.35), vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_region_query_respects_metric() {
        // corner point: euclidean distance sqrt(2), chebyshev distance 1
        let x = array![[0.0, 0.0], [1.0, 1.0]];
        let euclid = BruteScan::new(&x, Metric::Euclidean);
        assert_eq!(euclid.region_query(0, 1.0), vec![0]);
        let cheby = BruteScan::new(&x, Metric::Chebyshev);
        assert_eq!(cheby.region_query(0, 1.0), vec![0, 1]);
    }
}
