//! Distance metrics for neighborhood queries.

use ndarray::ArrayView1;

/// Distance function used when comparing two points.
///
/// All built-in metrics are proper metrics over `R^d`. A `Custom` function
/// should be symmetric with zero self-distance, but is otherwise taken as-is.
#[derive(Debug, Clone, Copy)]
pub enum Metric {
    /// Euclidean (L2) distance. The default.
    Euclidean,
    /// Manhattan (L1) distance.
    Manhattan,
    /// Chebyshev (L-infinity) distance.
    Chebyshev,
    /// Caller-supplied distance function.
    Custom(fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64),
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Euclidean
    }
}

impl Metric {
    /// Distance between two points of equal dimension.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` have different lengths.
    pub fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        assert_eq!(a.len(), b.len(), "points must have the same dimension");
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            Metric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
            Metric::Chebyshev => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
            Metric::Custom(f) => f(a, b),
        }
    }

    /// Whether `|a[k] - b[k]| <= distance(a, b)` holds on every axis `k`.
    ///
    /// The k-d tree prunes subtrees with this bound, so it only accepts
    /// metrics for which it holds.
    pub(crate) fn axis_lower_bounds(&self) -> bool {
        !matches!(self, Metric::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        let dist = Metric::Euclidean.distance(&a.view(), &b.view());
        assert!((dist - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 0.0, 3.0];
        let dist = Metric::Manhattan.distance(&a.view(), &b.view());
        assert!((dist - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 0.0, 3.0];
        let dist = Metric::Chebyshev.distance(&a.view(), &b.view());
        assert!((dist - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let a = array![1.5, -2.5, 0.0];
        for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev] {
            assert_eq!(metric.distance(&a.view(), &a.view()), 0.0);
        }
    }

    #[test]
    fn test_built_in_metrics_are_symmetric() {
        let a = array![0.5, 1.5];
        let b = array![-1.0, 2.0];
        for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev] {
            let ab = metric.distance(&a.view(), &b.view());
            let ba = metric.distance(&b.view(), &a.view());
            assert!((ab - ba).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_metric() {
        fn squared_euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
            a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
        }
        let metric = Metric::Custom(squared_euclidean);
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert!((metric.distance(&a.view(), &b.view()) - 25.0).abs() < 1e-10);
        assert!(!metric.axis_lower_bounds());
    }

    #[test]
    fn test_default_is_euclidean() {
        assert!(matches!(Metric::default(), Metric::Euclidean));
    }

    #[test]
    #[should_panic(expected = "same dimension")]
    fn test_mismatched_dimensions_panic() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        Metric::Euclidean.distance(&a.view(), &b.view());
    }
}
