//! Synthetic datasets for trying out and testing clustering.

use ndarray::{Axis, s};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Matrix;
use crate::error::{DenclustError, Result};

/// Draws `n_samples` points from isotropic Gaussian blobs.
///
/// Each row of `centers` is one blob center. Samples are split evenly
/// across blobs, remainder to the leading ones, and come out grouped by
/// blob alongside the blob index each point was drawn from. The same
/// `seed` always produces the same dataset.
///
/// # Examples
///
/// ```rust
/// use denclust::synthetic::make_blobs;
/// use ndarray::array;
///
/// let centers = array![[0.0, 0.0], [10.0, 10.0]];
/// let (x, truth) = make_blobs(&centers, 7, 0.2, 1).unwrap();
/// assert_eq!(x.nrows(), 7);
/// assert_eq!(truth, vec![0, 0, 0, 0, 1, 1, 1]);
/// ```
pub fn make_blobs(
    centers: &Matrix,
    n_samples: usize,
    cluster_std: f64,
    seed: u64,
) -> Result<(Matrix, Vec<usize>)> {
    if centers.nrows() == 0 || centers.ncols() == 0 {
        return Err(DenclustError::InvalidParameter {
            param: "centers".to_string(),
            value: format!("{}x{}", centers.nrows(), centers.ncols()),
            constraint: "a matrix with at least one center and one coordinate".to_string(),
        });
    }
    if n_samples == 0 {
        return Err(DenclustError::InvalidParameter {
            param: "n_samples".to_string(),
            value: "0".to_string(),
            constraint: ">= 1".to_string(),
        });
    }
    if !cluster_std.is_finite() || cluster_std < 0.0 {
        return Err(DenclustError::InvalidParameter {
            param: "cluster_std".to_string(),
            value: format!("{cluster_std}"),
            constraint: "finite and >= 0".to_string(),
        });
    }

    let k = centers.nrows();
    let base = n_samples / k;
    let extra = n_samples % k;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Matrix::random_using((n_samples, centers.ncols()), StandardNormal, &mut rng);
    data *= cluster_std;

    let mut truth = Vec::with_capacity(n_samples);
    let mut start = 0;
    for (blob, center) in centers.axis_iter(Axis(0)).enumerate() {
        let rows = base + usize::from(blob < extra);
        let mut slice = data.slice_mut(s![start..start + rows, ..]);
        slice += &center;
        truth.extend(std::iter::repeat(blob).take(rows));
        start += rows;
    }

    Ok((data, truth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Metric;
    use ndarray::array;

    #[test]
    fn test_shapes_and_ground_truth() {
        let centers = array![[0.0, 0.0, 0.0], [5.0, 5.0, 5.0]];
        let (x, truth) = make_blobs(&centers, 10, 0.1, 3).unwrap();
        assert_eq!(x.shape(), &[10, 3]);
        assert_eq!(truth[..5], [0; 5]);
        assert_eq!(truth[5..], [1; 5]);
    }

    #[test]
    fn test_remainder_goes_to_leading_blobs() {
        let centers = array![[0.0], [10.0], [20.0]];
        let (_, truth) = make_blobs(&centers, 8, 0.1, 3).unwrap();
        assert_eq!(truth, vec![0, 0, 0, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn test_more_blobs_than_samples() {
        let centers = array![[0.0], [5.0], [10.0]];
        let (x, truth) = make_blobs(&centers, 2, 0.1, 1).unwrap();
        assert_eq!(x.nrows(), 2);
        assert_eq!(truth, vec![0, 1]);
    }

    #[test]
    fn test_same_seed_same_data() {
        let centers = array![[1.0, -1.0], [-3.0, 2.0]];
        let (a, _) = make_blobs(&centers, 64, 0.5, 9).unwrap();
        let (b, _) = make_blobs(&centers, 64, 0.5, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let centers = array![[0.0, 0.0]];
        let (a, _) = make_blobs(&centers, 16, 1.0, 1).unwrap();
        let (b, _) = make_blobs(&centers, 16, 1.0, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_points_stay_near_their_center() {
        let centers = array![[0.0, 0.0], [100.0, 100.0]];
        let (x, truth) = make_blobs(&centers, 40, 0.5, 17).unwrap();
        for (i, &blob) in truth.iter().enumerate() {
            let dist = Metric::Euclidean.distance(&x.row(i), &centers.row(blob));
            assert!(dist < 5.0, "point {i} is {dist} from its center");
        }
    }

    #[test]
    fn test_zero_std_puts_points_on_centers() {
        let centers = array![[2.0, -1.0]];
        let (x, _) = make_blobs(&centers, 3, 0.0, 5).unwrap();
        for i in 0..3 {
            assert_eq!(x.row(i), centers.row(0));
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let centers = array![[0.0, 0.0]];
        let empty = Matrix::zeros((0, 2));
        assert!(matches!(
            make_blobs(&empty, 10, 0.5, 1),
            Err(DenclustError::InvalidParameter { .. })
        ));
        assert!(matches!(
            make_blobs(&centers, 0, 0.5, 1),
            Err(DenclustError::InvalidParameter { .. })
        ));
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                make_blobs(&centers, 10, bad, 1),
                Err(DenclustError::InvalidParameter { .. })
            ));
        }
    }
}
