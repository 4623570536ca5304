use denclust::{Algorithm, Dbscan, StandardScaler, make_blobs};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Density-Based Clustering on Gaussian Blobs ===\n");

    // Three well-separated blobs, then standardize before clustering so
    // eps is expressed in units of feature spread.
    let centers = array![[4.0, 3.0], [2.0, -1.0], [-1.0, 4.0]];
    let (x, truth) = make_blobs(&centers, 1500, 0.5, 42)?;
    println!(
        "Dataset: {} samples, {} features, drawn from {} blobs",
        x.nrows(),
        x.ncols(),
        truth.iter().max().map_or(0, |&top| top + 1)
    );

    let x = StandardScaler::new().fit_transform(&x)?;

    let labeling = Dbscan::new(0.3, 7).fit(&x)?;
    println!("\nDBSCAN(eps=0.3, min_samples=7):");
    println!("  clusters found: {}", labeling.cluster_count());
    println!("  core samples:   {}", labeling.core_sample_indices().len());
    println!("  noise points:   {}", labeling.noise_points().len());

    for cluster in 0..labeling.cluster_count() as i32 {
        let members = labeling.members(cluster);
        let cores = members
            .iter()
            .filter(|&&i| labeling.is_core(i).unwrap_or(false))
            .count();
        println!(
            "  cluster {}: {} points ({} core, {} border)",
            cluster,
            members.len(),
            cores,
            members.len() - cores
        );
    }

    println!("\n=== Parameter Sweep ===");
    println!("Smaller eps fragments the blobs; larger min_samples grows the noise set");

    for &(eps, min_samples) in &[(0.2, 7), (0.3, 7), (0.5, 7), (0.3, 20)] {
        let swept = Dbscan::new(eps, min_samples).fit(&x)?;
        println!(
            "DBSCAN(eps={}, min_samples={}): {} clusters, {} noise points",
            eps,
            min_samples,
            swept.cluster_count(),
            swept.noise_points().len()
        );
    }

    println!("\n=== Neighborhood Backends ===");

    let brute = Dbscan::new(0.3, 7)
        .algorithm(Algorithm::BruteForce)
        .fit(&x)?;
    let tree = Dbscan::new(0.3, 7).algorithm(Algorithm::KdTree).fit(&x)?;
    println!(
        "brute-force scan and k-d tree produce identical labelings: {}",
        brute == tree
    );

    Ok(())
}
