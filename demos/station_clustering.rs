use denclust::{Dbscan, Labeling, Matrix, StandardScaler, make_blobs};
use ndarray::{array, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Station table columns: projected x, projected y, highest monthly maximum
// temperature, mean temperature, lowest monthly minimum temperature.
const COL_X: usize = 0;
const COL_Y: usize = 1;
const COL_TM: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Weather Station Clustering ===\n");

    let stations = build_station_table()?;
    println!(
        "Station network: {} stations, {} columns (x, y, Tx, Tm, Tn)",
        stations.nrows(),
        stations.ncols()
    );

    println!("\n=== Clustering by Location ===");
    println!("Stations grouped purely by where they sit on the map");

    let locations = stations.slice(s![.., COL_X..=COL_Y]).to_owned();
    let scaled = StandardScaler::new().fit_transform(&locations)?;
    let by_location = Dbscan::new(0.15, 10).fit(&scaled)?;
    report(&by_location);
    summarize_clusters(&stations, &by_location);

    println!("\n=== Clustering by Location and Temperature ===");
    println!("Same stations, now with Tx/Tm/Tn readings joining the feature set");

    let scaled = StandardScaler::new().fit_transform(&stations)?;
    let by_climate = Dbscan::new(0.45, 10).fit(&scaled)?;
    report(&by_climate);
    summarize_clusters(&stations, &by_climate);

    println!(
        "\nRemote stations fall outside every dense region and stay noise in both runs."
    );

    Ok(())
}

/// Synthesizes a station network: five regional groups with region-specific
/// climates, plus a handful of remote stations far from everything.
fn build_station_table() -> Result<Matrix, Box<dyn std::error::Error>> {
    let centers = array![
        [-9.0, 4.0],
        [-4.0, -3.0],
        [0.0, 3.0],
        [5.0, -2.0],
        [9.0, 5.0]
    ];
    let region_mean_temp = [14.0, 26.0, 20.0, 28.0, 12.0];
    let (locations, regions) = make_blobs(&centers, 600, 0.6, 2015)?;

    let remote = [
        [-13.5, 8.0, 9.0, 2.0, -6.0],
        [12.5, -7.5, 31.0, 24.0, 18.0],
        [-12.0, -8.0, 13.0, 6.0, -1.0],
        [12.0, 9.0, 10.0, 3.0, -4.0],
        [0.5, -9.5, 30.0, 23.0, 17.0],
        [-2.5, 10.5, 8.0, 1.0, -7.0],
    ];

    let mut rng = StdRng::seed_from_u64(77);
    let n = locations.nrows();
    let mut table = Matrix::zeros((n + remote.len(), 5));
    for i in 0..n {
        let tm = region_mean_temp[regions[i]] + rng.gen_range(-1.5..1.5);
        table[[i, 0]] = locations[[i, 0]];
        table[[i, 1]] = locations[[i, 1]];
        table[[i, 2]] = tm + rng.gen_range(5.0..9.0);
        table[[i, 3]] = tm;
        table[[i, 4]] = tm - rng.gen_range(6.0..10.0);
    }
    for (offset, station) in remote.iter().enumerate() {
        for (j, &value) in station.iter().enumerate() {
            table[[n + offset, j]] = value;
        }
    }

    Ok(table)
}

fn report(labeling: &Labeling) {
    println!("  clusters found: {}", labeling.cluster_count());
    println!("  core samples:   {}", labeling.core_sample_indices().len());
    println!("  noise points:   {}", labeling.noise_points().len());
}

fn summarize_clusters(stations: &Matrix, labeling: &Labeling) {
    for cluster in 0..labeling.cluster_count() as i32 {
        let members = labeling.members(cluster);
        let count = members.len() as f64;
        let mut x = 0.0;
        let mut y = 0.0;
        let mut temp = 0.0;
        for &i in &members {
            x += stations[[i, COL_X]];
            y += stations[[i, COL_Y]];
            temp += stations[[i, COL_TM]];
        }
        println!(
            "  cluster {}: {} stations, centroid ({:.1}, {:.1}), avg temp {:.1} C",
            cluster,
            members.len(),
            x / count,
            y / count,
            temp / count
        );
    }
}
