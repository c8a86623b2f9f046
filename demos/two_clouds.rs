use lloyd::{write_clusters, Kmeans, KmeansConfig, Seeding};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: text file -> Kmeans -> clusters on stdout.
    //
    // Pass a path to cluster your own data (2-D, comma separated); without
    // one, two small clouds are written to a temp file first.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let (path, _guard) = match args.next() {
        Some(path) => (std::path::PathBuf::from(path), None),
        None => {
            let mut file = tempfile::NamedTempFile::new()?;
            // Cloud A near (0,0), cloud B near (10,10).
            for (x, y) in [
                (0.0, 0.0),
                (0.4, 0.1),
                (-0.2, 0.3),
                (0.1, -0.4),
                (0.3, 0.2),
                (10.0, 10.0),
                (10.3, 9.9),
                (9.8, 10.2),
                (10.1, 10.4),
                (9.9, 9.7),
            ] {
                writeln!(file, "{x},{y}")?;
            }
            (file.path().to_path_buf(), Some(file))
        }
    };

    let config = KmeansConfig::new(2, 2)
        .with_max_iter(10)
        .with_seeding(Seeding::FarthestPoint);
    let mut kmeans = Kmeans::open(config, &path)?;
    let stats = kmeans.run()?.clone();

    println!(
        "iterations={} moves_last_iter={} non_empty={} converged={}",
        stats.iterations, stats.moves_last_iter, stats.non_empty, stats.converged
    );
    println!("wcss={:.4}", kmeans.wcss()?);
    for (i, cluster) in kmeans.clusters().iter().enumerate() {
        println!("cluster {}: {} points", i, cluster.size());
    }
    write_clusters(std::io::stdout().lock(), kmeans.clusters())?;

    Ok(())
}
