//! K-means clustering over owned, relocatable points.
//!
//! Partitions points into k clusters by minimizing **within-cluster sum of
//! squares** (WCSS). The foundational clustering algorithm, dating to 1957
//! (Lloyd).
//!
//! # The Objective
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm, As Run Here
//!
//! 1. **Load**: every point starts in cluster 0.
//! 2. **Seed**: pick k representatives from cluster 0 ([`Seeding`]); relocate
//!    representatives 1..k into clusters 1..k, one each.
//! 3. **Assign**: for each cluster in index order, scan a snapshot of its
//!    membership; move a point to the first cluster, in index order, whose
//!    centroid is strictly closer than its own.
//! 4. **Update**: recompute every invalidated centroid.
//! 5. Repeat 3-4 until a pass moves nothing or `max_iter` passes have run.
//!
//! Centroids used during a pass are the ones computed at the end of the
//! previous pass (batch update), never ones refreshed mid-pass.
//!
//! # Lifecycle
//!
//! ```text
//! Constructed --run()--> Seeded --> Refining --> Converged | Exhausted
//! ```
//!
//! With `k >= n` refinement is skipped: every point gets a cluster of its own
//! and the run ends converged after zero passes.
//!
//! # Failure Modes
//!
//! - **Local optima**: Lloyd finds a local minimum only
//! - **Wrong k**: k must be chosen up front
//! - **Initialization sensitivity**: bad seeds, bad result
//!
//! Any error during a run leaves the clusters in an undefined state; the
//! engine refuses to run again.

use super::members::Cluster;
use super::relocate::{pair_mut, Move};
use super::seeding::Seeding;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::io;
use crate::point::{Point, PointId};
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::ops::{Index, IndexMut};
use std::path::Path;
use tracing::{debug, info, warn};

/// Engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmeansConfig {
    /// Dimensionality of every point.
    pub dimensions: usize,
    /// Number of clusters.
    pub k: usize,
    /// Maximum refinement passes.
    pub max_iter: usize,
    /// Initial representative selection.
    pub seeding: Seeding,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            dimensions: 2,
            k: 2,
            max_iter: 100,
            seeding: Seeding::Strided,
        }
    }
}

impl KmeansConfig {
    /// Configuration for `k` clusters of `dimensions`-dimensional points.
    pub fn new(dimensions: usize, k: usize) -> Self {
        Self {
            dimensions,
            k,
            ..Self::default()
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the seeding strategy.
    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Seed with reproducible random sampling.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seeding(Seeding::Random { seed })
    }

    fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::ZeroClusters);
        }
        if self.dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        Ok(())
    }
}

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Points loaded, candidates picked.
    Constructed,
    /// Candidates relocated into their own clusters.
    Seeded,
    /// Assignment passes under way.
    Refining,
    /// A pass moved nothing (or refinement was skipped).
    Converged,
    /// The pass budget ran out while points were still moving.
    Exhausted,
}

impl State {
    /// Whether the run has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Converged | State::Exhausted)
    }
}

/// Statistics recorded when a run terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Refinement passes executed.
    pub iterations: usize,
    /// Relocations in the final pass.
    pub moves_last_iter: usize,
    /// Relocations across all passes (seeding excluded).
    pub total_moves: usize,
    /// Clusters with at least one member.
    pub non_empty: usize,
    /// Whether the final pass moved nothing.
    pub converged: bool,
}

/// Lloyd's k-means engine.
///
/// Owns exactly `k` clusters. All loaded points start in cluster 0; `run`
/// seeds the rest and refines.
#[derive(Debug, Clone)]
pub struct Kmeans {
    config: KmeansConfig,
    clusters: Vec<Cluster>,
    candidates: Vec<Point>,
    initial_size: usize,
    state: State,
    stats: RunStats,
}

impl Kmeans {
    /// Load `dimensions`-dimensional points from `path` into a `k`-cluster
    /// engine with the default seeding.
    pub fn new(dimensions: usize, k: usize, path: impl AsRef<Path>, max_iter: usize) -> Result<Self> {
        Self::open(
            KmeansConfig::new(dimensions, k).with_max_iter(max_iter),
            path,
        )
    }

    /// Load points from the file at `path`.
    pub fn open(config: KmeansConfig, path: impl AsRef<Path>) -> Result<Self> {
        config.validate()?;
        let points = io::load_points(path, config.dimensions)?;
        Self::from_points(config, points)
    }

    /// Load points from any buffered reader.
    pub fn from_reader<R: BufRead>(config: KmeansConfig, reader: R) -> Result<Self> {
        config.validate()?;
        let points = io::read_points(reader, config.dimensions)?;
        Self::from_points(config, points)
    }

    /// Build from already-loaded points.
    ///
    /// Fails with [`Error::EmptyCluster`] when `points` is empty: there is
    /// nothing to seed from.
    pub fn from_points(config: KmeansConfig, points: Vec<Point>) -> Result<Self> {
        config.validate()?;

        let mut primary = Cluster::new(config.dimensions)?;
        for point in points {
            if point.dimensions() != config.dimensions {
                return Err(Error::DimensionMismatch {
                    expected: config.dimensions,
                    found: point.dimensions(),
                });
            }
            primary.add(point);
        }
        let initial_size = primary.size();

        let mut clusters = Vec::with_capacity(config.k);
        clusters.push(primary);
        for _ in 1..config.k {
            clusters.push(Cluster::new(config.dimensions)?);
        }

        let mut candidates = (0..config.k)
            .map(|_| Point::new(config.dimensions))
            .collect::<Result<Vec<_>>>()?;
        clusters[0].pick_centroids(&mut candidates, &config.seeding)?;

        debug!(
            n_points = initial_size,
            k = config.k,
            seeding = ?config.seeding,
            "kmeans constructed"
        );

        Ok(Self {
            config,
            clusters,
            candidates,
            initial_size,
            state: State::Constructed,
            stats: RunStats::default(),
        })
    }

    /// Seed, then refine until convergence or the pass budget runs out.
    ///
    /// An engine runs once; a second call fails with [`Error::AlreadyRun`],
    /// as does any call after a failed run.
    pub fn run(&mut self) -> Result<&RunStats> {
        if self.state != State::Constructed {
            return Err(Error::AlreadyRun);
        }
        // Leave Constructed before anything can fail: a half-run engine is
        // never run again.
        self.state = State::Seeded;
        self.seed()?;

        if self.config.k >= self.initial_size {
            debug!(
                k = self.config.k,
                n_points = self.initial_size,
                "at least as many clusters as points; skipping refinement"
            );
            self.finish(0, 0, 0, true);
            return Ok(&self.stats);
        }

        self.refresh_centroids()?;
        self.state = State::Refining;

        let mut iterations = 0;
        let mut moves = 0;
        let mut total_moves = 0;
        while iterations < self.config.max_iter {
            moves = self.assign_pass()?;
            self.refresh_centroids()?;
            iterations += 1;
            total_moves += moves;
            debug!(pass = iterations, moves, "assignment pass");

            if moves == 0 {
                break;
            }
        }

        let converged = iterations > 0 && moves == 0;
        if !converged {
            warn!(
                max_iter = self.config.max_iter,
                moves_last_iter = moves,
                "pass budget exhausted before convergence"
            );
        }
        self.finish(iterations, moves, total_moves, converged);
        Ok(&self.stats)
    }

    /// Relocate candidates 1..k into clusters 1..k.
    ///
    /// With fewer points than clusters only the first `n` candidates are
    /// distinct members, so only those are relocated.
    fn seed(&mut self) -> Result<()> {
        let seeds = self.config.k.min(self.initial_size);
        for i in 1..seeds {
            let (primary, target) = pair_mut(&mut self.clusters, 0, i);
            Move::new(&self.candidates[i], primary, target).perform()?;
        }
        debug!(seeded = seeds.saturating_sub(1), "seeded clusters");
        Ok(())
    }

    /// One assignment pass. Returns the number of relocations.
    fn assign_pass(&mut self) -> Result<usize> {
        // Pass-start centroids; membership changes below do not affect them.
        let centroids: Vec<Option<Point>> = self
            .clusters
            .iter()
            .map(|c| c.centroid().get().cloned())
            .collect();

        let mut moves = 0;
        for c in 0..self.clusters.len() {
            // Each member present when this sub-scan starts is visited once.
            let snapshot: Vec<Point> = self.clusters[c].iter().cloned().collect();
            for point in &snapshot {
                let Some(home) = first_closer(point, c, &centroids)? else {
                    continue;
                };
                let (source, destination) = pair_mut(&mut self.clusters, c, home);
                Move::new(point, source, destination).perform()?;
                moves += 1;
            }
        }
        Ok(moves)
    }

    /// Recompute invalid centroids; clear those of empty clusters.
    fn refresh_centroids(&mut self) -> Result<()> {
        for cluster in &mut self.clusters {
            if cluster.is_empty() {
                cluster.clear_centroid();
            } else if !cluster.centroid().is_valid() {
                cluster.compute_centroid()?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, iterations: usize, moves: usize, total_moves: usize, converged: bool) {
        self.stats = RunStats {
            iterations,
            moves_last_iter: moves,
            total_moves,
            non_empty: self.non_empty_clusters(),
            converged,
        };
        self.state = if converged {
            State::Converged
        } else {
            State::Exhausted
        };
        info!(
            iterations,
            moves_last_iter = moves,
            non_empty = self.stats.non_empty,
            converged,
            "kmeans finished"
        );
    }

    /// Engine parameters.
    pub fn config(&self) -> &KmeansConfig {
        &self.config
    }

    /// Lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Statistics of the finished run (all zero before `run`).
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Point dimensionality.
    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    /// Pass budget.
    pub fn max_iter(&self) -> usize {
        self.config.max_iter
    }

    /// Passes executed by the run.
    pub fn iterations(&self) -> usize {
        self.stats.iterations
    }

    /// Relocations in the run's final pass.
    pub fn moves_last_iter(&self) -> usize {
        self.stats.moves_last_iter
    }

    /// Clusters that currently have members.
    pub fn non_empty_clusters(&self) -> usize {
        self.clusters.iter().filter(|c| !c.is_empty()).count()
    }

    /// The representatives picked at construction, in cluster order.
    pub fn candidates(&self) -> &[Point] {
        &self.candidates
    }

    /// All clusters in index order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Cluster index of every point, keyed by point id.
    pub fn labels(&self) -> HashMap<PointId, usize> {
        self.clusters
            .iter()
            .enumerate()
            .flat_map(|(c, cluster)| cluster.iter().map(move |p| (p.id(), c)))
            .collect()
    }

    /// Within-cluster sum of squares over all clusters.
    pub fn wcss(&mut self) -> Result<f64> {
        self.clusters
            .iter_mut()
            .map(Cluster::sum_of_squares)
            .sum()
    }
}

/// The cluster `point` should move to: the lowest-indexed cluster whose
/// centroid is strictly closer than `own`'s. Clusters without a centroid
/// attract nothing.
fn first_closer(point: &Point, own: usize, centroids: &[Option<Point>]) -> Result<Option<usize>> {
    let own_dist = match &centroids[own] {
        Some(centroid) => point.distance_to(centroid)?,
        None => f64::INFINITY,
    };

    for (i, centroid) in centroids.iter().enumerate() {
        if i == own {
            continue;
        }
        let Some(centroid) = centroid else {
            continue;
        };
        if point.distance_to(centroid)? < own_dist {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

impl Clustering for KmeansConfig {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        let points = data
            .iter()
            .map(|row| Point::from_values(self.dimensions, row))
            .collect::<Result<Vec<_>>>()?;
        let ids: Vec<PointId> = points.iter().map(Point::id).collect();

        let mut kmeans = Kmeans::from_points(self.clone(), points)?;
        kmeans.run()?;

        let labels = kmeans.labels();
        ids.iter()
            .map(|id| labels.get(id).copied().ok_or(Error::PointNotFound))
            .collect()
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Unchecked positional access to clusters, for inspection and tests.
///
/// Panics when `index >= k`.
impl Index<usize> for Kmeans {
    type Output = Cluster;

    fn index(&self, index: usize) -> &Cluster {
        &self.clusters[index]
    }
}

impl IndexMut<usize> for Kmeans {
    fn index_mut(&mut self, index: usize) -> &mut Cluster {
        &mut self.clusters[index]
    }
}

/// Every cluster in index order, one point per line.
impl fmt::Display for Kmeans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cluster in &self.clusters {
            write!(f, "{cluster}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn points(rows: &[[f64; 2]]) -> Vec<Point> {
        rows.iter()
            .map(|r| Point::from_values(2, r).unwrap())
            .collect()
    }

    fn two_clouds() -> Vec<[f64; 2]> {
        vec![
            [0.0, 0.0],
            [0.5, 0.1],
            [-0.3, 0.4],
            [0.2, -0.5],
            [0.1, 0.3],
            [10.0, 10.0],
            [10.4, 9.8],
            [9.7, 10.2],
            [10.1, 10.5],
            [9.9, 9.6],
        ]
    }

    #[test]
    fn test_two_clouds_converge() {
        let rows = two_clouds();
        let input = points(&rows);
        let ids: Vec<PointId> = input.iter().map(Point::id).collect();

        let mut kmeans =
            Kmeans::from_points(KmeansConfig::new(2, 2).with_max_iter(10), input).unwrap();
        let stats = kmeans.run().unwrap().clone();

        assert!(stats.converged);
        assert_eq!(stats.moves_last_iter, 0);
        assert_eq!(stats.non_empty, 2);
        assert!(stats.iterations >= 1 && stats.iterations <= 10);
        assert_eq!(kmeans.state(), State::Converged);

        let labels = kmeans.labels();
        let a: HashSet<usize> = ids[..5].iter().map(|id| labels[id]).collect();
        let b: HashSet<usize> = ids[5..].iter().map(|id| labels[id]).collect();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_ne!(a, b);
        assert_eq!(kmeans[0].size() + kmeans[1].size(), 10);
    }

    #[test]
    fn test_two_clouds_every_seeding() {
        for seeding in [
            Seeding::Strided,
            Seeding::FarthestPoint,
            Seeding::Random { seed: 3 },
        ] {
            let config = KmeansConfig::new(2, 2)
                .with_max_iter(10)
                .with_seeding(seeding);
            let mut kmeans = Kmeans::from_points(config, points(&two_clouds())).unwrap();
            let stats = kmeans.run().unwrap();
            assert!(stats.converged, "{seeding:?}");
            assert_eq!(stats.non_empty, 2, "{seeding:?}");
            for cluster in kmeans.clusters() {
                let near_origin = cluster.iter().filter(|p| p.coords()[0] < 5.0).count();
                assert!(near_origin == 0 || near_origin == cluster.size(), "{seeding:?}");
            }
        }
    }

    #[test]
    fn test_first_pass_moves_far_cloud() {
        // Strided seeds are rows 0 and 5. Cluster 0's centroid sits between
        // the clouds, so the four remaining far points move in pass 1.
        let mut kmeans =
            Kmeans::from_points(KmeansConfig::new(2, 2), points(&two_clouds())).unwrap();
        let stats = kmeans.run().unwrap();
        assert_eq!(stats.total_moves, 4);
        assert_eq!(stats.iterations, 2);
    }

    #[test]
    fn test_k_at_least_n_skips_refinement() {
        let rows = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        for k in [3, 5] {
            let mut kmeans = Kmeans::from_points(KmeansConfig::new(2, k), points(&rows)).unwrap();
            let stats = kmeans.run().unwrap();
            assert_eq!(stats.iterations, 0);
            assert_eq!(stats.moves_last_iter, 0);
            assert_eq!(stats.non_empty, 3);
            assert_eq!(kmeans.clusters().len(), k);
            assert!(kmeans.clusters()[..3].iter().all(|c| c.size() == 1));
        }
    }

    #[test]
    fn test_single_cluster() {
        let mut kmeans =
            Kmeans::from_points(KmeansConfig::new(2, 1), points(&two_clouds())).unwrap();
        let stats = kmeans.run().unwrap();
        assert!(stats.converged);
        assert_eq!(stats.iterations, 1);
        assert_eq!(kmeans[0].size(), 10);
    }

    #[test]
    fn test_zero_budget_is_exhausted() {
        let mut kmeans = Kmeans::from_points(
            KmeansConfig::new(2, 2).with_max_iter(0),
            points(&two_clouds()),
        )
        .unwrap();
        let stats = kmeans.run().unwrap();
        assert_eq!(stats.iterations, 0);
        assert!(!stats.converged);
        assert_eq!(kmeans.state(), State::Exhausted);
        // Seeding still happened.
        assert_eq!(kmeans[1].size(), 1);
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let err = Kmeans::from_points(KmeansConfig::new(2, 0), points(&two_clouds())).unwrap_err();
        assert!(matches!(err, Error::ZeroClusters));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = Kmeans::from_points(KmeansConfig::new(0, 2), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::ZeroDimensions));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = Kmeans::from_points(KmeansConfig::new(2, 2), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyCluster));
    }

    #[test]
    fn test_mismatched_point_rejected() {
        let mut input = points(&[[0.0, 0.0]]);
        input.push(Point::from_values(3, &[1.0, 1.0, 1.0]).unwrap());
        let err = Kmeans::from_points(KmeansConfig::new(2, 2), input).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_run_twice_fails() {
        let mut kmeans =
            Kmeans::from_points(KmeansConfig::new(2, 2), points(&two_clouds())).unwrap();
        kmeans.run().unwrap();
        assert!(matches!(kmeans.run(), Err(Error::AlreadyRun)));
    }

    #[test]
    fn test_duplicate_points_seed_cleanly() {
        let rows = [[1.0, 1.0]; 6];
        let mut kmeans = Kmeans::from_points(KmeansConfig::new(2, 3), points(&rows)).unwrap();
        let stats = kmeans.run().unwrap();
        assert!(stats.converged);
        assert_eq!(kmeans.clusters().iter().map(Cluster::size).sum::<usize>(), 6);
    }

    #[test]
    fn test_centroids_valid_after_run() {
        let mut kmeans =
            Kmeans::from_points(KmeansConfig::new(2, 3), points(&two_clouds())).unwrap();
        kmeans.run().unwrap();
        for cluster in kmeans.clusters() {
            if !cluster.is_empty() {
                assert!(cluster.centroid().is_valid());
            }
        }
    }

    #[test]
    fn test_wcss_drops_with_more_clusters() {
        let mut one = Kmeans::from_points(KmeansConfig::new(2, 1), points(&two_clouds())).unwrap();
        one.run().unwrap();
        let mut two = Kmeans::from_points(KmeansConfig::new(2, 2), points(&two_clouds())).unwrap();
        two.run().unwrap();
        assert!(two.wcss().unwrap() < one.wcss().unwrap());
    }

    #[test]
    fn test_display_lists_every_point() {
        let rows = [[0.0, 0.0], [10.0, 10.0]];
        let mut kmeans = Kmeans::from_points(KmeansConfig::new(2, 2), points(&rows)).unwrap();
        kmeans.run().unwrap();
        assert_eq!(kmeans.to_string(), "0, 0\n10, 10\n");
    }

    #[test]
    fn test_fit_predict_labels_rows() {
        let data: Vec<Vec<f64>> = two_clouds().iter().map(|r| r.to_vec()).collect();
        let config = KmeansConfig::new(2, 2).with_max_iter(10);
        let labels = config.fit_predict(&data).unwrap();

        assert_eq!(labels.len(), 10);
        assert!(labels[..5].iter().all(|&l| l == labels[0]));
        assert!(labels[5..].iter().all(|&l| l == labels[5]));
        assert_ne!(labels[0], labels[5]);
        assert_eq!(config.n_clusters(), 2);
    }

    #[test]
    fn test_fit_predict_labels_index_clusters() {
        let data = vec![vec![0.0, 0.0], vec![5.0, 5.0]];
        let config = KmeansConfig::new(2, 4);
        let labels = config.fit_predict(&data).unwrap();
        assert_eq!(labels, vec![0, 1]);
        assert!(labels.iter().all(|&l| l < config.n_clusters()));
    }

    #[test]
    fn test_fit_predict_rejects_ragged_rows() {
        let data = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(KmeansConfig::new(2, 2).fit_predict(&data).is_err());
    }

    #[test]
    fn test_fit_predict_deterministic_with_seed() {
        let data: Vec<Vec<f64>> = two_clouds().iter().map(|r| r.to_vec()).collect();
        let config = KmeansConfig::new(2, 3).with_seed(42);
        assert_eq!(
            config.fit_predict(&data).unwrap(),
            config.fit_predict(&data).unwrap()
        );
    }

    fn at(x: f64) -> Option<Point> {
        Some(Point::from_values(1, &[x]).unwrap())
    }

    fn xs(cluster: &Cluster) -> Vec<f64> {
        cluster.iter().map(|p| p.coords()[0]).collect()
    }

    #[test]
    fn test_first_closer_takes_lowest_index_not_nearest() {
        let point = Point::from_values(1, &[0.0]).unwrap();
        let centroids = vec![at(10.0), at(5.0), at(1.0)];
        assert_eq!(first_closer(&point, 0, &centroids).unwrap(), Some(1));
    }

    #[test]
    fn test_first_closer_needs_strictly_closer() {
        let point = Point::from_values(1, &[0.0]).unwrap();
        // Equidistant from its own centroid and cluster 1's: stays.
        let centroids = vec![at(1.0), at(-1.0)];
        assert_eq!(first_closer(&point, 0, &centroids).unwrap(), None);
        assert_eq!(first_closer(&point, 1, &centroids).unwrap(), None);
    }

    #[test]
    fn test_first_closer_skips_clusters_without_centroid() {
        let point = Point::from_values(1, &[0.0]).unwrap();
        let centroids = vec![at(4.0), None, at(3.0)];
        assert_eq!(first_closer(&point, 0, &centroids).unwrap(), Some(2));
        // No own centroid: any centroid is closer.
        let centroids = vec![None, at(100.0)];
        assert_eq!(first_closer(&point, 0, &centroids).unwrap(), Some(1));
    }

    #[test]
    fn test_pass_by_pass_on_a_line() {
        // Strided seeds are 0, 5 and 10, leaving cluster 0 = {0, 1, 6, 11}
        // with centroid 4.5. In pass 1:
        // - 6 moves to cluster 1 (1 < 1.5).
        // - 11 moves to cluster 1, the first strictly closer (6 < 6.5), even
        //   though cluster 2 is nearer.
        // - cluster 1's sub-scan then sees 11 once and sends it to cluster 2.
        let rows: Vec<Point> = [0.0, 1.0, 5.0, 6.0, 10.0, 11.0]
            .iter()
            .map(|&x| Point::from_values(1, &[x]).unwrap())
            .collect();
        let mut kmeans = Kmeans::from_points(KmeansConfig::new(1, 3), rows).unwrap();

        kmeans.seed().unwrap();
        kmeans.refresh_centroids().unwrap();
        assert_eq!(xs(&kmeans[0]), vec![0.0, 1.0, 6.0, 11.0]);
        assert_eq!(xs(&kmeans[1]), vec![5.0]);
        assert_eq!(xs(&kmeans[2]), vec![10.0]);

        assert_eq!(kmeans.assign_pass().unwrap(), 3);
        kmeans.refresh_centroids().unwrap();
        assert_eq!(xs(&kmeans[0]), vec![0.0, 1.0]);
        assert_eq!(xs(&kmeans[1]), vec![5.0, 6.0]);
        assert_eq!(xs(&kmeans[2]), vec![10.0, 11.0]);

        assert_eq!(kmeans.assign_pass().unwrap(), 0);
        assert_eq!(xs(&kmeans[0]), vec![0.0, 1.0]);
        assert_eq!(xs(&kmeans[1]), vec![5.0, 6.0]);
        assert_eq!(xs(&kmeans[2]), vec![10.0, 11.0]);
    }

    #[test]
    fn test_line_run_totals() {
        let rows: Vec<Point> = [0.0, 1.0, 5.0, 6.0, 10.0, 11.0]
            .iter()
            .map(|&x| Point::from_values(1, &[x]).unwrap())
            .collect();
        let mut kmeans = Kmeans::from_points(KmeansConfig::new(1, 3), rows).unwrap();
        let stats = kmeans.run().unwrap();
        assert_eq!(stats.total_moves, 3);
        assert_eq!(stats.iterations, 2);
        assert!(stats.converged);
    }

    #[test]
    fn test_non_finite_input_rejected_before_run() {
        let input = "0,0\n1,1\nNaN,0\n3,3\n";
        let err = Kmeans::from_reader(KmeansConfig::new(2, 2), input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral { line: 3, .. }));
    }

    #[test]
    fn test_candidates_follow_seeding() {
        let kmeans = Kmeans::from_points(KmeansConfig::new(2, 2), points(&two_clouds())).unwrap();
        assert_eq!(kmeans.state(), State::Constructed);
        assert_eq!(kmeans.candidates()[0].coords(), &[0.0, 0.0]);
        assert_eq!(kmeans.candidates()[1].coords(), &[10.0, 10.0]);
        assert_eq!(kmeans[0].size(), 10);
    }
}
