//! Initial representative selection.
//!
//! Every strategy is reproducible: the same membership (in the same order)
//! and the same `k` always yield the same picks.
//!
//! | Strategy | Rule |
//! |----------|------|
//! | `Strided` | members at positions `⌊i·n/k⌋` for `i in 0..k` |
//! | `FarthestPoint` | member 0, then repeatedly the member farthest from all picks so far |
//! | `Random` | `k` distinct positions sampled with a seeded `StdRng` |
//!
//! When `n ≥ k` all three pick `k` distinct members. When `n < k` there are
//! not enough members to go around, and every strategy falls back to cycling
//! through positions (`i mod n`), so picks repeat.

use crate::error::{Error, Result};
use crate::point::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How [`Cluster::pick_centroids`](super::Cluster::pick_centroids) chooses
/// its `k` representatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seeding {
    /// Evenly-strided sampling over membership order.
    #[default]
    Strided,
    /// Deterministic max-min (farthest-first traversal).
    FarthestPoint,
    /// Uniform sampling without replacement from a fixed seed.
    Random {
        /// Seed for `StdRng`.
        seed: u64,
    },
}

impl Seeding {
    /// Positions into `members` of the `k` picks, in pick order.
    pub(crate) fn select(&self, members: &[Point], k: usize) -> Result<Vec<usize>> {
        let n = members.len();
        if n == 0 {
            return Err(Error::EmptyCluster);
        }
        if n < k {
            return Ok((0..k).map(|i| i % n).collect());
        }

        match *self {
            Seeding::Strided => Ok((0..k).map(|i| i * n / k).collect()),
            Seeding::FarthestPoint => farthest_first(members, k),
            Seeding::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                Ok(rand::seq::index::sample(&mut rng, n, k).into_vec())
            }
        }
    }
}

/// Farthest-first traversal. Ties go to the lowest position.
fn farthest_first(members: &[Point], k: usize) -> Result<Vec<usize>> {
    let n = members.len();
    let mut picks = Vec::with_capacity(k);
    if k == 0 {
        return Ok(picks);
    }

    let mut chosen = vec![false; n];
    // min_dist[j] = squared distance from member j to its nearest pick
    let mut min_dist = vec![f64::INFINITY; n];
    let mut next = 0;

    for _ in 0..k {
        picks.push(next);
        chosen[next] = true;

        let pick = &members[next];
        for (j, member) in members.iter().enumerate() {
            let d = member.squared_distance_to(pick)?;
            if d < min_dist[j] {
                min_dist[j] = d;
            }
        }

        let mut best: Option<usize> = None;
        for j in (0..n).filter(|&j| !chosen[j]) {
            match best {
                Some(b) if min_dist[j] <= min_dist[b] => {}
                _ => best = Some(j),
            }
        }
        match best {
            Some(b) => next = b,
            None => break,
        }
    }

    Ok(picks)
}
