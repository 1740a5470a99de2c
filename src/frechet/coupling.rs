use crate::frechet::error::{ensure_valid, FrechetError};
use crate::primitive::distance;

use geo::Point;

/// A vertex of one sequence paired with a vertex of the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledPair {
    /// Index into the left sequence.
    pub left: usize,
    /// Index into the right sequence.
    pub right: usize,
    /// Distance between the two paired points.
    pub distance: f64,
}

/// An optimal monotone coupling between two sequences.
///
/// The pairs begin at `(0, 0)`, end at `(n - 1, m - 1)`, and each step
/// advances the left index, the right index, or both, by one.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupling {
    pub distance: f64,
    pub pairs: Vec<CoupledPair>,
}

impl Coupling {
    /// The pair realising the Fréchet distance.
    pub fn bottleneck(&self) -> Option<&CoupledPair> {
        self.pairs
            .iter()
            .max_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Computes the discrete Fréchet distance along with an optimal coupling.
///
/// Unlike [`frechet_distance`](crate::frechet_distance) the full O(nm) table is
/// retained for back-tracking. When several predecessors tie, the diagonal
/// step is preferred, then the step on the left sequence.
pub fn frechet_coupling(a: &[Point], b: &[Point]) -> Result<Coupling, FrechetError> {
    ensure_valid(a, b)?;

    let (n, m) = (a.len(), b.len());
    let at = |i: usize, j: usize| i * m + j;

    let mut dp = vec![0.0; n * m];
    for i in 0..n {
        for j in 0..m {
            let d = distance(a[i], b[j]);

            dp[at(i, j)] = match (i, j) {
                (0, 0) => d,
                (0, _) => dp[at(0, j - 1)].max(d),
                (_, 0) => dp[at(i - 1, 0)].max(d),
                _ => {
                    let reachable = dp[at(i - 1, j)]
                        .min(dp[at(i, j - 1)])
                        .min(dp[at(i - 1, j - 1)]);
                    d.max(reachable)
                }
            };
        }
    }

    let mut pairs = Vec::with_capacity(n + m - 1);
    let (mut i, mut j) = (n - 1, m - 1);
    loop {
        pairs.push(CoupledPair {
            left: i,
            right: j,
            distance: distance(a[i], b[j]),
        });

        (i, j) = match (i, j) {
            (0, 0) => break,
            (0, _) => (0, j - 1),
            (_, 0) => (i - 1, 0),
            _ => [(i - 1, j - 1), (i - 1, j), (i, j - 1)]
                .into_iter()
                .reduce(|best, step| {
                    if dp[at(step.0, step.1)] < dp[at(best.0, best.1)] {
                        step
                    } else {
                        best
                    }
                })
                .unwrap_or((i - 1, j - 1)),
        };
    }

    pairs.reverse();

    Ok(Coupling {
        distance: dp[at(n - 1, m - 1)],
        pairs,
    })
}
