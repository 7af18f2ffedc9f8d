//! Solvers for the classic TSP: brute force, nearest neighbor, and 2-opt.

use crate::config::Config;
use crate::error::Error;
use crate::problem::{DistanceMatrix, DEPOT};
use crate::solution::Tour;
use itertools::Itertools;

/// Largest node count for which the factorial enumeration is allowed to run.
pub const BRUTE_FORCE_LIMIT: usize = 10;

/// Solver for the classic TSP over a fixed distance matrix.
///
/// Every solve method returns a fresh [`Tour`]; the solver itself holds no
/// best-known state, so algorithms can be run and compared freely.
#[derive(Debug, Clone)]
pub struct GenericTsp {
    matrix: DistanceMatrix,
    config: Config,
}

impl GenericTsp {
    /// Create a solver with the default configuration.
    pub fn new(matrix: DistanceMatrix) -> Self {
        GenericTsp::with_config(matrix, Config::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(matrix: DistanceMatrix, config: Config) -> Self {
        GenericTsp { matrix, config }
    }

    /// The distance matrix this solver works on.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Find the optimal tour by enumerating every permutation of the
    /// non-depot nodes, with node 0 anchored as start and end to skip
    /// rotational duplicates.
    ///
    /// Refuses with [`Error::BruteForceTooLarge`] above [`BRUTE_FORCE_LIMIT`]
    /// nodes. Ties go to the first permutation in enumeration order.
    pub fn brute_force(&self) -> Result<Tour, Error> {
        let n = self.matrix.len();
        if n > BRUTE_FORCE_LIMIT {
            return Err(Error::BruteForceTooLarge { nodes: n });
        }

        // The identity order is the first permutation enumerated, so using
        // it as the starting incumbent keeps the first-wins tie-break.
        let mut best_route: Vec<usize> = (0..n).collect();
        let mut best_distance = self.matrix.cycle_distance(&best_route);

        for perm in (1..n).permutations(n - 1) {
            let mut route = Vec::with_capacity(n + 1);
            route.push(DEPOT);
            route.extend(perm);

            let distance = self.matrix.cycle_distance(&route);
            if distance < best_distance {
                best_distance = distance;
                best_route = route;
            }
        }

        best_route.push(DEPOT);
        Ok(Tour {
            route: best_route,
            distance: best_distance,
        })
    }

    /// Build a tour by always moving to the closest unvisited node.
    ///
    /// The scan runs in index order with a strict `<`, so distance ties go
    /// to the lowest index. O(n²).
    pub fn nearest_neighbor(&self) -> Tour {
        let n = self.matrix.len();
        let mut visited = vec![false; n];
        let mut route = vec![DEPOT];
        visited[DEPOT] = true;
        let mut total = 0u64;

        while route.len() < n {
            let current = route[route.len() - 1];
            let mut min_distance = u64::MAX;
            let mut next = None;

            for node in 0..n {
                if !visited[node] && self.matrix.distance(current, node) < min_distance {
                    min_distance = self.matrix.distance(current, node);
                    next = Some(node);
                }
            }

            if let Some(node) = next {
                route.push(node);
                visited[node] = true;
                total += min_distance;
            }
        }

        // Close the cycle back to the start.
        if route[route.len() - 1] != route[0] {
            total += self.matrix.distance(route[route.len() - 1], route[0]);
            route.push(route[0]);
        }

        Tour {
            route,
            distance: total,
        }
    }

    /// Improve a nearest-neighbor tour with 2-opt segment reversals.
    ///
    /// First-improvement: an improving reversal is committed immediately and
    /// the scan continues over the updated route within the same pass.
    /// Passes repeat until none improves or `config.two_opt_max_passes` is
    /// reached. The result is never worse than the nearest-neighbor seed.
    pub fn two_opt(&self) -> Tour {
        let seed = self.nearest_neighbor();

        // Work on the open form; the closing depot is re-appended at the end.
        let mut route = seed.route[..seed.route.len() - 1].to_vec();
        let mut best_distance = seed.distance;
        let len = route.len();

        let mut improved = true;
        let mut passes = 0;

        while improved && passes < self.config.two_opt_max_passes {
            improved = false;
            passes += 1;

            for i in 1..len.saturating_sub(2) {
                for j in i + 1..len {
                    // Adjacent edges: reversal would be a no-op.
                    if j - i == 1 {
                        continue;
                    }

                    let mut candidate = route.clone();
                    candidate[i..j].reverse();

                    let candidate_distance = self.matrix.cycle_distance(&candidate);
                    if candidate_distance < best_distance {
                        route = candidate;
                        best_distance = candidate_distance;
                        improved = true;
                    }
                }
            }

            log::debug!(
                "2-opt pass {}: best distance {}{}",
                passes,
                best_distance,
                if improved { "" } else { " (no improvement)" }
            );
        }

        route.push(route[0]);
        Tour {
            route,
            distance: best_distance,
        }
    }
}
