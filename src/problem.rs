//! Problem data: the random symmetric distance matrix and demand generation.

use crate::error::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The depot node index. Both variants start and end here.
pub const DEPOT: usize = 0;

/// Smallest instance the generators will produce.
pub const MIN_NODES: usize = 3;
/// Largest instance the generators will produce.
pub const MAX_NODES: usize = 1000;

/// Lower bound of a generated edge distance (km).
pub const MIN_DISTANCE: u64 = 10;
/// Upper bound of a generated edge distance (km).
pub const MAX_DISTANCE: u64 = 500;

/// Lower bound of a generated node demand.
pub const MIN_DEMAND: u32 = 5;
/// Upper bound of a generated node demand.
pub const MAX_DEMAND: u32 = 30;

/// A symmetric matrix of pairwise node distances with a zero diagonal.
///
/// Entries are independent uniform draws, so the triangle inequality does
/// not hold in general and no solver may assume it. The matrix is frozen
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    distances: Vec<Vec<u64>>,
}

impl DistanceMatrix {
    /// Generate a random matrix for `n` nodes with distances in
    /// [`MIN_DISTANCE`, `MAX_DISTANCE`].
    ///
    /// `n` must lie in [`MIN_NODES`, `MAX_NODES`].
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self, Error> {
        if !(MIN_NODES..=MAX_NODES).contains(&n) {
            return Err(Error::NodeCountOutOfRange(n));
        }

        let mut distances = vec![vec![0u64; n]; n];
        for i in 0..n {
            for j in i + 1..n {
                let dist = rng.gen_range(MIN_DISTANCE..=MAX_DISTANCE);
                distances[i][j] = dist;
                distances[j][i] = dist;
            }
        }

        Ok(DistanceMatrix { distances })
    }

    /// Build a matrix from explicit rows, for scripted instances and tests.
    ///
    /// Rows must form a square, symmetric matrix with a zero diagonal. The
    /// generation bound on node count is deliberately not enforced here so
    /// small handcrafted instances stay constructible.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, Error> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::MalformedMatrix("matrix is empty"));
        }

        for row in &rows {
            if row.len() != n {
                return Err(Error::MalformedMatrix("matrix is not square"));
            }
        }
        for i in 0..n {
            if rows[i][i] != 0 {
                return Err(Error::MalformedMatrix("diagonal entry is not zero"));
            }
            for j in i + 1..n {
                if rows[i][j] != rows[j][i] {
                    return Err(Error::MalformedMatrix("matrix is not symmetric"));
                }
            }
        }

        Ok(DistanceMatrix { distances: rows })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True if the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance between two node indices.
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.distances[from][to]
    }

    /// Total distance of a closed cycle over `route`, including the
    /// wrap-around edge from the last node back to the first.
    pub fn cycle_distance(&self, route: &[usize]) -> u64 {
        let mut total = 0;
        for i in 0..route.len() {
            total += self.distances[route[i]][route[(i + 1) % route.len()]];
        }
        total
    }

    /// Total distance along `route` as written, summing consecutive edges
    /// with no wrap-around.
    pub fn path_distance(&self, route: &[usize]) -> u64 {
        route
            .windows(2)
            .map(|pair| self.distances[pair[0]][pair[1]])
            .sum()
    }

    /// Borrow the raw rows, mainly for rendering.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.distances
    }
}

/// Generate a demand vector for `n` nodes: zero for the depot, then a
/// uniform draw in [`MIN_DEMAND`, `MAX_DEMAND`] per delivery node.
pub fn random_demands<R: Rng>(n: usize, rng: &mut R) -> Vec<u32> {
    let mut demands = vec![0u32];
    for _ in 1..n {
        demands.push(rng.gen_range(MIN_DEMAND..=MAX_DEMAND));
    }
    demands
}
