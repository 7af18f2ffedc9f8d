//! Solver for the capacity-constrained delivery variant.
//!
//! A single truck with finite capacity serves per-node demands, driving back
//! to the depot to reload whenever its load runs out. Routes may visit a node
//! several times when its demand exceeds what the truck can carry at once.

use crate::config::Config;
use crate::error::Error;
use crate::problem::{DistanceMatrix, DEPOT};
use crate::solution::{Delivery, DeliveryPlan, DepotReturn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest supported truck capacity.
pub const MIN_CAPACITY: u32 = 10;
/// Largest supported truck capacity.
pub const MAX_CAPACITY: u32 = 500;

/// Solver for the delivery variant over a fixed matrix, demand vector, and
/// truck capacity.
#[derive(Debug, Clone)]
pub struct CapacityTsp {
    matrix: DistanceMatrix,
    demands: Vec<u32>,
    capacity: u32,
    config: Config,
}

impl CapacityTsp {
    /// Create a solver with the default configuration.
    pub fn new(matrix: DistanceMatrix, demands: Vec<u32>, capacity: u32) -> Result<Self, Error> {
        CapacityTsp::with_config(matrix, demands, capacity, Config::default())
    }

    /// Create a solver with an explicit configuration.
    ///
    /// Fails fast on a capacity outside [`MIN_CAPACITY`, `MAX_CAPACITY`], a
    /// demand vector whose length does not match the matrix, or a non-zero
    /// depot demand. Zero demands on delivery nodes are accepted here; the
    /// input layer decides whether they are meaningful.
    pub fn with_config(
        matrix: DistanceMatrix,
        demands: Vec<u32>,
        capacity: u32,
        config: Config,
    ) -> Result<Self, Error> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(Error::CapacityOutOfRange(capacity));
        }
        if demands.len() != matrix.len() {
            return Err(Error::DemandVectorLength {
                expected: matrix.len(),
                actual: demands.len(),
            });
        }
        if demands[DEPOT] != 0 {
            return Err(Error::DepotDemandNonZero);
        }

        Ok(CapacityTsp {
            matrix,
            demands,
            capacity,
            config,
        })
    }

    /// The distance matrix this solver works on.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// The per-node demand vector.
    pub fn demands(&self) -> &[u32] {
        &self.demands
    }

    /// The truck capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Build a delivery plan greedily: from the current position, always
    /// drive to the closest node with outstanding demand, delivering as much
    /// as the current load allows.
    ///
    /// A node whose demand exceeds the load gets a partial delivery and stays
    /// pending for a later trip. Whenever the load hits zero the truck drives
    /// the direct edge back to the depot and reloads to full. With nothing
    /// left to deliver the plan is the trivial `[0]` route with distance 0.
    pub fn greedy(&self) -> DeliveryPlan {
        let n = self.matrix.len();
        let mut route = vec![DEPOT];
        let mut load = self.capacity;
        let mut distance = 0u64;
        let mut deliveries = Vec::new();
        let mut depot_returns = Vec::new();

        let mut pending = self.demands.clone();
        let mut completed = vec![false; n];
        completed[DEPOT] = true;

        while pending.iter().skip(1).any(|&d| d > 0) {
            let current = route[route.len() - 1];
            let mut best_next = None;
            let mut best_distance = u64::MAX;

            for node in 1..n {
                if pending[node] > 0
                    && !completed[node]
                    && self.matrix.distance(current, node) < best_distance
                {
                    best_distance = self.matrix.distance(current, node);
                    best_next = Some(node);
                }
            }

            let Some(next) = best_next else {
                // No reachable target this round; head home and reload
                // before rescanning.
                if current != DEPOT {
                    distance += self.push_depot_return(current, &mut route, &mut depot_returns);
                    load = self.capacity;
                }
                continue;
            };

            let delivered = pending[next].min(load);
            pending[next] -= delivered;
            if pending[next] == 0 {
                completed[next] = true;
            }
            load -= delivered;

            route.push(next);
            distance += best_distance;
            deliveries.push(Delivery {
                node: next,
                quantity: delivered,
                remaining_load: load,
            });
            log::debug!(
                "greedy: delivered {} to node {} (load left {})",
                delivered,
                next,
                load
            );

            if load == 0 {
                distance += self.push_depot_return(next, &mut route, &mut depot_returns);
                load = self.capacity;
            }
        }

        let last = route[route.len() - 1];
        if last != DEPOT {
            distance += self.push_depot_return(last, &mut route, &mut depot_returns);
        }

        DeliveryPlan {
            route,
            distance,
            deliveries,
            depot_returns,
        }
    }

    /// Improve the greedy plan with a stochastic hill-climb.
    ///
    /// Each round swaps two random non-depot positions of the current best
    /// route and replays the result with [`evaluate`](Self::evaluate).
    /// Candidates are accepted only when strictly shorter and still covering
    /// every node's full demand, so the best distance never increases and
    /// never exceeds the greedy seed.
    pub fn local_search<R: Rng>(&self, rng: &mut R) -> DeliveryPlan {
        let mut best = self.greedy();

        for iteration in 0..self.config.local_search_iterations {
            let candidate_route = self.swap_neighbor(&best.route, rng);
            let candidate = self.evaluate(&candidate_route);

            if candidate.distance < best.distance && candidate.fulfills(&self.demands) {
                log::debug!(
                    "local search iteration {}: {} -> {}",
                    iteration,
                    best.distance,
                    candidate.distance
                );
                best = candidate;
            }
        }

        best
    }

    /// Replay a full route sequence edge by edge and report what it costs
    /// and delivers.
    ///
    /// Deterministic and side-effect-free: the load starts at full capacity,
    /// each non-depot node with outstanding demand receives
    /// `min(load, remaining demand)`, and whenever the next node is the
    /// depot the truck reloads and a direct-edge return is logged. The
    /// caller decides whether to keep the result.
    pub fn evaluate(&self, route: &[usize]) -> DeliveryPlan {
        let mut load = self.capacity;
        let mut distance = 0u64;
        let mut deliveries = Vec::new();
        let mut depot_returns = Vec::new();
        let mut pending = self.demands.clone();

        for pair in route.windows(2) {
            let (current, next) = (pair[0], pair[1]);

            if current != DEPOT && pending[current] > 0 {
                let delivered = pending[current].min(load);
                pending[current] -= delivered;
                load -= delivered;
                deliveries.push(Delivery {
                    node: current,
                    quantity: delivered,
                    remaining_load: load,
                });
            }

            if next == DEPOT {
                load = self.capacity;
                if current != DEPOT {
                    depot_returns.push(self.depot_return_leg(current));
                }
            }

            distance += self.matrix.distance(current, next);
        }

        DeliveryPlan {
            route: route.to_vec(),
            distance,
            deliveries,
            depot_returns,
        }
    }

    /// Swap two randomly chosen distinct non-depot positions of `route`.
    ///
    /// Depot occurrences stay where they are, so the reload points of the
    /// sequence are untouched; the evaluator decides what the reordered
    /// deliveries actually cost.
    fn swap_neighbor<R: Rng>(&self, route: &[usize], rng: &mut R) -> Vec<usize> {
        let mut neighbor = route.to_vec();

        let positions: Vec<usize> = route
            .iter()
            .enumerate()
            .filter(|&(_, &node)| node != DEPOT)
            .map(|(pos, _)| pos)
            .collect();
        if positions.len() < 2 {
            return neighbor;
        }

        let picked: Vec<&usize> = positions.choose_multiple(rng, 2).collect();
        neighbor.swap(*picked[0], *picked[1]);
        neighbor
    }

    /// The direct-edge return leg from `origin` to the depot.
    ///
    /// No intermediate routing is attempted for return trips; the single
    /// hop is a deliberate simplification.
    fn depot_return_leg(&self, origin: usize) -> DepotReturn {
        let path = vec![origin, DEPOT];
        let distance = self.matrix.path_distance(&path);
        DepotReturn {
            origin,
            path,
            distance,
        }
    }

    /// Append a depot return to `route`, log it, and report its distance.
    fn push_depot_return(
        &self,
        origin: usize,
        route: &mut Vec<usize>,
        depot_returns: &mut Vec<DepotReturn>,
    ) -> u64 {
        let leg = self.depot_return_leg(origin);
        let leg_distance = leg.distance;
        route.push(DEPOT);
        log::debug!("returning to depot from node {} ({} km)", origin, leg_distance);
        depot_returns.push(leg);
        leg_distance
    }
}
