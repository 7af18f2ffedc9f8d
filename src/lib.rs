//! # tsp-heuristics
//!
//! Solvers for two variants of the Traveling Salesman Problem over a
//! synthetic complete graph with uniform-random integer distances:
//!
//! - the classic TSP (visit every node once and return to the origin),
//!   solved by brute force, nearest neighbor, or 2-opt local search;
//! - a capacity-constrained delivery variant, where a single truck with
//!   finite capacity serves per-node demands and drives back to the depot
//!   to reload, solved by greedy construction or a swap-based local search.
//!
//! The solvers work purely on node indices and return explicit result
//! values ([`Tour`], [`DeliveryPlan`]); label mapping and rendering live in
//! [`labels`] and [`utils`] for the CLI frontend. All randomness goes
//! through an injected [`rand::Rng`], so seeded runs are reproducible.

pub mod capacity;
pub mod config;
pub mod error;
pub mod generic;
pub mod labels;
pub mod problem;
pub mod solution;
pub mod utils;

pub use crate::capacity::CapacityTsp;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::generic::GenericTsp;
pub use crate::problem::{random_demands, DistanceMatrix};
pub use crate::solution::{Delivery, DeliveryPlan, DepotReturn, Tour};
