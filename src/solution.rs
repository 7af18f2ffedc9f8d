//! Result types returned by the solvers.
//!
//! Solvers hand back explicit values rather than mutating internal best-known
//! state, so a caller can run several algorithms against the same instance
//! and compare the results side by side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed tour for the generic variant: node indices plus total distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    /// The visiting order, starting and ending at node 0.
    pub route: Vec<usize>,
    /// Total cycle distance.
    pub distance: u64,
}

/// One delivery stop in a capacity-variant route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// The node that received goods.
    pub node: usize,
    /// Units dropped off at this visit.
    pub quantity: u32,
    /// Truck load remaining after the drop-off.
    pub remaining_load: u32,
}

/// A return trip to the depot for reloading.
///
/// The return leg is modeled as the direct edge back to the depot; `path` is
/// recorded explicitly so a richer return-routing scheme could slot in later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotReturn {
    /// The node the return started from.
    pub origin: usize,
    /// The exact index path driven back to the depot.
    pub path: Vec<usize>,
    /// Distance of the return leg.
    pub distance: u64,
}

/// A complete capacity-variant result: the driven route, its distance, and
/// the audit logs of deliveries and depot returns.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// The full driven sequence, starting and ending at the depot. Interior
    /// zeros mark reload stops.
    pub route: Vec<usize>,
    /// Total driven distance, return legs included.
    pub distance: u64,
    /// Every drop-off, in driving order.
    pub deliveries: Vec<Delivery>,
    /// Every reload trip, in driving order.
    pub depot_returns: Vec<DepotReturn>,
}

impl DeliveryPlan {
    /// Sum of units delivered to `node` across all visits.
    pub fn delivered_to(&self, node: usize) -> u64 {
        self.deliveries
            .iter()
            .filter(|d| d.node == node)
            .map(|d| u64::from(d.quantity))
            .sum()
    }

    /// True if the plan delivers every node's full demand.
    pub fn fulfills(&self, demands: &[u32]) -> bool {
        demands
            .iter()
            .enumerate()
            .skip(1)
            .all(|(node, &demand)| self.delivered_to(node) == u64::from(demand))
    }
}

impl fmt::Debug for DeliveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DeliveryPlan:")?;
        writeln!(f, "  Distance: {}", self.distance)?;
        writeln!(f, "  Route: {:?}", self.route)?;
        writeln!(f, "  Deliveries: {}", self.deliveries.len())?;

        for d in &self.deliveries {
            writeln!(
                f,
                "    Node {}: {} units (load left: {})",
                d.node, d.quantity, d.remaining_load
            )?;
        }

        writeln!(f, "  Depot returns: {}", self.depot_returns.len())?;
        for r in &self.depot_returns {
            writeln!(
                f,
                "    From {} via {:?} ({} km)",
                r.origin, r.path, r.distance
            )?;
        }

        Ok(())
    }
}
