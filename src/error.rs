//! Error types for problem construction and solver preconditions.

use std::error::Error as StdError;
use std::fmt;

/// Errors raised by problem constructors and solver preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Node count outside the supported [3, 1000] range for generated instances.
    NodeCountOutOfRange(usize),
    /// An explicit matrix failed a structural check (squareness, symmetry, diagonal).
    MalformedMatrix(&'static str),
    /// Truck capacity outside the supported [10, 500] range.
    CapacityOutOfRange(u32),
    /// Demand vector length does not match the distance matrix.
    DemandVectorLength { expected: usize, actual: usize },
    /// The depot (node 0) must carry zero demand.
    DepotDemandNonZero,
    /// A non-depot node was given a zero demand.
    NonPositiveDemand { node: usize },
    /// Brute force refused: factorial enumeration is only allowed up to 10 nodes.
    BruteForceTooLarge { nodes: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NodeCountOutOfRange(n) => {
                write!(f, "node count {} is outside the supported range [3, 1000]", n)
            }
            Error::MalformedMatrix(reason) => write!(f, "malformed distance matrix: {}", reason),
            Error::CapacityOutOfRange(c) => {
                write!(f, "truck capacity {} is outside the supported range [10, 500]", c)
            }
            Error::DemandVectorLength { expected, actual } => write!(
                f,
                "demand vector has {} entries but the matrix has {} nodes",
                actual, expected
            ),
            Error::DepotDemandNonZero => write!(f, "the depot (node 0) must have zero demand"),
            Error::NonPositiveDemand { node } => {
                write!(f, "node {} has zero demand; non-depot demands must be positive", node)
            }
            Error::BruteForceTooLarge { nodes } => write!(
                f,
                "brute force refused for {} nodes; the factorial search is capped at 10",
                nodes
            ),
        }
    }
}

impl StdError for Error {}
