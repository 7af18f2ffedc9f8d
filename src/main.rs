//! Command-line frontend for the TSP solvers.
//!
//! Collects and validates the instance parameters, builds the solver, runs
//! the selected algorithm, and renders the result. The solver core never
//! does any I/O of its own.

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use tsp_heuristics::capacity::{CapacityTsp, MAX_CAPACITY, MIN_CAPACITY};
use tsp_heuristics::error::Error;
use tsp_heuristics::labels::node_label;
use tsp_heuristics::problem::{random_demands, DistanceMatrix, MAX_NODES, MIN_NODES};
use tsp_heuristics::utils::{format_matrix, format_route, format_seconds};
use tsp_heuristics::GenericTsp;

/// Largest demand accepted from manual input.
const MAX_MANUAL_DEMAND: u32 = 100;

#[derive(Parser)]
#[command(name = "tsp-heuristics", version, about = "TSP solvers over a random distance matrix")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classic TSP: visit every node once and return to the start
    Generic {
        /// Number of nodes (3-1000)
        #[arg(long)]
        nodes: usize,
        /// Solving strategy
        #[arg(long, value_enum, default_value_t = GenericAlgorithm::TwoOpt)]
        algorithm: GenericAlgorithm,
        /// Seed for the random number generator (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the generated distance matrix
        #[arg(long)]
        show_matrix: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delivery variant: a capacity-limited truck serves per-node demands
    Capacity {
        /// Number of nodes (3-1000)
        #[arg(long)]
        nodes: usize,
        /// Truck capacity (10-500)
        #[arg(long, default_value_t = 100)]
        capacity: u32,
        /// Comma-separated demands for nodes B, C, ... (1-100 each);
        /// generated randomly when omitted
        #[arg(long, value_delimiter = ',')]
        demands: Option<Vec<u32>>,
        /// Solving strategy
        #[arg(long, value_enum, default_value_t = CapacityAlgorithm::LocalSearch)]
        algorithm: CapacityAlgorithm,
        /// Seed for the random number generator (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the generated distance matrix
        #[arg(long)]
        show_matrix: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenericAlgorithm {
    /// Exhaustive enumeration, optimal but limited to 10 nodes
    BruteForce,
    /// Greedy nearest-neighbor construction
    NearestNeighbor,
    /// Nearest-neighbor seed improved by 2-opt
    TwoOpt,
}

#[derive(Clone, Copy, ValueEnum)]
enum CapacityAlgorithm {
    /// Greedy nearest-pending-demand construction
    Greedy,
    /// Greedy seed improved by random swaps
    LocalSearch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generic {
            nodes,
            algorithm,
            seed,
            show_matrix,
            json,
        } => run_generic(nodes, algorithm, seed, show_matrix, json),
        Command::Capacity {
            nodes,
            capacity,
            demands,
            algorithm,
            seed,
            show_matrix,
            json,
        } => run_capacity(nodes, capacity, demands, algorithm, seed, show_matrix, json),
    }
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn check_node_count(nodes: usize) -> Result<(), String> {
    if (MIN_NODES..=MAX_NODES).contains(&nodes) {
        Ok(())
    } else {
        Err(format!(
            "node count must be between {} and {}, got {}",
            MIN_NODES, MAX_NODES, nodes
        ))
    }
}

fn run_generic(
    nodes: usize,
    algorithm: GenericAlgorithm,
    seed: Option<u64>,
    show_matrix: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_node_count(nodes)?;

    let mut rng = make_rng(seed);
    let matrix = DistanceMatrix::random(nodes, &mut rng)?;

    if show_matrix {
        println!("Distance matrix (km):");
        println!("{}", format_matrix(&matrix));
    }

    let solver = GenericTsp::new(matrix);
    let start = Instant::now();
    let tour = match algorithm {
        GenericAlgorithm::BruteForce => solver.brute_force()?,
        GenericAlgorithm::NearestNeighbor => solver.nearest_neighbor(),
        GenericAlgorithm::TwoOpt => solver.two_opt(),
    };
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&tour)?);
    } else {
        println!("Best route found:");
        println!("{}", format_route(&tour.route));
        println!("Total distance: {} km", tour.distance);
        println!("Elapsed: {}", format_seconds(elapsed));
    }

    Ok(())
}

fn run_capacity(
    nodes: usize,
    capacity: u32,
    demands: Option<Vec<u32>>,
    algorithm: CapacityAlgorithm,
    seed: Option<u64>,
    show_matrix: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_node_count(nodes)?;
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(format!(
            "truck capacity must be between {} and {}, got {}",
            MIN_CAPACITY, MAX_CAPACITY, capacity
        )
        .into());
    }

    let mut rng = make_rng(seed);
    let matrix = DistanceMatrix::random(nodes, &mut rng)?;

    let demands = match demands {
        Some(given) => parse_manual_demands(given, nodes)?,
        None => random_demands(nodes, &mut rng),
    };

    if show_matrix {
        println!("Distance matrix (km):");
        println!("{}", format_matrix(&matrix));
    }

    if !json {
        println!("Truck capacity: {} units", capacity);
        println!("Demands:");
        for (node, demand) in demands.iter().enumerate().skip(1) {
            println!("  Node {}: {} units", node_label(node), demand);
        }
    }

    let solver = CapacityTsp::new(matrix, demands, capacity)?;
    let start = Instant::now();
    let plan = match algorithm {
        CapacityAlgorithm::Greedy => solver.greedy(),
        CapacityAlgorithm::LocalSearch => solver.local_search(&mut rng),
    };
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("\nBest route found:");
    println!("{}", format_route(&plan.route));
    println!("Total distance: {} km", plan.distance);

    println!("\nDeliveries:");
    for d in &plan.deliveries {
        println!(
            "  Node {}: {} units (load left: {})",
            node_label(d.node),
            d.quantity,
            d.remaining_load
        );
    }

    println!("\nDepot returns:");
    for r in &plan.depot_returns {
        println!(
            "  From {}: {} ({} km)",
            node_label(r.origin),
            format_route(&r.path),
            r.distance
        );
    }

    println!("\nElapsed: {}", format_seconds(elapsed));
    Ok(())
}

/// Validate manual demands: one entry per non-depot node, each in
/// [1, MAX_MANUAL_DEMAND]. The depot's zero demand is prepended.
fn parse_manual_demands(
    given: Vec<u32>,
    nodes: usize,
) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    if given.len() != nodes - 1 {
        return Err(format!(
            "expected {} demand values (one per non-depot node), got {}",
            nodes - 1,
            given.len()
        )
        .into());
    }

    for (i, &demand) in given.iter().enumerate() {
        if demand == 0 {
            return Err(Error::NonPositiveDemand { node: i + 1 }.into());
        }
        if demand > MAX_MANUAL_DEMAND {
            return Err(format!(
                "demand for node {} must be between 1 and {}, got {}",
                node_label(i + 1),
                MAX_MANUAL_DEMAND,
                demand
            )
            .into());
        }
    }

    let mut demands = vec![0u32];
    demands.extend(given);
    Ok(demands)
}
