//! Tests for the classic TSP solvers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_heuristics::error::Error;
use tsp_heuristics::solution::Tour;
use tsp_heuristics::{DistanceMatrix, GenericTsp};

/// The 4-node reference instance with a known optimum of 80.
fn reference_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
    .unwrap()
}

/// Check that a tour is a closed cycle from node 0 visiting all n nodes once.
fn assert_valid_cycle(tour: &Tour, n: usize) {
    assert_eq!(tour.route.len(), n + 1);
    assert_eq!(tour.route[0], 0);
    assert_eq!(tour.route[n], 0);

    let mut seen = vec![false; n];
    for &node in &tour.route[..n] {
        assert!(!seen[node], "node {} visited twice", node);
        seen[node] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_brute_force_finds_known_optimum() {
    let solver = GenericTsp::new(reference_matrix());
    let tour = solver.brute_force().unwrap();

    // Optimal cycle is A -> B -> D -> C -> A (or its reverse) at 80.
    assert_eq!(tour.distance, 80);
    assert_valid_cycle(&tour, 4);
    assert!(tour.route == vec![0, 1, 3, 2, 0] || tour.route == vec![0, 2, 3, 1, 0]);
}

#[test]
fn test_brute_force_refuses_large_instances() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let solver = GenericTsp::new(DistanceMatrix::random(11, &mut rng).unwrap());

    assert_eq!(
        solver.brute_force().unwrap_err(),
        Error::BruteForceTooLarge { nodes: 11 }
    );
}

#[test]
fn test_brute_force_is_deterministic() {
    let solver = GenericTsp::new(reference_matrix());

    let first = solver.brute_force().unwrap();
    let second = solver.brute_force().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nearest_neighbor_visits_every_node_once() {
    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = 30;
        let solver = GenericTsp::new(DistanceMatrix::random(n, &mut rng).unwrap());

        let tour = solver.nearest_neighbor();
        assert_valid_cycle(&tour, n);
        assert_eq!(tour.distance, solver.matrix().path_distance(&tour.route));
    }
}

#[test]
fn test_nearest_neighbor_follows_greedy_choices() {
    let solver = GenericTsp::new(reference_matrix());
    let tour = solver.nearest_neighbor();

    // From A the closest is B (10), then D (25), then C (30), back to A (15).
    assert_eq!(tour.route, vec![0, 1, 3, 2, 0]);
    assert_eq!(tour.distance, 80);
}

#[test]
fn test_two_opt_never_worse_than_nearest_neighbor() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = 25;
        let solver = GenericTsp::new(DistanceMatrix::random(n, &mut rng).unwrap());

        let nn = solver.nearest_neighbor();
        let improved = solver.two_opt();

        assert_valid_cycle(&improved, n);
        assert!(improved.distance <= nn.distance);
        assert_eq!(
            improved.distance,
            solver.matrix().path_distance(&improved.route)
        );
    }
}

#[test]
fn test_brute_force_is_lower_bound_for_heuristics() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(100 + seed);
        let n = 8;
        let solver = GenericTsp::new(DistanceMatrix::random(n, &mut rng).unwrap());

        let optimal = solver.brute_force().unwrap();
        let nn = solver.nearest_neighbor();
        let improved = solver.two_opt();

        assert!(optimal.distance <= nn.distance);
        assert!(optimal.distance <= improved.distance);
    }
}

#[test]
fn test_two_opt_handles_minimal_instance() {
    let matrix = DistanceMatrix::from_rows(vec![
        vec![0, 12, 7],
        vec![12, 0, 20],
        vec![7, 20, 0],
    ])
    .unwrap();
    let solver = GenericTsp::new(matrix);

    // With 3 nodes every cycle has the same edges; 2-opt must still
    // return a well-formed closed route.
    let tour = solver.two_opt();
    assert_valid_cycle(&tour, 3);
    assert_eq!(tour.distance, 12 + 20 + 7);
}
