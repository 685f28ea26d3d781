//! Tests for the first-improvement local search engine.

use gls_tsp::config::SearchConfig;
use gls_tsp::instance::{EdgeWeightType, Instance};
use gls_tsp::local_search::LocalSearch;
use gls_tsp::matrix::SquareMatrix;
use gls_tsp::neighborhood::swap_neighbors;
use gls_tsp::penalty::PenaltyMatrix;
use gls_tsp::tour::Tour;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Four nodes where every Hamiltonian cycle happens to cost 14.
fn quad_instance() -> Instance {
    let values = vec![
        9999.0, 1.0, 2.0, 3.0, //
        1.0, 9999.0, 4.0, 5.0, //
        2.0, 4.0, 9999.0, 6.0, //
        3.0, 5.0, 6.0, 9999.0,
    ];
    Instance::from_matrix("quad", SquareMatrix::from_values(4, values))
}

/// Nodes strung out on a line; the best cycle walks it end to end (80).
fn line_instance(count: usize) -> Instance {
    let coordinates: Vec<(f64, f64)> = (0..count).map(|i| (i as f64 * 10.0, 0.0)).collect();
    Instance::from_coordinates("line", &coordinates, EdgeWeightType::Euc2d)
}

#[test]
fn test_already_optimal_tour_keeps_its_length() {
    let instance = quad_instance();
    let start = Tour::new(vec![0, 1, 2, 3]);
    assert!((start.length(&instance) - 14.0).abs() < 1e-9);

    let run = LocalSearch::new(SearchConfig::default()).improve(&instance, &start);

    assert!((run.score - 14.0).abs() < 1e-9);
    assert!((run.tour.length(&instance) - 14.0).abs() < 1e-9);
    assert!(run.tour.is_permutation(4));
    assert!(run.scans >= 1);
}

#[test]
fn test_descends_from_a_scrambled_tour() {
    let instance = line_instance(5);
    let start = Tour::new(vec![0, 2, 4, 1, 3]);
    let initial_length = start.length(&instance);
    assert!((initial_length - 120.0).abs() < 1e-9);

    let run = LocalSearch::new(SearchConfig::default()).improve(&instance, &start);

    assert!(run.score <= initial_length + 1e-9);
    assert!(run.score >= 80.0 - 1e-9);
    assert!((run.score - run.tour.length(&instance)).abs() < 1e-9);
    assert!(run.tour.is_permutation(5));
}

#[test]
fn test_result_is_a_one_swap_local_optimum() {
    let instance = line_instance(6);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..5 {
        let mut order: Vec<usize> = (0..6).collect();
        order.shuffle(&mut rng);
        let start = Tour::new(order);

        let run = LocalSearch::new(SearchConfig::default()).improve(&instance, &start);

        assert!(run.tour.is_permutation(6));
        for neighbor in swap_neighbors(&run.tour) {
            assert!(neighbor.length(&instance) + 1e-9 >= run.score);
        }
    }
}

#[test]
fn test_rerunning_on_the_result_preserves_the_record() {
    let instance = quad_instance();
    let search = LocalSearch::new(SearchConfig::default());

    let first = search.improve(&instance, &Tour::new(vec![0, 1, 2, 3]));
    let second = search.improve(&instance, &first.tour);

    assert!((first.score - second.score).abs() < 1e-9);
}

#[test]
fn test_mismatched_tour_is_handed_back_untouched() {
    let instance = quad_instance();
    let config = SearchConfig::default();
    let start = Tour::new(vec![0, 1, 2]);

    let run = LocalSearch::new(config.clone()).improve(&instance, &start);

    assert_eq!(run.tour, start);
    assert_eq!(run.scans, 0);
    assert!((run.score - config.initial_record).abs() < 1e-9);
}

#[test]
fn test_record_floor_below_every_score_freezes_the_search() {
    // No candidate can undercut a record that starts below all real
    // lengths, so the first scan comes back empty-handed.
    let instance = quad_instance();
    let config = SearchConfig::new().with_initial_record(1.0);
    let start = Tour::new(vec![0, 1, 2, 3]);

    let run = LocalSearch::new(config).improve(&instance, &start);

    assert_eq!(run.tour, start);
    assert_eq!(run.scans, 1);
    assert!((run.score - 1.0).abs() < 1e-9);
}

#[test]
fn test_penalized_mode_steers_away_from_a_penalized_edge() {
    let instance = quad_instance();
    let mut penalties = PenaltyMatrix::new(4);
    penalties.increment(0, 1);

    let search = LocalSearch::new(SearchConfig::default());
    let run = search.improve_penalized(&instance, &Tour::new(vec![0, 1, 2, 3]), &penalties);

    // Every cycle costs 14 raw, so the augmented record can only settle at
    // 14 on a tour that skips the penalized hop entirely.
    assert!((run.score - 14.0).abs() < 1e-9);
    assert!((run.tour.length(&instance) - 14.0).abs() < 1e-9);
    assert!(!run.tour.edges().any(|(from, to)| from == 0 && to == 1));
}
