//! Tests for the guided local search controller and its penalty bookkeeping.

use gls_tsp::config::SearchConfig;
use gls_tsp::guided::GuidedLocalSearch;
use gls_tsp::instance::{EdgeWeightType, Instance};
use gls_tsp::local_search::LocalSearch;
use gls_tsp::matrix::SquareMatrix;
use gls_tsp::penalty::PenaltyMatrix;
use gls_tsp::tour::Tour;

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

fn line_instance(count: usize) -> Instance {
    let coordinates: Vec<(f64, f64)> = (0..count).map(|i| (i as f64 * 10.0, 0.0)).collect();
    Instance::from_coordinates("line", &coordinates, EdgeWeightType::Euc2d)
}

#[test]
fn test_penalty_matrix_counts_and_resets() {
    let mut penalties = PenaltyMatrix::new(4);

    for from in 0..4 {
        for to in 0..4 {
            assert_eq!(penalties.count(from, to), 0);
        }
    }

    penalties.increment(0, 1);
    penalties.increment(0, 1);
    penalties.increment(2, 3);

    assert_eq!(penalties.count(0, 1), 2);
    assert_eq!(penalties.count(1, 0), 0);

    // Edges (0,1), (1,2), (2,3), (3,0) carry 2 + 0 + 1 + 0.
    let tour = Tour::new(vec![0, 1, 2, 3]);
    assert_eq!(penalties.tour_total(&tour), 3);

    penalties.reset();
    assert_eq!(penalties.count(0, 1), 0);
    assert_eq!(penalties.tour_total(&tour), 0);
}

#[test]
fn test_penalize_cycles_through_the_least_penalized_edges() {
    let instance = line_instance(5);
    let tour = Tour::new(vec![0, 1, 2, 3, 4]);
    let guided = GuidedLocalSearch::new(SearchConfig::default());
    let mut penalties = PenaltyMatrix::new(5);

    // With equal utilities the earliest edge in visiting order wins, and a
    // bumped edge drops behind the untouched ones on the next call.
    guided.penalize(&instance, &tour, &mut penalties);
    assert_eq!(penalties.count(0, 1), 1);

    guided.penalize(&instance, &tour, &mut penalties);
    assert_eq!(penalties.count(1, 2), 1);

    guided.penalize(&instance, &tour, &mut penalties);
    guided.penalize(&instance, &tour, &mut penalties);
    guided.penalize(&instance, &tour, &mut penalties);
    assert_eq!(penalties.count(2, 3), 1);
    assert_eq!(penalties.count(3, 4), 1);
    assert_eq!(penalties.count(4, 0), 1);

    // All edges now tie again; the first one takes the next bump.
    guided.penalize(&instance, &tour, &mut penalties);
    assert_eq!(penalties.count(0, 1), 2);
}

#[test]
fn test_exhausts_the_budget_when_nothing_beats_the_baseline() {
    // Every cycle in this instance costs 14, so no penalized round can
    // produce a strictly shorter tour and the loop must run dry.
    let instance = quad_instance();
    let config = SearchConfig::default();
    let guided = GuidedLocalSearch::new(config.clone());

    let run = guided.run(&instance, &Tour::new(vec![0, 1, 2, 3]));

    assert!((run.length - 14.0).abs() < 1e-9);
    assert!((run.tour.length(&instance) - 14.0).abs() < 1e-9);
    assert_eq!(run.iterations, config.max_guided_iterations);
}

#[test]
fn test_respects_a_smaller_iteration_budget() {
    let instance = quad_instance();
    let config = SearchConfig::new().with_max_guided_iterations(5);

    let run = GuidedLocalSearch::new(config).run(&instance, &Tour::new(vec![0, 1, 2, 3]));

    assert_eq!(run.iterations, 5);
    assert!((run.length - 14.0).abs() < 1e-9);
}

#[test]
fn test_never_worse_than_the_plain_baseline() {
    let instance = line_instance(5);
    let start = Tour::new(vec![0, 2, 4, 1, 3]);
    let config = SearchConfig::default();

    let baseline = LocalSearch::new(config.clone()).improve(&instance, &start);
    let run = GuidedLocalSearch::new(config).run(&instance, &start);

    assert!(run.length <= baseline.score + 1e-9);
    assert!(run.tour.is_permutation(5));
}

#[test]
fn test_guided_search_is_deterministic() {
    let instance = line_instance(5);
    let start = Tour::new(vec![0, 2, 4, 1, 3]);
    let guided = GuidedLocalSearch::new(SearchConfig::default());

    let first = guided.run(&instance, &start);
    let second = guided.run(&instance, &start);

    assert_eq!(first, second);
}

#[test]
fn test_mismatched_tour_short_circuits() {
    let instance = quad_instance();
    let config = SearchConfig::default();
    let start = Tour::new(vec![0, 1]);

    let run = GuidedLocalSearch::new(config.clone()).run(&instance, &start);

    assert_eq!(run.tour, start);
    assert_eq!(run.iterations, 0);
    assert!((run.length - config.initial_record).abs() < 1e-9);
}
