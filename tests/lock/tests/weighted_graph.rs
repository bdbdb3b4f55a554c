//! The engine on a non-puzzle domain: varying step costs, re-opening under an
//! inconsistent heuristic, budgets and contract violations.

use octile_harness::worlds::weighted_graph::WeightedGraph;
use octile_search::contract::{SearchProblem, ZeroHeuristic};
use octile_search::error::SearchFailed;
use octile_search::policy::SearchPolicy;
use octile_search::search::{astar, search};

/// S=0 A=1 B=2 C=3 G=4. The cheapest route S-A-C-G costs 12; the estimate
/// at A (10) is admissible but lets B settle C first at a worse cost.
fn inconsistent_diamond() -> WeightedGraph {
    let mut g = WeightedGraph::new(5, 0, 4).unwrap();
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(0, 2, 3.0).unwrap();
    g.add_edge(1, 3, 1.0).unwrap();
    g.add_edge(2, 3, 1.0).unwrap();
    g.add_edge(3, 4, 10.0).unwrap();
    g.set_estimates(vec![0.0, 10.0, 0.0, 0.0, 0.0]).unwrap();
    g
}

#[test]
fn reopened_state_yields_optimal_path() {
    let g = inconsistent_diamond();
    let result = search(&g, &|n: &usize| g.estimate(*n), &SearchPolicy::default()).unwrap();
    let solution = result.outcome.unwrap();
    assert_eq!(solution.actions, vec![1, 3, 4]);
    assert!((solution.cost - 12.0).abs() < 1e-9);
    assert!((g.path_cost(&solution.actions) - 12.0).abs() < 1e-9);
    assert_eq!(result.stats.closed, 4, "goal is never settled");
}

#[test]
fn zero_heuristic_matches_informed_cost() {
    let g = inconsistent_diamond();
    let informed = astar(&g, &|n: &usize| g.estimate(*n)).unwrap();
    let blind = astar(&g, &ZeroHeuristic).unwrap();
    assert!((informed.cost - blind.cost).abs() < 1e-9);
}

#[test]
fn disconnected_goal_is_exhausted() {
    let mut g = WeightedGraph::new(4, 0, 3).unwrap();
    g.add_undirected(0, 1, 2.0).unwrap();
    g.add_undirected(1, 2, 2.0).unwrap();
    let result = search(&g, &ZeroHeuristic, &SearchPolicy::default()).unwrap();
    assert_eq!(result.outcome, Err(SearchFailed::Exhausted));
    assert_eq!(result.stats.expansions, 3);
}

#[test]
fn budget_is_enforced() {
    let mut g = WeightedGraph::new(6, 0, 5).unwrap();
    for i in 0..5 {
        g.add_edge(i, i + 1, 1.0).unwrap();
    }
    let result = search(&g, &ZeroHeuristic, &SearchPolicy::with_max_expansions(3)).unwrap();
    assert_eq!(result.outcome, Err(SearchFailed::BudgetExhausted { limit: 3 }));
    assert_eq!(result.stats.expansions, 3);
}

#[test]
fn negative_estimate_is_a_contract_violation() {
    let mut g = WeightedGraph::new(2, 0, 1).unwrap();
    g.add_edge(0, 1, 1.0).unwrap();
    let outcome = astar(&g, &|_: &usize| -1.0);
    assert!(matches!(outcome, Err(SearchFailed::ContractViolation { .. })));
}

#[test]
fn zero_cost_edges_are_allowed() {
    let mut g = WeightedGraph::new(3, 0, 2).unwrap();
    g.add_edge(0, 1, 0.0).unwrap();
    g.add_edge(1, 2, 0.0).unwrap();
    g.add_edge(0, 2, 1.0).unwrap();
    let solution = astar(&g, &ZeroHeuristic).unwrap();
    assert_eq!(solution.actions, vec![1, 2]);
    assert!(solution.cost.abs() < 1e-9);
}
