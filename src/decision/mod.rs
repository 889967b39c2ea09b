//! Decide whether `k` cops win on an edge-periodic graph.
//!
//! The game graph is partitioned into a reachability game where the cops are the forcing
//! player and every capture vertex is final. The graph is *k-cop-win* iff there is a cop
//! placement at time `0` such that every robber start (with the cops to move) lies in the
//! attractor of the capture set.

mod cop_win_solution;


use crate::attractor::{AttractorComputation, AttractorState};
use crate::error::CopWinError;
use crate::game::{GameConfig, GameGraphBuilder, GameGraphConfig, GameGraphState};
use crate::graph::EdgePeriodicGraph;
use crate::simple_type_name;
use cancel_this::Cancellable;
use computation_process::Algorithm;
use log::info;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub use cop_win_solution::CopWinSolution;

/// Build the game graph, compute the attractor of the capture set and collect the outcome.
pub fn decide<V: Clone + Eq + Hash + Debug + 'static>(
    config: GameGraphConfig<V>,
) -> Cancellable<CopWinSolution<V>> {
    let game = GameGraphBuilder::run(config, GameGraphState::default())?;
    let reachability = game.reachability_game();
    let state = AttractorState::from(&reachability);
    let attractor = AttractorComputation::run(reachability, state)?;
    let solution = CopWinSolution::new(game, attractor);
    info!(
        "Decision<{}> finished (cops={}; cop-win={}).",
        simple_type_name::<V>(),
        solution.game_graph().space().cops(),
        solution.is_cop_win()
    );
    Ok(solution)
}

/// Validate `config` against `graph` and [`decide`] the resulting game.
pub fn solve<V: Clone + Eq + Hash + Debug + 'static>(
    graph: EdgePeriodicGraph<V>,
    config: &GameConfig,
) -> Result<CopWinSolution<V>, CopWinError> {
    let config = GameGraphConfig::new(graph, config)?;
    Ok(decide(config)?)
}

/// True if `cops` cops win on the graph `(V, E, tau)`.
///
/// `presence` may be `None` (or empty) for a static graph.
pub fn is_k_cop_win<V: Clone + Eq + Hash + Debug + 'static>(
    vertices: &[V],
    edges: &[(V, V)],
    presence: Option<&HashMap<(V, V), String>>,
    cops: usize,
) -> Result<bool, CopWinError> {
    let graph = EdgePeriodicGraph::from_parts(vertices.to_vec(), edges, presence)?;
    Ok(solve(graph, &GameConfig::new(cops))?.is_cop_win())
}
