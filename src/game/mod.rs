//! Expansion of an [`EdgePeriodicGraph`] into an explicit turn-based game graph.
//!
//! Every game vertex is a joint configuration of `k` cops, one robber, a [`Turn`] flag and
//! a time step in `[0, horizon)`. A cops' move keeps the time and hands the turn to the
//! robber; a robber's move advances time by one (modulo the horizon). Both players may
//! stay or traverse an edge that is present at the current time step. Capture vertices
//! (the robber shares a vertex with some cop) have no outgoing arcs.
//!
//! The game graph is built by the [`GameGraphBuilder`], a suspendable computation that
//! expands one `(time, turn)` layer per step:
//!
//! ```
//! use computation_process::{Computable, Stateful};
//! use ggames_cop_win::game::{GameConfig, GameGraphBuilder, GameGraphConfig, GameGraphState};
//! use ggames_cop_win::graph::EdgePeriodicGraph;
//!
//! let graph = EdgePeriodicGraph::from_parts(vec![1, 2], &[(1, 2)], None).unwrap();
//! let config = GameGraphConfig::new(graph, &GameConfig::new(1)).unwrap();
//! let game = GameGraphBuilder::configure(config, GameGraphState::default())
//!     .compute()
//!     .unwrap();
//! assert_eq!(game.vertex_count(), 8);
//! ```

mod builder;
mod game_config;
mod game_graph;
mod state_space;

#[cfg(test)]
mod tests;

use crate::error::CopWinError;
use crate::graph::EdgePeriodicGraph;
use computation_process::{Algorithm, Computation};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub use builder::{GameGraphState, GameGraphStep};
pub use game_config::{GameConfig, GameGraphConfig};
pub use game_graph::{GameGraph, GameVertex};
pub use state_space::{StateSpace, Turn};

pub type GameGraphBuilder<V> =
    Computation<GameGraphConfig<V>, GameGraphState, GameGraph<V>, GameGraphStep>;

/// Validate `(V, E, tau)` and expand it into the game graph for `cops` cops.
///
/// `presence` may be `None` (or empty) for a static graph.
pub fn build_game_graph<V: Clone + Eq + Hash + Debug + 'static>(
    vertices: &[V],
    edges: &[(V, V)],
    presence: Option<&HashMap<(V, V), String>>,
    cops: usize,
) -> Result<GameGraph<V>, CopWinError> {
    let graph = EdgePeriodicGraph::from_parts(vertices.to_vec(), edges, presence)?;
    let config = GameGraphConfig::new(graph, &GameConfig::new(cops))?;
    Ok(GameGraphBuilder::run(config, GameGraphState::default())?)
}
