use crate::error::InputError;
use crate::game::StateSpace;
use crate::graph::EdgePeriodicGraph;
use std::fmt::Debug;
use std::hash::Hash;

/// Parameters of a cops and robber game that are independent of the played graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of cops (at least one).
    pub cops: usize,
    /// Explicit time horizon of the game (default: the period of the graph).
    ///
    /// The horizon must be a positive multiple of the graph period, otherwise the time
    /// wrap-around would not respect edge presence.
    pub time_horizon: Option<usize>,
    /// Allow the robber to step onto a vertex occupied by a cop (default: `true`).
    ///
    /// Such a move leads directly into a capture vertex, so it never changes the outcome
    /// of the game, only the shape of the game graph.
    pub robber_may_enter_cop: bool,
    /// Cancel the game graph construction if it would exceed the given number of vertices
    /// (default: `usize::MAX`).
    pub max_vertices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(1)
    }
}

impl GameConfig {
    /// Create a new [`GameConfig`] for the given number of cops.
    pub fn new(cops: usize) -> GameConfig {
        GameConfig {
            cops,
            time_horizon: None,
            robber_may_enter_cop: true,
            max_vertices: usize::MAX,
        }
    }

    pub fn time_horizon(mut self, time_horizon: usize) -> Self {
        self.time_horizon = Some(time_horizon);
        self
    }

    pub fn robber_may_enter_cop(mut self, value: bool) -> Self {
        self.robber_may_enter_cop = value;
        self
    }

    pub fn max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

/// A validated combination of an [`EdgePeriodicGraph`] and a [`GameConfig`].
///
/// This is the context object of the [`GameGraphBuilder`](crate::game::GameGraphBuilder).
#[derive(Clone, Debug)]
pub struct GameGraphConfig<V> {
    graph: EdgePeriodicGraph<V>,
    space: StateSpace,
    pub robber_may_enter_cop: bool,
    pub max_vertices: usize,
}

impl<V: Clone + Eq + Hash + Debug> GameGraphConfig<V> {
    /// Validate `config` against `graph`.
    pub fn new(
        graph: EdgePeriodicGraph<V>,
        config: &GameConfig,
    ) -> Result<GameGraphConfig<V>, InputError> {
        if config.cops == 0 {
            return Err(InputError::NoCops);
        }
        debug_assert_eq!(graph.recompute_period(), Some(graph.time_horizon()));

        let period = graph.time_horizon();
        let horizon = match config.time_horizon {
            None => period,
            Some(horizon) if horizon > 0 && horizon % period == 0 => horizon,
            Some(horizon) => return Err(InputError::HorizonNotMultiple { horizon, period }),
        };

        let space = StateSpace::new(graph.vertex_count(), config.cops, horizon)?;
        Ok(GameGraphConfig {
            graph,
            space,
            robber_may_enter_cop: config.robber_may_enter_cop,
            max_vertices: config.max_vertices,
        })
    }
}

impl<V> GameGraphConfig<V> {
    pub fn graph(&self) -> &EdgePeriodicGraph<V> {
        &self.graph
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }
}
