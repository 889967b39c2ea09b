use crate::attractor::{Player, ReachabilityGame};
use crate::game::{StateSpace, Turn};
use crate::graph::EdgePeriodicGraph;
use std::hash::Hash;

/// A single configuration of the game: positions of all cops and of the robber, whose turn
/// it is, and the current time step.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameVertex<V> {
    /// Cop positions. Cops are distinguishable, so the order is significant.
    pub cops: Vec<V>,
    pub robber: V,
    pub turn: Turn,
    pub time: usize,
}

impl<V: PartialEq> GameVertex<V> {
    /// True if the robber stands on the same vertex as one of the cops.
    pub fn is_capture(&self) -> bool {
        self.cops.contains(&self.robber)
    }
}

/// The explicit game graph of a cops and robber game.
///
/// Vertices are addressed by the dense ids of the associated [`StateSpace`]; use
/// [`GameGraph::vertex`] and [`GameGraph::id_of`] to translate between ids and
/// [`GameVertex`] values. Every id in `0..vertex_count()` is a vertex of the game graph.
#[derive(Clone, Debug)]
pub struct GameGraph<V> {
    pub(crate) graph: EdgePeriodicGraph<V>,
    pub(crate) space: StateSpace,
    pub(crate) arcs: Vec<(usize, usize)>,
}

impl<V> GameGraph<V> {
    /// The input graph this game is played on.
    pub fn graph(&self) -> &EdgePeriodicGraph<V> {
        &self.graph
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    pub fn vertex_count(&self) -> usize {
        self.space.vertex_count()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// All arcs as pairs of game vertex ids. There are no duplicate arcs.
    pub fn arcs(&self) -> &[(usize, usize)] {
        &self.arcs
    }

    /// True if the game vertex `id` is a capture configuration.
    pub fn is_capture(&self, id: usize) -> bool {
        let (_, _, positions) = self.space.split(id);
        self.space.is_capture(positions)
    }

    /// Partition the game graph into a reachability game.
    ///
    /// `S0` (the forcing player) are the vertices where cops move, `S1` the vertices where
    /// the robber moves. The final set contains every capture vertex, regardless of turn.
    pub fn reachability_game(&self) -> ReachabilityGame<usize> {
        let count = self.vertex_count();
        let owners = (0..count)
            .map(|id| match self.space.split(id).0 {
                Turn::Cops => Player::Zero,
                Turn::Robber => Player::One,
            })
            .collect();
        let finals = (0..count).filter(|id| self.is_capture(*id)).collect();
        ReachabilityGame::from_indexed((0..count).collect(), owners, &self.arcs, finals)
    }
}

impl<V: Clone + Eq + Hash> GameGraph<V> {
    /// Translate a game vertex id into a [`GameVertex`].
    pub fn vertex(&self, id: usize) -> GameVertex<V> {
        let (turn, time, code) = self.space.split(id);
        let mut positions = vec![0; self.space.cops() + 1];
        self.space.decode_positions(code, &mut positions);
        let vertices = self.graph.vertices();
        let robber = vertices[positions[self.space.cops()]].clone();
        let cops = positions[..self.space.cops()]
            .iter()
            .map(|p| vertices[*p].clone())
            .collect();
        GameVertex {
            cops,
            robber,
            turn,
            time,
        }
    }

    /// Translate a [`GameVertex`] into its id, if it belongs to this game graph.
    pub fn id_of(&self, vertex: &GameVertex<V>) -> Option<usize> {
        if vertex.cops.len() != self.space.cops() || vertex.time >= self.space.time_horizon() {
            return None;
        }
        let positions = vertex
            .cops
            .iter()
            .chain(std::iter::once(&vertex.robber))
            .map(|v| self.graph.index_of(v))
            .collect::<Option<Vec<_>>>()?;
        let code = self.space.encode_positions(&positions);
        Some(self.space.id(vertex.turn, vertex.time, code))
    }

    /// Iterate over all game vertices, ordered by id.
    pub fn vertices(&self) -> impl Iterator<Item = GameVertex<V>> + '_ {
        (0..self.vertex_count()).map(|id| self.vertex(id))
    }

    /// Iterate over all arcs as pairs of [`GameVertex`] values.
    pub fn labelled_arcs(&self) -> impl Iterator<Item = (GameVertex<V>, GameVertex<V>)> + '_ {
        self.arcs
            .iter()
            .map(|(source, target)| (self.vertex(*source), self.vertex(*target)))
    }
}
