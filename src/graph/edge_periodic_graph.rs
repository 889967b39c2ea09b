use crate::error::InputError;
use crate::graph::presence_pattern::lcm;
use crate::graph::{PresencePattern, time_horizon};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected graph whose edges carry periodic [`PresencePattern`]s.
///
/// Vertices are stored in insertion order and addressed by their index in the rest
/// of the crate. Adjacency is a map from a vertex index to its neighbours and the presence
/// pattern of the connecting edge (both directions are stored).
#[derive(Clone, Debug)]
pub struct EdgePeriodicGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<BTreeMap<usize, PresencePattern>>,
    edge_count: usize,
    period: usize,
}

impl<V: Clone + Eq + Hash + Debug> EdgePeriodicGraph<V> {
    /// Create an edgeless graph over the given (non-empty, distinct) vertices.
    pub fn new(vertices: Vec<V>) -> Result<EdgePeriodicGraph<V>, InputError> {
        if vertices.is_empty() {
            return Err(InputError::NoVertices);
        }
        let mut index = HashMap::with_capacity(vertices.len());
        for (i, v) in vertices.iter().enumerate() {
            if index.insert(v.clone(), i).is_some() {
                return Err(InputError::DuplicateVertex(format!("{v:?}")));
            }
        }
        Ok(EdgePeriodicGraph {
            adjacency: vec![BTreeMap::new(); vertices.len()],
            vertices,
            index,
            edge_count: 0,
            period: 1,
        })
    }

    /// Build a graph from a vertex list, an edge list, and an optional presence mapping.
    ///
    /// If the mapping is absent or empty, the graph is static (every edge uses the pattern
    /// `"1"`). Otherwise, the mapping must assign a pattern to every edge (in either
    /// orientation) and to nothing else.
    pub fn from_parts(
        vertices: Vec<V>,
        edges: &[(V, V)],
        presence: Option<&HashMap<(V, V), String>>,
    ) -> Result<EdgePeriodicGraph<V>, InputError> {
        let mut graph = EdgePeriodicGraph::new(vertices)?;
        let presence = presence.filter(|it| !it.is_empty());

        for (u, v) in edges {
            let pattern = match presence {
                None => PresencePattern::always(),
                Some(presence) => {
                    let pattern = presence
                        .get(&(u.clone(), v.clone()))
                        .or_else(|| presence.get(&(v.clone(), u.clone())))
                        .ok_or_else(|| {
                            InputError::MissingPattern(format!("{u:?}"), format!("{v:?}"))
                        })?;
                    pattern.parse()?
                }
            };
            graph.insert_edge(u, v, pattern)?;
        }

        if let Some(presence) = presence {
            let oriented: HashSet<(&V, &V)> = edges.iter().map(|(u, v)| (u, v)).collect();
            for (u, v) in presence.keys() {
                let forward = oriented.contains(&(u, v));
                // The reversed key is only accepted if the forward one is not used as well.
                let backward = oriented.contains(&(v, u))
                    && !presence.contains_key(&(v.clone(), u.clone()));
                if !forward && !backward {
                    return Err(InputError::UnexpectedPattern(
                        format!("{u:?}"),
                        format!("{v:?}"),
                    ));
                }
            }
        }

        Ok(graph)
    }

    /// Insert a new undirected edge `(u, v)` with the given presence pattern.
    pub fn insert_edge(&mut self, u: &V, v: &V, pattern: PresencePattern) -> Result<(), InputError> {
        let unknown = || InputError::UnknownEndpoint(format!("{u:?}"), format!("{v:?}"));
        let u_index = self.index_of(u).ok_or_else(unknown)?;
        let v_index = self.index_of(v).ok_or_else(unknown)?;
        if u_index == v_index {
            return Err(InputError::SelfLoop(format!("{u:?}")));
        }
        if self.adjacency[u_index].contains_key(&v_index) {
            return Err(InputError::DuplicateEdge(format!("{u:?}"), format!("{v:?}")));
        }

        self.period = lcm(self.period, pattern.len()).ok_or(InputError::TimeHorizonOverflow)?;
        self.adjacency[v_index].insert(u_index, pattern.clone());
        self.adjacency[u_index].insert(v_index, pattern);
        self.edge_count += 1;
        Ok(())
    }

    /// Create a graph with the same vertices and edges, but a different presence mapping.
    ///
    /// The `patterns` are assigned to edges in the order of [`EdgePeriodicGraph::edges`].
    pub fn with_patterns(&self, patterns: &[PresencePattern]) -> Result<Self, InputError> {
        debug_assert_eq!(patterns.len(), self.edge_count);
        let mut result = EdgePeriodicGraph {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            adjacency: vec![BTreeMap::new(); self.vertices.len()],
            edge_count: 0,
            period: 1,
        };
        let footprint: Vec<(usize, usize)> = self.edge_indices().collect();
        for ((u, v), pattern) in footprint.into_iter().zip(patterns) {
            let (u, v) = (self.vertices[u].clone(), self.vertices[v].clone());
            result.insert_edge(&u, &v, pattern.clone())?;
        }
        Ok(result)
    }
}

impl<V: Eq + Hash> EdgePeriodicGraph<V> {
    /// Vertices of the graph, in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The index of vertex `v`, if it exists.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Neighbours of the vertex at index `v` together with the presence pattern of the
    /// connecting edge. Neighbours are listed regardless of whether the edge is currently
    /// present.
    pub fn neighbours(&self, v: usize) -> impl Iterator<Item = (usize, &PresencePattern)> {
        self.adjacency[v].iter().map(|(u, p)| (*u, p))
    }

    /// True if `u` and `v` are connected by an edge (at any time).
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u), Some(v)) => self.adjacency[u].contains_key(&v),
            _ => false,
        }
    }

    /// True if the vertices at indices `u` and `v` are connected by an edge that is present
    /// at time `t`. Note that this is always false for `u == v`.
    pub fn is_present(&self, u: usize, v: usize, t: usize) -> bool {
        self.adjacency[u]
            .get(&v)
            .is_some_and(|pattern| pattern.is_present(t))
    }

    /// The period of the whole graph: least common multiple of all pattern lengths.
    pub fn time_horizon(&self) -> usize {
        self.period
    }

    /// All edges as `(u, v, pattern)` with `index(u) < index(v)`, ordered by `(u, v)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &PresencePattern)> {
        self.edge_indices()
            .map(|(u, v)| (&self.vertices[u], &self.vertices[v], &self.adjacency[u][&v]))
    }

    fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbours)| {
            neighbours
                .keys()
                .copied()
                .filter(move |v| *v > u)
                .map(move |v| (u, v))
        })
    }

    /// Recompute the period from the stored patterns. Used in debug assertions.
    pub(crate) fn recompute_period(&self) -> Option<usize> {
        time_horizon(self.edges().map(|(_, _, p)| p)).ok()
    }
}
