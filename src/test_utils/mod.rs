use crate::graph::EdgePeriodicGraph;
use std::collections::HashMap;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Raw `(V, E, tau)` description of a test graph, in the shape accepted by the free
/// functions of the crate.
#[derive(Clone, Debug, Default)]
pub struct TestGraph {
    pub vertices: Vec<u32>,
    pub edges: Vec<(u32, u32)>,
    pub presence: HashMap<(u32, u32), String>,
}

impl TestGraph {
    /// A static graph on `1..=n` with the given edges.
    pub fn new(n: u32, edges: &[(u32, u32)]) -> TestGraph {
        TestGraph {
            vertices: (1..=n).collect(),
            edges: edges.to_vec(),
            presence: HashMap::new(),
        }
    }

    /// Assign a presence pattern to an existing edge.
    pub fn with_pattern(mut self, edge: (u32, u32), pattern: &str) -> TestGraph {
        assert!(self.edges.contains(&edge), "{edge:?} is not an edge");
        self.presence.insert(edge, pattern.to_string());
        self
    }

    /// Presence mapping in the form accepted by `from_parts`: `None` for static graphs.
    ///
    /// Edges without an explicit pattern get `"1"` once at least one pattern is assigned.
    pub fn presence(&self) -> Option<HashMap<(u32, u32), String>> {
        if self.presence.is_empty() {
            return None;
        }
        let mut presence = self.presence.clone();
        for edge in &self.edges {
            presence.entry(*edge).or_insert_with(|| "1".to_string());
        }
        Some(presence)
    }

    pub fn graph(&self) -> EdgePeriodicGraph<u32> {
        EdgePeriodicGraph::from_parts(
            self.vertices.clone(),
            &self.edges,
            self.presence().as_ref(),
        )
        .unwrap()
    }
}

/// Complete graph on `1..=n`.
pub fn complete(n: u32) -> TestGraph {
    let mut edges = Vec::new();
    for u in 1..=n {
        for v in (u + 1)..=n {
            edges.push((u, v));
        }
    }
    TestGraph::new(n, &edges)
}

/// Path `1 - 2 - ... - n`.
pub fn path(n: u32) -> TestGraph {
    let edges: Vec<_> = (1..n).map(|u| (u, u + 1)).collect();
    TestGraph::new(n, &edges)
}

/// Cycle `1 - 2 - ... - n - 1`.
pub fn cycle(n: u32) -> TestGraph {
    let mut edges: Vec<_> = (1..n).map(|u| (u, u + 1)).collect();
    edges.push((n, 1));
    TestGraph::new(n, &edges)
}

/// Graph on `1..=n` without edges.
pub fn edgeless(n: u32) -> TestGraph {
    TestGraph::new(n, &[])
}

/// A 12-cycle where the two edges around vertex 12 are only present every fourth step.
pub fn periodic_cycle12() -> TestGraph {
    cycle(12)
        .with_pattern((11, 12), "0001")
        .with_pattern((12, 1), "0001")
}

/// A periodic tree on seven vertices with horizon 6.
pub fn periodic_tree() -> TestGraph {
    TestGraph::new(7, &[(1, 2), (2, 3), (3, 4), (2, 5), (5, 6), (3, 7)])
        .with_pattern((1, 2), "10")
        .with_pattern((2, 3), "01")
        .with_pattern((3, 4), "001")
        .with_pattern((2, 5), "010")
        .with_pattern((5, 6), "1")
        .with_pattern((3, 7), "001")
}

/// Path `1 - 2 - 3` where the edge `(2, 3)` is only present at odd steps.
pub fn periodic_path3() -> TestGraph {
    path(3).with_pattern((1, 2), "1").with_pattern((2, 3), "01")
}
