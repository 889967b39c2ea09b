//! Edge-periodic (time-varying) input graphs.
//!
//! An edge-periodic graph is an undirected graph where every edge carries a binary
//! [`PresencePattern`]. The edge can be traversed at time `t` iff bit `t mod len` of its
//! pattern is `1`. The whole graph repeats with a period equal to the least common multiple
//! of all pattern lengths (see [`time_horizon`]). A graph without patterns is *static*.
//!
//! ```rust
//! use ggames_cop_win::graph::EdgePeriodicGraph;
//! use std::collections::HashMap;
//!
//! let edges = vec![(1, 2), (2, 3)];
//! let presence = HashMap::from([((1, 2), "1".to_string()), ((2, 3), "01".to_string())]);
//! let graph = EdgePeriodicGraph::from_parts(vec![1, 2, 3], &edges, Some(&presence)).unwrap();
//! assert_eq!(graph.time_horizon(), 2);
//! assert!(!graph.is_present(1, 2, 0));
//! assert!(graph.is_present(1, 2, 1));
//! ```

mod edge_periodic_graph;
mod presence_pattern;


pub use edge_periodic_graph::EdgePeriodicGraph;
pub use presence_pattern::{PresencePattern, time_horizon};
