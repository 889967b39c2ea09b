//! Decide whether `k` cops catch a robber on an edge-periodic graph.
//!
//! The input graph ([`graph::EdgePeriodicGraph`]) is expanded into an explicit turn-based
//! game graph ([`game`]), the capture set is attracted in the resulting reachability game
//! ([`attractor`]) and the outcome is read off the attractor ([`decision`]). The [`sweep`]
//! module decides all presence mappings of a footprint graph in parallel.
//!
//! ```
//! use ggames_cop_win::decision::is_k_cop_win;
//!
//! let cycle = [(1, 2), (2, 3), (3, 4), (4, 1)];
//! assert!(!is_k_cop_win(&[1, 2, 3, 4], &cycle, None, 1).unwrap());
//! assert!(is_k_cop_win(&[1, 2, 3, 4], &cycle, None, 2).unwrap());
//! ```

#[cfg(test)]
mod test_utils;

pub mod attractor;
pub mod decision;
pub mod error;
pub mod game;
pub mod graph;
#[cfg(feature = "json")]
pub mod problem_file;
pub mod sweep;

pub use attractor::attractor;
pub use decision::is_k_cop_win;
pub use error::{CopWinError, InputError, InvariantError};
pub use game::build_game_graph;

/// Extract the "simple name" of a type argument at compile time.
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
