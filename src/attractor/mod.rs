//! Attractor computation for explicit two-player reachability games.
//!
//! A reachability game partitions its vertices between the forcing player ([`Player::Zero`],
//! `S0`) and the adversary ([`Player::One`], `S1`). The attractor of the final set `F` is the
//! least superset of `F` such that every `S0` vertex with *some* arc into the set and every
//! `S1` vertex with *all* arcs into the set is also included.
//!
//! The [`AttractorComputation`] propagates membership backwards from `F` using an explicit
//! worklist and a per-vertex counter of successors outside the attractor. Every vertex is
//! pushed at most once, so the whole computation runs in `O(|V| + |A|)`. An `S1` vertex
//! without successors is only part of the attractor if it is final.
//!
//! ```
//! use ggames_cop_win::attractor::attractor;
//!
//! let result = attractor(
//!     [1, 2],
//!     [3, 4, 5],
//!     [(1, 3), (2, 5), (3, 2), (3, 4), (4, 1), (4, 2)],
//!     [5],
//! )
//! .unwrap();
//! assert_eq!(result, [2, 5].into_iter().collect());
//! ```

mod attractor_state;
mod reachability_game;


use crate::error::CopWinError;
use computation_process::{Algorithm, Computation};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

pub use attractor_state::{Attractor, AttractorState, AttractorStep};
pub use reachability_game::{Player, ReachabilityGame};

pub type AttractorComputation<T> =
    Computation<ReachabilityGame<T>, AttractorState, Attractor, AttractorStep>;

/// Compute the attractor of `finals` in the reachability game `(s0, s1, arcs, finals)`.
///
/// Fails if `s0` and `s1` overlap, or if an arc or a final vertex is not in `s0 ∪ s1`.
pub fn attractor<T, S0, S1, A, F>(
    s0: S0,
    s1: S1,
    arcs: A,
    finals: F,
) -> Result<HashSet<T>, CopWinError>
where
    T: Clone + Eq + Hash + Debug + 'static,
    S0: IntoIterator<Item = T>,
    S1: IntoIterator<Item = T>,
    A: IntoIterator<Item = (T, T)>,
    F: IntoIterator<Item = T>,
{
    let game = ReachabilityGame::new(s0, s1, arcs, finals)?;
    let state = AttractorState::from(&game);
    let labels = game.labels().to_vec();
    let result = AttractorComputation::run(game, state)?;
    Ok(result.iter().map(|v| labels[v].clone()).collect())
}
