use crate::attractor::{Player, ReachabilityGame};
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{info, trace};

/// The set of vertices from which the forcing player can enforce a visit to the final set.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attractor {
    members: Vec<bool>,
    size: usize,
}

impl Attractor {
    pub fn contains(&self, v: usize) -> bool {
        self.members.get(v).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Indices of all members, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| **member)
            .map(|(v, _)| v)
    }
}

/// Intermediate state of the backward attractor propagation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttractorState {
    /// Vertices that are in the attractor but whose predecessors were not processed yet.
    worklist: Vec<usize>,
    /// Membership flags. A vertex is marked when it is pushed to the worklist.
    in_attractor: Vec<bool>,
    /// For every vertex, the number of successors not yet known to be in the attractor.
    remaining: Vec<usize>,
    size: usize,
}

impl<T> From<&ReachabilityGame<T>> for AttractorState {
    fn from(game: &ReachabilityGame<T>) -> Self {
        let count = game.vertex_count();
        let mut in_attractor = vec![false; count];
        let mut worklist = Vec::new();
        for v in game.finals() {
            if !in_attractor[*v] {
                in_attractor[*v] = true;
                worklist.push(*v);
            }
        }
        AttractorState {
            size: worklist.len(),
            worklist,
            in_attractor,
            remaining: (0..count).map(|v| game.successors(v).len()).collect(),
        }
    }
}

impl AttractorState {
    /// Number of vertices already known to be in the attractor.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of attractor vertices whose predecessors are yet to be processed.
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }
}

/// Processes one worklist vertex per step.
pub struct AttractorStep;

impl<T> ComputationStep<ReachabilityGame<T>, AttractorState, Attractor> for AttractorStep {
    fn step(context: &ReachabilityGame<T>, state: &mut AttractorState) -> Completable<Attractor> {
        is_cancelled!()?;

        let Some(v) = state.worklist.pop() else {
            info!(
                "Attractor finished (size={}; vertices={}).",
                state.size,
                context.vertex_count()
            );
            return Ok(Attractor {
                members: state.in_attractor.clone(),
                size: state.size,
            });
        };

        for u in context.predecessors(v) {
            let u = *u;
            if state.in_attractor[u] {
                continue;
            }
            debug_assert!(state.remaining[u] > 0);
            state.remaining[u] -= 1;
            if context.owner(u) == Player::Zero || state.remaining[u] == 0 {
                state.in_attractor[u] = true;
                state.size += 1;
                state.worklist.push(u);
            }
        }

        trace!(
            "[attractor:{}] Processed vertex {} ({} pending).",
            state.size,
            v,
            state.worklist.len()
        );
        Err(Suspended)
    }
}
