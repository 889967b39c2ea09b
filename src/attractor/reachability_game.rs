use crate::attractor::{Attractor, AttractorComputation, AttractorState};
use crate::error::InvariantError;
use cancel_this::Cancellable;
use computation_process::Algorithm;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// The owner of a vertex in a two-player reachability game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    /// The forcing player: one arc into the attractor is enough.
    Zero,
    /// The adversary: all arcs must lead into the attractor.
    One,
}

/// A two-player reachability game `(S0, S1, A, F)` over vertices labelled by `T`.
///
/// Vertices are stored densely; index `i` has label `labels()[i]`. Arcs are a set, i.e.
/// duplicate arcs are collapsed during construction.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachabilityGame<T> {
    labels: Vec<T>,
    owners: Vec<Player>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    finals: Vec<usize>,
}

impl<T: Clone + Eq + Hash + Debug> ReachabilityGame<T> {
    /// Build a game from labelled vertex sets. `S0` vertices come first in the resulting
    /// indexing, followed by `S1` vertices, each in iteration order.
    pub fn new<S0, S1, A, F>(
        s0: S0,
        s1: S1,
        arcs: A,
        finals: F,
    ) -> Result<ReachabilityGame<T>, InvariantError>
    where
        S0: IntoIterator<Item = T>,
        S1: IntoIterator<Item = T>,
        A: IntoIterator<Item = (T, T)>,
        F: IntoIterator<Item = T>,
    {
        let mut index = HashMap::new();
        let mut labels = Vec::new();
        let mut owners = Vec::new();
        for v in s0 {
            if !index.contains_key(&v) {
                index.insert(v.clone(), labels.len());
                labels.push(v);
                owners.push(Player::Zero);
            }
        }
        for v in s1 {
            match index.get(&v) {
                Some(i) if owners[*i] == Player::Zero => {
                    return Err(InvariantError::OverlappingPlayers(format!("{v:?}")));
                }
                Some(_) => (),
                None => {
                    index.insert(v.clone(), labels.len());
                    labels.push(v);
                    owners.push(Player::One);
                }
            }
        }

        let arcs = arcs
            .into_iter()
            .map(|(u, v)| match (index.get(&u), index.get(&v)) {
                (Some(u), Some(v)) => Ok((*u, *v)),
                _ => Err(InvariantError::UnknownArcEndpoint(
                    format!("{u:?}"),
                    format!("{v:?}"),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let finals = finals
            .into_iter()
            .map(|v| {
                index
                    .get(&v)
                    .copied()
                    .ok_or_else(|| InvariantError::UnknownFinal(format!("{v:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReachabilityGame::from_indexed(labels, owners, &arcs, finals))
    }
}

impl<T> ReachabilityGame<T> {
    /// Build a game from already indexed components. All indices must be valid.
    pub(crate) fn from_indexed(
        labels: Vec<T>,
        owners: Vec<Player>,
        arcs: &[(usize, usize)],
        mut finals: Vec<usize>,
    ) -> ReachabilityGame<T> {
        debug_assert_eq!(labels.len(), owners.len());
        let count = labels.len();
        let mut successors = vec![Vec::new(); count];
        for (u, v) in arcs {
            successors[*u].push(*v);
        }
        for list in successors.iter_mut() {
            list.sort_unstable();
            list.dedup();
        }

        let mut predecessors = vec![Vec::new(); count];
        for (u, list) in successors.iter().enumerate() {
            for v in list {
                predecessors[*v].push(u);
            }
        }

        finals.sort_unstable();
        finals.dedup();
        debug_assert!(finals.iter().all(|v| *v < count));

        ReachabilityGame {
            labels,
            owners,
            successors,
            predecessors,
            finals,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct arcs.
    pub fn arc_count(&self) -> usize {
        self.successors.iter().map(|it| it.len()).sum()
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    pub fn label(&self, v: usize) -> &T {
        &self.labels[v]
    }

    pub fn owner(&self, v: usize) -> Player {
        self.owners[v]
    }

    pub fn successors(&self, v: usize) -> &[usize] {
        &self.successors[v]
    }

    pub fn predecessors(&self, v: usize) -> &[usize] {
        &self.predecessors[v]
    }

    pub fn finals(&self) -> impl Iterator<Item = &usize> {
        self.finals.iter()
    }

    /// The moves from `v` that keep the owner of `v` on a winning path with respect to the
    /// given attractor.
    ///
    /// For [`Player::Zero`], these are the successors inside the attractor (forcing moves);
    /// for [`Player::One`], the successors outside of it (escapes).
    pub fn winning_moves(&self, v: usize, attractor: &Attractor) -> Vec<usize> {
        let keep_inside = self.owners[v] == Player::Zero;
        self.successors[v]
            .iter()
            .copied()
            .filter(|s| attractor.contains(*s) == keep_inside)
            .collect()
    }
}

impl<T: PartialEq> ReachabilityGame<T> {
    /// Index of the vertex with the given label. Runs in linear time.
    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.labels.iter().position(|it| it == label)
    }
}

impl<T: Clone + 'static> ReachabilityGame<T> {
    /// Compute the attractor of the final set (runs on a copy of this game).
    pub fn attractor(&self) -> Cancellable<Attractor> {
        AttractorComputation::run(self.clone(), AttractorState::from(self))
    }
}
