use crate::attractor::Attractor;
use crate::game::{GameGraph, Turn};
use std::collections::BTreeMap;
use std::hash::Hash;

/// The outcome of a cops and robber game together with the data it was derived from.
///
/// Covered robber starts are collected from the attractor members at time `0` where the
/// cops are about to move, grouped by the (ordered) cop placement.
#[derive(Clone, Debug)]
pub struct CopWinSolution<V> {
    game: GameGraph<V>,
    attractor: Attractor,
    /// Cop placement code -> indices of covered robber starts.
    covered: BTreeMap<usize, Vec<usize>>,
}

impl<V> CopWinSolution<V> {
    pub(crate) fn new(game: GameGraph<V>, attractor: Attractor) -> CopWinSolution<V> {
        let space = *game.space();
        let n = space.graph_vertices();
        let mut covered: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for code in 0..space.layer_size() {
            if attractor.contains(space.id(Turn::Cops, 0, code)) {
                covered.entry(code / n).or_default().push(code % n);
            }
        }
        CopWinSolution {
            game,
            attractor,
            covered,
        }
    }

    /// True if some cop placement wins against every robber start.
    pub fn is_cop_win(&self) -> bool {
        self.winning_placement_codes().next().is_some()
    }

    pub fn game_graph(&self) -> &GameGraph<V> {
        &self.game
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    fn winning_placement_codes(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.game.space().graph_vertices();
        self.covered
            .iter()
            .filter(move |(_, robbers)| robbers.len() == n)
            .map(|(cops, _)| *cops)
    }

    fn placement_indices(&self, code: usize) -> Vec<usize> {
        let space = self.game.space();
        // Decode with a dummy robber in the least significant position.
        let mut positions = vec![0; space.cops() + 1];
        space.decode_positions(code * space.graph_vertices(), &mut positions);
        positions.truncate(space.cops());
        positions
    }
}

impl<V: Clone + Eq + Hash> CopWinSolution<V> {
    /// All cop placements from which the cops win against every robber start.
    pub fn winning_placements(&self) -> Vec<Vec<V>> {
        self.winning_placement_codes()
            .map(|code| self.placement_labels(code))
            .collect()
    }

    /// For every cop placement with at least one covered robber start, the robber starts
    /// from which the cops win. Placements are ordered by the vertex order of the graph.
    pub fn covered_robber_starts(&self) -> Vec<(Vec<V>, Vec<V>)> {
        let vertices = self.game.graph().vertices();
        self.covered
            .iter()
            .map(|(code, robbers)| {
                let robbers = robbers.iter().map(|r| vertices[*r].clone()).collect();
                (self.placement_labels(*code), robbers)
            })
            .collect()
    }

    fn placement_labels(&self, code: usize) -> Vec<V> {
        let vertices = self.game.graph().vertices();
        self.placement_indices(code)
            .into_iter()
            .map(|p| vertices[p].clone())
            .collect()
    }
}
