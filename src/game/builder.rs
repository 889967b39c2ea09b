use crate::game::{GameGraph, GameGraphConfig, Turn};
use crate::simple_type_name;
use cancel_this::{Cancellable, Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use itertools::Itertools;
use log::{debug, info, trace};
use std::fmt::Debug;
use std::hash::Hash;

/// Intermediate state of the game graph construction: the next layer to expand and the
/// arcs generated so far.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameGraphState {
    pub layer: usize,
    pub arcs: Vec<(usize, usize)>,
}

/// Expands one `(time, turn)` layer of the game graph per step.
pub struct GameGraphStep;

impl<V: Clone + Eq + Hash + Debug> ComputationStep<GameGraphConfig<V>, GameGraphState, GameGraph<V>>
    for GameGraphStep
{
    fn step(
        context: &GameGraphConfig<V>,
        state: &mut GameGraphState,
    ) -> Completable<GameGraph<V>> {
        let space = *context.space();
        if space.vertex_count() > context.max_vertices {
            debug!(
                "GameGraph<{}> canceled ({} vertices exceed the limit of {}).",
                simple_type_name::<V>(),
                space.vertex_count(),
                context.max_vertices
            );
            return Err(Cancelled::new("GameConfig::max_vertices").into());
        }

        if state.layer >= space.layer_count() {
            info!(
                "GameGraph<{}> finished (vertices={}; arcs={}).",
                simple_type_name::<V>(),
                space.vertex_count(),
                state.arcs.len()
            );
            return Ok(GameGraph {
                graph: context.graph().clone(),
                space,
                arcs: std::mem::take(&mut state.arcs),
            });
        }

        let (turn, time) = space.layer_parts(state.layer);
        let before = state.arcs.len();
        expand_layer(context, turn, time, &mut state.arcs)?;
        debug!(
            "[layer:{}] Expanded {:?} moves at time {} ({} new arcs).",
            state.layer,
            turn,
            time,
            state.arcs.len() - before
        );
        state.layer += 1;
        Err(Suspended)
    }
}

/// Generate all arcs leaving the `(turn, time)` layer. Capture vertices have no moves.
fn expand_layer<V: Eq + Hash>(
    context: &GameGraphConfig<V>,
    turn: Turn,
    time: usize,
    arcs: &mut Vec<(usize, usize)>,
) -> Cancellable<()> {
    let space = context.space();
    let k = space.cops();
    let mut positions = vec![0; k + 1];
    for code in 0..space.layer_size() {
        is_cancelled!()?;
        space.decode_positions(code, &mut positions);
        let (cops, robber) = (&positions[..k], positions[k]);
        if cops.contains(&robber) {
            continue;
        }

        let source = space.id(turn, time, code);
        match turn {
            Turn::Robber => {
                let next_time = (time + 1) % space.time_horizon();
                for target in robber_moves(context, cops, robber, time) {
                    // Only the least significant digit (the robber) changes.
                    let target_code = code - robber + target;
                    arcs.push((source, space.id(Turn::Cops, next_time, target_code)));
                }
            }
            Turn::Cops => {
                let options = cops
                    .iter()
                    .map(|cop| stay_or_move(context, *cop, time))
                    .collect::<Vec<_>>();
                for mut next in options.into_iter().multi_cartesian_product() {
                    next.push(robber);
                    let target_code = space.encode_positions(&next);
                    arcs.push((source, space.id(Turn::Robber, time, target_code)));
                }
            }
        }
        trace!("Expanded game vertex {source}.");
    }
    Ok(())
}

/// The current vertex followed by all neighbours reachable at time `t`.
fn stay_or_move<V: Eq + Hash>(context: &GameGraphConfig<V>, vertex: usize, t: usize) -> Vec<usize> {
    std::iter::once(vertex)
        .chain(
            context
                .graph()
                .neighbours(vertex)
                .filter(|(_, pattern)| pattern.is_present(t))
                .map(|(neighbour, _)| neighbour),
        )
        .collect()
}

fn robber_moves<V: Eq + Hash>(
    context: &GameGraphConfig<V>,
    cops: &[usize],
    robber: usize,
    t: usize,
) -> Vec<usize> {
    let mut moves = stay_or_move(context, robber, t);
    if !context.robber_may_enter_cop {
        moves.retain(|target| !cops.contains(target));
    }
    moves
}
