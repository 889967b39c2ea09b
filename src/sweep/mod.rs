//! Exhaustive sweep over all presence mappings of a footprint graph.
//!
//! The [`PresenceMappings`] generator enumerates every assignment of non-zero patterns of a
//! fixed length to the edges of the footprint. Instances are taken from the generator in
//! batches, decided in parallel on a fixed `rayon` pool and handed to a single sink in
//! generation order.

mod mapping_space;
mod sweep_config;

#[cfg(test)]
mod tests;

use crate::decision::{CopWinSolution, decide};
use crate::error::{CopWinError, InputError};
use crate::game::GameGraphConfig;
use crate::graph::{EdgePeriodicGraph, PresencePattern};
use cancel_this::Cancellable;
use computation_process::{Generator, Stateful};
use log::{debug, info};
use rayon::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

pub use mapping_space::{MappingCursor, MappingSpace, MappingStep, PATTERN_LENGTHS};
pub use sweep_config::SweepConfig;

pub type PresenceMappings =
    Generator<MappingSpace, MappingCursor, Vec<PresencePattern>, MappingStep>;

/// Enumerate all mappings of `edges` edges to patterns of the given length.
pub fn presence_mappings(edges: usize, length: usize) -> Result<PresenceMappings, InputError> {
    let space = MappingSpace::new(edges, length)?;
    let cursor = MappingCursor::from(&space);
    Ok(PresenceMappings::configure(space, cursor))
}

/// Outcome of a single sweep instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    CopWin,
    RobberWin,
    /// The instance was cancelled (time limit or vertex limit) before it was decided.
    TimedOut,
}

/// A decided instance: its position in the enumeration and its presence mapping, aligned
/// with [`EdgePeriodicGraph::edges`] of the footprint.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepOutcome {
    pub index: usize,
    pub patterns: Vec<PresencePattern>,
    pub verdict: Verdict,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSummary {
    pub instances: usize,
    pub cop_wins: usize,
    pub robber_wins: usize,
    pub timed_out: usize,
}

impl SweepSummary {
    fn record(&mut self, verdict: Verdict) {
        self.instances += 1;
        match verdict {
            Verdict::CopWin => self.cop_wins += 1,
            Verdict::RobberWin => self.robber_wins += 1,
            Verdict::TimedOut => self.timed_out += 1,
        }
    }
}

/// Decide the game for every presence mapping of `footprint` and pass each outcome to
/// `sink`, in enumeration order.
///
/// The footprint's own presence mapping is ignored. Errors of the sink abort the sweep.
pub fn sweep<V, S>(
    footprint: &EdgePeriodicGraph<V>,
    config: &SweepConfig,
    mut sink: S,
) -> Result<SweepSummary, CopWinError>
where
    V: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    S: FnMut(&SweepOutcome) -> std::io::Result<()>,
{
    let mut mappings = presence_mappings(footprint.edge_count(), config.pattern_length)?;
    // Every instance shares the period of this mapping, so configuration errors are
    // reported before any instance is generated.
    let periodic_footprint = footprint.with_patterns(&vec![
        PresencePattern::from_value(1, config.pattern_length);
        footprint.edge_count()
    ])?;
    GameGraphConfig::new(periodic_footprint, &config.game)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;

    info!(
        "Sweep started (edges={}; pattern length={}; workers={}).",
        footprint.edge_count(),
        config.pattern_length,
        pool.current_num_threads()
    );

    let mut summary = SweepSummary::default();
    loop {
        let batch = mappings
            .by_ref()
            .take(config.batch_size.max(1))
            .collect::<Cancellable<Vec<_>>>()?;
        if batch.is_empty() {
            break;
        }

        let verdicts = pool.install(|| {
            batch
                .par_iter()
                .map(|patterns| decide_instance(footprint, patterns, config))
                .collect::<Vec<_>>()
        });

        for (patterns, verdict) in batch.into_iter().zip(verdicts) {
            let outcome = SweepOutcome {
                index: summary.instances,
                patterns,
                verdict: verdict?,
            };
            summary.record(outcome.verdict);
            sink(&outcome)?;
        }
        debug!(
            "[sweep:{}] Batch finished ({} cop-win; {} timed out).",
            summary.instances, summary.cop_wins, summary.timed_out
        );
    }

    info!(
        "Sweep finished (instances={}; cop-win={}; robber-win={}; timed out={}).",
        summary.instances, summary.cop_wins, summary.robber_wins, summary.timed_out
    );
    Ok(summary)
}

fn decide_instance<V: Clone + Eq + Hash + Debug + 'static>(
    footprint: &EdgePeriodicGraph<V>,
    patterns: &[PresencePattern],
    config: &SweepConfig,
) -> Result<Verdict, CopWinError> {
    let graph = footprint.with_patterns(patterns)?;
    let game = GameGraphConfig::new(graph, &config.game)?;
    let result = match config.timeout {
        Some(timeout) => decide_with_timeout(game, timeout),
        None => decide(game),
    };
    Ok(match result {
        Ok(solution) if solution.is_cop_win() => Verdict::CopWin,
        Ok(_) => Verdict::RobberWin,
        Err(cancelled) => {
            debug!("Instance {patterns:?} cancelled: {cancelled}.");
            Verdict::TimedOut
        }
    })
}

fn decide_with_timeout<V: Clone + Eq + Hash + Debug + 'static>(
    game: GameGraphConfig<V>,
    timeout: Duration,
) -> Cancellable<CopWinSolution<V>> {
    cancel_this::on_timeout(timeout, || decide(game.clone()))
}
