use crate::game::GameConfig;
use std::time::Duration;

/// Parameters of a sweep over all presence mappings of a footprint graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Game parameters shared by all instances.
    pub game: GameConfig,
    /// Length of every enumerated presence pattern (`1..=16`).
    pub pattern_length: usize,
    /// Number of worker threads (`0` uses the default of the `rayon` pool).
    pub workers: usize,
    /// Number of instances generated ahead of the workers.
    pub batch_size: usize,
    /// Per-instance time limit.
    pub timeout: Option<Duration>,
}

impl SweepConfig {
    pub fn new(game: GameConfig, pattern_length: usize) -> SweepConfig {
        SweepConfig {
            game,
            pattern_length,
            workers: 0,
            batch_size: 256,
            timeout: None,
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the batch size; a batch always contains at least one instance.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
