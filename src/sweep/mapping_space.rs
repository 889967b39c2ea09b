use crate::error::InputError;
use crate::graph::PresencePattern;
use computation_process::{Completable, GeneratorStep};
use log::trace;

/// Supported lengths of enumerated presence patterns.
pub const PATTERN_LENGTHS: std::ops::RangeInclusive<usize> = 1..=16;

/// The space of all presence mappings of `edges` edges to patterns of a fixed length.
///
/// Every edge gets a pattern with at least one `1`, so there are `(2^length - 1)^edges`
/// mappings in total.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingSpace {
    edges: usize,
    length: usize,
}

impl MappingSpace {
    pub fn new(edges: usize, length: usize) -> Result<MappingSpace, InputError> {
        if !PATTERN_LENGTHS.contains(&length) {
            return Err(InputError::PatternLength(length));
        }
        Ok(MappingSpace { edges, length })
    }

    pub fn edges(&self) -> usize {
        self.edges
    }

    pub fn pattern_length(&self) -> usize {
        self.length
    }

    /// Number of mappings in this space, or `None` if it does not fit into `u128`.
    pub fn mapping_count(&self) -> Option<u128> {
        let per_edge = (1u128 << self.length) - 1;
        let exponent = u32::try_from(self.edges).ok()?;
        per_edge.checked_pow(exponent)
    }

    fn pattern(&self, value: usize) -> PresencePattern {
        PresencePattern::from_value(value, self.length)
    }
}

/// Position of the [`PresenceMappings`](crate::sweep::PresenceMappings) generator.
///
/// Each digit is the binary value of one edge pattern, the first edge being the most
/// significant digit.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingCursor {
    digits: Vec<usize>,
    exhausted: bool,
}

impl From<&MappingSpace> for MappingCursor {
    fn from(space: &MappingSpace) -> Self {
        MappingCursor {
            digits: vec![1; space.edges],
            exhausted: false,
        }
    }
}

impl MappingCursor {
    /// Advance to the next mapping; marks the cursor as exhausted after the last one.
    fn advance(&mut self, space: &MappingSpace) {
        let max = (1usize << space.length) - 1;
        for digit in self.digits.iter_mut().rev() {
            if *digit < max {
                *digit += 1;
                return;
            }
            *digit = 1;
        }
        self.exhausted = true;
    }
}

/// Emits one presence mapping per step.
pub struct MappingStep;

impl GeneratorStep<MappingSpace, MappingCursor, Vec<PresencePattern>> for MappingStep {
    fn step(
        context: &MappingSpace,
        state: &mut MappingCursor,
    ) -> Completable<Option<Vec<PresencePattern>>> {
        if state.exhausted {
            return Ok(None);
        }
        let mapping: Vec<PresencePattern> =
            state.digits.iter().map(|d| context.pattern(*d)).collect();
        trace!("Generated presence mapping {:?}.", state.digits);
        state.advance(context);
        Ok(Some(mapping))
    }
}
