use crate::error::InputError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A periodic presence pattern of a single edge.
///
/// Bit `i` of the pattern states whether the edge can be traversed at time `i mod len`.
/// Patterns are written as non-empty strings over `{0, 1}`, e.g. `"0001"` describes an edge
/// that is only present at every fourth time step.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct PresencePattern {
    bits: Vec<bool>,
}

impl PresencePattern {
    /// The pattern `"1"`, i.e. an edge of a static graph.
    pub fn always() -> PresencePattern {
        PresencePattern { bits: vec![true] }
    }

    /// Build a pattern from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Result<PresencePattern, InputError> {
        if bits.is_empty() {
            return Err(InputError::EmptyPattern);
        }
        Ok(PresencePattern { bits })
    }

    /// The `length`-bit binary representation of `value`, most significant bit first.
    pub(crate) fn from_value(value: usize, length: usize) -> PresencePattern {
        debug_assert!(length > 0);
        PresencePattern {
            bits: (0..length).map(|i| (value >> (length - 1 - i)) & 1 == 1).collect(),
        }
    }

    /// Length of the pattern (i.e. the period of the edge).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the edge is present at time `t`.
    pub fn is_present(&self, t: usize) -> bool {
        self.bits[t % self.bits.len()]
    }

    /// True if the edge is present at least once per period.
    pub fn is_ever_present(&self) -> bool {
        self.bits.iter().any(|it| *it)
    }
}

impl FromStr for PresencePattern {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bits = value
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(InputError::MalformedPattern(value.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        PresencePattern::from_bits(bits)
    }
}

impl TryFrom<String> for PresencePattern {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PresencePattern::from_str(&value)
    }
}

impl TryFrom<&str> for PresencePattern {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PresencePattern::from_str(value)
    }
}

impl From<PresencePattern> for String {
    fn from(value: PresencePattern) -> Self {
        value.to_string()
    }
}

impl Display for PresencePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, or `None` on overflow.
pub(crate) fn lcm(a: usize, b: usize) -> Option<usize> {
    (a / gcd(a, b)).checked_mul(b)
}

/// Compute the time horizon of a collection of patterns, i.e. the least common multiple
/// of their lengths. The horizon of an empty collection is `1`.
pub fn time_horizon<'a, I>(patterns: I) -> Result<usize, InputError>
where
    I: IntoIterator<Item = &'a PresencePattern>,
{
    patterns.into_iter().try_fold(1usize, |acc, pattern| {
        lcm(acc, pattern.len()).ok_or(InputError::TimeHorizonOverflow)
    })
}
