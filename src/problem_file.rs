//! Loader of cops and robber problems stored as JSON.
//!
//! A problem file lists the vertices `V`, the edges `E` (pairs of vertices) and an
//! optional list `tau` of presence patterns aligned with `E`:
//!
//! ```json
//! {"V": [1, 2, 3], "E": [[1, 2], [2, 3]], "tau": ["1", "01"]}
//! ```
//!
//! Vertices can be integers or strings. Without `tau`, the graph is static.

use crate::error::InputError;
use crate::graph::EdgePeriodicGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// A vertex label of a problem file.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabel {
    Int(i64),
    Name(String),
}

impl Display for VertexLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexLabel::Int(value) => write!(f, "{value}"),
            VertexLabel::Name(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProblemFileError {
    #[error("the graph file cannot be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("the JSON is not well formatted: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected number of elements in 'tau' ({patterns} patterns for {edges} edges)")]
    TauLength { edges: usize, patterns: usize },
    #[error("unexpected value `{0}` in 'tau' (expected a binary string with at least one `1`)")]
    InvalidPattern(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// The raw content of a problem file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProblemFile {
    #[serde(rename = "V")]
    pub vertices: Vec<VertexLabel>,
    #[serde(rename = "E")]
    pub edges: Vec<(VertexLabel, VertexLabel)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tau: Option<Vec<String>>,
}

impl FromStr for ProblemFile {
    type Err = ProblemFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl ProblemFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ProblemFile, ProblemFileError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// The presence mapping keyed by edges, or `None` for a static graph.
    pub fn presence(
        &self,
    ) -> Result<Option<HashMap<(VertexLabel, VertexLabel), String>>, ProblemFileError> {
        let Some(tau) = &self.tau else {
            return Ok(None);
        };
        if tau.len() != self.edges.len() {
            return Err(ProblemFileError::TauLength {
                edges: self.edges.len(),
                patterns: tau.len(),
            });
        }
        if let Some(invalid) = tau.iter().find(|it| !is_nonzero_binary(it)) {
            return Err(ProblemFileError::InvalidPattern(invalid.clone()));
        }
        Ok(Some(self.edges.iter().cloned().zip(tau.iter().cloned()).collect()))
    }

    /// Validate the problem and build its [`EdgePeriodicGraph`].
    pub fn graph(&self) -> Result<EdgePeriodicGraph<VertexLabel>, ProblemFileError> {
        let presence = self.presence()?;
        Ok(EdgePeriodicGraph::from_parts(
            self.vertices.clone(),
            &self.edges,
            presence.as_ref(),
        )?)
    }
}

/// Matches `^(0*10*)+$`.
fn is_nonzero_binary(pattern: &str) -> bool {
    pattern.chars().all(|c| c == '0' || c == '1') && pattern.contains('1')
}
