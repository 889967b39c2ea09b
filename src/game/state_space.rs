use crate::error::InputError;

/// Whose move it is in a game vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Cops are about to move (`s = false`).
    Cops,
    /// The robber is about to move (`s = true`).
    Robber,
}

impl Turn {
    pub fn next(self) -> Turn {
        match self {
            Turn::Cops => Turn::Robber,
            Turn::Robber => Turn::Cops,
        }
    }

    fn index(self) -> usize {
        match self {
            Turn::Cops => 0,
            Turn::Robber => 1,
        }
    }
}

/// A dense numbering of all game vertices.
///
/// A game vertex consists of `k + 1` *positions* (cops first, robber last), a [`Turn`]
/// and a time step. Positions are encoded as a mixed-radix number with base `|V|` (first cop
/// is the most significant digit, the robber the least significant one). Every
/// `(time, turn)` pair forms one *layer* of `|V|^(k+1)` vertices and
/// `id = (time * 2 + turn) * |V|^(k+1) + positions`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSpace {
    vertices: usize,
    cops: usize,
    horizon: usize,
    layer_size: usize,
}

impl StateSpace {
    /// Create a new state space, failing if the number of game vertices overflows `usize`.
    pub fn new(vertices: usize, cops: usize, horizon: usize) -> Result<StateSpace, InputError> {
        let overflow = || InputError::StateSpaceOverflow { vertices, cops };
        let exponent = u32::try_from(cops + 1).map_err(|_| overflow())?;
        let layer_size = vertices.checked_pow(exponent).ok_or_else(overflow)?;
        layer_size
            .checked_mul(2)
            .and_then(|it| it.checked_mul(horizon))
            .ok_or_else(overflow)?;
        Ok(StateSpace {
            vertices,
            cops,
            horizon,
            layer_size,
        })
    }

    /// Number of vertices of the underlying input graph.
    pub fn graph_vertices(&self) -> usize {
        self.vertices
    }

    pub fn cops(&self) -> usize {
        self.cops
    }

    pub fn time_horizon(&self) -> usize {
        self.horizon
    }

    /// Number of position tuples, i.e. vertices per `(time, turn)` layer.
    pub fn layer_size(&self) -> usize {
        self.layer_size
    }

    pub fn layer_count(&self) -> usize {
        2 * self.horizon
    }

    /// Total number of game vertices.
    pub fn vertex_count(&self) -> usize {
        self.layer_size * self.layer_count()
    }

    /// Number of cop placements, i.e. `|V|^k`.
    pub fn placement_count(&self) -> usize {
        self.layer_size / self.vertices
    }

    /// Index of the `(turn, time)` layer.
    pub fn layer(&self, turn: Turn, time: usize) -> usize {
        debug_assert!(time < self.horizon);
        time * 2 + turn.index()
    }

    /// Inverse of [`StateSpace::layer`].
    pub fn layer_parts(&self, layer: usize) -> (Turn, usize) {
        let turn = if layer % 2 == 0 {
            Turn::Cops
        } else {
            Turn::Robber
        };
        (turn, layer / 2)
    }

    /// Game vertex id of the given position code in the given layer.
    pub fn id(&self, turn: Turn, time: usize, positions: usize) -> usize {
        debug_assert!(positions < self.layer_size);
        self.layer(turn, time) * self.layer_size + positions
    }

    /// Split a game vertex id into `(turn, time, position code)`.
    pub fn split(&self, id: usize) -> (Turn, usize, usize) {
        debug_assert!(id < self.vertex_count());
        let (turn, time) = self.layer_parts(id / self.layer_size);
        (turn, time, id % self.layer_size)
    }

    /// Encode a slice of `k + 1` positions (cops, then robber) into a position code.
    pub fn encode_positions(&self, positions: &[usize]) -> usize {
        debug_assert_eq!(positions.len(), self.cops + 1);
        positions.iter().fold(0, |code, p| {
            debug_assert!(*p < self.vertices);
            code * self.vertices + p
        })
    }

    /// Decode a position code into `positions` (which must have length `k + 1`).
    pub fn decode_positions(&self, mut code: usize, positions: &mut [usize]) {
        debug_assert_eq!(positions.len(), self.cops + 1);
        for slot in positions.iter_mut().rev() {
            *slot = code % self.vertices;
            code /= self.vertices;
        }
    }

    /// True if the robber shares a vertex with one of the cops.
    pub fn is_capture(&self, positions: usize) -> bool {
        let robber = positions % self.vertices;
        let mut cops = positions / self.vertices;
        for _ in 0..self.cops {
            if cops % self.vertices == robber {
                return true;
            }
            cops /= self.vertices;
        }
        false
    }
}
