use cancel_this::Cancelled;
use thiserror::Error;

/// The input graph or game configuration is malformed.
///
/// These errors are always raised before any game graph expansion takes place.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("the vertex set is empty")]
    NoVertices,
    #[error("vertex `{0}` is listed more than once")]
    DuplicateVertex(String),
    #[error("edge ({0}, {1}) references a vertex outside of the vertex set")]
    UnknownEndpoint(String, String),
    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoop(String),
    #[error("edge ({0}, {1}) is listed more than once")]
    DuplicateEdge(String, String),
    #[error("edge ({0}, {1}) has no presence pattern")]
    MissingPattern(String, String),
    #[error("presence pattern given for ({0}, {1}), which is not an edge")]
    UnexpectedPattern(String, String),
    #[error("presence pattern is empty")]
    EmptyPattern,
    #[error("presence pattern `{0}` contains characters other than `0` and `1`")]
    MalformedPattern(String),
    #[error("at least one cop is required")]
    NoCops,
    #[error("the time horizon overflows `usize`")]
    TimeHorizonOverflow,
    #[error("time horizon {horizon} is not a positive multiple of the graph period {period}")]
    HorizonNotMultiple { horizon: usize, period: usize },
    #[error("the game graph with {cops} cop(s) on {vertices} vertices does not fit into memory")]
    StateSpaceOverflow { vertices: usize, cops: usize },
    #[error("pattern length {0} is outside of the supported range 1..=16")]
    PatternLength(usize),
}

/// The arguments of the attractor computation violate its preconditions.
///
/// This typically indicates a bug in the code that constructed the reachability game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("vertex `{0}` belongs to both players")]
    OverlappingPlayers(String),
    #[error("arc ({0}, {1}) references a vertex outside of S0 ∪ S1")]
    UnknownArcEndpoint(String, String),
    #[error("final vertex `{0}` is outside of S0 ∪ S1")]
    UnknownFinal(String),
}

/// Umbrella error of the public entry points.
#[derive(Debug, Error)]
pub enum CopWinError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
    #[error("computation cancelled: {0}")]
    Cancelled(Cancelled),
    #[error("cannot start the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Cancelled> for CopWinError {
    fn from(value: Cancelled) -> Self {
        CopWinError::Cancelled(value)
    }
}
