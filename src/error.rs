use thiserror::Error;

/// Everything that can go wrong while scoring a pair of floor plans.
#[derive(Debug, Error)]
pub enum Error {
    #[error("label images differ in shape: {query:?} vs {key:?}")]
    ShapeMismatch {
        query: (usize, usize),
        key: (usize, usize),
    },

    /// Neither image has a pixel selected by the union predicate.
    #[error("the union of the compared masks is empty")]
    EmptyUnion,

    #[error("none of the requested classes occur in the ground truth")]
    NoClassesPresent,

    /// Normalization and sGED divide by node counts.
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("gamma must be a positive finite number, got {0}")]
    InvalidGamma(f32),

    #[error("smoothing term must be a non-negative finite number, got {0}")]
    InvalidSmoothing(f32),

    #[error("expansion budget must allow at least one expansion")]
    InvalidBudget,

    #[error("node {0} already exists")]
    DuplicateNode(String),

    #[error("node {0} does not exist")]
    UnknownNode(String),

    #[error("edge {0} -- {1} already exists")]
    DuplicateEdge(String, String),

    #[error("self loop on node {0}")]
    SelfLoop(String),

    #[error("node assignment failed: {0:?}")]
    Assignment(munkres::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
