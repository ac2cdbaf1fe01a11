use thiserror::Error;

/// Errors reported by the layout library.
///
/// Most layout stages cannot fail on well-formed input. The variants below
/// cover malformed flowchart text, vertex ids that do not belong to the graph
/// they are used with, and cyclic input handed straight to the ranker.
#[derive(Debug, Error)]
pub enum Error {
    /// The flowchart source could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A vertex id was used with a graph that does not contain it.
    #[error("vertex #{0} is not a member of this graph")]
    UnknownVertex(usize),

    /// The ranker ran more waves than the graph has vertices, which only
    /// happens when a cycle survives. Run cycle elimination first.
    #[error("graph still contains a cycle after {waves} ranking waves; remove cycles before ranking")]
    Cyclic { waves: usize },

    /// A direction string other than LR, RL, TD, TB or BT.
    #[error("unknown direction '{0}'; use LR, RL, TD, or BT")]
    InvalidDirection(String),

    /// JSON serialization of a layout failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
