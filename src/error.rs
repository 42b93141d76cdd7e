use thiserror::Error;

use crate::node::Node;

/// Caller-contract violations detected before a search starts.
///
/// A search that merely fails to reach some vertices (or the requested target) is not an error;
/// the unreached vertices simply keep the distance [`UNREACHED`](crate::node::UNREACHED).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BfsError {
    /// The source id is outside of the id space or refers to a removed vertex
    #[error("source node {0} is not a valid vertex of the graph")]
    InvalidSource(Node),

    /// The source has no edge in the direction(s) the search follows
    #[error("no neighbors from source node {0}")]
    SourceWithoutEdges(Node),

    /// Neither outgoing nor incoming edges were requested to be followed
    #[error("a search has to follow out-edges, in-edges or both")]
    NoDirection,
}
