//! Chain-specific error types.

use fa_core::{EdgeId, FaError, NodeId};

/// Chain construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    /// An edge starts and ends at the same node.
    SelfLoop { edge: EdgeId },

    /// IDs are not contiguous with their storage slots.
    NonContiguous { what: &'static str, index: usize },

    /// A chain needs at least one node.
    Empty,

    /// Node count must be edge count + 1.
    CountMismatch { nodes: usize, edges: usize },

    /// Edge does not join consecutive nodes in order.
    OutOfOrder {
        edge: EdgeId,
        expected: [NodeId; 2],
        actual: [NodeId; 2],
    },

    /// The subcomponent sequence does not alternate node/edge at a position.
    BrokenAlternation { pos: usize },

    /// ID not found in index map.
    IdNotFound { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { edge, node } => {
                write!(f, "Edge {} refers to non-existent node {}", edge, node)
            }
            GraphError::SelfLoop { edge } => {
                write!(f, "Edge {} starts and ends at the same node", edge)
            }
            GraphError::NonContiguous { what, index } => {
                write!(f, "{} at slot {} has a mismatched ID", what, index)
            }
            GraphError::Empty => write!(f, "Chain has no nodes"),
            GraphError::CountMismatch { nodes, edges } => {
                write!(
                    f,
                    "Chain has {} nodes and {} edges (expected nodes = edges + 1)",
                    nodes, edges
                )
            }
            GraphError::OutOfOrder {
                edge,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Edge {} joins {}->{} but should join {}->{}",
                    edge, actual[0], actual[1], expected[0], expected[1]
                )
            }
            GraphError::BrokenAlternation { pos } => {
                write!(f, "Subcomponent sequence breaks alternation at {}", pos)
            }
            GraphError::IdNotFound { what } => {
                write!(f, "{} not found in index map", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for FaError {
    fn from(err: GraphError) -> Self {
        FaError::Invariant {
            what: err.to_string(),
        }
    }
}
