//! Positional indexing for chain subcomponents.
//!
//! Provides bidirectional mappings between domain IDs (NodeId, EdgeId)
//! and positions in the alternating subcomponent sequence.

use fa_core::{EdgeId, FaResult, NodeId};

use crate::error::GraphError;
use crate::graph::{Chain, Subcomponent};

/// Index map providing O(1) lookup between IDs and sequence positions.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    /// Sequence position -> subcomponent.
    sequence: Vec<Subcomponent>,

    /// Reverse lookup: NodeId slot -> sequence position.
    node_to_pos: Vec<Option<usize>>,

    /// Reverse lookup: EdgeId slot -> sequence position.
    edge_to_pos: Vec<Option<usize>>,
}

impl PositionIndex {
    /// Build a position index from a chain.
    pub fn from_chain(chain: &Chain) -> Self {
        let sequence = chain.sequence().to_vec();

        let mut node_to_pos = vec![None; chain.nodes().len()];
        let mut edge_to_pos = vec![None; chain.edges().len()];

        for (pos, sub) in sequence.iter().enumerate() {
            match *sub {
                Subcomponent::Node(id) => {
                    if let Some(slot) = node_to_pos.get_mut(id.slot()) {
                        *slot = Some(pos);
                    }
                }
                Subcomponent::Edge(id) => {
                    if let Some(slot) = edge_to_pos.get_mut(id.slot()) {
                        *slot = Some(pos);
                    }
                }
            }
        }

        Self {
            sequence,
            node_to_pos,
            edge_to_pos,
        }
    }

    /// Sequence position of a node.
    pub fn node_pos(&self, id: NodeId) -> FaResult<usize> {
        self.node_to_pos
            .get(id.slot())
            .and_then(|&opt| opt)
            .ok_or_else(|| GraphError::IdNotFound { what: "NodeId" }.into())
    }

    /// Sequence position of an edge.
    pub fn edge_pos(&self, id: EdgeId) -> FaResult<usize> {
        self.edge_to_pos
            .get(id.slot())
            .and_then(|&opt| opt)
            .ok_or_else(|| GraphError::IdNotFound { what: "EdgeId" }.into())
    }

    /// Subcomponent at a sequence position.
    pub fn at(&self, pos: usize) -> Option<Subcomponent> {
        self.sequence.get(pos).copied()
    }
}
