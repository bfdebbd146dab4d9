//! Chain validation logic.

use fa_core::FaResult;

use crate::error::GraphError;
use crate::graph::{Edge, Node, Subcomponent};

/// Validate the chain structure: IDs match slots and all references exist.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[Edge]) -> FaResult<()> {
    // Check that IDs are contiguous and match their indices
    for (i, node) in nodes.iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::NonContiguous {
                what: "Node",
                index: i,
            }
            .into());
        }
    }
    for (i, edge) in edges.iter().enumerate() {
        if edge.id.slot() != i {
            return Err(GraphError::NonContiguous {
                what: "Edge",
                index: i,
            }
            .into());
        }
    }

    // Check that each edge references valid, distinct nodes
    for edge in edges {
        for &node in &edge.ends {
            if node.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                }
                .into());
            }
        }
        if edge.end_a() == edge.end_b() {
            return Err(GraphError::SelfLoop { edge: edge.id }.into());
        }
    }

    Ok(())
}

/// Validate chain shape: `nodes = edges + 1`, edge `i` joins node `i` to `i + 1`.
pub(crate) fn validate_chain(nodes: &[Node], edges: &[Edge]) -> FaResult<()> {
    if nodes.is_empty() {
        return Err(GraphError::Empty.into());
    }

    if nodes.len() != edges.len() + 1 {
        return Err(GraphError::CountMismatch {
            nodes: nodes.len(),
            edges: edges.len(),
        }
        .into());
    }

    for (i, edge) in edges.iter().enumerate() {
        let expected = [nodes[i].id, nodes[i + 1].id];
        if edge.ends != expected {
            return Err(GraphError::OutOfOrder {
                edge: edge.id,
                expected,
                actual: edge.ends,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate the interleaved sequence against its position lists.
pub(crate) fn validate_sequence(
    sequence: &[Subcomponent],
    i_con: &[usize],
    i_sec: &[usize],
) -> FaResult<()> {
    // Even positions hold nodes, odd positions hold edges
    for (pos, sub) in sequence.iter().enumerate() {
        if sub.is_node() != (pos % 2 == 0) {
            return Err(GraphError::BrokenAlternation { pos }.into());
        }
    }

    // Must start and end with a node
    if sequence.last().is_some_and(|s| !s.is_node()) {
        return Err(GraphError::BrokenAlternation {
            pos: sequence.len() - 1,
        }
        .into());
    }

    // Position lists partition the sequence exactly
    if i_con.len() + i_sec.len() != sequence.len() {
        return Err(GraphError::BrokenAlternation { pos: sequence.len() }.into());
    }
    for &pos in i_con {
        if !sequence.get(pos).is_some_and(|s| s.is_node()) {
            return Err(GraphError::BrokenAlternation { pos }.into());
        }
    }
    for &pos in i_sec {
        if !sequence.get(pos).is_some_and(|s| s.is_edge()) {
            return Err(GraphError::BrokenAlternation { pos }.into());
        }
    }

    Ok(())
}
