//! Incremental chain builder.

use fa_core::{EdgeId, FaResult, NodeId};

use crate::graph::{Chain, Edge, Node, Subcomponent};
use crate::validate;

/// Builder for constructing a chain incrementally.
///
/// Use `add_node` and `add_edge` to build up the chain,
/// then call `build()` to validate and freeze it into an immutable `Chain`.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u32,
    next_edge_id: u32,
}

impl ChainBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the chain and return its ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            name: name.into(),
        });
        id
    }

    /// Add an edge joining `end_a` to `end_b`.
    ///
    /// Ordering is only checked by `build()`: edge `i` must join node `i`
    /// to node `i + 1`.
    pub fn add_edge(&mut self, name: impl Into<String>, end_a: NodeId, end_b: NodeId) -> EdgeId {
        let id = EdgeId::from_index(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            name: name.into(),
            ends: [end_a, end_b],
        });
        id
    }

    /// Build and validate the chain, returning an immutable `Chain`.
    ///
    /// This performs validation and constructs the alternating sequence.
    pub fn build(self) -> FaResult<Chain> {
        // First validate references, then ordering
        validate::validate_structure(&self.nodes, &self.edges)?;
        validate::validate_chain(&self.nodes, &self.edges)?;

        let (sequence, i_con, i_sec) = Self::interleave(&self.nodes, &self.edges);

        validate::validate_sequence(&sequence, &i_con, &i_sec)?;

        Ok(Chain {
            nodes: self.nodes,
            edges: self.edges,
            sequence,
            i_con,
            i_sec,
        })
    }

    /// Interleave nodes and edges into `[N0, E0, N1, ..., Nn]`.
    fn interleave(
        nodes: &[Node],
        edges: &[Edge],
    ) -> (Vec<Subcomponent>, Vec<usize>, Vec<usize>) {
        let len = 2 * edges.len() + 1;
        let mut sequence = Vec::with_capacity(len);

        for (node, edge) in nodes.iter().zip(edges) {
            sequence.push(Subcomponent::Node(node.id));
            sequence.push(Subcomponent::Edge(edge.id));
        }
        if let Some(last) = nodes.last() {
            sequence.push(Subcomponent::Node(last.id));
        }

        let i_con = (0..len).step_by(2).collect();
        let i_sec = (1..len).step_by(2).collect();

        (sequence, i_con, i_sec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = ChainBuilder::new();
        let n1 = builder.add_node("Node1");
        let n2 = builder.add_node("Node2");
        let e1 = builder.add_edge("Edge1", n1, n2);

        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(e1.index(), 0);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = ChainBuilder::new();
        let n1 = builder.add_node("N1");
        let n2 = builder.add_node("N2");
        let e1 = builder.add_edge("E1", n1, n2);

        let chain = builder.build().unwrap();
        assert_eq!(chain.nodes().len(), 2);
        assert_eq!(chain.edges().len(), 1);
        assert_eq!(
            chain.sequence(),
            &[
                Subcomponent::Node(n1),
                Subcomponent::Edge(e1),
                Subcomponent::Node(n2)
            ]
        );
    }

    #[test]
    fn single_node_chain() {
        let mut builder = ChainBuilder::new();
        builder.add_node("Only");
        let chain = builder.build().unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.i_con(), &[0]);
        assert!(chain.i_sec().is_empty());
    }
}
