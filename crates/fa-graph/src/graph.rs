//! Core chain data structures.

use fa_core::{EdgeId, NodeId};

/// A node in the chain (e.g., a connector between two sections).
///
/// Nodes are minimal: they hold no physical data,
/// just an ID and a name for human reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// An edge joins two consecutive nodes (e.g., a uniform cable section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub name: String,
    /// Exactly 2 ends: [end_a, end_b].
    pub ends: [NodeId; 2],
}

impl Edge {
    /// Node at end A (towards the start of the chain).
    pub fn end_a(&self) -> NodeId {
        self.ends[0]
    }

    /// Node at end B (towards the end of the chain).
    pub fn end_b(&self) -> NodeId {
        self.ends[1]
    }
}

/// One entry of the alternating subcomponent sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcomponent {
    Node(NodeId),
    Edge(EdgeId),
}

impl Subcomponent {
    pub fn is_node(self) -> bool {
        matches!(self, Subcomponent::Node(_))
    }

    pub fn is_edge(self) -> bool {
        matches!(self, Subcomponent::Edge(_))
    }

    pub fn node(self) -> Option<NodeId> {
        match self {
            Subcomponent::Node(id) => Some(id),
            Subcomponent::Edge(_) => None,
        }
    }

    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Subcomponent::Edge(id) => Some(id),
            Subcomponent::Node(_) => None,
        }
    }
}

/// The chain: a validated, immutable node/edge/node/... sequence.
///
/// The chain stores:
/// - All nodes and edges in vectors (indexed by their IDs).
/// - The flat alternating sequence, starting and ending with a node.
/// - Positions of nodes (`i_con`, even) and edges (`i_sec`, odd) in that sequence.
#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) sequence: Vec<Subcomponent>,
    pub(crate) i_con: Vec<usize>,
    pub(crate) i_sec: Vec<usize>,
}

impl Chain {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// The alternating subcomponent sequence.
    pub fn sequence(&self) -> &[Subcomponent] {
        &self.sequence
    }

    /// Sequence length, always `2 * edges + 1`.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// A built chain always holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Subcomponent at a sequence position.
    pub fn at(&self, pos: usize) -> Option<Subcomponent> {
        self.sequence.get(pos).copied()
    }

    /// Sequence positions of the nodes: `[0, 2, 4, ...]`.
    pub fn i_con(&self) -> &[usize] {
        &self.i_con
    }

    /// Sequence positions of the edges: `[1, 3, 5, ...]`.
    pub fn i_sec(&self) -> &[usize] {
        &self.i_sec
    }
}
