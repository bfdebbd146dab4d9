//! fa-graph: node/edge chain layer for composite cables and lines.
//!
//! Provides:
//! - Core chain data structures (Node, Edge, Subcomponent, Chain)
//! - Incremental chain builder with validation
//! - Positional indexing (id <-> sequence position)
//!
//! A chain is the flat alternating sequence `[N0, E0, N1, E1, ..., Nn]`
//! where edge `i` joins node `i` to node `i + 1`.
//!
//! # Example
//!
//! ```
//! use fa_graph::ChainBuilder;
//!
//! let mut builder = ChainBuilder::new();
//! let n0 = builder.add_node("Anchor");
//! let n1 = builder.add_node("Fairlead");
//! builder.add_edge("Section", n0, n1);
//! let chain = builder.build().unwrap();
//!
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.i_con(), &[0, 2]);
//! assert_eq!(chain.i_sec(), &[1]);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::ChainBuilder;
pub use error::GraphError;
pub use graph::{Chain, Edge, Node, Subcomponent};
pub use indexing::PositionIndex;
