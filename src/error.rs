//! Error type shared by all graph operations.

use thiserror::Error;

use crate::graph::{Edge, Node};

/// A violated precondition of a graph operation.
///
/// Every variant describes caller misuse; the graph itself is left untouched
/// when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `node(i)` was called with `i >= num_nodes()`.
    #[error("node index {index} out of range for a graph with {len} nodes")]
    NodeIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Node count at the time of the call.
        len: usize,
    },

    /// `edge(i)` was called with `i >= num_edges()`.
    #[error("edge index {index} out of range for a graph with {len} edges")]
    EdgeIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Edge count at the time of the call.
        len: usize,
    },

    /// The node handle was issued by another graph, before a `clear()`, or is invalid.
    #[error("{node} does not belong to this graph")]
    ForeignNode {
        /// The offending handle.
        node: Node,
    },

    /// The edge handle does not name an edge of this graph.
    #[error("{edge} does not belong to this graph")]
    ForeignEdge {
        /// The offending handle.
        edge: Edge,
    },

    /// `add_edge` was asked to connect a node to itself.
    #[error("self-loop on node {index} is not permitted")]
    SelfLoop {
        /// Index of the node.
        index: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
