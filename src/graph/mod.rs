//! Graph containers and the handles they issue.
//!
//! - `identity`: per-instance identity tokens compared by handles
//! - `handle`: `Node` and `Edge` value handles
//! - `undirected`: the adjacency-list `Graph` and its iterators

pub mod handle;
pub mod identity;
pub mod undirected;

pub use handle::{Edge, Node};
pub use identity::GraphId;
pub use undirected::{EdgeIter, Graph, GraphStatistics, IncidentIter, Neighbors, NodeIter};
