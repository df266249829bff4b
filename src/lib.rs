//! # `pointgraph` - Growable Undirected Graphs with Stable Handles
//!
//! An in-memory undirected graph whose nodes carry a 3-D [`Point`] and a user
//! value. The graph is an arena: it owns all storage and hands out small `Copy`
//! handles ([`Node`], [`Edge`]) made of the graph's identity plus indices.
//!
//! ## Guarantees
//!
//! - **Stable indices**: node indices are dense (`0..num_nodes()`) and never
//!   reassigned; nothing is removed individually, so handles stay valid as the
//!   graph grows.
//! - **Identity-aware handles**: handles compare graph identity before indices,
//!   so nodes of different graphs never compare equal and still have a total
//!   order usable as `BTreeMap` keys. Default handles are invalid and belong to
//!   no graph.
//! - **Simple graph**: no self-loops, no parallel edges. `add_edge` is
//!   idempotent for an already-connected pair.
//! - **Cheap adjacency**: each node keeps its own neighbor list, so degree is
//!   \(O(1)\) and incident edges are visited without touching the rest of the graph.
//!
//! ## Error policy
//!
//! Operations that take a caller-supplied index or handle return
//! [`Result`]; misuse surfaces as a [`GraphError`] and never as silently
//! wrong data. Membership tests (`has_node`, `has_edge`) return `bool`.
//!
//! ## Logging
//!
//! Enable the `tracing` feature to receive `trace`/`debug` events for every
//! mutation through the [`tracing`](https://docs.rs/tracing) ecosystem.
//!
//! ## Example
//!
//! ```rust
//! use pointgraph::{Graph, Point};
//!
//! let mut graph: Graph<u32> = Graph::new();
//! let a = graph.add_node(Point::new(0.0, 0.0, 0.0));
//! let b = graph.add_node(Point::new(3.0, 4.0, 0.0));
//! let c = graph.add_node(Point::new(0.0, 1.0, 0.0));
//!
//! let ab = graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//! graph.add_edge(b, a)?; // already present
//!
//! assert_eq!(graph.num_edges(), 2);
//! assert_eq!(ab.length(&graph)?, 5.0);
//! assert_eq!(b.degree(&graph)?, 2);
//!
//! *a.value_mut(&mut graph)? += 7;
//! assert_eq!(*graph.value(a)?, 7);
//!
//! let pairs: Vec<_> = graph.edges().map(|e| (e.node1().index(), e.node2().index())).collect();
//! assert_eq!(pairs, vec![(0, 1), (1, 2)]);
//! # Ok::<(), pointgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
pub mod point;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeIter, Graph, GraphId, GraphStatistics, IncidentIter, Neighbors, Node, NodeIter};
pub use point::Point;

// Handles are meant to be passed by value; keep them register-sized.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<GraphId>() == mem::size_of::<u64>());
    assert!(mem::size_of::<Node>() <= mem::size_of::<u64>() + mem::size_of::<usize>());
    assert!(mem::size_of::<Edge>() <= mem::size_of::<u64>() + 2 * mem::size_of::<usize>());
};
