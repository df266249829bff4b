//! A growable undirected graph with positioned, valued nodes.
//!
//! Storage is a pair of parallel vectors indexed by dense node index:
//! node records (position + user value) and adjacency lists. Adding the edge
//! `{a, b}` appends `b` to `adjacency[a]` and `a` to `adjacency[b]`, so every
//! undirected edge is stored twice and incident queries never need a search
//! over the whole edge set.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | Appends to both vectors |
//! | `node` / `has_node` | \(O(1)\) | Index check |
//! | `degree` | \(O(1)\) | `Vec::len` of the adjacency list |
//! | `has_edge` | \(O(\deg(a))\) | Linear scan of `a`'s list |
//! | `add_edge` | \(O(\deg(a))\) | Checks for existence first |
//! | `num_edges` | \(O(1)\) | Counter kept equal to half the adjacency total |
//! | `edge(i)` | \(O(n + m)\) | Walks the global edge order |
//!
//! Nodes and edges are never removed individually; `clear()` drops everything
//! and retires the graph's identity, invalidating all outstanding handles.

#[cfg(test)]
mod invariants;
mod iter;


pub use iter::{EdgeIter, IncidentIter, Neighbors, NodeIter};

use core::fmt;

use super::handle::{Edge, Node};
use super::identity::GraphId;
use crate::error::{GraphError, Result};
use crate::point::Point;

/// Per-node storage.
#[derive(Clone)]
struct NodeRecord<V> {
    position: Point,
    value: V,
}

/// An undirected graph without self-loops or parallel edges.
///
/// `V` is the value carried by every node. Handles ([`Node`], [`Edge`]) are
/// small `Copy` values naming this graph's identity plus storage indices; all
/// data access goes through the graph.
pub struct Graph<V = ()> {
    id: GraphId,
    nodes: Vec<NodeRecord<V>>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<V> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `node_capacity` nodes.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: Vec::with_capacity(node_capacity),
            adjacency: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.adjacency.reserve(additional);
    }

    /// Identity of this graph instance.
    ///
    /// Changes on [`clear`](Self::clear); handles carry the identity they were issued under.
    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Number of nodes. Synonym for [`num_nodes`](Self::num_nodes).
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node at `position` carrying `V::default()`.
    ///
    /// The returned handle's index equals the previous `num_nodes()`.
    pub fn add_node(&mut self, position: Point) -> Node
    where
        V: Default,
    {
        self.add_node_with_value(position, V::default())
    }

    /// Adds a node at `position` carrying `value`.
    pub fn add_node_with_value(&mut self, position: Point, value: V) -> Node {
        let index = self.nodes.len();
        self.nodes.push(NodeRecord { position, value });
        self.adjacency.push(Vec::new());
        graph_trace!(graph = %self.id, index, "added node");
        Node::new(self.id, index)
    }

    /// Returns the node with index `index`.
    ///
    /// # Errors
    /// [`GraphError::NodeIndexOutOfRange`] if `index >= num_nodes()`.
    #[inline]
    pub fn node(&self, index: usize) -> Result<Node> {
        if index < self.nodes.len() {
            Ok(Node::new(self.id, index))
        } else {
            Err(GraphError::NodeIndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// Returns `true` if `node` was issued by this graph (since its last `clear`).
    #[inline]
    pub fn has_node(&self, node: Node) -> bool {
        node.graph() == self.id && node.index() < self.nodes.len()
    }

    /// Resolves a handle to its storage index, rejecting foreign handles.
    #[inline]
    fn slot(&self, node: Node) -> Result<usize> {
        if self.has_node(node) {
            Ok(node.index())
        } else {
            Err(GraphError::ForeignNode { node })
        }
    }

    /// Position of `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    #[inline]
    pub fn position(&self, node: Node) -> Result<&Point> {
        let i = self.slot(node)?;
        Ok(&self.nodes[i].position)
    }

    /// Value carried by `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    #[inline]
    pub fn value(&self, node: Node) -> Result<&V> {
        let i = self.slot(node)?;
        Ok(&self.nodes[i].value)
    }

    /// Mutable reference to the value carried by `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> Result<&mut V> {
        let i = self.slot(node)?;
        Ok(&mut self.nodes[i].value)
    }

    /// Number of edges incident to `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    #[inline]
    pub fn degree(&self, node: Node) -> Result<usize> {
        let i = self.slot(node)?;
        Ok(self.adjacency[i].len())
    }

    /// Nodes adjacent to `node`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    pub fn neighbors(&self, node: Node) -> Result<Neighbors<'_>> {
        let i = self.slot(node)?;
        Ok(Neighbors::new(self.id, &self.adjacency[i]))
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if `a` and `b` are both members and are connected.
    ///
    /// Handles from another graph simply yield `false`.
    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        if !self.has_node(a) || !self.has_node(b) {
            return false;
        }
        self.adjacency[a.index()].contains(&b.index())
    }

    /// Returns `true` if `edge` names an edge of this graph.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.has_edge(edge.node1(), edge.node2())
    }

    /// Connects `a` and `b`, or returns the existing edge between them.
    ///
    /// The returned edge keeps the requested orientation: `node1() == a`,
    /// `node2() == b`. The edge count grows by one only when the pair was not
    /// already connected.
    ///
    /// # Errors
    /// - [`GraphError::ForeignNode`] if either endpoint is not a member of this graph.
    /// - [`GraphError::SelfLoop`] if `a == b`.
    pub fn add_edge(&mut self, a: Node, b: Node) -> Result<Edge> {
        let ia = self.slot(a)?;
        let ib = self.slot(b)?;
        if ia == ib {
            return Err(GraphError::SelfLoop { index: ia });
        }

        if self.adjacency[ia].contains(&ib) {
            graph_trace!(graph = %self.id, a = ia, b = ib, "edge already present");
            return Ok(Edge::new(self.id, ia, ib));
        }

        self.adjacency[ia].push(ib);
        self.adjacency[ib].push(ia);
        self.edge_count += 1;
        debug_assert_eq!(
            self.adjacency[ib].iter().filter(|&&n| n == ia).count(),
            1,
            "adjacency of {ib} lost symmetry with {ia}"
        );
        graph_trace!(graph = %self.id, a = ia, b = ib, edges = self.edge_count, "added edge");
        Ok(Edge::new(self.id, ia, ib))
    }

    /// Returns the `index`-th edge in global iteration order (see [`EdgeIter`]).
    ///
    /// Walks the edge order, so this is \(O(n + m)\) rather than \(O(1)\).
    ///
    /// # Errors
    /// [`GraphError::EdgeIndexOutOfRange`] if `index >= num_edges()`.
    pub fn edge(&self, index: usize) -> Result<Edge> {
        self.edges()
            .nth(index)
            .ok_or(GraphError::EdgeIndexOutOfRange {
                index,
                len: self.edge_count,
            })
    }

    /// Euclidean distance between the endpoints of `edge`.
    ///
    /// # Errors
    /// [`GraphError::ForeignEdge`] if `edge` is not an edge of this graph.
    pub fn edge_length(&self, edge: Edge) -> Result<f64> {
        if !self.contains_edge(edge) {
            return Err(GraphError::ForeignEdge { edge });
        }
        let a = &self.nodes[edge.node1().index()].position;
        let b = &self.nodes[edge.node2().index()].position;
        Ok(a.distance(*b))
    }

    /// Removes every node and edge.
    ///
    /// The graph takes a fresh identity, so every handle issued before this call
    /// stops being a member, even once indices are reused by new nodes.
    pub fn clear(&mut self) {
        graph_debug!(
            graph = %self.id,
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "clearing graph"
        );
        self.nodes.clear();
        self.adjacency.clear();
        self.edge_count = 0;
        self.id = GraphId::fresh();
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// All nodes in index order.
    #[inline]
    pub fn nodes(&self) -> NodeIter<'_, V> {
        self.node_begin()
    }

    /// Cursor at the first node.
    #[inline]
    pub fn node_begin(&self) -> NodeIter<'_, V> {
        NodeIter::new(self, 0)
    }

    /// Cursor one past the last node.
    #[inline]
    pub fn node_end(&self) -> NodeIter<'_, V> {
        NodeIter::new(self, self.nodes.len())
    }

    /// Every undirected edge exactly once.
    #[inline]
    pub fn edges(&self) -> EdgeIter<'_, V> {
        self.edge_begin()
    }

    /// Cursor at the first edge.
    #[inline]
    pub fn edge_begin(&self) -> EdgeIter<'_, V> {
        EdgeIter::new(self, 0, 0)
    }

    /// Cursor one past the last edge.
    #[inline]
    pub fn edge_end(&self) -> EdgeIter<'_, V> {
        EdgeIter::new(self, self.nodes.len(), 0)
    }

    /// Edges incident to `node`, each oriented with `node1() == node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    #[inline]
    pub fn incident_edges(&self, node: Node) -> Result<IncidentIter<'_, V>> {
        self.incident_begin(node)
    }

    /// Cursor at the first edge incident to `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    pub fn incident_begin(&self, node: Node) -> Result<IncidentIter<'_, V>> {
        let i = self.slot(node)?;
        Ok(IncidentIter::new(self, i, 0))
    }

    /// Cursor one past the last edge incident to `node`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`] if `node` is not a member of this graph.
    pub fn incident_end(&self, node: Node) -> Result<IncidentIter<'_, V>> {
        let i = self.slot(node)?;
        Ok(IncidentIter::new(self, i, self.adjacency[i].len()))
    }

    // =========================================================================
    // Summary
    // =========================================================================

    /// Computes degree statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.nodes.len();
        let edge_count = self.edge_count;

        let degrees = self.adjacency.iter().map(Vec::len);
        let min_degree = degrees.clone().min().unwrap_or(0);
        let max_degree = degrees.clone().max().unwrap_or(0);
        let isolated_nodes = degrees.filter(|&d| d == 0).count();

        #[allow(clippy::cast_precision_loss)]
        let average_degree = if node_count == 0 {
            0.0
        } else {
            (2 * edge_count) as f64 / node_count as f64
        };

        GraphStatistics {
            node_count,
            edge_count,
            min_degree,
            max_degree,
            isolated_nodes,
            average_degree,
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Graph<V> {
    /// Copies the storage under a fresh identity; the source's handles are not
    /// members of the clone.
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: self.nodes.clone(),
            adjacency: self.adjacency.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<V> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("num_nodes", &self.nodes.len())
            .field("num_edges", &self.edge_count)
            .finish_non_exhaustive()
    }
}

impl<'g, V> IntoIterator for &'g Graph<V> {
    type Item = Node;
    type IntoIter = NodeIter<'g, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// Degree statistics of a [`Graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all nodes (0 for an empty graph).
    pub min_degree: usize,
    /// Maximum degree over all nodes (0 for an empty graph).
    pub max_degree: usize,
    /// Nodes with no incident edge.
    pub isolated_nodes: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}
