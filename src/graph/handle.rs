//! Lightweight node and edge handles.
//!
//! A handle is a graph identity plus indices into that graph's storage. It owns
//! nothing, is `Copy`, and stays meaningful for as long as the issuing graph has
//! not been cleared (graphs only grow, so indices never move).

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::identity::GraphId;
use super::undirected::{Graph, IncidentIter};
use crate::error::Result;
use crate::point::Point;

/// Handle to a node of a [`Graph`].
///
/// Equality and ordering use `(graph identity, index)`, which yields a total
/// order even across unrelated graphs, so nodes can key ordered containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node {
    graph: GraphId,
    index: usize,
}

impl Node {
    #[inline]
    pub(crate) const fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// Identity of the issuing graph.
    #[inline]
    pub const fn graph(self) -> GraphId {
        self.graph
    }

    /// Dense index of this node, in `[0, num_nodes())` of the issuing graph.
    ///
    /// Meaningless for an invalid (default-constructed) handle.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.is_valid(), "index() called on an invalid node handle");
        self.index
    }

    /// Returns `false` for a default-constructed handle.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.graph.is_valid()
    }

    /// Position of this node in `graph`.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn position<V>(self, graph: &Graph<V>) -> Result<&Point> {
        graph.position(self)
    }

    /// Value stored on this node.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn value<V>(self, graph: &Graph<V>) -> Result<&V> {
        graph.value(self)
    }

    /// Mutable access to the value stored on this node; writes land in the graph.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn value_mut<V>(self, graph: &mut Graph<V>) -> Result<&mut V> {
        graph.value_mut(self)
    }

    /// Number of edges incident to this node.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn degree<V>(self, graph: &Graph<V>) -> Result<usize> {
        graph.degree(self)
    }

    /// Cursor at the first incident edge of this node.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn edge_begin<V>(self, graph: &Graph<V>) -> Result<IncidentIter<'_, V>> {
        graph.incident_begin(self)
    }

    /// Cursor one past the last incident edge of this node.
    ///
    /// # Errors
    /// [`GraphError::ForeignNode`](crate::GraphError::ForeignNode) if the node is not a member of `graph`.
    #[inline]
    pub fn edge_end<V>(self, graph: &Graph<V>) -> Result<IncidentIter<'_, V>> {
        graph.incident_end(self)
    }
}

impl Default for Node {
    /// An invalid handle that is a member of no graph.
    #[inline]
    fn default() -> Self {
        Self::new(GraphId::INVALID, usize::MAX)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Node({})", self.index)
        } else {
            f.write_str("Node(invalid)")
        }
    }
}

/// Handle to an undirected edge of a [`Graph`].
///
/// `node1()`/`node2()` keep the orientation the edge was obtained with, but
/// equality ignores it: `edge(a, b) == edge(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    graph: GraphId,
    node1: usize,
    node2: usize,
}

impl Edge {
    #[inline]
    pub(crate) const fn new(graph: GraphId, node1: usize, node2: usize) -> Self {
        Self { graph, node1, node2 }
    }

    /// Identity of the issuing graph.
    #[inline]
    pub const fn graph(self) -> GraphId {
        self.graph
    }

    /// Returns `false` for a default-constructed handle.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.graph.is_valid()
    }

    /// First endpoint, as oriented when this handle was produced.
    #[inline]
    pub const fn node1(self) -> Node {
        Node::new(self.graph, self.node1)
    }

    /// Second endpoint, as oriented when this handle was produced.
    #[inline]
    pub const fn node2(self) -> Node {
        Node::new(self.graph, self.node2)
    }

    /// Both endpoints, `(node1, node2)`.
    #[inline]
    pub const fn nodes(self) -> (Node, Node) {
        (self.node1(), self.node2())
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    pub fn opposite(self, node: Node) -> Option<Node> {
        if node == self.node1() {
            Some(self.node2())
        } else if node == self.node2() {
            Some(self.node1())
        } else {
            None
        }
    }

    /// Euclidean distance between the endpoint positions.
    ///
    /// # Errors
    /// [`GraphError::ForeignEdge`](crate::GraphError::ForeignEdge) if this edge is not in `graph`.
    #[inline]
    pub fn length<V>(self, graph: &Graph<V>) -> Result<f64> {
        graph.edge_length(self)
    }

    /// Orientation-free ordering key: `(max index, min index)`.
    #[inline]
    fn key(self) -> (usize, usize) {
        if self.node1 >= self.node2 {
            (self.node1, self.node2)
        } else {
            (self.node2, self.node1)
        }
    }
}

impl Default for Edge {
    /// An invalid handle that is a member of no graph.
    #[inline]
    fn default() -> Self {
        Self::new(GraphId::INVALID, usize::MAX, usize::MAX)
    }
}

impl PartialEq for Edge {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph && self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.graph.hash(state);
        self.key().hash(state);
    }
}

impl Ord for Edge {
    /// Compares `(max, min)` endpoint indices, then graph identity.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| self.graph.cmp(&other.graph))
    }
}

impl PartialOrd for Edge {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Edge({}, {})", self.node1, self.node2)
        } else {
            f.write_str("Edge(invalid)")
        }
    }
}
