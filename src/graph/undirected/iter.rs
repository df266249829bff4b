//! Cursor-style iterators over a [`Graph`].
//!
//! Each iterator borrows the graph, so the graph cannot be mutated while one is
//! alive. Two cursors compare equal when they borrow the same graph instance and
//! sit at the same position; running a `*_begin()` cursor to exhaustion leaves
//! it equal to the matching `*_end()`.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use super::Graph;
use crate::graph::handle::{Edge, Node};
use crate::graph::identity::GraphId;

/// Iterator over all nodes in index order.
pub struct NodeIter<'g, V> {
    graph: &'g Graph<V>,
    index: usize,
}

impl<'g, V> NodeIter<'g, V> {
    #[inline]
    pub(super) fn new(graph: &'g Graph<V>, index: usize) -> Self {
        Self { graph, index }
    }
}

impl<V> Iterator for NodeIter<'_, V> {
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        if self.index >= self.graph.nodes.len() {
            return None;
        }
        let node = Node::new(self.graph.id, self.index);
        self.index += 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.nodes.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for NodeIter<'_, V> {}
impl<V> FusedIterator for NodeIter<'_, V> {}

impl<V> PartialEq for NodeIter<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl<V> Eq for NodeIter<'_, V> {}

impl<V> Clone for NodeIter<'_, V> {
    fn clone(&self) -> Self {
        Self { graph: self.graph, index: self.index }
    }
}

impl<V> fmt::Debug for NodeIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeIter")
            .field("graph", &self.graph.id)
            .field("index", &self.index)
            .finish()
    }
}

/// Iterator over every undirected edge of a graph, each exactly once.
///
/// The cursor is `(node, slot)` into the adjacency lists. Each edge `{i, j}` is
/// stored at both `adjacency[i]` and `adjacency[j]`; only the copy found while
/// scanning the lower endpoint (`i < j`) is yielded, all others are skipped.
/// Edges therefore come out grouped by lower endpoint, each with
/// `node1().index() < node2().index()`. The exhausted state is
/// `(num_nodes(), 0)`.
pub struct EdgeIter<'g, V> {
    graph: &'g Graph<V>,
    node: usize,
    slot: usize,
}

impl<'g, V> EdgeIter<'g, V> {
    pub(super) fn new(graph: &'g Graph<V>, node: usize, slot: usize) -> Self {
        let mut it = Self { graph, node, slot };
        it.settle();
        it
    }

    /// Moves the cursor forward to the nearest emittable slot at or after its
    /// current position, rolling over exhausted lists, or to `(n, 0)`.
    fn settle(&mut self) {
        let adjacency = &self.graph.adjacency;
        while self.node < adjacency.len() {
            let list = &adjacency[self.node];
            while self.slot < list.len() {
                if self.node < list[self.slot] {
                    return;
                }
                self.slot += 1;
            }
            self.node += 1;
            self.slot = 0;
        }
    }
}

impl<V> Iterator for EdgeIter<'_, V> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let list = self.graph.adjacency.get(self.node)?;
        let edge = Edge::new(self.graph.id, self.node, list[self.slot]);
        self.slot += 1;
        self.settle();
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.node >= self.graph.adjacency.len() {
            (0, Some(0))
        } else {
            (1, Some(self.graph.edge_count))
        }
    }
}

impl<V> FusedIterator for EdgeIter<'_, V> {}

impl<V> PartialEq for EdgeIter<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.node == other.node && self.slot == other.slot
    }
}

impl<V> Eq for EdgeIter<'_, V> {}

impl<V> Clone for EdgeIter<'_, V> {
    fn clone(&self) -> Self {
        Self { graph: self.graph, node: self.node, slot: self.slot }
    }
}

impl<V> fmt::Debug for EdgeIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeIter")
            .field("graph", &self.graph.id)
            .field("node", &self.node)
            .field("slot", &self.slot)
            .finish()
    }
}

/// Iterator over the edges incident to one node, in insertion order.
///
/// Every yielded edge has `node1()` equal to the scoped node.
pub struct IncidentIter<'g, V> {
    graph: &'g Graph<V>,
    node: usize,
    slot: usize,
}

impl<'g, V> IncidentIter<'g, V> {
    #[inline]
    pub(super) fn new(graph: &'g Graph<V>, node: usize, slot: usize) -> Self {
        Self { graph, node, slot }
    }

    /// The node whose incident edges are being visited.
    #[inline]
    pub fn node(&self) -> Node {
        Node::new(self.graph.id, self.node)
    }
}

impl<V> Iterator for IncidentIter<'_, V> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Edge> {
        let &other = self.graph.adjacency[self.node].get(self.slot)?;
        self.slot += 1;
        Some(Edge::new(self.graph.id, self.node, other))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.adjacency[self.node].len().saturating_sub(self.slot);
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for IncidentIter<'_, V> {}
impl<V> FusedIterator for IncidentIter<'_, V> {}

impl<V> PartialEq for IncidentIter<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.node == other.node && self.slot == other.slot
    }
}

impl<V> Eq for IncidentIter<'_, V> {}

impl<V> Clone for IncidentIter<'_, V> {
    fn clone(&self) -> Self {
        Self { graph: self.graph, node: self.node, slot: self.slot }
    }
}

impl<V> fmt::Debug for IncidentIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentIter")
            .field("graph", &self.graph.id)
            .field("node", &self.node)
            .field("slot", &self.slot)
            .finish()
    }
}

/// Iterator over the neighbors of one node.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    graph: GraphId,
    inner: core::slice::Iter<'g, usize>,
}

impl<'g> Neighbors<'g> {
    #[inline]
    pub(super) fn new(graph: GraphId, list: &'g [usize]) -> Self {
        Self { graph, inner: list.iter() }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        self.inner.next().map(|&i| Node::new(self.graph, i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
impl FusedIterator for Neighbors<'_> {}
