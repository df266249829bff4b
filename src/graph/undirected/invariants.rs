//! Structural checks for [`Graph`], run by the test suite after mutations.

use super::Graph;

#[track_caller]
fn invariant_assert(condition: bool, message: &str) {
    assert!(condition, "Graph invariant violated: {}", message);
}

impl<V> Graph<V> {
    /// Verifies the storage invariants.
    ///
    /// - node records and adjacency lists are parallel,
    /// - the adjacency total is exactly twice the edge count,
    /// - no list names its own node, an out-of-range node, or a neighbor twice,
    /// - adjacency is symmetric.
    ///
    /// Costs \(O(n + m \cdot \Delta)\).
    pub(crate) fn check_invariants(&self) {
        let n = self.nodes.len();
        invariant_assert(self.adjacency.len() == n, "adjacency is not parallel to nodes");

        let total: usize = self.adjacency.iter().map(Vec::len).sum();
        invariant_assert(total == 2 * self.edge_count, "adjacency total != 2 * num_edges");

        for (i, list) in self.adjacency.iter().enumerate() {
            for (k, &j) in list.iter().enumerate() {
                invariant_assert(j < n, "neighbor index out of range");
                invariant_assert(j != i, "self-loop stored");
                invariant_assert(!list[..k].contains(&j), "parallel edge stored");
                invariant_assert(
                    self.adjacency[j].iter().filter(|&&back| back == i).count() == 1,
                    "adjacency is not symmetric",
                );
            }
        }
    }
}
