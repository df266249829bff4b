//! Integration tests for the public `Graph` API.

use pointgraph::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

fn line(n: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(n);
    for i in 0..n {
        graph.add_node_with_value(Point::new(i as f64, 0.0, 0.0), i);
    }
    graph
}

#[test]
fn test_path_of_three() -> Result<()> {
    let mut graph = line(3);
    let (n0, n1, n2) = (graph.node(0)?, graph.node(1)?, graph.node(2)?);

    graph.add_edge(n0, n1)?;
    graph.add_edge(n1, n2)?;

    assert_eq!(graph.num_edges(), 2);
    assert!(!graph.has_edge(n0, n2));
    assert_eq!(n1.degree(&graph)?, 2);

    let edges: BTreeSet<Edge> = graph.edges().collect();
    let expected: BTreeSet<Edge> = [graph.add_edge(n1, n0)?, graph.add_edge(n2, n1)?].into();
    assert_eq!(edges, expected);
    assert_eq!(graph.num_edges(), 2);
    Ok(())
}

#[test]
fn test_duplicate_edge_keeps_count() -> Result<()> {
    let mut graph = line(2);
    let (a, b) = (graph.node(0)?, graph.node(1)?);

    graph.add_edge(a, b)?;
    graph.add_edge(a, b)?;
    assert_eq!(graph.num_edges(), 1);
    assert!(graph.has_edge(a, b));
    assert!(graph.has_edge(b, a));
    Ok(())
}

#[test]
fn test_edge_equality_is_orientation_free() -> Result<()> {
    let mut graph = line(4);
    let (a, b) = (graph.node(1)?, graph.node(3)?);
    let ab = graph.add_edge(a, b)?;
    let ba = graph.add_edge(b, a)?;

    assert_eq!(ab, ba);
    assert_eq!(ab.node1(), a);
    assert_eq!(ba.node1(), b);
    assert_eq!(ab.opposite(a), Some(b));
    Ok(())
}

#[test]
fn test_empty_graph_cursors() {
    let graph: Graph = Graph::default();
    assert!(graph.is_empty());
    assert!(graph.edge_begin() == graph.edge_end());
    assert!(graph.node_begin() == graph.node_end());
    assert_eq!(graph.edge(0), Err(GraphError::EdgeIndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn test_nodes_from_two_graphs_in_one_map() -> Result<()> {
    let g1 = line(3);
    let g2 = line(3);

    let mut labels = BTreeMap::new();
    for graph in [&g1, &g2] {
        for node in graph {
            labels.insert(node, *graph.value(node)?);
        }
    }
    // Same indices, different graphs: six distinct keys.
    assert_eq!(labels.len(), 6);
    assert_ne!(g1.node(0)?, g2.node(0)?);
    Ok(())
}

#[test]
fn test_values_update_in_place() -> Result<()> {
    let mut graph = line(5);
    let nodes: Vec<Node> = graph.nodes().collect();
    for node in &nodes {
        *node.value_mut(&mut graph)? *= 10;
    }
    let values: Vec<usize> = nodes.iter().map(|n| *graph.value(*n).unwrap()).collect();
    assert_eq!(values, vec![0, 10, 20, 30, 40]);
    Ok(())
}

#[test]
fn test_clear_retires_handles() -> Result<()> {
    let mut graph = line(3);
    let a = graph.node(2)?;
    graph.add_edge(a, graph.node(0)?)?;

    graph.clear();
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_edges(), 0);
    assert!(!graph.has_node(a));
    assert_eq!(graph.value(a), Err(GraphError::ForeignNode { node: a }));

    for i in 0..3 {
        graph.add_node_with_value(Point::ORIGIN, i);
    }
    assert!(!graph.has_node(a));
    Ok(())
}

#[test]
fn test_error_messages() {
    let graph = line(1);
    let err = graph.node(5).unwrap_err();
    assert_eq!(err.to_string(), "node index 5 out of range for a graph with 1 nodes");
    assert_eq!(
        GraphError::ForeignNode { node: Node::default() }.to_string(),
        "Node(invalid) does not belong to this graph"
    );
    assert_eq!(
        GraphError::SelfLoop { index: 4 }.to_string(),
        "self-loop on node 4 is not permitted"
    );
}

#[test]
fn test_shared_reads_behind_rwlock() {
    let n = 64;
    let mut graph = line(n);
    for i in 0..n - 1 {
        let (a, b) = (graph.node(i).unwrap(), graph.node(i + 1).unwrap());
        graph.add_edge(a, b).unwrap();
    }
    let shared = RwLock::new(graph);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let graph = shared.read().unwrap();
                // Readers may run before or after the writer.
                let m = graph.num_edges();
                assert!(m == n - 1 || m == n);
                assert_eq!(graph.edges().count(), m);
                let total: usize = graph.nodes().map(|v| graph.degree(v).unwrap()).sum();
                assert_eq!(total, 2 * m);
            });
        }
        s.spawn(|| {
            let mut graph = shared.write().unwrap();
            let extra = graph.add_node_with_value(Point::ORIGIN, n);
            let first = graph.node(0).unwrap();
            graph.add_edge(first, extra).unwrap();
        });
    });

    let graph = shared.into_inner().unwrap();
    assert_eq!(graph.num_nodes(), n + 1);
    assert_eq!(graph.num_edges(), n);
}
