//! Kruskal's algorithm: scan edges cheapest-first, keep those that join two
//! different components.
//!
//! O(E log E) for the sort plus near-constant union-find work per edge.

use std::time::Instant;

use super::{indexed_edges, Algorithm, SpanningTree, TreeBuilder};
use crate::graph::Graph;
use crate::unionfind::DisjointSet;

/// Compute a minimum spanning tree with Kruskal's algorithm.
///
/// Ties on weight are broken by `(source.id, destination.id)`. On a
/// disconnected graph the scan exhausts every edge and the result is a
/// minimum spanning forest with one tree per component.
pub fn find_mst(graph: &Graph) -> SpanningTree {
    let started = Instant::now();
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    let mut tree = TreeBuilder::with_capacity(target);

    if n <= 1 {
        return tree.finish(Algorithm::Kruskal, started);
    }

    let mut edges = indexed_edges(graph);
    edges.sort_by(|a, b| a.edge.cmp_by_weight(b.edge));

    let mut ds = DisjointSet::new(n);
    for e in edges {
        if ds.union(e.u, e.v) {
            tree.push(*e.edge);
            if tree.len() == target {
                break;
            }
        }
    }

    tree.finish(Algorithm::Kruskal, started)
}
