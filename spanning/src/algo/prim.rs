//! Lazy Prim: grow one tree from the first vertex, always taking the
//! cheapest edge that crosses from the tree to an unreached vertex.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use super::{Algorithm, SpanningTree, TreeBuilder};
use crate::entity::{Edge, VertexId};
use crate::graph::Graph;

/// Frontier entry ordered by `(weight, source.id, destination.id)`.
struct Crossing<'g>(&'g Edge);

impl PartialEq for Crossing<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Crossing<'_> {}

impl PartialOrd for Crossing<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Crossing<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_by_weight(other.0)
    }
}

type Frontier<'g> = BinaryHeap<Reverse<Crossing<'g>>>;

/// Compute a minimum spanning tree with Prim's algorithm.
///
/// Starts from the first vertex in insertion order. Stale frontier entries
/// (both ends already reached) are discarded when popped. On a disconnected
/// graph only the start vertex's component is spanned.
pub fn find_mst(graph: &Graph) -> SpanningTree {
    let started = Instant::now();
    let n = graph.vertex_count();
    let mut tree = TreeBuilder::with_capacity(n.saturating_sub(1));

    let Some(first) = graph.vertices().first() else {
        return tree.finish(Algorithm::Prim, started);
    };

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut reached = 1;
    let mut frontier = Frontier::new();
    push_crossings(graph, first.id, &visited, &mut frontier);

    while reached < n {
        let Some(Reverse(Crossing(edge))) = frontier.pop() else {
            break;
        };
        let (Some(s), Some(d)) = (
            graph.index_of(edge.source.id),
            graph.index_of(edge.destination.id),
        ) else {
            continue;
        };
        if visited[s] && visited[d] {
            continue;
        }

        let (pos, id) = if visited[s] {
            (d, edge.destination.id)
        } else {
            (s, edge.source.id)
        };
        visited[pos] = true;
        reached += 1;
        tree.push(*edge);
        push_crossings(graph, id, &visited, &mut frontier);
    }

    tree.finish(Algorithm::Prim, started)
}

/// Push every edge from `id` to a vertex not yet in the tree.
fn push_crossings<'g>(
    graph: &'g Graph,
    id: VertexId,
    visited: &[bool],
    frontier: &mut Frontier<'g>,
) {
    for edge in graph.incident_edges(id) {
        let far = edge.other(id).and_then(|v| graph.index_of(v.id));
        if let Some(pos) = far {
            if !visited[pos] {
                frontier.push(Reverse(Crossing(edge)));
            }
        }
    }
}
