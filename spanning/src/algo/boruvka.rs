//! Borůvka's algorithm: every round, each component picks its cheapest
//! outgoing edge and all picks are merged at once.

use std::time::Instant;

use super::{indexed_edges, Algorithm, SpanningTree, TreeBuilder};
use crate::graph::Graph;
use crate::unionfind::DisjointSet;

/// Round bookkeeping from a Borůvka run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoruvkaStats {
    /// Full passes over the edge list, including a final pass that found
    /// nothing to merge.
    pub rounds: usize,
    /// Components left when the loop stopped; 1 for a connected graph.
    pub components: usize,
}

/// Compute a minimum spanning tree with Borůvka's algorithm.
pub fn find_mst(graph: &Graph) -> SpanningTree {
    run(graph).0
}

/// Borůvka with round statistics.
///
/// Edges are scanned in `(source.id, destination.id)` order and a component's
/// candidate is only replaced by a strictly cheaper edge, so ties go to the
/// first edge in that order. An edge picked by both of its components is
/// merged once, and a pick whose ends were already joined earlier in the same
/// round is skipped. Stops early when no component has an outgoing edge,
/// leaving a forest.
pub fn run(graph: &Graph) -> (SpanningTree, BoruvkaStats) {
    let started = Instant::now();
    let n = graph.vertex_count();
    let mut tree = TreeBuilder::with_capacity(n.saturating_sub(1));
    let mut stats = BoruvkaStats {
        rounds: 0,
        components: n,
    };

    if n == 0 {
        return (tree.finish(Algorithm::Boruvka, started), stats);
    }

    let mut edges = indexed_edges(graph);
    edges.sort_by(|a, b| a.edge.cmp_by_endpoints(b.edge));

    let mut ds = DisjointSet::new(n);
    let mut cheapest: Vec<Option<usize>> = vec![None; n];

    while stats.components > 1 {
        stats.rounds += 1;
        cheapest.fill(None);

        for (i, e) in edges.iter().enumerate() {
            let ru = ds.find(e.u);
            let rv = ds.find(e.v);
            if ru == rv {
                continue;
            }
            for root in [ru, rv] {
                let replace = match cheapest[root as usize] {
                    Some(j) => e.edge.weight < edges[j].edge.weight,
                    None => true,
                };
                if replace {
                    cheapest[root as usize] = Some(i);
                }
            }
        }

        let mut picks: Vec<usize> = cheapest.iter().flatten().copied().collect();
        if picks.is_empty() {
            tracing::debug!(
                components = stats.components,
                "no edge leaves any component, graph is disconnected"
            );
            break;
        }
        picks.sort_unstable();
        picks.dedup();

        for i in picks {
            let e = edges[i];
            if ds.union(e.u, e.v) {
                tree.push(*e.edge);
                stats.components -= 1;
            }
        }

        tracing::trace!(
            round = stats.rounds,
            components = stats.components,
            "boruvka round finished"
        );
    }

    (tree.finish(Algorithm::Boruvka, started), stats)
}
