//! Advisory complexity labels shown next to a result.
//!
//! These are display heuristics on vertex/edge counts and layout. Nothing in
//! the algorithms reads them.

use super::Algorithm;
use crate::graph::Graph;

/// Below this many vertices Prim is labelled with the dense-graph bound.
pub const PRIM_SMALL_GRAPH: usize = 10;

/// Vertical spread (in layout units) under which Kruskal's input counts as flat.
pub const KRUSKAL_FLAT_SPREAD: f64 = 10.0;

pub const EMPTY_GRAPH: &str = "O(1) (empty graph)";

/// Pick the label for `algorithm` on `graph`.
pub fn formula(algorithm: Algorithm, graph: &Graph) -> String {
    if graph.is_empty() {
        return EMPTY_GRAPH.to_string();
    }

    let label = match algorithm {
        Algorithm::Prim => {
            if graph.vertex_count() < PRIM_SMALL_GRAPH {
                "O(V²)"
            } else {
                "O(E + V log V)"
            }
        }
        Algorithm::Kruskal => {
            if is_flat(graph) {
                "O(E log* V)"
            } else {
                "O(E log E)"
            }
        }
        Algorithm::Boruvka => "O(E log V)",
    };
    label.to_string()
}

/// Whether all vertices sit within [`KRUSKAL_FLAT_SPREAD`] of each other
/// vertically. Needs at least two vertices.
fn is_flat(graph: &Graph) -> bool {
    if graph.vertex_count() < 2 {
        return false;
    }
    let (min_y, max_y) = graph
        .vertices()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.y), hi.max(v.y))
        });
    max_y - min_y < KRUSKAL_FLAT_SPREAD
}
