//! Minimum spanning tree algorithms.
//!
//! Three interchangeable strategies share one contract: given a [`Graph`],
//! return the chosen edges, their total weight and the time the computation
//! took. None of them mutate the graph. On a disconnected graph they return
//! a forest instead of failing; check [`Graph::is_connected`] first.

pub mod boruvka;
pub mod complexity;
pub mod kruskal;
pub mod prim;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{Edge, EdgeKey};
use crate::graph::Graph;

/// The available spanning-tree strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Prim,
    Kruskal,
    Boruvka,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Prim, Algorithm::Kruskal, Algorithm::Boruvka];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
            Algorithm::Boruvka => "Boruvka",
        }
    }

    /// Compute a minimum spanning tree (or forest) of `graph`.
    pub fn find_mst(&self, graph: &Graph) -> SpanningTree {
        match self {
            Algorithm::Prim => prim::find_mst(graph),
            Algorithm::Kruskal => kruskal::find_mst(graph),
            Algorithm::Boruvka => boruvka::find_mst(graph),
        }
    }

    /// Advisory asymptotic-cost label for running this algorithm on `graph`.
    pub fn complexity_formula(&self, graph: &Graph) -> String {
        complexity::formula(*self, graph)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected prim, kruskal or boruvka)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            "boruvka" | "borůvka" => Ok(Algorithm::Boruvka),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Result of one spanning-tree computation.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    keys: HashSet<EdgeKey>,
    total_weight: f64,
    elapsed: Duration,
}

impl SpanningTree {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Chosen edges, in the order the algorithm selected them.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Whether an edge joining the same endpoints was chosen.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.keys.contains(&edge.key())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether this is a spanning tree of `graph` rather than a smaller forest.
    pub fn spans(&self, graph: &Graph) -> bool {
        self.edges.len() + 1 >= graph.vertex_count()
    }
}

/// Accumulates chosen edges while an algorithm runs.
pub(crate) struct TreeBuilder {
    edges: Vec<Edge>,
    keys: HashSet<EdgeKey>,
    total_weight: f64,
}

impl TreeBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            edges: Vec::with_capacity(n),
            keys: HashSet::with_capacity(n),
            total_weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.keys.insert(edge.key());
        self.edges.push(edge);
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn finish(self, algorithm: Algorithm, started: Instant) -> SpanningTree {
        let elapsed = started.elapsed();
        tracing::debug!(
            %algorithm,
            edges = self.edges.len(),
            total_weight = self.total_weight,
            elapsed_us = elapsed.as_micros() as u64,
            "spanning tree computed"
        );
        SpanningTree {
            algorithm,
            edges: self.edges,
            keys: self.keys,
            total_weight: self.total_weight,
            elapsed,
        }
    }
}

/// An edge with the dense positions of its endpoints.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IndexedEdge<'g> {
    pub edge: &'g Edge,
    pub u: u32,
    pub v: u32,
}

/// Resolve every edge's endpoints to vertex positions.
pub(crate) fn indexed_edges(graph: &Graph) -> Vec<IndexedEdge<'_>> {
    debug_assert!(graph.vertex_count() <= u32::MAX as usize);
    graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let u = graph.index_of(edge.source.id)?;
            let v = graph.index_of(edge.destination.id)?;
            Some(IndexedEdge {
                edge,
                u: u as u32,
                v: v as u32,
            })
        })
        .collect()
}

/// Run every algorithm on the same graph, in [`Algorithm::ALL`] order.
///
/// With the `parallel` feature the three runs execute concurrently; the graph
/// is only read.
pub fn compare(graph: &Graph) -> Vec<SpanningTree> {
    #[cfg(feature = "parallel")]
    {
        Algorithm::ALL
            .as_slice()
            .par_iter()
            .map(|algorithm| algorithm.find_mst(graph))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        Algorithm::ALL
            .iter()
            .map(|algorithm| algorithm.find_mst(graph))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Vertex;

    fn scenario_a() -> Graph {
        let mut g = Graph::new();
        for id in 1..=4 {
            g.add_vertex(Vertex::at_origin(id));
        }
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();
        g.add_edge(3, 4, 3.0).unwrap();
        g.add_edge(1, 4, 10.0).unwrap();
        g.add_edge(1, 3, 15.0).unwrap();
        g
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("prim".parse::<Algorithm>(), Ok(Algorithm::Prim));
        assert_eq!("Kruskal".parse::<Algorithm>(), Ok(Algorithm::Kruskal));
        assert_eq!(" BORUVKA ".parse::<Algorithm>(), Ok(Algorithm::Boruvka));
        assert_eq!("Borůvka".parse::<Algorithm>(), Ok(Algorithm::Boruvka));
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn compare_runs_all_in_order() {
        let g = scenario_a();
        let trees = compare(&g);
        let algorithms: Vec<_> = trees.iter().map(SpanningTree::algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        for tree in &trees {
            assert_eq!(tree.total_weight(), 6.0);
            assert!(tree.spans(&g));
        }
    }

    #[test]
    fn contains_ignores_direction_and_weight() {
        let g = scenario_a();
        let tree = Algorithm::Kruskal.find_mst(&g);
        let reversed = Edge::new(Vertex::at_origin(2), Vertex::at_origin(1), 99.0);
        assert!(tree.contains(&reversed));
        let heavy = g.edge_between(1, 3).unwrap();
        assert!(!tree.contains(heavy));
    }

    #[test]
    fn indexed_edges_resolve_positions() {
        let g = scenario_a();
        let indexed = indexed_edges(&g);
        assert_eq!(indexed.len(), g.edge_count());
        let first = indexed[0];
        assert_eq!((first.u, first.v), (0, 1));
    }
}
