//! End-to-end checks: build graphs through the public API, run every
//! algorithm, compare against known trees.
use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use spanning::algo::{self, boruvka};
use spanning::generate::{self, GeneratorConfig};
use spanning::{Algorithm, EdgeKey, Graph, SpanningTree, Vertex};

fn graph_from(ids: impl IntoIterator<Item = u32>, edges: &[(u32, u32, f64)]) -> Graph {
    let mut g = Graph::new();
    for id in ids {
        g.add_vertex(Vertex::at_origin(id));
    }
    for &(a, b, w) in edges {
        g.add_edge(a, b, w).unwrap();
    }
    g
}

fn key_set(tree: &SpanningTree) -> BTreeSet<EdgeKey> {
    tree.edges().iter().map(|e| e.key()).collect()
}

#[test]
fn scenario_a_all_algorithms() {
    let g = graph_from(
        1..=4,
        &[
            (1, 2, 1.0),
            (2, 3, 2.0),
            (3, 4, 3.0),
            (1, 4, 10.0),
            (1, 3, 15.0),
        ],
    );
    let expected: BTreeSet<_> = [EdgeKey::new(1, 2), EdgeKey::new(2, 3), EdgeKey::new(3, 4)]
        .into_iter()
        .collect();
    for algorithm in Algorithm::ALL {
        let tree = algorithm.find_mst(&g);
        assert_eq!(tree.total_weight(), 6.0, "{algorithm}");
        assert_eq!(key_set(&tree), expected, "{algorithm}");
        assert!(tree.spans(&g));
    }
}

#[test]
fn scenario_b_ties_are_deterministic() {
    let g = graph_from(1..=3, &[(1, 2, 5.0), (2, 3, 5.0), (1, 3, 5.0)]);
    let expected: BTreeSet<_> = [EdgeKey::new(1, 2), EdgeKey::new(1, 3)].into_iter().collect();
    for algorithm in Algorithm::ALL {
        let first = algorithm.find_mst(&g);
        assert_eq!(first.total_weight(), 10.0);
        assert_eq!(first.len(), 2);
        assert_eq!(key_set(&first), expected, "{algorithm}");
        for _ in 0..5 {
            let again = algorithm.find_mst(&g);
            assert_eq!(again.edges(), first.edges());
        }
    }
}

#[test]
fn scenario_c_disconnected_gives_forest() {
    let g = graph_from(1..=4, &[(1, 2, 1.0), (3, 4, 2.0)]);
    assert!(!g.is_connected());

    let prim = Algorithm::Prim.find_mst(&g);
    assert_eq!(key_set(&prim), [EdgeKey::new(1, 2)].into_iter().collect());

    let kruskal = Algorithm::Kruskal.find_mst(&g);
    assert_eq!(kruskal.len(), 2);
    assert!(!kruskal.spans(&g));

    let (tree, stats) = boruvka::run(&g);
    assert_eq!(stats.components, 2);
    assert_eq!(tree.total_weight(), 3.0);
}

#[test]
fn algorithms_never_mutate_the_graph() {
    let g = graph_from(1..=4, &[(1, 2, 1.0), (2, 3, 2.0), (3, 4, 3.0), (1, 4, 10.0)]);
    let before: Vec<_> = g.edges().to_vec();
    algo::compare(&g);
    assert_eq!(g.edges(), before.as_slice());
    assert!(g.edges().iter().all(|e| !e.in_spanning_tree));
}

#[test]
fn marking_follows_the_tree() {
    let mut g = graph_from(1..=3, &[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 9.0)]);
    let tree = Algorithm::Prim.find_mst(&g);
    g.mark_spanning_tree(&tree);
    let marked: Vec<_> = g
        .edges()
        .iter()
        .filter(|e| e.in_spanning_tree)
        .map(|e| e.key())
        .collect();
    assert_eq!(marked, vec![EdgeKey::new(1, 2), EdgeKey::new(2, 3)]);
    g.clear_marks();
    assert!(g.edges().iter().all(|e| !e.in_spanning_tree));
}

#[test]
fn generated_graphs_agree_across_algorithms() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [2, 3, 8, 15, 27, 40] {
        let g = generate::generate(n, &config, &mut rng).unwrap();
        assert!(g.is_connected());
        let trees = algo::compare(&g);
        let weight = trees[0].total_weight();
        for tree in &trees {
            assert_eq!(tree.len(), n - 1, "{} on {n} vertices", tree.algorithm());
            assert!((tree.total_weight() - weight).abs() < 1e-9);
        }
    }
}

#[test]
fn edits_after_solving_change_the_next_result() {
    let mut g = graph_from(1..=3, &[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 9.0)]);
    assert_eq!(Algorithm::Kruskal.find_mst(&g).total_weight(), 3.0);

    g.remove_edge_between(2, 1).unwrap();
    assert_eq!(Algorithm::Kruskal.find_mst(&g).total_weight(), 11.0);

    g.remove_vertex(3);
    assert!(!g.is_connected());
    assert!(Algorithm::Prim.find_mst(&g).is_empty());
}
