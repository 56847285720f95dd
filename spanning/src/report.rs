//! Result export: the saved-text layout and a terminal comparison table.
use std::fmt::Write as _;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::algo::{Algorithm, SpanningTree};
use crate::graph::Graph;

/// Render a result in the export layout:
///
/// ```text
/// MST (Kruskal):
/// Total weight: 6.00
/// Elapsed: 0.0123 ms
/// 1 -- 1 -- 2
/// 2 -- 2 -- 3
/// 3 -- 3 -- 4
/// ```
pub fn export_text(tree: &SpanningTree) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MST ({}):", tree.algorithm());
    let _ = writeln!(out, "Total weight: {:.2}", tree.total_weight());
    let _ = writeln!(out, "Elapsed: {:.4} ms", tree.elapsed_ms());
    for edge in tree.edges() {
        let _ = writeln!(
            out,
            "{} -- {} -- {}",
            edge.source.id,
            whole_weight(edge.weight),
            edge.destination.id
        );
    }
    out
}

/// Write [`export_text`] to `path`.
pub fn save_text(path: impl AsRef<Path>, tree: &SpanningTree) -> std::io::Result<()> {
    std::fs::write(path, export_text(tree))
}

/// Weight rounded to an integer, halves away from zero.
fn whole_weight(weight: f64) -> String {
    let rounded = weight.round();
    // Avoid printing "-0" for small negative weights
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

/// One line of a side-by-side algorithm comparison.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub edges: usize,
    pub total_weight: f64,
    pub elapsed_ms: f64,
    pub complexity: String,
    pub spans: bool,
}

/// Build comparison rows for results computed on `graph`.
pub fn comparison_rows(trees: &[SpanningTree], graph: &Graph) -> Vec<ComparisonRow> {
    trees
        .iter()
        .map(|tree| ComparisonRow {
            algorithm: tree.algorithm(),
            edges: tree.len(),
            total_weight: tree.total_weight(),
            elapsed_ms: tree.elapsed_ms(),
            complexity: tree.algorithm().complexity_formula(graph),
            spans: tree.spans(graph),
        })
        .collect()
}

/// Whether every row reports the same total weight within `tolerance`.
pub fn weights_agree(rows: &[ComparisonRow], tolerance: f64) -> bool {
    match rows.first() {
        Some(first) => rows
            .iter()
            .all(|r| (r.total_weight - first.total_weight).abs() <= tolerance),
        None => true,
    }
}

/// Print a terminal table summarizing a comparison.
pub fn print_comparison(rows: &[ComparisonRow]) {
    print!("{}", comparison_table(rows));
}

fn comparison_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>6} {:>14} {:>12}  {:<16} {:>6}",
        "Algorithm", "Edges", "Weight", "Elapsed ms", "Complexity", "Tree"
    );
    let _ = writeln!(out, "{}", "-".repeat(71));
    for r in rows {
        let _ = writeln!(
            out,
            "{:<10} {:>6} {:>14.2} {:>12.4}  {:<16} {:>6}",
            r.algorithm.name(),
            r.edges,
            r.total_weight,
            r.elapsed_ms,
            r.complexity,
            if r.spans { "yes" } else { "forest" },
        );
    }
    out
}
