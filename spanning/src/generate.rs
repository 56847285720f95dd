//! Random graph generation on a ring layout.
//!
//! Vertices go on three concentric rings inside a padded canvas. Edges are
//! added between nearby vertices first until a target density is reached and
//! the graph is connected, with random repairs as a fallback.

use std::f64::consts::TAU;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{Edge, Vertex, VertexId};
use crate::error::GraphError;
use crate::graph::Graph;

/// Generator tunables. `Default` reproduces the interactive tool's settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    pub max_vertices: usize,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    /// Share of vertices on the outer and middle ring; the inner ring gets
    /// the rest.
    pub ring_shares: [f64; 2],
    /// Outer, middle and inner ring radius as fractions of the largest radius
    /// that fits in the padded canvas.
    pub ring_radii: [f64; 3],
    /// Upper bound of the random angular offset per vertex, in radians.
    pub angle_jitter: f64,
    /// Edge weights are drawn uniformly from `min_weight..max_weight`.
    pub min_weight: u32,
    pub max_weight: u32,
    /// Graphs up to this many vertices use `small_density`.
    pub small_graph_max: usize,
    pub small_density: f64,
    /// Graphs with at least this many vertices use `large_density`.
    pub large_graph_min: usize,
    pub large_density: f64,
    /// Density for everything in between.
    pub density: f64,
    pub random_edge_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_vertices: 40,
            canvas_width: 800.0,
            canvas_height: 600.0,
            padding: 50.0,
            ring_shares: [0.6, 0.3],
            ring_radii: [1.0, 0.6, 0.3],
            angle_jitter: 0.1,
            min_weight: 1,
            max_weight: 50,
            small_graph_max: 15,
            small_density: 0.4,
            large_graph_min: 30,
            large_density: 0.1,
            density: 0.2,
            random_edge_attempts: 200,
        }
    }
}

impl GeneratorConfig {
    /// Parse a TOML generator config. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, GenerateError> {
        let config: GeneratorConfig =
            toml::from_str(toml_str).map_err(|e| GenerateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_weight >= self.max_weight {
            return Err(GenerateError::Config(format!(
                "min_weight {} must be below max_weight {}",
                self.min_weight, self.max_weight
            )));
        }
        if !(self.canvas_width > 2.0 * self.padding && self.canvas_height > 2.0 * self.padding) {
            return Err(GenerateError::Config(format!(
                "canvas {}x{} leaves no room inside padding {}",
                self.canvas_width, self.canvas_height, self.padding
            )));
        }
        let [outer, middle] = self.ring_shares;
        if outer < 0.0 || middle < 0.0 || outer + middle > 1.0 {
            return Err(GenerateError::Config(format!(
                "ring shares {outer} and {middle} must be non-negative and sum to at most 1"
            )));
        }
        for d in [self.small_density, self.large_density, self.density] {
            if !(0.0..=1.0).contains(&d) {
                return Err(GenerateError::Config(format!(
                    "density {d} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Edge density used for a graph with `n` vertices.
    pub fn density_for(&self, n: usize) -> f64 {
        if n <= self.small_graph_max {
            self.small_density
        } else if n >= self.large_graph_min {
            self.large_density
        } else {
            self.density
        }
    }

    fn random_weight<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min_weight..self.max_weight) as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("vertex count {count} is outside 1..={max}")]
    VertexCount { count: usize, max: usize },
    #[error("config error: {0}")]
    Config(String),
    #[error("at least two vertices are needed to add an edge")]
    TooFewVertices,
    #[error("no unjoined vertex pair found in {0} attempts")]
    NoFreePair(usize),
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Place vertices `1..=n` on the ring layout.
pub fn ring_layout<R: Rng + ?Sized>(n: usize, config: &GeneratorConfig, rng: &mut R) -> Vec<Vertex> {
    let (w, h, pad) = (config.canvas_width, config.canvas_height, config.padding);
    let (cx, cy) = (w / 2.0, h / 2.0);
    if n == 1 {
        return vec![Vertex::new(1, cx, cy)];
    }

    let max_radius = (w.min(h) / 2.0 - pad).max(0.0);
    let outer = (n as f64 * config.ring_shares[0]).floor() as usize;
    let middle = (n as f64 * config.ring_shares[1]).floor() as usize;
    let inner = n.saturating_sub(outer + middle);

    let mut vertices = Vec::with_capacity(n);
    let mut next_id: VertexId = 1;
    for (count, radius) in [outer, middle, inner].into_iter().zip(config.ring_radii) {
        if count == 0 {
            continue;
        }
        let r = max_radius * radius;
        let step = TAU / count as f64;
        for i in 0..count {
            let angle = i as f64 * step + rng.gen::<f64>() * config.angle_jitter;
            let x = (cx + r * angle.cos()).max(pad).min(w - pad);
            let y = (cy + r * angle.sin()).max(pad).min(h - pad);
            vertices.push(Vertex::new(next_id, x, y));
            next_id += 1;
        }
    }
    vertices
}

/// Add edges to `graph`'s current vertices, nearest pairs first, then repair
/// connectivity with random pairs. Returns whether the graph ends connected.
pub fn populate_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<bool, GenerateError> {
    config.validate()?;
    let n = graph.vertex_count();
    if n < 2 {
        return Ok(true);
    }

    let all_pairs = n * (n - 1) / 2;
    let target = ((all_pairs as f64 * config.density_for(n)) as usize).max(n - 1);

    let vertices = graph.vertices().to_vec();
    let mut pairs = Vec::with_capacity(all_pairs);
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            pairs.push((a.id, b.id, a.distance(b)));
        }
    }
    pairs.sort_by(|p, q| p.2.total_cmp(&q.2));

    for (a, b, _) in pairs {
        if graph.edge_count() >= target && graph.is_connected() {
            break;
        }
        join_if_free(graph, a, b, config.random_weight(rng))?;
    }

    let max_repairs = n * (n - 1);
    let mut repairs = 0;
    if !graph.is_connected() {
        tracing::debug!(vertices = n, "falling back to random connectivity repairs");
    }
    while !graph.is_connected() && repairs < max_repairs {
        repairs += 1;
        let a = vertices[rng.gen_range(0..n)].id;
        let b = vertices[rng.gen_range(0..n)].id;
        if a != b {
            join_if_free(graph, a, b, config.random_weight(rng))?;
        }
    }

    let connected = graph.is_connected();
    if !connected {
        tracing::warn!(vertices = n, edges = graph.edge_count(), "generated graph is not connected");
    }
    Ok(connected)
}

/// Join `a` and `b` unless they already are.
fn join_if_free(graph: &mut Graph, a: VertexId, b: VertexId, weight: f64) -> Result<(), GraphError> {
    match graph.add_edge(a, b, weight) {
        Ok(_) | Err(GraphError::DuplicateEdge(..)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Generate a graph with `n` vertices on the ring layout.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    if n == 0 || n > config.max_vertices {
        return Err(GenerateError::VertexCount {
            count: n,
            max: config.max_vertices,
        });
    }
    config.validate()?;

    let mut graph = Graph::new();
    for vertex in ring_layout(n, config, rng) {
        graph.add_vertex(vertex);
    }
    populate_edges(&mut graph, config, rng)?;
    Ok(graph)
}

/// Drop every edge and generate a fresh set on the existing vertex layout.
pub fn regenerate_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<bool, GenerateError> {
    graph.clear_edges();
    populate_edges(graph, config, rng)
}

/// Join a random pair of unjoined vertices with a random weight.
pub fn add_random_edge<R: Rng + ?Sized>(
    graph: &mut Graph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Edge, GenerateError> {
    config.validate()?;
    let n = graph.vertex_count();
    if n < 2 {
        return Err(GenerateError::TooFewVertices);
    }

    for _ in 0..config.random_edge_attempts {
        let a = graph.vertices()[rng.gen_range(0..n)].id;
        let b = graph.vertices()[rng.gen_range(0..n)].id;
        if a == b || graph.edge_between(a, b).is_some() {
            continue;
        }
        let weight = config.random_weight(rng);
        return Ok(*graph.add_edge(a, b, weight)?);
    }
    Err(GenerateError::NoFreePair(config.random_edge_attempts))
}
