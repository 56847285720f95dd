use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spanning::generate::{self, GeneratorConfig};
use spanning::{Graph, Vertex, VertexId};

/// An edge given on the command line as `A-B:W`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeArg {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: f64,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("expected A-B:W, got '{s}'");
        let (pair, weight) = s.split_once(':').ok_or_else(malformed)?;
        let (a, b) = pair.split_once('-').ok_or_else(malformed)?;
        Ok(Self {
            source: a.trim().parse().map_err(|_| malformed())?,
            destination: b.trim().parse().map_err(|_| malformed())?,
            weight: weight.trim().parse().map_err(|_| malformed())?,
        })
    }
}

impl fmt::Display for EdgeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.source, self.destination, self.weight)
    }
}

/// A positioned vertex given as `ID@X,Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexArg {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl FromStr for VertexArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("expected ID@X,Y, got '{s}'");
        let (id, coords) = s.split_once('@').ok_or_else(malformed)?;
        let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
        Ok(Self {
            id: id.trim().parse().map_err(|_| malformed())?,
            x: x.trim().parse().map_err(|_| malformed())?,
            y: y.trim().parse().map_err(|_| malformed())?,
        })
    }
}

/// Graph source options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Edge between two vertices, as A-B:W. Missing endpoints are created at
    /// the origin.
    #[arg(long = "edge", value_name = "A-B:W")]
    pub edges: Vec<EdgeArg>,

    /// Vertex with a position, as ID@X,Y.
    #[arg(long = "vertex", value_name = "ID@X,Y")]
    pub vertices: Vec<VertexArg>,

    /// Generate a random graph with N vertices instead.
    #[arg(long, value_name = "N", conflicts_with_all = ["edges", "vertices"])]
    pub generate: Option<usize>,

    /// Seed for --generate.
    #[arg(long, requires = "generate")]
    pub seed: Option<u64>,

    /// TOML generator config for --generate.
    #[arg(long, value_name = "FILE", requires = "generate")]
    pub config: Option<PathBuf>,

    /// Accept a disconnected graph and report its spanning forest.
    #[arg(long)]
    pub allow_forest: bool,
}

impl GraphArgs {
    pub fn build(&self) -> Result<Graph> {
        if let Some(n) = self.generate {
            let config = self.generator_config()?;
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let graph = generate::generate(n, &config, &mut rng)
                .with_context(|| format!("failed to generate a graph with {n} vertices"))?;
            tracing::info!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                seed = ?self.seed,
                "generated graph"
            );
            return Ok(graph);
        }

        let mut graph = Graph::new();
        for v in &self.vertices {
            if !graph.add_vertex(Vertex::new(v.id, v.x, v.y)) {
                bail!("vertex {} given more than once", v.id);
            }
        }
        for e in &self.edges {
            for id in [e.source, e.destination] {
                if !graph.contains_vertex(id) {
                    graph.add_vertex(Vertex::at_origin(id));
                }
            }
            graph
                .add_edge(e.source, e.destination, e.weight)
                .with_context(|| format!("invalid edge {e}"))?;
        }
        Ok(graph)
    }

    fn generator_config(&self) -> Result<GeneratorConfig> {
        match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?;
                GeneratorConfig::from_toml(&text)
                    .with_context(|| format!("invalid config: {}", path.display()))
            }
            None => Ok(GeneratorConfig::default()),
        }
    }

    /// Refuse graphs that have no spanning tree to report.
    pub fn check_solvable(&self, graph: &Graph) -> Result<()> {
        if graph.vertex_count() < 2 {
            bail!(
                "graph needs at least 2 vertices, got {}",
                graph.vertex_count()
            );
        }
        if !self.allow_forest && !graph.is_connected() {
            bail!("graph is disconnected so no spanning tree exists (use --allow-forest)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(edges: &[&str]) -> GraphArgs {
        GraphArgs {
            edges: edges.iter().map(|e| e.parse().unwrap()).collect(),
            vertices: Vec::new(),
            generate: None,
            seed: None,
            config: None,
            allow_forest: false,
        }
    }

    #[test]
    fn parse_edge() {
        let e: EdgeArg = "1-2:3.5".parse().unwrap();
        assert_eq!(
            e,
            EdgeArg {
                source: 1,
                destination: 2,
                weight: 3.5
            }
        );
        let neg: EdgeArg = "4-7:-2".parse().unwrap();
        assert_eq!(neg.weight, -2.0);
        assert!("1-2".parse::<EdgeArg>().is_err());
        assert!("1:2".parse::<EdgeArg>().is_err());
        assert!("a-2:1".parse::<EdgeArg>().is_err());
    }

    #[test]
    fn parse_vertex() {
        let v: VertexArg = "3@10.5,-4".parse().unwrap();
        assert_eq!((v.id, v.x, v.y), (3, 10.5, -4.0));
        assert!("3@10".parse::<VertexArg>().is_err());
        assert!("10,4".parse::<VertexArg>().is_err());
    }

    #[test]
    fn build_creates_implied_vertices() {
        let graph = args(&["1-2:1", "2-3:2"]).build().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_connected());
    }

    #[test]
    fn build_keeps_explicit_positions() {
        let mut a = args(&["1-2:1"]);
        a.vertices = vec!["1@5,6".parse().unwrap()];
        let graph = a.build().unwrap();
        let v = graph.vertex(1).unwrap();
        assert_eq!((v.x, v.y), (5.0, 6.0));
        assert_eq!(graph.vertices()[0].id, 1);
    }

    #[test]
    fn build_rejects_bad_edges() {
        assert!(args(&["1-1:1"]).build().is_err());
        assert!(args(&["1-2:1", "2-1:4"]).build().is_err());
        assert!(args(&["1-2:inf"]).build().is_err());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = args(&[]);
        a.generate = Some(12);
        a.seed = Some(7);
        let g1 = a.build().unwrap();
        let g2 = a.build().unwrap();
        let weights = |g: &Graph| -> Vec<_> { g.edges().iter().map(|e| (e.key(), e.weight)).collect() };
        assert_eq!(weights(&g1), weights(&g2));
    }

    #[test]
    fn solvable_checks() {
        let a = args(&["1-2:1", "3-4:1"]);
        let graph = a.build().unwrap();
        assert!(a.check_solvable(&graph).is_err());
        let mut forest = args(&["1-2:1", "3-4:1"]);
        forest.allow_forest = true;
        assert!(forest.check_solvable(&graph).is_ok());
        assert!(a.check_solvable(&Graph::new()).is_err());
    }
}
