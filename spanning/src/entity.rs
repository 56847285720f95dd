use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a vertex. Unique within a [`Graph`](crate::graph::Graph).
pub type VertexId = u32;

/// A graph vertex.
///
/// Identity is the `id` alone: two vertices with the same id are equal and
/// hash identically regardless of position. `x`/`y` are layout metadata and
/// never influence spanning-tree results.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(id: VertexId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// A vertex with no meaningful position.
    pub fn at_origin(id: VertexId) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Vertex) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Unordered vertex pair, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub VertexId, pub VertexId);

impl EdgeKey {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    /// Whether `id` is one of the two endpoints.
    pub fn touches(&self, id: VertexId) -> bool {
        self.0 == id || self.1 == id
    }
}

/// An undirected weighted edge.
///
/// `source`/`destination` keep the order the edge was added in, but equality
/// and hashing only look at the unordered pair of endpoint ids, so
/// `Edge(a, b, w) == Edge(b, a, w')`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: f64,
    /// Caller-assigned annotation, see [`Graph::mark_spanning_tree`](crate::graph::Graph::mark_spanning_tree).
    #[cfg_attr(feature = "serde", serde(default))]
    pub in_spanning_tree: bool,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
            in_spanning_tree: false,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.id, self.destination.id)
    }

    /// The endpoint opposite `id`. Returns `None` if `id` is not an endpoint.
    pub fn other(&self, id: VertexId) -> Option<Vertex> {
        if self.source.id == id {
            Some(self.destination)
        } else if self.destination.id == id {
            Some(self.source)
        } else {
            None
        }
    }

    /// Ordering by `(weight, source.id, destination.id)`.
    ///
    /// Total over finite weights, and over the edges of one graph since no two
    /// edges share an endpoint pair.
    pub fn cmp_by_weight(&self, other: &Edge) -> std::cmp::Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.source.id.cmp(&other.source.id))
            .then(self.destination.id.cmp(&other.destination.id))
    }

    /// Ordering by `(source.id, destination.id)`, ignoring weight.
    pub fn cmp_by_endpoints(&self, other: &Edge) -> std::cmp::Ordering {
        self.source
            .id
            .cmp(&other.source.id)
            .then(self.destination.id.cmp(&other.destination.id))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
