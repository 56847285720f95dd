use std::collections::{HashMap, VecDeque};

use smallvec::SmallVec;

use crate::algo::SpanningTree;
use crate::entity::{Edge, EdgeKey, Vertex, VertexId};
use crate::error::GraphError;

type Incidence = SmallVec<[EdgeKey; 4]>;

/// Weighted undirected simple graph.
///
/// Vertices keep insertion order; the first one is where traversals start.
/// Edges are unique per unordered endpoint pair. An adjacency index
/// (vertex position → incident edge keys) is kept in step with the edge list
/// on every mutation.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    positions: HashMap<VertexId, usize>,
    adjacency: Vec<Incidence>,
    edges: Vec<Edge>,
    edge_slots: HashMap<EdgeKey, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `false` (and changes nothing) if its id is taken.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.positions.contains_key(&vertex.id) {
            return false;
        }
        self.positions.insert(vertex.id, self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(Incidence::new());
        true
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let pos = *self.positions.get(&id)?;

        let incident: Incidence = self.adjacency[pos].clone();
        for key in incident {
            self.take_edge(key);
        }

        self.positions.remove(&id);
        self.adjacency.remove(pos);
        let vertex = self.vertices.remove(pos);
        for (i, v) in self.vertices.iter().enumerate().skip(pos) {
            self.positions.insert(v.id, i);
        }
        Some(vertex)
    }

    /// Join `source` and `destination` with an edge of the given weight.
    ///
    /// Fails without modifying the graph if either endpoint is absent, the
    /// endpoints coincide, the pair is already joined (in either direction),
    /// or the weight is not finite.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<&Edge, GraphError> {
        let src_pos = self.index_of(source).ok_or(GraphError::MissingVertex(source))?;
        let dst_pos = self
            .index_of(destination)
            .ok_or(GraphError::MissingVertex(destination))?;
        if source == destination {
            return Err(GraphError::SelfLoop(source));
        }
        let key = EdgeKey::new(source, destination);
        if self.edge_slots.contains_key(&key) {
            return Err(GraphError::DuplicateEdge(source, destination));
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight(weight));
        }

        let edge = Edge::new(self.vertices[src_pos], self.vertices[dst_pos], weight);
        let slot = self.edges.len();
        self.edges.push(edge);
        self.edge_slots.insert(key, slot);
        self.adjacency[src_pos].push(key);
        self.adjacency[dst_pos].push(key);
        Ok(&self.edges[slot])
    }

    /// Remove the edge equal to `edge` (same unordered endpoint pair).
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        self.take_edge(edge.key()).is_some()
    }

    /// Remove the edge joining `a` and `b`, in either order.
    pub fn remove_edge_between(&mut self, a: VertexId, b: VertexId) -> Option<Edge> {
        self.take_edge(EdgeKey::new(a, b))
    }

    fn take_edge(&mut self, key: EdgeKey) -> Option<Edge> {
        let slot = self.edge_slots.remove(&key)?;
        let edge = self.edges.remove(slot);
        for (i, e) in self.edges.iter().enumerate().skip(slot) {
            self.edge_slots.insert(e.key(), i);
        }
        for id in [key.0, key.1] {
            if let Some(&pos) = self.positions.get(&id) {
                self.adjacency[pos].retain(|k| *k != key);
            }
        }
        Some(edge)
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.positions.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.edge_slots.clear();
    }

    /// Remove all edges, keeping the vertex layout.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.edge_slots.clear();
        for incidence in &mut self.adjacency {
            incidence.clear();
        }
    }

    /// Whether every vertex is reachable from the first one.
    ///
    /// Graphs with zero or one vertex are connected.
    pub fn is_connected(&self) -> bool {
        let n = self.vertices.len();
        if n <= 1 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0usize);
        let mut reached = 1;

        while let Some(pos) = queue.pop_front() {
            let current = self.vertices[pos].id;
            for key in &self.adjacency[pos] {
                let neighbor = if key.0 == current { key.1 } else { key.0 };
                let Some(&npos) = self.positions.get(&neighbor) else {
                    continue;
                };
                if !visited[npos] {
                    visited[npos] = true;
                    reached += 1;
                    queue.push_back(npos);
                }
            }
        }

        reached == n
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index_of(id).map(|pos| &self.vertices[pos])
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edge_slots
            .get(&EdgeKey::new(a, b))
            .map(|&slot| &self.edges[slot])
    }

    /// Edges touching `id`. Empty if the vertex is absent.
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        let keys: &[EdgeKey] = match self.index_of(id) {
            Some(pos) => self.adjacency[pos].as_slice(),
            None => &[],
        };
        keys.iter().map(move |key| &self.edges[self.edge_slots[key]])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Smallest id greater than every id in use; `1` for an empty graph.
    pub fn next_vertex_id(&self) -> VertexId {
        self.vertices.iter().map(|v| v.id).max().map_or(1, |id| id + 1)
    }

    /// Set each edge's `in_spanning_tree` flag to whether `tree` contains it.
    pub fn mark_spanning_tree(&mut self, tree: &SpanningTree) {
        for edge in &mut self.edges {
            edge.in_spanning_tree = tree.contains(edge);
        }
    }

    /// Reset every `in_spanning_tree` flag.
    pub fn clear_marks(&mut self) {
        for edge in &mut self.edges {
            edge.in_spanning_tree = false;
        }
    }

    /// Dense position of `id` in [`vertices`](Self::vertices).
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.positions.get(&id).copied()
    }
}
