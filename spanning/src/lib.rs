pub mod error;
pub mod entity;
pub mod graph;
pub mod unionfind;
pub mod algo;
pub mod report;
pub mod generate;

pub use algo::{Algorithm, SpanningTree};
pub use entity::{Edge, EdgeKey, Vertex, VertexId};
pub use error::GraphError;
pub use graph::Graph;
