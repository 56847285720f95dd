use thiserror::Error;

use crate::entity::VertexId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    MissingVertex(VertexId),

    #[error("an edge between vertices {0} and {1} already exists")]
    DuplicateEdge(VertexId, VertexId),

    #[error("edge endpoints must differ, got {0} twice")]
    SelfLoop(VertexId),

    #[error("edge weight {0} is not a finite number")]
    NonFiniteWeight(f64),
}
