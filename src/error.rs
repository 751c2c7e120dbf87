/// Errors reported by graph operations.
///
/// Every operation checks its vertex arguments before touching the graph, so
/// an `Err` always means the graph was left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
