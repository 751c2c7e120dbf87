pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_matrix::AdjacencyMatrixGraph;
pub use crate::directedness::Directedness;
pub use crate::edge::Edge;
pub use crate::error::GraphError;
pub use crate::graph::{ABSENT_WEIGHT, Graph, GraphMut, Weight};
