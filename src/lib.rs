//! Weighted, optionally directed graphs over a fixed set of vertices
//! `0..num_vertices`, with two interchangeable representations behind the
//! [`Graph`] and [`GraphMut`] traits: [`AdjacencyListGraph`] for sparse
//! graphs and [`AdjacencyMatrixGraph`] for dense ones.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod copier;
pub mod directedness;
pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod tracing_support;

#[doc(hidden)]
pub mod graph_test_support;

mod debug;
mod util;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use directedness::Directedness;
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use graph::{ABSENT_WEIGHT, Graph, GraphMut, Weight};

#[doc(hidden)]
pub use quickcheck;
