//! `Graph` and `GraphMut` are the core traits of this library.  `Graph`
//! provides read-only queries over the edge structure, while `GraphMut`
//! extends it with construction and edge mutation.
//!
//! Vertices are the dense indices `0..num_vertices()`, fixed when the graph
//! is created.  Every operation that takes a vertex index validates it first
//! and returns [`GraphError::VertexOutOfRange`] without touching the graph
//! when it is not in range.
//!
//! The traits are implemented by:
//!
//! - [`AdjacencyListGraph`](crate::AdjacencyListGraph): per-vertex edge
//!   records in insertion order.  Cheap to insert, compact for sparse graphs.
//! - [`AdjacencyMatrixGraph`](crate::AdjacencyMatrixGraph): a dense grid of
//!   weights.  Constant time lookups at quadratic space.
//!
//! Code written against these traits behaves the same on either
//! representation, with two documented exceptions: a zero weight is treated
//! as "no edge" by the matrix, and re-adding an existing edge appends a
//! parallel record to a list but overwrites the matrix cell.

use crate::{
    copier,
    directedness::Directedness,
    edge::Edge,
    error::{GraphError, Result},
    tracing_support::warn,
};

/// Edge weights are opaque integer labels.
pub type Weight = i32;

/// Value returned by [`Graph::weight_or_absent`] when there is no edge.
///
/// Zero is used because a matrix cell holding zero already means "no edge",
/// so it is the one value that can never be the weight of a stored edge in
/// both representations.
pub const ABSENT_WEIGHT: Weight = 0;

/// A weighted, optionally directed graph over the vertices `0..num_vertices()`.
pub trait Graph: Sized {
    fn directedness(&self) -> Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Gets the number of vertices, fixed since construction.
    fn num_vertices(&self) -> usize;

    /// Gets the number of physical edge records.  Every edge of an undirected
    /// graph, self-loops included, is stored as two records and counts twice.
    fn num_edges(&self) -> usize;

    /// Gets an iterator over all vertex indices.
    fn vertices(&self) -> impl Iterator<Item = usize> {
        0..self.num_vertices()
    }

    /// Checks that `vertex` is a valid index in this graph.
    fn check_valid_vertex(&self, vertex: usize) -> Result<()> {
        let num_vertices = self.num_vertices();
        if vertex < num_vertices {
            Ok(())
        } else {
            warn!(vertex, num_vertices, "vertex out of range");
            Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices,
            })
        }
    }

    /// Checks that both ends of a would-be edge are valid indices.
    fn check_valid_edge(&self, from: usize, into: usize) -> Result<()> {
        self.check_valid_vertex(from)?;
        self.check_valid_vertex(into)
    }

    /// Checks whether an edge from `from` to `into` exists.
    fn has_edge(&self, from: usize, into: usize) -> Result<bool> {
        Ok(self.edge_weight(from, into)?.is_some())
    }

    /// Gets the weight of the edge from `from` to `into`, or `None` if there
    /// is no such edge.  When parallel edges exist, this is the weight of the
    /// earliest one still present.
    fn edge_weight(&self, from: usize, into: usize) -> Result<Option<Weight>>;

    /// Like [`Self::edge_weight`], but reports both a missing edge and an
    /// invalid vertex as [`ABSENT_WEIGHT`].
    fn weight_or_absent(&self, from: usize, into: usize) -> Weight {
        self.edge_weight(from, into)
            .ok()
            .flatten()
            .unwrap_or(ABSENT_WEIGHT)
    }

    /// Gets an iterator over the edge records leaving `from`.  For undirected
    /// graphs this includes the mirrored records, so every incident edge
    /// appears with `from` as its source.
    fn edges_from(&self, from: usize) -> Result<impl Iterator<Item = Edge> + '_>;

    /// Gets an iterator over the vertices `w` such that an edge `vertex -> w`
    /// exists.  The order is representation specific: insertion order for
    /// lists, ascending for matrices.
    fn neighbors(&self, vertex: usize) -> Result<impl Iterator<Item = usize> + '_> {
        Ok(self.edges_from(vertex)?.map(|edge| edge.target))
    }

    /// Gets the degree of a vertex.  For directed graphs this is the
    /// out-degree.  For undirected graphs it is the number of edge ends at
    /// the vertex, so a self-loop counts twice and the degrees of all
    /// vertices sum to [`Self::num_edges`].
    fn degree(&self, vertex: usize) -> Result<usize>;

    /// Gets an iterator over every logical edge exactly once.  For undirected
    /// graphs each edge is reported with `source <= target`.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;
}

pub trait GraphMut: Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    fn new(num_vertices: usize, directedness: impl Into<Directedness>) -> Self;

    /// Creates a graph with the same vertices and edges as `source`.
    fn from_graph<G: Graph>(source: &G) -> Self {
        let mut graph = Self::new(source.num_vertices(), source.directedness());
        // Both graphs have the same vertex count, so no edge can be rejected.
        let _ = copier::copy_into(source, &mut graph);
        graph
    }

    /// Adds an edge from `from` to `into`, and from `into` to `from` as well if
    /// the graph is undirected.  Parallel edges and self-loops are allowed.
    ///
    /// Returns the weight of an existing edge this call replaced, which only
    /// happens for representations that cannot hold parallel edges.
    fn add_edge(&mut self, from: usize, into: usize, weight: Weight) -> Result<Option<Weight>>;

    /// Removes one edge from `from` to `into` (and its mirror if undirected),
    /// returning its weight, or `None` if there was no such edge.
    fn remove_edge(&mut self, from: usize, into: usize) -> Result<Option<Weight>>;
}
