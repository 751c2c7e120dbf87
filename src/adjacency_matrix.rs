use std::fmt::{Debug, Display, Formatter};

use crate::{
    debug::format_debug,
    directedness::Directedness,
    edge::Edge,
    error::Result,
    graph::{ABSENT_WEIGHT, Graph, GraphMut, Weight},
    tracing_support::trace,
};

/// A graph that stores a dense `V x V` grid of weights, where a zero cell
/// means there is no edge.
///
/// Lookups, insertions, and removals index the grid directly; neighbor and
/// degree queries scan a row.  Space is O(V²) regardless of the number of
/// edges, which suits dense graphs.
///
/// Each ordered pair of vertices holds at most one edge: adding an edge that
/// already exists overwrites its weight, and adding an edge with weight zero
/// clears the cell.  In an undirected graph the grid is kept symmetric.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph {
    /// Row-major cells; the cell for `(row, col)` is at `row * size + col`.
    cells: Vec<Weight>,
    size: usize,
    directedness: Directedness,
    num_edges: usize,
}

impl AdjacencyMatrixGraph {
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn cell(&self, row: usize, col: usize) -> Weight {
        self.cells[self.index(row, col)]
    }

    fn row(&self, row: usize) -> &[Weight] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.size]
    }

    /// Writes `weight` to the cell at `(from, into)` and to its mirror if the
    /// graph is undirected, keeping the edge count in step.  Returns the old
    /// weight.
    fn write(&mut self, from: usize, into: usize, weight: Weight) -> Weight {
        let index = self.index(from, into);
        let old = std::mem::replace(&mut self.cells[index], weight);
        if !self.is_directed() {
            let mirror = self.index(into, from);
            self.cells[mirror] = weight;
        }
        let records = self.directedness.records_per_edge();
        match (old != ABSENT_WEIGHT, weight != ABSENT_WEIGHT) {
            (false, true) => self.num_edges += records,
            (true, false) => self.num_edges -= records,
            _ => {}
        }
        old
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn num_vertices(&self) -> usize {
        self.size
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn edge_weight(&self, from: usize, into: usize) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        let weight = self.cell(from, into);
        Ok((weight != ABSENT_WEIGHT).then_some(weight))
    }

    fn edges_from(&self, from: usize) -> Result<impl Iterator<Item = Edge> + '_> {
        self.check_valid_vertex(from)?;
        Ok(self
            .row(from)
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != ABSENT_WEIGHT)
            .map(move |(into, &weight)| Edge::new(from, into, weight)))
    }

    fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_valid_vertex(vertex)?;
        let out_degree = self
            .row(vertex)
            .iter()
            .filter(|&&weight| weight != ABSENT_WEIGHT)
            .count();
        // A self-loop has both of its ends at this vertex but only one cell.
        let self_loop = !self.is_directed() && self.cell(vertex, vertex) != ABSENT_WEIGHT;
        Ok(out_degree + usize::from(self_loop))
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.is_directed();
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != ABSENT_WEIGHT)
            .map(move |(index, &weight)| Edge::new(index / size, index % size, weight))
            .filter(move |edge| directed || edge.source <= edge.target)
    }
}

impl GraphMut for AdjacencyMatrixGraph {
    fn new(num_vertices: usize, directedness: impl Into<Directedness>) -> Self {
        let num_cells = num_vertices
            .checked_mul(num_vertices)
            .expect("matrix size overflows usize");
        AdjacencyMatrixGraph {
            cells: vec![ABSENT_WEIGHT; num_cells],
            size: num_vertices,
            directedness: directedness.into(),
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, from: usize, into: usize, weight: Weight) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        let old = self.write(from, into, weight);
        trace!(from, into, weight, "set edge");
        Ok((old != ABSENT_WEIGHT).then_some(old))
    }

    fn remove_edge(&mut self, from: usize, into: usize) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        let old = self.write(from, into, ABSENT_WEIGHT);
        if old == ABSENT_WEIGHT {
            return Ok(None);
        }
        trace!(from, into, weight = old, "removed edge");
        Ok(Some(old))
    }
}

impl Debug for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyMatrixGraph")
    }
}

impl Display for AdjacencyMatrixGraph {
    /// Prints the full grid, one row per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Adjacency matrix:")?;
        for row in 0..self.size {
            write!(f, "{}:", row)?;
            for weight in self.row(row) {
                write!(f, " {}", weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphError, tracing_support::init_tracing};

    #[test]
    fn test_directed_scenario() {
        init_tracing();
        let mut graph = AdjacencyMatrixGraph::new(3, true);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, 3).unwrap();

        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.neighbors(0).unwrap().collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.edge_weight(1, 2), Ok(Some(3)));
        assert_eq!(graph.has_edge(2, 1), Ok(false));
    }

    #[test]
    fn test_undirected_scenario() {
        init_tracing();
        let mut graph = AdjacencyMatrixGraph::new(4, false);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        assert_eq!(graph.remove_edge(0, 1), Ok(Some(1)));

        assert_eq!(graph.has_edge(0, 1), Ok(false));
        assert_eq!(graph.has_edge(1, 0), Ok(false));
        assert_eq!(graph.has_edge(0, 2), Ok(true));
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_neighbors_are_ascending() {
        let mut graph = AdjacencyMatrixGraph::new(5, true);
        graph.add_edge(2, 4, 1).unwrap();
        graph.add_edge(2, 0, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        assert_eq!(
            graph.neighbors(2).unwrap().collect::<Vec<_>>(),
            vec![0, 3, 4]
        );
    }

    #[test]
    fn test_readding_overwrites() {
        let mut graph = AdjacencyMatrixGraph::new(2, false);
        assert_eq!(graph.add_edge(0, 1, 5), Ok(None));
        assert_eq!(graph.add_edge(1, 0, 6), Ok(Some(5)));
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edge_weight(0, 1), Ok(Some(6)));
    }

    #[test]
    fn test_remove_missing_edge_keeps_count() {
        let mut graph = AdjacencyMatrixGraph::new(3, true);
        graph.add_edge(0, 1, 2).unwrap();
        assert_eq!(graph.remove_edge(1, 0), Ok(None));
        assert_eq!(graph.remove_edge(2, 2), Ok(None));
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_zero_weight_clears_cell() {
        let mut graph = AdjacencyMatrixGraph::new(2, true);
        graph.add_edge(0, 1, 0).unwrap();
        assert_eq!(graph.has_edge(0, 1), Ok(false));
        assert_eq!(graph.num_edges(), 0);

        graph.add_edge(0, 1, 3).unwrap();
        assert_eq!(graph.add_edge(0, 1, 0), Ok(Some(3)));
        assert_eq!(graph.has_edge(0, 1), Ok(false));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = AdjacencyMatrixGraph::new(2, false);
        graph.add_edge(1, 1, 8).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.degree(1), Ok(2));
        assert_eq!(graph.neighbors(1).unwrap().collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new(1, 1, 8)]);

        assert_eq!(graph.remove_edge(1, 1), Ok(Some(8)));
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.degree(1), Ok(0));
    }

    #[test]
    fn test_out_of_range() {
        init_tracing();
        let mut graph = AdjacencyMatrixGraph::new(3, true);
        graph.add_edge(0, 1, 4).unwrap();
        let before = graph.clone();
        let err = GraphError::VertexOutOfRange {
            vertex: 5,
            num_vertices: 3,
        };

        assert_eq!(graph.add_edge(5, 0, 1), Err(err));
        assert_eq!(graph.remove_edge(0, 5), Err(err));
        assert_eq!(graph.has_edge(5, 5), Err(err));
        assert_eq!(graph.edge_weight(1, 5), Err(err));
        assert_eq!(graph.degree(5), Err(err));
        assert!(graph.neighbors(5).is_err());
        assert_eq!(graph.weight_or_absent(5, 0), crate::ABSENT_WEIGHT);
        assert_eq!(graph, before);
    }

    #[test]
    fn test_degree() {
        let mut directed = AdjacencyMatrixGraph::new(3, true);
        directed.add_edge(0, 1, 1).unwrap();
        directed.add_edge(0, 2, 1).unwrap();
        directed.add_edge(2, 0, 1).unwrap();
        assert_eq!(directed.degree(0), Ok(2));
        assert_eq!(directed.degree(1), Ok(0));
        assert_eq!(directed.degree(2), Ok(1));

        let mut undirected = AdjacencyMatrixGraph::new(3, false);
        undirected.add_edge(0, 1, 1).unwrap();
        undirected.add_edge(0, 2, 1).unwrap();
        assert_eq!(undirected.degree(0), Ok(2));
        assert_eq!(undirected.degree(1), Ok(1));
        assert_eq!(undirected.degree(2), Ok(1));
    }

    #[test]
    #[should_panic(expected = "matrix size overflows usize")]
    fn test_oversized_matrix_panics_at_construction() {
        AdjacencyMatrixGraph::new(usize::MAX, true);
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyMatrixGraph::new(0, false);
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.has_edge(0, 0).is_err());
    }

    #[test]
    fn test_display() {
        let mut graph = AdjacencyMatrixGraph::new(3, true);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(2, 0, -2).unwrap();
        let expected = "Adjacency matrix:\n0: 0 5 0\n1: 0 0 0\n2: -2 0 0\n";
        assert_eq!(graph.to_string(), expected);
    }
}
