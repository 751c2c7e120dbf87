use crate::{
    edge::Edge,
    error::Result,
    graph::{Graph, GraphMut},
    tracing_support::trace,
};

/// Copies every logical edge of `source` into `target`, returning the number
/// of edges added to `target`.
///
/// `target` keeps its own directedness.  Copying a directed graph into an
/// undirected one mirrors every edge, so edges in both directions between
/// the same pair of vertices become parallel edges (or a single overwritten
/// cell, for a matrix).  Copying an undirected graph into a directed one adds
/// both directions of every edge except self-loops.
///
/// All edges are checked against `target`'s vertex count before any is
/// added, so on error `target` is unchanged.
pub fn copy_into<S, T>(source: &S, target: &mut T) -> Result<usize>
where
    S: Graph,
    T: GraphMut,
{
    let split_undirected = !source.is_directed() && target.is_directed();
    let edges: Vec<Edge> = source
        .edges()
        .flat_map(|edge| {
            let reverse = (split_undirected && !edge.is_self_loop())
                .then(|| Edge::new(edge.target, edge.source, edge.weight));
            std::iter::once(edge).chain(reverse)
        })
        .collect();
    for edge in &edges {
        target.check_valid_edge(edge.source, edge.target)?;
    }
    for edge in &edges {
        target.add_edge(edge.source, edge.target, edge.weight)?;
    }
    let count = edges.len();
    trace!(count, "copied edges");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AdjacencyListGraph, AdjacencyMatrixGraph, Directedness, GraphError,
        tracing_support::init_tracing,
    };

    #[test]
    fn test_list_to_matrix() {
        init_tracing();
        let mut list = AdjacencyListGraph::new(4, Directedness::Undirected);
        list.add_edge(0, 1, 3).unwrap();
        list.add_edge(2, 2, 4).unwrap();
        list.add_edge(3, 1, 5).unwrap();

        let matrix = AdjacencyMatrixGraph::from_graph(&list);
        assert_eq!(matrix.num_vertices(), 4);
        assert!(!matrix.is_directed());
        assert_eq!(matrix.num_edges(), list.num_edges());
        assert_eq!(matrix.edge_weight(1, 0), Ok(Some(3)));
        assert_eq!(matrix.edge_weight(2, 2), Ok(Some(4)));
        assert_eq!(matrix.edge_weight(1, 3), Ok(Some(5)));
        for v in list.vertices() {
            assert_eq!(matrix.degree(v), list.degree(v));
        }
    }

    #[test]
    fn test_directed_into_undirected_mirrors() {
        let mut source = AdjacencyMatrixGraph::new(3, true);
        source.add_edge(0, 2, 9).unwrap();

        let mut target = AdjacencyListGraph::new(3, false);
        assert_eq!(copy_into(&source, &mut target), Ok(1));
        assert_eq!(target.has_edge(2, 0), Ok(true));
        assert_eq!(target.num_edges(), 2);
    }

    #[test]
    fn test_undirected_into_directed_keeps_both_directions() {
        let mut source = AdjacencyListGraph::new(3, false);
        source.add_edge(2, 0, 7).unwrap();
        source.add_edge(1, 1, 4).unwrap();

        let mut target = AdjacencyMatrixGraph::new(3, true);
        assert_eq!(copy_into(&source, &mut target), Ok(3));
        assert_eq!(target.edge_weight(2, 0), Ok(Some(7)));
        assert_eq!(target.edge_weight(0, 2), Ok(Some(7)));
        assert_eq!(target.edge_weight(1, 1), Ok(Some(4)));
        assert_eq!(target.num_edges(), 3);
        for (from, into) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(target.has_edge(from, into), Ok(false));
        }
    }

    #[test]
    fn test_copy_into_smaller_graph_is_rejected() {
        let mut source = AdjacencyListGraph::new(5, true);
        source.add_edge(0, 1, 1).unwrap();
        source.add_edge(1, 4, 1).unwrap();

        let mut target = AdjacencyMatrixGraph::new(3, true);
        assert_eq!(
            copy_into(&source, &mut target),
            Err(GraphError::VertexOutOfRange {
                vertex: 4,
                num_vertices: 3
            })
        );
        assert_eq!(target.num_edges(), 0);
        assert_eq!(target.has_edge(0, 1), Ok(false));
    }
}
