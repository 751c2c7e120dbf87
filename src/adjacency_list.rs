use std::fmt::{Debug, Display, Formatter};

use crate::{
    debug::format_debug,
    directedness::Directedness,
    edge::Edge,
    error::Result,
    graph::{Graph, GraphMut, Weight},
    tracing_support::trace,
};

/// One directed edge record, owned by the sequence of its source vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EdgeRecord {
    target: usize,
    weight: Weight,
}

/// A graph that stores, for each vertex, the records of its outgoing edges in
/// insertion order.
///
/// Adding an edge is amortized O(1); lookups and removals scan the source
/// vertex's records.  Space is O(V + E), which suits sparse graphs.
///
/// In an undirected graph each edge is stored as two independent records, one
/// in the sequence of each endpoint (both in the same sequence for a
/// self-loop).  Adding an edge that already exists adds a parallel edge.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph {
    adjacency: Vec<Vec<EdgeRecord>>,
    directedness: Directedness,
    num_edges: usize,
}

impl AdjacencyListGraph {
    fn first_record(&self, from: usize, into: usize) -> Option<&EdgeRecord> {
        self.adjacency[from]
            .iter()
            .find(|record| record.target == into)
    }

    /// Removes the earliest record from `from` to `into`, if any.
    fn remove_record(&mut self, from: usize, into: usize) -> Option<Weight> {
        let records = &mut self.adjacency[from];
        let position = records.iter().position(|record| record.target == into)?;
        self.num_edges -= 1;
        Some(records.remove(position).weight)
    }
}

impl Graph for AdjacencyListGraph {
    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn has_edge(&self, from: usize, into: usize) -> Result<bool> {
        self.check_valid_edge(from, into)?;
        Ok(self.first_record(from, into).is_some())
    }

    fn edge_weight(&self, from: usize, into: usize) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        Ok(self.first_record(from, into).map(|record| record.weight))
    }

    fn edges_from(&self, from: usize) -> Result<impl Iterator<Item = Edge> + '_> {
        self.check_valid_vertex(from)?;
        Ok(self.adjacency[from]
            .iter()
            .map(move |record| Edge::new(from, record.target, record.weight)))
    }

    fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_valid_vertex(vertex)?;
        // Undirected edges leave one record at each end, and a self-loop two
        // at its vertex, so the record count is the degree either way.
        Ok(self.adjacency[vertex].len())
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.is_directed();
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(source, records)| {
                // The two records of an undirected self-loop sit in the same
                // sequence; report every other one.
                let mut pending_mirror = false;
                records.iter().filter_map(move |record| {
                    if !directed {
                        if record.target < source {
                            return None;
                        }
                        if record.target == source {
                            pending_mirror = !pending_mirror;
                            if !pending_mirror {
                                return None;
                            }
                        }
                    }
                    Some(Edge::new(source, record.target, record.weight))
                })
            })
    }
}

impl GraphMut for AdjacencyListGraph {
    fn new(num_vertices: usize, directedness: impl Into<Directedness>) -> Self {
        AdjacencyListGraph {
            adjacency: vec![Vec::new(); num_vertices],
            directedness: directedness.into(),
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, from: usize, into: usize, weight: Weight) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        self.adjacency[from].push(EdgeRecord {
            target: into,
            weight,
        });
        if !self.is_directed() {
            self.adjacency[into].push(EdgeRecord {
                target: from,
                weight,
            });
        }
        self.num_edges += self.directedness.records_per_edge();
        trace!(from, into, weight, "added edge");
        Ok(None)
    }

    fn remove_edge(&mut self, from: usize, into: usize) -> Result<Option<Weight>> {
        self.check_valid_edge(from, into)?;
        let Some(weight) = self.remove_record(from, into) else {
            return Ok(None);
        };
        if !self.is_directed() {
            let mirror = self.remove_record(into, from);
            debug_assert_eq!(mirror, Some(weight));
        }
        trace!(from, into, weight, "removed edge");
        Ok(Some(weight))
    }
}

impl Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyListGraph")
    }
}

impl Display for AdjacencyListGraph {
    /// Lists each vertex followed by its records as `target(weight)`, with the
    /// weight left out when it is zero.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.num_vertices(),
            self.num_edges
        )?;
        for (vertex, records) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", vertex)?;
            for record in records {
                if record.weight != 0 {
                    write!(f, " {}({})", record.target, record.weight)?;
                } else {
                    write!(f, " {}", record.target)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
