use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// A single mutation applied to a graph under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add(usize, usize, Weight),
    Remove(usize, usize),
}

impl Op {
    /// Applies the operation, discarding the result.  Out-of-range operations
    /// are expected to be rejected without effect.
    pub fn apply<G: GraphMut>(self, graph: &mut G) {
        let _ = match self {
            Op::Add(from, into, weight) => graph.add_edge(from, into, weight),
            Op::Remove(from, into) => graph.remove_edge(from, into),
        };
    }
}

/// A random graph shape plus a sequence of operations to build it.
///
/// Vertex indices are drawn from slightly beyond the vertex count so that
/// some operations are out of range, and weights are never zero.
#[derive(Clone, Debug)]
pub struct ArbOps {
    pub num_vertices: usize,
    pub directedness: Directedness,
    pub ops: Vec<Op>,
}

impl ArbOps {
    pub fn build<G: GraphMut>(&self) -> G {
        let mut graph = G::new(self.num_vertices, self.directedness);
        for op in &self.ops {
            op.apply(&mut graph);
        }
        graph
    }
}

pub fn arbitrary_vertex(g: &mut Gen, num_vertices: usize) -> usize {
    usize::arbitrary(g) % (num_vertices + 2)
}

pub fn arbitrary_weight(g: &mut Gen) -> Weight {
    match Weight::arbitrary(g) % 100 {
        0 => 1,
        weight => weight,
    }
}

impl Arbitrary for ArbOps {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12; // Limit size for testing
        let num_ops = usize::arbitrary(g) % 60;
        let ops = (0..num_ops)
            .map(|_| {
                let from = arbitrary_vertex(g, num_vertices);
                let into = arbitrary_vertex(g, num_vertices);
                // Bias towards insertions so graphs are not mostly empty.
                if u8::arbitrary(g) % 4 == 0 {
                    Op::Remove(from, into)
                } else {
                    Op::Add(from, into, arbitrary_weight(g))
                }
            })
            .collect();
        ArbOps {
            num_vertices,
            directedness: Directedness::arbitrary(g),
            ops,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let num_vertices = self.num_vertices;
        let directedness = self.directedness;
        let ops = self.ops.clone();
        Box::new((0..ops.len()).rev().map(move |i| {
            let mut ops = ops.clone();
            ops.remove(i);
            ArbOps {
                num_vertices,
                directedness,
                ops,
            }
        }))
    }
}

/// A graph built from random operations.
#[derive(Clone, Debug)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        ArbGraph {
            graph: ArbOps::arbitrary(g).build(),
        }
    }
}

/// Every ordered pair of valid vertices in `graph`.
pub fn vertex_pairs<G: Graph>(graph: &G) -> impl Iterator<Item = (usize, usize)> + '_ {
    graph
        .vertices()
        .flat_map(move |from| graph.vertices().map(move |into| (from, into)))
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<G: Graph + Debug>(graph: &G) {
    let mut degree_sum = 0;
    for vertex in graph.vertices() {
        let degree = graph.degree(vertex).unwrap();
        let neighbors: Vec<_> = graph.neighbors(vertex).unwrap().collect();
        if graph.is_directed() {
            assert_eq!(degree, neighbors.len(), "{:?}", graph);
        }
        for &neighbor in &neighbors {
            assert_eq!(graph.has_edge(vertex, neighbor), Ok(true), "{:?}", graph);
        }
        degree_sum += degree;
    }
    assert_eq!(degree_sum, graph.num_edges(), "{:?}", graph);

    for (from, into) in vertex_pairs(graph) {
        let weight = graph.edge_weight(from, into).unwrap();
        assert_eq!(graph.has_edge(from, into), Ok(weight.is_some()));
        assert_eq!(
            graph.weight_or_absent(from, into),
            weight.unwrap_or(ABSENT_WEIGHT)
        );
        if !graph.is_directed() {
            assert_eq!(graph.edge_weight(into, from), Ok(weight), "{:?}", graph);
        }
    }

    let records_per_edge = if graph.is_directed() { 1 } else { 2 };
    assert_eq!(
        graph.edges().count() * records_per_edge,
        graph.num_edges(),
        "{:?}",
        graph
    );
}

/// A random graph together with one in-range vertex pair and a nonzero
/// weight to probe it with.  The pair is meaningless when the graph has no
/// vertices.
#[derive(Clone, Debug)]
pub struct ArbProbe<G> {
    pub graph: G,
    pub from: usize,
    pub into: usize,
    pub weight: Weight,
}

impl<G> Arbitrary for ArbProbe<G>
where
    G: GraphMut + Clone + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let graph: G = ArbOps::arbitrary(g).build();
        let num_vertices = graph.num_vertices().max(1);
        ArbProbe {
            from: usize::arbitrary(g) % num_vertices,
            into: usize::arbitrary(g) % num_vertices,
            weight: arbitrary_weight(g),
            graph,
        }
    }
}
