use std::fmt::{Debug, Formatter};

use crate::{Graph, util::sort_pair};

struct EdgeTag(usize, usize, bool);

impl Debug for EdgeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.2 {
            write!(f, "{} -> {}", self.0, self.1)
        } else {
            let (v1, v2) = sort_pair(self.0, self.1);
            write!(f, "{} -- {}", v1, v2)
        }
    }
}

struct EdgeDebug<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> Debug for EdgeDebug<'a, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let directed = self.graph.is_directed();
        f.debug_map()
            .entries(
                self.graph
                    .edges()
                    .map(|edge| (EdgeTag(edge.source, edge.target, directed), edge.weight)),
            )
            .finish()
    }
}

/// Formats a graph for debug output as its directedness, vertex count, and a
/// map from edges to weights.  Parallel edges appear as repeated keys.
pub fn format_debug<G: Graph>(graph: &G, f: &mut Formatter<'_>, name: &str) -> std::fmt::Result {
    f.debug_struct(name)
        .field("directedness", &graph.directedness())
        .field("vertices", &graph.num_vertices())
        .field("edges", &EdgeDebug { graph })
        .finish()
}
