use std::fmt::{Debug, Formatter};

use crate::graph::Weight;

/// A logical edge as reported by [`Graph::edges`](crate::Graph::edges).
///
/// For undirected graphs `source <= target`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn ends(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.source, self.target, self.weight)
    }
}
