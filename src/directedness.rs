use quickcheck::Arbitrary;

/// Whether the edges of a graph are one-way or mirrored.
///
/// Fixed when a graph is constructed.  In an undirected graph every inserted
/// edge is stored as two directed records, one per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Directedness {
    #[default]
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }

    /// Number of physical records a single inserted edge occupies.
    pub(crate) fn records_per_edge(self) -> usize {
        match self {
            Directedness::Directed => 1,
            Directedness::Undirected => 2,
        }
    }
}

impl From<bool> for Directedness {
    /// `true` means directed.
    fn from(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        bool::arbitrary(g).into()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Directedness::Directed => Box::new(std::iter::empty()),
            Directedness::Undirected => Box::new(std::iter::once(Directedness::Directed)),
        }
    }
}
