use std::fmt;

/// Directed labeled edge, owned by the outgoing set of its source node.
///
/// Two edges are the same edge only if both their destination and their label are equal,
/// therefore a source node can reach the same destination through several edges as long as
/// they are labeled differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<N, L> {
    destination: N,
    label: L,
}

impl<N, L> Edge<N, L> {
    pub const fn new(destination: N, label: L) -> Self {
        Self { destination, label }
    }

    /// Gets the node this edge points to.
    pub const fn destination(&self) -> &N {
        &self.destination
    }

    pub const fn label(&self) -> &L {
        &self.label
    }
}

impl<N: fmt::Display, L: fmt::Display> fmt::Display for Edge<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.destination, self.label)
    }
}
