use std::iter;

use crate::Distance;

/// Single step of a route: the node arrived at and the weight of the edge taken to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop<N> {
    pub node: N,
    pub weight: Distance,
}

/// Result of a shortest path query: the origin followed by an ordered sequence of hops.
///
/// A route from a node to itself has no hops and costs zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N> {
    start: N,
    hops: Vec<Hop<N>>,
    cost: Distance,
}

impl<N> Route<N> {
    /// Creates the route that never leaves the start node.
    pub const fn new(start: N) -> Self {
        Self {
            start,
            hops: vec![],
            cost: Distance::ZERO,
        }
    }

    pub fn from_hops(start: N, hops: Vec<Hop<N>>) -> Self {
        let cost = hops.iter().map(|hop| hop.weight).sum();
        Self { start, hops, cost }
    }

    pub const fn start(&self) -> &N {
        &self.start
    }

    /// Gets the last node of the route, which is the start node if the route has no hops.
    pub fn end(&self) -> &N {
        self.hops.last().map_or(&self.start, |hop| &hop.node)
    }

    pub fn hops(&self) -> &[Hop<N>] {
        &self.hops
    }

    /// Total cost of the route, that is the sum of all the hop weights.
    pub const fn cost(&self) -> Distance {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Gets an iterator over all the legs of the route.
    /// For each leg returns the node it leaves from, the node it arrives at, and its weight.
    pub fn legs(&self) -> impl Iterator<Item = (&N, &N, Distance)> {
        let departures = iter::once(&self.start).chain(self.hops.iter().map(|hop| &hop.node));

        departures
            .zip(&self.hops)
            .map(|(from, hop)| (from, &hop.node, hop.weight))
    }

    /// Gets an iterator over all the nodes of the route, start included.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        iter::once(&self.start).chain(self.hops.iter().map(|hop| &hop.node))
    }
}
