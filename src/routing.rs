use std::cmp::Reverse;
use std::fmt::Debug;
use std::hash::Hash;

use radix_heap::RadixHeapMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::{Distance, GraphError, LabeledGraph};

mod route;

pub use route::{Hop, Route};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortestPathConfig {
    /// Routes that cost more than this are never explored.
    pub max_cost: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_cost: Distance::MAX,
        }
    }
}

/// Candidate route step stored in the search arena.
/// Following the parent indices walks the candidate back to the start node.
#[derive(Debug, Clone)]
struct HopRecord<N> {
    node: N,
    weight: Distance,
    parent: Option<usize>,
}

/// Computes a minimum cost route from start to end with the default configuration.
/// See [`shortest_path_with`].
pub fn shortest_path<N>(
    graph: &LabeledGraph<N, Distance>,
    start: &N,
    end: &N,
) -> Result<Option<Route<N>>, GraphError<N, Distance>>
where
    N: Debug + Clone + Eq + Hash,
{
    shortest_path_with(&ShortestPathConfig::default(), graph, start, end)
}

/// Computes a minimum cost route from start to end, where the cost of a route is the sum of the
/// distances labeling its edges.
///
/// Returns `Ok(None)` if end cannot be reached from start, and a route without hops if start and
/// end are the same node. Fails if either start or end doesn't belong to the graph.
///
/// When several routes share the minimum cost any of them can be returned.
///
/// All the distances reachable from start must be non-negative, the search frontier is a
/// monotone priority queue and panics if a negative distance is relaxed. Infinite distances, and
/// routes whose cost overflows to infinity, are still reported as routes of infinite cost.
pub fn shortest_path_with<N>(
    config: &ShortestPathConfig,
    graph: &LabeledGraph<N, Distance>,
    start: &N,
    end: &N,
) -> Result<Option<Route<N>>, GraphError<N, Distance>>
where
    N: Debug + Clone + Eq + Hash,
{
    graph.ensure_node(start)?;
    graph.ensure_node(end)?;

    debug!("Computing shortest path {start:?} -> {end:?} with {config:?}");

    if start == end {
        return Ok(Some(Route::new(start.clone())));
    }

    // every candidate route ever discovered, the start node is at index 0
    let mut arena = vec![HopRecord {
        node: start.clone(),
        weight: Distance::ZERO,
        parent: None,
    }];

    // (current) cheapest known cost from start to this node
    let mut shortest_costs = FxHashMap::from_iter([(start.clone(), Distance::ZERO)]);

    // nodes whose minimum cost is final and will not be expanded again
    let mut settled = FxHashSet::default();

    // priority queue of candidate routes, the cheapest one is popped first
    let mut frontier = RadixHeapMap::new();
    frontier.push(Reverse(Distance::ZERO), 0);

    while let Some((Reverse(cost), index)) = frontier.pop() {
        let node = arena[index].node.clone();

        if !settled.insert(node.clone()) {
            // a cheaper (or as cheap) route already reached this node
            continue;
        }

        if &node == end {
            return Ok(Some(unpack_route(&arena, index)));
        }

        for edge in graph.outgoing_edges(&node)? {
            let child = edge.destination();
            if settled.contains(child) {
                continue;
            }

            let weight = *edge.label();
            let candidate_cost = cost + weight;
            if candidate_cost > config.max_cost {
                continue;
            }

            // check if we can follow the current route to reach the child in a cheaper way,
            // an unknown cost is worse than any candidate including an infinite one
            let improves = shortest_costs
                .get(child)
                .is_none_or(|&shortest_cost| candidate_cost < shortest_cost);
            if improves {
                trace!("Relaxing {node:?} -> {child:?}: {candidate_cost}");
                shortest_costs.insert(child.clone(), candidate_cost);

                arena.push(HopRecord {
                    node: child.clone(),
                    weight,
                    parent: Some(index),
                });
                frontier.push(Reverse(candidate_cost), arena.len() - 1);
            }
        }
    }

    debug!("Cannot find route {start:?} -> {end:?}");
    Ok(None)
}

/// Unpacks the candidate route from its last hop back to the start node.
fn unpack_route<N: Clone>(arena: &[HopRecord<N>], destination: usize) -> Route<N> {
    let mut hops = vec![];
    let mut next = destination;

    while let Some(parent) = arena[next].parent {
        let record = &arena[next];
        hops.push(Hop {
            node: record.node.clone(),
            weight: record.weight,
        });
        next = parent;
    }

    hops.reverse();
    Route::from_hops(arena[next].node.clone(), hops)
}
