use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{GraphError, LabeledGraph};

/// One step of a connection: the edge labeled `label` followed from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link<N, L> {
    pub from: N,
    pub to: N,
    pub label: L,
}

/// Finds a connection from start to end that uses the fewest edges, regardless of their labels.
///
/// Among all the connections with the fewest edges, returns the one whose sequence of
/// (destination, label) steps is lexicographically least. Returns an empty connection if start
/// and end are the same node, and `Ok(None)` if end cannot be reached from start.
pub fn shortest_connection<N, L>(
    graph: &LabeledGraph<N, L>,
    start: &N,
    end: &N,
) -> Result<Option<Vec<Link<N, L>>>, GraphError<N, L>>
where
    N: Debug + Clone + Ord + Hash,
    L: Debug + Clone + Ord + Hash,
{
    graph.ensure_node(start)?;
    graph.ensure_node(end)?;

    debug!("Computing shortest connection {start:?} -> {end:?}");

    // the link used to discover each node, the start node has none
    let mut previous: FxHashMap<N, Option<(N, L)>> = FxHashMap::from_iter([(start.clone(), None)]);
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(node) = queue.pop_front() {
        if &node == end {
            return Ok(Some(unpack_links(&previous, end)));
        }

        let mut edges: Vec<_> = graph.outgoing_edges(&node)?.collect();
        edges.sort_unstable();

        for edge in edges {
            let child = edge.destination();
            if previous.contains_key(child) {
                continue;
            }

            previous.insert(child.clone(), Some((node.clone(), edge.label().clone())));
            queue.push_back(child.clone());
        }
    }

    debug!("Cannot find connection {start:?} -> {end:?}");
    Ok(None)
}

/// Unpacks the connection from end back to the start node.
fn unpack_links<N, L>(previous: &FxHashMap<N, Option<(N, L)>>, end: &N) -> Vec<Link<N, L>>
where
    N: Clone + Eq + Hash,
    L: Clone,
{
    let mut links = vec![];
    let mut next = end.clone();

    while let Some(Some((from, label))) = previous.get(&next) {
        links.push(Link {
            from: from.clone(),
            to: next,
            label: label.clone(),
        });
        next = from.clone();
    }

    links.reverse();
    links
}
