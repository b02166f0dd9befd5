use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::{Distance, GraphError, LabeledGraph, Point};

/// Piece of a walkway between two map locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub distance: Distance,
}

/// Builds the graph of members that appear together in the same context, e.g. comic book
/// characters appearing in the same book.
///
/// Every record is a (context, member) pair. Every member becomes a node, and every two distinct
/// members that share a context are connected in both directions by edges labeled with that
/// context. Members are never connected to themselves.
pub fn co_occurrence_graph<N, L>(
    records: impl IntoIterator<Item = (L, N)>,
) -> Result<LabeledGraph<N, L>, GraphError<N, L>>
where
    N: Debug + Clone + Ord + Hash,
    L: Debug + Clone + Ord + Hash,
{
    let mut contexts: BTreeMap<L, BTreeSet<N>> = BTreeMap::new();
    for (context, member) in records {
        contexts.entry(context).or_default().insert(member);
    }

    let mut graph = LabeledGraph::new();

    for (context, members) in contexts {
        for member in &members {
            graph.add_node(member.clone());
        }

        for (i, parent) in members.iter().enumerate() {
            for child in members.iter().skip(i + 1) {
                graph.add_edge(parent, child.clone(), context.clone())?;
                graph.add_edge(child, parent.clone(), context.clone())?;
            }
        }
    }

    debug!(
        "Built co-occurrence graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Builds the graph of walkway segments, where each segment is a directed edge labeled with its
/// distance. Segments that are walkable in both directions must be listed twice.
pub fn campus_graph(
    segments: impl IntoIterator<Item = Segment>,
) -> Result<LabeledGraph<Point, Distance>, GraphError<Point, Distance>> {
    let mut graph = LabeledGraph::new();

    for Segment { from, to, distance } in segments {
        graph.add_node(from);
        graph.add_node(to);
        graph.add_edge(&from, to, distance)?;
    }

    debug!(
        "Built campus graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
