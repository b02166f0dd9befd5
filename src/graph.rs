use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::GraphError;

mod edge;

pub use edge::Edge;

/// Mutable directed labeled multigraph.
///
/// Each node is mapped to the set of its outgoing edges, where an edge is identified by its
/// destination and its label. The graph guarantees that:
/// - every edge destination is itself a node of the graph,
/// - a node never has two outgoing edges with the same destination and the same label.
///
/// Undirected relations are represented by adding one edge in each direction.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N, L> {
    adjacency: FxHashMap<N, FxHashSet<Edge<N, L>>>,
}

impl<N: Eq + Hash, L: Eq + Hash> PartialEq for LabeledGraph<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash, L: Eq + Hash> Eq for LabeledGraph<N, L> {}

impl<N, L> Default for LabeledGraph<N, L> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<N, L> LabeledGraph<N, L>
where
    N: Debug + Clone + Eq + Hash,
    L: Debug + Clone + Eq + Hash,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Adds the node to the graph without any outgoing edge.
    /// Returns false if the node already belongs to the graph, in which case nothing changes.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                trace!("Adding node {:?}", entry.key());
                entry.insert(FxHashSet::default());
                true
            }
        }
    }

    /// Adds a directed edge from parent to child with the given label.
    ///
    /// Returns false if an edge from parent to child with the same label already exists, in which
    /// case the graph is left unchanged. Fails without changing the graph if either the parent or
    /// the child doesn't belong to the graph.
    pub fn add_edge(&mut self, parent: &N, child: N, label: L) -> Result<bool, GraphError<N, L>> {
        self.ensure_node(&child)?;

        let edges = self
            .adjacency
            .get_mut(parent)
            .ok_or_else(|| GraphError::UnknownNode(parent.clone()))?;

        trace!("Adding edge {parent:?} -> {child:?} labeled {label:?}");
        let added = edges.insert(Edge::new(child, label));

        debug_assert!(self.is_consistent());
        Ok(added)
    }

    /// Removes the node and every edge, anywhere in the graph, that enters or exits from it.
    pub fn remove_node(&mut self, node: &N) -> Result<(), GraphError<N, L>> {
        if self.adjacency.remove(node).is_none() {
            return Err(GraphError::UnknownNode(node.clone()));
        }

        trace!("Removing node {node:?}");
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.destination() != node);
        }

        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Removes the edge from parent to child with exactly the given label.
    pub fn remove_edge(&mut self, parent: &N, child: &N, label: &L) -> Result<(), GraphError<N, L>> {
        self.ensure_node(child)?;

        let edges = self
            .adjacency
            .get_mut(parent)
            .ok_or_else(|| GraphError::UnknownNode(parent.clone()))?;

        if !edges.remove(&Edge::new(child.clone(), label.clone())) {
            return Err(GraphError::UnknownEdge {
                parent: parent.clone(),
                child: child.clone(),
                label: label.clone(),
            });
        }

        trace!("Removed edge {parent:?} -> {child:?} labeled {label:?}");
        Ok(())
    }

    /// Gets an iterator over all the edges exiting from the parent node.
    pub fn outgoing_edges<'a>(
        &'a self,
        parent: &N,
    ) -> Result<impl Iterator<Item = &'a Edge<N, L>> + use<'a, N, L>, GraphError<N, L>> {
        self.edges_of(parent).map(|edges| edges.iter())
    }

    /// Gets an iterator over the labels of all the edges that go from parent directly to child.
    /// The iterator is empty if the nodes are not adjacent.
    pub fn labels_between<'a>(
        &'a self,
        parent: &N,
        child: &N,
    ) -> Result<impl Iterator<Item = &'a L> + use<'a, N, L>, GraphError<N, L>> {
        self.ensure_node(child)?;
        let child = child.clone();

        let labels = self
            .edges_of(parent)?
            .iter()
            .filter(move |edge| edge.destination() == &child)
            .map(Edge::label);

        Ok(labels)
    }

    /// Gets an iterator over all the nodes of the graph, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Returns true if there is at least one edge (with any label) from parent to child.
    pub fn is_adjacent(&self, child: &N, parent: &N) -> Result<bool, GraphError<N, L>> {
        self.ensure_node(child)?;
        let adjacent = self
            .edges_of(parent)?
            .iter()
            .any(|edge| edge.destination() == child);
        Ok(adjacent)
    }

    /// Returns true if there is an edge from parent to child with exactly the given label.
    pub fn has_label(&self, parent: &N, child: &N, label: &L) -> Result<bool, GraphError<N, L>> {
        self.ensure_node(child)?;
        let edge = Edge::new(child.clone(), label.clone());
        Ok(self.edges_of(parent)?.contains(&edge))
    }

    pub fn has_edge(&self, parent: &N, edge: &Edge<N, L>) -> Result<bool, GraphError<N, L>> {
        self.has_label(parent, edge.destination(), edge.label())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub(crate) fn ensure_node(&self, node: &N) -> Result<(), GraphError<N, L>> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node.clone()))
        }
    }

    fn edges_of(&self, node: &N) -> Result<&FxHashSet<Edge<N, L>>, GraphError<N, L>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// Every edge must point to a node that belongs to the graph.
    fn is_consistent(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .all(|edge| self.adjacency.contains_key(edge.destination()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;

    type Graph = LabeledGraph<&'static str, &'static str>;

    fn graph_abc() -> Graph {
        // A --L1--> B --L1--> C
        // A --L2--> B
        // C --L1--> A
        let mut graph = Graph::new();
        for node in ["A", "B", "C"] {
            assert!(graph.add_node(node));
        }
        assert!(graph.add_edge(&"A", "B", "L1").unwrap());
        assert!(graph.add_edge(&"A", "B", "L2").unwrap());
        assert!(graph.add_edge(&"B", "C", "L1").unwrap());
        assert!(graph.add_edge(&"C", "A", "L1").unwrap());
        graph
    }

    fn labels(graph: &Graph, parent: &'static str, child: &'static str) -> BTreeSet<&'static str> {
        graph
            .labels_between(&parent, &child)
            .unwrap()
            .copied()
            .collect()
    }

    #[test]
    fn labeled_graph_add_node_001() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        assert!(!graph.has_node(&"A"));

        assert!(graph.add_node("A"));
        assert!(graph.has_node(&"A"));
        assert_eq!(graph.outgoing_edges(&"A").unwrap().count(), 0);
    }

    #[test]
    fn labeled_graph_add_node_002() {
        let mut once = Graph::new();
        once.add_node("A");

        let mut twice = Graph::new();
        assert!(twice.add_node("A"));
        assert!(!twice.add_node("A"));

        assert_eq!(once, twice);
        assert_eq!(twice.node_count(), 1);
    }

    #[test]
    fn labeled_graph_add_edge_001() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("B");

        assert!(graph.add_edge(&"A", "B", "L").unwrap());
        assert!(!graph.add_edge(&"A", "B", "L").unwrap());

        assert_eq!(graph.labels_between(&"A", &"B").unwrap().count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn labeled_graph_add_edge_002() {
        let graph = graph_abc();

        assert_eq!(labels(&graph, "A", "B"), BTreeSet::from(["L1", "L2"]));
        assert_eq!(labels(&graph, "B", "A"), BTreeSet::new());
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn labeled_graph_add_edge_003() {
        let mut graph = graph_abc();
        let before = graph.clone();

        assert_eq!(
            graph.add_edge(&"X", "A", "L"),
            Err(GraphError::UnknownNode("X"))
        );
        assert_eq!(
            graph.add_edge(&"A", "X", "L"),
            Err(GraphError::UnknownNode("X"))
        );
        assert_eq!(graph, before, "failed insertions must not change the graph");
    }

    #[test]
    fn labeled_graph_add_edge_004() {
        let mut graph = Graph::new();
        graph.add_node("A");

        assert!(graph.add_edge(&"A", "A", "self").unwrap());
        assert!(graph.is_adjacent(&"A", &"A").unwrap());
        assert_eq!(labels(&graph, "A", "A"), BTreeSet::from(["self"]));
    }

    #[test]
    fn labeled_graph_remove_node_001() {
        let mut graph = graph_abc();
        graph.remove_node(&"B").unwrap();

        assert!(!graph.has_node(&"B"));
        assert_eq!(graph.nodes().copied().collect::<BTreeSet<_>>(), BTreeSet::from(["A", "C"]));
        assert_eq!(graph.outgoing_edges(&"A").unwrap().count(), 0);
        assert_eq!(
            graph.outgoing_edges(&"C").unwrap().collect::<Vec<_>>(),
            vec![&Edge::new("A", "L1")]
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn labeled_graph_remove_node_002() {
        let mut graph = graph_abc();
        assert_eq!(graph.remove_node(&"X"), Err(GraphError::UnknownNode("X")));

        graph.add_node("D");
        graph.remove_node(&"D").unwrap();
        assert_eq!(graph, graph_abc());
    }

    #[test]
    fn labeled_graph_remove_edge_001() {
        let mut graph = graph_abc();
        graph.remove_edge(&"A", &"B", &"L1").unwrap();

        assert_eq!(labels(&graph, "A", "B"), BTreeSet::from(["L2"]));
        assert!(graph.is_adjacent(&"B", &"A").unwrap());

        graph.remove_edge(&"A", &"B", &"L2").unwrap();
        assert!(!graph.is_adjacent(&"B", &"A").unwrap());
    }

    #[test]
    fn labeled_graph_remove_edge_002() {
        let mut graph = graph_abc();

        assert_eq!(
            graph.remove_edge(&"A", &"B", &"L3"),
            Err(GraphError::UnknownEdge {
                parent: "A",
                child: "B",
                label: "L3"
            })
        );
        assert_eq!(
            graph.remove_edge(&"A", &"X", &"L1"),
            Err(GraphError::UnknownNode("X"))
        );
        assert_eq!(
            graph.remove_edge(&"X", &"A", &"L1"),
            Err(GraphError::UnknownNode("X"))
        );
        assert_eq!(graph, graph_abc());
    }

    #[test]
    fn labeled_graph_queries_001() {
        let graph = graph_abc();

        assert!(graph.is_adjacent(&"B", &"A").unwrap());
        assert!(!graph.is_adjacent(&"A", &"B").unwrap());
        assert!(graph.has_label(&"A", &"B", &"L2").unwrap());
        assert!(!graph.has_label(&"B", &"C", &"L2").unwrap());
        assert!(graph.has_edge(&"C", &Edge::new("A", "L1")).unwrap());

        let mut edges: Vec<_> = graph.outgoing_edges(&"A").unwrap().cloned().collect();
        edges.sort();
        assert_eq!(edges, vec![Edge::new("B", "L1"), Edge::new("B", "L2")]);
    }

    #[test]
    fn labeled_graph_queries_002() {
        let graph = graph_abc();

        assert!(matches!(
            graph.outgoing_edges(&"X"),
            Err(GraphError::UnknownNode("X"))
        ));
        assert!(matches!(
            graph.labels_between(&"A", &"X"),
            Err(GraphError::UnknownNode("X"))
        ));
        assert!(matches!(
            graph.labels_between(&"X", &"A"),
            Err(GraphError::UnknownNode("X"))
        ));
        assert_eq!(graph.is_adjacent(&"X", &"A"), Err(GraphError::UnknownNode("X")));
        assert_eq!(graph.is_adjacent(&"A", &"X"), Err(GraphError::UnknownNode("X")));
        assert_eq!(
            graph.has_label(&"A", &"X", &"L1"),
            Err(GraphError::UnknownNode("X"))
        );
    }

    #[test]
    fn labeled_graph_queries_003() {
        let graph = graph_abc();

        // collected results are detached from the graph
        let mut nodes: Vec<_> = graph.nodes().copied().collect();
        nodes.clear();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }
}
