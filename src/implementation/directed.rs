use crate::error::{ErrorKind, Result};
use crate::implementation::structure::insert_arc;
use crate::implementation::{AdjacencyMap, GraphStructure, VertexDictionary};
use crate::index::VertexId;
use crate::interface::{Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer, Vertex};
use num_traits::Num;
use std::collections::BTreeSet;

/// A directed graph.
///
/// An accepted edge `(s, e)` is stored as an arc to `e` in the adjacency of `s`,
/// and as an arc to `s` in the inverse adjacency of `e`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<Key, Weight> {
    structure: GraphStructure<Key, Weight>,
}

impl<Key, Weight> Default for DirectedGraph<Key, Weight> {
    fn default() -> Self {
        Self {
            structure: Default::default(),
        }
    }
}

impl<Key: Ord, Weight: Num + Copy> DirectedGraph<Key, Weight> {
    /// Creates an empty directed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new graph with the same vertices in which every accepted edge points the other way.
    pub fn reverse(&self) -> Self
    where
        Key: Clone,
    {
        Self::from_vertices_and_edges(
            self.structure.dictionary.values().cloned(),
            self.structure.edge_set.iter().map(|edge| edge.reversed()),
        )
    }
}

impl<Key: Ord, Weight: Num + Copy> GraphBase for DirectedGraph<Key, Weight> {
    type VertexKey = Key;
    type Weight = Weight;
}

impl<Key: Ord, Weight: Num + Copy> ImmutableGraphContainer for DirectedGraph<Key, Weight> {
    fn vertex_dictionary(&self) -> &VertexDictionary<Key> {
        &self.structure.dictionary
    }

    fn edge_set(&self) -> &BTreeSet<Edge<Weight>> {
        &self.structure.edge_set
    }

    fn adjacency(&self) -> &AdjacencyMap<Weight> {
        &self.structure.adjacency
    }

    fn inverse_adjacency(&self) -> &AdjacencyMap<Weight> {
        &self.structure.inverse_adjacency
    }

    fn arc_count(&self) -> usize {
        self.structure.arc_count
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl<Key: Ord, Weight: Num + Copy> MutableGraphContainer for DirectedGraph<Key, Weight> {
    fn try_add_vertex(&mut self, vertex: Vertex<Key>) -> Result<()> {
        self.structure.insert_vertex(vertex, true)
    }

    fn try_add_edge(&mut self, edge: Edge<Weight>) -> Result<()> {
        self.structure.validate_edge(&edge)?;
        let (start, end, weight) = (edge.start_id(), edge.end_id(), *edge.weight());
        if self.structure.has_adjacent_arc(start, end) {
            return Err(ErrorKind::DuplicateEdge(start, end).into());
        }

        let forward = insert_arc(&mut self.structure.adjacency, start, end, weight);
        let backward = insert_arc(&mut self.structure.inverse_adjacency, end, start, weight);
        debug_assert!(
            forward && backward,
            "Adjacency and inverse adjacency disagree on ({}, {})",
            start,
            end
        );

        self.structure.accept_edge(edge);
        Ok(())
    }

    fn set_vertex_key(&mut self, id: VertexId, key: Key) -> bool {
        self.structure.replace_key(id, key)
    }
}

impl<Key, Weight> PartialEq for DirectedGraph<Key, Weight> {
    fn eq(&self, other: &Self) -> bool {
        self.structure.adjacency == other.structure.adjacency
            && self.structure.inverse_adjacency == other.structure.inverse_adjacency
    }
}

impl<Key, Weight> Eq for DirectedGraph<Key, Weight> {}

#[cfg(test)]
mod tests {
    use super::DirectedGraph;
    use crate::error::ErrorKind;
    use crate::interface::{Edge, ImmutableGraphContainer, MutableGraphContainer, Vertex};
    use crate::testing::tiny_directed_graph;

    fn path_graph() -> DirectedGraph<i32, i32> {
        DirectedGraph::from_vertices_and_edges(
            (0..4).map(|id| Vertex::new(id, id as i32)),
            vec![Edge::new(0, 1, 5), Edge::new(1, 2, 6), Edge::new(2, 3, 7)],
        )
    }

    #[test]
    fn test_accepted_edge_is_stored_on_both_sides() {
        let graph = path_graph();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.arc_count(), 3);
        assert_eq!(graph.edge_set().len(), 3);

        for edge in graph.edge_set() {
            let (start, end) = (edge.start_id(), edge.end_id());
            assert!(graph.out_neighbors(start).any(|id| id == end));
            assert!(graph.in_neighbors(end).any(|id| id == start));
            let arc = graph
                .out_arcs(start)
                .and_then(|arcs| arcs.iter().find(|arc| arc.id() == end))
                .unwrap();
            assert_eq!(arc.from_id(), start);
            assert_eq!(arc.weight(), edge.weight());
            let inverse_arc = graph.in_arcs(end).unwrap().iter().next().unwrap();
            assert_eq!(inverse_arc.id(), start);
            assert_eq!(inverse_arc.from_id(), end);
        }

        assert_eq!(graph.out_neighbors(3).count(), 0);
        assert_eq!(graph.in_neighbors(0).count(), 0);
        assert!(graph.contains_arc(0, 1));
        assert!(!graph.contains_arc(1, 0));
    }

    #[test]
    fn test_rejected_edges_leave_graph_unchanged() {
        let mut graph = path_graph();
        let before = graph.clone();

        assert!(!graph.add_edge(Edge::new(2, 2, 1)));
        assert!(!graph.add_edge(Edge::new(2, 9, 1)));
        assert!(!graph.add_edge(Edge::new(9, 2, 1)));
        assert!(!graph.add_edge(Edge::new(0, 1, 100)));

        assert_eq!(graph, before);
        assert_eq!(graph.arc_count(), 3);
        assert_eq!(graph.edge_set().len(), 3);
        assert_eq!(graph.out_arcs(0).unwrap().iter().next().unwrap().weight(), &5);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut graph = path_graph();
        match graph.try_add_edge(Edge::new(1, 1, 1)).unwrap_err().kind() {
            ErrorKind::SelfLoop(1) => {}
            other => panic!("unexpected error {:?}", other),
        }
        match graph.try_add_edge(Edge::new(1, 42, 1)).unwrap_err().kind() {
            ErrorKind::UnknownVertex(42) => {}
            other => panic!("unexpected error {:?}", other),
        }
        match graph.try_add_edge(Edge::new(2, 3, 1)).unwrap_err().kind() {
            ErrorKind::DuplicateEdge(2, 3) => {}
            other => panic!("unexpected error {:?}", other),
        }
        match graph.try_add_vertex(Vertex::new(0, 0)).unwrap_err().kind() {
            ErrorKind::DuplicateVertex(0) => {}
            other => panic!("unexpected error {:?}", other),
        }
        // The opposite direction is a different edge.
        assert!(graph.try_add_edge(Edge::new(3, 2, 1)).is_ok());
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = DirectedGraph::<&str, f64>::new();
        assert!(graph.add_vertex(Vertex::new(7, "x")));
        assert!(!graph.add_vertex(Vertex::new(7, "y")));
        assert_eq!(graph.vertex(7).map(Vertex::key), Some(&"x"));
        assert!(graph.set_vertex_key(7, "z"));
        assert!(!graph.set_vertex_key(8, "z"));
        assert_eq!(graph.vertex(7).map(Vertex::key), Some(&"z"));

        // Isolated vertices still own empty arc sets in both directions.
        assert!(graph.out_arcs(7).unwrap().is_empty());
        assert!(graph.in_arcs(7).unwrap().is_empty());
    }

    #[test]
    fn test_edges_with_unknown_endpoints_are_dropped_during_construction() {
        let graph: DirectedGraph<(), u8> = DirectedGraph::from_vertices_and_edges(
            vec![Vertex::new(1, ()), Vertex::new(2, ())],
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)],
        );
        assert_eq!(graph.arc_count(), 1);
        assert!(!graph.contains_vertex(3));
    }

    #[test]
    fn test_payload_free_construction() {
        let mut graph = DirectedGraph::<(), u32>::new();
        for id in 0..3 {
            assert!(graph.add_vertex_by_id(id));
        }
        assert!(graph.add_edge_between(0, 1));
        assert!(graph.add_edge_between(1, 2));
        assert!(!graph.add_edge_between(1, 2));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.arc_count(), 2);
        assert_eq!(graph.out_arcs(0).unwrap().iter().next().unwrap().weight(), &1);
    }

    #[test]
    fn test_reverse() {
        let graph = tiny_directed_graph();
        let reversed = graph.reverse();
        assert_eq!(reversed.vertex_count(), graph.vertex_count());
        assert_eq!(reversed.arc_count(), graph.arc_count());
        assert_ne!(reversed, graph);

        for edge in graph.edge_set() {
            assert!(reversed.contains_arc(edge.end_id(), edge.start_id()));
        }
        assert_eq!(reversed.adjacency(), graph.inverse_adjacency());
        assert_eq!(reversed.reverse(), graph);
        assert_eq!(reversed.reverse().adjacency(), graph.adjacency());
    }

    #[test]
    fn test_arc_count_is_consistent() {
        let graph = tiny_directed_graph();
        assert_eq!(graph.arc_count(), 24);
        assert_eq!(graph.recalculate_arc_count(), 24);
        assert!(graph.verify_arc_count().is_ok());
    }
}
