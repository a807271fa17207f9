use crate::error::{ErrorKind, Result};
use crate::implementation::structure::insert_arc;
use crate::implementation::{AdjacencyMap, GraphStructure, VertexDictionary};
use crate::index::VertexId;
use crate::interface::{Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer, Vertex};
use num_traits::Num;
use std::collections::BTreeSet;

/// An undirected graph.
///
/// An accepted edge `(s, e)` is stored as an arc to `e` in the adjacency of `s` and as an arc to `s` in the adjacency of `e`.
/// The inverse adjacency stays empty.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Key, Weight> {
    structure: GraphStructure<Key, Weight>,
}

impl<Key, Weight> Default for UndirectedGraph<Key, Weight> {
    fn default() -> Self {
        Self {
            structure: Default::default(),
        }
    }
}

impl<Key: Ord, Weight: Num + Copy> UndirectedGraph<Key, Weight> {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Key: Ord, Weight: Num + Copy> GraphBase for UndirectedGraph<Key, Weight> {
    type VertexKey = Key;
    type Weight = Weight;
}

impl<Key: Ord, Weight: Num + Copy> ImmutableGraphContainer for UndirectedGraph<Key, Weight> {
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
        false
    }
}

impl<Key: Ord, Weight: Num + Copy> MutableGraphContainer for UndirectedGraph<Key, Weight> {
    fn try_add_vertex(&mut self, vertex: Vertex<Key>) -> Result<()> {
        self.structure.insert_vertex(vertex, false)
    }

    fn try_add_edge(&mut self, edge: Edge<Weight>) -> Result<()> {
        self.structure.validate_edge(&edge)?;
        let (start, end, weight) = (edge.start_id(), edge.end_id(), *edge.weight());
        if self.structure.has_adjacent_arc(start, end) {
            return Err(ErrorKind::DuplicateEdge(start, end).into());
        }

        let adjacency = &mut self.structure.adjacency;
        let forward = insert_arc(adjacency, start, end, weight);
        let backward = insert_arc(adjacency, end, start, weight);
        debug_assert!(
            forward && backward,
            "Adjacency is asymmetric on ({}, {})",
            start,
            end
        );
        debug_assert!(self.structure.inverse_adjacency.is_empty());

        self.structure.accept_edge(edge);
        Ok(())
    }

    fn set_vertex_key(&mut self, id: VertexId, key: Key) -> bool {
        self.structure.replace_key(id, key)
    }
}

impl<Key, Weight> PartialEq for UndirectedGraph<Key, Weight> {
    fn eq(&self, other: &Self) -> bool {
        self.structure.adjacency == other.structure.adjacency
    }
}

impl<Key, Weight> Eq for UndirectedGraph<Key, Weight> {}
