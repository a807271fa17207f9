use crate::error::{ErrorKind, Result};
use crate::index::VertexId;
use crate::interface::{Arc, Edge, Vertex};
use std::collections::{BTreeMap, BTreeSet};

/// Maps each vertex id to its vertex.
pub type VertexDictionary<Key> = BTreeMap<VertexId, Vertex<Key>>;
/// Maps each vertex id to a set of arcs.
pub type AdjacencyMap<Weight> = BTreeMap<VertexId, BTreeSet<Arc<Weight>>>;

/// The storage shared by directed and undirected graphs.
///
/// The concrete graph types decide how an accepted edge is spread over `adjacency` and `inverse_adjacency`,
/// everything else is common.
#[derive(Debug, Clone)]
pub struct GraphStructure<Key, Weight> {
    pub(crate) dictionary: VertexDictionary<Key>,
    pub(crate) edge_set: BTreeSet<Edge<Weight>>,
    pub(crate) adjacency: AdjacencyMap<Weight>,
    pub(crate) inverse_adjacency: AdjacencyMap<Weight>,
    pub(crate) arc_count: usize,
}

impl<Key, Weight> Default for GraphStructure<Key, Weight> {
    fn default() -> Self {
        Self {
            dictionary: Default::default(),
            edge_set: Default::default(),
            adjacency: Default::default(),
            inverse_adjacency: Default::default(),
            arc_count: 0,
        }
    }
}

impl<Key, Weight> GraphStructure<Key, Weight> {
    /// Inserts the vertex along with an empty adjacency entry,
    /// and also an empty inverse adjacency entry if `with_inverse` is set.
    pub(crate) fn insert_vertex(&mut self, vertex: Vertex<Key>, with_inverse: bool) -> Result<()> {
        let id = vertex.id();
        if self.dictionary.contains_key(&id) {
            return Err(ErrorKind::DuplicateVertex(id).into());
        }
        debug_assert!(!self.adjacency.contains_key(&id));
        debug_assert!(!self.inverse_adjacency.contains_key(&id));

        self.dictionary.insert(id, vertex);
        self.adjacency.insert(id, BTreeSet::new());
        if with_inverse {
            self.inverse_adjacency.insert(id, BTreeSet::new());
        }
        Ok(())
    }

    /// Checks that the edge is no self loop and that both endpoints exist.
    pub(crate) fn validate_edge(&self, edge: &Edge<Weight>) -> Result<()> {
        if edge.is_self_loop() {
            return Err(ErrorKind::SelfLoop(edge.start_id()).into());
        }
        for id in [edge.start_id(), edge.end_id()].iter() {
            if !self.dictionary.contains_key(id) {
                return Err(ErrorKind::UnknownVertex(*id).into());
            }
        }
        Ok(())
    }

    /// Returns true if `adjacency[from]` contains an arc to `to`.
    pub(crate) fn has_adjacent_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .map_or(false, |arcs| arcs.iter().any(|arc| arc.id() == to))
    }

    pub(crate) fn replace_key(&mut self, id: VertexId, key: Key) -> bool {
        match self.dictionary.get_mut(&id) {
            Some(vertex) => {
                vertex.set_key(key);
                true
            }
            None => false,
        }
    }
}

/// Stores the arc `from -> to` in the given map.
/// Returns false if the map already contained it.
pub(crate) fn insert_arc<Weight: Copy>(
    map: &mut AdjacencyMap<Weight>,
    from: VertexId,
    to: VertexId,
    weight: Weight,
) -> bool {
    map.entry(from)
        .or_insert_with(BTreeSet::new)
        .insert(Arc::new(to, weight, from))
}

impl<Key, Weight> GraphStructure<Key, Weight> {
    /// Records an edge whose arcs were all inserted.
    pub(crate) fn accept_edge(&mut self, edge: Edge<Weight>) {
        let inserted = self.edge_set.insert(edge);
        debug_assert!(inserted, "Accepted an edge twice");
        self.arc_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{insert_arc, AdjacencyMap, GraphStructure};
    use crate::interface::{Edge, Vertex};

    #[test]
    fn test_insert_arc_creates_missing_sets() {
        let mut map = AdjacencyMap::<u16>::new();
        assert!(insert_arc(&mut map, 3, 4, 2));
        assert!(!insert_arc(&mut map, 3, 4, 9));
        assert!(insert_arc(&mut map, 4, 3, 2));

        let arcs = &map[&3];
        assert_eq!(arcs.len(), 1);
        let arc = arcs.iter().next().unwrap();
        assert_eq!((arc.from_id(), arc.id(), *arc.weight()), (3, 4, 2));
        assert_eq!(map[&4].len(), 1);
    }

    #[test]
    fn test_edge_insertion_through_structure() {
        let mut structure = GraphStructure::<&str, i64>::default();
        structure.insert_vertex(Vertex::new(0, "a"), true).unwrap();
        structure.insert_vertex(Vertex::new(1, "b"), true).unwrap();
        assert!(structure.insert_vertex(Vertex::new(1, "c"), true).is_err());

        let edge = Edge::new(0, 1, -5);
        structure.validate_edge(&edge).unwrap();
        assert!(insert_arc(&mut structure.adjacency, 0, 1, -5));
        assert!(insert_arc(&mut structure.inverse_adjacency, 1, 0, -5));
        structure.accept_edge(edge);

        assert!(structure.has_adjacent_arc(0, 1));
        assert!(!structure.has_adjacent_arc(1, 0));
        assert_eq!(structure.arc_count, 1);
        assert!(structure.validate_edge(&Edge::new(0, 0, 1)).is_err());
        assert!(structure.validate_edge(&Edge::new(0, 2, 1)).is_err());
        assert!(structure.replace_key(1, "d"));
        assert_eq!(structure.dictionary[&1].key(), &"d");
    }
}
