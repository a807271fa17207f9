use crate::index::VertexId;
use num_traits::One;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A vertex of a graph.
/// Two vertices are equal if their ids are equal, the key does not take part in identity.
#[derive(Debug, Clone)]
pub struct Vertex<Key> {
    id: VertexId,
    key: Key,
}

impl<Key> Vertex<Key> {
    /// Creates a new vertex with the given id and key.
    pub fn new(id: VertexId, key: Key) -> Self {
        Self { id, key }
    }

    /// Returns the id of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the key of this vertex.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Replaces the key of this vertex.
    pub fn set_key(&mut self, key: Key) {
        self.key = key;
    }
}

impl<Key> PartialEq for Vertex<Key> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Key> Eq for Vertex<Key> {}

impl<Key> Hash for Vertex<Key> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An edge as given by the caller, not yet validated against a graph.
/// Two edges are equal if their endpoints are equal, the weight does not take part in identity.
#[derive(Debug, Clone, Copy)]
pub struct Edge<Weight> {
    start_id: VertexId,
    end_id: VertexId,
    weight: Weight,
}

impl<Weight> Edge<Weight> {
    /// Creates a new edge `(start_id, end_id)` with the given weight.
    pub fn new(start_id: VertexId, end_id: VertexId, weight: Weight) -> Self {
        Self {
            start_id,
            end_id,
            weight,
        }
    }

    /// Creates a new edge `(start_id, end_id)` of weight one.
    pub fn unit(start_id: VertexId, end_id: VertexId) -> Self
    where
        Weight: One,
    {
        Self::new(start_id, end_id, Weight::one())
    }

    /// Returns the tail of this edge.
    pub fn start_id(&self) -> VertexId {
        self.start_id
    }

    /// Returns the head of this edge.
    pub fn end_id(&self) -> VertexId {
        self.end_id
    }

    /// Returns the weight of this edge.
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Replaces the weight of this edge.
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.start_id == self.end_id
    }

    /// Returns this edge with its endpoints swapped.
    pub fn reversed(self) -> Self {
        Self::new(self.end_id, self.start_id, self.weight)
    }

    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.start_id, self.end_id)
    }
}

impl<Weight> PartialEq for Edge<Weight> {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl<Weight> Eq for Edge<Weight> {}

impl<Weight> PartialOrd for Edge<Weight> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Weight> Ord for Edge<Weight> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.endpoints().cmp(&other.endpoints())
    }
}

impl<Weight> Hash for Edge<Weight> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

/// A validated adjacency entry, created by a graph when it accepts an [Edge](Edge).
///
/// In an adjacency set, `from_id` is the vertex owning the set and `id` is the neighbor.
/// In an inverse adjacency set, `from_id` is the head of the original edge and `id` its tail.
/// Two arcs are equal if `(from_id, id)` are equal.
#[derive(Debug, Clone, Copy)]
pub struct Arc<Weight> {
    id: VertexId,
    weight: Weight,
    from_id: VertexId,
}

impl<Weight> Arc<Weight> {
    pub(crate) fn new(id: VertexId, weight: Weight, from_id: VertexId) -> Self {
        Self {
            id,
            weight,
            from_id,
        }
    }

    /// Returns the neighbor this arc points to.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the weight of the edge this arc was created from.
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Returns the vertex this arc is stored at.
    pub fn from_id(&self) -> VertexId {
        self.from_id
    }

    fn key(&self) -> (VertexId, VertexId) {
        (self.from_id, self.id)
    }
}

impl<Weight> PartialEq for Arc<Weight> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<Weight> Eq for Arc<Weight> {}

impl<Weight> PartialOrd for Arc<Weight> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Weight> Ord for Arc<Weight> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<Weight> Hash for Arc<Weight> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::{Arc, Edge, Vertex};
    use std::collections::BTreeSet;

    #[test]
    fn test_vertex_identity_ignores_key() {
        let mut vertex = Vertex::new(3, "a");
        assert_eq!(vertex, Vertex::new(3, "b"));
        assert_ne!(vertex, Vertex::new(4, "a"));
        vertex.set_key("c");
        assert_eq!(vertex.key(), &"c");
        assert_eq!(vertex.id(), 3);
    }

    #[test]
    fn test_edge_identity_ignores_weight() {
        let mut edge = Edge::new(1, 2, 0.5);
        assert_eq!(edge, Edge::new(1, 2, 7.0));
        assert_ne!(edge, Edge::new(2, 1, 0.5));
        edge.set_weight(2.5);
        assert_eq!(edge.weight(), &2.5);
        assert_eq!(edge.reversed(), Edge::new(2, 1, 0.0));
        assert!(Edge::<i32>::unit(4, 4).is_self_loop());
        assert_eq!(Edge::<i32>::unit(4, 5).weight(), &1);
    }

    #[test]
    fn test_arc_set_deduplicates_by_endpoints() {
        let mut arcs = BTreeSet::new();
        assert!(arcs.insert(Arc::new(2, 10, 1)));
        assert!(!arcs.insert(Arc::new(2, 20, 1)));
        assert!(arcs.insert(Arc::new(1, 10, 2)));
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs.iter().next().map(|arc| *arc.weight()), Some(10));
    }
}
